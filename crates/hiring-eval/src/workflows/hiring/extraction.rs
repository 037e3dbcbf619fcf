//! Pattern-based resume feature extraction.
//!
//! The keyword tables live in [`SkillCatalog`] so a richer extractor can replace them without
//! touching the scorers. Extraction is total: any internal fault degrades to
//! [`Features::unavailable`].

use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{CandidateProfile, EducationLevel, Features};

const EXPERIENCE_PATTERN: &str = r"([0-9]+)\s*(?:years?|yrs?)";
const LOCATION_PATTERN: &str = r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*),\s*([A-Z]{2})";
const UNKNOWN_LOCATION: &str = "Unknown";

/// Education keywords in priority order; the first one found in the text wins.
const EDUCATION_KEYWORDS: [(&str, EducationLevel); 5] = [
    ("phd", EducationLevel::Phd),
    ("masters", EducationLevel::Masters),
    ("bachelor", EducationLevel::Bachelor),
    ("associate", EducationLevel::Associate),
    ("high school", EducationLevel::HighSchool),
];

/// Named keyword group matched as whole words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

impl SkillCategory {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|kw| kw.to_lowercase()).collect(),
        }
    }
}

/// Keyword tables used for skill extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub categories: Vec<SkillCategory>,
}

// "c++" never matches: the trailing `\b` needs a word character after the `+`.
impl Default for SkillCatalog {
    fn default() -> Self {
        Self {
            categories: vec![
                SkillCategory::new(
                    "programming",
                    &[
                        "python",
                        "java",
                        "c++",
                        "javascript",
                        "react",
                        "node.js",
                        "sql",
                        "aws",
                        "docker",
                        "kubernetes",
                    ],
                ),
                SkillCategory::new(
                    "soft_skills",
                    &[
                        "leadership",
                        "communication",
                        "teamwork",
                        "problem-solving",
                        "analytical",
                        "creative",
                    ],
                ),
                SkillCategory::new(
                    "tools",
                    &[
                        "git",
                        "jira",
                        "confluence",
                        "slack",
                        "zoom",
                        "teams",
                        "figma",
                        "photoshop",
                    ],
                ),
                SkillCategory::new(
                    "certifications",
                    &[
                        "certified",
                        "certification",
                        "cert",
                        "aws",
                        "azure",
                        "google",
                        "microsoft",
                    ],
                ),
            ],
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ExtractionFault {
    #[error("pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone)]
struct CompiledPatterns {
    categories: Vec<Regex>,
    experience: Regex,
    location: Regex,
}

impl CompiledPatterns {
    fn compile(catalog: &SkillCatalog) -> Result<Self, regex::Error> {
        let categories = catalog
            .categories
            .iter()
            .filter(|category| !category.keywords.is_empty())
            .map(|category| {
                let alternation = category
                    .keywords
                    .iter()
                    .map(|kw| regex::escape(kw))
                    .collect::<Vec<_>>()
                    .join("|");
                Regex::new(&format!(r"\b(?:{alternation})\b"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            categories,
            experience: Regex::new(EXPERIENCE_PATTERN)?,
            location: Regex::new(LOCATION_PATTERN)?,
        })
    }
}

/// Turns free-text resumes into [`Features`].
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    catalog: SkillCatalog,
    patterns: Result<CompiledPatterns, regex::Error>,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(SkillCatalog::default())
    }
}

impl FeatureExtractor {
    pub fn new(catalog: SkillCatalog) -> Self {
        let patterns = CompiledPatterns::compile(&catalog);
        if let Err(err) = &patterns {
            warn!(
                error = %err,
                "skill catalog failed to compile; extraction will fall back to defaults"
            );
        }
        Self { catalog, patterns }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn extract(&self, resume_text: &str) -> Features {
        match self.try_extract(resume_text) {
            Ok(features) => features,
            Err(fault) => {
                warn!(%fault, "resume extraction failed; using default features");
                Features::unavailable()
            }
        }
    }

    /// Returns the profile with extracted features filled in, or `None` when the profile
    /// already carries skills and must be left as recorded.
    pub fn enrich(&self, profile: &CandidateProfile) -> Option<CandidateProfile> {
        if !profile.needs_extraction() {
            return None;
        }
        let features = self.extract(&profile.resume_text);
        Some(profile.clone().with_features(features))
    }

    fn try_extract(&self, resume_text: &str) -> Result<Features, ExtractionFault> {
        let patterns = self.patterns.as_ref().map_err(|err| err.clone())?;
        let lowered = resume_text.to_lowercase();

        let skills: BTreeSet<String> = patterns
            .categories
            .iter()
            .flat_map(|pattern| pattern.find_iter(&lowered))
            .map(|found| found.as_str().to_string())
            .collect();

        // A run of ASCII digits always parses as f64; very long runs saturate to infinity.
        let experience_years = patterns
            .experience
            .captures(&lowered)
            .and_then(|captures| captures[1].parse::<f64>().ok())
            .unwrap_or(0.0);

        let education = EDUCATION_KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, level)| *level)
            .unwrap_or(EducationLevel::Bachelor);

        let location = patterns
            .location
            .find(resume_text)
            .map(|found| found.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

        Ok(Features {
            skills,
            experience_years,
            education,
            location,
        })
    }
}
