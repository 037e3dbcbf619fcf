use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for candidates held by the repository.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered education tiers. `Unknown` ranks with high school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Masters,
    Phd,
    Unknown,
}

impl EducationLevel {
    pub const fn rank(self) -> u8 {
        match self {
            EducationLevel::HighSchool | EducationLevel::Unknown => 1,
            EducationLevel::Associate => 2,
            EducationLevel::Bachelor => 3,
            EducationLevel::Masters => 4,
            EducationLevel::Phd => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high_school",
            EducationLevel::Associate => "associate",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Masters => "masters",
            EducationLevel::Phd => "phd",
            EducationLevel::Unknown => "unknown",
        }
    }

    /// Lenient parse used for free-form input; unrecognized names map to `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "high_school" | "high school" => EducationLevel::HighSchool,
            "associate" => EducationLevel::Associate,
            "bachelor" => EducationLevel::Bachelor,
            "masters" => EducationLevel::Masters,
            "phd" => EducationLevel::Phd,
            _ => EducationLevel::Unknown,
        }
    }

    pub const fn ordered() -> [EducationLevel; 5] {
        [
            EducationLevel::HighSchool,
            EducationLevel::Associate,
            EducationLevel::Bachelor,
            EducationLevel::Masters,
            EducationLevel::Phd,
        ]
    }
}

/// Structured view of a resume produced by the feature extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub skills: BTreeSet<String>,
    pub experience_years: f64,
    pub education: EducationLevel,
    pub location: String,
}

impl Features {
    /// All-defaults value returned when extraction hits an internal fault.
    pub fn unavailable() -> Self {
        Self {
            skills: BTreeSet::new(),
            experience_years: 0.0,
            education: EducationLevel::Unknown,
            location: "unknown".to_string(),
        }
    }
}

/// Candidate record as held by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub resume_text: String,
    pub skills: BTreeSet<String>,
    pub experience_years: f64,
    pub education: EducationLevel,
    pub location: String,
}

impl CandidateProfile {
    pub fn needs_extraction(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.skills = features.skills;
        self.experience_years = features.experience_years;
        self.education = features.education;
        self.location = features.location;
        self
    }
}

/// Inbound candidate payload before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default = "default_education")]
    pub education: EducationLevel,
    #[serde(default)]
    pub location: String,
}

fn default_education() -> EducationLevel {
    EducationLevel::Bachelor
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub low: f64,
    pub high: f64,
}

impl SalaryRange {
    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }
}

/// Posted job requirements read by the evaluation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub department: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_experience_years: f64,
    pub min_education: EducationLevel,
    pub location: String,
    pub salary: SalaryRange,
}

impl JobRequirement {
    /// Text handed to the bias scanner alongside the resume.
    pub fn bias_context(&self) -> String {
        format!("{} {}", self.title, self.company)
    }
}

/// Inbound job payload before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSubmission {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub department: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub min_experience_years: f64,
    #[serde(default = "default_education")]
    pub min_education: EducationLevel,
    #[serde(default)]
    pub location: String,
    pub salary: SalaryRange,
}

/// Lower-case and trim a list of skills into the canonical set form.
pub fn normalize_skills<I, S>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .map(|skill| skill.as_ref().trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}
