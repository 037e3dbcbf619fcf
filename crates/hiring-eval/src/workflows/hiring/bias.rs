use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Keyword groups associated with protected-characteristic bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasCategory {
    Gender,
    Age,
    Location,
    Prestige,
}

impl BiasCategory {
    pub const fn label(self) -> &'static str {
        match self {
            BiasCategory::Gender => "gender",
            BiasCategory::Age => "age",
            BiasCategory::Location => "location",
            BiasCategory::Prestige => "prestige",
        }
    }

    pub const fn ordered() -> [BiasCategory; 4] {
        [
            BiasCategory::Gender,
            BiasCategory::Age,
            BiasCategory::Location,
            BiasCategory::Prestige,
        ]
    }
}

/// Category to keyword mapping consulted by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasKeywordTable {
    pub keywords: BTreeMap<BiasCategory, Vec<String>>,
}

impl BiasKeywordTable {
    fn entry(category: BiasCategory, keywords: &[&str]) -> (BiasCategory, Vec<String>) {
        (
            category,
            keywords.iter().map(|kw| kw.to_lowercase()).collect(),
        )
    }
}

impl Default for BiasKeywordTable {
    fn default() -> Self {
        Self {
            keywords: BTreeMap::from([
                Self::entry(
                    BiasCategory::Gender,
                    &["male", "female", "he", "she", "his", "her"],
                ),
                Self::entry(
                    BiasCategory::Age,
                    &["young", "old", "senior", "junior", "fresh graduate"],
                ),
                Self::entry(
                    BiasCategory::Location,
                    &["local", "remote", "onsite", "relocation"],
                ),
                Self::entry(
                    BiasCategory::Prestige,
                    &["ivy league", "top university", "prestigious"],
                ),
            ]),
        }
    }
}

/// Triggered categories together with the keywords that tripped them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasFindings {
    pub matches: BTreeMap<BiasCategory, Vec<String>>,
}

impl BiasFindings {
    pub fn is_flagged(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn categories(&self) -> BTreeSet<BiasCategory> {
        self.matches.keys().copied().collect()
    }

    pub fn keywords_for(&self, category: BiasCategory) -> &[String] {
        self.matches
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Coarse substring scan over resume and job text.
///
/// False positives are expected: the findings only route an evaluation to human review.
#[derive(Debug, Clone, Default)]
pub struct BiasScanner {
    table: BiasKeywordTable,
}

impl BiasScanner {
    pub fn new(table: BiasKeywordTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &BiasKeywordTable {
        &self.table
    }

    pub fn scan(&self, resume_text: &str, job_text: &str) -> BiasFindings {
        let haystack = format!("{} {}", resume_text.to_lowercase(), job_text.to_lowercase());

        let matches = self
            .table
            .keywords
            .iter()
            .filter_map(|(category, keywords)| {
                let hits: Vec<String> = keywords
                    .iter()
                    .filter(|keyword| haystack.contains(keyword.as_str()))
                    .cloned()
                    .collect();
                (!hits.is_empty()).then_some((*category, hits))
            })
            .collect();

        BiasFindings { matches }
    }
}
