//! Candidate evaluation pipeline.
//!
//! Extraction, scoring, bias flagging, and cohort analytics are pure and perform no I/O. The
//! repository trait, service facade, and router are the thin collaborators that store
//! profiles and records and expose the pipeline over HTTP.

pub mod bias;
pub mod cohort;
pub mod domain;
pub mod evaluation;
pub mod extraction;
pub mod repository;
pub mod router;
pub mod service;

use std::sync::OnceLock;

#[cfg(test)]
mod tests;

pub use bias::{BiasCategory, BiasFindings, BiasKeywordTable, BiasScanner};
pub use cohort::{build_cohort_report, CohortAnalyzer, CohortError, CohortReport};
pub use domain::{
    CandidateId, CandidateProfile, CandidateSubmission, EducationLevel, Features, JobId,
    JobRequirement, JobSubmission, SalaryRange,
};
pub use evaluation::{
    match_skills, missing_skills, DimensionScores, Evaluation, EvaluationConfig,
    EvaluationEngine, EvaluationError, EvaluationRecord, EvaluationWeights,
};
pub use extraction::{FeatureExtractor, SkillCatalog, SkillCategory};
pub use repository::{HiringRepository, RepositoryError};
pub use router::hiring_router;
pub use service::{CandidateStanding, HiringService, HiringServiceError, RankedCandidate};

static DEFAULT_EXTRACTOR: OnceLock<FeatureExtractor> = OnceLock::new();
static DEFAULT_SCANNER: OnceLock<BiasScanner> = OnceLock::new();

/// Extract features with the default skill catalog.
pub fn extract_features(resume_text: &str) -> Features {
    DEFAULT_EXTRACTOR
        .get_or_init(FeatureExtractor::default)
        .extract(resume_text)
}

/// Scan for bias keywords with the default keyword table.
pub fn scan_bias(resume_text: &str, job_text: &str) -> BiasFindings {
    DEFAULT_SCANNER
        .get_or_init(BiasScanner::default)
        .scan(resume_text, job_text)
}
