pub(crate) mod advice;
mod config;
pub(crate) mod rules;

pub use config::{EvaluationConfig, EvaluationWeights};
pub use rules::{
    education_match, experience_match, location_match, match_skills, missing_skills,
};

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::bias::{BiasCategory, BiasScanner};
use super::domain::{CandidateId, CandidateProfile, JobId, JobRequirement};
use super::extraction::FeatureExtractor;

/// Stateless evaluator combining extraction, scoring, and bias flagging.
#[derive(Debug, Clone, Default)]
pub struct EvaluationEngine {
    config: EvaluationConfig,
    extractor: FeatureExtractor,
    scanner: BiasScanner,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self::with_components(config, FeatureExtractor::default(), BiasScanner::default())
    }

    pub fn with_components(
        config: EvaluationConfig,
        extractor: FeatureExtractor,
        scanner: BiasScanner,
    ) -> Self {
        Self {
            config,
            extractor,
            scanner,
        }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    pub fn scanner(&self) -> &BiasScanner {
        &self.scanner
    }

    pub fn evaluate(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
    ) -> Result<Evaluation, EvaluationError> {
        self.evaluate_at(candidate, job, Utc::now())
    }

    /// Evaluate with an explicit creation timestamp.
    ///
    /// The inputs are never mutated; when extraction ran, the enriched profile is handed back
    /// for the caller to persist.
    pub fn evaluate_at(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        now: DateTime<Utc>,
    ) -> Result<Evaluation, EvaluationError> {
        let enriched_profile = self.extractor.enrich(candidate);
        let profile = enriched_profile.as_ref().unwrap_or(candidate);

        validate_inputs(profile, job)?;

        let scores = rules::score_dimensions(profile, job);
        let findings = self.scanner.scan(&profile.resume_text, &job.bias_context());

        let weights = &self.config.weights;
        let mut composite = scores.skills * weights.skills
            + scores.experience * weights.experience
            + scores.education * weights.education
            + scores.location * weights.location;

        let bias_flagged = findings.is_flagged();
        if bias_flagged {
            composite *= 1.0 - self.config.bias_penalty;
        }

        if !composite.is_finite() || !(0.0..=1.0).contains(&composite) {
            warn!(
                candidate = %profile.id,
                job = %job.id,
                composite,
                "composite score outside [0, 1]; evaluation discarded"
            );
            return Err(EvaluationError::ScoreOutOfRange(composite));
        }

        debug!(
            candidate = %profile.id,
            job = %job.id,
            skills = scores.skills,
            experience = scores.experience,
            education = scores.education,
            location = scores.location,
            composite,
            bias_flagged,
            "candidate scored"
        );

        let recommendations =
            advice::recommendations(&scores, &findings, self.config.advisory_threshold);

        let record = EvaluationRecord {
            candidate_id: profile.id.clone(),
            job_id: job.id.clone(),
            composite_score: composite,
            dimensions: scores,
            bias_categories: findings.categories(),
            bias_flagged,
            recommendations,
            created_at: now,
        };

        Ok(Evaluation {
            record,
            enriched_profile,
        })
    }
}

fn validate_inputs(
    profile: &CandidateProfile,
    job: &JobRequirement,
) -> Result<(), EvaluationError> {
    if !profile.experience_years.is_finite() || profile.experience_years < 0.0 {
        return Err(EvaluationError::InvalidInput(format!(
            "candidate {} has invalid experience {}",
            profile.id, profile.experience_years
        )));
    }
    if !job.min_experience_years.is_finite() || job.min_experience_years < 0.0 {
        return Err(EvaluationError::InvalidInput(format!(
            "job {} has invalid minimum experience {}",
            job.id, job.min_experience_years
        )));
    }
    if !job.salary.is_ordered() {
        return Err(EvaluationError::InvalidInput(format!(
            "job {} salary range is inverted ({} > {})",
            job.id, job.salary.low, job.salary.high
        )));
    }
    Ok(())
}

/// Per-dimension sub-scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
}

/// Immutable result of one evaluation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub candidate_id: CandidateId,
    pub job_id: JobId,
    pub composite_score: f64,
    pub dimensions: DimensionScores,
    pub bias_categories: BTreeSet<BiasCategory>,
    pub bias_flagged: bool,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Engine output: the record plus the feature-enriched profile when extraction ran.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub record: EvaluationRecord,
    pub enriched_profile: Option<CandidateProfile>,
}

/// Evaluation could not be produced. Never to be read as a zero score.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("invalid evaluation input: {0}")]
    InvalidInput(String),
    #[error("composite score {0} is outside [0, 1]")]
    ScoreOutOfRange(f64),
}
