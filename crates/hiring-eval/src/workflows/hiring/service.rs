use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use super::bias::BiasFindings;
use super::cohort::{CohortAnalyzer, CohortError, CohortReport};
use super::domain::{
    normalize_skills, CandidateId, CandidateProfile, CandidateSubmission, Features, JobId,
    JobRequirement, JobSubmission,
};
use super::evaluation::{
    match_skills, missing_skills, EvaluationConfig, EvaluationEngine, EvaluationError,
    EvaluationRecord,
};
use super::repository::{HiringRepository, RepositoryError};

const DEFAULT_TOP_LIMIT: usize = 5;

/// Service composing the repository, evaluation engine, and cohort analyzer.
pub struct HiringService<R> {
    repository: Arc<R>,
    engine: Arc<EvaluationEngine>,
    analyzer: CohortAnalyzer,
    candidate_sequence: AtomicU64,
    job_sequence: AtomicU64,
}

impl<R> HiringService<R>
where
    R: HiringRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: EvaluationConfig) -> Self {
        Self::with_engine(repository, EvaluationEngine::new(config))
    }

    pub fn with_engine(repository: Arc<R>, engine: EvaluationEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
            analyzer: CohortAnalyzer::default(),
            candidate_sequence: AtomicU64::new(1),
            job_sequence: AtomicU64::new(1),
        }
    }

    pub fn engine(&self) -> &EvaluationEngine {
        &self.engine
    }

    /// Register a candidate. Skills found in the resume are merged into the provided ones.
    pub fn register_candidate(
        &self,
        submission: CandidateSubmission,
    ) -> Result<CandidateProfile, HiringServiceError> {
        let id = self.candidate_sequence.fetch_add(1, Ordering::Relaxed);
        let mut skills = normalize_skills(&submission.skills);
        if let Some(resume) = submission.resume_text.as_deref() {
            skills.extend(self.engine.extractor().extract(resume).skills);
        }

        let profile = CandidateProfile {
            id: CandidateId(format!("cand-{id:06}")),
            name: submission.name,
            email: submission.email,
            resume_text: submission.resume_text.unwrap_or_default(),
            skills,
            experience_years: submission.experience_years,
            education: submission.education,
            location: submission.location,
        };

        let stored = self.repository.insert_candidate(profile)?;
        info!(candidate = %stored.id, name = %stored.name, "candidate registered");
        Ok(stored)
    }

    pub fn register_job(
        &self,
        submission: JobSubmission,
    ) -> Result<JobRequirement, HiringServiceError> {
        if !submission.salary.is_ordered() {
            return Err(HiringServiceError::InvalidJob(format!(
                "salary low {} exceeds high {}",
                submission.salary.low, submission.salary.high
            )));
        }
        if !submission.min_experience_years.is_finite() || submission.min_experience_years < 0.0 {
            return Err(HiringServiceError::InvalidJob(format!(
                "minimum experience {} must be a non-negative number",
                submission.min_experience_years
            )));
        }

        let id = self.job_sequence.fetch_add(1, Ordering::Relaxed);
        let job = JobRequirement {
            id: JobId(format!("job-{id:06}")),
            title: submission.title,
            company: submission.company,
            department: submission.department,
            required_skills: submission.required_skills,
            preferred_skills: submission.preferred_skills,
            min_experience_years: submission.min_experience_years,
            min_education: submission.min_education,
            location: submission.location,
            salary: submission.salary,
        };

        let stored = self.repository.insert_job(job)?;
        info!(job = %stored.id, title = %stored.title, company = %stored.company, "job registered");
        Ok(stored)
    }

    /// Evaluate a stored candidate against a stored job and append the record.
    pub fn evaluate(
        &self,
        candidate_id: &CandidateId,
        job_id: &JobId,
    ) -> Result<EvaluationRecord, HiringServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let job = self.job(job_id)?;

        let evaluation = self.engine.evaluate(&candidate, &job).map_err(|err| {
            warn!(candidate = %candidate_id, job = %job_id, error = %err, "evaluation failed");
            err
        })?;

        if let Some(profile) = evaluation.enriched_profile {
            self.repository.update_candidate(profile)?;
        }

        let record = evaluation.record;
        self.repository.append_evaluation(record.clone())?;
        info!(
            candidate = %candidate_id,
            job = %job_id,
            score = record.composite_score,
            bias_flagged = record.bias_flagged,
            "evaluation recorded"
        );
        Ok(record)
    }

    pub fn candidate(&self, id: &CandidateId) -> Result<CandidateProfile, HiringServiceError> {
        let candidate = self
            .repository
            .fetch_candidate(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(candidate)
    }

    pub fn job(&self, id: &JobId) -> Result<JobRequirement, HiringServiceError> {
        let job = self
            .repository
            .fetch_job(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(job)
    }

    pub fn candidates(&self) -> Result<Vec<CandidateProfile>, HiringServiceError> {
        Ok(self.repository.candidates()?)
    }

    pub fn jobs(&self) -> Result<Vec<JobRequirement>, HiringServiceError> {
        Ok(self.repository.jobs()?)
    }

    pub fn evaluations(&self) -> Result<Vec<EvaluationRecord>, HiringServiceError> {
        Ok(self.repository.evaluations()?)
    }

    pub fn evaluations_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<EvaluationRecord>, HiringServiceError> {
        let mut records = self.repository.evaluations()?;
        records.retain(|record| &record.job_id == job_id);
        Ok(records)
    }

    pub fn evaluations_for_candidate(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<EvaluationRecord>, HiringServiceError> {
        let mut records = self.repository.evaluations()?;
        records.retain(|record| &record.candidate_id == candidate_id);
        Ok(records)
    }

    /// Aggregate standing of a candidate across every recorded evaluation.
    pub fn candidate_standing(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<CandidateStanding, HiringServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let records = self.evaluations_for_candidate(&candidate.id)?;
        Ok(CandidateStanding::from_records(candidate.id, &records))
    }

    /// Standing for every registered candidate, in repository order.
    pub fn candidate_standings(&self) -> Result<Vec<CandidateStanding>, HiringServiceError> {
        let evaluations = self.repository.evaluations()?;
        let standings = self
            .repository
            .candidates()?
            .into_iter()
            .map(|candidate| {
                let records: Vec<EvaluationRecord> = evaluations
                    .iter()
                    .filter(|record| record.candidate_id == candidate.id)
                    .cloned()
                    .collect();
                CandidateStanding::from_records(candidate.id, &records)
            })
            .collect();
        Ok(standings)
    }

    /// Highest-scoring candidates for a job; ties keep evaluation order.
    pub fn top_candidates(
        &self,
        job_id: &JobId,
        limit: Option<usize>,
    ) -> Result<Vec<RankedCandidate>, HiringServiceError> {
        let mut records = self.evaluations_for_job(job_id)?;
        records.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));

        let mut ranked = Vec::new();
        for record in records.into_iter().take(limit.unwrap_or(DEFAULT_TOP_LIMIT)) {
            if let Some(candidate) = self.repository.fetch_candidate(&record.candidate_id)? {
                ranked.push(RankedCandidate {
                    candidate,
                    score: record.composite_score,
                });
            }
        }
        Ok(ranked)
    }

    pub fn cohort_report(&self, job_id: &JobId) -> Result<CohortReport, HiringServiceError> {
        let job = self.repository.fetch_job(job_id)?;
        let evaluations = self.repository.evaluations()?;
        let candidates = self.repository.candidates()?;
        let report = self
            .analyzer
            .report(job_id, job.as_ref(), &evaluations, &candidates)?;
        Ok(report)
    }

    pub fn extract_features(&self, resume_text: &str) -> Features {
        self.engine.extractor().extract(resume_text)
    }

    pub fn match_skills(
        &self,
        candidate_skills: &[String],
        required_skills: &[String],
        preferred_skills: &[String],
    ) -> f64 {
        match_skills(
            &normalize_skills(candidate_skills),
            required_skills,
            preferred_skills,
        )
    }

    pub fn missing_skills(
        &self,
        candidate_skills: &[String],
        required_skills: &[String],
    ) -> Vec<String> {
        missing_skills(&normalize_skills(candidate_skills), required_skills)
    }

    pub fn scan_bias(&self, resume_text: &str, job_text: &str) -> BiasFindings {
        self.engine.scanner().scan(resume_text, job_text)
    }
}

/// Candidate paired with the composite score that ranked them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub candidate: CandidateProfile,
    pub score: f64,
}

/// Running totals for one candidate, derived from the evaluation log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateStanding {
    pub candidate_id: CandidateId,
    pub evaluations: usize,
    pub average_score: f64,
    pub bias_detected: bool,
    pub last_evaluation: Option<DateTime<Utc>>,
}

impl CandidateStanding {
    fn from_records(candidate_id: CandidateId, records: &[EvaluationRecord]) -> Self {
        let total: f64 = records.iter().map(|record| record.composite_score).sum();
        let average_score = if records.is_empty() {
            0.0
        } else {
            total / records.len() as f64
        };

        Self {
            candidate_id,
            evaluations: records.len(),
            average_score,
            bias_detected: records.iter().any(|record| record.bias_flagged),
            last_evaluation: records.iter().map(|record| record.created_at).max(),
        }
    }
}

/// Error raised by the hiring service.
#[derive(Debug, thiserror::Error)]
pub enum HiringServiceError {
    #[error("invalid job posting: {0}")]
    InvalidJob(String),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Cohort(#[from] CohortError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
