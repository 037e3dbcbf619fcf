use super::domain::{CandidateId, CandidateProfile, JobId, JobRequirement};
use super::evaluation::EvaluationRecord;

/// Storage abstraction so the service can be exercised in isolation.
///
/// Evaluations are append-only; implementations must preserve insertion order.
pub trait HiringRepository: Send + Sync {
    fn insert_candidate(&self, profile: CandidateProfile)
        -> Result<CandidateProfile, RepositoryError>;
    fn update_candidate(&self, profile: CandidateProfile) -> Result<(), RepositoryError>;
    fn fetch_candidate(&self, id: &CandidateId)
        -> Result<Option<CandidateProfile>, RepositoryError>;
    fn candidates(&self) -> Result<Vec<CandidateProfile>, RepositoryError>;

    fn insert_job(&self, job: JobRequirement) -> Result<JobRequirement, RepositoryError>;
    fn fetch_job(&self, id: &JobId) -> Result<Option<JobRequirement>, RepositoryError>;
    fn jobs(&self) -> Result<Vec<JobRequirement>, RepositoryError>;

    fn append_evaluation(&self, record: EvaluationRecord) -> Result<(), RepositoryError>;
    fn evaluations(&self) -> Result<Vec<EvaluationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
