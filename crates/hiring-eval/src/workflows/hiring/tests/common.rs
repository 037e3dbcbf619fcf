use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::hiring::domain::{
    normalize_skills, CandidateId, CandidateProfile, EducationLevel, JobId, JobRequirement,
    SalaryRange,
};
use crate::workflows::hiring::evaluation::{
    DimensionScores, EvaluationConfig, EvaluationEngine, EvaluationRecord,
};
use crate::workflows::hiring::repository::{HiringRepository, RepositoryError};
use crate::workflows::hiring::service::HiringService;

pub(super) const ALICE_RESUME: &str = "Experienced Python developer with 5 years in web \
     development. Proficient in React, Node.js, and AWS. Strong leadership and communication \
     skills.";

pub(super) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn candidate(
    id: &str,
    name: &str,
    skills: &[&str],
    experience_years: f64,
    education: EducationLevel,
    location: &str,
) -> CandidateProfile {
    CandidateProfile {
        id: CandidateId(id.to_string()),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        resume_text: String::new(),
        skills: normalize_skills(skills),
        experience_years,
        education,
        location: location.to_string(),
    }
}

pub(super) fn alice() -> CandidateProfile {
    let mut profile = candidate(
        "C001",
        "Alice",
        &["python", "react", "node.js", "aws", "leadership"],
        5.0,
        EducationLevel::Bachelor,
        "San Francisco, CA",
    );
    profile.resume_text = ALICE_RESUME.to_string();
    profile
}

pub(super) fn bob() -> CandidateProfile {
    let mut profile = candidate(
        "C002",
        "Bob",
        &["java", "sql", "docker", "teamwork"],
        3.0,
        EducationLevel::Masters,
        "Austin, TX",
    );
    profile.resume_text =
        "Java developer with 3 years building services. Masters in computer science.".to_string();
    profile
}

pub(super) fn unscored_candidate() -> CandidateProfile {
    let mut profile = candidate("C003", "Carol", &[], 0.0, EducationLevel::Unknown, "");
    profile.resume_text =
        "Python and AWS engineer, 7 years. Masters degree. Seattle, WA".to_string();
    profile
}

pub(super) fn python_job() -> JobRequirement {
    JobRequirement {
        id: JobId("J001".to_string()),
        title: "Python Developer".to_string(),
        company: "TechCorp".to_string(),
        department: "Engineering".to_string(),
        required_skills: vec!["python".to_string(), "react".to_string(), "aws".to_string()],
        preferred_skills: vec![
            "docker".to_string(),
            "kubernetes".to_string(),
            "machine learning".to_string(),
        ],
        min_experience_years: 5.0,
        min_education: EducationLevel::Bachelor,
        location: "San Francisco, CA".to_string(),
        salary: SalaryRange {
            low: 120_000.0,
            high: 180_000.0,
        },
    }
}

pub(super) fn data_job() -> JobRequirement {
    JobRequirement {
        id: JobId("J002".to_string()),
        title: "Data Scientist".to_string(),
        company: "DataCorp".to_string(),
        department: "Analytics".to_string(),
        required_skills: vec!["python".to_string(), "sql".to_string()],
        preferred_skills: vec!["tensorflow".to_string()],
        min_experience_years: 3.0,
        min_education: EducationLevel::Masters,
        location: "Remote".to_string(),
        salary: SalaryRange {
            low: 100_000.0,
            high: 150_000.0,
        },
    }
}

pub(super) fn engine() -> EvaluationEngine {
    EvaluationEngine::new(EvaluationConfig::default())
}

/// Record with education and location pinned to 1.0.
pub(super) fn record(
    candidate_id: &str,
    job_id: &str,
    composite_score: f64,
    skills: f64,
    experience: f64,
    bias_flagged: bool,
) -> EvaluationRecord {
    EvaluationRecord {
        candidate_id: CandidateId(candidate_id.to_string()),
        job_id: JobId(job_id.to_string()),
        composite_score,
        dimensions: DimensionScores {
            skills,
            experience,
            education: 1.0,
            location: 1.0,
        },
        bias_categories: BTreeSet::new(),
        bias_flagged,
        recommendations: Vec::new(),
        created_at: fixed_time(),
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn build_service() -> (HiringService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = HiringService::new(repository.clone(), EvaluationConfig::default());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    candidates: Arc<Mutex<HashMap<CandidateId, CandidateProfile>>>,
    jobs: Arc<Mutex<HashMap<JobId, JobRequirement>>>,
    evaluations: Arc<Mutex<Vec<EvaluationRecord>>>,
}

impl HiringRepository for MemoryRepository {
    fn insert_candidate(
        &self,
        profile: CandidateProfile,
    ) -> Result<CandidateProfile, RepositoryError> {
        let mut guard = self.candidates.lock().expect("candidate mutex poisoned");
        if guard.contains_key(&profile.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    fn update_candidate(&self, profile: CandidateProfile) -> Result<(), RepositoryError> {
        let mut guard = self.candidates.lock().expect("candidate mutex poisoned");
        if !guard.contains_key(&profile.id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(profile.id.clone(), profile);
        Ok(())
    }

    fn fetch_candidate(
        &self,
        id: &CandidateId,
    ) -> Result<Option<CandidateProfile>, RepositoryError> {
        let guard = self.candidates.lock().expect("candidate mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn candidates(&self) -> Result<Vec<CandidateProfile>, RepositoryError> {
        let guard = self.candidates.lock().expect("candidate mutex poisoned");
        let mut all: Vec<CandidateProfile> = guard.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    fn insert_job(&self, job: JobRequirement) -> Result<JobRequirement, RepositoryError> {
        let mut guard = self.jobs.lock().expect("job mutex poisoned");
        if guard.contains_key(&job.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(job.id.clone(), job.clone());
        Ok(job)
    }

    fn fetch_job(&self, id: &JobId) -> Result<Option<JobRequirement>, RepositoryError> {
        let guard = self.jobs.lock().expect("job mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn jobs(&self) -> Result<Vec<JobRequirement>, RepositoryError> {
        let guard = self.jobs.lock().expect("job mutex poisoned");
        let mut all: Vec<JobRequirement> = guard.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    fn append_evaluation(&self, record: EvaluationRecord) -> Result<(), RepositoryError> {
        self.evaluations
            .lock()
            .expect("evaluation mutex poisoned")
            .push(record);
        Ok(())
    }

    fn evaluations(&self) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        Ok(self
            .evaluations
            .lock()
            .expect("evaluation mutex poisoned")
            .clone())
    }
}

pub(super) struct UnavailableRepository;

impl HiringRepository for UnavailableRepository {
    fn insert_candidate(
        &self,
        _profile: CandidateProfile,
    ) -> Result<CandidateProfile, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_candidate(&self, _profile: CandidateProfile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_candidate(
        &self,
        _id: &CandidateId,
    ) -> Result<Option<CandidateProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn candidates(&self) -> Result<Vec<CandidateProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_job(&self, _job: JobRequirement) -> Result<JobRequirement, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_job(&self, _id: &JobId) -> Result<Option<JobRequirement>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn jobs(&self) -> Result<Vec<JobRequirement>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn append_evaluation(&self, _record: EvaluationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn evaluations(&self) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
