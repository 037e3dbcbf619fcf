use hiring_eval::workflows::hiring::{
    CandidateId, CandidateProfile, EvaluationRecord, HiringRepository, JobId, JobRequirement,
    RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store backing the HTTP service and the demo.
///
/// Candidates and jobs are listed in registration order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryHiringRepository {
    candidates: Arc<Mutex<Registry<CandidateId, CandidateProfile>>>,
    jobs: Arc<Mutex<Registry<JobId, JobRequirement>>>,
    evaluations: Arc<Mutex<Vec<EvaluationRecord>>>,
}

struct Registry<K, V> {
    order: Vec<K>,
    entries: HashMap<K, V>,
}

impl<K, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }
}

impl<K, V> Registry<K, V>
where
    K: Clone + Eq + std::hash::Hash,
    V: Clone,
{
    fn insert(&mut self, key: K, value: V) -> Result<V, RepositoryError> {
        if self.entries.contains_key(&key) {
            return Err(RepositoryError::Conflict);
        }
        self.order.push(key.clone());
        self.entries.insert(key, value.clone());
        Ok(value)
    }

    fn replace(&mut self, key: &K, value: V) -> Result<(), RepositoryError> {
        match self.entries.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).cloned()
    }

    fn ordered(&self) -> Vec<V> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).cloned())
            .collect()
    }
}

impl HiringRepository for InMemoryHiringRepository {
    fn insert_candidate(
        &self,
        profile: CandidateProfile,
    ) -> Result<CandidateProfile, RepositoryError> {
        let mut guard = self.candidates.lock().expect("candidate mutex poisoned");
        guard.insert(profile.id.clone(), profile)
    }

    fn update_candidate(&self, profile: CandidateProfile) -> Result<(), RepositoryError> {
        let mut guard = self.candidates.lock().expect("candidate mutex poisoned");
        let id = profile.id.clone();
        guard.replace(&id, profile)
    }

    fn fetch_candidate(
        &self,
        id: &CandidateId,
    ) -> Result<Option<CandidateProfile>, RepositoryError> {
        let guard = self.candidates.lock().expect("candidate mutex poisoned");
        Ok(guard.get(id))
    }

    fn candidates(&self) -> Result<Vec<CandidateProfile>, RepositoryError> {
        let guard = self.candidates.lock().expect("candidate mutex poisoned");
        Ok(guard.ordered())
    }

    fn insert_job(&self, job: JobRequirement) -> Result<JobRequirement, RepositoryError> {
        let mut guard = self.jobs.lock().expect("job mutex poisoned");
        guard.insert(job.id.clone(), job)
    }

    fn fetch_job(&self, id: &JobId) -> Result<Option<JobRequirement>, RepositoryError> {
        let guard = self.jobs.lock().expect("job mutex poisoned");
        Ok(guard.get(id))
    }

    fn jobs(&self) -> Result<Vec<JobRequirement>, RepositoryError> {
        let guard = self.jobs.lock().expect("job mutex poisoned");
        Ok(guard.ordered())
    }

    fn append_evaluation(&self, record: EvaluationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.evaluations.lock().expect("evaluation mutex poisoned");
        guard.push(record);
        Ok(())
    }

    fn evaluations(&self) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        let guard = self.evaluations.lock().expect("evaluation mutex poisoned");
        Ok(guard.clone())
    }
}
