mod insights;
mod statistics;
pub mod views;

pub use views::{
    BiasAnalysis, CohortReport, DimensionStatistics, ScoreStatistics, TopCandidateEntry,
};

use super::domain::{CandidateProfile, JobId, JobRequirement};
use super::evaluation::EvaluationRecord;
use statistics::describe;

const DEFAULT_TOP_CANDIDATES: usize = 3;
const DEFAULT_SKILLS_PREVIEW: usize = 5;

/// Expected, user-facing reasons a cohort report cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CohortError {
    #[error("job {0} not found")]
    JobNotFound(JobId),
    #[error("no evaluations found for job {0}")]
    NoEvaluations(JobId),
}

/// Derives cohort statistics and narrative guidance for one job.
#[derive(Debug, Clone, Copy)]
pub struct CohortAnalyzer {
    top_candidates: usize,
    skills_preview: usize,
}

impl Default for CohortAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_CANDIDATES, DEFAULT_SKILLS_PREVIEW)
    }
}

impl CohortAnalyzer {
    pub fn new(top_candidates: usize, skills_preview: usize) -> Self {
        Self {
            top_candidates,
            skills_preview,
        }
    }

    /// Build the report for `job_id`. `evaluations` may hold records for other jobs; only the
    /// matching ones are aggregated, in their original order.
    pub fn report(
        &self,
        job_id: &JobId,
        job: Option<&JobRequirement>,
        evaluations: &[EvaluationRecord],
        candidates: &[CandidateProfile],
    ) -> Result<CohortReport, CohortError> {
        let job = job
            .filter(|job| &job.id == job_id)
            .ok_or_else(|| CohortError::JobNotFound(job_id.clone()))?;

        let cohort: Vec<&EvaluationRecord> = evaluations
            .iter()
            .filter(|record| &record.job_id == job_id)
            .collect();

        let no_data = || CohortError::NoEvaluations(job_id.clone());

        let composite = describe(&collect(&cohort, |r| r.composite_score)).ok_or_else(no_data)?;
        let dimensions = DimensionStatistics {
            skills: describe(&collect(&cohort, |r| r.dimensions.skills)).ok_or_else(no_data)?,
            experience: describe(&collect(&cohort, |r| r.dimensions.experience))
                .ok_or_else(no_data)?,
            education: describe(&collect(&cohort, |r| r.dimensions.education))
                .ok_or_else(no_data)?,
            location: describe(&collect(&cohort, |r| r.dimensions.location))
                .ok_or_else(no_data)?,
        };

        let total = cohort.len();
        let flagged_count = cohort.iter().filter(|record| record.bias_flagged).count();
        let flagged_pct = flagged_count as f64 / total as f64 * 100.0;

        Ok(CohortReport {
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            company: job.company.clone(),
            total_evaluations: total,
            top_candidates: self.rank(&cohort, candidates),
            bias: BiasAnalysis {
                flagged_count,
                flagged_pct,
                recommendation: insights::bias_advisory(flagged_pct),
            },
            insights: insights::generate_insights(&composite, &dimensions, flagged_pct),
            recommendations: insights::strategic_recommendations(&composite, flagged_pct, total),
            composite,
            dimensions,
        })
    }

    fn rank(
        &self,
        cohort: &[&EvaluationRecord],
        candidates: &[CandidateProfile],
    ) -> Vec<TopCandidateEntry> {
        let mut ordered = cohort.to_vec();
        ordered.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));

        ordered
            .into_iter()
            .take(self.top_candidates)
            .filter_map(|record| {
                candidates
                    .iter()
                    .find(|candidate| candidate.id == record.candidate_id)
                    .map(|candidate| (record, candidate))
            })
            .enumerate()
            .map(|(index, (record, candidate))| TopCandidateEntry {
                rank: index + 1,
                candidate_id: candidate.id.clone(),
                name: candidate.name.clone(),
                score: record.composite_score,
                skills: candidate
                    .skills
                    .iter()
                    .take(self.skills_preview)
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}

fn collect(cohort: &[&EvaluationRecord], field: impl Fn(&EvaluationRecord) -> f64) -> Vec<f64> {
    cohort.iter().map(|record| field(record)).collect()
}

/// Convenience wrapper using the default top-3 / five-skill preview settings.
pub fn build_cohort_report(
    job_id: &JobId,
    job: Option<&JobRequirement>,
    evaluations: &[EvaluationRecord],
    candidates: &[CandidateProfile],
) -> Result<CohortReport, CohortError> {
    CohortAnalyzer::default().report(job_id, job, evaluations, candidates)
}
