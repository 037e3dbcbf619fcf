use serde::Serialize;

use super::super::domain::{CandidateId, JobId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionStatistics {
    pub skills: ScoreStatistics,
    pub experience: ScoreStatistics,
    pub education: ScoreStatistics,
    pub location: ScoreStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCandidateEntry {
    pub rank: usize,
    pub candidate_id: CandidateId,
    pub name: String,
    pub score: f64,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiasAnalysis {
    pub flagged_count: usize,
    pub flagged_pct: f64,
    pub recommendation: &'static str,
}

/// Aggregated view over every evaluation recorded for one job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortReport {
    pub job_id: JobId,
    pub job_title: String,
    pub company: String,
    pub total_evaluations: usize,
    pub composite: ScoreStatistics,
    pub dimensions: DimensionStatistics,
    pub top_candidates: Vec<TopCandidateEntry>,
    pub bias: BiasAnalysis,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}
