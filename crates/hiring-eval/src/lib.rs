//! Candidate evaluation pipeline: resume feature extraction, rule-based match scoring, bias
//! flagging, and cohort analytics, plus the storage, HTTP, and import plumbing around it.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
