use serde::{Deserialize, Serialize};

/// Relative weight of each dimension in the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
}

impl Default for EvaluationWeights {
    fn default() -> Self {
        Self {
            skills: 0.35,
            experience: 0.25,
            education: 0.20,
            location: 0.10,
        }
    }
}

/// Scoring policy applied by the evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub weights: EvaluationWeights,
    /// Fraction removed from the composite when any bias category triggers.
    pub bias_penalty: f64,
    /// Dimension scores below this value produce an improvement advisory.
    pub advisory_threshold: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            weights: EvaluationWeights::default(),
            bias_penalty: 0.10,
            advisory_threshold: 0.7,
        }
    }
}
