use super::views::{DimensionStatistics, ScoreStatistics};

const SMALL_POOL: usize = 10;

pub(crate) fn bias_advisory(flagged_pct: f64) -> &'static str {
    if flagged_pct > 20.0 {
        "Consider bias training for evaluators"
    } else {
        "Bias levels are acceptable"
    }
}

pub(crate) fn generate_insights(
    composite: &ScoreStatistics,
    dimensions: &DimensionStatistics,
    flagged_pct: f64,
) -> Vec<String> {
    let mut insights = Vec::new();

    if composite.std_dev < 0.1 {
        insights.push(
            "Low score variance suggests the evaluation criteria may be too broad".to_string(),
        );
    } else if composite.std_dev > 0.3 {
        insights.push("High score variance indicates good candidate differentiation".to_string());
    }

    let skills = dimensions.skills.mean;
    if skills < 0.6 {
        insights.push(
            "Skills gap detected - consider training programs or adjusting requirements"
                .to_string(),
        );
    } else if skills > 0.8 {
        insights
            .push("Strong skills alignment - focus on other differentiating factors".to_string());
    }

    if dimensions.experience.mean < 0.5 {
        insights.push(
            "Experience requirements may be too high for available talent pool".to_string(),
        );
    }

    if flagged_pct > 30.0 {
        insights
            .push("High bias detection rate - review evaluation process for fairness".to_string());
    }

    insights
}

pub(crate) fn strategic_recommendations(
    composite: &ScoreStatistics,
    flagged_pct: f64,
    total: usize,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if composite.mean < 0.6 {
        recommendations.push(
            "Consider revising job requirements to better match available talent".to_string(),
        );
        recommendations.push(
            "Implement targeted recruitment strategies for specific skill sets".to_string(),
        );
    }

    if flagged_pct > 20.0 {
        recommendations.push("Implement bias training for all evaluators".to_string());
        recommendations.push("Review and update evaluation criteria for inclusivity".to_string());
    }

    if total < SMALL_POOL {
        recommendations.push("Expand candidate pool for better selection diversity".to_string());
    }

    recommendations.push(
        "Regularly review and update evaluation criteria based on performance data".to_string(),
    );

    recommendations
}
