use super::super::bias::BiasFindings;
use super::DimensionScores;

pub(crate) const SKILLS_ADVICE: &str =
    "Consider acquiring additional required skills through courses or certifications";
pub(crate) const EXPERIENCE_ADVICE: &str = "Gain more relevant work experience in the field";
pub(crate) const EDUCATION_ADVICE: &str =
    "Consider pursuing higher education or relevant certifications";
pub(crate) const LOCATION_ADVICE: &str = "Consider relocation or remote work opportunities";
pub(crate) const BIAS_ADVICE: &str =
    "Review content for potential bias indicators and ensure inclusive language";
pub(crate) const STRONG_CANDIDATE: &str = "Strong candidate profile - consider for next round";

/// Advisories in fixed order: skills, experience, education, location, bias, then the
/// positive fallback when nothing else applies.
pub(crate) fn recommendations(
    scores: &DimensionScores,
    findings: &BiasFindings,
    threshold: f64,
) -> Vec<String> {
    let checks = [
        (scores.skills < threshold, SKILLS_ADVICE),
        (scores.experience < threshold, EXPERIENCE_ADVICE),
        (scores.education < threshold, EDUCATION_ADVICE),
        (scores.location < threshold, LOCATION_ADVICE),
        (findings.is_flagged(), BIAS_ADVICE),
    ];

    let mut advice: Vec<String> = checks
        .into_iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, text)| text.to_string())
        .collect();

    if advice.is_empty() {
        advice.push(STRONG_CANDIDATE.to_string());
    }

    advice
}
