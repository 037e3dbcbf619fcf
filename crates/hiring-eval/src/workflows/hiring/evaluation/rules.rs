use std::collections::BTreeSet;

use super::super::domain::{CandidateProfile, EducationLevel, JobRequirement};
use super::DimensionScores;

const REQUIRED_WEIGHT: f64 = 0.8;
const PREFERRED_BONUS_STEP: f64 = 0.1;
const PREFERRED_BONUS_CAP: f64 = 0.2;

/// Score how well `candidate_skills` cover the required and preferred lists.
///
/// A job without required skills scores 0.0.
pub fn match_skills<S: AsRef<str>>(
    candidate_skills: &BTreeSet<String>,
    required_skills: &[S],
    preferred_skills: &[S],
) -> f64 {
    if required_skills.is_empty() {
        return 0.0;
    }

    let candidate: Vec<String> = candidate_skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .collect();

    let required_hits = count_covered(&candidate, required_skills);
    let required_score = required_hits as f64 / required_skills.len() as f64;

    let preferred_hits = count_covered(&candidate, preferred_skills);
    let preferred_bonus = (preferred_hits as f64 * PREFERRED_BONUS_STEP).min(PREFERRED_BONUS_CAP);

    (required_score * REQUIRED_WEIGHT + preferred_bonus).min(1.0)
}

/// Required skills the candidate does not cover, in the order the job lists them.
pub fn missing_skills<S: AsRef<str>>(
    candidate_skills: &BTreeSet<String>,
    required_skills: &[S],
) -> Vec<String> {
    let candidate: Vec<String> = candidate_skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .collect();

    required_skills
        .iter()
        .filter(|skill| !is_covered(&candidate, skill.as_ref()))
        .map(|skill| skill.as_ref().to_string())
        .collect()
}

fn count_covered<S: AsRef<str>>(candidate: &[String], wanted: &[S]) -> usize {
    wanted
        .iter()
        .filter(|skill| is_covered(candidate, skill.as_ref()))
        .count()
}

fn is_covered(candidate: &[String], skill: &str) -> bool {
    let needle = skill.to_lowercase();
    candidate.iter().any(|have| have.contains(&needle))
}

pub fn experience_match(candidate_years: f64, required_years: f64) -> f64 {
    if candidate_years >= required_years {
        1.0
    } else if candidate_years >= required_years * 0.7 {
        0.8
    } else if candidate_years >= required_years * 0.5 {
        0.6
    } else {
        0.3
    }
}

pub fn education_match(candidate: EducationLevel, required: EducationLevel) -> f64 {
    let candidate_rank = i16::from(candidate.rank());
    let required_rank = i16::from(required.rank());

    if candidate_rank >= required_rank {
        1.0
    } else if candidate_rank >= required_rank - 1 {
        0.7
    } else {
        0.4
    }
}

pub fn location_match(candidate_location: &str, job_location: &str) -> f64 {
    let candidate = candidate_location.to_lowercase();
    let job = job_location.to_lowercase();

    if candidate == job {
        1.0
    } else if job.contains("remote") {
        0.9
    } else if job.split_whitespace().any(|token| candidate.contains(token)) {
        0.7
    } else {
        0.3
    }
}

pub(crate) fn score_dimensions(
    profile: &CandidateProfile,
    job: &JobRequirement,
) -> DimensionScores {
    DimensionScores {
        skills: match_skills(&profile.skills, &job.required_skills, &job.preferred_skills),
        experience: experience_match(profile.experience_years, job.min_experience_years),
        education: education_match(profile.education, job.min_education),
        location: location_match(&profile.location, &job.location),
    }
}
