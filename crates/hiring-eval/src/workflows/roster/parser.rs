use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::workflows::hiring::domain::{CandidateSubmission, EducationLevel};

const SKILL_SEPARATOR: char = ';';

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<CandidateSubmission>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut submissions = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        submissions.push(row.into_submission());
    }

    Ok(submissions)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email", default)]
    email: String,
    #[serde(rename = "Resume", default, deserialize_with = "empty_string_as_none")]
    resume: Option<String>,
    #[serde(rename = "Skills", default, deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
    #[serde(rename = "Experience", default, deserialize_with = "empty_string_as_none")]
    experience: Option<String>,
    #[serde(rename = "Education", default, deserialize_with = "empty_string_as_none")]
    education: Option<String>,
    #[serde(rename = "Location", default)]
    location: String,
}

impl RosterRow {
    fn into_submission(self) -> CandidateSubmission {
        let skills = self
            .skills
            .as_deref()
            .map(|raw| {
                raw.split(SKILL_SEPARATOR)
                    .map(str::trim)
                    .filter(|skill| !skill.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let experience_years = self
            .experience
            .as_deref()
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|years| years.is_finite() && *years >= 0.0)
            .unwrap_or(0.0);

        let education = self
            .education
            .as_deref()
            .map(EducationLevel::parse)
            .unwrap_or(EducationLevel::Bachelor);

        CandidateSubmission {
            name: self.name,
            email: self.email,
            resume_text: self.resume,
            skills,
            experience_years,
            education,
            location: self.location,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
