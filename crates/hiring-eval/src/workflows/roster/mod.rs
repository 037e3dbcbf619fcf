//! CSV roster import for seeding candidates in bulk.

mod parser;

use std::io::Read;
use std::path::Path;

use crate::workflows::hiring::domain::CandidateSubmission;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads `Name,Email,Resume,Skills,Experience,Education,Location` rows; `Skills` is
/// semicolon-separated and every column but `Name` may be blank.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<CandidateSubmission>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<CandidateSubmission>, RosterImportError> {
        Ok(parser::parse_rows(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::hiring::domain::EducationLevel;

    const ROSTER: &str = "\
Name,Email,Resume,Skills,Experience,Education,Location
Alice Johnson,alice@example.com,Python developer with 5 years,python; react ;aws,5,bachelor,\"San Francisco, CA\"
Dan Reyes,,,,,,
";

    #[test]
    fn parses_rows_into_submissions() {
        let submissions = RosterImporter::from_reader(ROSTER.as_bytes()).expect("roster parses");
        assert_eq!(submissions.len(), 2);

        let alice = &submissions[0];
        assert_eq!(alice.name, "Alice Johnson");
        assert_eq!(alice.skills, vec!["python", "react", "aws"]);
        assert_eq!(alice.experience_years, 5.0);
        assert_eq!(alice.education, EducationLevel::Bachelor);
        assert_eq!(alice.location, "San Francisco, CA");
        assert_eq!(
            alice.resume_text.as_deref(),
            Some("Python developer with 5 years")
        );
    }

    #[test]
    fn blank_cells_fall_back_to_defaults() {
        let submissions = RosterImporter::from_reader(ROSTER.as_bytes()).expect("roster parses");
        let dan = &submissions[1];
        assert!(dan.resume_text.is_none());
        assert!(dan.skills.is_empty());
        assert_eq!(dan.experience_years, 0.0);
        assert_eq!(dan.education, EducationLevel::Bachelor);
        assert_eq!(dan.email, "");
    }

    #[test]
    fn missing_name_column_is_a_csv_error() {
        let result = RosterImporter::from_reader("Email\nnobody@example.com\n".as_bytes());
        assert!(matches!(result, Err(RosterImportError::Csv(_))));
    }
}
