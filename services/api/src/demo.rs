use crate::infra::InMemoryHiringRepository;
use chrono::Utc;
use clap::Args;
use hiring_eval::config::AppConfig;
use hiring_eval::error::AppError;
use hiring_eval::workflows::hiring::{
    CandidateProfile, CandidateStanding, CandidateSubmission, CohortError, CohortReport,
    EducationLevel, EvaluationRecord, HiringRepository, HiringService, HiringServiceError,
    JobRequirement, JobSubmission, SalaryRange,
};
use hiring_eval::workflows::roster::RosterImporter;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Roster CSV (Name,Email,Resume,Skills,Experience,Education,Location) replacing the
    /// built-in sample candidates.
    #[arg(long)]
    pub(crate) candidates_csv: Option<PathBuf>,
    /// Write candidates, jobs, and evaluations to this JSON file after the run.
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ExtractArgs {
    /// Plain-text resume to analyse
    pub(crate) file: PathBuf,
}

#[derive(Debug, Serialize)]
struct DemoExport {
    exported_at: chrono::DateTime<Utc>,
    candidates: Vec<CandidateProfile>,
    jobs: Vec<JobRequirement>,
    evaluations: Vec<EvaluationRecord>,
    standings: Vec<CandidateStanding>,
}

impl DemoExport {
    fn collect<R>(service: &HiringService<R>) -> Result<Self, HiringServiceError>
    where
        R: HiringRepository + 'static,
    {
        Ok(Self {
            exported_at: Utc::now(),
            candidates: service.candidates()?,
            jobs: service.jobs()?,
            evaluations: service.evaluations()?,
            standings: service.candidate_standings()?,
        })
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        candidates_csv,
        export,
    } = args;

    let config = AppConfig::load()?;
    let service = HiringService::new(
        Arc::new(InMemoryHiringRepository::default()),
        config.scoring.evaluation_config(),
    );

    let submissions = match candidates_csv {
        Some(path) => RosterImporter::from_path(path)?,
        None => sample_candidates(),
    };

    let candidates = submissions
        .into_iter()
        .map(|submission| service.register_candidate(submission))
        .collect::<Result<Vec<_>, _>>()?;
    let jobs = sample_jobs()
        .into_iter()
        .map(|submission| service.register_job(submission))
        .collect::<Result<Vec<_>, _>>()?;

    println!("Hiring evaluation demo");
    println!(
        "Loaded {} candidates and {} jobs",
        candidates.len(),
        jobs.len()
    );

    for job in &jobs {
        println!("\nEvaluating candidates for: {} at {}", job.title, job.company);
        for candidate in &candidates {
            match service.evaluate(&candidate.id, &job.id) {
                Ok(record) => render_evaluation(&candidate.name, &record),
                Err(HiringServiceError::Evaluation(err)) => {
                    println!("\nCandidate: {} - evaluation failed: {err}", candidate.name);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    println!("\nCohort reports");
    for job in &jobs {
        match service.cohort_report(&job.id) {
            Ok(report) => render_report(&report),
            Err(HiringServiceError::Cohort(err @ CohortError::NoEvaluations(_))) => {
                println!("\n{}: {err}", job.title);
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = export {
        let payload = DemoExport::collect(&service)?;
        std::fs::write(&path, serde_json::to_vec_pretty(&payload)?)?;
        println!("\nData exported to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_extract(args: ExtractArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.file)?;
    let features = hiring_eval::workflows::hiring::extract_features(&text);
    println!("{}", serde_json::to_string_pretty(&features)?);
    Ok(())
}

fn render_evaluation(name: &str, record: &EvaluationRecord) {
    println!("\nCandidate: {name}");
    println!("  Overall score:    {:.2}", record.composite_score);
    println!("  Skills match:     {:.2}", record.dimensions.skills);
    println!("  Experience match: {:.2}", record.dimensions.experience);
    println!("  Education match:  {:.2}", record.dimensions.education);
    println!("  Location match:   {:.2}", record.dimensions.location);
    if record.bias_flagged {
        let categories: Vec<&str> = record
            .bias_categories
            .iter()
            .map(|category| category.label())
            .collect();
        println!("  Bias indicators:  {}", categories.join(", "));
    }
    if let Some(first) = record.recommendations.first() {
        println!("  Recommendation:   {first}");
    }
}

fn render_report(report: &CohortReport) {
    println!("\nHiring report for {} ({})", report.job_title, report.company);
    println!("  Total candidates: {}", report.total_evaluations);
    println!("  Average score:    {:.2}", report.composite.mean);
    if let Some(top) = report.top_candidates.first() {
        println!("  Top candidate:    {} (score {:.2})", top.name, top.score);
    }
    println!(
        "  Bias detection:   {:.1}% ({})",
        report.bias.flagged_pct, report.bias.recommendation
    );
    for insight in &report.insights {
        println!("  - {insight}");
    }
}

fn sample_candidates() -> Vec<CandidateSubmission> {
    vec![
        CandidateSubmission {
            name: "Alice Johnson".to_string(),
            email: "alice.johnson@email.com".to_string(),
            resume_text: Some(
                "Experienced Python developer with 5 years in web development. Proficient in \
                 React, Node.js, and AWS. Strong leadership and communication skills."
                    .to_string(),
            ),
            skills: strings(&["python", "react", "node.js", "aws", "leadership"]),
            experience_years: 5.0,
            education: EducationLevel::Bachelor,
            location: "San Francisco, CA".to_string(),
        },
        CandidateSubmission {
            name: "Bob Smith".to_string(),
            email: "bob.smith@email.com".to_string(),
            resume_text: Some(
                "Java developer with 3 years experience. Knowledge of Spring Boot, Docker, and \
                 Kubernetes. Team player with problem-solving abilities."
                    .to_string(),
            ),
            skills: strings(&["java", "spring boot", "docker", "kubernetes"]),
            experience_years: 3.0,
            education: EducationLevel::Bachelor,
            location: "New York, NY".to_string(),
        },
        CandidateSubmission {
            name: "Carol Davis".to_string(),
            email: "carol.davis@email.com".to_string(),
            resume_text: Some(
                "Senior software engineer with 8 years experience. Expert in Python, machine \
                 learning, and cloud architecture. PhD in Computer Science."
                    .to_string(),
            ),
            skills: strings(&["python", "machine learning", "aws", "docker"]),
            experience_years: 8.0,
            education: EducationLevel::Phd,
            location: "Austin, TX".to_string(),
        },
    ]
}

fn sample_jobs() -> Vec<JobSubmission> {
    vec![
        JobSubmission {
            title: "Senior Python Developer".to_string(),
            company: "TechCorp".to_string(),
            department: "Engineering".to_string(),
            required_skills: strings(&["python", "react", "aws"]),
            preferred_skills: strings(&["docker", "kubernetes", "machine learning"]),
            min_experience_years: 5.0,
            min_education: EducationLevel::Bachelor,
            location: "San Francisco, CA".to_string(),
            salary: SalaryRange {
                low: 120_000.0,
                high: 180_000.0,
            },
        },
        JobSubmission {
            title: "Java Backend Developer".to_string(),
            company: "StartupXYZ".to_string(),
            department: "Backend".to_string(),
            required_skills: strings(&["java", "spring boot"]),
            preferred_skills: strings(&["docker", "kubernetes", "aws"]),
            min_experience_years: 3.0,
            min_education: EducationLevel::Bachelor,
            location: "New York, NY".to_string(),
            salary: SalaryRange {
                low: 90_000.0,
                high: 130_000.0,
            },
        },
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
