use crate::demo::{run_demo, run_extract, DemoArgs, ExtractArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_eval::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hiring Evaluation Service",
    about = "Score candidates against job postings, flag bias language, and report on cohorts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate the sample roster against the sample jobs and print cohort reports
    Demo(DemoArgs),
    /// Print the features extracted from a resume text file
    Extract(ExtractArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
        Command::Extract(args) => run_extract(args),
    }
}
