use crate::demo::{run_assess, run_dashboard, run_demo, AssessArgs, DashboardArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lendwise::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "LendWise",
    about = "Score loan applicants and serve the LendWise lending dashboard API",
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
    /// Score a single applicant from the command line
    Assess(AssessArgs),
    /// Print the dashboard metrics and risk distribution
    Dashboard(DashboardArgs),
    /// Walk through a sample application from intake to recommendation
    Demo,
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
        Command::Assess(args) => run_assess(args),
        Command::Dashboard(args) => run_dashboard(args),
        Command::Demo => run_demo(),
    }
}
