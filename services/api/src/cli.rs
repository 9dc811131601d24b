use crate::demo::{print_steps, run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_workflow::error::AppError;
use hiring_workflow::workflows::hiring::HiringStage;

#[derive(Parser, Debug)]
#[command(
    name = "Hiring Workflow",
    about = "Run the hiring workflow service or walk through it from the command line",
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
    /// List the workflow steps with their advance actions
    Steps,
    /// Walk a sample requisition from job creation to onboarding
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Start with steps before this one (1-8) already completed
    #[arg(long, value_parser = crate::infra::parse_step)]
    pub(crate) resume_step: Option<HiringStage>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Steps => {
            print_steps();
            Ok(())
        }
        Command::Demo(args) => run_demo(args),
    }
}
