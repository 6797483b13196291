use crate::demo::{run_demo, run_roster_report, DemoArgs, RosterReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hirepath::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "HirePath",
    about = "Track job applications through the review pipeline from the command line",
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
    /// Inspect a stored roster
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
    /// Run an end-to-end walkthrough of the hiring pipeline
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// Print a roster report, optionally filtered and exported as CSV
    Report(RosterReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the roster data file hydrated at startup
    #[arg(long)]
    pub(crate) data_file: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Roster {
            command: RosterCommand::Report(args),
        } => run_roster_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
