use crate::demo::{run_demo, run_rate, DemoArgs, RateArgs};
use crate::session::{run_session, SessionArgs};
use clap::{Parser, Subcommand};
use perf_rating::config::AppConfig;
use perf_rating::error::AppError;
use perf_rating::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Performance Rating Calculator",
    about = "Derive yearly performance ratings from weighted objective and competency evaluations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rate a built-in sample form (default command)
    Demo(DemoArgs),
    /// Rate a saved form (JSON or CSV) and print the report
    Rate(RateArgs),
    /// Edit a form line by line from stdin and print every display update
    Session(SessionArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(
        ?config.environment,
        competency_mode = config.rating.competency_mode.label(),
        department_rows = config.rating.department_rows,
        employee_rows = config.rating.employee_rows,
        competency_rows = config.rating.competency_rows,
        "performance rating calculator ready"
    );

    match command {
        Command::Demo(args) => run_demo(args, config.rating),
        Command::Rate(args) => run_rate(args, config.rating),
        Command::Session(args) => run_session(args, config.rating),
    }
}
