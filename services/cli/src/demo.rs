use crate::infra::{sample_form, ModeArgs};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use perf_rating::error::AppError;
use perf_rating::form::{FormImporter, FormState};
use perf_rating::rating::{RatingConfig, RatingEngine, RatingReport};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) mode: ModeArgs,
}

#[derive(Args, Debug)]
pub(crate) struct RateArgs {
    /// Saved form to rate (`.csv` sheets or the JSON form layout)
    #[arg(long)]
    pub(crate) form: PathBuf,
    /// Output format for the report
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub(crate) format: ReportFormat,
    /// Evaluation date for the report (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) mode: ModeArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    Text,
    Json,
}

pub(crate) fn run_demo(args: DemoArgs, config: RatingConfig) -> Result<(), AppError> {
    let DemoArgs { today, mode } = args;

    let config = mode.apply(config);
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let state = sample_form(&config);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Performance rating demo (sample form)")?;
    let report = evaluate(&state, config, today);
    render_report(&report, &mut stdout)?;
    Ok(())
}

pub(crate) fn run_rate(args: RateArgs, config: RatingConfig) -> Result<(), AppError> {
    let RateArgs {
        form,
        format,
        today,
        mode,
    } = args;

    let config = mode.apply(config);
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let state = FormImporter::from_path(&form, &config)?;
    let report = evaluate(&state, config, today);

    let mut stdout = io::stdout().lock();
    match format {
        ReportFormat::Text => render_report(&report, &mut stdout)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

fn evaluate(state: &FormState, config: RatingConfig, today: NaiveDate) -> RatingReport {
    for (category, row, label) in state.unrecognized_grades() {
        tracing::warn!(%category, row = row + 1, label, "unrecognized grade scored as 0 points");
    }

    RatingEngine::new(config).evaluate(&state.to_sheet(), today)
}

pub(crate) fn render_report<W: Write>(report: &RatingReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Evaluated on {}", report.evaluated_on)?;

    writeln!(out, "\nCategory ratings")?;
    writeln!(
        out,
        "- Department objectives: weight {} | rating {}",
        report.department.weight_display, report.department.rating_display
    )?;
    writeln!(
        out,
        "- Employee job objectives: weight {} | rating {}",
        report.employee.weight_display, report.employee.rating_display
    )?;
    writeln!(
        out,
        "- Leadership competencies ({}): rating {}",
        report.leadership.mode.label(),
        report.leadership.rating_display
    )?;

    writeln!(
        out,
        "\nOverall rating for the year: {} (performance result {:.3})",
        report.overall.grade_label, report.overall.perf_result
    )?;

    Ok(())
}
