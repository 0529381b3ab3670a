use crate::infra::ModeArgs;
use clap::Args;
use perf_rating::error::AppError;
use perf_rating::form::{
    Category, DisplayTarget, Field, FormController, FormImporter, FormState, InMemoryDisplay,
    InputChange,
};
use perf_rating::rating::{RatingConfig, RatingEngine};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SessionArgs {
    /// Start from a saved form instead of a blank one
    #[arg(long)]
    pub(crate) form: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) mode: ModeArgs,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SessionCommand {
    Change(InputChange),
    Show,
    Quit,
}

pub(crate) fn run_session(args: SessionArgs, config: RatingConfig) -> Result<(), AppError> {
    let SessionArgs { form, mode } = args;

    let config = mode.apply(config);
    let state = match form {
        Some(path) => FormImporter::from_path(path, &config)?,
        None => FormState::blank(&config),
    };
    let controller =
        FormController::new(RatingEngine::new(config), state, InMemoryDisplay::default());

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    drive(controller, stdin, &mut stdout)?;
    Ok(())
}

/// Runs the startup pass, then applies one edit per input line, echoing every display write.
pub(crate) fn drive<R: BufRead, W: Write>(
    mut controller: FormController<InMemoryDisplay>,
    input: R,
    out: &mut W,
) -> io::Result<FormController<InMemoryDisplay>> {
    controller.initialize();
    flush_writes(&mut controller, out)?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(SessionCommand::Show)) => {
                for target in DisplayTarget::ALL {
                    let text = controller.sink().get(target).unwrap_or("");
                    writeln!(out, "{target}: {text}")?;
                }
            }
            Ok(Some(SessionCommand::Change(change))) => match controller.apply(change) {
                Ok(_) => flush_writes(&mut controller, out)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Err(message) => writeln!(out, "error: {message}")?,
        }
    }

    Ok(controller)
}

fn flush_writes<W: Write>(
    controller: &mut FormController<InMemoryDisplay>,
    out: &mut W,
) -> io::Result<()> {
    for (target, text) in controller.sink().writes() {
        writeln!(out, "{target}: {text}")?;
    }
    controller.sink_mut().clear_writes();
    out.flush()
}

/// `<dept|emp|comp> <row> <weight|grade> [value]` with a 1-based row, or `show` / `quit`.
/// Blank lines and `#` comments yield `None`.
pub(crate) fn parse_line(line: &str) -> Result<Option<SessionCommand>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = trimmed.split_whitespace();
    let head = tokens.next().unwrap_or_default();
    match head.to_ascii_lowercase().as_str() {
        "quit" | "exit" => return Ok(Some(SessionCommand::Quit)),
        "show" => return Ok(Some(SessionCommand::Show)),
        _ => {}
    }

    let category =
        Category::parse(head).ok_or_else(|| format!("unknown category '{head}'"))?;

    let row_token = tokens
        .next()
        .ok_or_else(|| "missing row number".to_string())?;
    let row = row_token
        .parse::<usize>()
        .ok()
        .filter(|row| *row > 0)
        .ok_or_else(|| format!("row must be a number starting at 1 (got '{row_token}')"))?;

    let field = match tokens.next().map(str::to_ascii_lowercase).as_deref() {
        Some("weight") => Field::Weight,
        Some("grade") => Field::Grade,
        Some(other) => return Err(format!("unknown field '{other}' (expected weight or grade)")),
        None => return Err("missing field (weight or grade)".to_string()),
    };

    let value = tokens.collect::<Vec<_>>().join(" ");

    Ok(Some(SessionCommand::Change(InputChange::new(
        category,
        row - 1,
        field,
        value,
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn blank_controller() -> FormController<InMemoryDisplay> {
        let config = RatingConfig::default();
        FormController::new(
            RatingEngine::new(config.clone()),
            FormState::blank(&config),
            InMemoryDisplay::default(),
        )
    }

    #[test]
    fn parses_edits_with_one_based_rows() {
        assert_eq!(
            parse_line("dept 3 grade E+"),
            Ok(Some(SessionCommand::Change(InputChange::department_grade(
                2, "E+"
            ))))
        );
        assert_eq!(
            parse_line("  EMP 1 Weight 12.5 "),
            Ok(Some(SessionCommand::Change(InputChange::employee_weight(
                0, "12.5"
            ))))
        );
        assert_eq!(
            parse_line("comp 5 grade"),
            Ok(Some(SessionCommand::Change(InputChange::competency_grade(
                4, ""
            ))))
        );
    }

    #[test]
    fn ignores_blank_and_comment_lines() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   # department first"), Ok(None));
        assert_eq!(parse_line("quit"), Ok(Some(SessionCommand::Quit)));
        assert_eq!(parse_line("show"), Ok(Some(SessionCommand::Show)));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("bonus 1 grade E").is_err());
        assert!(parse_line("dept").is_err());
        assert!(parse_line("dept 0 grade E").is_err());
        assert!(parse_line("dept x grade E").is_err());
        assert!(parse_line("dept 1 score E").is_err());
        assert!(parse_line("dept 1").is_err());
    }

    #[test]
    fn session_echoes_display_writes_per_edit() {
        let script = "emp 1 weight 100\nemp 1 grade E\n# nothing\ndept 10 grade E\nbogus\nquit\ndept 1 weight 50\n";
        let mut out = Vec::new();

        let controller =
            drive(blank_controller(), Cursor::new(script), &mut out).expect("session runs");
        let text = String::from_utf8(out).expect("utf8 output");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            &lines[..6],
            &[
                "department_weight: 0%",
                "department_rating: 0%",
                "employee_weight: 0%",
                "employee_rating: 0%",
                "leadership_rating: 80%",
                "overall_rating: E--",
            ]
        );
        // weight edit: grade still empty, so 0 points
        assert_eq!(
            &lines[6..9],
            &["employee_weight: 100%", "employee_rating: 0%", "overall_rating: E--"]
        );
        // (1.0 + 0.8) / 2 == 0.9 stays below "E"
        assert_eq!(
            &lines[9..12],
            &["employee_weight: 100%", "employee_rating: 100%", "overall_rating: E-"]
        );
        assert!(lines[12].starts_with("error: department objectives row 10 is out of range"));
        assert_eq!(lines[13], "error: unknown category 'bogus'");
        assert_eq!(lines.len(), 14);

        assert_eq!(controller.state().department[0].weight, "");
    }

    #[test]
    fn show_prints_every_target() {
        let mut out = Vec::new();

        drive(blank_controller(), Cursor::new("show\n"), &mut out).expect("session runs");
        let text = String::from_utf8(out).expect("utf8 output");

        assert_eq!(text.lines().count(), 12);
        assert!(text.lines().skip(6).any(|line| line == "leadership_rating: 80%"));
    }
}
