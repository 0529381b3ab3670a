use chrono::NaiveDate;
use clap::Args;
use perf_rating::form::{FormState, RowInput};
use perf_rating::rating::{CompetencyMode, RatingConfig};

/// Flags shared by every command that evaluates a form.
#[derive(Args, Debug, Default, Clone, Copy)]
pub(crate) struct ModeArgs {
    /// Derive the leadership rating from the selected grades instead of the fixed 80%
    #[arg(long)]
    pub(crate) dynamic_competency: bool,
}

impl ModeArgs {
    pub(crate) fn apply(self, mut config: RatingConfig) -> RatingConfig {
        if self.dynamic_competency {
            config.competency_mode = CompetencyMode::Dynamic;
        }
        config
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// A filled-in form used by the demo command.
pub(crate) fn sample_form(config: &RatingConfig) -> FormState {
    let mut state = FormState::blank(config);

    let department = [
        ("20", "E"),
        ("15", "E+"),
        ("15", "E"),
        ("10", "E"),
        ("10", "E-"),
        ("10", "E++"),
        ("10", "E"),
        ("5", "E"),
        ("5", "E+"),
    ];
    for (slot, (weight, grade)) in state.department.iter_mut().zip(department) {
        *slot = RowInput::new(weight, grade);
    }

    let employee = [("30", "E+"), ("30", "E"), ("25", "E"), ("15", "E")];
    for (idx, slot) in state.employee.iter_mut().enumerate() {
        *slot = employee
            .get(idx)
            .map(|(weight, grade)| RowInput::new(*weight, *grade));
    }

    let competencies = ["E", "E+", "E", "E-", "E"];
    for (slot, grade) in state.competencies.iter_mut().zip(competencies) {
        *slot = grade.to_string();
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_form_fits_default_configuration() {
        let config = RatingConfig::default();
        let state = sample_form(&config);

        assert_eq!(state.department.len(), config.department_rows);
        assert_eq!(state.employee.len(), config.employee_rows);
        assert_eq!(state.employee.iter().flatten().count(), 4);
        assert!(state.unrecognized_grades().is_empty());
    }

    #[test]
    fn mode_flag_switches_competency_mode() {
        let config = ModeArgs {
            dynamic_competency: true,
        }
        .apply(RatingConfig::default());
        assert_eq!(config.competency_mode, CompetencyMode::Dynamic);

        let config = ModeArgs::default().apply(RatingConfig::default());
        assert_eq!(config.competency_mode, CompetencyMode::Fixed);
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert!(parse_date("2025-12-31").is_ok());
        let error = parse_date("31/12/2025").expect_err("wrong format");
        assert!(error.contains("YYYY-MM-DD"));
    }
}
