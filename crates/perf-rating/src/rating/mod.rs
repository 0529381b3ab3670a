//! Pure calculators turning graded rows into category ratings and the yearly overall grade.

mod config;
mod display;
mod domain;
mod grade;
mod normalizer;
mod policy;
pub mod report;
mod rules;

#[cfg(test)]
mod tests;

pub use config::{
    CompetencyMode, RatingConfig, COMPETENCY_ROWS, DEPARTMENT_ROWS, EMPLOYEE_ROWS,
    FIXED_COMPETENCY_RATING,
};
pub use display::{format_percent, format_weight};
pub use domain::{CategoryRating, CompetencyRating, OverallRating, RatingSheet, Row};
pub use grade::{points_for_label, Grade};
pub use normalizer::parse_weight;
pub use report::RatingReport;

use chrono::NaiveDate;

/// Stateless evaluator applying a [`RatingConfig`] to rows supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct RatingEngine {
    config: RatingConfig,
}

impl RatingEngine {
    pub fn new(config: RatingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Department objectives; rows past the configured count are ignored.
    pub fn department(&self, rows: &[Row]) -> CategoryRating {
        rules::aggregate_weighted(rows.iter().take(self.config.department_rows))
    }

    /// Employee job objectives; absent rows contribute neither weight nor points.
    pub fn employee(&self, rows: &[Option<Row>]) -> CategoryRating {
        rules::aggregate_weighted(
            rows.iter()
                .take(self.config.employee_rows)
                .filter_map(Option::as_ref),
        )
    }

    pub fn leadership(&self, grades: &[Grade]) -> CompetencyRating {
        rules::aggregate_competencies(grades, &self.config)
    }

    pub fn overall(&self, individual: f64, competency: f64) -> OverallRating {
        policy::derive_overall(individual, competency)
    }

    pub fn evaluate(&self, sheet: &RatingSheet, evaluated_on: NaiveDate) -> RatingReport {
        let department = self.department(&sheet.department);
        let employee = self.employee(&sheet.employee);
        let leadership = self.leadership(&sheet.competencies);
        let overall = self.overall(employee.rating, leadership.rating);

        RatingReport {
            evaluated_on,
            department: department.into(),
            employee: employee.into(),
            leadership: leadership.into(),
            overall: overall.into(),
        }
    }
}
