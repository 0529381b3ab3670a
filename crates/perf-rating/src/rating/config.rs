use serde::{Deserialize, Serialize};

pub const DEPARTMENT_ROWS: usize = 9;
pub const EMPLOYEE_ROWS: usize = 7;
pub const COMPETENCY_ROWS: usize = 5;
pub const FIXED_COMPETENCY_RATING: f64 = 0.8;

/// How the leadership competency rating is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetencyMode {
    /// Constant rating regardless of the selected grades.
    #[default]
    Fixed,
    /// Mean grade points over the competency rows, as a fraction of the top grade.
    Dynamic,
}

impl CompetencyMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Dynamic => "dynamic",
        }
    }
}

/// Row counts and competency behavior for one rating form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    pub department_rows: usize,
    pub employee_rows: usize,
    pub competency_rows: usize,
    pub competency_mode: CompetencyMode,
    pub fixed_competency_rating: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            department_rows: DEPARTMENT_ROWS,
            employee_rows: EMPLOYEE_ROWS,
            competency_rows: COMPETENCY_ROWS,
            competency_mode: CompetencyMode::Fixed,
            fixed_competency_rating: FIXED_COMPETENCY_RATING,
        }
    }
}
