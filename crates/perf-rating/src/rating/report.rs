use super::config::CompetencyMode;
use super::domain::{CategoryRating, CompetencyRating, OverallRating};
use super::grade::Grade;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub total_weight: f64,
    pub total_point: f64,
    pub rating: f64,
    pub weight_display: String,
    pub rating_display: String,
}

impl From<CategoryRating> for CategorySummary {
    fn from(value: CategoryRating) -> Self {
        Self {
            total_weight: value.total_weight,
            total_point: value.total_point,
            rating: value.rating,
            weight_display: value.weight_display(),
            rating_display: value.rating_display(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetencySummary {
    pub mode: CompetencyMode,
    pub total_points: f64,
    pub rating: f64,
    pub rating_display: String,
}

impl From<CompetencyRating> for CompetencySummary {
    fn from(value: CompetencyRating) -> Self {
        Self {
            mode: value.mode,
            total_points: value.total_points,
            rating: value.rating,
            rating_display: value.rating_display(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallSummary {
    pub perf_result: f64,
    pub grade: Grade,
    pub grade_label: &'static str,
}

impl From<OverallRating> for OverallSummary {
    fn from(value: OverallRating) -> Self {
        Self {
            perf_result: value.perf_result,
            grade: value.grade,
            grade_label: value.grade.label(),
        }
    }
}

/// Every category result of one evaluation pass, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct RatingReport {
    pub evaluated_on: NaiveDate,
    pub department: CategorySummary,
    pub employee: CategorySummary,
    pub leadership: CompetencySummary,
    pub overall: OverallSummary,
}
