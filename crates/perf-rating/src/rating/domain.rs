use serde::{Deserialize, Serialize};

use super::config::CompetencyMode;
use super::display::{format_percent, format_weight};
use super::grade::Grade;
use super::normalizer::parse_weight;

/// One scored line item: a weight in percent (20 means 20%) and the selected grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub weight: f64,
    pub grade: Grade,
}

impl Row {
    pub fn new(weight: f64, grade: Grade) -> Self {
        Self { weight, grade }
    }

    /// Normalizes raw field values: bad weights become 0 and unknown grades the lowest grade.
    pub fn from_raw(weight: &str, grade: &str) -> Self {
        Self {
            weight: parse_weight(weight),
            grade: Grade::from_label_or_lowest(grade),
        }
    }

    pub fn weight_fraction(&self) -> f64 {
        self.weight / 100.0
    }
}

/// Normalized inputs for one full evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSheet {
    pub department: Vec<Row>,
    pub employee: Vec<Option<Row>>,
    pub competencies: Vec<Grade>,
}

/// Weighted category result, expressed as a fraction of the "meets expectations" benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryRating {
    /// Sum of raw weights, shown next to the rating.
    pub total_weight: f64,
    /// Sum of weight fraction times grade points.
    pub total_point: f64,
    pub rating: f64,
}

impl CategoryRating {
    pub fn weight_display(&self) -> String {
        format_weight(self.total_weight)
    }

    pub fn rating_display(&self) -> String {
        format_percent(self.rating)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompetencyRating {
    pub mode: CompetencyMode,
    pub total_points: f64,
    pub rating: f64,
}

impl CompetencyRating {
    pub fn rating_display(&self) -> String {
        format_percent(self.rating)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallRating {
    /// Mean of the employee job and leadership ratings.
    pub perf_result: f64,
    pub grade: Grade,
}
