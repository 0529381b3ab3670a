use chrono::NaiveDate;

use crate::rating::{Grade, RatingConfig, RatingEngine, RatingSheet, Row};

pub(super) fn engine() -> RatingEngine {
    RatingEngine::new(RatingConfig::default())
}

pub(super) fn row(weight: f64, grade: Grade) -> Row {
    Row::new(weight, grade)
}

/// Nine department rows, all "E", with weights adding up to 100 and exact in binary.
pub(super) fn balanced_department() -> Vec<Row> {
    [25.0, 25.0, 12.5, 12.5, 6.25, 6.25, 6.25, 6.25, 0.0]
        .into_iter()
        .map(|weight| row(weight, Grade::Meets))
        .collect()
}

pub(super) fn empty_department() -> Vec<Row> {
    vec![row(0.0, Grade::FarBelow); 9]
}

pub(super) fn sheet() -> RatingSheet {
    RatingSheet {
        department: balanced_department(),
        employee: vec![
            Some(row(50.0, Grade::Meets)),
            Some(row(25.0, Grade::Exceeds)),
            None,
            Some(row(25.0, Grade::Meets)),
            None,
            None,
            None,
        ],
        competencies: vec![Grade::Meets; 5],
    }
}

pub(super) fn review_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 15).expect("valid review date")
}
