use super::common::*;
use crate::rating::{Grade, RatingEngine};

fn classify(individual: f64, competency: f64) -> Grade {
    RatingEngine::default().overall(individual, competency).grade
}

#[test]
fn boundary_values_fall_to_the_lower_grade() {
    // (1.0 + 0.8) / 2 == 0.9, which is not strictly above 0.90.
    let overall = engine().overall(1.0, 0.8);
    assert_eq!(overall.perf_result, 0.9);
    assert_eq!(overall.grade, Grade::Below);

    assert_eq!(classify(1.15, 1.15), Grade::Exceeds);
    assert_eq!(classify(1.0, 1.0), Grade::Meets);
    assert_eq!(classify(0.75, 0.75), Grade::FarBelow);
}

#[test]
fn high_results_reach_top_grade() {
    assert_eq!(classify(1.2, 1.2), Grade::FarExceeds);
}

#[test]
fn each_band_is_reachable() {
    assert_eq!(classify(1.4, 1.0), Grade::FarExceeds);
    assert_eq!(classify(1.3, 0.8), Grade::Exceeds);
    assert_eq!(classify(1.1, 0.8), Grade::Meets);
    assert_eq!(classify(0.8, 0.8), Grade::Below);
    assert_eq!(classify(0.0, 0.8), Grade::FarBelow);
}

#[test]
fn every_real_input_gets_a_grade() {
    assert_eq!(classify(-3.0, 0.0), Grade::FarBelow);
    assert_eq!(classify(f64::NAN, 0.8), Grade::FarBelow);
    assert_eq!(classify(100.0, 100.0), Grade::FarExceeds);
}

#[test]
fn evaluate_runs_every_calculator() {
    let report = engine().evaluate(&sheet(), review_date());

    assert_eq!(report.evaluated_on, review_date());
    assert_eq!(report.department.rating_display, "100%");
    assert_eq!(report.department.weight_display, "100%");
    assert_eq!(report.employee.rating_display, "108%");
    assert_eq!(report.leadership.rating_display, "80%");
    // (3.25 / 3 + 0.8) / 2 ~= 0.9417
    assert_eq!(report.overall.grade, Grade::Meets);
    assert_eq!(report.overall.grade_label, "E");
}
