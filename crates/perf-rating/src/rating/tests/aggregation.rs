use super::common::*;
use crate::rating::Grade;

#[test]
fn zero_weights_rate_zero_without_nan() {
    let rating = engine().department(&empty_department());

    assert_eq!(rating.total_weight, 0.0);
    assert_eq!(rating.rating, 0.0);
    assert!(!rating.rating.is_nan());
    assert_eq!(rating.weight_display(), "0%");
    assert_eq!(rating.rating_display(), "0%");
}

#[test]
fn all_meets_with_full_weight_hits_benchmark() {
    let rating = engine().department(&balanced_department());

    assert_eq!(rating.total_point, 3.0);
    assert_eq!(rating.rating, 1.0);
    assert_eq!(rating.weight_display(), "100%");
    assert_eq!(rating.rating_display(), "100%");
}

#[test]
fn single_far_exceeds_row_can_pass_one_hundred_percent() {
    let rating = engine().department(&[row(100.0, Grade::FarExceeds)]);

    assert_eq!(rating.total_point, 5.0);
    assert!((rating.rating - 5.0 / 3.0).abs() < 1e-12);
    assert_eq!(rating.rating_display(), "167%");
}

#[test]
fn partial_weights_are_not_renormalized() {
    // Known quirk: half the weight at "E" rates 50% rather than 100%.
    let rating = engine().department(&[row(50.0, Grade::Meets)]);

    assert_eq!(rating.total_weight, 50.0);
    assert_eq!(rating.total_point, 1.5);
    assert_eq!(rating.rating, 0.5);
    assert_eq!(rating.weight_display(), "50%");
    assert_eq!(rating.rating_display(), "50%");
}

#[test]
fn weights_over_one_hundred_are_accepted() {
    let rating = engine().department(&[row(80.0, Grade::Meets), row(40.0, Grade::Meets)]);

    assert_eq!(rating.weight_display(), "120%");
    assert_eq!(rating.rating_display(), "120%");
}

#[test]
fn department_ignores_rows_past_configured_count() {
    let mut rows = balanced_department();
    rows.push(row(100.0, Grade::FarExceeds));

    let rating = engine().department(&rows);

    assert_eq!(rating.total_weight, 100.0);
    assert_eq!(rating.rating, 1.0);
}

#[test]
fn absent_employee_rows_are_skipped() {
    let mut rows = vec![Some(row(0.0, Grade::FarExceeds)); 6];
    rows.insert(3, None);

    let rating = engine().employee(&rows);

    assert_eq!(rating.total_weight, 0.0);
    assert_eq!(rating.rating_display(), "0%");
}

#[test]
fn employee_rating_uses_present_rows_only() {
    let rating = engine().employee(&sheet().employee);

    // 0.5 * 3 + 0.25 * 4 + 0.25 * 3
    assert_eq!(rating.total_point, 3.25);
    assert_eq!(rating.total_weight, 100.0);
    assert_eq!(rating.rating_display(), "108%");
}
