use super::domain::OverallRating;
use super::grade::Grade;

/// Lower bounds (exclusive) checked from the top; the first one exceeded decides the grade.
const THRESHOLDS: [(f64, Grade); 4] = [
    (1.15, Grade::FarExceeds),
    (1.00, Grade::Exceeds),
    (0.90, Grade::Meets),
    (0.75, Grade::Below),
];

pub(crate) fn classify(perf_result: f64) -> Grade {
    THRESHOLDS
        .iter()
        .find(|(bound, _)| perf_result > *bound)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::FarBelow)
}

pub(crate) fn derive_overall(individual: f64, competency: f64) -> OverallRating {
    let perf_result = (individual + competency) / 2.0;

    OverallRating {
        perf_result,
        grade: classify(perf_result),
    }
}
