use super::config::{CompetencyMode, RatingConfig};
use super::domain::{CategoryRating, CompetencyRating, Row};
use super::grade::Grade;

/// Points of an all-"E" category; this total is the 100% mark.
pub(crate) const BENCHMARK_POINTS: f64 = 3.0;
/// Points of the top grade, the ceiling for dynamic competency ratings.
pub(crate) const MAX_POINTS: f64 = 5.0;

/// Sums weight fraction times points over `rows`. The point total is measured against the
/// fixed benchmark and is never divided by the total weight, so a category whose weights add
/// up to less than 100 is rated against the full benchmark anyway.
pub(crate) fn aggregate_weighted<'a, I>(rows: I) -> CategoryRating
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut total_point = 0.0;
    let mut total_weight = 0.0;

    for row in rows {
        total_point += row.weight_fraction() * f64::from(row.grade.points());
        total_weight += row.weight;
    }

    if total_weight == 0.0 {
        return CategoryRating {
            total_weight,
            total_point,
            rating: 0.0,
        };
    }

    let rating = if total_point == BENCHMARK_POINTS {
        1.0
    } else {
        total_point / BENCHMARK_POINTS
    };

    CategoryRating {
        total_weight,
        total_point,
        rating,
    }
}

pub(crate) fn aggregate_competencies(grades: &[Grade], config: &RatingConfig) -> CompetencyRating {
    let total_points: f64 = grades
        .iter()
        .take(config.competency_rows)
        .map(|grade| f64::from(grade.points()))
        .sum();

    let rating = match config.competency_mode {
        CompetencyMode::Fixed => config.fixed_competency_rating,
        CompetencyMode::Dynamic if config.competency_rows == 0 => 0.0,
        CompetencyMode::Dynamic => {
            let mean = total_points / config.competency_rows as f64;
            mean / MAX_POINTS
        }
    };

    CompetencyRating {
        mode: config.competency_mode,
        total_points,
        rating,
    }
}
