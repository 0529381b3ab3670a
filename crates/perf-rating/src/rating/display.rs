/// Total weight as shown beside a category, e.g. `100%` or `12.5%`.
pub fn format_weight(total_weight: f64) -> String {
    format!("{}%", total_weight)
}

/// Rating fraction as a whole percentage; halves round away from zero (`0.125` -> `13%`,
/// `-0.125` -> `-13%`).
pub fn format_percent(rating: f64) -> String {
    if !rating.is_finite() {
        return "0%".to_string();
    }

    format!("{}%", (rating * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_use_shortest_representation() {
        assert_eq!(format_weight(0.0), "0%");
        assert_eq!(format_weight(100.0), "100%");
        assert_eq!(format_weight(12.5), "12.5%");
    }

    #[test]
    fn percentages_round_half_up() {
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(0.8), "80%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(5.0 / 3.0), "167%");
        assert_eq!(format_percent(0.125), "13%");
        assert_eq!(format_percent(0.124), "12%");
    }

    #[test]
    fn negative_halves_round_away_from_zero() {
        assert_eq!(format_percent(-0.125), "-13%");
        assert_eq!(format_percent(-0.124), "-12%");
        assert_eq!(format_percent(-0.004), "0%");
    }

    #[test]
    fn non_finite_ratings_display_as_zero() {
        assert_eq!(format_percent(f64::NAN), "0%");
        assert_eq!(format_percent(f64::INFINITY), "0%");
    }
}
