//! Distance display formatting.

/// Yards per meter.
pub const METERS_TO_YARDS: f64 = 1.09361;

/// Rounds a meter figure for display, optionally converted to yards.
pub fn format_distance(meters: f64, use_yards: bool) -> String {
    if use_yards {
        format!("{}yd", (meters * METERS_TO_YARDS).round() as i64)
    } else {
        format!("{}m", meters.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(150.0, false), "150m");
        assert_eq!(format_distance(150.0, true), "164yd");
        assert_eq!(format_distance(0.4, false), "0m");
    }
}
