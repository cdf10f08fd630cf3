//! Number formatting helpers for cards, charts and tables

/// Currency prefix used by the dashboard
pub const CURRENCY_PREFIX: &str = "$";

/// Formats a number with exactly `decimals` digits after the point
///
/// ```ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Formats a money value as currency prefix + two decimals, no grouping
///
/// ```ignore
/// assert_eq!(format_money(1234.5), "$1234.50");
/// ```
pub fn format_money(value: f64) -> String {
    format!("{}{}", CURRENCY_PREFIX, format_number_with_decimals(value, 2))
}

/// Formats a plain count the shortest way (`12.0` -> `"12"`, `2.5` -> `"2.5"`)
pub fn format_count(value: f64) -> String {
    value.to_string()
}

/// Compact label for chart axes: thousands as `k`, millions as `M`
pub fn format_axis_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        trim_zero_fraction(format!("{:.1}", value / 1_000_000.0)) + "M"
    } else if abs >= 1_000.0 {
        trim_zero_fraction(format!("{:.1}", value / 1_000.0)) + "k"
    } else if abs >= 10.0 || abs == 0.0 {
        format!("{:.0}", value)
    } else {
        trim_zero_fraction(format!("{:.1}", value))
    }
}

fn trim_zero_fraction(s: String) -> String {
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "$1234.50");
        assert_eq!(format_money(1234567.891), "$1234567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-3.0), "$-3.00");
        assert_eq!(format_money(0.005), "$0.01");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1234.567");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(12.0), "12");
        assert_eq!(format_count(2.5), "2.5");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn test_format_axis_value() {
        assert_eq!(format_axis_value(0.0), "0");
        assert_eq!(format_axis_value(2.5), "2.5");
        assert_eq!(format_axis_value(250.0), "250");
        assert_eq!(format_axis_value(1500.0), "1.5k");
        assert_eq!(format_axis_value(2000.0), "2k");
        assert_eq!(format_axis_value(3_300_000.0), "3.3M");
        assert_eq!(format_axis_value(-1500.0), "-1.5k");
    }
}
