// src/utils.rs

/// Compact amount formatting: `12.3K` from 1000 upward, plain otherwise.
/// Works on the absolute value; the sign is the caller's problem.
pub fn format_compact(value: f64, decimals: usize) -> String {
    let v = value.abs();
    if v >= 1000.0 {
        format!("{:.prec$}K", v / 1000.0, prec = decimals)
    } else {
        format!("{:.prec$}", v, prec = decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::format_compact;

    #[test]
    fn plain_below_thousand() {
        assert_eq!(format_compact(999.94, 1), "999.9");
        assert_eq!(format_compact(0.0, 1), "0.0");
        assert_eq!(format_compact(42.5, 2), "42.50");
    }

    #[test]
    fn k_suffix_from_thousand() {
        assert_eq!(format_compact(1000.0, 1), "1.0K");
        assert_eq!(format_compact(12_345.0, 1), "12.3K");
        assert_eq!(format_compact(1_500_000.0, 2), "1500.00K");
    }

    #[test]
    fn negative_uses_absolute_value() {
        assert_eq!(format_compact(-2500.0, 1), "2.5K");
        assert_eq!(format_compact(-7.25, 2), "7.25");
    }
}
