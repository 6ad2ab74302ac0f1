//! Number formatting shared by the readouts and the diagram labels.

/// Format `value` with an SI-style "k" prefix above a thousand.
///
/// Values with |x| ≥ 1000 are divided by 1000 and printed with two
/// decimals (`1.50 kPa`); smaller values are rounded to two decimals and
/// printed without trailing zeros (`999.4 Pa`). Halves round away from
/// zero in both branches (`1125 N` is `1.13 kN`). An empty `unit` yields
/// the bare number.
pub fn format_quantity(value: f64, unit: &str) -> String {
    let text = if value.abs() >= 1000.0 {
        // `{:.2}` alone would round 1.125 to even.
        format!("{:.2} k{unit}", (value / 10.0).round() / 100.0)
    } else {
        format!("{} {unit}", round2(value))
    };
    text.trim_end().to_string()
}

/// Round to two decimals, normalizing negative zero.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to the nearest integer for whole-unit labels (`120945 Pa`).
/// Halves go toward positive infinity, so `-9809.5` is `-9809`.
pub fn whole(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_a_thousand_keeps_significant_decimals() {
        assert_eq!(format_quantity(999.4, "Pa"), "999.4 Pa");
        assert_eq!(format_quantity(12.0, "N"), "12 N");
        assert_eq!(format_quantity(1.33333, "m"), "1.33 m");
        assert_eq!(format_quantity(0.005, "m"), "0.01 m");
    }

    #[test]
    fn test_thousands_get_k_prefix() {
        assert_eq!(format_quantity(1500.0, "Pa"), "1.50 kPa");
        assert_eq!(format_quantity(-2000.0, "N"), "-2.00 kN");
        assert_eq!(format_quantity(1000.0, "Pa"), "1.00 kPa");
        assert_eq!(format_quantity(120_950.0, "Pa"), "120.95 kPa");
    }

    #[test]
    fn test_thousands_round_halves_up() {
        assert_eq!(format_quantity(1125.0, "N"), "1.13 kN");
        assert_eq!(format_quantity(3375.0, "Pa"), "3.38 kPa");
        assert_eq!(format_quantity(-1125.0, "N"), "-1.13 kN");
        assert_eq!(format_quantity(1124.0, "N"), "1.12 kN");
    }

    #[test]
    fn test_empty_unit_and_negative_zero() {
        assert_eq!(format_quantity(1.3333, ""), "1.33");
        assert_eq!(format_quantity(-0.001, "m"), "0 m");
        assert_eq!(format_quantity(0.0, "N"), "0 N");
    }

    #[test]
    fn test_whole() {
        assert_eq!(whole(120_944.6), 120_945);
        assert_eq!(whole(2.5), 3);
        assert_eq!(whole(-9809.5), -9809);
        assert_eq!(whole(-9809.6), -9810);
    }
}
