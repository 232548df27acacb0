// Presentation only: values are rounded here and nowhere else.

pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{} {}", to_fixed_2(value), currency)
}

pub fn format_input(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

// Two decimals, with exact halfway cases going to the larger magnitude
// (5.125 -> "5.13"); `{:.2}` alone would pick the even digit.
fn to_fixed_2(value: f64) -> String {
    // -0.0 would otherwise print as "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    let abs = value.abs();
    // a value sits exactly between two cents only when it is an odd number of eighths
    let eighths = abs * 8.0;
    if eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (abs.fract() * 100.0).ceil();
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{:.0}.{:02.0}", sign, abs.trunc(), cents);
    }
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals_with_currency() {
        assert_eq!(format_amount(150.0, "₽"), "150.00 ₽");
        assert_eq!(format_amount(50.0, "₽"), "50.00 ₽");
        assert_eq!(format_amount(0.0, "₽"), "0.00 ₽");
        assert_eq!(format_amount(2.0 / 3.0, "₽"), "0.67 ₽");
        assert_eq!(format_amount(1234.5678, "$"), "1234.57 $");
    }

    #[test]
    fn test_halfway_rounds_up() {
        assert_eq!(format_amount(5.125, "₽"), "5.13 ₽");
        assert_eq!(format_amount(15.375, "₽"), "15.38 ₽");
        assert_eq!(format_amount(0.125, "₽"), "0.13 ₽");
        assert_eq!(format_amount(0.625, "₽"), "0.63 ₽");
        assert_eq!(format_amount(2.875, "₽"), "2.88 ₽");
        assert_eq!(format_amount(-5.125, "₽"), "-5.13 ₽");
    }

    #[test]
    fn test_near_halfway_uses_exact_value() {
        // 1.005 is stored just below the midpoint
        assert_eq!(format_amount(1.005, "₽"), "1.00 ₽");
        assert_eq!(format_amount(5.25, "₽"), "5.25 ₽");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_amount(-0.0, "₽"), "0.00 ₽");
        assert_eq!(format_input(-0.0), "0");
    }

    #[test]
    fn test_input_echo() {
        assert_eq!(format_input(100.0), "100");
        assert_eq!(format_input(1.5), "1.5");
        assert_eq!(format_input(2.05), "2.05");
    }
}
