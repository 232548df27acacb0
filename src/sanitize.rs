// Nothing here fails: unparseable, non-finite or out-of-domain text falls
// back to the domain minimum.

pub const MIN_STAKE: f64 = 0.0;
pub const MIN_ODDS: f64 = 1.0;

pub fn sanitize_stake(raw: &str) -> f64 {
    clamp_to_min(raw, MIN_STAKE)
}

pub fn sanitize_odds(raw: &str) -> f64 {
    clamp_to_min(raw, MIN_ODDS)
}

fn clamp_to_min(raw: &str, min: f64) -> f64 {
    match parse_leading_float(raw) {
        Some(v) if v.is_finite() && v >= min => v,
        _ => min,
    }
}

// Lenient parse: skips leading whitespace and reads the longest numeric
// prefix, ignoring whatever follows ("12abc" -> 12).
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) { end += 1; }
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // "5." is still 5, the dot only counts with digits on some side
        if int_digits > 0 || frac_digits > 0 { end += 1 + frac_digits; }
    }
    if int_digits == 0 && frac_digits == 0 { return None; }

    // exponent is only taken when at least one digit follows it
    if matches!(bytes.get(end), Some(&b'e') | Some(&b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(&b'+') | Some(&b'-')) { exp_end += 1; }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 { end = exp_end + exp_digits; }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
