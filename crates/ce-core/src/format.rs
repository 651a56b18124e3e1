//! Display formatting for summary statistics.

/// Render `value` with exactly two decimals, rounding half up.
///
/// Rounding runs on the shortest decimal representation of the float (the
/// digits a user would type), so `12.345` renders as `12.35` even though the
/// nearest binary value sits just below the tie. Negative results that round
/// to zero render without a sign.
pub fn format_fixed2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // f64 Display never switches to exponent notation.
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let frac: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    digits.extend((0..2).map(|i| frac.get(i).copied().unwrap_or(0)));

    if frac.get(2).is_some_and(|&d| d >= 5) {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let is_zero = digits.iter().all(|&d| d == 0);

    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| char::from(b'0' + d)));
    out.push('.');
    out.extend(digits[split..].iter().map(|&d| char::from(b'0' + d)));
    out
}
