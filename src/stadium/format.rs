//! One-decimal rendering of weights.
//!
//! Rounds the shortest decimal form of a value half-up, so `45.25` renders
//! as `45.3` and `199.95` as `200.0`. `{:.1}` would round the binary value
//! with ties to even and print `45.2` and `199.9`.

use std::fmt;

/// Displays a number with one decimal, rounded half-up.
///
/// Honors width and alignment (`{:>6}`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneDecimal(pub f64);

impl fmt::Display for OneDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&round_half_up(self.0))
    }
}

fn round_half_up(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.1}", value);
    }

    // Shortest representation that round-trips; never uses an exponent.
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let mut frac = frac_part.bytes().map(|b| b - b'0');
    digits.push(frac.next().unwrap_or(0));

    if frac.next().is_some_and(|d| d >= 5) {
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

    let (whole, tenth) = digits.split_at(digits.len() - 1);
    let whole: String = whole.iter().map(|d| char::from(b'0' + d)).collect();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, whole, tenth[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoints_round_up() {
        assert_eq!(OneDecimal(45.25).to_string(), "45.3");
        assert_eq!(OneDecimal(50.25).to_string(), "50.3");
        assert_eq!(OneDecimal(199.95).to_string(), "200.0");
        assert_eq!(OneDecimal(0.05).to_string(), "0.1");
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(OneDecimal(0.0).to_string(), "0.0");
        assert_eq!(OneDecimal(60.0).to_string(), "60.0");
        assert_eq!(OneDecimal(150.5).to_string(), "150.5");
        assert_eq!(OneDecimal(50.1666).to_string(), "50.2");
        assert_eq!(OneDecimal(45.24).to_string(), "45.2");
    }

    #[test]
    fn test_carry_into_new_digit() {
        assert_eq!(OneDecimal(99.96).to_string(), "100.0");
        assert_eq!(OneDecimal(9.95).to_string(), "10.0");
    }

    #[test]
    fn test_width_is_honored() {
        assert_eq!(format!("{:>6}", OneDecimal(45.25)), "  45.3");
        assert_eq!(format!("{:>8}", OneDecimal(100.0)), "   100.0");
    }

    #[test]
    fn test_negative_values_round_away_from_zero() {
        assert_eq!(OneDecimal(-1.25).to_string(), "-1.3");
        assert_eq!(OneDecimal(-0.01).to_string(), "-0.0");
    }
}
