//! Number formatting for the dashboard's text fields.

/// Groups the digits of `value` in threes: `6362620` becomes `6,362,620`.
pub fn group_thousands(value: i64) -> String {
    group_digits(value, 3)
}

/// Groups the digits of `value` the way the Indian numbering system does:
/// the last three digits, then pairs. `11439944847` becomes `11,43,99,44,847`.
pub fn group_indian(value: i64) -> String {
    group_digits(value, 2)
}

/// Rounds to the nearest integer with halves going up, then saturates to `i64`.
pub fn round_half_up(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    let floor = value.floor();
    if value - floor >= 0.5 {
        (floor + 1.0) as i64
    } else {
        floor as i64
    }
}

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Fixed-point rendering with exactly `decimals` digits after the point.
///
/// Exact ties round away from zero, so `fixed(0.125, 2)` is `0.13`. Every other
/// value rounds to the nearest representation.
pub fn fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if decimals >= EXACT_DIGITS {
        return format!("{:.*}", decimals, value);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some(point) = exact.find('.') else {
        return format!("{:.*}", decimals, value);
    };
    let (kept, dropped) = exact.split_at(point + 1 + decimals);
    let is_tie = dropped.starts_with('5') && dropped[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", decimals, value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, increment_last_digit(kept.trim_end_matches('.')))
}

/// Adds one unit in the last place of a plain decimal string, carrying left.
fn increment_last_digit(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

fn group_digits(value: i64, upper_group: usize) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(upper_group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{}{},{}", sign, groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(6_362_620), "6,362,620");
        assert_eq!(group_thousands(-1_234_567), "-1,234,567");
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(847), "847");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(100_000), "1,00,000");
        assert_eq!(group_indian(11_439_944_847), "11,43,99,44,847");
        assert_eq!(group_indian(-12_345_678), "-1,23,45,678");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(f64::NAN), 0);
    }

    #[test]
    fn test_round_half_up_at_float_edges() {
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(4_503_599_627_370_497.0), 4_503_599_627_370_497);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(1_144_392_944_759.77), 1_144_392_944_760);
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(181.0, 2), "181.00");
        assert_eq!(fixed(0.129082, 4), "0.1291");
        assert_eq!(fixed(87.34, 2), "87.34");
    }

    #[test]
    fn test_fixed_rounds_exact_ties_up() {
        assert_eq!(fixed(0.125, 2), "0.13");
        assert_eq!(fixed(12.125, 2), "12.13");
        assert_eq!(fixed(0.625, 2), "0.63");
        assert_eq!(fixed(99.5, 0), "100");
        assert_eq!(fixed(0.5, 0), "1");
        assert_eq!(fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_fixed_near_ties_round_to_nearest() {
        // 1.005 is stored just below the tie.
        assert_eq!(fixed(1.005, 2), "1.00");
        assert_eq!(fixed(2.675, 2), "2.67");
        assert_eq!(fixed(9.995, 2), "9.99");
        assert_eq!(fixed(0.0, 2), "0.00");
    }
}
