//! Display formatting helpers.

use std::fmt::Display;

/// Render a number with a comma every three digits, counting from the right
/// of the integer part. Sign and decimal part pass through untouched. Always
/// comma-grouped, regardless of runtime locale.
pub fn format_number<N: Display>(n: N) -> String {
    let rendered = n.to_string();
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn short_numbers_are_unchanged() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn boundary_lengths() {
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(100), "100");
        assert_eq!(format_number(10_000), "10,000");
    }

    #[test]
    fn negative_numbers_keep_the_sign() {
        assert_eq!(format_number(-1_234_567), "-1,234,567");
        assert_eq!(format_number(-999), "-999");
    }

    #[test]
    fn decimal_part_is_untouched() {
        assert_eq!(format_number(1234.56), "1,234.56");
        assert_eq!(format_number(0.25), "0.25");
    }
}
