//! Number formatting with thousands separators.

/// Formats a number with `,` thousands separators.
///
/// Fractional digits are kept as written by `f64`'s own formatting, so whole
/// numbers print without a decimal point.
///
/// # Examples
///
/// ```rust
/// use planwright_core::display::format_number;
///
/// assert_eq!(format_number(1_234_567.0), "1,234,567");
/// assert_eq!(format_number(50_000.0), "50,000");
/// assert_eq!(format_number(1234.5), "1,234.5");
/// assert_eq!(format_number(-9876.0), "-9,876");
/// ```
pub fn format_number(value: f64) -> String {
    let raw = value.to_string();
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
