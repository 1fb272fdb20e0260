//! Numeric display formatting for monetary and percentage fields

/// Direction of a percentage change for display colouring.
///
/// Zero classifies as `Up`; only strictly negative values are `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

pub fn classify(change: f64) -> Trend {
    if change < 0.0 { Trend::Down } else { Trend::Up }
}

/// Formats a monetary amount with thousands grouping.
///
/// Keeps the full precision of the value; only the integer part is
/// grouped. `1234567.89` becomes `"1,234,567.89"`.
pub fn format_amount(value: f64) -> String {
    let text = value.to_string();
    let unsigned = text.strip_prefix('-').unwrap_or(&text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    if text.starts_with('-') {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a percentage change with two decimal places and a `%` suffix.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}
