//! Swedish number formatting for the page and the CLI report.
//!
//! Digits are grouped in threes with a no-break space (U+00A0), as sv-SE does.

/// sv-SE group separator.
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// `1234567` -> `"1 234 567"`.
pub fn format_count(n: impl Into<i128>) -> String {
    let n = n.into();
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Whole kronor, e.g. `"526 376 kr"`.
pub fn format_sek(n: impl Into<i128>) -> String {
    format!("{}{GROUP_SEPARATOR}kr", format_count(n))
}

/// Millions of kronor with a fixed number of decimals, e.g. `"6.32 Mkr"`.
pub fn format_mkr(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$} Mkr")
}

/// Fixed decimals with the sv-SE decimal comma, e.g. `"105,4"`.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}").replacen('.', ",", 1)
}
