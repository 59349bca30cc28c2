//! Conversions between the display text and its numeric value
//!
//! The display is kept as text so partial entries such as `"12."` survive;
//! the numeric view is always derived through [`parse_display`].

/// Magnitude at and above which [`format_number`] switches to exponent form
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which non-zero values switch to exponent form
const EXPONENT_LOWER: f64 = 1e-6;

/// Parses display text into a number.
///
/// Accepts everything [`format_number`] produces, including partial entries
/// (`"0."`, `"-5."`) and the non-finite spellings. Text with trailing garbage
/// resolves to its longest numeric prefix; text with no numeric prefix is NaN.
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    let text = text.trim();
    if let Ok(value) = text.parse::<f64>() {
        return value;
    }

    text.char_indices()
        .rev()
        .map(|(idx, _)| &text[..idx])
        .find_map(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Renders a number as minimal decimal text.
///
/// Shortest representation that parses back to the same value; negative zero
/// renders as `"0"`. Very large or very small magnitudes use exponent form
/// (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        format!("{value}")
    }
}

/// Returns true if a decimal point may not be appended: the text already has
/// one, or is in exponent form
#[must_use]
pub fn has_decimal_point(text: &str) -> bool {
    text.contains(|c| c == '.' || c == 'e')
}

/// Returns true if digits can be appended to the text. Non-finite spellings
/// (`Infinity`, `NaN`) cannot be extended.
#[must_use]
pub fn accepts_digits(text: &str) -> bool {
    text.trim_start_matches('-')
        .starts_with(|c: char| c.is_ascii_digit())
}
