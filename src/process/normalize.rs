// src/process/normalize.rs

/// Raw label of the wind column.
pub const WIND_FIELD: &str = "רוח";
/// Raw label of the swell column.
pub const SWELL_FIELD: &str = "סוואל";

/// Normalize one cell value, keyed by the *raw* (untranslated) field label.
///
/// Wind and swell cells fuse a speed and an optional direction letter-code
/// into one token: all ASCII digits, then all ASCII letters, everything else
/// (unit words, whitespace) dropped. Every other field keeps its first
/// whitespace-separated token, which strips units written after a space.
pub fn normalize_value(field: &str, raw: &str) -> String {
    match field {
        WIND_FIELD | SWELL_FIELD => {
            let digits = raw.chars().filter(char::is_ascii_digit);
            let letters = raw.chars().filter(char::is_ascii_alphabetic);
            digits.chain(letters).collect()
        }
        _ => raw
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}
