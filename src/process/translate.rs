// src/process/translate.rs

/// Translate a raw field label from the forecast page into its canonical
/// English name.
///
/// Unit-only labels translate to the empty string, which callers treat as
/// "drop this field". Unknown labels pass through unchanged, so already
/// canonical names and labels the site adds later survive the mapping.
pub fn translate_field(field: &str) -> &str {
    match field {
        "שעה" => "Temperature",
        "גובה" => "Height",
        "גלים" => "Waves",
        "רוח" => "Wind",
        "כיוון" => "Direction",
        "סוואל" => "Swell",
        "מחזור" => "Repetition",
        // unit words carry no information of their own
        "קמ״ש" | "ס״מ" | "שניות" => "",
        "מערבי" => "Western",
        "צפון" => "Northern",
        "מזרח" => "Eastern",
        "דרום" => "Southern",
        other => other,
    }
}
