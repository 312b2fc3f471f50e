//! Parsing of upstream currency amounts.
//!
//! Scraped listing exports carry prices as text ("$120.00", "€1,250"),
//! so currency symbols and thousands separators are stripped first. Whatever
//! remains must be a plain number.

const CURRENCY_SYMBOLS: [char; 3] = ['$', '€', '£'];

/// Parse a currency string into an amount. Returns `None` unless the text is
/// a finite number once symbols and thousands commas are removed.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',')
        .collect();
    let cleaned = cleaned.trim();
    let plain = !cleaned.is_empty()
        && cleaned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-'));
    if !plain {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Leading number of a free-text count such as "1.5 baths" or "2 shared baths".
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    trimmed[..end].parse::<f64>().ok()
}
