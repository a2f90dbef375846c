//! Indonesian mobile number extraction and normalization.

use super::patterns::PHONE_TOKEN;
use super::{ExtractionMatch, FieldExtractor};

/// Country calling code for Indonesia.
const COUNTRY_CODE: &str = "62";

/// Domestic trunk prefix.
const TRUNK_PREFIX: char = '0';

/// Accepted length range of a canonical mobile number.
const MIN_DIGITS: usize = 9;
const MAX_DIGITS: usize = 13;

/// Phone number extractor.
///
/// Finds phone-like tokens and keeps only those that normalize to a
/// domestic mobile number.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    /// Only the first phone-like token of the text is considered.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        let m = PHONE_TOKEN.find(text)?;
        normalize_phone(m.as_str()).map(|phone| ExtractionMatch::from_match(phone, m))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE_TOKEN
            .find_iter(text)
            .filter_map(|m| {
                normalize_phone(m.as_str()).map(|phone| ExtractionMatch::from_match(phone, m))
            })
            .collect()
    }
}

/// Normalize a raw phone token to canonical form (`8xxxxxxxx`).
///
/// Non-digits are stripped, then a leading `62` or a single leading `0` is
/// removed. The result must start with `8` and have 9-13 digits.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let national = if let Some(rest) = digits.strip_prefix(COUNTRY_CODE) {
        rest
    } else if let Some(rest) = digits.strip_prefix(TRUNK_PREFIX) {
        rest
    } else {
        digits.as_str()
    };

    if national.starts_with('8') && (MIN_DIGITS..=MAX_DIGITS).contains(&national.len()) {
        Some(national.to_string())
    } else {
        None
    }
}

/// Format a canonical number in international form (`+628xxxxxxxx`).
pub fn to_international(phone: &str) -> String {
    format!("+{}{}", COUNTRY_CODE, phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_country_code() {
        assert_eq!(normalize_phone("+6285607637577"), Some("85607637577".to_string()));
        assert_eq!(normalize_phone("6283821585437"), Some("83821585437".to_string()));
    }

    #[test]
    fn test_normalize_trunk_prefix() {
        assert_eq!(normalize_phone("085839073898"), Some("85839073898".to_string()));
        assert_eq!(normalize_phone("08123456789"), Some("8123456789".to_string()));
    }

    #[test]
    fn test_normalize_strips_formatting() {
        assert_eq!(normalize_phone("+62 812-3456-7890"), Some("81234567890".to_string()));
        assert_eq!(normalize_phone("(0812) 3456 7890"), Some("81234567890".to_string()));
    }

    #[test]
    fn test_normalize_only_one_trunk_zero() {
        assert_eq!(normalize_phone("008123456789"), None);
    }

    #[test]
    fn test_normalize_rejects() {
        assert_eq!(normalize_phone("12345"), None);
        assert_eq!(normalize_phone("0212345678"), None); // Jakarta landline
        assert_eq!(normalize_phone("81234567"), None); // too short
        assert_eq!(normalize_phone("81234567890123"), None); // too long
        assert_eq!(normalize_phone(""), None);
        assert_eq!(normalize_phone("no digits"), None);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["+6285607637577", "08123456789", "6281234567890123"] {
            if let Some(canonical) = normalize_phone(raw) {
                assert_eq!(normalize_phone(&canonical), Some(canonical.clone()));
            }
        }
        assert_eq!(normalize_phone("812345678"), Some("812345678".to_string()));
        assert_eq!(normalize_phone("8123456789012"), Some("8123456789012".to_string()));
    }

    #[test]
    fn test_extract_first_token() {
        let extractor = PhoneExtractor::new();
        let result = extractor.extract("WA: +6285607637577 / 081234567890").unwrap();
        assert_eq!(result.value, "85607637577");
        assert_eq!(result.source, "+6285607637577");
        assert_eq!(result.position, Some((4, 18)));
    }

    #[test]
    fn test_extract_all_tokens() {
        let extractor = PhoneExtractor::new();
        let results = extractor.extract_all("+6285607637577 / 081234567890");
        let phones: Vec<_> = results.into_iter().map(|m| m.value).collect();
        assert_eq!(phones, vec!["85607637577", "81234567890"]);
    }

    #[test]
    fn test_extract_ignores_pin() {
        let extractor = PhoneExtractor::new();
        assert!(extractor.extract("Pin : 080808").is_none());
        assert!(extractor.extract("20/03/2026").is_none());
    }

    #[test]
    fn test_to_international() {
        assert_eq!(to_international("8123456789"), "+628123456789");
    }
}
