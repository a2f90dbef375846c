//! Shared PIN / password extraction.

use super::patterns::PASSWORD_LINE;
use super::{ExtractionMatch, FieldExtractor};

/// Password field extractor.
///
/// Matches `pin`, `pass` or `password` followed by an optional `:` or `=`
/// and takes the rest of the line as the value.
pub struct PasswordExtractor;

impl PasswordExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PasswordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PasswordExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = PASSWORD_LINE.captures(text)?;
        let rest = caps.get(1)?;
        let value = rest.as_str().trim();
        if value.is_empty() {
            return None;
        }

        let offset = rest.as_str().len() - rest.as_str().trim_start().len();
        let start = rest.start() + offset;
        Some(ExtractionMatch::new(value.to_string(), value).with_position(start, start + value.len()))
    }

    /// One value per line; the last one is the one a batch ends up using.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();
        let mut line_start = 0;

        for line in text.split_inclusive('\n') {
            if let Some(m) = self.extract(line.trim_end_matches(['\r', '\n'])) {
                let (start, end) = m.position.unwrap_or((0, 0));
                results.push(m.with_position(line_start + start, line_start + end));
            }
            line_start += line.len();
        }

        results
    }
}

/// Extract the password of a PIN line.
pub fn extract_password(line: &str) -> Option<String> {
    PasswordExtractor::new().extract(line).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_pin() {
        assert_eq!(extract_password("Pin : 080808"), Some("080808".to_string()));
        assert_eq!(extract_password("PIN=1234"), Some("1234".to_string()));
        assert_eq!(extract_password("pin 5555"), Some("5555".to_string()));
    }

    #[test]
    fn test_extract_password_keywords() {
        assert_eq!(extract_password("Password: rahasia123"), Some("rahasia123".to_string()));
        assert_eq!(extract_password("pass = Qwerty 99 "), Some("Qwerty 99".to_string()));
    }

    #[test]
    fn test_extract_password_keeps_inner_separators() {
        assert_eq!(extract_password("password: a:b=c"), Some("a:b=c".to_string()));
    }

    #[test]
    fn test_extract_password_no_value() {
        assert_eq!(extract_password("Pin :"), None);
        assert_eq!(extract_password("password"), None);
    }

    #[test]
    fn test_extract_password_no_keyword() {
        assert_eq!(extract_password("akun :"), None);
        assert_eq!(extract_password("Berlaku sampai : 20 maret 2026"), None);
    }

    #[test]
    fn test_extract_position() {
        let m = PasswordExtractor::new().extract("Pin : 080808").unwrap();
        assert_eq!(m.position, Some((6, 12)));
    }

    #[test]
    fn test_extract_all_lines() {
        let text = "pin: 1111\r\n0812345678901\nPIN : 2222\n";
        let results = PasswordExtractor::new().extract_all(text);
        let values: Vec<_> = results.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["1111", "2222"]);
        assert_eq!(results[1].position, Some((31, 35)));
    }
}
