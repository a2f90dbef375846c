//! Expiry date recognition for Indonesian and English date idioms.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Captures;

use crate::models::account::ExpiryDate;

use super::patterns::{DATE_DMY, DATE_ISO, DATE_NAMED_MONTH, EXPIRY_LINE};
use super::{ExtractionMatch, FieldExtractor};

/// Earliest year accepted by default.
pub const DEFAULT_MIN_YEAR: u16 = 2020;

/// Month names (Indonesian and English, full and abbreviated).
const MONTH_NAMES: &[(&str, u8)] = &[
    ("januari", 1), ("january", 1), ("jan", 1),
    ("februari", 2), ("pebruari", 2), ("february", 2), ("feb", 2),
    ("maret", 3), ("march", 3), ("mar", 3),
    ("april", 4), ("apr", 4),
    ("mei", 5), ("may", 5),
    ("juni", 6), ("june", 6), ("jun", 6),
    ("juli", 7), ("july", 7), ("jul", 7),
    ("agustus", 8), ("august", 8), ("agu", 8), ("agt", 8), ("aug", 8),
    ("september", 9), ("sept", 9), ("sep", 9),
    ("oktober", 10), ("october", 10), ("okt", 10), ("oct", 10),
    ("november", 11), ("nopember", 11), ("nov", 11),
    ("desember", 12), ("december", 12), ("des", 12), ("dec", 12),
];

lazy_static! {
    static ref MONTH_LOOKUP: HashMap<&'static str, u8> = MONTH_NAMES.iter().copied().collect();
}

/// Look up a month name, case-insensitively.
pub fn month_number(name: &str) -> Option<u8> {
    let name = name.trim().trim_end_matches('.').to_lowercase();
    MONTH_LOOKUP.get(name.as_str()).copied()
}

/// Date field extractor.
///
/// Surface forms are tried in priority order: named month, then
/// day-month-year with `/`, `-` or `.`, then ISO. For each form only the
/// first occurrence in the text is considered.
#[derive(Debug, Clone)]
pub struct DateExtractor {
    min_year: u16,
    validate_calendar: bool,
}

impl DateExtractor {
    pub fn new() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            validate_calendar: false,
        }
    }

    /// Set the earliest accepted year.
    pub fn with_min_year(mut self, year: u16) -> Self {
        self.min_year = year;
        self
    }

    /// Reject dates that do not exist in the calendar.
    pub fn with_calendar_validation(mut self, validate: bool) -> Self {
        self.validate_calendar = validate;
        self
    }

    /// Extract the date following an expiry keyword (`berlaku`, `exp`, ...).
    ///
    /// Returns `None` when the line has no keyword or the rest of the line
    /// holds no recognizable date.
    pub fn extract_labeled(&self, line: &str) -> Option<ExtractionMatch<ExpiryDate>> {
        let caps = EXPIRY_LINE.captures(line)?;
        let rest = caps.get(1)?;
        let found = self.extract(rest.as_str())?;
        let (start, end) = found.position?;
        Some(found.with_position(rest.start() + start, rest.start() + end))
    }

    fn accept(&self, year: u16, month: u8, day: u8) -> Option<ExpiryDate> {
        if year < self.min_year {
            return None;
        }
        let date = ExpiryDate::new(year, month, day)?;
        if self.validate_calendar && date.to_naive_date().is_none() {
            return None;
        }
        Some(date)
    }

    fn named_month(&self, caps: &Captures<'_>) -> Option<ExtractionMatch<ExpiryDate>> {
        let day: u8 = caps[1].parse().ok()?;
        let month = month_number(&caps[2])?;
        let year: u16 = caps[3].parse().ok()?;
        let date = self.accept(year, month, day)?;
        Some(ExtractionMatch::from_match(date, caps.get(0)?))
    }

    fn day_month_year(&self, caps: &Captures<'_>) -> Option<ExtractionMatch<ExpiryDate>> {
        let day: u8 = caps[1].parse().ok()?;
        let month: u8 = caps[2].parse().ok()?;
        let year: u16 = caps[3].parse().ok()?;
        let date = self.accept(year, month, day)?;
        Some(ExtractionMatch::from_match(date, caps.get(0)?))
    }

    fn iso(&self, caps: &Captures<'_>) -> Option<ExtractionMatch<ExpiryDate>> {
        let year: u16 = caps[1].parse().ok()?;
        let month: u8 = caps[2].parse().ok()?;
        let day: u8 = caps[3].parse().ok()?;
        let date = self.accept(year, month, day)?;
        Some(ExtractionMatch::from_match(date, caps.get(0)?))
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<ExpiryDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        DATE_NAMED_MONTH
            .captures(text)
            .and_then(|caps| self.named_month(&caps))
            .or_else(|| DATE_DMY.captures(text).and_then(|caps| self.day_month_year(&caps)))
            .or_else(|| DATE_ISO.captures(text).and_then(|caps| self.iso(&caps)))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();

        let found = DATE_NAMED_MONTH
            .captures_iter(text)
            .filter_map(|caps| self.named_month(&caps))
            .chain(DATE_DMY.captures_iter(text).filter_map(|caps| self.day_month_year(&caps)))
            .chain(DATE_ISO.captures_iter(text).filter_map(|caps| self.iso(&caps)));

        for m in found {
            // Skip if already found
            if results.iter().any(|r| r.value == m.value) {
                continue;
            }
            results.push(m);
        }

        results
    }
}

/// Recognize a date anywhere in `text` with default settings.
pub fn recognize_date(text: &str) -> Option<ExpiryDate> {
    DateExtractor::new().extract(text).map(|m| m.value)
}

/// Extract the date of an expiry keyword line with default settings.
pub fn extract_expiry(line: &str) -> Option<ExpiryDate> {
    DateExtractor::new().extract_labeled(line).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: u16, month: u8, day: u8) -> ExpiryDate {
        ExpiryDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_named_month_indonesian() {
        assert_eq!(recognize_date("20 maret 2026"), Some(date(2026, 3, 20)));
        assert_eq!(recognize_date("1 Agustus 2025"), Some(date(2025, 8, 1)));
        assert_eq!(recognize_date("17 AGT 2027"), Some(date(2027, 8, 17)));
    }

    #[test]
    fn test_named_month_english() {
        assert_eq!(recognize_date("5 January 2027"), Some(date(2027, 1, 5)));
        assert_eq!(recognize_date("31 Dec. 2026"), Some(date(2026, 12, 31)));
        assert_eq!(recognize_date("20-Mar-2026"), Some(date(2026, 3, 20)));
    }

    #[test]
    fn test_named_month_range_checks() {
        assert_eq!(recognize_date("32 maret 2026"), None);
        assert_eq!(recognize_date("0 maret 2026"), None);
        assert_eq!(recognize_date("20 maret 2019"), None);
        assert_eq!(recognize_date("20 bulan 2026"), None);
    }

    #[test]
    fn test_day_month_year() {
        assert_eq!(recognize_date("20/03/2026"), Some(date(2026, 3, 20)));
        assert_eq!(recognize_date("5-1-2026"), Some(date(2026, 1, 5)));
        assert_eq!(recognize_date("05.01.2026"), Some(date(2026, 1, 5)));
    }

    #[test]
    fn test_day_month_year_is_not_month_first() {
        assert_eq!(recognize_date("03/20/2026"), None);
        assert_eq!(recognize_date("12/01/2026"), Some(date(2026, 1, 12)));
    }

    #[test]
    fn test_iso() {
        assert_eq!(recognize_date("2026-01-05"), Some(date(2026, 1, 5)));
        assert_eq!(recognize_date("2026-13-05"), None);
        assert_eq!(recognize_date("2019-01-05"), None);
    }

    #[test]
    fn test_no_calendar_validation_by_default() {
        assert_eq!(recognize_date("30/02/2026"), Some(date(2026, 2, 30)));

        let strict = DateExtractor::new().with_calendar_validation(true);
        assert!(strict.extract("30/02/2026").is_none());
        assert_eq!(strict.extract("29/02/2028").map(|m| m.value), Some(date(2028, 2, 29)));
    }

    #[test]
    fn test_min_year() {
        let extractor = DateExtractor::new().with_min_year(2015);
        assert_eq!(extractor.extract("01/06/2018").map(|m| m.value), Some(date(2018, 6, 1)));
    }

    #[test]
    fn test_embedded_and_priority() {
        // Named month wins over an earlier numeric date
        assert_eq!(
            recognize_date("order 01/01/2026, aktif s.d. 20 maret 2026"),
            Some(date(2026, 3, 20))
        );
        assert_eq!(recognize_date("aktif (20/03/2026) ya kak"), Some(date(2026, 3, 20)));
        assert_eq!(recognize_date("nothing here"), None);
        assert_eq!(recognize_date(""), None);
    }

    #[test]
    fn test_month_lookup_covers_pattern() {
        for (name, month) in MONTH_NAMES {
            assert_eq!(month_number(name), Some(*month));
            let text = format!("10 {} 2026", name.to_uppercase());
            assert_eq!(recognize_date(&text), Some(date(2026, *month, 10)), "{text}");
        }
    }

    #[test]
    fn test_extract_labeled() {
        let extractor = DateExtractor::new();

        let m = extractor.extract_labeled("Berlaku sampai : 20 maret 2026").unwrap();
        assert_eq!(m.value, date(2026, 3, 20));
        assert_eq!(m.source, "20 maret 2026");
        assert_eq!(m.position, Some((17, 30)));

        assert_eq!(extract_expiry("exp: 2026-01-05"), Some(date(2026, 1, 5)));
        assert_eq!(extract_expiry("Expired 5/1/2026"), Some(date(2026, 1, 5)));
        assert_eq!(extract_expiry("valid hingga 1 Jan 2027"), Some(date(2027, 1, 1)));
        assert_eq!(extract_expiry("berlaku s.d. 01-02-2026"), Some(date(2026, 2, 1)));
        assert_eq!(extract_expiry("Expiry = 2026-12-31"), Some(date(2026, 12, 31)));
    }

    #[test]
    fn test_extract_labeled_requires_keyword_and_date() {
        assert_eq!(extract_expiry("20 maret 2026"), None);
        assert_eq!(extract_expiry("berlaku selamanya"), None);
    }

    #[test]
    fn test_extract_all() {
        let extractor = DateExtractor::new();
        let results = extractor.extract_all("20 maret 2026, 20/03/2026, 2026-04-01");
        let values: Vec<_> = results.into_iter().map(|m| m.value).collect();
        assert_eq!(values, vec![date(2026, 3, 20), date(2026, 4, 1)]);
    }
}
