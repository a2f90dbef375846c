//! Line classifier and batch assembler.

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::models::account::{ExpiryDate, ParseResult, ParsedAccount};
use crate::models::config::ParserConfig;

use super::rules::{DateExtractor, FieldExtractor, PasswordExtractor, PhoneExtractor};
use super::BatchParser;

/// What a single input line contributed to the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LineClass {
    /// A canonical phone number.
    Phone(String),
    /// The shared password (overwrites earlier ones).
    Password(String),
    /// A keyword expiry line. `applied` is false when an expiry was already set.
    Expiry { date: ExpiryDate, applied: bool },
    /// A keyword-less line recognized as the expiry date.
    FallbackDate(ExpiryDate),
    /// Nothing recognized.
    Ignored,
}

impl LineClass {
    /// Short name of the class, free of any secret values.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Phone(_) => "phone",
            Self::Password(_) => "password",
            Self::Expiry { .. } => "expiry",
            Self::FallbackDate(_) => "fallback_date",
            Self::Ignored => "ignored",
        }
    }
}

/// Classification of one non-blank input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    /// 1-based line number in the input.
    pub line: usize,
    /// Trimmed line text.
    pub text: String,
    /// What the line contributed.
    pub class: LineClass,
}

/// Running state threaded through the lines of one batch.
#[derive(Debug, Default)]
struct ParseState {
    phones: Vec<String>,
    password: String,
    expiry: Option<ExpiryDate>,
}

impl ParseState {
    fn finish(self) -> ParseResult {
        let password = self.password;
        let accounts = self
            .phones
            .into_iter()
            .map(|phone| ParsedAccount::new(phone, password.clone()))
            .collect();

        ParseResult {
            accounts,
            global_expiry: self.expiry,
        }
    }
}

/// Rule-based parser for pasted account batches.
///
/// Each line is tried as a phone number, then a PIN line, then an expiry
/// keyword line, and finally (while no expiry is known) as a bare date.
/// Every account shares the last password seen and the first expiry found.
#[derive(Debug, Clone, Default)]
pub struct AccountBatchParser {
    dates: DateExtractor,
}

impl AccountBatchParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            dates: DateExtractor::new(),
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new()
            .with_min_year(config.min_year)
            .with_calendar_validation(config.validate_calendar)
    }

    /// Set the earliest year accepted in expiry dates.
    pub fn with_min_year(mut self, year: u16) -> Self {
        self.dates = self.dates.with_min_year(year);
        self
    }

    /// Reject expiry dates that do not exist in the calendar.
    pub fn with_calendar_validation(mut self, validate: bool) -> Self {
        self.dates = self.dates.with_calendar_validation(validate);
        self
    }

    /// Classify every non-blank line, reporting what each one contributed.
    pub fn explain(&self, text: &str) -> Vec<LineReport> {
        let mut reports = Vec::new();
        self.fold(text, |line, trimmed, class| {
            reports.push(LineReport {
                line,
                text: trimmed.to_string(),
                class: class.clone(),
            });
        });
        reports
    }

    fn classify(&self, line: &str, state: &mut ParseState) -> LineClass {
        if let Some(m) = PhoneExtractor.extract(line) {
            state.phones.push(m.value.clone());
            return LineClass::Phone(m.value);
        }

        if let Some(m) = PasswordExtractor.extract(line) {
            state.password = m.value.clone();
            return LineClass::Password(m.value);
        }

        if let Some(m) = self.dates.extract_labeled(line) {
            let applied = state.expiry.is_none();
            if applied {
                state.expiry = Some(m.value);
            }
            return LineClass::Expiry {
                date: m.value,
                applied,
            };
        }

        if state.expiry.is_none() {
            if let Some(m) = self.dates.extract(line) {
                state.expiry = Some(m.value);
                return LineClass::FallbackDate(m.value);
            }
        }

        LineClass::Ignored
    }

    fn fold<F>(&self, text: &str, mut on_line: F) -> ParseResult
    where
        F: FnMut(usize, &str, &LineClass),
    {
        let mut state = ParseState::default();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let class = self.classify(line, &mut state);
            trace!("Line {} classified as {}", index + 1, class.kind());
            on_line(index + 1, line, &class);
        }

        state.finish()
    }
}

impl BatchParser for AccountBatchParser {
    fn parse(&self, text: &str) -> ParseResult {
        info!("Parsing account batch from {} characters of text", text.len());

        let result = self.fold(text, |_, _, _| {});

        if result.shared_password() == Some("") {
            debug!("No password line found for {} accounts", result.detected_count());
        }
        debug!(
            "Detected {} accounts, expiry {}",
            result.detected_count(),
            result
                .global_expiry
                .map(|d| d.to_string())
                .unwrap_or_else(|| "none".to_string())
        );

        result
    }
}

/// Parse a pasted batch with default settings.
pub fn parse_bulk_text(text: &str) -> ParseResult {
    AccountBatchParser::new().parse(text)
}
