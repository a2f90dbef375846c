//! Account batch data models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FieldError;

/// A single account detected in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAccount {
    /// Canonical mobile number: digits only, no country or trunk prefix, leading `8`.
    pub phone: String,

    /// Shared batch password (empty when no PIN line was found).
    pub password: String,
}

impl ParsedAccount {
    pub fn new(phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            password: password.into(),
        }
    }

    /// Build an account from a raw phone number, normalizing it first.
    pub fn try_new(raw_phone: &str, password: impl Into<String>) -> Result<Self, FieldError> {
        let phone = crate::batch::rules::normalize_phone(raw_phone)
            .ok_or_else(|| FieldError::InvalidPhone(raw_phone.to_string()))?;
        Ok(Self::new(phone, password))
    }

    /// Phone number in international `+62` form.
    pub fn international_phone(&self) -> String {
        crate::batch::rules::to_international(&self.phone)
    }
}

/// Expiry label shared by every account in a batch.
///
/// Only the ranges month 1-12 and day 1-31 are enforced. A label such as
/// `2026-02-30` is representable; use [`ExpiryDate::to_naive_date`] when a
/// real calendar date is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpiryDate {
    year: u16,
    month: u8,
    day: u8,
}

impl ExpiryDate {
    /// Build a date label, checking month and day ranges.
    pub fn new(year: u16, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) || year > 9999 {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Convert to a calendar date, `None` for labels like Feb 30.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month), u32::from(self.day))
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for ExpiryDate {
    type Err = FieldError;

    /// Parse the canonical `YYYY-MM-DD` form only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FieldError::InvalidDate(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }
        let digits_ok = s
            .char_indices()
            .filter(|(i, _)| *i != 4 && *i != 7)
            .all(|(_, c)| c.is_ascii_digit());
        if !digits_ok {
            return Err(invalid());
        }

        let year: u16 = s[0..4].parse().map_err(|_| invalid())?;
        let month: u8 = s[5..7].parse().map_err(|_| invalid())?;
        let day: u8 = s[8..10].parse().map_err(|_| invalid())?;

        Self::new(year, month, day).ok_or_else(invalid)
    }
}

impl Serialize for ExpiryDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpiryDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Outcome of parsing one pasted batch.
///
/// Serializes with camelCase keys and a derived `detectedCount`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Accounts in the order their phone numbers appeared.
    pub accounts: Vec<ParsedAccount>,

    /// Shared expiry date, if one was recognized.
    #[serde(default)]
    pub global_expiry: Option<ExpiryDate>,
}

impl ParseResult {
    /// Number of detected accounts.
    pub fn detected_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Password shared by the batch, `None` when there are no accounts.
    pub fn shared_password(&self) -> Option<&str> {
        self.accounts.first().map(|a| a.password.as_str())
    }
}

impl Serialize for ParseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParseResult", 3)?;
        state.serialize_field("accounts", &self.accounts)?;
        state.serialize_field("globalExpiry", &self.global_expiry)?;
        state.serialize_field("detectedCount", &self.detected_count())?;
        state.end()
    }
}
