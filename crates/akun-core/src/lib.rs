//! Core library for parsing pasted account batches.
//!
//! Sellers paste free-form text listing a batch of accounts. This crate
//! turns it into structured data:
//! - Indonesian mobile number detection and normalization
//! - Shared PIN/password extraction from keyword lines
//! - Indonesian/English expiry date recognition
//! - A single-pass line classifier folding everything into a [`ParseResult`]
//!
//! ```
//! use akun_core::parse_bulk_text;
//!
//! let result = parse_bulk_text("+6285607637577\nPin : 080808\nexp 20 maret 2026");
//! assert_eq!(result.detected_count(), 1);
//! assert_eq!(result.accounts[0].phone, "85607637577");
//! assert_eq!(result.accounts[0].password, "080808");
//! assert_eq!(result.global_expiry.unwrap().to_string(), "2026-03-20");
//! ```

pub mod error;
pub mod models;
pub mod batch;

pub use error::{AkunError, FieldError, Result};
pub use models::account::{ExpiryDate, ParseResult, ParsedAccount};
pub use models::config::{AkunConfig, OutputConfig, OutputFormat, ParserConfig};
pub use batch::{parse_bulk_text, AccountBatchParser, BatchParser, LineClass, LineReport};
pub use batch::rules::{normalize_phone, recognize_date};
