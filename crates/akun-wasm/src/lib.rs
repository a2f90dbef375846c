//! WASM bindings for the account batch parser.
//!
//! Used by the inventory-entry UI to turn a pasted seller post into account
//! rows before they are saved.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use akun_core::{AccountBatchParser, BatchParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert to a plain JS object; `None` becomes `null`, not `undefined`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a pasted batch with default settings.
///
/// Returns `{ accounts: [{ phone, password }], globalExpiry, detectedCount }`.
#[wasm_bindgen(js_name = parseBulkText)]
pub fn parse_bulk_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&akun_core::parse_bulk_text(text))
}

/// Normalize a phone number to canonical `8xxxxxxxx` form.
#[wasm_bindgen(js_name = normalizePhone)]
pub fn normalize_phone(raw: &str) -> Option<String> {
    akun_core::normalize_phone(raw)
}

/// Recognize a date and return it as `YYYY-MM-DD`.
#[wasm_bindgen(js_name = recognizeDate)]
pub fn recognize_date(text: &str) -> Option<String> {
    akun_core::recognize_date(text).map(|d| d.to_string())
}

/// Configurable parser class for browser use.
#[wasm_bindgen]
pub struct BulkParser {
    min_year: u16,
    validate_calendar: bool,
}

#[wasm_bindgen]
impl BulkParser {
    /// Create a parser with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let defaults = akun_core::ParserConfig::default();
        Self {
            min_year: defaults.min_year,
            validate_calendar: defaults.validate_calendar,
        }
    }

    /// Set the earliest accepted expiry year.
    #[wasm_bindgen(js_name = setMinYear)]
    pub fn set_min_year(&mut self, year: u16) {
        self.min_year = year;
    }

    /// Reject expiry dates that do not exist in the calendar.
    #[wasm_bindgen(js_name = setValidateCalendar)]
    pub fn set_validate_calendar(&mut self, validate: bool) {
        self.validate_calendar = validate;
    }

    /// Parse a pasted batch.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser().parse(text))
    }

    /// Per-line classification, for showing the seller what was picked up.
    #[wasm_bindgen]
    pub fn explain(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser().explain(text))
    }

    fn parser(&self) -> AccountBatchParser {
        AccountBatchParser::new()
            .with_min_year(self.min_year)
            .with_calendar_validation(self.validate_calendar)
    }
}

impl Default for BulkParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+6285607637577"), Some("85607637577".to_string()));
        assert_eq!(normalize_phone("12345"), None);
    }

    #[wasm_bindgen_test]
    fn test_recognize_date() {
        assert_eq!(recognize_date("Berlaku sampai : 20 maret 2026"), Some("2026-03-20".to_string()));
        assert_eq!(recognize_date("besok"), None);
    }

    #[wasm_bindgen_test]
    fn test_parser_settings() {
        let mut parser = BulkParser::new();
        assert_eq!(parser.min_year, 2020);

        parser.set_min_year(2015);
        parser.set_validate_calendar(true);
        let result = parser.parser().parse("exp 01/06/2018\n081234567890");
        assert_eq!(result.global_expiry.map(|d| d.to_string()), Some("2018-06-01".to_string()));
        assert_eq!(result.detected_count(), 1);
    }
}
