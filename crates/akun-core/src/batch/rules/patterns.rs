//! Common regex patterns for account batch extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Indonesian mobile number: optional +, optional 62 or 0, then 8 and 8-12 digits
    pub static ref PHONE_TOKEN: Regex = Regex::new(
        r"\+?(?:62|0)?8\d{8,12}"
    ).unwrap();

    // PIN / password line; the longest keyword must come first
    pub static ref PASSWORD_LINE: Regex = Regex::new(
        r"(?i)\b(?:password|pass|pin)\s*[:=]?(.*)$"
    ).unwrap();

    // Expiry line, e.g. "Berlaku sampai : 20 maret 2026", "exp: 2026-01-05"
    pub static ref EXPIRY_LINE: Regex = Regex::new(
        r"(?i)\b(?:berlaku|expired|expiry|exp|valid|sampai)(?:\s+(?:sampai|hingga|s\.\s?d\.?|s/d))?\s*[:=]?(.*)$"
    ).unwrap();

    // "20 maret 2026", "5 Jan 2027", "20-Mar-2026"
    pub static ref DATE_NAMED_MONTH: Regex = Regex::new(
        r"(?i)\b(\d{1,2})[\s\-]+(januari|january|jan|februari|pebruari|february|feb|maret|march|mar|april|apr|mei|may|juni|june|jun|juli|july|jul|agustus|august|agu|agt|aug|september|sept|sep|oktober|october|okt|oct|november|nopember|nov|desember|december|des|dec)\b\.?[\s\-,]+(\d{4})\b"
    ).unwrap();

    // DD/MM/YYYY, DD-MM-YYYY, DD.MM.YYYY
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4})\b"
    ).unwrap();

    // YYYY-MM-DD
    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b"
    ).unwrap();
}
