//! GSM 03.38 alphabet tables and membership queries.
//!
//! The lookup sets are built lazily on first use from the literal
//! alphabet strings and never mutated afterwards, so membership
//! queries are pure and safe from any thread.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The GSM-7 default alphabet, with LF (0x0A), CR (0x0D), and the
/// escape placeholder (0x1B) at their standard positions.
const GSM7_BASIC: &str = "@£$¥èéùìòÇ\nØø\rÅåΔ_ΦΓΛΩΠΨΣΘΞ\u{1b}ÆæßÉ !\"#¤%&'()*+,-./0123456789:;<=>?¡ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑÜ`¿abcdefghijklmnopqrstuvwxyzäöñüà§";

/// Characters reachable only through the two-septet escape sequence.
/// Each costs 2 units of segment capacity instead of 1.
const GSM7_EXTENDED: &str = "^{}\\[~]|€";

static BASIC_CHARS: Lazy<HashSet<char>> = Lazy::new(|| GSM7_BASIC.chars().collect());
static EXTENDED_CHARS: Lazy<HashSet<char>> = Lazy::new(|| GSM7_EXTENDED.chars().collect());

/// Check membership in the GSM-7 default alphabet.
pub fn is_basic(ch: char) -> bool {
    BASIC_CHARS.contains(&ch)
}

/// Check membership in the GSM-7 extension table.
pub fn is_extended(ch: char) -> bool {
    EXTENDED_CHARS.contains(&ch)
}

/// Check membership in either GSM-7 table.
pub fn is_gsm_char(ch: char) -> bool {
    is_basic(ch) || is_extended(ch)
}

/// `true` iff every character of `text` is encodable in GSM-7.
///
/// A single outside character forces UCS-2 for the whole message, so
/// callers only need this message-wide answer. The empty string is
/// vacuously GSM-7.
pub fn is_gsm_text(text: &str) -> bool {
    text.chars().all(is_gsm_char)
}

/// A character's code point as a replacement-table key: four hex
/// digits, zero-padded, uppercase (`'é'` → `"00E9"`).
///
/// Code points above U+FFFF format wider than four digits and can
/// therefore never match a well-formed key.
pub fn hex_key(ch: char) -> String {
    format!("{:04X}", ch as u32)
}
