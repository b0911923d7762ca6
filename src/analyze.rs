//! Character-set classification and segment accounting for SMS text.
//!
//! SMS encoding is message-wide: one character outside the GSM-7
//! alphabet forces the whole message into UCS-2, which shrinks every
//! capacity. Messages over the single-segment capacity are split into
//! concatenated parts, each reserving header space.

use serde::Serialize;
use std::fmt;

use crate::alphabet::{is_extended, is_gsm_text};
use crate::replace::ReplacementTable;

/// Capacity of a standalone GSM-7 message, in septets.
pub const GSM7_SINGLE_SEGMENT: usize = 160;
/// Per-part capacity of a concatenated GSM-7 message.
pub const GSM7_MULTI_SEGMENTS: usize = 153;
/// Capacity of a standalone UCS-2 message, in characters.
pub const UCS2_SINGLE_SEGMENT: usize = 70;
/// Per-part capacity of a concatenated UCS-2 message.
pub const UCS2_MULTI_SEGMENTS: usize = 67;

/// The character set a message will be transported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CharacterSet {
    #[serde(rename = "GSM-7")]
    Gsm7,
    #[serde(rename = "UCS-2")]
    Ucs2,
}

impl CharacterSet {
    fn single_segment_capacity(self) -> usize {
        match self {
            CharacterSet::Gsm7 => GSM7_SINGLE_SEGMENT,
            CharacterSet::Ucs2 => UCS2_SINGLE_SEGMENT,
        }
    }

    fn multi_segment_capacity(self) -> usize {
        match self {
            CharacterSet::Gsm7 => GSM7_MULTI_SEGMENTS,
            CharacterSet::Ucs2 => UCS2_MULTI_SEGMENTS,
        }
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Gsm7 => write!(f, "GSM-7"),
            CharacterSet::Ucs2 => write!(f, "UCS-2"),
        }
    }
}

/// The result of analyzing one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageInfo {
    /// Every character fits the GSM-7 alphabet (basic or extended).
    #[serde(rename = "isGSM")]
    pub is_gsm: bool,
    pub character_set: CharacterSet,
    /// The message exceeds the single-segment capacity for its
    /// character set.
    pub is_multipart: bool,
    pub segment_count: u32,
    /// Raw character count for single-segment messages; the true
    /// encoded length (extended characters counted twice) for
    /// multipart ones.
    pub count: usize,
    /// Distinct characters with a replacement-table substitute, in
    /// first-seen order. Only populated for multipart messages, where
    /// substituting can actually save a segment.
    pub accented_chars: Vec<char>,
}

fn unit_cost(ch: char, is_gsm: bool) -> usize {
    // UCS-2 has no escape mechanism, so extended characters only cost
    // double inside a GSM-7 message.
    if is_gsm && is_extended(ch) {
        2
    } else {
        1
    }
}

/// Classify `text` and compute its segment accounting.
///
/// Total over all inputs: empty, whitespace-only, and arbitrarily long
/// messages all produce a well-defined result. Pure — safe to call
/// concurrently with a shared table.
pub fn analyze(text: &str, table: &ReplacementTable) -> MessageInfo {
    let is_gsm = is_gsm_text(text);
    let character_set = if is_gsm { CharacterSet::Gsm7 } else { CharacterSet::Ucs2 };

    // Cheap probe for the common case: stop at the first unit past the
    // single-segment capacity. Short messages never pay for
    // replacement-table lookups or full-length accounting.
    let single_capacity = character_set.single_segment_capacity();
    let mut segment_size = 0usize;
    let mut is_multipart = false;
    for ch in text.chars() {
        segment_size += unit_cost(ch, is_gsm);
        if segment_size > single_capacity {
            is_multipart = true;
            break;
        }
    }

    if !is_multipart {
        return MessageInfo {
            is_gsm,
            character_set,
            is_multipart: false,
            segment_count: 1,
            count: text.chars().count(),
            accented_chars: Vec::new(),
        };
    }

    // Full re-scan: true encoded length, part count, and the
    // replaceable characters worth surfacing. The capacity is
    // subtracted rather than zeroed at each part boundary so the
    // remainder carries into the next part's budget, matching how
    // carriers pack concatenated parts.
    let multi_capacity = character_set.multi_segment_capacity();
    let mut segment_size = 0usize;
    let mut segment_count = 1u32;
    let mut count = 0usize;
    let mut accented_chars: Vec<char> = Vec::new();

    for ch in text.chars() {
        if table.contains(ch) && !accented_chars.contains(&ch) {
            accented_chars.push(ch);
        }

        let cost = unit_cost(ch, is_gsm);
        segment_size += cost;
        count += cost;

        if segment_size > multi_capacity {
            segment_size -= multi_capacity;
            segment_count += 1;
        }
    }

    tracing::debug!(count, segment_count, %character_set, "message spans multiple segments");

    MessageInfo {
        is_gsm,
        character_set,
        is_multipart: true,
        segment_count,
        count,
        accented_chars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table(pairs: &[(&str, &str)]) -> ReplacementTable {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ReplacementTable::from_map(map).expect("valid table")
    }

    fn empty() -> ReplacementTable {
        ReplacementTable::new()
    }

    #[test]
    fn test_hello_world() {
        let info = analyze("Hello World", &empty());
        assert!(info.is_gsm);
        assert_eq!(info.character_set, CharacterSet::Gsm7);
        assert!(!info.is_multipart);
        assert_eq!(info.segment_count, 1);
        assert_eq!(info.count, 11);
        assert!(info.accented_chars.is_empty());
    }

    #[test]
    fn test_empty_message() {
        let info = analyze("", &empty());
        assert!(info.is_gsm);
        assert_eq!(info.character_set, CharacterSet::Gsm7);
        assert!(!info.is_multipart);
        assert_eq!(info.segment_count, 1);
        assert_eq!(info.count, 0);
        assert!(info.accented_chars.is_empty());
    }

    #[test]
    fn test_single_non_gsm_char_forces_ucs2() {
        let info = analyze("ordinary text plus one ☃", &empty());
        assert!(!info.is_gsm);
        assert_eq!(info.character_set, CharacterSet::Ucs2);
    }

    #[test]
    fn test_gsm_boundary_160() {
        let at_limit = "a".repeat(160);
        let info = analyze(&at_limit, &empty());
        assert!(!info.is_multipart);
        assert_eq!(info.segment_count, 1);
        assert_eq!(info.count, 160);

        let over = "a".repeat(161);
        let info = analyze(&over, &empty());
        assert!(info.is_multipart);
        assert_eq!(info.segment_count, 2);
        assert_eq!(info.count, 161);
    }

    #[test]
    fn test_ucs2_boundary_70() {
        let mut at_limit = String::from("🙂");
        at_limit.push_str(&"a".repeat(69));
        let info = analyze(&at_limit, &empty());
        assert_eq!(info.character_set, CharacterSet::Ucs2);
        assert!(!info.is_multipart);
        assert_eq!(info.segment_count, 1);

        let mut over = String::from("🙂");
        over.push_str(&"a".repeat(70));
        let info = analyze(&over, &empty());
        assert!(info.is_multipart);
        assert_eq!(info.segment_count, 2);
        assert_eq!(info.count, 71);
    }

    #[test]
    fn test_extended_chars_cost_two_in_gsm() {
        // 80 braces fill a 160-septet segment exactly. The reported
        // count stays the raw character count for single-segment
        // results; only the multipart re-scan computes encoded length.
        let at_limit = "{".repeat(80);
        let info = analyze(&at_limit, &empty());
        assert!(info.is_gsm);
        assert!(!info.is_multipart);
        assert_eq!(info.segment_count, 1);
        assert_eq!(info.count, 80);

        let over = "{".repeat(81);
        let info = analyze(&over, &empty());
        assert!(info.is_multipart);
        assert_eq!(info.segment_count, 2);
        assert_eq!(info.count, 162);
    }

    #[test]
    fn test_extended_chars_cost_one_in_ucs2() {
        // No escape sequences in UCS-2, so braces are ordinary
        // characters there: one emoji plus 69 braces still fits.
        let mut text = String::from("🙂");
        text.push_str(&"{".repeat(69));
        let info = analyze(&text, &empty());
        assert_eq!(info.character_set, CharacterSet::Ucs2);
        assert!(!info.is_multipart);
        assert_eq!(info.segment_count, 1);
    }

    #[test]
    fn test_multipart_carry_remainder() {
        // 200 GSM characters: 153 in part one, remainder flows into
        // part two rather than being discarded.
        let info = analyze(&"a".repeat(200), &empty());
        assert_eq!(info.segment_count, 2);
        assert_eq!(info.count, 200);

        // 307 = 153 * 2 + 1 needs a third part.
        let info = analyze(&"a".repeat(307), &empty());
        assert_eq!(info.segment_count, 3);

        // 150 UCS-2 characters: 67 + 67 + 16.
        let mut text = String::from("☃");
        text.push_str(&"a".repeat(149));
        let info = analyze(&text, &empty());
        assert_eq!(info.segment_count, 3);
        assert_eq!(info.count, 150);
    }

    #[test]
    fn test_multipart_invariant() {
        let at_limit = "a".repeat(160);
        let over_limit = "a".repeat(161);
        let braces = "{".repeat(500);
        for text in ["", "short", at_limit.as_str(), over_limit.as_str(), braces.as_str()] {
            let info = analyze(text, &empty());
            assert_eq!(info.segment_count == 1, !info.is_multipart, "invariant broke for {text:?}");
        }
    }

    #[test]
    fn test_appending_never_decreases_segments() {
        let table = empty();
        let mut previous = 0u32;
        let mut text = String::new();
        for _ in 0..400 {
            text.push('a');
            let info = analyze(&text, &table);
            assert!(info.segment_count >= previous);
            previous = info.segment_count;
        }
    }

    #[test]
    fn test_accented_chars_only_for_multipart() {
        let table = table(&[("00E9", "e")]);

        let multipart = format!("é{}", "a".repeat(170));
        let info = analyze(&multipart, &table);
        assert!(info.is_multipart);
        assert_eq!(info.accented_chars, vec!['é']);

        let single = format!("é{}", "a".repeat(100));
        let info = analyze(&single, &table);
        assert!(!info.is_multipart);
        assert!(info.accented_chars.is_empty());
    }

    #[test]
    fn test_accented_chars_dedup_first_seen_order() {
        let table = table(&[("00E9", "e"), ("00E0", "a")]);
        let text = format!("é à é {}", "x".repeat(170));
        let info = analyze(&text, &table);
        assert_eq!(info.accented_chars, vec!['é', 'à']);
    }

    #[test]
    fn test_accented_chars_collected_for_ucs2_too() {
        let table = table(&[("00E9", "e")]);
        let text = format!("☃é{}", "a".repeat(80));
        let info = analyze(&text, &table);
        assert_eq!(info.character_set, CharacterSet::Ucs2);
        assert!(info.is_multipart);
        assert_eq!(info.accented_chars, vec!['é']);
    }

    #[test]
    fn test_unlisted_table_entries_are_inert() {
        // A key that maps no character in the message changes nothing.
        let table = table(&[("4E00", "?")]);
        let info = analyze(&"a".repeat(200), &table);
        assert!(info.accented_chars.is_empty());
        assert_eq!(info.segment_count, 2);
    }

    #[test]
    fn test_idempotent() {
        let table = table(&[("00E9", "e")]);
        let text = format!("é{}", "b".repeat(300));
        assert_eq!(analyze(&text, &table), analyze(&text, &table));
    }

    #[test]
    fn test_json_field_names() {
        let info = analyze("Hello World", &empty());
        let value = serde_json::to_value(&info).expect("serializable");
        assert_eq!(value["isGSM"], serde_json::json!(true));
        assert_eq!(value["characterSet"], serde_json::json!("GSM-7"));
        assert_eq!(value["isMultipart"], serde_json::json!(false));
        assert_eq!(value["segmentCount"], serde_json::json!(1));
        assert_eq!(value["count"], serde_json::json!(11));
        assert_eq!(value["accentedChars"], serde_json::json!([]));
    }
}
