//! Message text input with encoding detection.
//!
//! Message bodies arrive from whatever editor or export produced them,
//! so file input handles BOMs, a strict-UTF-8 fast path, and a
//! chardetng fallback instead of assuming UTF-8. Decoding never fails:
//! malformed sequences become replacement characters.

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::UTF_8;
use std::io::Read;
use std::path::Path;

/// Read a message body from a file in an unknown encoding.
///
/// A leading BOM and one trailing newline are removed — both are
/// artifacts of how the file was saved, not message content.
pub fn read_message_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read message file: {}", path.display()))?;
    Ok(trim_trailing_newline(decode_bytes(&bytes)))
}

/// Read a message body from stdin, trimming one trailing newline.
pub fn read_message_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read message from stdin")?;
    Ok(trim_trailing_newline(decode_bytes(&bytes)))
}

fn decode_bytes(bytes: &[u8]) -> String {
    // A BOM is authoritative. encoding_rs sniffs UTF-8/16 BOMs itself
    // and strips them during decoding.
    if bytes.starts_with(&[0xef, 0xbb, 0xbf])
        || bytes.starts_with(&[0xff, 0xfe])
        || bytes.starts_with(&[0xfe, 0xff])
    {
        let (decoded, _, _) = UTF_8.decode(bytes);
        return decoded.into_owned();
    }

    // Strict UTF-8 fast path: most message files are UTF-8.
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    // Fall back to detection, decoding with replacement characters.
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    tracing::debug!(encoding = encoding.name(), "decoded message with detected encoding");
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

fn trim_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
