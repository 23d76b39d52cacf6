//! Listing page decoding
//!
//! Charset precedence: byte-order mark, `Content-Type` header, `<meta>`
//! declaration in the head of the document, valid UTF-8, then windows-1252.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// Bytes scanned for a `<meta>` charset declaration
const META_SCAN_BYTES: usize = 2048;

lazy_static! {
    static ref CHARSET_PARAM: Regex =
        Regex::new(r#"(?i)charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#).unwrap();
    static ref META_CHARSET: Regex =
        Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#).unwrap();
}

/// Charset named in a `Content-Type` value
pub fn header_encoding(content_type: &str) -> Option<&'static Encoding> {
    CHARSET_PARAM
        .captures(content_type)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
}

/// Charset declared by a `<meta>` tag near the start of `body`
pub fn meta_encoding(body: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&body[..body.len().min(META_SCAN_BYTES)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
}

/// Decode an HTML body to text
pub fn decode_html<'a>(body: &'a [u8], content_type: Option<&str>) -> Cow<'a, str> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(body) {
        return encoding.decode_without_bom_handling(&body[bom_len..]).0;
    }

    let declared = content_type
        .and_then(header_encoding)
        .or_else(|| meta_encoding(body));

    let encoding = match declared {
        Some(encoding) => encoding,
        None if std::str::from_utf8(body).is_ok() => UTF_8,
        None => WINDOWS_1252,
    };

    encoding.decode_without_bom_handling(body).0
}
