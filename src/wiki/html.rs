//! HTML helpers: escaping and content-derived element identifiers

use sha2::{Digest, Sha256};

/// Escape text for use in element content and quoted attribute values.
///
/// Escapes `&`, `<`, `>`, `"` and `'`.
pub fn escape(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

/// Escape text for embedding inside a JavaScript template literal.
pub fn escape_js_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// 64-bit fingerprint of `content` as 16 lowercase hex digits.
///
/// Derived from SHA-256, so it is the same on every run and every platform.
pub fn fingerprint(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let value = digest
        .iter()
        .take(8)
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
    format!("{:016x}", value)
}

/// Element id of the form `<prefix>_<fingerprint>`
pub fn element_id(prefix: &str, content: &str) -> String {
    format!("{}_{}", prefix, fingerprint(content))
}
