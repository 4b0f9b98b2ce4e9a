//! Base64 and hexadecimal encoding
//!
//! Blank text input is treated as "nothing to encode" and yields `None`
//! rather than an empty string.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use tracing::debug;

use crate::error::{HelperError, Result};
use crate::validation::is_blank;

/// Base64-encodes the UTF-8 bytes of `input`; `None` when `input` is blank.
///
/// # Example
/// ```
/// use codehelpers::ende::encode_base64;
/// assert_eq!(encode_base64("Hello").as_deref(), Some("SGVsbG8="));
/// assert_eq!(encode_base64("  "), None);
/// ```
pub fn encode_base64(input: &str) -> Option<String> {
    if is_blank(input) {
        return None;
    }
    Some(BASE64.encode(input.as_bytes()))
}

/// Decodes standard Base64 into a UTF-8 string.
///
/// Returns `Ok(None)` for blank input, [`HelperError::InvalidBase64`] when the
/// text is not Base64 and [`HelperError::InvalidUtf8`] when the decoded bytes
/// are not text.
pub fn decode_base64(input: &str) -> Result<Option<String>> {
    if is_blank(input) {
        return Ok(None);
    }
    let bytes = BASE64.decode(input)?;
    Ok(Some(String::from_utf8(bytes)?))
}

pub fn bytes_to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Uppercase hex, two digits per byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

/// Parses a hex string into bytes.
///
/// Both cases are accepted. Returns `Ok(None)` for blank input and
/// [`HelperError::InvalidHex`] for an odd length or a non-hex digit.
///
/// # Example
/// ```
/// use codehelpers::ende::hex_to_bytes;
/// assert_eq!(hex_to_bytes("0aFF").unwrap(), Some(vec![0x0a, 0xff]));
/// assert!(hex_to_bytes("abc").is_err());
/// ```
pub fn hex_to_bytes(input: &str) -> Result<Option<Vec<u8>>> {
    if is_blank(input) {
        return Ok(None);
    }
    if input.len() % 2 != 0 {
        debug!(len = input.len(), "rejecting odd-length hex string");
        return Err(HelperError::InvalidHex(format!(
            "odd length {}",
            input.len()
        )));
    }

    input
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            // from_str_radix alone would accept a leading '+'
            pair.iter()
                .all(u8::is_ascii_hexdigit)
                .then(|| std::str::from_utf8(pair).ok())
                .flatten()
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| {
                    HelperError::InvalidHex(format!(
                        "bad digit pair {:?}",
                        String::from_utf8_lossy(pair)
                    ))
                })
        })
        .collect::<Result<Vec<u8>>>()
        .map(Some)
}
