use percent_encoding::{percent_decode, percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Form encode set: everything but ASCII alphanumerics and `-_.!*()` is escaped
const FORM_URLENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Encodes a string for use in a query string or form body and returns an owned `String`.
///
/// Reserved bytes become `%XX` with uppercase hex and spaces become `+`.
///
/// # Example
/// ```
/// use codehelpers::url_encoding::encode_url_owned;
/// let encoded = encode_url_owned("Hello World?");
/// assert_eq!(encoded, "Hello+World%3F");
/// ```
pub fn encode_url_owned(input: &str) -> String {
    // A literal '%' is itself escaped, so every "%20" left here is a space.
    percent_encode(input.as_bytes(), FORM_URLENCODE_SET)
        .to_string()
        .replace("%20", "+")
}

/// In-place form of [`encode_url_owned`].
///
/// # Example
/// ```
/// use codehelpers::url_encoding::encode_url;
/// let mut s = String::from("a&b");
/// encode_url(&mut s);
/// assert_eq!(s, "a%26b");
/// ```
pub fn encode_url(input: &mut String) {
    let encoded = encode_url_owned(input);
    *input = encoded;
}

/// Decodes a query-string or form value: `+` becomes a space, then `%XX`
/// escapes are resolved.
///
/// Bytes that do not form valid UTF-8 come back as `U+FFFD`. A `%` not
/// followed by two hex digits is left as it is.
///
/// # Example
/// ```
/// use codehelpers::url_encoding::decode_url_owned;
/// assert_eq!(decode_url_owned("Hello+World%3F"), "Hello World?");
/// ```
pub fn decode_url_owned(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode(spaced.as_bytes())
        .decode_utf8_lossy()
        .into_owned()
}

/// In-place form of [`decode_url_owned`].
pub fn decode_url(input: &mut String) {
    let decoded = decode_url_owned(input);
    *input = decoded;
}
