//! String predicates
//!
//! Everything here answers a yes/no question about a `&str` and never fails.

use once_cell::sync::Lazy;
use regex::Regex;

static BASE64_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9+/]*={0,3}$").expect("base64 pattern is valid"));

/// True when the input is empty or contains only whitespace.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Checks whether a string looks like standard Base64.
///
/// The input must not be blank, its length must be a multiple of 4 and it
/// may only hold the standard alphabet followed by up to three `=`.
///
/// # Example
/// ```
/// use codehelpers::validation::is_base64;
/// assert!(is_base64("SGVsbG8="));
/// assert!(!is_base64("SGVsbG8"));
/// ```
pub fn is_base64(input: &str) -> bool {
    if is_blank(input) {
        return false;
    }
    input.len() % 4 == 0 && BASE64_PATTERN.is_match(input)
}

/// True when the trimmed input parses as a 32-bit signed integer.
pub fn is_int(input: &str) -> bool {
    input.trim().parse::<i32>().is_ok()
}

/// True when the trimmed input is `true` or `false`, ignoring ASCII case.
pub fn is_bool(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("false")
}

/// Exact, case-sensitive membership test.
pub fn is_in(input: &str, candidates: &[&str]) -> bool {
    candidates.contains(&input)
}

#[cfg(feature = "datetime")]
pub use crate::datetime::is_date_time;

/// Method form of the predicates above.
pub trait StrExt {
    fn is_blank(&self) -> bool;
    fn is_base64(&self) -> bool;
    fn is_int(&self) -> bool;
    fn is_bool(&self) -> bool;
    #[cfg(feature = "datetime")]
    fn is_date_time(&self) -> bool;
}

impl StrExt for str {
    fn is_blank(&self) -> bool {
        is_blank(self)
    }

    fn is_base64(&self) -> bool {
        is_base64(self)
    }

    fn is_int(&self) -> bool {
        is_int(self)
    }

    fn is_bool(&self) -> bool {
        is_bool(self)
    }

    #[cfg(feature = "datetime")]
    fn is_date_time(&self) -> bool {
        is_date_time(self)
    }
}
