//! Input scrubbing and simple text layout

use tracing::debug;

/// Fragments stripped by [`handle_sql_injection`], in the order they are checked.
pub const SQL_DANGEROUS_CONTENT: [&str; 9] = [
    "select", "insert", "update", "delete", "drop", "--", ";", "xp_", "sp_",
];

/// Removes well-known SQL keywords and statement separators from a string.
///
/// Each fragment of [`SQL_DANGEROUS_CONTENT`] is looked for in the
/// lower-cased input, but only occurrences with the exact same case are
/// removed. `"SELECT"` is therefore detected and left in place, while
/// `"select"` is stripped.
///
/// # Example
/// ```
/// use codehelpers::sanitize::handle_sql_injection;
/// assert_eq!(handle_sql_injection("name; drop users"), "name  users");
/// ```
pub fn handle_sql_injection(input: &str) -> String {
    let mut output = input.to_string();

    for fragment in SQL_DANGEROUS_CONTENT {
        if output.to_lowercase().contains(fragment) {
            debug!(fragment, "removing SQL fragment");
            output = output.replace(fragment, "");
        }
    }

    output
}

/// Drops every `<` and `>` character.
pub fn remove_html_tags(input: &str) -> String {
    input.replace(['<', '>'], "")
}

/// Neutralises markup by HTML-encoding the input.
#[cfg(feature = "html")]
pub fn handle_xss(input: &str) -> String {
    crate::html::html_encode(input)
}

/// Centers `input` in a field of `width` characters, padding with spaces.
///
/// The text is first right-aligned to `(width + len) / 2` and then
/// left-aligned to `width`, so an odd remainder goes to the right. Input
/// longer than `width` is returned unchanged.
///
/// # Example
/// ```
/// use codehelpers::sanitize::align_center;
/// assert_eq!(align_center("ab", 6), "  ab  ");
/// assert_eq!(align_center("abc", 6), " abc  ");
/// ```
pub fn align_center(input: &str, width: usize) -> String {
    let inner = (width + input.chars().count()) / 2;
    let right_aligned = format!("{:>inner$}", input, inner = inner);
    format!("{:<width$}", right_aligned, width = width)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sql_fragments_are_removed() {
        assert_eq!(
            handle_sql_injection("select * from users; drop table"),
            " * from users  table"
        );
        assert_eq!(handle_sql_injection("exec xp_cmdshell"), "exec cmdshell");
        assert_eq!(handle_sql_injection("a -- comment"), "a  comment");
    }

    #[test]
    fn sql_removal_is_case_sensitive() {
        assert_eq!(handle_sql_injection("SELECT name"), "SELECT name");
        assert_eq!(handle_sql_injection("Drop; it"), "Drop it");
    }

    #[test]
    fn harmless_sql_input_is_kept() {
        assert_eq!(handle_sql_injection("John O'Brien"), "John O'Brien");
        assert_eq!(handle_sql_injection(""), "");
    }

    #[test]
    fn angle_brackets_are_stripped() {
        assert_eq!(remove_html_tags("<b>bold</b>"), "bbold/b");
        assert_eq!(remove_html_tags("no tags"), "no tags");
    }

    #[cfg(feature = "html")]
    #[test]
    fn xss_is_encoded() {
        let handled = handle_xss("<script>alert(1)</script>");
        assert!(!handled.contains('<'));
        assert!(!handled.contains('>'));
        assert!(handled.starts_with("&lt;script&gt;"));
    }

    #[test]
    fn centering() {
        assert_eq!(align_center("ab", 6), "  ab  ");
        assert_eq!(align_center("abc", 6), " abc  ");
        assert_eq!(align_center("", 4), "    ");
        assert_eq!(align_center("toolong", 3), "toolong");
    }
}
