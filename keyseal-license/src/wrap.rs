//! Human-copyable text block around the frame string.
//!
//! A wrapped license is a `\n`-joined block: header marker, an optional
//! licensee line, the frame split into lines of at most 64 chars, footer
//! marker. Every marker line starts with `--`, which is what `unwrap` keys
//! on to strip them back out.

/// First line of every license block.
pub const HEADER: &str = "---BEGIN LICENSE KEY---";

/// Last line of every license block.
pub const FOOTER: &str = "---END LICENSE KEY---";

const MAX_LINE_LENGTH: usize = 64;

/// Wraps frame text into the marker-delimited block.
///
/// When a licensee is given, a personal annotation line is placed between
/// the header and the body.
#[must_use]
pub fn wrap(raw: &str, licensee: Option<&str>) -> String {
    let mut lines = vec![HEADER.to_string()];

    if let Some(licensee) = licensee {
        lines.push(format!(
            "---This personal license is issued to {licensee}.---"
        ));
    }

    let mut chars = raw.chars().peekable();
    while chars.peek().is_some() {
        lines.push(chars.by_ref().take(MAX_LINE_LENGTH).collect());
    }

    lines.push(FOOTER.to_string());
    lines.join("\n")
}

/// Recovers the frame text from a wrapped block.
///
/// Splits on `\n` and drops every line shorter than 2 bytes or starting
/// with `--`; header, footer, and the licensee annotation all match that
/// filter. The survivors are concatenated in order. `None` means no content
/// lines remained, the designed signal for "no key material found".
#[must_use]
pub fn unwrap(wrapped: &str) -> Option<String> {
    let mut raw = String::new();

    for line in wrapped.split('\n') {
        if line.len() < 2 || line.starts_with("--") {
            continue;
        }
        raw.push_str(line);
    }

    if raw.is_empty() { None } else { Some(raw) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_of_empty_body_is_markers_only() {
        assert_eq!(wrap("", None), format!("{HEADER}\n{FOOTER}"));
    }

    #[test]
    fn unwrap_of_markers_only_is_none() {
        assert_eq!(unwrap(&wrap("", None)), None);
    }

    #[test]
    fn licensee_line_sits_between_header_and_body() {
        let block = wrap("abc", Some("Alice"));
        let lines: Vec<&str> = block.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                HEADER,
                "---This personal license is issued to Alice.---",
                "abc",
                FOOTER,
            ]
        );
    }

    #[test]
    fn body_lines_never_exceed_max_length() {
        let raw = "x".repeat(200);
        for line in wrap(&raw, None).split('\n') {
            assert!(line.len() <= MAX_LINE_LENGTH);
        }
    }

    #[test]
    fn short_junk_lines_are_dropped() {
        assert_eq!(unwrap("a\nbcd\n-\nef"), Some("bcdef".to_string()));
    }
}
