/// Display escaping for terminal output
///
/// Doctor records come from the network and the concern is typed by the
/// user; neither may move the cursor or recolor the terminal.

use std::sync::OnceLock;

use regex::Regex;

fn escape_sequences() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // CSI sequences, OSC strings, then any other two-byte escape
        Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)|\x1b[@-_]")
            .expect("escape sequence pattern is valid")
    })
}

/// Strip escape sequences and control characters from a single line of text
pub fn escape(text: &str) -> String {
    escape_sequences()
        .replace_all(text, "")
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

/// Like `escape`, but keeps line breaks between the escaped lines
pub fn escape_multiline(text: &str) -> String {
    text.lines().map(escape).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape("Dr. Sarah Johnson"), "Dr. Sarah Johnson");
        assert_eq!(escape("Ärztin für Geburtshilfe"), "Ärztin für Geburtshilfe");
    }

    #[test]
    fn test_strips_ansi_sequences() {
        assert_eq!(escape("\x1b[31mred\x1b[0m"), "red");
        assert_eq!(escape("\x1b]0;title\x07name"), "name");
    }

    #[test]
    fn test_multiline_keeps_line_breaks() {
        assert_eq!(
            escape_multiline("first\r\n\x1b[1msecond\x1b[0m\x07"),
            "first\nsecond"
        );
        assert_eq!(escape_multiline(""), "");
    }

    #[test]
    fn test_drops_control_characters() {
        assert_eq!(escape("line\nbreak\r\x07"), "linebreak");
    }
}
