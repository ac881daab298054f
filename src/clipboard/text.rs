//! Text helpers

/// Converts CRLF and lone CR line endings to LF
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_windows_and_classic_mac_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn cr_before_crlf_becomes_two_newlines() {
        assert_eq!(normalize_line_endings("a\r\r\nb"), "a\n\nb");
    }

    #[test]
    fn unix_text_is_unchanged() {
        assert_eq!(normalize_line_endings("one\ntwo\n"), "one\ntwo\n");
    }
}
