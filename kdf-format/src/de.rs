use std::borrow::Cow;

use encoding_rs::Encoding;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Strip the line terminator (`\n` or `\r\n`) from a raw line.
#[inline(always)]
pub(crate) fn trim_line_ending(mut line: &[u8]) -> &[u8] {
    if let Some(rest) = line.strip_suffix(b"\n") {
        line = rest;
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
    }
    line
}

#[inline(always)]
pub(crate) fn strip_bom(line: &[u8]) -> &[u8] {
    line.strip_prefix(UTF8_BOM).unwrap_or(line)
}

/// Decode a raw line, returning `None` if it contains malformed sequences.
pub(crate) fn decode_line<'a>(encoding: &'static Encoding, line: &'a [u8]) -> Option<Cow<'a, str>> {
    encoding.decode_without_bom_handling_and_without_replacement(line)
}

/// Split a line into its fields.
///
/// Empty fields between delimiters are kept. A single trailing delimiter
/// closes the last field rather than opening a new one, and an empty line has
/// no fields at all.
pub(crate) fn tokenize<'a>(line: &'a str, delimiter: &str) -> Vec<&'a str> {
    if line.is_empty() {
        return vec![];
    }

    let line = line.strip_suffix(delimiter).unwrap_or(line);
    line.split(delimiter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line() {
        assert_eq!(tokenize("1,Alice,30", ","), vec!["1", "Alice", "30"]);
    }

    #[test]
    fn trailing_delimiter_is_dropped_once() {
        assert_eq!(tokenize("k1,a,b,", ","), vec!["k1", "a", "b"]);
        assert_eq!(tokenize("k1,a,,", ","), vec!["k1", "a", ""]);
    }

    #[test]
    fn empty_fields() {
        assert_eq!(tokenize(",a,,b", ","), vec!["", "a", "", "b"]);
        assert_eq!(tokenize(",", ","), vec![""]);
    }

    #[test]
    fn empty_line_has_no_fields() {
        assert!(tokenize("", ",").is_empty());
    }

    #[test]
    fn multi_char_delimiter() {
        assert_eq!(tokenize("a::b::c::", "::"), vec!["a", "b", "c"]);
        assert_eq!(tokenize("a:b::c", "::"), vec!["a:b", "c"]);
    }

    #[test]
    fn line_endings() {
        assert_eq!(trim_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc"), b"abc");
        assert_eq!(trim_line_ending(b"abc\r"), b"abc\r");
    }

    #[test]
    fn decodes_latin1() {
        let line = decode_line(encoding_rs::WINDOWS_1252, b"caf\xe9").unwrap();
        assert_eq!(line, "café");
        assert!(decode_line(encoding_rs::UTF_8, b"caf\xe9").is_none());
    }
}
