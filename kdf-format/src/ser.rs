use crate::config::LineEnding;

/// Appends `element` and the delimiter to `line`.
#[inline(always)]
pub(crate) fn push_token(line: &mut String, element: &str, delimiter: &str) {
    line.push_str(element);
    line.push_str(delimiter);
}

/// Composes a full keyed line: the key and every element, each followed by
/// the delimiter, then the line terminator.
pub(crate) fn keyed_line<I, S>(key: &str, elements: I, delimiter: &str, ending: LineEnding) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    push_token(&mut line, key, delimiter);
    for element in elements {
        push_token(&mut line, element.as_ref(), delimiter);
    }
    line.push_str(ending.as_str());
    line
}

/// Composes a comment line. `None` uses `#` as the prefix, an empty prefix
/// writes the text on its own, and any other prefix replaces `#`.
pub(crate) fn comment_line(
    text: &str,
    prefix: Option<&str>,
    delimiter: &str,
    ending: LineEnding,
) -> String {
    let mut line = String::new();
    match prefix {
        None => push_token(&mut line, "#", delimiter),
        Some("") => {}
        Some(prefix) => push_token(&mut line, prefix, delimiter),
    }
    line.push_str(text);
    line.push_str(ending.as_str());
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed() {
        let line = keyed_line("k1", &["a", "b"], ",", LineEnding::Lf);
        assert_eq!(line, "k1,a,b,\n");

        let line = keyed_line("k1", Vec::<String>::new(), "\t", LineEnding::CrLf);
        assert_eq!(line, "k1\t\r\n");
    }

    #[test]
    fn comments() {
        assert_eq!(comment_line("note", None, ",", LineEnding::Lf), "#,note\n");
        assert_eq!(comment_line("note", Some(""), ",", LineEnding::Lf), "note\n");
        assert_eq!(
            comment_line("note", Some("//"), "\t", LineEnding::Lf),
            "//\tnote\n"
        );
    }
}
