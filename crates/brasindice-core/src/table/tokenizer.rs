//! Quoted-field line splitter for the BRASINDICE feed.
//!
//! Not a generic CSV reader: the feed's escape rule (doubled quote inside a
//! quoted field) coexists with commas outside quotes always being field
//! separators, with no RFC-4180 ambiguity handling.

/// Split one line into its ordered fields.
///
/// A `"` toggles the inside-quotes flag; `""` while inside quotes emits one
/// literal quote. A `,` outside quotes ends the field. Nothing is trimmed or
/// coerced. An unterminated quote at end of line is tolerated: whatever is
/// buffered becomes the last field.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut buf = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                buf.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut buf)),
            _ => buf.push(c),
        }
    }

    // There is always one more field than top-level commas.
    fields.push(buf);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_fields() {
        assert_eq!(tokenize_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_comma_and_escaped_quote() {
        assert_eq!(
            tokenize_line(r#""a,b","c""d",e"#),
            vec!["a,b", "c\"d", "e"]
        );
    }

    #[test]
    fn test_empty_fields_survive() {
        assert_eq!(tokenize_line(",,"), vec!["", "", ""]);
        assert_eq!(tokenize_line(r#""","",x"#), vec!["", "", "x"]);
    }

    #[test]
    fn test_single_field_line() {
        assert_eq!(tokenize_line("only"), vec!["only"]);
        assert_eq!(tokenize_line(""), vec![""]);
    }

    #[test]
    fn test_unterminated_quote_is_tolerated() {
        assert_eq!(tokenize_line(r#""a,b"#), vec!["a,b"]);
    }

    #[test]
    fn test_no_trimming() {
        assert_eq!(tokenize_line(" a , b "), vec![" a ", " b "]);
    }
}
