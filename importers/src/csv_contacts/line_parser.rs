/// Split raw CSV text into its non-blank lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Split one CSV line into fields.
///
/// Left-to-right scan with a toggled inside-quotes flag: `"` flips the
/// flag, `,` outside quotes ends the field. A doubled quote inside a
/// quoted field is two toggle events, so `""` never yields a literal
/// quote character. Kept as-is to match the upload format this was
/// written against.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == ',' && !in_quotes {
            fields.push(finish_field(&current));
            current.clear();
        } else {
            current.push(ch);
        }
    }

    fields.push(finish_field(&current));
    fields
}

fn finish_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_blanks() {
        let lines = split_lines("a,b\n\n   \nc,d\n");
        assert_eq!(lines, vec!["a,b", "c,d"]);
    }

    #[test]
    fn test_plain_fields() {
        assert_eq!(
            split_fields("Sarah,Jones,sarah@example.com"),
            vec!["Sarah", "Jones", "sarah@example.com"]
        );
    }

    #[test]
    fn test_quoted_field_keeps_embedded_comma() {
        assert_eq!(
            split_fields(r#""Smith, John",john@x.com"#),
            vec!["Smith, John", "john@x.com"]
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(split_fields(" a , b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trailing_comma_yields_empty_field() {
        assert_eq!(split_fields("a,b,"), vec!["a", "b", ""]);
    }

    // Pins the quote-toggle limitation: a doubled quote is two toggle
    // events, not an escaped literal quote.
    #[test]
    fn test_doubled_quote_is_two_toggles() {
        assert_eq!(split_fields(r#""a""b",c"#), vec!["ab", "c"]);
    }
}
