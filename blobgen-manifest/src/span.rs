//! Locating manifest entries in the TOML source.

use miette::SourceSpan;

/// Find the span of `value` written as a TOML string, without the quotes.
pub(crate) fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    let pattern = format!("\"{}\"", value);
    src.find(&pattern)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Find the span of `name` in a `[table.name]` header, falling back to any
/// occurrence of the name.
pub(crate) fn find_table_span(src: &str, table: &str, name: &str) -> Option<SourceSpan> {
    let header = format!("[{}.{}]", table, name);
    if let Some(pos) = src.find(&header) {
        return Some(SourceSpan::from((pos + table.len() + 2, name.len())));
    }

    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Find the span of the string value of `key` inside the `[[array]]` entry
/// whose `name` is `name`, without the quotes.
pub(crate) fn find_entry_value_span(
    src: &str,
    array: &str,
    name: &str,
    key: &str,
) -> Option<SourceSpan> {
    let header = format!("[[{}]]", array);
    src.match_indices(&header).find_map(|(pos, _)| {
        let start = pos + header.len();
        let end = src[start..]
            .find("\n[")
            .map_or(src.len(), |offset| start + offset);
        let entry = &src[start..end];

        let (_, entry_name) = string_value(entry, "name")?;
        if entry_name != name {
            return None;
        }
        let (offset, value) = string_value(entry, key)?;
        Some(SourceSpan::from((start + offset, value.len())))
    })
}

/// Offset and contents of a `key = "value"` line in a table body.
fn string_value<'a>(body: &'a str, key: &str) -> Option<(usize, &'a str)> {
    let mut line_start = 0;
    for line in body.split_inclusive('\n') {
        let is_key = line
            .trim_start()
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_key {
            let open = line.find('"')? + 1;
            let close = open + line[open..].find('"')?;
            return Some((line_start + open, &line[open..close]));
        }
        line_start += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_quoted_span() {
        let src = r#"fields = [{ name = "x", type = "Point" }]"#;
        let span = find_quoted_span(src, "Point").unwrap();

        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Point");
        assert!(find_quoted_span(src, "Rect").is_none());
    }

    #[test]
    fn test_find_table_span() {
        let src = "# Rect\n[structs.Rect]\nfields = []\n";
        let span = find_table_span(src, "structs", "Rect").unwrap();

        assert_eq!(span.offset(), 16);
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Rect");
    }

    #[test]
    fn test_find_entry_value_span() {
        let src = concat!(
            "[[settings]]\n",
            "name = \"A\"\n",
            "version = \"2.3\"\n",
            "\n",
            "[[settings]]\n",
            "version = \"2.3.0\"\n",
            "name = \"B\"\n",
        );
        let span = find_entry_value_span(src, "settings", "B", "version").unwrap();

        assert_eq!(&src[span.offset()..span.offset() + span.len()], "2.3.0");
        assert!(span.offset() > src.find("[[settings]]\nversion").unwrap());
        assert!(find_entry_value_span(src, "settings", "C", "version").is_none());
    }
}
