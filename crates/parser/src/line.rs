const COMMENT_MARKER: &str = "--";
const NAME_KEYWORD: &str = "name:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Directive(String),
    Comment,
    Sql(&'a str),
}

pub(crate) fn classify(line: &str) -> Line<'_> {
    match directive_name(line) {
        Some(Some(name)) => Line::Directive(normalize_name(name)),
        Some(None) => Line::Comment,
        None => Line::Sql(strip_comment(line)),
    }
}

// None: not a comment. Some(None): comment without a `name:` payload.
// The identifier is raw and may be empty.
pub(crate) fn directive_name(line: &str) -> Option<Option<&str>> {
    let rest = line.strip_prefix(COMMENT_MARKER)?.trim_start();
    Some(name_payload(rest))
}

fn name_payload(rest: &str) -> Option<&str> {
    let keyword = rest.get(..NAME_KEYWORD.len())?;
    if !keyword.eq_ignore_ascii_case(NAME_KEYWORD) {
        return None;
    }

    let rest = rest[NAME_KEYWORD.len()..].trim_start();
    let end = rest
        .find(|c: char| !is_identifier_char(c))
        .unwrap_or(rest.len());

    Some(&rest[..end])
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Replaces only the first `-` with `_`: `a-b-c` becomes `a_b-c`.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.replacen('-', "_", 1)
}

/// Cuts from the first `--` to the end of the line, even inside a string literal.
pub(crate) fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    }
}

pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_sql_is_kept_verbatim() {
        assert_eq!(classify("SELECT * FROM t;"), Line::Sql("SELECT * FROM t;"));
    }

    #[test]
    fn comment_without_name_is_skipped() {
        assert_eq!(classify("-- Query"), Line::Comment);
        assert_eq!(classify("--"), Line::Comment);
        assert_eq!(classify("-- name test_2"), Line::Comment);
        assert_eq!(classify("-- names: plural"), Line::Comment);
    }

    #[test]
    fn directive_keyword_is_case_insensitive() {
        assert_eq!(classify("-- NAME: upper"), Line::Directive("upper".to_string()));
        assert_eq!(classify("--Name:mixed"), Line::Directive("mixed".to_string()));
    }

    #[test]
    fn directive_identifier_stops_at_first_foreign_char() {
        assert_eq!(
            classify("-- name: by_id SELECT 1"),
            Line::Directive("by_id".to_string())
        );
        assert_eq!(classify("-- name: q.1"), Line::Directive("q".to_string()));
    }

    #[test]
    fn directive_with_empty_identifier_is_still_a_directive() {
        assert_eq!(directive_name("-- name:"), Some(Some("")));
        assert_eq!(classify("-- name:   "), Line::Directive(String::new()));
    }

    #[test]
    fn only_first_hyphen_is_normalized() {
        assert_eq!(normalize_name("foo-bar"), "foo_bar");
        assert_eq!(normalize_name("a-b-c"), "a_b-c");
        assert_eq!(normalize_name("plain"), "plain");
    }

    #[test]
    fn trailing_comment_is_stripped_from_sql() {
        assert_eq!(classify("SELECT 1; -- one"), Line::Sql("SELECT 1;"));
        assert_eq!(strip_comment("a--b"), "a");
    }

    #[test]
    fn directive_after_sql_is_a_trailing_comment() {
        assert_eq!(classify("SELECT 1 -- name: late"), Line::Sql("SELECT 1"));
    }

    #[test]
    fn multibyte_text_after_marker_does_not_panic() {
        assert_eq!(classify("-- näme: x"), Line::Comment);
        assert_eq!(classify("--é"), Line::Comment);
    }

    #[test]
    fn trim_line_drops_bom_and_carriage_return() {
        assert_eq!(trim_line("\u{feff}SELECT 1;\r"), "SELECT 1;");
    }
}
