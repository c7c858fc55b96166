use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PgError {
    #[error("DATABASE_URL is required")]
    MissingDatabaseUrl,
    #[error("database connection failed: {message}")]
    ConnectFailed { message: String },
    #[error("query failed: {message}; sql={sql_snippet}")]
    QueryFailed { message: String, sql_snippet: String },
}

pub(crate) fn sql_snippet(sql: &str) -> String {
    const MAX_CHARS: usize = 200;
    let trimmed = sql.trim();

    let mut out = String::with_capacity(trimmed.len().min(MAX_CHARS) + 1);
    for (i, ch) in trimmed.chars().enumerate() {
        if i >= MAX_CHARS {
            out.push('…');
            break;
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::sql_snippet;

    #[test]
    fn snippet_is_truncated_on_char_boundary() {
        let sql = "é".repeat(300);
        let snippet = sql_snippet(&sql);
        assert_eq!(snippet.chars().count(), 201);
        assert!(snippet.ends_with('…'));
    }

    #[test]
    fn short_sql_is_kept() {
        assert_eq!(sql_snippet("  SELECT 1;  "), "SELECT 1;");
    }
}
