use crate::checksum::Checksum;
use sqlbook_dispatch::Queries;
use sqlbook_parser::{segment, QueryTable};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFile {
    pub path: PathBuf,
    pub checksum: Checksum,
    pub text: String,
}

impl SqlFile {
    pub fn new(path: PathBuf, checksum: Checksum, text: String) -> Self {
        Self {
            path,
            checksum,
            text,
        }
    }

    pub fn table(&self) -> QueryTable {
        segment(&self.text)
    }

    pub fn queries(&self) -> Queries {
        Queries::from_table(self.table())
    }

    pub fn changed_since(&self, previous: &SqlFile) -> bool {
        self.path != previous.path || self.checksum != previous.checksum
    }

    /// Re-reads the file. `None` when its bytes are unchanged.
    pub fn reload(&self) -> io::Result<Option<SqlFile>> {
        let current = read_sql_file(&self.path)?;
        if !current.changed_since(self) {
            return Ok(None);
        }

        debug!(
            path = %current.path.display(),
            from = %self.checksum,
            to = %current.checksum,
            "sql file changed"
        );
        Ok(Some(current))
    }
}

/// Invalid UTF-8 is reported as [`io::ErrorKind::InvalidData`]; other I/O
/// failures are returned as-is.
pub fn read_sql_file(path: impl AsRef<Path>) -> io::Result<SqlFile> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let checksum = Checksum::of(&bytes);
    let text = String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(SqlFile::new(path.to_path_buf(), checksum, text))
}

#[instrument(name = "sqlbook::load", level = "trace", skip(path), fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> io::Result<Queries> {
    let file = read_sql_file(path)?;
    let queries = file.queries();

    debug!(
        path = %file.path.display(),
        checksum = %file.checksum,
        queries = queries.len(),
        "loaded sql file"
    );

    Ok(queries)
}

pub fn load_str(text: &str) -> Queries {
    Queries::from_table(segment(text))
}
