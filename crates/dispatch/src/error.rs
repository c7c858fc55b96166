use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("connection must implement a callable `query` capability (query '{query}')")]
    MissingQueryCapability { query: String },
}

impl InterfaceError {
    pub fn query(&self) -> &str {
        match self {
            InterfaceError::MissingQueryCapability { query } => query,
        }
    }
}
