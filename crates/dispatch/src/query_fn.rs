use crate::error::InterfaceError;
use sqlbook_contracts::Connection;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFn {
    name: Arc<str>,
    sql: Arc<str>,
}

impl QueryFn {
    pub fn new(name: impl Into<Arc<str>>, sql: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            sql: sql.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn call<C, P>(&self, connection: &C, params: P) -> Result<C::Output, InterfaceError>
    where
        C: Connection<P> + ?Sized,
    {
        let query = connection
            .query_capability()
            .ok_or_else(|| InterfaceError::MissingQueryCapability {
                query: self.name.to_string(),
            })?;

        Ok(query.query(&self.sql, params))
    }
}
