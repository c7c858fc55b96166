use crate::error::{sql_snippet, PgError};
use crate::params::{bind_all, PgParams};
use core::future::Future;
use core::pin::Pin;
use sqlbook_contracts::{Connection, Query};
use sqlx::postgres::{PgPool, PgRow};
use tracing::{debug, instrument};

pub type PgQueryFuture = Pin<Box<dyn Future<Output = Result<Vec<PgRow>, PgError>> + Send + 'static>>;

#[derive(Clone, Debug)]
pub struct PgQuery {
    pool: PgPool,
}

impl Query<PgParams> for PgQuery {
    type Output = PgQueryFuture;

    fn query(&self, sql: &str, params: PgParams) -> Self::Output {
        let pool = self.pool.clone();
        let sql = sql.to_string();

        Box::pin(async move {
            debug!(params = params.len(), "issuing query");
            let query = bind_all(sqlx::query(&sql), params);
            query
                .fetch_all(&pool)
                .await
                .map_err(|e| PgError::QueryFailed {
                    message: e.to_string(),
                    sql_snippet: sql_snippet(&sql),
                })
        })
    }
}

/// A detached or closed connection exposes no `query` capability.
#[derive(Clone, Debug, Default)]
pub struct PgConnection {
    query: Option<PgQuery>,
}

impl PgConnection {
    #[instrument(name = "pg::connect", level = "debug", skip(database_url))]
    pub async fn connect(database_url: &str) -> Result<Self, PgError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| PgError::ConnectFailed {
                message: e.to_string(),
            })?;

        debug!("connected");
        Ok(Self::from_pool(pool))
    }

    pub async fn from_env() -> Result<Self, PgError> {
        let database_url = database_url()?;
        Self::connect(&database_url).await
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            query: Some(PgQuery { pool }),
        }
    }

    pub fn detached() -> Self {
        Self { query: None }
    }

    pub fn is_connected(&self) -> bool {
        self.query.is_some()
    }

    pub async fn close(&mut self) {
        if let Some(query) = self.query.take() {
            query.pool.close().await;
        }
    }
}

impl Connection<PgParams> for PgConnection {
    type Output = PgQueryFuture;

    fn query_capability(&self) -> Option<&dyn Query<PgParams, Output = PgQueryFuture>> {
        self.query
            .as_ref()
            .map(|q| q as &dyn Query<PgParams, Output = PgQueryFuture>)
    }
}

pub fn database_url() -> Result<String, PgError> {
    let _ = dotenvy::dotenv();
    database_url_from(std::env::var("DATABASE_URL").ok())
}

pub fn database_url_from(value: Option<String>) -> Result<String, PgError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PgError::MissingDatabaseUrl),
    }
}
