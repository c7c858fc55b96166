pub mod connection;
pub mod error;
pub mod params;

pub use connection::{database_url, database_url_from, PgConnection, PgQuery, PgQueryFuture};
pub use error::PgError;
pub use params::{PgParam, PgParams};
