use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

/// One positional parameter, bound to `$1`, `$2`, ... in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PgParam {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

pub type PgParams = Vec<PgParam>;

impl From<bool> for PgParam {
    fn from(v: bool) -> Self {
        PgParam::Bool(v)
    }
}

impl From<i64> for PgParam {
    fn from(v: i64) -> Self {
        PgParam::Int(v)
    }
}

impl From<i32> for PgParam {
    fn from(v: i32) -> Self {
        PgParam::Int(i64::from(v))
    }
}

impl From<f64> for PgParam {
    fn from(v: f64) -> Self {
        PgParam::Float(v)
    }
}

impl From<&str> for PgParam {
    fn from(v: &str) -> Self {
        PgParam::Text(v.to_string())
    }
}

impl From<String> for PgParam {
    fn from(v: String) -> Self {
        PgParam::Text(v)
    }
}

impl<T: Into<PgParam>> From<Option<T>> for PgParam {
    fn from(v: Option<T>) -> Self {
        v.map_or(PgParam::Null, Into::into)
    }
}

pub(crate) fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: PgParams,
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match param {
            PgParam::Null => query.bind(Option::<String>::None),
            PgParam::Bool(v) => query.bind(v),
            PgParam::Int(v) => query.bind(v),
            PgParam::Float(v) => query.bind(v),
            PgParam::Text(v) => query.bind(v),
        };
    }
    query
}
