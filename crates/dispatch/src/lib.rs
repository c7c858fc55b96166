mod error;
mod queries;
mod query_fn;

pub use error::InterfaceError;
pub use queries::Queries;
pub use query_fn::QueryFn;
