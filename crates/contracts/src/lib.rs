pub mod query {
    pub trait Query<P> {
        type Output;

        fn query(&self, sql: &str, params: P) -> Self::Output;
    }

    // `None` means the connection cannot run statements right now.
    pub trait Connection<P> {
        type Output;

        fn query_capability(&self) -> Option<&dyn Query<P, Output = Self::Output>>;
    }
}

pub use query::{Connection, Query};
