use crate::error::InterfaceError;
use crate::query_fn::QueryFn;
use indexmap::IndexMap;
use sqlbook_contracts::Connection;
use sqlbook_parser::QueryTable;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queries {
    entries: IndexMap<String, QueryFn>,
}

impl Queries {
    pub fn from_table(table: QueryTable) -> Self {
        let entries = table
            .into_iter()
            .map(|(name, sql)| {
                let query = QueryFn::new(name.as_str(), sql);
                (name, query)
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&QueryFn> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryFn> {
        self.entries.values()
    }

    /// `None` when no query called `name` was loaded.
    pub fn call<C, P>(
        &self,
        name: &str,
        connection: &C,
        params: P,
    ) -> Option<Result<C::Output, InterfaceError>>
    where
        C: Connection<P> + ?Sized,
    {
        self.get(name).map(|query| query.call(connection, params))
    }
}

impl From<QueryTable> for Queries {
    fn from(table: QueryTable) -> Self {
        Self::from_table(table)
    }
}

impl<'a> IntoIterator for &'a Queries {
    type Item = &'a QueryFn;
    type IntoIter = indexmap::map::Values<'a, String, QueryFn>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
