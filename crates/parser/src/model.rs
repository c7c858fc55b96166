use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementGroup<'a> {
    pub name: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTable {
    groups: IndexMap<String, String>,
}

impl QueryTable {
    pub(crate) fn new(groups: IndexMap<String, String>) -> Self {
        Self { groups }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.groups.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = StatementGroup<'_>> {
        self.groups.iter().map(|(name, text)| StatementGroup { name, text })
    }
}

impl IntoIterator for QueryTable {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
