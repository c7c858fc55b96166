use crate::line::{classify, trim_line, Line};
use crate::model::QueryTable;
use indexmap::IndexMap;
use tracing::{instrument, trace};

/// Group that collects statements appearing before any directive.
pub const DEFAULT_GROUP: &str = "default";

/// Text without any directive or SQL yields a single empty `default` group.
#[instrument(name = "parser::segment", level = "trace", skip(text), fields(bytes = text.len()))]
pub fn segment(text: &str) -> QueryTable {
    text.split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .fold(SegmentState::new(), SegmentState::feed)
        .finish()
}

struct SegmentState {
    current: String,
    groups: IndexMap<String, String>,
}

impl SegmentState {
    fn new() -> Self {
        Self {
            current: DEFAULT_GROUP.to_string(),
            groups: IndexMap::new(),
        }
    }

    fn feed(mut self, line: &str) -> Self {
        match classify(line) {
            Line::Comment => {}
            Line::Directive(name) => {
                trace!(group = %name, "switching statement group");
                self.groups.entry(name.clone()).or_default();
                self.current = name;
            }
            Line::Sql(fragment) => self.append(fragment),
        }
        self
    }

    fn append(&mut self, fragment: &str) {
        match self.groups.get_mut(&self.current) {
            Some(text) => {
                if !fragment.is_empty() {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(fragment);
                }
            }
            None => {
                self.groups
                    .insert(self.current.clone(), fragment.to_string());
            }
        }
    }

    fn finish(mut self) -> QueryTable {
        if self.groups.is_empty() {
            self.groups.insert(DEFAULT_GROUP.to_string(), String::new());
        }
        QueryTable::new(self.groups)
    }
}
