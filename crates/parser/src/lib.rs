mod line;
mod model;
mod segment;

pub use model::{QueryTable, StatementGroup};
pub use segment::{segment, DEFAULT_GROUP};
