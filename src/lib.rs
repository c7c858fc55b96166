//! Named SQL statements loaded from annotated `.sql` files.
//!
//! ```sql
//! -- name: examples_by_name
//! SELECT * FROM example WHERE name = :name ;
//! ```
//!
//! [`load`] reads such a file and returns [`Queries`], one [`QueryFn`] per
//! `-- name:` directive. Statements before the first directive are collected
//! under [`DEFAULT_GROUP`]. Each `QueryFn` runs on anything implementing
//! [`Connection`].

mod checksum;
mod source;

pub use checksum::Checksum;
pub use source::{load, load_str, read_sql_file, SqlFile};

pub use sqlbook_contracts::{Connection, Query};
pub use sqlbook_dispatch::{InterfaceError, Queries, QueryFn};
pub use sqlbook_parser::{segment, QueryTable, StatementGroup, DEFAULT_GROUP};
