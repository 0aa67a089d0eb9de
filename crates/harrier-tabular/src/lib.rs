//! Command execution and tabular-output parsing for scheduler queries.
//!
//! Scheduler CLIs (`sinfo`, `squeue`, `sacct`) print fixed-shape tables to
//! stdout: a header line of column names followed by one line per record,
//! fields separated by runs of whitespace or by a delimiter character. This
//! crate runs such commands and turns their output into a [`Table`] of typed
//! cells, optionally narrowed to a projection of named columns.

pub mod command;
pub mod table;

pub use command::{CommandError, run_shell};
pub use table::{Cell, Delimiter, Table, TableError};
