//! SLURM integration for harrier.
//!
//! Query cluster nodes via sinfo and job status via squeue and sacct. Every
//! query runs through a configurable base command, so the same dashboard can
//! talk to a local scheduler (`bash`) or hop through a login node
//! (`ssh login01 bash`).

pub mod client;
pub mod sacct;
pub mod settings;
pub mod sinfo;
pub mod squeue;

pub use client::SlurmClient;
pub use settings::{Settings, SettingsError};

use harrier_tabular::{CommandError, TableError};
use thiserror::Error;

/// Error type for scheduler queries.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Failed to parse scheduler output: {0}")]
    Parse(#[from] TableError),
}

impl QueryError {
    /// Whether the failure happened while running the command, as opposed to
    /// parsing its output.
    pub fn is_command(&self) -> bool {
        matches!(self, Self::Command(_))
    }
}
