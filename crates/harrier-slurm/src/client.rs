//! Scheduler access through a configurable base command.

use crate::settings::Settings;
use harrier_tabular::{CommandError, run_shell};

/// Runs scheduler subcommands through the configured base command.
#[derive(Debug, Clone)]
pub struct SlurmClient {
    base_cmd: String,
}

impl SlurmClient {
    /// Create a client from loaded settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            base_cmd: settings.slurm_base_cmd.clone(),
        }
    }

    /// The configured base command.
    pub fn base_cmd(&self) -> &str {
        &self.base_cmd
    }

    /// Run a scheduler subcommand and return its stdout.
    ///
    /// The full command line is `{base_cmd} -c {subcommand}`, run through the
    /// shell. Subcommands that need to stay a single word (embedded spaces or
    /// variables) are single-quoted by the caller; the shell strips the quotes
    /// and the base command expands variables like `$LOGNAME`.
    pub async fn run(&self, subcommand: &str) -> Result<String, CommandError> {
        let command = format!("{} -c {}", self.base_cmd, subcommand);
        tracing::info!("running scheduler command: {}", command);
        let stdout = run_shell(&command).await?;
        tracing::debug!("scheduler command returned {} bytes", stdout.len());
        Ok(stdout)
    }
}
