//! Shell command execution for scheduler queries.

use thiserror::Error;
use tokio::process::Command;

/// Error type for command execution.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to execute {command}: {error}")]
    Execution { command: String, error: String },
    #[error("Command {command} failed: {stderr}")]
    Failed { command: String, stderr: String },
}

/// Run a command line through `sh -c` and return its stdout.
///
/// Going through the shell keeps the semantics the scheduler wrappers rely
/// on: multi-word base commands, quote stripping, and variable expansion in
/// the subcommand (e.g. `$LOGNAME`). Non-zero exit is an error that carries
/// the captured stderr for display.
pub async fn run_shell(command: &str) -> Result<String, CommandError> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .output()
        .await
        .map_err(|e| CommandError::Execution {
            command: command.to_string(),
            error: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CommandError::Failed {
            command: command.to_string(),
            stderr: stderr.trim_end().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
