//! Historical job accounting via sacct.

use crate::QueryError;
use crate::client::SlurmClient;
use harrier_tabular::{Delimiter, Table};

/// Subcommand for the job-history table, parsable (`-P`) pipe output.
const SACCT_CMD: &str = "'sacct --format=%all -P'";

/// Columns shown in the job-history view, in display order.
pub const SACCT_COLUMNS: [&str; 7] = [
    "JobID",
    "JobName",
    "Partition",
    "Account",
    "AllocCPUS",
    "State",
    "ExitCode",
];

fn parse_sacct(raw: &str) -> Result<Table, QueryError> {
    let table = Table::parse(raw, Delimiter::Char('|'))?;
    Ok(table.project(&SACCT_COLUMNS)?)
}

/// Query the accounting history for the current user's jobs.
pub async fn query_sacct(client: &SlurmClient) -> Result<Table, QueryError> {
    let raw = client.run(SACCT_CMD).await?;
    parse_sacct(&raw)
}
