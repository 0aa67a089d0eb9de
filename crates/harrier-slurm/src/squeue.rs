//! The current user's active jobs via squeue.

use crate::QueryError;
use crate::client::SlurmClient;
use harrier_tabular::{Delimiter, Table};

/// Subcommand for the running-jobs table. Single-quoted so the listing
/// command reaches the base command as one argument and `$LOGNAME` expands
/// there, which puts the right user in play when the base command is a
/// remote shell.
const SQUEUE_CMD: &str = "'squeue -u $LOGNAME --format=%all'";

/// Columns shown in the running-jobs view, in display order.
pub const SQUEUE_COLUMNS: [&str; 8] = [
    "JOBID", "USER", "PARTITION", "NAME", "STATE", "TIME", "NODES", "NODELIST",
];

fn parse_squeue(raw: &str) -> Result<Table, QueryError> {
    let table = Table::parse(raw, Delimiter::Char('|'))?;
    Ok(table.project(&SQUEUE_COLUMNS)?)
}

/// Query the current user's queued and running jobs.
pub async fn query_squeue(client: &SlurmClient) -> Result<Table, QueryError> {
    let raw = client.run(SQUEUE_CMD).await?;
    parse_squeue(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harrier_tabular::Cell;

    // %all output carries far more columns than the view shows, and repeats
    // GROUP; the parser renames the repeat and the projection drops both.
    const SAMPLE: &str = "\
ACCOUNT|GROUP|JOBID|NAME|COMMENT|TIME_LIMIT|ST|USER|GROUP|NODES|TIME|NODELIST|PARTITION|STATE|SUBMIT_TIME
lab|users|4217|align_s1|none|4:00:00|R|alice|1001|2|1:02:13|node[01-02]|short|RUNNING|2024-03-01T09:00:00
lab|users|4218|align_s2|none|4:00:00|PD|alice|1001|1|0:00|(Priority)|short|PENDING|2024-03-01T09:01:00
";

    #[test]
    fn test_parse_squeue_projects_display_columns() {
        let table = parse_squeue(SAMPLE).unwrap();
        assert_eq!(table.columns, SQUEUE_COLUMNS);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][0], Cell::Int(4217));
        assert_eq!(table.rows[0][1], Cell::Text("alice".to_string()));
        assert_eq!(table.rows[0][4], Cell::Text("RUNNING".to_string()));
        assert_eq!(table.rows[0][6], Cell::Int(2));
        assert_eq!(table.rows[1][7], Cell::Text("(Priority)".to_string()));
    }

    #[test]
    fn test_parse_squeue_missing_column_is_error() {
        let raw = "JOBID|USER\n1|alice\n";
        assert!(matches!(parse_squeue(raw), Err(QueryError::Parse(_))));
    }
}
