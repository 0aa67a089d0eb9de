//! Cluster node and partition inventory via sinfo.

use crate::QueryError;
use crate::client::SlurmClient;
use harrier_tabular::{Delimiter, Table};

/// Subcommand for the cluster inventory table.
const SINFO_CMD: &str = "sinfo";

fn parse_sinfo(raw: &str) -> Result<Table, QueryError> {
    Ok(Table::parse(raw, Delimiter::Whitespace)?)
}

/// Query the cluster's node and partition inventory.
pub async fn query_sinfo(client: &SlurmClient) -> Result<Table, QueryError> {
    let raw = client.run(SINFO_CMD).await?;
    parse_sinfo(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harrier_tabular::Cell;

    const SAMPLE: &str = "\
PARTITION AVAIL  TIMELIMIT  NODES  STATE NODELIST
short*       up    4:00:00      4   idle node[01-04]
short*       up    4:00:00      2  alloc node[05-06]
long         up 7-00:00:00      1    mix node07
gpu          up 2-00:00:00      2   idle gpu[01-02]
";

    #[test]
    fn test_parse_sinfo_sample() {
        let table = parse_sinfo(SAMPLE).unwrap();
        assert_eq!(
            table.columns,
            vec!["PARTITION", "AVAIL", "TIMELIMIT", "NODES", "STATE", "NODELIST"]
        );
        assert_eq!(table.len(), 4);
        assert_eq!(table.rows[0][0], Cell::Text("short*".to_string()));
        assert_eq!(table.rows[0][3], Cell::Int(4));
        assert_eq!(table.rows[3][5], Cell::Text("gpu[01-02]".to_string()));
    }

    #[test]
    fn test_parse_sinfo_empty_output_is_error() {
        assert!(matches!(parse_sinfo(""), Err(QueryError::Parse(_))));
    }
}
