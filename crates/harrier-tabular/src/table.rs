//! Parsed tables from delimited command output.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Empty output: no header line")]
    EmptyOutput,
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
    #[error("Expected {expected} fields, got {found} on line {line}")]
    RowShapeMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// How a line of output is split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// One or more whitespace characters (`sinfo`-style columns).
    Whitespace,
    /// A literal separator character (`squeue`/`sacct` pipe output).
    Char(char),
}

impl Delimiter {
    fn split(self, line: &str) -> Vec<&str> {
        match self {
            Self::Whitespace => line.split_whitespace().collect(),
            Self::Char(c) => line.split(c).collect(),
        }
    }
}

/// A single table cell.
///
/// Serializes untagged, so integer and float cells land in JSON as numbers
/// and everything else as strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
}

/// An ordered set of named columns plus data rows.
///
/// Every row holds exactly one cell per column, in column order, and column
/// names are unique and trimmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Parse delimited text into a table.
    ///
    /// The first non-blank line is the header; remaining non-blank lines are
    /// data rows. Header names and cells are trimmed, and repeated header
    /// names are made unique with a numeric suffix. A data line whose field
    /// count differs from the header is an error rather than being dropped.
    pub fn parse(raw: &str, delimiter: Delimiter) -> Result<Self, TableError> {
        let mut lines = raw
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines.next().ok_or(TableError::EmptyOutput)?;
        let columns = dedup_columns(
            delimiter
                .split(header)
                .iter()
                .map(|name| name.trim().to_string())
                .collect(),
        );

        let mut raw_rows = Vec::new();
        for (index, line) in lines {
            let fields = delimiter.split(line);
            if fields.len() != columns.len() {
                return Err(TableError::RowShapeMismatch {
                    line: index + 1,
                    expected: columns.len(),
                    found: fields.len(),
                });
            }
            raw_rows.push(
                fields
                    .iter()
                    .map(|field| field.trim().to_string())
                    .collect::<Vec<_>>(),
            );
        }

        let rows = coerce_columns(columns.len(), raw_rows);
        Ok(Self { columns, rows })
    }

    /// Keep only the requested columns, in the requested order.
    pub fn project(&self, columns: &[&str]) -> Result<Self, TableError> {
        check_unique(columns.iter().copied())?;
        let indices = columns
            .iter()
            .map(|name| {
                self.columns
                    .iter()
                    .position(|c| c == name)
                    .ok_or_else(|| TableError::ColumnNotFound((*name).to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Ok(Self {
            columns: columns.iter().map(|name| (*name).to_string()).collect(),
            rows,
        })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn check_unique<'a>(names: impl Iterator<Item = &'a str>) -> Result<(), TableError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(TableError::DuplicateColumn(name.to_string()));
        }
    }
    Ok(())
}

/// Make header names unique by suffixing repeats with `.1`, `.2`, and so on.
///
/// `squeue --format=%all` prints GROUP and PRIORITY twice; repeats are
/// renamed so every column keeps an addressable name.
fn dedup_columns(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut columns = Vec::with_capacity(names.len());
    for name in names {
        let mut unique = name.clone();
        let mut n = 1;
        while !seen.insert(unique.clone()) {
            unique = format!("{}.{}", name, n);
            n += 1;
        }
        columns.push(unique);
    }
    columns
}

/// Column-wise cell type, narrowed as values are observed.
#[derive(Debug, Clone, Copy)]
enum ColumnKind {
    Int,
    Float,
    Text,
}

impl ColumnKind {
    fn narrow(self, value: &str) -> Self {
        match self {
            Self::Int if parses_int(value) => Self::Int,
            Self::Int | Self::Float if parses_float(value) => Self::Float,
            _ => Self::Text,
        }
    }

    fn cell(self, value: String) -> Cell {
        match self {
            Self::Int => match value.parse::<i64>() {
                Ok(v) => Cell::Int(v),
                Err(_) => Cell::Text(value),
            },
            Self::Float => match value.parse::<f64>() {
                Ok(v) => Cell::Float(v),
                Err(_) => Cell::Text(value),
            },
            Self::Text => Cell::Text(value),
        }
    }
}

fn parses_int(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

fn parses_float(value: &str) -> bool {
    // Non-finite parses ("inf", "nan") stay text so JSON never sees them.
    value.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// Assign a type to each column and convert the raw fields to cells.
///
/// A column is integer only if every cell parses as i64, float only if every
/// cell parses as a finite f64, and text otherwise.
fn coerce_columns(width: usize, raw_rows: Vec<Vec<String>>) -> Vec<Vec<Cell>> {
    let mut kinds = vec![ColumnKind::Int; width];
    for row in &raw_rows {
        for (kind, value) in kinds.iter_mut().zip(row) {
            *kind = kind.narrow(value);
        }
    }

    raw_rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&kinds)
                .map(|(value, kind)| kind.cell(value))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_parse_whitespace_table() {
        let raw = "PARTITION  AVAIL  TIMELIMIT  NODES  STATE  NODELIST\n\
                   short      up     1:00:00    4      idle   node[01-04]\n\
                   gpu        up     infinite   2      mix    node[05-06]\n";
        let table = Table::parse(raw, Delimiter::Whitespace).unwrap();
        assert_eq!(
            table.columns,
            vec!["PARTITION", "AVAIL", "TIMELIMIT", "NODES", "STATE", "NODELIST"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][0], text("short"));
        assert_eq!(table.rows[0][3], Cell::Int(4));
        assert_eq!(table.rows[1][4], text("mix"));
    }

    #[test]
    fn test_parse_pipe_table_with_projection() {
        let raw = "JOBID|USER|STATE\n1|alice|R  \n2|bob |PD\n";
        let table = Table::parse(raw, Delimiter::Char('|'))
            .unwrap()
            .project(&["JOBID", "USER", "STATE"])
            .unwrap();
        assert_eq!(table.columns, vec!["JOBID", "USER", "STATE"]);
        assert_eq!(
            table.rows,
            vec![
                vec![Cell::Int(1), text("alice"), text("R")],
                vec![Cell::Int(2), text("bob"), text("PD")],
            ]
        );
    }

    #[test]
    fn test_parse_trims_headers_and_cells() {
        let raw = " JOBID | USER \n 7 | alice \n";
        let table = Table::parse(raw, Delimiter::Char('|')).unwrap();
        assert_eq!(table.columns, vec!["JOBID", "USER"]);
        assert_eq!(table.rows[0], vec![Cell::Int(7), text("alice")]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let raw = "\nA|B\n\n1|2\n   \n3|4\n";
        let table = Table::parse(raw, Delimiter::Char('|')).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_header_only() {
        let table = Table::parse("JOBID|USER\n", Delimiter::Char('|')).unwrap();
        assert_eq!(table.columns, vec!["JOBID", "USER"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(matches!(
            Table::parse("", Delimiter::Whitespace),
            Err(TableError::EmptyOutput)
        ));
        assert!(matches!(
            Table::parse("  \n\t\n", Delimiter::Whitespace),
            Err(TableError::EmptyOutput)
        ));
    }

    #[test]
    fn test_parse_renames_duplicate_headers() {
        let table = Table::parse("A|B|A|A\n1|2|3|4\n", Delimiter::Char('|')).unwrap();
        assert_eq!(table.columns, vec!["A", "B", "A.1", "A.2"]);
        assert_eq!(table.rows[0][2], Cell::Int(3));

        // A repeat whose suffixed name is itself taken keeps counting.
        let table = Table::parse("A|A.1|A\n1|2|3\n", Delimiter::Char('|')).unwrap();
        assert_eq!(table.columns, vec!["A", "A.1", "A.2"]);
    }

    #[test]
    fn test_parse_row_shape_mismatch() {
        let raw = "A|B\n1|2\n1|2|3\n";
        assert!(matches!(
            Table::parse(raw, Delimiter::Char('|')),
            Err(TableError::RowShapeMismatch {
                line: 3,
                expected: 2,
                found: 3,
            })
        ));
    }

    #[test]
    fn test_project_missing_column() {
        let table = Table::parse("A|B\n1|2\n", Delimiter::Char('|')).unwrap();
        assert!(matches!(
            table.project(&["A", "MISSING"]),
            Err(TableError::ColumnNotFound(name)) if name == "MISSING"
        ));
    }

    #[test]
    fn test_project_reorders_columns() {
        let table = Table::parse("A|B|C\n1|x|2\n", Delimiter::Char('|')).unwrap();
        let projected = table.project(&["C", "A"]).unwrap();
        assert_eq!(projected.columns, vec!["C", "A"]);
        assert_eq!(projected.rows[0], vec![Cell::Int(2), Cell::Int(1)]);
    }

    #[test]
    fn test_project_rejects_repeated_request() {
        let table = Table::parse("A|B\n1|2\n", Delimiter::Char('|')).unwrap();
        assert!(matches!(
            table.project(&["A", "A"]),
            Err(TableError::DuplicateColumn(name)) if name == "A"
        ));
    }

    #[test]
    fn test_numeric_inference_per_column() {
        let raw = "INT|FLOAT|MIXED|EMPTYISH\n1|0.5|1|1\n-2|2|abc|\n";
        let table = Table::parse(raw, Delimiter::Char('|')).unwrap();
        assert_eq!(table.rows[0][0], Cell::Int(1));
        assert_eq!(table.rows[1][0], Cell::Int(-2));
        assert_eq!(table.rows[0][1], Cell::Float(0.5));
        assert_eq!(table.rows[1][1], Cell::Float(2.0));
        // One non-numeric value makes the whole column text.
        assert_eq!(table.rows[0][2], text("1"));
        // An empty cell does too.
        assert_eq!(table.rows[0][3], text("1"));
        assert_eq!(table.rows[1][3], text(""));
    }

    #[test]
    fn test_non_finite_floats_stay_text() {
        let raw = "A\ninf\n1.0\n";
        let table = Table::parse(raw, Delimiter::Char('|')).unwrap();
        assert_eq!(table.rows[0][0], text("inf"));
        assert_eq!(table.rows[1][0], text("1.0"));
    }

    #[test]
    fn test_serialize_shape() {
        let table = Table::parse("JOBID|USER\n1|alice\n", Delimiter::Char('|')).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["columns"][0], "JOBID");
        assert_eq!(json["rows"][0][0], 1);
        assert_eq!(json["rows"][0][1], "alice");
    }
}
