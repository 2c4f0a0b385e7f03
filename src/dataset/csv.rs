//! CSV loader for externally captured (x, y) observations.
//!
//! Supported format: UTF-8, comma-separated, two numeric columns, with an
//! optional header row (auto-detected: the first row is a header if any cell
//! fails to parse as a number). Not used by the default training entry
//! point, which generates its data synthetically.

use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub struct DataError(pub String);

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError(format!("io error: {e}"))
    }
}

/// Loads `(x, y)` pairs from a CSV file.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>, DataError> {
    let text = std::fs::read_to_string(path)?;
    parse_pairs(&text)
}

/// Parses CSV text into `(x, y)` pairs.
pub fn parse_pairs(text: &str) -> Result<Vec<(f64, f64)>, DataError> {
    let mut lines = text.lines().enumerate().peekable();

    // Auto-detect header: skip the first line if any cell is non-numeric.
    if let Some((_, first)) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut pairs = Vec::new();
    for (lineno, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let mut cells = line.split(',');
        let x = parse_cell(cells.next(), lineno)?;
        let y = parse_cell(cells.next(), lineno)?;
        pairs.push((x, y));
    }
    Ok(pairs)
}

fn parse_cell(cell: Option<&str>, lineno: usize) -> Result<f64, DataError> {
    let cell = cell.ok_or_else(|| DataError(format!("line {}: missing column", lineno + 1)))?;
    cell.trim()
        .parse::<f64>()
        .map_err(|_| DataError(format!("line {}: invalid number {:?}", lineno + 1, cell.trim())))
}

fn is_header(line: &str) -> bool {
    line.split(',')
        .any(|cell| !cell.trim().is_empty() && cell.trim().parse::<f64>().is_err())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_with_header_row() {
        let text = "x,y\n-3.000000, 0.031415\n0.0, 1.054\n";
        let pairs = parse_pairs(text).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], (-3.0, 0.031415));
        assert_eq!(pairs[1], (0.0, 1.054));
    }

    #[test]
    fn headerless_numeric_first_row_is_kept() {
        let pairs = parse_pairs("1.0, 2.0\n3.0, 4.0\n").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], (1.0, 2.0));
    }

    #[test]
    fn malformed_data_row_is_an_error() {
        assert!(parse_pairs("x,y\n1.0, oops\n").is_err());
        assert!(parse_pairs("x,y\n1.0\n").is_err());
    }
}
