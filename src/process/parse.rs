use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Parsed form of one sheet export: the header row plus each data row keyed
/// by header name. These are the names the file claims; classification into
/// metadata vs. process-step columns happens later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    /// Column names from the header row. Blank header cells are replaced
    /// with `column_{index}` so every row can be keyed without collision.
    pub headers: Vec<String>,
    /// One map per data row. A row shorter than the header simply lacks
    /// entries for its trailing columns.
    pub rows: Vec<HashMap<String, String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse a comma-delimited sheet export into a [`RawTable`].
///
/// This is deliberately not an RFC 4180 reader: the upstream sheet publishes
/// plain comma-separated text, so lines are split on `,` and fields trimmed,
/// with no quoting or escape handling. A field containing a literal comma
/// will corrupt its row — a documented limitation of the export format.
///
/// Whitespace-only lines are discarded uniformly, before and after the
/// header; trailing blank lines are a common artifact of sheet exports.
/// Fewer than two surviving lines means there is no data row, a recoverable
/// state (empty sheet) that yields an empty table rather than an error.
pub fn parse_csv(text: &str) -> RawTable {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        warn!(lines = lines.len(), "sheet export has no data rows");
        return RawTable::default();
    }

    let headers: Vec<String> = lines[0]
        .split(',')
        .enumerate()
        .map(|(idx, h)| {
            let h = h.trim();
            if h.is_empty() {
                format!("column_{}", idx)
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::with_capacity(lines.len() - 1);
    for line in &lines[1..] {
        let values = line.split(',').map(str::trim);
        let row: HashMap<String, String> = headers
            .iter()
            .zip(values)
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    RawTable { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_rows() {
        let table = parse_csv("a,b,c\n1,2,3\n4,5,6\n");
        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["a"], "1");
        assert_eq!(table.rows[1]["c"], "6");
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let table = parse_csv("a,b\r\n1,2\r\n");
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows[0]["b"], "2");
    }

    #[test]
    fn strips_blank_lines_uniformly() {
        let table = parse_csv("\n\na,b\n\n1,2\n   \n3,4\n\n\n");
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1]["a"], "3");
    }

    #[test]
    fn trims_field_whitespace() {
        let table = parse_csv(" a , b \n 1 , 2 \n");
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows[0]["a"], "1");
    }

    #[test]
    fn blank_headers_get_positional_placeholders() {
        let table = parse_csv(",Category,,Status\nKR,TV,X,Completed\n");
        assert_eq!(
            table.headers,
            vec!["column_0", "Category", "column_2", "Status"]
        );
        assert_eq!(table.rows[0]["column_0"], "KR");
        assert_eq!(table.rows[0]["column_2"], "X");
    }

    #[test]
    fn short_rows_leave_trailing_fields_absent() {
        let table = parse_csv("a,b,c\n1,2\n");
        assert_eq!(table.rows[0].get("a").map(String::as_str), Some("1"));
        assert_eq!(table.rows[0].get("b").map(String::as_str), Some("2"));
        assert_eq!(table.rows[0].get("c"), None);
    }

    #[test]
    fn header_only_input_yields_empty_table() {
        let table = parse_csv("a,b,c\n");
        assert!(table.is_empty());
        assert!(table.headers.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("\n\n\n").is_empty());
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "TR,제품군,제품명,Gallery\nUK,TV,OLED55,완료\nDE,TV,OLED65,진행중\n";
        assert_eq!(parse_csv(text), parse_csv(text));
    }

    #[test]
    fn quoted_fields_are_not_supported() {
        // No quote handling: a quoted field splits like any other text.
        let table = parse_csv("a,b\n\"one, two\",3\n");
        assert_eq!(table.rows[0]["a"], "\"one");
        assert_eq!(table.rows[0]["b"], "two\"");
    }
}
