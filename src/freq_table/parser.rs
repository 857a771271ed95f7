use crate::config::ScanConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Empty,
    Border,
    Row,
    Text,
}

/// A delimited row pulled out of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub line_number: usize,
}

impl TableRow {
    pub fn last_cell(&self) -> Option<&str> {
        self.cells.last().map(String::as_str)
    }
}

/// Line boundaries: `\n`, `\r`, `\r\n`, VT, FF, FS, GS, RS, NEL, LS and PS
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines without their terminators.
///
/// `\r\n` counts as a single boundary and a trailing terminator does not
/// produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Trim Unicode whitespace plus the FS/GS/RS/US separators
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Classify an already-trimmed line
pub fn classify_line(trimmed: &str, config: &ScanConfig) -> LineType {
    if trimmed.is_empty() {
        LineType::Empty
    } else if trimmed.starts_with(config.border_prefix) {
        LineType::Border
    } else if trimmed.starts_with(config.delimiter) {
        LineType::Row
    } else {
        LineType::Text
    }
}

/// True when the trimmed line is a row mentioning every required column
pub fn is_header_line(trimmed: &str, config: &ScanConfig) -> bool {
    trimmed.starts_with(config.delimiter)
        && config
            .required_columns
            .iter()
            .all(|column| trimmed.contains(column.as_str()))
}

/// Split a row on the delimiter and trim each cell.
///
/// The pieces before the first and after the last delimiter are dropped by
/// position, whatever they hold, so `"| a | b |"` gives `["a", "b"]` and a
/// bare `"|"` gives nothing.
pub fn split_cells(trimmed: &str, delimiter: char) -> Vec<String> {
    let pieces: Vec<&str> = trimmed.split(delimiter).collect();
    if pieces.len() < 2 {
        return Vec::new();
    }

    pieces[1..pieces.len() - 1]
        .iter()
        .map(|cell| trim_line(cell).to_string())
        .collect()
}
