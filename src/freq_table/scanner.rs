use tracing::{debug, trace};

use super::parser::{
    classify_line, is_header_line, split_cells, split_lines, trim_line, LineType, TableRow,
};
use crate::config::ScanConfig;
use crate::error::ScanError;

/// Value pulled from the first data row under the matched header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqReading {
    pub value: String,
    /// 0-based line index of the header
    pub header_line: usize,
    pub row: TableRow,
}

pub struct TableScanner {
    config: ScanConfig,
}

impl Default for TableScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TableScanner {
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Index of the first header line; later candidates are never considered
    pub fn find_header(&self, lines: &[&str]) -> Option<usize> {
        lines
            .iter()
            .position(|line| is_header_line(trim_line(line), &self.config))
    }

    pub fn scan(&self, text: &str) -> Result<FreqReading, ScanError> {
        let lines = split_lines(text);
        debug!("🔍 Scanning {} lines", lines.len());

        let header_line = self
            .find_header(&lines)
            .ok_or_else(|| ScanError::HeaderNotFound {
                columns: self.config.required_columns.clone(),
            })?;
        debug!(header_line, "Found table header");

        for (line_number, line) in lines.iter().enumerate().skip(header_line + 1) {
            let trimmed = trim_line(line);

            match classify_line(trimmed, &self.config) {
                LineType::Empty | LineType::Border => continue,
                LineType::Text => {
                    trace!(line_number, "Skipping non-table line");
                    continue;
                }
                LineType::Row => {
                    let cells = split_cells(trimmed, self.config.delimiter);
                    let Some(value) = cells.last().cloned() else {
                        trace!(line_number, "Skipping row without cells");
                        continue;
                    };

                    debug!(line_number, cells = cells.len(), value = %value, "Using first data row");
                    return Ok(FreqReading {
                        value,
                        header_line,
                        row: TableRow { cells, line_number },
                    });
                }
            }
        }

        Err(ScanError::DataRowNotFound { header_line })
    }
}

/// Freq(MHz) value of the first data row of the first Endpoint/Freq(MHz) table
pub fn extract_first_row_freq(text: &str) -> Result<String, ScanError> {
    TableScanner::new().scan(text).map(|reading| reading.value)
}
