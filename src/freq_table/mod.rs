pub mod parser;
pub mod scanner;

pub use parser::{
    classify_line, is_header_line, split_cells, split_lines, trim_line, LineType, TableRow,
};
pub use scanner::{extract_first_row_freq, FreqReading, TableScanner};
