pub mod cli;
pub mod config;
pub mod error;
pub mod freq_table;
pub mod input;
pub mod logging;

pub use config::ScanConfig;
pub use error::{FreqError, FreqResult, ScanError};
pub use freq_table::{extract_first_row_freq, FreqReading, TableScanner};
pub use input::{read_text_lossy, LossyText};
