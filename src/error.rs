use thiserror::Error;

/// Failures of the table scan itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Could not find a table header containing {}", .columns.join(" and "))]
    HeaderNotFound { columns: Vec<String> },

    #[error("Could not find the first data row after the table header on line {}", .header_line + 1)]
    DataRowNotFound { header_line: usize },
}

/// Main error type for endpoint-freq
#[derive(Error, Debug)]
pub enum FreqError {
    #[error("File I/O error: {path}")]
    FileIO {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl FreqError {
    /// Create a file I/O error
    pub fn file_io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileIO {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type FreqResult<T> = Result<T, FreqError>;
