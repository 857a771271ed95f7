use std::path::Path;

use tracing::{info, warn};

use crate::error::{FreqError, FreqResult};

/// Decoded file contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LossyText {
    pub text: String,
    pub byte_len: usize,
    /// Set when invalid UTF-8 was replaced with U+FFFD
    pub replaced: bool,
}

/// Read a whole file as text, replacing invalid UTF-8 instead of failing
pub fn read_text_lossy(path: &Path) -> FreqResult<LossyText> {
    let bytes = std::fs::read(path)
        .map_err(|e| FreqError::file_io(path.display().to_string(), e))?;

    Ok(decode_lossy(path, bytes))
}

fn decode_lossy(path: &Path, bytes: Vec<u8>) -> LossyText {
    let byte_len = bytes.len();
    let (text, replaced) = match String::from_utf8(bytes) {
        Ok(text) => (text, false),
        Err(e) => (String::from_utf8_lossy(e.as_bytes()).into_owned(), true),
    };

    info!("📄 Read {} bytes from {}", byte_len, path.display());
    if replaced {
        warn!("Invalid UTF-8 in {} was replaced", path.display());
    }

    LossyText {
        text,
        byte_len,
        replaced,
    }
}
