use std::fs;
use std::path::{Path, PathBuf};

use crate::parsing::{Block, parse_document};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Document not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a source document and return its raw text
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a source document and parse it into its block sequence
pub fn parse_document_file(path: &Path) -> Result<Vec<Block>, IoError> {
    let text = read_document(path)?;
    Ok(parse_document(&text))
}
