// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdsError {
    #[error("Malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("Device on line {line} has no vendor")]
    OrphanDevice { line: usize },
    #[error("Duplicate vendor {id:04x} on line {line}")]
    DuplicateVendor { line: usize, id: u16 },
    #[error("Duplicate device {vendor:04x}:{device:04x} on line {line}")]
    DuplicateDevice { line: usize, vendor: u16, device: u16 },
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
