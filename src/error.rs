//! Error types for the DWG/DXF decoder.

use std::io;
use thiserror::Error;

/// Main error type for decode/emit operations.
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported CAD file version
    #[error("Unsupported CAD version: {0:?}")]
    UnsupportedVersion(String),

    /// A primitive reader ran past the end of the buffer.
    #[error("unexpected end of buffer at bit offset {0}")]
    UnexpectedEof(u64),

    /// An unlisted opcode was encountered in the LZ77 decompressor.
    #[error("bad compressed stream: unknown opcode {0:#04X}")]
    BadCompressedStream(u8),

    /// An encoded handle had a size field greater than 8, or produced a
    /// negative absolute reference.
    #[error("bad handle: {0}")]
    BadHandle(String),

    /// Structural corruption: out-of-bounds sub-section size, an EED chain
    /// past the cap, or an advisory CRC mismatch count past threshold.
    #[error("corrupt data: {0}")]
    Corrupt(String),

    /// A recognized layout whose tail this decoder does not implement
    /// (e.g. the R2007 object graph).
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Error during compression/decompression
    #[error("Compression error: {0}")]
    Compression(String),

    /// Error parsing CAD file format
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid DXF code encountered
    #[error("Invalid DXF code: {0}")]
    InvalidDxfCode(i32),

    /// Invalid handle reference
    #[error("Invalid handle: {0:#X}")]
    InvalidHandle(u64),

    /// Object not found in document
    #[error("Object not found: handle {0:#X}")]
    ObjectNotFound(u64),

    /// Invalid entity type
    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    /// CRC checksum mismatch
    #[error("CRC checksum mismatch: expected {expected:#X}, got {actual:#X}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    /// Invalid file header
    #[error("Invalid file header: {0}")]
    InvalidHeader(String),

    /// Invalid file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Invalid sentinel in file
    #[error("Invalid sentinel: {0}")]
    InvalidSentinel(String),

    /// Decompression error
    #[error("Decompression error: {0}")]
    Decompression(String),

    /// Decryption error
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Feature not yet implemented
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for decoder operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::UnsupportedVersion("AC1009".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported CAD version: \"AC1009\""
        );
    }

    #[test]
    fn test_checksum_error() {
        let err = DxfError::ChecksumMismatch {
            expected: 0x1234,
            actual: 0x5678,
        };
        assert!(err.to_string().contains("0x1234"));
        assert!(err.to_string().contains("0x5678"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }

    #[test]
    fn test_bad_compressed_stream_display() {
        let err = DxfError::BadCompressedStream(0x13);
        assert!(err.to_string().contains("0x13"));
    }

    #[test]
    fn test_unexpected_eof_display() {
        let err = DxfError::UnexpectedEof(4096);
        assert!(err.to_string().contains("4096"));
    }
}


