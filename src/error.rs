//! Error types for octasphere

use std::path::PathBuf;
use thiserror::Error;

/// octasphere error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A vertex could not be projected onto the sphere
    #[error("Degenerate geometry: vertex {index} has zero length and cannot be normalized")]
    DegenerateGeometry {
        /// Index of the offending vertex
        index: usize,
    },

    /// A triangle references a vertex that does not exist
    #[error("Triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Triangle index
        triangle: usize,
        /// Offending vertex index
        index: u32,
        /// Vertex count at the time of the check
        vertex_count: usize,
    },

    /// A line of an array file could not be parsed
    #[error("Malformed record in {} line {line}: {reason}", path.display())]
    MalformedRecord {
        /// File that was being read
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File load error
    #[error("File load error: {0}")]
    FileLoad(String),

    /// File save error
    #[error("File save error: {0}")]
    FileSave(String),
}

/// Result type alias for octasphere operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("test".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: test");
    }

    #[test]
    fn test_malformed_record_display() {
        let err = Error::MalformedRecord {
            path: PathBuf::from("vertices.arr"),
            line: 3,
            reason: "expected 3 fields, found 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed record in vertices.arr line 3: expected 3 fields, found 2"
        );
    }
}
