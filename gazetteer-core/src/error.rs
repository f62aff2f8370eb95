use std::path::PathBuf;
use thiserror::Error;

/// The main result type for gazetteer-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Enum representing possible errors within the gazetteer-core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error accessing path {path:?}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_dataset() {
        let err = CoreError::Dataset("missing column 'City'".to_string());
        assert_eq!(format!("{}", err), "Dataset error: missing column 'City'");
    }

    #[test]
    fn test_error_display_dimension_mismatch() {
        let err = CoreError::DimensionMismatch { expected: 384, actual: 3 };
        assert_eq!(
            format!("{}", err),
            "Vector dimension mismatch: expected 384, got 3"
        );
    }

    #[test]
    fn test_error_display_embedding() {
        let err = CoreError::Embedding("model returned no output".to_string());
        assert_eq!(format!("{}", err), "Embedding error: model returned no output");
    }

    #[test]
    fn test_error_display_io_error() {
        let path = PathBuf::from("/tmp/cities.csv");
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = CoreError::IoError { path, source: io_err };
        assert!(format!("{}", err).contains("I/O error accessing path \"/tmp/cities.csv\""));
        assert!(format!("{}", err).contains("file not found"));
    }
}
