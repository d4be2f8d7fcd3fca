use thiserror::Error;

/// Benchmark error types
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Entropy read failed during {operation}: {message}")]
    EntropyError {
        /// The failing operation, named for diagnostics
        operation: &'static str,
        message: String,
    },

    #[error("Sample source exhausted: requested {requested} bytes, {available} available")]
    SourceExhausted { requested: usize, available: usize },

    #[error("Matcher count mismatch: {0}")]
    CountMismatch(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
