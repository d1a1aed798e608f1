use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reference table source is empty")]
    EmptyInput,

    #[error("line {line}: expected {expected} fields, found {found}")]
    SchemaMismatch {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("failed to read reference table: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CSV: {0}")]
    Csv(csv::Error),

    #[error("bundled {name} dataset failed to load: {reason}")]
    DefaultDataset { name: &'static str, reason: String },
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        // csv wraps reader failures; keep those distinguishable from bad syntax
        if let csv::ErrorKind::Io(io) = err.kind() {
            return LoadError::Io(std::io::Error::new(io.kind(), io.to_string()));
        }
        LoadError::Csv(err)
    }
}
