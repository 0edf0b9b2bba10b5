use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{column}' (available columns: {available:?})")]
    MissingColumn { column: String, available: Vec<String> },

    #[error("Row {row}: required field '{column}' is empty")]
    MissingField { row: usize, column: &'static str },

    #[error("Dataset contains no restaurants")]
    EmptyDataset,

    #[error("Empty vocabulary: every document contains only stop words or short tokens")]
    EmptyVocabulary,

    #[error("Row {row} out of range (table has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
