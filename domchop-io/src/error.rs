use thiserror::Error;

use domchop_core::ModelError;

/// Error type for domchop-io operations.
#[derive(Error, Debug)]
pub enum DomainIoError {
    #[error("expected first line to contain fieldnames {expected:?}, found {found:?}")]
    CsvHeader {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("failed to parse pLDDT row '{0}'")]
    PlddtRow(String),

    #[error("failed to read FASTA record: {0}")]
    Fasta(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Model(#[from] ModelError),
}
