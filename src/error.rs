//! Error type shared by the coding engine and the file driver.

use thiserror::Error;

/// Everything that can go wrong while building, encoding, or decoding.
#[derive(Error, Debug)]
pub enum HuffError {
    /// extract_min was called on a queue with no elements
    #[error("Cannot extract from an empty priority queue")]
    EmptyQueue,

    /// The frequency table handed to the tree builder is unusable
    #[error("Invalid frequency table: {0}")]
    InvalidInput(String),

    /// A symbol in the text has no entry in the code table
    #[error("No code for symbol {0:?}")]
    MissingCode(char),

    /// The code table handed to the rebuilder (or parser) is unusable
    #[error("Invalid code table: {0}")]
    InvalidCodeTable(String),

    /// I/O errors from the file driver
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuffError>;
