//! Error type shared by the library.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Positional statistics need at least one answer word.
    #[error("the answer set is empty, letter statistics cannot be computed")]
    EmptyAnswerSet,
    #[error("the word list is empty, letter frequencies cannot be computed")]
    EmptyWordList,
    #[error("{word:?} is not a valid word: {reason}")]
    InvalidWord { word: String, reason: &'static str },
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
