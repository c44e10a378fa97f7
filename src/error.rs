use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::wordbank::Tier;

/// Failure to read the word list. Fatal at startup.
#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("failed to read word list '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Rejected user input. The session re-prompts without changing state.
///
/// The `Display` text is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Incorrect input. Type EASY, NORMAL, HARD, or VERY HARD")]
    UnknownDifficulty(String),
    #[error("Please enter {expected} letters")]
    WrongLength { expected: usize, actual: usize },
    #[error("Please answer YES or NO")]
    UnknownReplayAnswer(String),
    #[error("No {0} words are loaded. Choose another difficulty")]
    EmptyTier(Tier),
}
