use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{mines} mines do not fit in the {usable} cells outside the safe zone")]
    TooManyMines { mines: usize, usable: usize },
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
