use std::path::PathBuf;

/// Errors that can occur when configuring a game or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid connect length '{0}' (expected an integer from 4 to 1000)")]
    InvalidConnectLength(String),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Reasons a move is rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameAlreadyOver,
}
