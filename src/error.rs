use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("No items to display")]
    EmptyInput,

    #[error("Invalid viewport size: {width}x{height}")]
    InvalidViewport { width: u16, height: u16 },

    #[error("Invalid key binding: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not find home directory")]
    NoHomeDirectory,

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("TUI error: {0}")]
    Tui(String),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
