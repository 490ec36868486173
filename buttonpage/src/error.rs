use thiserror::Error;

/// Errors raised while loading or validating a button page.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("button at ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfGrid {
        row: u8,
        col: u8,
        rows: u8,
        cols: u8,
    },

    #[error("more than one button is placed at ({row}, {col})")]
    DuplicatePosition { row: u8, col: u8 },

    #[error("button at ({row}, {col}) has no title")]
    EmptyTitle { row: u8, col: u8 },

    #[error("failed to parse page: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize page: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, PageError>;
