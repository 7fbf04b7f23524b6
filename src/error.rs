//! Errors raised while loading, watching or presenting a deck.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{}` is not a file, please provide one.", .0.display())]
    NotAFile(PathBuf),

    #[error("{0} backend is not supported.")]
    UnknownBackend(String),

    #[error("Can't set slide {idx}/{len}")]
    SlideOutOfRange { idx: usize, len: usize },

    #[error("`{}` has no parent directory to watch.", .0.display())]
    NoParentDir(PathBuf),

    #[error("Unable to watch the deck: {0}")]
    Watch(#[from] notify::Error),
}
