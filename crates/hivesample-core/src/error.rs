use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HiveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Blob format error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Not a valid photo: {0}")]
    InvalidPhoto(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Source directory not found: {}", .0.display())]
    MissingSourceDirectory(PathBuf),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HiveError>;
