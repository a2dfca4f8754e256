use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SlgError>;

#[derive(Error, Debug)]
pub enum SlgError {
    #[error("file {path} could not be opened: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not determine file size of {path}: {source}")]
    FileSize {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("insufficient sonar data in {path}: {size} bytes is less than two pages")]
    InsufficientData { path: PathBuf, size: u64 },

    #[error("page range out of bounds: offset {offset} with {requested} pages requested, {available} pages in file")]
    RangeOutOfBounds {
        offset: usize,
        requested: usize,
        available: usize,
    },

    #[error("short read at byte offset {offset}: wanted {expected} bytes, {available} available")]
    ReadShortfall {
        offset: usize,
        expected: usize,
        available: usize,
    },

    #[error("failed to allocate {context}")]
    Allocation { context: String },

    #[error("malformed sonar record: {0}")]
    Parse(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("worker pool error: {0}")]
    Pool(String),
}
