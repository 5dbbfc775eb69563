// File: crates/chart-core/src/error.rs
// Summary: Error type shared by chart validation and rendering entry points.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("x axis has no categories")]
    NoCategories,

    #[error("series '{series}' has {actual} values, expected {expected} (one per category)")]
    SeriesLength {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("reading pixels back from the surface failed")]
    ReadPixels,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
