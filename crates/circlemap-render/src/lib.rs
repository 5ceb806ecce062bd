#![forbid(unsafe_code)]

pub mod gnuplot;
pub mod report;
pub mod summary;
pub mod viewport;

pub use gnuplot::render_gnuplot;
pub use report::render_error_report;
pub use summary::{LayoutSummary, RegionSummary};
pub use viewport::Viewport;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot render a layout without regions")]
    EmptyLayout,
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("layout summary JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
