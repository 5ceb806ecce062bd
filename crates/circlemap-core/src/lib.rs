#![forbid(unsafe_code)]

//! Reader for the plain-text cartogram dataset format.
//!
//! ```text
//! Area of the states              <- title (first non-comment line)
//! # name  area  longitude latitude
//! D    357    10.0    51.3
//! NL   42      5.3    52.2
//! # adjacency
//! D:  NL
//! ```
//!
//! Parsing either yields a complete [`Dataset`] or a [`ParseError`]; the layout engine is only
//! ever handed a graph that parsed cleanly.

pub mod dataset;
pub mod error;
pub mod parse;

pub use dataset::Dataset;
pub use error::{ParseError, Result};
pub use parse::{parse_dataset, radius_for_area};

use std::path::Path;

/// Reads and parses a dataset file.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_dataset(&text)
}

#[cfg(test)]
mod tests;
