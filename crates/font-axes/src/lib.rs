//! # Font Axes
//!
//! Read the variation axes a variable font declares in its `fvar` table.
//!
//! ## Example
//!
//! ```no_run
//! use font_axes::read_axes;
//!
//! let data = std::fs::read("variable.ttf").unwrap();
//! for axis in read_axes(&data).unwrap() {
//!     println!("{} ({}) {}..{}", axis.tag, axis.name, axis.min, axis.max);
//! }
//! ```

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::read_axes;

/// A variation axis as declared by the font.
///
/// Values are in user-space coordinates, the same units used by
/// `font-variation-settings`.
#[derive(Debug, Clone, PartialEq)]
pub struct FontAxis {
    /// Four-character axis tag, e.g. `wght`.
    pub tag: String,
    /// Human readable axis name from the `name` table, or the tag if absent.
    pub name: String,
    pub min: f64,
    pub default: f64,
    pub max: f64,
    /// Set when the font asks applications not to expose the axis.
    pub hidden: bool,
}

