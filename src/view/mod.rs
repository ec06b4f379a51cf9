//! View module: The pixel-window addressing and dirty-tracking core.
//!
//! This module contains:
//! - [`View`]: A buffered window onto a rectangle of an external image
//! - [`Selection`]: A resolved row set awaiting a column-indexed read/write
//! - [`Fetched`]: The single-pixel-or-grid result of an indexed read

#[allow(clippy::module_inception)]
mod view;
mod selection;

pub use selection::{Fetched, Selection};
pub use view::View;
