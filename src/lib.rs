//! # Porthole
//!
//! Buffered rectangular pixel views over externally-owned image rasters.
//!
//! A [`View`] copies one rectangle out of an image, lets a caller address
//! its rows and columns like arrays (single indices, ranges,
//! `(start, length)` pairs, negative indices), and flushes buffered writes
//! back to the image only when synchronized, and only if something
//! actually changed.
//!
//! ## Core Concepts
//!
//! - **Two boundary crossings**: one bulk read at construction, at most
//!   one bulk write per [`View::sync`]
//! - **Dirty tracking**: mutators report whether they changed state; the
//!   view aggregates those flags explicitly
//! - **Scalar or grid reads**: two bare integer indices yield one
//!   [`Pixel`]; every other shape yields a [`PixelVector`]
//! - **Exit guarantee**: [`View::scoped`] flushes on every exit path, and
//!   dropping a dirty view flushes best-effort
//!
//! ## Example
//!
//! ```rust
//! use porthole::{Pixel, Raster, View};
//!
//! let mut image = Raster::new(64, 64, Pixel::BLACK);
//! let mut view = View::new(&mut image, 8, 8, 16, 16)?;
//!
//! // Paint the first row of the window red.
//! view.select(0)?.write(.., "red")?;
//! assert!(view.dirty());
//!
//! // One bulk write back to the raster.
//! assert!(view.sync(false)?);
//! # Ok::<(), porthole::ViewError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod geom;
pub mod image;
pub mod index;
pub mod pixel;
pub mod view;

// Re-exports for convenience
pub use error::ViewError;
pub use geom::Rect;
pub use image::{ImageSource, Raster};
pub use index::{resolve, Axis, IndexSpec};
pub use pixel::{Channel, Channels, IntoPixel, Pixel, PixelVector, Quantum, QUANTUM_MAX};
pub use view::{Fetched, Selection, View};
