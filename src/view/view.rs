//! View: A buffered window onto a rectangle of an external image.
//!
//! # Lifecycle
//!
//! A view binds to one rectangle of one image for its whole lifetime. It
//! issues exactly one bulk read at construction, buffers every write
//! locally, and flushes back with at most one bulk write per [`View::sync`]
//! call. Between those two crossings the image is never touched.
//!
//! # Dirty Tracking
//!
//! The dirty flag is raised by the first write that actually changes a
//! buffered pixel and stays raised until a successful sync clears it.
//! `sync(false)` on a clean view performs no I/O.
//!
//! # Exit Guarantee
//!
//! [`View::scoped`] runs a closure against a fresh view and always
//! attempts a final `sync(false)`, on the error path included; an error
//! from the closure takes precedence over an error from that flush. As a
//! backstop, dropping a dirty view flushes it best-effort, logging a
//! warning if the image rejects the write (a destructor cannot return it).

use crate::error::ViewError;
use crate::geom::Rect;
use crate::image::ImageSource;
use crate::index::{resolve, IndexSpec};
use crate::pixel::PixelVector;
use crate::view::selection::Selection;
use log::{trace, warn};

/// A buffered rectangular window onto an external image.
pub struct View<'i, I: ImageSource> {
    /// The owning image; touched only at construction and sync.
    image: &'i mut I,
    /// The window rectangle in image coordinates.
    rect: Rect,
    /// Private copy of the window's pixels.
    pixels: PixelVector,
    /// Whether a buffered write has changed a pixel since the last sync.
    dirty: bool,
}

impl<'i, I: ImageSource> View<'i, I> {
    /// Open a view over the rectangle `(x, y, width, height)` of `image`.
    ///
    /// Performs the view's single bulk read. Fails with
    /// [`ViewError::InvalidGeometry`] for a zero-sized rectangle and
    /// [`ViewError::OutOfBounds`] when the rectangle does not lie within
    /// the image.
    pub fn new(
        image: &'i mut I,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<Self, ViewError> {
        if width == 0 || height == 0 {
            return Err(ViewError::InvalidGeometry { width, height });
        }
        let columns = image.width();
        let rows = image.height();
        let fits = x.checked_add(width).is_some_and(|r| r <= columns)
            && y.checked_add(height).is_some_and(|b| b <= rows);
        if !fits {
            return Err(ViewError::OutOfBounds { x, y, width, height, columns, rows });
        }

        let rect = Rect::new(x, y, width, height);
        trace!("view open: bulk read {rect:?}");
        let run = image.read_block(rect)?;
        if run.len() != rect.area() {
            return Err(ViewError::Backing(format!(
                "bulk read returned {} pixels for {rect:?}",
                run.len()
            )));
        }

        Ok(Self {
            image,
            rect,
            pixels: PixelVector::from_pixels(width, height, run),
            dirty: false,
        })
    }

    /// Open a view, run `f` against it, and flush on every exit path.
    ///
    /// After `f` returns, `sync(false)` is always attempted. An error from
    /// `f` takes precedence over an error from the flush; a flush error is
    /// only reported when the body succeeded.
    pub fn scoped<R, F>(
        image: &'i mut I,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        f: F,
    ) -> Result<R, ViewError>
    where
        F: FnOnce(&mut View<'i, I>) -> Result<R, ViewError>,
    {
        let mut view = Self::new(image, x, y, width, height)?;
        let body = f(&mut view);
        let flush = view.sync(false);
        match body {
            Err(err) => Err(err),
            Ok(result) => flush.map(|_| result),
        }
    }

    /// Get the window rectangle in image coordinates.
    #[inline]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Get the window width in columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.rect.width
    }

    /// Get the window height in rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.rect.height
    }

    /// Check whether a buffered write is pending.
    #[inline]
    pub const fn dirty(&self) -> bool {
        self.dirty
    }

    /// Get a reference to the buffered pixels.
    #[inline]
    pub fn pixels(&self) -> &PixelVector {
        &self.pixels
    }

    /// Begin an index chain by resolving the row specifier.
    ///
    /// Columns are not resolved here; the returned [`Selection`] resolves
    /// them per read or write.
    pub fn select(
        &mut self,
        rows: impl Into<IndexSpec>,
    ) -> Result<Selection<'_, 'i, I>, ViewError> {
        let axis = resolve(&rows.into(), self.rect.height)?;
        Ok(Selection::new(self, axis))
    }

    /// Flush buffered pixels back to the image if needed.
    ///
    /// Writes the whole buffer with one bulk write when the view is dirty
    /// or `force` is set, clears the dirty flag, and returns `true`.
    /// Otherwise performs no I/O and returns `false`.
    pub fn sync(&mut self, force: bool) -> Result<bool, ViewError> {
        if !(self.dirty || force) {
            return Ok(false);
        }
        trace!("view sync: bulk write {:?}", self.rect);
        self.image.write_block(self.rect, self.pixels.pixels())?;
        self.dirty = false;
        Ok(true)
    }

    /// Record that a buffered pixel changed.
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Get the buffered pixels for selection reads.
    pub(crate) fn buffer(&self) -> &PixelVector {
        &self.pixels
    }

    /// Get the buffered pixels for selection writes.
    pub(crate) fn buffer_mut(&mut self) -> &mut PixelVector {
        &mut self.pixels
    }
}

impl<I: ImageSource> Drop for View<'_, I> {
    /// Best-effort final flush of a dirty view.
    fn drop(&mut self) {
        if self.dirty {
            if let Err(err) = self.sync(false) {
                warn!("dropping dirty view {:?}: flush failed: {err}", self.rect);
            }
        }
    }
}

impl<I: ImageSource> std::fmt::Debug for View<'_, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("rect", &self.rect)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}
