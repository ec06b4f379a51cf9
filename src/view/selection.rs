//! Selection: A resolved set of rows pending a column-indexed read or write.
//!
//! A selection is transient: it exists between `view.select(rows)` and the
//! read or write that consumes the column specifier. Reads walk the
//! row×column cross product in row-major order and return detached copies;
//! writes broadcast one pixel (or one channel magnitude) into every
//! selected slot and report a single aggregated changed flag, which the
//! view folds into its dirty state.

use crate::error::ViewError;
use crate::image::ImageSource;
use crate::index::{resolve, Axis, IndexSpec};
use crate::pixel::{Channels, IntoPixel, Pixel, PixelVector, Quantum};
use crate::view::view::View;

/// The result of an indexed read: one pixel or a rows×cols grid.
///
/// A read where both the row and column specifier were bare integers
/// yields [`Fetched::One`]; every other shape yields [`Fetched::Many`]
/// in row-major visit order.
#[derive(Clone, PartialEq, Debug)]
pub enum Fetched {
    /// Both axes were scalar: exactly one pixel.
    One(Pixel),
    /// At least one axis was plural: the selected grid.
    Many(PixelVector),
}

impl Fetched {
    /// Get the number of pixels fetched.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    /// Check if the fetch selected no pixels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if this is a single-pixel fetch.
    pub const fn is_single(&self) -> bool {
        matches!(self, Self::One(_))
    }

    /// Extract the single pixel, if both axes were scalar.
    pub fn into_pixel(self) -> Option<Pixel> {
        match self {
            Self::One(pixel) => Some(pixel),
            Self::Many(_) => None,
        }
    }

    /// Extract the pixel grid, if at least one axis was plural.
    pub fn into_vector(self) -> Option<PixelVector> {
        match self {
            Self::One(_) => None,
            Self::Many(v) => Some(v),
        }
    }
}

/// A row selection on a view, awaiting a column specifier.
pub struct Selection<'v, 'i, I: ImageSource> {
    view: &'v mut View<'i, I>,
    rows: Axis,
}

impl<'v, 'i, I: ImageSource> Selection<'v, 'i, I> {
    pub(crate) fn new(view: &'v mut View<'i, I>, rows: Axis) -> Self {
        Self { view, rows }
    }

    /// Get the resolved row axis.
    #[inline]
    pub const fn rows(&self) -> &Axis {
        &self.rows
    }

    /// Resolve `cols` and read the selected pixels.
    ///
    /// Pixels are visited row-major: outer loop over the resolved rows,
    /// inner loop over the resolved columns. The returned pixels are
    /// detached copies; mutating them does not touch the view.
    pub fn read(&self, cols: impl Into<IndexSpec>) -> Result<Fetched, ViewError> {
        let width = self.view.width();
        let cols = resolve(&cols.into(), width)?;
        let buf = self.view.buffer().pixels();

        if self.rows.is_scalar() && cols.is_scalar() {
            let offset = self.rows.indices()[0] * width + cols.indices()[0];
            return Ok(Fetched::One(buf[offset]));
        }

        let mut out = Vec::with_capacity(self.rows.len() * cols.len());
        for &row in self.rows.indices() {
            let base = row * width;
            for &col in cols.indices() {
                out.push(buf[base + col]);
            }
        }
        Ok(Fetched::Many(PixelVector::from_pixels(
            cols.len(),
            self.rows.len(),
            out,
        )))
    }

    /// Resolve `cols` and broadcast `value` into every selected slot.
    ///
    /// `value` is anything convertible to a pixel (a [`Pixel`], a color
    /// name, a hex string); a failed conversion is a
    /// [`ViewError::TypeConversion`]. Each slot receives an independent
    /// copy. Returns `true` if any slot actually changed, in which case
    /// the view is marked dirty. Resolution and conversion errors abort
    /// before any slot is written.
    pub fn write(
        &mut self,
        cols: impl Into<IndexSpec>,
        value: impl IntoPixel,
    ) -> Result<bool, ViewError> {
        let width = self.view.width();
        let cols = resolve(&cols.into(), width)?;
        let pixel = value.into_pixel()?;

        let buf = self.view.buffer_mut().pixels_mut();
        let mut changed = false;
        for &row in self.rows.indices() {
            let base = row * width;
            for &col in cols.indices() {
                changed |= buf[base + col].assign(pixel);
            }
        }
        if changed {
            self.view.mark_dirty();
        }
        Ok(changed)
    }

    /// Resolve `cols` and broadcast one magnitude into a channel subset
    /// of every selected pixel.
    ///
    /// Returns `true` if any channel of any selected pixel actually
    /// changed, in which case the view is marked dirty.
    pub fn write_channel(
        &mut self,
        cols: impl Into<IndexSpec>,
        channels: impl Into<Channels>,
        value: Quantum,
    ) -> Result<bool, ViewError> {
        let width = self.view.width();
        let cols = resolve(&cols.into(), width)?;
        let channels = channels.into();

        let buf = self.view.buffer_mut().pixels_mut();
        let mut changed = false;
        for &row in self.rows.indices() {
            let base = row * width;
            for &col in cols.indices() {
                changed |= buf[base + col].set_channels(channels, value);
            }
        }
        if changed {
            self.view.mark_dirty();
        }
        Ok(changed)
    }
}

impl<I: ImageSource> std::fmt::Debug for Selection<'_, '_, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("rows", &self.rows)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Raster;
    use crate::pixel::Channel;

    fn checkerboard(width: usize, height: usize) -> Raster {
        let mut raster = Raster::new(width, height, Pixel::BLACK);
        for y in 0..height {
            for x in 0..width {
                if (x + y) % 2 == 0 {
                    raster.set(x, y, Pixel::WHITE);
                }
            }
        }
        raster
    }

    #[test]
    fn test_scalar_scalar_returns_one_pixel() {
        let mut image = checkerboard(6, 6);
        let mut view = View::new(&mut image, 0, 0, 6, 6).unwrap();
        let fetched = view.select(0).unwrap().read(0).unwrap();
        assert!(fetched.is_single());
        assert_eq!(fetched.into_pixel(), Some(Pixel::WHITE));
    }

    #[test]
    fn test_negative_scalar_indices() {
        let mut image = Raster::new(8, 8, Pixel::BLACK);
        image.set(7, 7, Pixel::RED);
        let mut view = View::new(&mut image, 0, 0, 8, 8).unwrap();
        let fetched = view.select(-1).unwrap().read(-1).unwrap();
        assert_eq!(fetched.into_pixel(), Some(Pixel::RED));
    }

    #[test]
    fn test_plural_read_shape_and_order() {
        let mut image = Raster::new(4, 4, Pixel::BLACK);
        image.set(1, 2, Pixel::RED);
        image.set(2, 2, Pixel::GREEN);
        image.set(1, 3, Pixel::BLUE);

        let mut view = View::new(&mut image, 0, 0, 4, 4).unwrap();
        let grid = view
            .select((2, 2))
            .unwrap()
            .read((1, 2))
            .unwrap()
            .into_vector()
            .unwrap();

        // Rows 2..4 by cols 1..3, row-major.
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixels(), &[Pixel::RED, Pixel::GREEN, Pixel::BLUE, Pixel::BLACK]);
    }

    #[test]
    fn test_scalar_row_plural_cols_is_many() {
        let mut image = Raster::new(5, 5, Pixel::BLACK);
        let mut view = View::new(&mut image, 0, 0, 5, 5).unwrap();
        let fetched = view.select(1).unwrap().read(..).unwrap();
        assert!(!fetched.is_single());
        assert_eq!(fetched.len(), 5);
    }

    #[test]
    fn test_pair_selects_single_row() {
        let mut image = Raster::new(10, 10, Pixel::BLACK);
        image.set(0, 2, Pixel::RED);
        let mut view = View::new(&mut image, 0, 0, 10, 10).unwrap();

        let sel = view.select((2, 1)).unwrap();
        assert_eq!(sel.rows().indices(), &[2]);
        let grid = sel.read(0).unwrap().into_vector().unwrap();
        assert_eq!(grid.pixels(), &[Pixel::RED]);

        // Negative pair start: (-1, 1) on 10 rows selects row 9.
        let sel = view.select((-1, 1)).unwrap();
        assert_eq!(sel.rows().indices(), &[9]);
    }

    #[test]
    fn test_set_spec_selects_in_given_order() {
        let mut image = Raster::new(4, 4, Pixel::BLACK);
        image.set(0, 3, Pixel::RED);
        image.set(0, 1, Pixel::BLUE);
        let mut view = View::new(&mut image, 0, 0, 4, 4).unwrap();

        let grid = view
            .select(vec![3isize, 1])
            .unwrap()
            .read(0)
            .unwrap()
            .into_vector()
            .unwrap();
        assert_eq!(grid.pixels(), &[Pixel::RED, Pixel::BLUE]);
    }

    #[test]
    fn test_resolution_error_aborts_write_entirely() {
        let mut image = Raster::new(4, 4, Pixel::BLACK);
        let mut view = View::new(&mut image, 0, 0, 4, 4).unwrap();

        let err = view
            .select(vec![0isize, 9])
            .unwrap_err();
        assert_eq!(err, ViewError::IndexOutOfRange { index: 9, len: 4 });

        // Column-side failure after a valid row resolution: still no writes.
        let err = view
            .select(..)
            .unwrap()
            .write(vec![1isize, 99], Pixel::RED)
            .unwrap_err();
        assert_eq!(err, ViewError::IndexOutOfRange { index: 99, len: 4 });
        assert!(!view.dirty());
        assert!(view.pixels().iter().all(|p| *p == Pixel::BLACK));
    }

    #[test]
    fn test_write_from_color_name() {
        let mut image = Raster::new(4, 4, Pixel::BLACK);
        let mut view = View::new(&mut image, 0, 0, 4, 4).unwrap();
        assert!(view.select(0).unwrap().write(.., "red").unwrap());
        let fetched = view.select(0).unwrap().read(0).unwrap();
        assert_eq!(fetched.into_pixel(), Some(Pixel::RED));
    }

    #[test]
    fn test_write_rejects_unconvertible_value() {
        let mut image = Raster::new(4, 4, Pixel::BLACK);
        let mut view = View::new(&mut image, 0, 0, 4, 4).unwrap();
        let err = view.select(0).unwrap().write(0, "not-a-color").unwrap_err();
        assert!(matches!(err, ViewError::TypeConversion(_)));
        assert!(!view.dirty());
    }

    #[test]
    fn test_broadcast_stores_independent_copies() {
        let mut image = Raster::new(4, 4, Pixel::BLACK);
        let mut view = View::new(&mut image, 0, 0, 4, 4).unwrap();

        view.select(..).unwrap().write(.., Pixel::GREEN).unwrap();
        let grid = view.select(..).unwrap().read(..).unwrap().into_vector().unwrap();
        assert!(grid.iter().all(|p| *p == Pixel::GREEN));

        // Overwriting one slot leaves the other broadcast targets alone.
        view.select(2).unwrap().write(2, Pixel::RED).unwrap();
        let grid = view.select(..).unwrap().read(..).unwrap().into_vector().unwrap();
        assert_eq!(grid.pixel_at(2, 2), Some(&Pixel::RED));
        assert_eq!(grid.pixel_at(2, 1), Some(&Pixel::GREEN));
        assert_eq!(grid.pixel_at(1, 2), Some(&Pixel::GREEN));
    }

    #[test]
    fn test_read_returns_detached_copies() {
        let mut image = Raster::new(4, 4, Pixel::BLACK);
        let mut view = View::new(&mut image, 0, 0, 4, 4).unwrap();

        let mut grid = view.select(..).unwrap().read(..).unwrap().into_vector().unwrap();
        grid.fill(Pixel::WHITE);

        // The view's buffer is untouched and the view stays clean.
        assert!(!view.dirty());
        assert!(view.pixels().iter().all(|p| *p == Pixel::BLACK));
    }

    #[test]
    fn test_write_channel_broadcast() {
        let mut image = Raster::new(4, 4, Pixel::BLACK);
        let mut view = View::new(&mut image, 0, 0, 4, 4).unwrap();

        assert!(view
            .select(1)
            .unwrap()
            .write_channel(.., Channel::Red, 500)
            .unwrap());
        assert!(view.dirty());

        let grid = view.select(1).unwrap().read(..).unwrap().into_vector().unwrap();
        assert_eq!(grid.channel(Channel::Red), vec![500; 4]);
        assert_eq!(grid.channel(Channel::Blue), vec![0; 4]);

        // Broadcasting the value already present reports no change.
        view.sync(false).unwrap();
        assert!(!view
            .select(1)
            .unwrap()
            .write_channel(.., Channel::Red, 500)
            .unwrap());
        assert!(!view.dirty());
    }

    #[test]
    fn test_empty_selection_write_is_clean_noop() {
        let mut image = Raster::new(4, 4, Pixel::BLACK);
        let mut view = View::new(&mut image, 0, 0, 4, 4).unwrap();
        // start == axis length resolves to an empty run.
        let changed = view.select((4, 2)).unwrap().write(.., Pixel::RED).unwrap();
        assert!(!changed);
        assert!(!view.dirty());
    }
}
