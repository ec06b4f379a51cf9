//! Image module: The bulk I/O boundary between views and pixel storage.
//!
//! A view never touches image storage directly. It issues exactly two
//! kinds of request through [`ImageSource`]: one bulk read at
//! construction and at most one bulk write per sync. Anything that can
//! answer those two requests can back a view; [`Raster`] is the built-in
//! owned implementation.

use crate::error::ViewError;
use crate::geom::Rect;
use crate::pixel::Pixel;

/// Storage that can service rectangular bulk pixel I/O.
///
/// Implementations must return and accept pixel runs of exactly
/// `rect.area()` pixels in row-major order, and apply writes atomically:
/// a rejected write leaves the store as that call defines, never half of
/// one.
pub trait ImageSource {
    /// Image width in columns.
    fn width(&self) -> usize;

    /// Image height in rows.
    fn height(&self) -> usize;

    /// Read the pixels of `rect`, row-major.
    ///
    /// Fails if the rectangle does not lie within the image.
    fn read_block(&self, rect: Rect) -> Result<Vec<Pixel>, ViewError>;

    /// Overwrite the pixels of `rect` with a row-major run.
    ///
    /// Fails if the rectangle does not lie within the image or the run
    /// length is not exactly `rect.area()`.
    fn write_block(&mut self, rect: Rect, pixels: &[Pixel]) -> Result<(), ViewError>;
}

/// An owned width×height pixel image.
///
/// Pixels are stored in a contiguous `Vec` in row-major order:
/// `index = y * width + x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    /// Contiguous pixel storage (row-major order).
    pixels: Vec<Pixel>,
    /// Image width in columns.
    width: usize,
    /// Image height in rows.
    height: usize,
}

impl Raster {
    /// Create a new raster with every pixel set to `fill`.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: usize, height: usize, fill: Pixel) -> Self {
        assert!(width > 0 && height > 0, "Raster dimensions must be non-zero");
        Self {
            pixels: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Get the bounds of the whole image as a rectangle at the origin.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Get a reference to the pixel at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        self.index_of(x, y).map(|i| &self.pixels[i])
    }

    /// Set the pixel at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx] = pixel;
            true
        } else {
            false
        }
    }

    /// Fill a rectangular region with one pixel, clipped to the image.
    pub fn fill_rect(&mut self, rect: Rect, pixel: Pixel) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                let idx = y * self.width + x;
                self.pixels[idx] = pixel;
            }
        }
    }

    /// Get a reference to the underlying pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks(self.width)
    }

    fn check_rect(&self, rect: Rect) -> Result<(), ViewError> {
        if self.bounds().contains_rect(&rect) {
            Ok(())
        } else {
            Err(ViewError::OutOfBounds {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                columns: self.width,
                rows: self.height,
            })
        }
    }
}

impl ImageSource for Raster {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    fn read_block(&self, rect: Rect) -> Result<Vec<Pixel>, ViewError> {
        self.check_rect(rect)?;
        let mut out = Vec::with_capacity(rect.area());
        for y in rect.y..rect.bottom() {
            let start = y * self.width + rect.x;
            out.extend_from_slice(&self.pixels[start..start + rect.width]);
        }
        Ok(out)
    }

    fn write_block(&mut self, rect: Rect, pixels: &[Pixel]) -> Result<(), ViewError> {
        self.check_rect(rect)?;
        if pixels.len() != rect.area() {
            return Err(ViewError::Backing(format!(
                "write of {} pixels does not match {:?}",
                pixels.len(),
                rect
            )));
        }
        for (row, chunk) in pixels.chunks(rect.width.max(1)).enumerate() {
            let start = (rect.y + row) * self.width + rect.x;
            self.pixels[start..start + rect.width].copy_from_slice(chunk);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
