// src/accessor.rs

//! Bounds-checked 2D view over a frame's pixel buffer.
//!
//! A `PixelAccessor` borrows the buffer mutably for the duration of a
//! generation pass. The borrow ends when the accessor is dropped, which
//! also happens while unwinding, so the frame is always usable again after
//! a pass, whether it finished or not.

use crate::color::Pixel;
use log::trace;
use std::ops::{Index, IndexMut};

/// Mutable, non-owning `(x, y)` view over a row-major pixel buffer.
///
/// Out-of-range coordinates are a contract violation and panic.
pub struct PixelAccessor<'a, P: Pixel> {
    width: usize,
    height: usize,
    pixels: &'a mut [P],
}

impl<'a, P: Pixel> PixelAccessor<'a, P> {
    /// # Panics
    /// Panics if `pixels.len() != width * height`.
    pub(crate) fn new(pixels: &'a mut [P], width: usize, height: usize) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "accessor buffer does not match {}x{}",
            width,
            height
        );
        trace!("Acquired {} accessor over {}x{}", P::NAME, width, height);
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> P {
        self.pixels[self.offset(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: P) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of range for {}x{} accessor",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl<P: Pixel> Index<(usize, usize)> for PixelAccessor<'_, P> {
    type Output = P;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &P {
        &self.pixels[self.offset(x, y)]
    }
}

impl<P: Pixel> IndexMut<(usize, usize)> for PixelAccessor<'_, P> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut P {
        let offset = self.offset(x, y);
        &mut self.pixels[offset]
    }
}

impl<P: Pixel> Drop for PixelAccessor<'_, P> {
    fn drop(&mut self) {
        trace!("Released {} accessor over {}x{}", P::NAME, self.width, self.height);
    }
}
