// src/frame.rs
//! Owning image container for generated patterns.
//!
//! A `Frame` is a plain row-major buffer. Cloning it produces a fully
//! independent copy, which is what the pattern cache hands out.

use crate::accessor::PixelAccessor;
use crate::color::{PackedValue, Pixel};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A `width × height` image of pixels in a specific format.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<P: Pixel> {
    width: usize,
    height: usize,
    /// Pixel data (row-major)
    data: Vec<P>,
}

impl<P: Pixel> Frame<P> {
    /// Create a new frame filled with the default pixel (typically transparent black).
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "frame dimensions must be positive, got {}x{}",
            width,
            height
        );
        let size = (width as usize) * (height as usize);
        Self {
            width: width as usize,
            height: height as usize,
            data: vec![P::default(); size],
        }
    }

    /// Create a frame from existing pixel data.
    ///
    /// # Panics
    /// Panics if either dimension is zero or data length doesn't match width * height.
    #[must_use]
    pub fn from_data(data: Vec<P>, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "frame dimensions must be positive, got {}x{}",
            width,
            height
        );
        assert_eq!(data.len(), (width as usize) * (height as usize));
        Self {
            width: width as usize,
            height: height as usize,
            data,
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

    /// Reads one pixel.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the frame.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> P {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of range for {}x{} frame",
            x,
            y,
            self.width,
            self.height
        );
        self.data[y * self.width + x]
    }

    /// Borrows the buffer through a bounds-checked accessor for a drawing pass.
    pub fn lock(&mut self) -> PixelAccessor<'_, P> {
        PixelAccessor::new(&mut self.data, self.width, self.height)
    }

    /// Convert to a different pixel format.
    pub fn convert<Q: Pixel>(&self) -> Frame<Q> {
        Frame {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|p| p.convert::<Q>()).collect(),
        }
    }

    /// FNV-1a hash over the dimensions and every packed pixel value.
    ///
    /// Equal frames always hash equal, so this is a cheap way to compare
    /// pattern output across runs.
    pub fn fingerprint(&self) -> u64 {
        let mut hash = FNV_OFFSET_BASIS;
        let mut feed = |v: u64| {
            for byte in v.to_le_bytes() {
                hash ^= byte as u64;
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        };
        feed(self.width as u64);
        feed(self.height as u64);
        for p in &self.data {
            feed(p.to_packed().to_u64());
        }
        hash
    }

    /// Get immutable pixel slice.
    #[must_use]
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// Get mutable pixel slice.
    pub fn as_slice_mut(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// Consumes the frame, returning its row-major pixel data.
    pub fn into_data(self) -> Vec<P> {
        self.data
    }
}
