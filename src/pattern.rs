// src/pattern.rs

//! Deterministic test pattern synthesis.
//!
//! The frame is split at `W/2` and `H/2` into four quadrants, each drawn by
//! its own algorithm:
//!
//! | Quadrant     | Content                                                  |
//! |--------------|----------------------------------------------------------|
//! | top-left     | black/white checkerboard, stride `W/6`                   |
//! | top-right    | hot pink/blue vertical bars, stride `W/12`               |
//! | bottom-left  | red, green, blue bands with a left-to-right alpha ramp   |
//! | bottom-right | sweep through the packed `Rgba8` range, column-major     |
//!
//! Odd dimensions truncate through integer division, so quadrants need not
//! match in size.

use crate::accessor::PixelAccessor;
use crate::color::{NamedColor, PackedValue, Pixel, Rgba8};
use crate::frame::Frame;
use log::debug;
use std::fmt;

/// Checkerboard stride is `width / CHECKER_DIVISOR`.
const CHECKER_DIVISOR: usize = 6;
/// Bar stride is `width / BAR_DIVISOR`.
const BAR_DIVISOR: usize = 12;
/// Each gradient band is `ceil(height / BAND_DIVISOR)` rows tall.
const BAND_DIVISOR: usize = 6;

/// One of the four regions produced by splitting at half width and half height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Half-open pixel rectangle: `left..right` by `top..bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Bounds {
    #[inline]
    pub fn width(&self) -> usize {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bottom - self.top
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Region covered by this quadrant in a `width × height` frame.
    pub fn bounds(self, width: usize, height: usize) -> Bounds {
        let mid_x = width / 2;
        let mid_y = height / 2;
        let (left, right) = match self {
            Quadrant::TopLeft | Quadrant::BottomLeft => (0, mid_x),
            Quadrant::TopRight | Quadrant::BottomRight => (mid_x, width),
        };
        let (top, bottom) = match self {
            Quadrant::TopLeft | Quadrant::TopRight => (0, mid_y),
            Quadrant::BottomLeft | Quadrant::BottomRight => (mid_y, height),
        };
        Bounds {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Which kind of image a descriptor asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternVariant {
    /// The four-quadrant test pattern.
    TestPattern,
    /// A frame of default (transparent black) pixels.
    Blank,
}

impl PatternVariant {
    fn label(self) -> &'static str {
        match self {
            PatternVariant::TestPattern => "TestPattern",
            PatternVariant::Blank => "Blank",
        }
    }
}

/// Identifies one pattern configuration. Equal descriptors always produce
/// pixel-identical frames for a given pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternDescriptor {
    pub width: u32,
    pub height: u32,
    pub variant: PatternVariant,
}

impl PatternDescriptor {
    pub const fn test_pattern(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            variant: PatternVariant::TestPattern,
        }
    }

    pub const fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            variant: PatternVariant::Blank,
        }
    }

    /// Short label such as `TestPattern12x12`.
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Builds a fresh frame for this descriptor. Pure: no caching.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn generate<P: Pixel>(&self) -> Frame<P> {
        debug!("Generating {} as {}", self, P::NAME);
        let mut frame = Frame::new(self.width, self.height);
        match self.variant {
            PatternVariant::TestPattern => draw_test_pattern(&mut frame),
            PatternVariant::Blank => {}
        }
        frame
    }
}

impl fmt::Display for PatternDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}x{}", self.variant.label(), self.width, self.height)
    }
}

/// Draws the full four-quadrant pattern over `frame`.
pub fn draw_test_pattern<P: Pixel>(frame: &mut Frame<P>) {
    let mut pixels = frame.lock();
    black_white_checker(&mut pixels);
    vertical_bars(&mut pixels);
    transparent_gradients(&mut pixels);
    rainbow(&mut pixels);
}

/// Top-left: black and white checkerboard.
///
/// The color index flips at every row that is a multiple of the stride.
/// Each row then starts from that index and flips again at every column
/// that is a multiple of the stride.
fn black_white_checker<P: Pixel>(pixels: &mut PixelAccessor<'_, P>) {
    let area = Quadrant::TopLeft.bounds(pixels.width(), pixels.height());
    let stride = (pixels.width() / CHECKER_DIVISOR).max(1);
    let colors: [P; 2] = [
        NamedColor::Black.to_pixel(),
        NamedColor::White.to_pixel(),
    ];

    let mut row_start = 0;
    for y in area.top..area.bottom {
        if y % stride == 0 {
            row_start = (row_start + 1) % colors.len();
        }
        let mut index = row_start;
        for x in area.left..area.right {
            if x % stride == 0 {
                index = (index + 1) % colors.len();
            }
            pixels.set(x, y, colors[index]);
        }
    }
}

/// Top-right: hot pink and blue bars, alternating every stride columns.
fn vertical_bars<P: Pixel>(pixels: &mut PixelAccessor<'_, P>) {
    let area = Quadrant::TopRight.bounds(pixels.width(), pixels.height());
    let stride = (pixels.width() / BAR_DIVISOR).max(1);
    let colors: [P; 2] = [
        NamedColor::HotPink.to_pixel(),
        NamedColor::Blue.to_pixel(),
    ];

    let mut index = 0;
    for x in area.left..area.right {
        if x % stride == 0 {
            index = (index + 1) % colors.len();
        }
        for y in area.top..area.bottom {
            pixels.set(x, y, colors[index]);
        }
    }
}

/// Bottom-left: red, green and blue bands, alpha ramping from 0 at the left
/// edge towards 1 at the right edge.
fn transparent_gradients<P: Pixel>(pixels: &mut PixelAccessor<'_, P>) {
    let area = Quadrant::BottomLeft.bounds(pixels.width(), pixels.height());
    let band_height = pixels.height().div_ceil(BAND_DIVISOR);
    // Real colors, so conversions into the target format are visible.
    let bands = [NamedColor::Red, NamedColor::Green, NamedColor::Blue].map(NamedColor::to_vector4);

    for x in area.left..area.right {
        let alpha = (x - area.left) as f32 / area.width() as f32;
        let mut band_top = area.top;
        for (i, base) in bands.iter().enumerate() {
            // The last band absorbs whatever rows remain.
            let band_bottom = if i + 1 == bands.len() {
                area.bottom
            } else {
                (band_top + band_height).min(area.bottom)
            };
            let color = P::pack(base.with_alpha(alpha));
            for y in band_top..band_bottom {
                pixels.set(x, y, color);
            }
            band_top = band_bottom;
        }
    }
}

/// Bottom-right: walks an `Rgba8` counter through the packed range, one
/// step per pixel in column-major order, re-encoding each value in `P`.
fn rainbow<P: Pixel>(pixels: &mut PixelAccessor<'_, P>) {
    let area = Quadrant::BottomRight.bounds(pixels.width(), pixels.height());
    let pixel_count = (area.width() * area.height()) as u64;
    let step = <u32 as PackedValue>::step_for(pixel_count);

    let mut counter = Rgba8::from_packed(<u32 as PackedValue>::ZERO);
    for x in area.left..area.right {
        for y in area.top..area.bottom {
            counter = counter.increment(step);
            pixels.set(x, y, counter.convert());
        }
    }
}

#[cfg(test)]
mod tests;
