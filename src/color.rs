// src/color.rs

//! Color model: normalized `Vector4` channels and packed pixel formats.
//!
//! Every pixel format implements [`Pixel`], which converts between a packed
//! scalar and a normalized four-channel vector. The pattern generator is
//! written entirely against that trait, so any conforming format can be
//! synthesized.

use std::fmt::Debug;
use std::hash::Hash;

/// Four normalized floating-point channels: red, green, blue, alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Vector4 {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a copy with every channel clamped into `[0, 1]`. NaN maps to 0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            clamp_unit(self.r),
            clamp_unit(self.g),
            clamp_unit(self.b),
            clamp_unit(self.a),
        )
    }

    /// Returns a copy with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Maps a normalized channel onto `0..=max`, rounding to nearest.
#[inline]
fn quantize(v: f32, max: u32) -> u32 {
    (clamp_unit(v) * max as f32).round() as u32
}

#[inline]
fn normalize(q: u32, max: u32) -> f32 {
    q as f32 / max as f32
}

#[inline]
fn q8(v: f32) -> u8 {
    quantize(v, u8::MAX as u32) as u8
}

#[inline]
fn n8(q: u8) -> f32 {
    normalize(q as u32, u8::MAX as u32)
}

/// An unsigned scalar that can hold a packed color.
pub trait PackedValue: Copy + Eq + Hash + Debug + Default + Send + Sync + 'static {
    const ZERO: Self;
    const MAX: Self;

    /// Addition that wraps from `MAX` back through zero.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// The step that walks the whole packed range in `count` increments
    /// (`MAX / count`). A count of zero is treated as one.
    fn step_for(count: u64) -> Self;

    /// Widens to `u64` without changing the value.
    fn to_u64(self) -> u64;
}

macro_rules! impl_packed_value {
    ($($t:ty),*) => {
        $(
            impl PackedValue for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn step_for(count: u64) -> Self {
                    (<$t>::MAX as u64 / count.max(1)) as $t
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_packed_value!(u16, u32, u64);

/// A pixel format that packs from and unpacks to a [`Vector4`].
///
/// The byte order of each format is its own business, but `pack` and
/// `unpack` must agree with each other and be monotonic per channel.
pub trait Pixel: Copy + Default + Debug + PartialEq + Send + Sync + 'static {
    /// The scalar the color is stored in.
    type Packed: PackedValue;

    /// Short, stable name of the format (used in pattern descriptions).
    const NAME: &'static str;

    fn from_packed(packed: Self::Packed) -> Self;

    fn to_packed(self) -> Self::Packed;

    /// Packs normalized channels. Out-of-range channels are clamped, never rejected.
    fn pack(v: Vector4) -> Self;

    /// Unpacks to normalized channels in `[0, 1]`.
    fn unpack(self) -> Vector4;

    /// Adds `step` to the packed value, wrapping at `Packed::MAX`.
    #[inline]
    fn increment(self, step: Self::Packed) -> Self {
        Self::from_packed(self.to_packed().wrapping_add(step))
    }

    /// Re-encodes this color in another format via its normalized channels.
    #[inline]
    fn convert<Q: Pixel>(self) -> Q {
        Q::pack(self.unpack())
    }
}

/// 8 bits per channel, stored little-endian as `[r, g, b, a]` in a `u32`.
///
/// This is the reference format: its packed counter drives the hue sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgba8(pub u32);

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.0.to_le_bytes()[0]
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.0.to_le_bytes()[1]
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0.to_le_bytes()[2]
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0.to_le_bytes()[3]
    }
}

impl Pixel for Rgba8 {
    type Packed = u32;
    const NAME: &'static str = "Rgba8";

    #[inline]
    fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    #[inline]
    fn to_packed(self) -> u32 {
        self.0
    }

    #[inline]
    fn pack(v: Vector4) -> Self {
        Self::new(q8(v.r), q8(v.g), q8(v.b), q8(v.a))
    }

    #[inline]
    fn unpack(self) -> Vector4 {
        Vector4::new(n8(self.r()), n8(self.g()), n8(self.b()), n8(self.a()))
    }
}

/// 8 bits per channel, stored little-endian as `[b, g, r, a]` in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bgra8(pub u32);

impl Bgra8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([b, g, r, a]))
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0.to_le_bytes()[0]
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.0.to_le_bytes()[1]
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.0.to_le_bytes()[2]
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0.to_le_bytes()[3]
    }
}

impl From<Rgba8> for Bgra8 {
    #[inline]
    fn from(c: Rgba8) -> Self {
        Self::new(c.r(), c.g(), c.b(), c.a())
    }
}

impl Pixel for Bgra8 {
    type Packed = u32;
    const NAME: &'static str = "Bgra8";

    #[inline]
    fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    #[inline]
    fn to_packed(self) -> u32 {
        self.0
    }

    #[inline]
    fn pack(v: Vector4) -> Self {
        Self::new(q8(v.r), q8(v.g), q8(v.b), q8(v.a))
    }

    #[inline]
    fn unpack(self) -> Vector4 {
        Vector4::new(n8(self.r()), n8(self.g()), n8(self.b()), n8(self.a()))
    }
}

/// 16 bits per channel in a `u64`; red occupies the low word, alpha the high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgba16(pub u64);

impl Rgba16 {
    const CHANNEL_MAX: u32 = u16::MAX as u32;

    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self((r as u64) | (g as u64) << 16 | (b as u64) << 32 | (a as u64) << 48)
    }

    #[inline]
    const fn channel(self, index: u32) -> u16 {
        (self.0 >> (16 * index)) as u16
    }
}

impl Pixel for Rgba16 {
    type Packed = u64;
    const NAME: &'static str = "Rgba16";

    #[inline]
    fn from_packed(packed: u64) -> Self {
        Self(packed)
    }

    #[inline]
    fn to_packed(self) -> u64 {
        self.0
    }

    fn pack(v: Vector4) -> Self {
        let q = |c: f32| quantize(c, Self::CHANNEL_MAX) as u16;
        Self::new(q(v.r), q(v.g), q(v.b), q(v.a))
    }

    fn unpack(self) -> Vector4 {
        let n = |i: u32| normalize(self.channel(i) as u32, Self::CHANNEL_MAX);
        Vector4::new(n(0), n(1), n(2), n(3))
    }
}

/// 5-6-5 bit RGB in a `u16` with no alpha storage.
///
/// Packing drops alpha; unpacking reports fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    const R_MAX: u32 = 0x1F;
    const G_MAX: u32 = 0x3F;
    const B_MAX: u32 = 0x1F;

    /// Builds from already-quantized channels (`r`, `b` in 0..=31, `g` in 0..=63).
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16) & 0x1F;
        let g = (g as u16) & 0x3F;
        let b = (b as u16) & 0x1F;
        Self(r << 11 | g << 5 | b)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 11) as u8 & 0x1F
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 5) as u8 & 0x3F
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8 & 0x1F
    }
}

impl Pixel for Rgb565 {
    type Packed = u16;
    const NAME: &'static str = "Rgb565";

    #[inline]
    fn from_packed(packed: u16) -> Self {
        Self(packed)
    }

    #[inline]
    fn to_packed(self) -> u16 {
        self.0
    }

    fn pack(v: Vector4) -> Self {
        Self::new(
            quantize(v.r, Self::R_MAX) as u8,
            quantize(v.g, Self::G_MAX) as u8,
            quantize(v.b, Self::B_MAX) as u8,
        )
    }

    fn unpack(self) -> Vector4 {
        Vector4::new(
            normalize(self.r() as u32, Self::R_MAX),
            normalize(self.g() as u32, Self::G_MAX),
            normalize(self.b() as u32, Self::B_MAX),
            1.0,
        )
    }
}

/// The fixed colors the test pattern is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    White,
    HotPink,
    Blue,
    Red,
    Green, // web green, not full-intensity lime
}

impl NamedColor {
    /// Opaque sRGB components of this color.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0, 0, 0),
            NamedColor::White => (255, 255, 255),
            NamedColor::HotPink => (255, 105, 180),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Red => (255, 0, 0),
            NamedColor::Green => (0, 128, 0),
        }
    }

    #[inline]
    pub fn to_vector4(self) -> Vector4 {
        let (r, g, b) = self.to_rgb();
        Vector4::new(n8(r), n8(g), n8(b), 1.0)
    }

    /// Packs this color into any pixel format.
    #[inline]
    pub fn to_pixel<P: Pixel>(self) -> P {
        P::pack(self.to_vector4())
    }
}
