// src/lib.rs

//! Deterministic, reproducible synthetic test images.
//!
//! A test asks for a pattern by size and pixel format and gets back a frame
//! whose structure is known in advance:
//!
//! ```
//! use patternkit::{request_pattern, Rgba8};
//!
//! let frame = request_pattern::<Rgba8>(12, 12);
//! assert_eq!(frame.pixel(0, 0), Rgba8::new(0, 0, 0, 255));
//! ```
//!
//! Patterns are generated once per configuration and cached for the life of
//! the process. Every caller receives its own copy.

pub mod accessor;
pub mod cache;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod pattern;

pub use accessor::PixelAccessor;
pub use cache::{request_blank, request_pattern, CacheKey, PatternCache};
pub use color::{Bgra8, NamedColor, PackedValue, Pixel, Rgb565, Rgba16, Rgba8, Vector4};
pub use config::{Config, PixelFormat};
pub use error::ConfigError;
pub use frame::Frame;
pub use pattern::{draw_test_pattern, Bounds, PatternDescriptor, PatternVariant, Quadrant};
