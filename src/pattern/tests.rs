// src/pattern/tests.rs

use super::*;
use crate::color::{Bgra8, Rgb565, Rgba16};
use std::collections::HashSet;
use test_log::test;

fn pattern(width: u32, height: u32) -> Frame<Rgba8> {
    PatternDescriptor::test_pattern(width, height).generate()
}

fn colors_in(frame: &Frame<Rgba8>, area: Bounds) -> HashSet<Rgba8> {
    let mut seen = HashSet::new();
    for y in area.top..area.bottom {
        for x in area.left..area.right {
            seen.insert(frame.pixel(x, y));
        }
    }
    seen
}

const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);
const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);
const PINK: Rgba8 = Rgba8::new(255, 105, 180, 255);
const BLUE: Rgba8 = Rgba8::new(0, 0, 255, 255);

#[test]
fn quadrant_bounds_split_at_half() {
    assert_eq!(
        Quadrant::TopLeft.bounds(12, 12),
        Bounds { left: 0, top: 0, right: 6, bottom: 6 }
    );
    assert_eq!(
        Quadrant::BottomRight.bounds(12, 12),
        Bounds { left: 6, top: 6, right: 12, bottom: 12 }
    );

    // Odd sizes give the extra row/column to the right and bottom.
    let tl = Quadrant::TopLeft.bounds(7, 5);
    let br = Quadrant::BottomRight.bounds(7, 5);
    assert_eq!((tl.width(), tl.height()), (3, 2));
    assert_eq!((br.width(), br.height()), (4, 3));

    let covered: usize = Quadrant::ALL
        .iter()
        .map(|q| {
            let b = q.bounds(7, 5);
            b.width() * b.height()
        })
        .sum();
    assert_eq!(covered, 35);
}

#[test]
fn descriptions_name_variant_and_size() {
    assert_eq!(PatternDescriptor::test_pattern(12, 8).description(), "TestPattern12x8");
    assert_eq!(PatternDescriptor::blank(3, 4).to_string(), "Blank3x4");
}

#[test]
fn blank_variant_is_all_default_pixels() {
    let frame: Frame<Rgba8> = PatternDescriptor::blank(5, 3).generate();
    assert!(frame.as_slice().iter().all(|p| *p == Rgba8::default()));
}

#[test]
fn checkerboard_uses_stride_blocks() {
    let frame = pattern(12, 12);
    let area = Quadrant::TopLeft.bounds(12, 12);
    assert_eq!(colors_in(&frame, area), HashSet::from([BLACK, WHITE]));

    for y in area.top..area.bottom {
        for x in area.left..area.right {
            let expected = if (x / 2 + y / 2) % 2 == 0 { BLACK } else { WHITE };
            assert_eq!(frame.pixel(x, y), expected, "at ({}, {})", x, y);
        }
    }
}

#[test]
fn bars_alternate_every_column_at_width_twelve() {
    let frame = pattern(12, 12);
    let area = Quadrant::TopRight.bounds(12, 12);
    assert_eq!(colors_in(&frame, area), HashSet::from([PINK, BLUE]));

    for y in area.top..area.bottom {
        for x in area.left..area.right {
            let expected = if (x - area.left) % 2 == 0 { BLUE } else { PINK };
            assert_eq!(frame.pixel(x, y), expected, "at ({}, {})", x, y);
        }
    }
}

#[test]
fn bars_are_uniform_down_each_column() {
    // Stride 2 starting at x = 15 flips an odd number of times per row.
    let frame = pattern(30, 10);
    let area = Quadrant::TopRight.bounds(30, 10);
    for x in area.left..area.right {
        let top = frame.pixel(x, area.top);
        for y in area.top..area.bottom {
            assert_eq!(frame.pixel(x, y), top, "column {} row {}", x, y);
        }
    }
    // Bars are two columns wide away from the left edge.
    assert_eq!(frame.pixel(16, 0), frame.pixel(17, 0));
    assert_ne!(frame.pixel(17, 0), frame.pixel(18, 0));
}

#[test]
fn gradient_bands_are_red_green_blue() {
    let frame = pattern(12, 12);
    // Band height is ceil(12 / 6) = 2, starting at row 6.
    let column = 3;
    let rgb = |y: usize| {
        let p = frame.pixel(column, y);
        (p.r(), p.g(), p.b())
    };
    assert_eq!(rgb(6), (255, 0, 0));
    assert_eq!(rgb(7), (255, 0, 0));
    assert_eq!(rgb(8), (0, 128, 0));
    assert_eq!(rgb(9), (0, 128, 0));
    assert_eq!(rgb(10), (0, 0, 255));
    assert_eq!(rgb(11), (0, 0, 255));
}

#[test]
fn gradient_alpha_is_monotonic_and_shared_by_bands() {
    let (w, h) = (40, 30);
    let frame = pattern(w, h);
    let area = Quadrant::BottomLeft.bounds(w as usize, h as usize);

    for y in area.top..area.bottom {
        assert_eq!(frame.pixel(area.left, y).a(), 0);
        let mut previous = 0;
        for x in area.left..area.right {
            let a = frame.pixel(x, y).a();
            assert!(a >= previous, "alpha dropped at ({}, {})", x, y);
            assert_eq!(a, frame.pixel(x, area.top).a());
            previous = a;
        }
        // (width - 1) / width of full scale at the right edge.
        let expected = ((area.width() - 1) as f32 / area.width() as f32 * 255.0).round() as u8;
        assert_eq!(previous, expected);
        assert!(previous >= 240);
    }
}

#[test]
fn rainbow_steps_column_major() {
    let frame = pattern(8, 6);
    let area = Quadrant::BottomRight.bounds(8, 6);
    let step = u32::MAX / (area.width() * area.height()) as u32;

    let mut expected = 0u32;
    for x in area.left..area.right {
        for y in area.top..area.bottom {
            expected = expected.wrapping_add(step);
            assert_eq!(frame.pixel(x, y).0, expected, "at ({}, {})", x, y);
        }
    }
    // Last pixel lands within one step of the top of the range.
    assert!(u32::MAX - expected < step);
}

#[test]
fn four_by_four_example() {
    let frame = pattern(4, 4);

    // Checkerboard, rows 0-1 / cols 0-1.
    assert_eq!(frame.pixel(0, 0), BLACK);
    assert_eq!(frame.pixel(1, 0), WHITE);
    assert_eq!(frame.pixel(0, 1), WHITE);
    assert_eq!(frame.pixel(1, 1), BLACK);

    // Bars, rows 0-1 / cols 2-3.
    assert_eq!(frame.pixel(2, 0), BLUE);
    assert_eq!(frame.pixel(3, 0), PINK);
    assert_eq!(frame.pixel(2, 1), BLUE);
    assert_eq!(frame.pixel(3, 1), PINK);

    // Gradient bands, rows 2-3 / cols 0-1: one red row, one green row.
    assert_eq!(frame.pixel(0, 2), Rgba8::new(255, 0, 0, 0));
    assert_eq!(frame.pixel(1, 2), Rgba8::new(255, 0, 0, 128));
    assert_eq!(frame.pixel(0, 3), Rgba8::new(0, 128, 0, 0));
    assert_eq!(frame.pixel(1, 3), Rgba8::new(0, 128, 0, 128));

    // Hue sweep, rows 2-3 / cols 2-3.
    let step = u32::MAX / 4;
    assert_eq!(frame.pixel(2, 2).0, step);
    assert_eq!(frame.pixel(2, 3).0, step * 2);
    assert_eq!(frame.pixel(3, 2).0, step * 3);
    assert_eq!(frame.pixel(3, 3).0, step * 4);
}

#[test]
fn generation_is_deterministic() {
    for (w, h) in [(1, 1), (4, 4), (12, 12), (33, 17)] {
        assert_eq!(pattern(w, h), pattern(w, h));
        assert_eq!(pattern(w, h).fingerprint(), pattern(w, h).fingerprint());
    }
}

#[test]
fn tiny_and_odd_sizes_do_not_panic() {
    for (w, h) in [(1, 1), (1, 2), (2, 1), (3, 3), (5, 7), (7, 1), (1, 13)] {
        let d = PatternDescriptor::test_pattern(w, h);
        assert_eq!(d.generate::<Rgba8>().as_slice().len(), (w * h) as usize);
        assert_eq!(d.generate::<Rgb565>().as_slice().len(), (w * h) as usize);
        assert_eq!(d.generate::<Rgba16>().as_slice().len(), (w * h) as usize);
    }
}

#[test]
fn pattern_is_format_independent_for_eight_bit_formats() {
    let d = PatternDescriptor::test_pattern(20, 14);
    let bgra: Frame<Bgra8> = d.generate();
    assert_eq!(bgra, d.generate::<Rgba8>().convert::<Bgra8>());
}

#[test]
fn rgb565_pattern_keeps_quadrant_structure() {
    let frame: Frame<Rgb565> = PatternDescriptor::test_pattern(12, 12).generate();
    assert_eq!(frame.pixel(0, 0), Rgb565::new(0, 0, 0));
    assert_eq!(frame.pixel(2, 0), Rgb565::new(31, 63, 31));
    assert_eq!(frame.pixel(6, 0), Rgb565::new(0, 0, 31));
}
