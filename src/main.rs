// src/main.rs

//! `patternkit [WIDTH HEIGHT [FORMAT]]`
//!
//! Generates a test pattern and prints its description, fingerprint and the
//! color at each quadrant's origin. Missing arguments come from the config
//! (see `PATTERNKIT_CONFIG`).

use anyhow::{bail, Context};
use log::info;
use patternkit::config::validate_dimensions;
use patternkit::{
    request_pattern, Bgra8, Config, PatternDescriptor, Pixel, PixelFormat, Quadrant, Rgb565,
    Rgba16, Rgba8,
};

const USAGE: &str = "usage: patternkit [WIDTH HEIGHT [FORMAT]]";

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (width, height, format) = parse_args(&args, &config)?;

    info!("Requesting {}x{} pattern as {}", width, height, format);
    match format {
        PixelFormat::Rgba8 => report::<Rgba8>(width, height),
        PixelFormat::Bgra8 => report::<Bgra8>(width, height),
        PixelFormat::Rgba16 => report::<Rgba16>(width, height),
        PixelFormat::Rgb565 => report::<Rgb565>(width, height),
    }
    Ok(())
}

fn parse_args(args: &[String], config: &Config) -> anyhow::Result<(u32, u32, PixelFormat)> {
    let (width, height, format) = match args {
        [] => (config.default_width, config.default_height, config.pixel_format),
        [w, h] => (parse_dimension(w, "width")?, parse_dimension(h, "height")?, config.pixel_format),
        [w, h, f] => (
            parse_dimension(w, "width")?,
            parse_dimension(h, "height")?,
            f.parse::<PixelFormat>().context("Invalid pixel format argument")?,
        ),
        _ => bail!(USAGE),
    };
    validate_dimensions(width, height)?;
    Ok((width, height, format))
}

fn parse_dimension(arg: &str, name: &str) -> anyhow::Result<u32> {
    arg.parse()
        .with_context(|| format!("Invalid {} '{}'. {}", name, arg, USAGE))
}

fn report<P: Pixel>(width: u32, height: u32) {
    let frame = request_pattern::<P>(width, height);
    println!("{} ({})", PatternDescriptor::test_pattern(width, height), P::NAME);
    println!("fingerprint: {:016x}", frame.fingerprint());

    for quadrant in Quadrant::ALL {
        let bounds = quadrant.bounds(frame.width(), frame.height());
        if bounds.is_empty() {
            println!("{:?}: empty", quadrant);
            continue;
        }
        let v = frame.pixel(bounds.left, bounds.top).unpack();
        println!(
            "{:?} ({}, {}) {}x{}: r={:.3} g={:.3} b={:.3} a={:.3}",
            quadrant,
            bounds.left,
            bounds.top,
            bounds.width(),
            bounds.height(),
            v.r,
            v.g,
            v.b,
            v.a
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_use_config_defaults() {
        let config = Config::default();
        assert_eq!(parse_args(&[], &config).unwrap(), (100, 100, PixelFormat::Rgba8));
    }

    #[test]
    fn explicit_size_and_format() {
        let config = Config::default();
        assert_eq!(
            parse_args(&args(&["32", "16", "rgb565"]), &config).unwrap(),
            (32, 16, PixelFormat::Rgb565)
        );
    }

    #[test]
    fn zero_and_garbage_dimensions_are_errors() {
        let config = Config::default();
        assert!(parse_args(&args(&["0", "16"]), &config).is_err());
        assert!(parse_args(&args(&["-4", "16"]), &config).is_err());
        assert!(parse_args(&args(&["8"]), &config).is_err());
    }
}
