//! Image utility functions for rasterizing bundled images for display.
//!
//! This module provides utilities for:
//! - Rasterizing an encoded image into a fixed-size square PNG
//! - Building and parsing data URLs (MIME type, base64 data)

use anyhow::{Context, Result};
use base64::Engine;
use image::imageops::FilterType;
use image::ImageFormat;
use std::io::Cursor;

/// Largest edge length accepted for a rasterized bitmap.
const MAX_RASTER_SIZE: u32 = 1024;

/// Decode `bytes` and rasterize them into a `size`x`size` PNG.
///
/// Non-square sources are scaled to fit and centered on a transparent canvas.
pub fn rasterize_square_png(bytes: &[u8], size: u32) -> Result<Vec<u8>> {
    anyhow::ensure!(
        (1..=MAX_RASTER_SIZE).contains(&size),
        "Invalid raster size {size} (expected 1..={MAX_RASTER_SIZE})"
    );

    let source = image::load_from_memory(bytes).context("Failed to decode image")?;
    let scaled = source.resize(size, size, FilterType::Lanczos3).to_rgba8();

    let mut canvas = image::RgbaImage::new(size, size);
    let x = i64::from((size - scaled.width()) / 2);
    let y = i64::from((size - scaled.height()) / 2);
    image::imageops::overlay(&mut canvas, &scaled, x, y);

    let mut png = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(png)
}

/// Build a `data:` URL from a MIME type and raw bytes.
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let encoded = base64::prelude::BASE64_STANDARD.encode(bytes);
    format!("data:{mime_type};base64,{encoded}")
}

/// Extract the MIME type from a data URL.
///
/// Expects format: `data:<mime-type>;base64,<base64-data>`
/// Returns the MIME type portion (e.g., "image/png").
#[cfg(test)]
pub fn extract_mime_type_from_data_url(data_url: &str) -> Option<&str> {
    // data:image/png;base64,<data>
    let stripped = data_url.strip_prefix("data:")?;
    let semicolon_pos = stripped.find(';')?;
    Some(&stripped[..semicolon_pos])
}

/// Extract base64 data from a data URL.
///
/// Expects format: `data:<mime-type>;base64,<base64-data>`
#[cfg(test)]
pub fn extract_base64_from_data_url(data_url: &str) -> Result<&str, &'static str> {
    data_url
        .split_once(";base64,")
        .map(|(_, data)| data)
        .ok_or("Invalid data URL format")
}
