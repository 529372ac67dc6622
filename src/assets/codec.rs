use std::io::Cursor;

use anyhow::Context;

use crate::foundation::error::{FacepaintError, FacepaintResult};

/// Source image decoded to premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 pixels.
    pub rgba8_premul: Vec<u8>,
}

/// Container format for the composited output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", tag = "format")]
pub enum OutputFormat {
    /// Lossless PNG with alpha.
    #[default]
    Png,
    /// Baseline JPEG; alpha is dropped.
    Jpeg {
        /// Encoder quality, 1..=100.
        quality: u8,
    },
}

impl OutputFormat {
    /// Quality used when JPEG is requested without one.
    pub const DEFAULT_JPEG_QUALITY: u8 = 92;

    /// Parse `png` / `jpeg` / `jpg` (case-insensitive).
    pub fn parse(s: &str, jpeg_quality: u8) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpeg" | "jpg" => Some(Self::Jpeg {
                quality: jpeg_quality.clamp(1, 100),
            }),
            _ => None,
        }
    }
}

/// Decode any format the `image` crate recognises.
pub fn decode_image(bytes: &[u8]) -> FacepaintResult<DecodedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .context("decode image from memory")
        .map_err(|e| FacepaintError::decode(format!("{e:#}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(DecodedImage {
        width,
        height,
        rgba8_premul,
    })
}

/// Encode premultiplied RGBA8 pixels.
pub fn encode_image(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
    format: OutputFormat,
) -> FacepaintResult<Vec<u8>> {
    let mut straight = rgba8_premul.to_vec();
    unpremultiply_rgba8_in_place(&mut straight);
    let img = image::RgbaImage::from_raw(width, height, straight).ok_or_else(|| {
        FacepaintError::encode(format!(
            "pixel buffer of {} bytes does not match {width}x{height}",
            rgba8_premul.len()
        ))
    })?;

    let mut buf = Vec::new();
    match format {
        OutputFormat::Png => image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode png"),
        OutputFormat::Jpeg { quality } => {
            let rgb = image::DynamicImage::ImageRgba8(img).to_rgb8();
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100))
                .encode_image(&rgb)
                .context("encode jpeg")
        }
    }
    .map_err(|e| FacepaintError::encode(format!("{e:#}")))?;
    Ok(buf)
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
