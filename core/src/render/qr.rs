//! QR symbol encoding and rasterization.
//!
//! Every frame text is encoded at error correction level High. The version
//! picked for the first frame becomes the floor for the rest, so a receiver
//! sees codes of one geometry throughout the GIF; a later frame only grows
//! past it if it genuinely does not fit.

use image::{GrayImage, Luma};
use qrcodegen::{QrCode, QrCodeEcc, QrSegment, Version};
use tracing::debug;

use crate::render::glyphs;
use crate::render::types::{RenderConfig, RenderError};

/// Rendered codes of one frame set.
#[derive(Debug, Clone)]
pub struct QrSymbols {
    /// One image per frame, in frame order.
    pub images: Vec<GrayImage>,
    /// Version of the first symbol (the floor for all others).
    pub version: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct QrRenderer {
    config: RenderConfig,
}

impl QrRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Encode texts into QR codes with the sticky-version rule.
    pub fn encode_codes<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<QrCode>, RenderError> {
        let mut floor = Version::MIN;
        let mut codes = Vec::with_capacity(texts.len());

        for (index, text) in texts.iter().enumerate() {
            let segs = QrSegment::make_segments(text.as_ref());
            let code = QrCode::encode_segments_advanced(
                &segs,
                QrCodeEcc::High,
                floor,
                Version::MAX,
                None,
                false,
            )
            .map_err(|e| RenderError::DataTooLong { index, msg: e.to_string() })?;

            if index == 0 {
                floor = code.version();
            }
            codes.push(code);
        }

        Ok(codes)
    }

    /// Rasterize one code: `box_size` pixels per module, `border` modules of
    /// quiet zone, black on white.
    pub fn rasterize(&self, code: &QrCode) -> GrayImage {
        let modules = code.size() as u32;
        let bx = self.config.box_size;
        let border = self.config.border;
        let dim = (modules + 2 * border) * bx;

        let mut img = GrayImage::from_pixel(dim, dim, Luma([255]));
        for my in 0..modules {
            for mx in 0..modules {
                if !code.get_module(mx as i32, my as i32) {
                    continue;
                }
                let x0 = (mx + border) * bx;
                let y0 = (my + border) * bx;
                for y in y0..y0 + bx {
                    for x in x0..x0 + bx {
                        img.put_pixel(x, y, Luma([0]));
                    }
                }
            }
        }
        img
    }

    /// Encode and rasterize every text; label each image with its position
    /// when labels are enabled.
    pub fn render<S: AsRef<str>>(&self, texts: &[S]) -> Result<QrSymbols, RenderError> {
        if texts.is_empty() {
            return Err(RenderError::NoFrames);
        }

        let codes = self.encode_codes(texts)?;
        let version = codes[0].version().value();

        let scale = self.label_scale();
        let images = codes
            .iter()
            .enumerate()
            .map(|(i, code)| {
                let mut img = self.rasterize(code);
                if self.config.labels {
                    let label = format!("{:>2}", i);
                    glyphs::draw_text(&mut img, 5 * scale, 5 * scale, scale, &label);
                }
                img
            })
            .collect();

        debug!(version, frames = texts.len(), "qr symbols rendered");
        Ok(QrSymbols { images, version })
    }

    /// Label scale that keeps the number inside the quiet zone.
    fn label_scale(&self) -> u32 {
        let margin_px = self.config.border * self.config.box_size;
        (margin_px / 25).max(1)
    }
}
