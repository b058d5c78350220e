//! Rendering: frame texts → QR images → animated GIFs.
//!
//! Responsibilities:
//! - Encode each frame text as one QR symbol (`qr`)
//! - Label codes and draw the title card (`glyphs`)
//! - Assemble fast and slow GIFs from one image sequence (`animation`)
//!
//! Non-responsibilities:
//! - Framing or compression
//! - File IO

pub mod types;
pub mod glyphs;
pub mod qr;
pub mod animation;

pub use types::{Pace, RenderConfig, RenderError};
pub use qr::{QrRenderer, QrSymbols};
pub use animation::encode_gif;

use image::{GrayImage, Luma};
use tracing::debug;

use crate::framer::FramedPayload;
use crate::types::Result;

/// Both GIFs of one payload.
#[derive(Debug, Clone)]
pub struct RenderedGifs {
    /// Shared QR version of the codes.
    pub version: u8,
    /// Images per GIF (title card included when labels are on).
    pub images: usize,
    pub fast: Vec<u8>,
    pub slow: Vec<u8>,
}

impl RenderedGifs {
    pub fn get(&self, pace: Pace) -> &[u8] {
        match pace {
            Pace::Fast => &self.fast,
            Pace::Slow => &self.slow,
        }
    }
}

/// Title card: `QR GIF`, the QR version and the highest frame index.
pub fn title_card(width: u32, height: u32, version: u8, total: u8) -> GrayImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([255]));
    let text = format!("QR GIF\nQR VERSION: {}\nCOUNT: {}", version, total);

    let margin = 50.min(width / 8);
    let longest = text.lines().map(|l| glyphs::text_width(l, 1)).max().unwrap_or(1).max(1);
    let scale = (width.saturating_sub(2 * margin) / longest).clamp(1, 5);
    glyphs::draw_text(&mut img, margin, margin, scale, &text);
    img
}

/// Full image sequence for a frame set: optional title card, then one
/// code per frame. Returns the images and the QR version.
pub fn render_sequence<S: AsRef<str>>(
    texts: &[S],
    total: u8,
    config: &RenderConfig,
) -> Result<(Vec<GrayImage>, u8)> {
    config.validate()?;
    let symbols = QrRenderer::new(*config).render(texts)?;

    let mut images = Vec::with_capacity(symbols.images.len() + 1);
    if config.labels {
        let (w, h) = symbols.images[0].dimensions();
        images.push(title_card(w, h, symbols.version, total));
    }
    images.extend(symbols.images);
    Ok((images, symbols.version))
}

/// Render the fast and slow GIFs for a framed payload.
pub fn render_gifs(framed: &FramedPayload, config: &RenderConfig) -> Result<RenderedGifs> {
    let texts = framed.texts()?;
    let (images, version) = render_sequence(&texts, framed.total(), config)?;

    let fast = encode_gif(&images, config.delay_ms(Pace::Fast))?;
    let slow = encode_gif(&images, config.delay_ms(Pace::Slow))?;
    debug!(version, images = images.len(), fast_bytes = fast.len(), slow_bytes = slow.len(), "gifs encoded");

    Ok(RenderedGifs { version, images: images.len(), fast, slow })
}
