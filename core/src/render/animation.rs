//! Animated GIF assembly.

use std::borrow::Cow;

use gif::{Encoder, Frame, Repeat};
use image::GrayImage;

use crate::render::types::RenderError;

/// White, black.
const PALETTE: [u8; 6] = [0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00];

/// Convert a delay in milliseconds to GIF centiseconds (at least 1).
#[inline]
pub fn delay_cs(delay_ms: u32) -> u16 {
    (delay_ms / 10).clamp(1, u32::from(u16::MAX)) as u16
}

/// Size of the canvas that holds every image.
pub fn canvas_size(images: &[GrayImage]) -> Result<(u16, u16), RenderError> {
    let width = images.iter().map(GrayImage::width).max().unwrap_or(0);
    let height = images.iter().map(GrayImage::height).max().unwrap_or(0);
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(RenderError::CanvasTooLarge { width, height }),
    }
}

/// Map an image onto the canvas as palette indices. Smaller images sit in
/// the top-left corner on white.
fn to_indices(img: &GrayImage, width: u16, height: u16) -> Vec<u8> {
    let (w, h) = (usize::from(width), usize::from(height));
    let mut buf = vec![0u8; w * h];
    for (x, y, px) in img.enumerate_pixels() {
        if px.0[0] < 0x80 {
            buf[y as usize * w + x as usize] = 1;
        }
    }
    buf
}

/// Encode `images` as an endlessly looping GIF with a fixed per-frame delay.
pub fn encode_gif(images: &[GrayImage], delay_ms: u32) -> Result<Vec<u8>, RenderError> {
    if images.is_empty() {
        return Err(RenderError::NoFrames);
    }
    let (width, height) = canvas_size(images)?;
    let delay = delay_cs(delay_ms);

    let mut output = Vec::new();
    {
        let mut encoder = Encoder::new(&mut output, width, height, &PALETTE)?;
        encoder.set_repeat(Repeat::Infinite)?;

        for img in images {
            let frame = Frame {
                width,
                height,
                delay,
                buffer: Cow::Owned(to_indices(img, width, height)),
                ..Frame::default()
            };
            encoder.write_frame(&frame)?;
        }
    }

    Ok(output)
}
