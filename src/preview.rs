//! Terminal image preview.
//!
//! Images are decoded once and drawn with half blocks: each terminal cell
//! shows two stacked pixels, the top one as the `▀` foreground and the bottom
//! one as the background.

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage, imageops::FilterType};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

const UPPER_HALF_BLOCK: &str = "▀";

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("could not load image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// The decoded image for the current track, plus the last rendered frame.
#[derive(Default)]
pub struct ImagePreview {
    source: Option<Result<DynamicImage, String>>,
    cached: Option<((u16, u16), Vec<Line<'static>>)>,
}

impl ImagePreview {
    /// Decode the image at `path`, replacing whatever was loaded before.
    ///
    /// Decode failures are kept and shown in place of the image.
    pub fn load(&mut self, path: &Path) {
        self.cached = None;
        self.source = Some(decode(path).map_err(|err| {
            tracing::warn!(%err, "image preview failed");
            err.to_string()
        }));
    }

    pub fn clear(&mut self) {
        self.source = None;
        self.cached = None;
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.source, Some(Ok(_)))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.source {
            Some(Err(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Render the image to fit inside `width` x `height` cells.
    ///
    /// Returns an empty frame when nothing is loaded or the area is empty.
    pub fn lines(&mut self, width: u16, height: u16) -> &[Line<'static>] {
        let fresh = !matches!(&self.cached, Some((size, _)) if *size == (width, height));
        if fresh {
            let lines = match &self.source {
                Some(Ok(img)) if width > 0 && height > 0 => render_half_blocks(img, width, height),
                _ => Vec::new(),
            };
            self.cached = Some(((width, height), lines));
        }

        self.cached
            .as_ref()
            .map(|(_, lines)| lines.as_slice())
            .unwrap_or(&[])
    }
}

fn decode(path: &Path) -> Result<DynamicImage, PreviewError> {
    image::open(path).map_err(|source| PreviewError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Scale `img` into `width` columns by `2 * height` pixel rows, keeping its
/// aspect ratio, and center it horizontally.
fn render_half_blocks(img: &DynamicImage, width: u16, height: u16) -> Vec<Line<'static>> {
    let rgb: RgbImage = img
        .resize(u32::from(width), u32::from(height) * 2, FilterType::Triangle)
        .to_rgb8();
    let (w, h) = rgb.dimensions();
    let pad = (u32::from(width).saturating_sub(w) / 2) as usize;

    (0..h.div_ceil(2))
        .map(|row| {
            let mut spans = Vec::with_capacity(w as usize + 1);
            if pad > 0 {
                spans.push(Span::raw(" ".repeat(pad)));
            }
            for x in 0..w {
                let top = rgb.get_pixel(x, row * 2).0;
                let style = match rgb.get_pixel_checked(x, row * 2 + 1) {
                    Some(bottom) => Style::default().fg(rgb_color(top)).bg(rgb_color(bottom.0)),
                    None => Style::default().fg(rgb_color(top)),
                };
                spans.push(Span::styled(UPPER_HALF_BLOCK, style));
            }
            Line::from(spans)
        })
        .collect()
}

fn rgb_color([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}
