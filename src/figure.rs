//! In-memory rendering surface returned by every render call

use crate::error::{Result, VizError};
use std::path::Path;

/// A rendered figure: an RGB8 pixel buffer plus its dimensions.
///
/// Each render call allocates a fresh Figure and hands ownership to the
/// caller; the crate retains nothing across calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Figure {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl std::fmt::Debug for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Figure")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

impl Figure {
    /// Required buffer length in bytes for a surface of the given size
    pub(crate) fn buffer_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 3
    }

    pub(crate) fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), Self::buffer_len(width, height));
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB8 pixel data, row-major from the top-left corner
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGB triple at pixel `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        (
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        )
    }

    /// Encode the figure as PNG at `path`
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let img = image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| {
                VizError::Render("pixel buffer does not match figure dimensions".to_string())
            })?;
        img.save(path)?;
        Ok(())
    }
}
