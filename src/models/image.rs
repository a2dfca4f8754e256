use crate::error::{Result, SlgError};
use crate::utils::constants::BACKGROUND_LUMA;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(luma: u8) -> Self {
        Self::new(luma, luma, luma)
    }
}

/// Row-major RGB pixel grid for one tile.
///
/// Columns correspond to pages, rows to decimated depth samples
/// (depth-major, time-minor). Freshly created buffers are filled with the
/// background gray the device shows for unsampled water.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl ImageBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(width * height)
            .map_err(|_| SlgError::Allocation {
                context: format!("{width}x{height} pixel buffer"),
            })?;
        pixels.resize(width * height, Rgb::gray(BACKGROUND_LUMA));

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set(&mut self, row: usize, col: usize, pixel: Rgb) {
        debug_assert!(row < self.height && col < self.width);
        self.pixels[row * self.width + col] = pixel;
    }

    pub fn get(&self, row: usize, col: usize) -> Rgb {
        debug_assert!(row < self.height && col < self.width);
        self.pixels[row * self.width + col]
    }

    /// Drop rows below `rows`, keeping the top of the grid.
    pub fn truncate_height(&mut self, rows: usize) {
        if rows < self.height {
            self.pixels.truncate(rows * self.width);
            self.height = rows;
        }
    }

    /// Flatten to interleaved 8-bit RGB bytes for the raster encoder.
    pub fn to_raw_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            bytes.extend_from_slice(&[px.r, px.g, px.b]);
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_background_gray() {
        let img = ImageBuffer::new(4, 3).unwrap();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
        assert_eq!(img.get(2, 3), Rgb::gray(BACKGROUND_LUMA));
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut img = ImageBuffer::new(2, 2).unwrap();
        img.set(1, 0, Rgb::new(1, 2, 3));
        assert_eq!(img.get(1, 0), Rgb::new(1, 2, 3));
        assert_eq!(img.get(0, 0), Rgb::gray(BACKGROUND_LUMA));
    }

    #[test]
    fn test_truncate_height() {
        let mut img = ImageBuffer::new(3, 10).unwrap();
        img.truncate_height(4);
        assert_eq!(img.height(), 4);
        assert_eq!(img.to_raw_rgb().len(), 3 * 4 * 3);

        // Growing is not supported; truncate is a no-op past the height.
        img.truncate_height(100);
        assert_eq!(img.height(), 4);
    }

    #[test]
    fn test_raw_rgb_interleaving() {
        let mut img = ImageBuffer::new(2, 1).unwrap();
        img.set(0, 0, Rgb::new(10, 20, 30));
        img.set(0, 1, Rgb::new(40, 50, 60));
        assert_eq!(img.to_raw_rgb(), vec![10, 20, 30, 40, 50, 60]);
    }
}
