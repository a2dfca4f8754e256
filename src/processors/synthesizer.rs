use crate::error::{Result, SlgError};
use crate::models::{ImageBuffer, ProcessedPage, Rgb, TemperatureRange, Tile};
use crate::readers::record_decoder;
use crate::utils::constants::{
    BRIGHTNESS_OFFSET, ECHOGRAM_SIZE, MIN_REDUCTION_FACTOR, OVERLAY_ROWS, PAGE_SIZE,
    REDUCTION_FACTORS,
};
use tracing::debug;

/// Depth bucket for a bottom-limit depth: one bucket per 10 m, capped at 9.
pub fn depth_bucket(depth_limit_bottom: f32) -> usize {
    if depth_limit_bottom < 10.0 {
        return 0;
    }
    ((depth_limit_bottom / 10.0) as usize).min(REDUCTION_FACTORS.len() - 1)
}

/// Decimation factor applied to a page's sample region.
pub fn reduction_factor(depth_limit_bottom: f32) -> f32 {
    REDUCTION_FACTORS[depth_bucket(depth_limit_bottom)]
}

/// Grayscale intensity for one echogram sample byte.
fn sample_intensity(sample: u8) -> u8 {
    (sample as i32 + BRIGHTNESS_OFFSET).unsigned_abs().min(255) as u8
}

/// Per-tile worker: decodes the tile's pages and renders one image column
/// per page, one row per retained (decimated) sample.
///
/// Holds only shared immutable references; the pre-scan publishes `pages`
/// and `range` before any synthesizer runs, and `data` is the read-only map
/// of the whole stream, addressed positionally per tile.
pub struct ImageSynthesizer<'a> {
    data: &'a [u8],
    pages: &'a [ProcessedPage],
    range: &'a TemperatureRange,
    palette: &'a [Rgb],
    /// First page of the processing range; converts absolute page numbers
    /// into indices of `pages`
    range_offset: usize,
}

impl<'a> ImageSynthesizer<'a> {
    pub fn new(
        data: &'a [u8],
        pages: &'a [ProcessedPage],
        range: &'a TemperatureRange,
        palette: &'a [Rgb],
        range_offset: usize,
    ) -> Self {
        Self {
            data,
            pages,
            range,
            palette,
            range_offset,
        }
    }

    pub fn synthesize(&self, tile: &Tile) -> Result<ImageBuffer> {
        let offset = tile.byte_offset();
        let bytes =
            self.data
                .get(offset..offset + tile.byte_len())
                .ok_or(SlgError::ReadShortfall {
                    offset,
                    expected: tile.byte_len(),
                    available: self.data.len().saturating_sub(offset),
                })?;

        let records = &self.pages[tile.start_page - self.range_offset..][..tile.page_count];

        // Tallest possible column bounds the buffer; trimmed after the fact.
        let max_height = (ECHOGRAM_SIZE as f32 / MIN_REDUCTION_FACTOR) as usize;
        let mut image = ImageBuffer::new(tile.page_count, max_height)?;

        // Seed the overlay from the first valid reading in the tile so that
        // leading sentinel pages still get a plausible strip color.
        let mut palette_index = records
            .iter()
            .find(|r| r.has_temperature())
            .map(|r| self.range.palette_index(r.temperature_f))
            .unwrap_or(0);

        let mut max_rows = 0;
        for (col, block) in bytes.chunks_exact(PAGE_SIZE).enumerate() {
            let page = record_decoder::decode_page(block)?;

            let factor = reduction_factor(page.header.depth_limit_bottom);
            let rows = (page.samples.len() as f32 / factor) as usize;
            let stride = factor as usize;

            if records[col].has_temperature() {
                palette_index = self.range.palette_index(records[col].temperature_f);
            }
            let overlay = self.palette[palette_index];
            let strip_start = rows.saturating_sub(OVERLAY_ROWS);

            for row in 0..rows {
                let pixel = if row >= strip_start {
                    overlay
                } else {
                    Rgb::gray(sample_intensity(page.samples[row * stride]))
                };
                image.set(row, col, pixel);
            }

            max_rows = max_rows.max(rows);
        }

        image.truncate_height(max_rows);
        debug!(
            image_index = tile.image_index,
            width = image.width(),
            height = image.height(),
            "tile synthesized"
        );

        Ok(image)
    }
}
