use crate::error::{Result, SlgError};
use crate::models::{ProcessedPage, TemperatureRange};
use crate::readers::record_decoder;
use crate::utils::constants::{FILE_HEADER_SIZE, PAGE_HEADER_SIZE, PAGE_SIZE};
use tracing::debug;

/// Output of the sequential pre-scan: one record per page in order, plus the
/// global temperature range used for overlay normalization.
#[derive(Debug)]
pub struct PageScan {
    pub pages: Vec<ProcessedPage>,
    pub range: TemperatureRange,
}

/// Walk the headers of `total_pages` pages starting at `start_page`.
///
/// Only the 50-byte header region of each page is touched; the sample
/// regions are skipped entirely. Must complete before any tile worker
/// starts, since workers normalize against the resulting range.
pub fn scan(data: &[u8], start_page: usize, total_pages: usize) -> Result<PageScan> {
    let mut pages = Vec::with_capacity(total_pages);
    let mut range = TemperatureRange::default();

    for ordinal in 0..total_pages {
        let offset = FILE_HEADER_SIZE + (start_page + ordinal) * PAGE_SIZE;
        let block = data
            .get(offset..offset + PAGE_HEADER_SIZE)
            .ok_or(SlgError::ReadShortfall {
                offset,
                expected: PAGE_HEADER_SIZE,
                available: data.len().saturating_sub(offset),
            })?;

        let header = record_decoder::decode_header(block)?;
        let page = ProcessedPage::from_header(ordinal, &header);

        if page.has_temperature() {
            range.observe(page.temperature_f);
        }
        pages.push(page);
    }

    debug!(
        pages = pages.len(),
        min = ?range.min(),
        max = ?range.max(),
        "header scan complete"
    );

    Ok(PageScan { pages, range })
}
