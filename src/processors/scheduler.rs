use crate::error::{Result, SlgError};
use crate::models::Tile;
use crate::utils::constants::DEFAULT_WORKERS;
use rayon::prelude::*;
use tracing::debug;

/// Splits the page range into tiles and runs them on a bounded worker pool.
///
/// Tiles are issued to a rayon pool of exactly `pool_size` threads, so at
/// most that many are in flight at once; remainder tiles need no special
/// casing. `image_index` is assigned in partition order, which keeps output
/// filenames deterministic no matter how execution interleaves.
pub struct TileScheduler {
    pool_size: usize,
    max_image_pages: usize,
}

impl TileScheduler {
    pub fn new(pool_size: usize) -> Self {
        Self {
            pool_size: pool_size.max(1),
            max_image_pages: 0,
        }
    }

    /// Cap the pages per tile (and so per output image). Zero means divide
    /// the whole range evenly among the pool.
    pub fn with_max_image_pages(mut self, max_image_pages: usize) -> Self {
        self.max_image_pages = max_image_pages;
        self
    }

    /// Partition `[offset, offset + total_pages)` into contiguous,
    /// non-overlapping tiles in ascending order.
    pub fn partition(&self, offset: usize, total_pages: usize) -> Vec<Tile> {
        let tile_size = if self.max_image_pages > 0 {
            self.max_image_pages
        } else {
            (total_pages / self.pool_size).max(1)
        };

        let tile_count = total_pages.div_ceil(tile_size);
        let mut tiles = Vec::with_capacity(tile_count);

        for image_index in 0..tile_count {
            let start = image_index * tile_size;
            tiles.push(Tile {
                start_page: offset + start,
                page_count: tile_size.min(total_pages - start),
                image_index,
            });
        }

        debug!(
            tiles = tiles.len(),
            tile_size,
            pool_size = self.pool_size,
            "page range partitioned"
        );

        tiles
    }

    /// Run one worker per tile with bounded concurrency, stopping at the
    /// first error. Workers see only shared immutable state.
    pub fn run<F>(&self, tiles: &[Tile], worker: F) -> Result<()>
    where
        F: Fn(&Tile) -> Result<()> + Sync + Send,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.pool_size)
            .build()
            .map_err(|e| SlgError::Pool(e.to_string()))?;

        pool.install(|| tiles.par_iter().try_for_each(|tile| worker(tile)))
    }
}

impl Default for TileScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}
