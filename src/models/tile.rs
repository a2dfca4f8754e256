use crate::utils::constants::{FILE_HEADER_SIZE, PAGE_SIZE};

/// One contiguous slice of the page range, assigned to a single worker and
/// producing one output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// First page of the tile, as an absolute page number in the file
    pub start_page: usize,
    pub page_count: usize,
    /// Position of this tile's image in launch order, used for the filename
    pub image_index: usize,
}

impl Tile {
    /// Byte offset of the tile's first page within the stream.
    pub fn byte_offset(&self) -> usize {
        FILE_HEADER_SIZE + self.start_page * PAGE_SIZE
    }

    pub fn byte_len(&self) -> usize {
        self.page_count * PAGE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_addressing() {
        let tile = Tile {
            start_page: 3,
            page_count: 2,
            image_index: 0,
        };
        assert_eq!(tile.byte_offset(), FILE_HEADER_SIZE + 3 * PAGE_SIZE);
        assert_eq!(tile.byte_len(), 2 * PAGE_SIZE);
    }
}
