use crate::error::{Result, SlgError};
use crate::utils::constants::{FILE_HEADER_SIZE, MIN_TRAILING_PAGES, PAGE_SIZE};
use byteorder::{ByteOrder, LittleEndian};
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The 8-byte header the recorder writes at stream offset 8.
#[derive(Debug, Clone, Copy)]
pub struct FileHeader {
    pub page_size: u32,
    pub tag: [u8; 4],
}

/// A memory-mapped SLG input file.
///
/// Mapping the file once gives every worker positional access to its own
/// byte range, so no shared read cursor exists anywhere in the pipeline.
#[derive(Debug)]
pub struct SlgFile {
    path: PathBuf,
    mmap: Mmap,
}

impl SlgFile {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| SlgError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let size = file
            .metadata()
            .map_err(|source| SlgError::FileSize {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        if size <= 2 * PAGE_SIZE as u64 {
            return Err(SlgError::InsufficientData {
                path: path.to_path_buf(),
                size,
            });
        }

        // Read-only map; the file is a closed, finite byte range.
        let mmap = unsafe { Mmap::map(&file)? };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &[u8] {
        &self.mmap
    }

    /// Total sonar pages available in the file.
    pub fn page_count(&self) -> usize {
        self.mmap.len() / PAGE_SIZE - 1
    }

    /// Decode the stream header at offset 8.
    pub fn file_header(&self) -> Result<FileHeader> {
        let bytes = self
            .mmap
            .get(FILE_HEADER_SIZE..2 * FILE_HEADER_SIZE)
            .ok_or(SlgError::ReadShortfall {
                offset: FILE_HEADER_SIZE,
                expected: FILE_HEADER_SIZE,
                available: self.mmap.len().saturating_sub(FILE_HEADER_SIZE),
            })?;

        let mut tag = [0u8; 4];
        tag.copy_from_slice(&bytes[4..8]);
        Ok(FileHeader {
            page_size: LittleEndian::read_u32(&bytes[0..4]),
            tag,
        })
    }

    /// Validate a requested page range against the file.
    ///
    /// A range running past the end of the file is fatal, as is an offset
    /// leaving fewer than 10 pages; there is no silent partial run.
    pub fn resolve_range(&self, offset: usize, requested: usize) -> Result<(usize, usize)> {
        let available = self.page_count();

        if offset + MIN_TRAILING_PAGES > available || offset + requested > available {
            return Err(SlgError::RangeOutOfBounds {
                offset,
                requested,
                available,
            });
        }

        Ok((offset, requested))
    }
}
