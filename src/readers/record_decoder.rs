use crate::error::{Result, SlgError};
use crate::models::PageHeader;
use crate::utils::constants::{GPS_HEADER_EXTRA, PAGE_HEADER_SIZE, PAGE_SIZE};
use byteorder::{ByteOrder, LittleEndian};

/// One decoded sonar page: header fields plus a borrowed view of the
/// echogram sample region.
#[derive(Debug)]
pub struct DecodedPage<'a> {
    pub header: PageHeader,
    pub samples: &'a [u8],
}

/// Extract the fixed-offset header fields from the front of a page block.
///
/// The format carries no checksums; length is the only thing validated.
pub fn decode_header(block: &[u8]) -> Result<PageHeader> {
    if block.len() < PAGE_HEADER_SIZE {
        return Err(SlgError::Parse(format!(
            "page header needs {PAGE_HEADER_SIZE} bytes, got {}",
            block.len()
        )));
    }

    Ok(PageHeader {
        flags: LittleEndian::read_u32(&block[0..4]),
        depth_limit_bottom: LittleEndian::read_f32(&block[4..8]),
        depth_hard: LittleEndian::read_f32(&block[8..12]),
        temperature_raw: LittleEndian::read_f32(&block[12..16]),
        raw_latitude: LittleEndian::read_u32(&block[16..20]),
        raw_longitude: LittleEndian::read_u32(&block[20..24]),
    })
}

/// Decode a full fixed-size page into header plus sample region.
///
/// The sample region starts right after the 50-byte header, or 20 bytes
/// later for the two GPS-variant kinds.
pub fn decode_page(block: &[u8]) -> Result<DecodedPage<'_>> {
    if block.len() < PAGE_SIZE {
        return Err(SlgError::Parse(format!(
            "page record needs {PAGE_SIZE} bytes, got {}",
            block.len()
        )));
    }

    let header = decode_header(block)?;
    let start = if header.kind().has_extended_header() {
        PAGE_HEADER_SIZE + GPS_HEADER_EXTRA
    } else {
        PAGE_HEADER_SIZE
    };

    Ok(DecodedPage {
        header,
        samples: &block[start..PAGE_SIZE],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KindTag;
    use crate::utils::constants::ECHOGRAM_SIZE;

    fn page_block(kind: u16, temperature_c: f32, depth: f32, fill: u8) -> Vec<u8> {
        let mut block = vec![fill; PAGE_SIZE];
        LittleEndian::write_u32(&mut block[0..4], (kind as u32) << 16);
        LittleEndian::write_f32(&mut block[4..8], depth);
        LittleEndian::write_f32(&mut block[8..12], depth - 1.0);
        LittleEndian::write_f32(&mut block[12..16], temperature_c);
        LittleEndian::write_u32(&mut block[16..20], 4_000_000);
        LittleEndian::write_u32(&mut block[20..24], 500_000);
        block
    }

    #[test]
    fn test_decode_header_fields() {
        let block = page_block(0x2c11, 21.5, 33.0, 0);
        let header = decode_header(&block).unwrap();
        assert_eq!(header.kind(), KindTag::Temperature);
        assert_eq!(header.depth_limit_bottom, 33.0);
        assert_eq!(header.depth_hard, 32.0);
        assert_eq!(header.temperature_raw, 21.5);
        assert_eq!(header.raw_latitude, 4_000_000);
        assert_eq!(header.raw_longitude, 500_000);
    }

    #[test]
    fn test_sample_region_offset_per_variant() {
        let plain = page_block(0x2c11, 0.0, 0.0, 7);
        let decoded = decode_page(&plain).unwrap();
        assert_eq!(decoded.samples.len(), ECHOGRAM_SIZE);

        for kind in [0x6d14, 0x6d04] {
            let gps = page_block(kind, 0.0, 0.0, 7);
            let decoded = decode_page(&gps).unwrap();
            assert_eq!(decoded.samples.len(), ECHOGRAM_SIZE - GPS_HEADER_EXTRA);
        }
    }

    #[test]
    fn test_short_blocks_are_parse_errors() {
        assert!(matches!(
            decode_header(&[0u8; PAGE_HEADER_SIZE - 1]),
            Err(SlgError::Parse(_))
        ));
        assert!(matches!(
            decode_page(&vec![0u8; PAGE_SIZE - 1]),
            Err(SlgError::Parse(_))
        ));
        assert!(decode_header(&[0u8; PAGE_HEADER_SIZE]).is_ok());
    }
}
