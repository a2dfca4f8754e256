/// SLG file layout
pub const FILE_HEADER_SIZE: usize = 8;
pub const PAGE_SIZE: usize = 2610;
pub const PAGE_HEADER_SIZE: usize = 50;
pub const ECHOGRAM_SIZE: usize = PAGE_SIZE - PAGE_HEADER_SIZE;
/// Extra header bytes carried by the GPS-variant page kinds
pub const GPS_HEADER_EXTRA: usize = 20;

/// Page kind tags (upper 16 bits of the flags field)
pub const KIND_TEMPERATURE: u16 = 0x2c11;
pub const KIND_TEMPERATURE_GPS: u16 = 0x6d14;
pub const KIND_GPS_VARIANT: u16 = 0x6d04;

/// Sentinel recorded for pages without a usable temperature reading
pub const TEMPERATURE_SENTINEL: f32 = -100.0;

/// Image synthesis
pub const BRIGHTNESS_OFFSET: i32 = -245;
pub const BACKGROUND_LUMA: u8 = 200;
/// Height of the temperature strip at the bottom of each column
pub const OVERLAY_ROWS: usize = 30;
pub const PALETTE_SIZE: usize = 255;

/// Decimation stride per 10 m depth bucket
pub const REDUCTION_FACTORS: [f32; 10] = [
    20.0,
    16.0,
    8.0,
    5.7,
    4.0,
    4.15,
    3.15,
    16.0 / 7.0,
    2.0,
    2.0,
];
/// Smallest entry of the table above; bounds the output row count
pub const MIN_REDUCTION_FACTOR: f32 = 2.0;

/// Processing defaults
pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_PAGE_COUNT: usize = 5000;
pub const DEFAULT_MAX_IMAGE_PAGES: usize = 500;
/// A start offset must leave at least this many pages in the file
pub const MIN_TRAILING_PAGES: usize = 10;
