use crate::utils::constants::{
    KIND_GPS_VARIANT, KIND_TEMPERATURE, KIND_TEMPERATURE_GPS, TEMPERATURE_SENTINEL,
};
use crate::utils::geodetic;

/// Page kind, taken from the upper 16 bits of the flags field.
///
/// The kind selects the header-variant layout and which telemetry fields
/// carry meaningful data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindTag {
    /// `0x2c11`: temperature reading only
    Temperature,
    /// `0x6d14`: temperature reading plus GPS position
    TemperatureGps,
    /// `0x6d04`: GPS-variant header offset, no usable telemetry
    GpsVariant,
    /// Anything else the device emits
    Other(u16),
}

impl KindTag {
    pub fn from_flags(flags: u32) -> Self {
        match (flags >> 16) as u16 {
            KIND_TEMPERATURE => KindTag::Temperature,
            KIND_TEMPERATURE_GPS => KindTag::TemperatureGps,
            KIND_GPS_VARIANT => KindTag::GpsVariant,
            other => KindTag::Other(other),
        }
    }

    pub fn raw(&self) -> u16 {
        match self {
            KindTag::Temperature => KIND_TEMPERATURE,
            KindTag::TemperatureGps => KIND_TEMPERATURE_GPS,
            KindTag::GpsVariant => KIND_GPS_VARIANT,
            KindTag::Other(raw) => *raw,
        }
    }

    /// The temperature field holds a real reading.
    pub fn has_temperature(&self) -> bool {
        matches!(self, KindTag::Temperature | KindTag::TemperatureGps)
    }

    /// The raw latitude/longitude fields hold a real position.
    pub fn has_position(&self) -> bool {
        matches!(self, KindTag::TemperatureGps)
    }

    /// The echogram sample region starts 20 bytes later for these kinds.
    pub fn has_extended_header(&self) -> bool {
        matches!(self, KindTag::TemperatureGps | KindTag::GpsVariant)
    }
}

/// Decoded fixed-offset header fields of one raw sonar page.
#[derive(Debug, Clone, Copy)]
pub struct PageHeader {
    pub flags: u32,
    pub depth_limit_bottom: f32,
    pub depth_hard: f32,
    pub temperature_raw: f32,
    pub raw_latitude: u32,
    pub raw_longitude: u32,
}

impl PageHeader {
    pub fn kind(&self) -> KindTag {
        KindTag::from_flags(self.flags)
    }
}

/// Per-page telemetry derived by the pre-scan.
///
/// Temperature fields are populated only for kinds that carry a reading;
/// every other page holds the −100 sentinel and must stay out of the range
/// computation. Positions are populated only for the GPS-bearing kind.
#[derive(Debug, Clone, Copy)]
pub struct ProcessedPage {
    /// Zero-based index within the processing range (not the file)
    pub ordinal: usize,
    pub kind: KindTag,
    pub temperature_c: f32,
    pub temperature_f: f32,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_hard: f32,
    pub depth_limit_bottom: f32,
}

impl ProcessedPage {
    pub fn from_header(ordinal: usize, header: &PageHeader) -> Self {
        let kind = header.kind();

        let (temperature_c, temperature_f) = if kind.has_temperature() {
            (header.temperature_raw, 1.8 * header.temperature_raw + 32.0)
        } else {
            (TEMPERATURE_SENTINEL, TEMPERATURE_SENTINEL)
        };

        let (latitude, longitude) = if kind.has_position() {
            (
                geodetic::latitude_from_raw(header.raw_latitude as i32),
                geodetic::longitude_from_raw(header.raw_longitude as i32),
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            ordinal,
            kind,
            temperature_c,
            temperature_f,
            latitude,
            longitude,
            depth_hard: header.depth_hard,
            depth_limit_bottom: header.depth_limit_bottom,
        }
    }

    pub fn has_temperature(&self) -> bool {
        self.kind.has_temperature()
    }
}
