use crate::error::{Result, SlgError};
use crate::models::ProcessedPage;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct TelemetryRow {
    ordinal: usize,
    kind: String,
    depth_limit_bottom: f32,
    depth_hard: f32,
    temperature_c: f32,
    temperature_f: f32,
    latitude: f64,
    longitude: f64,
}

impl From<&ProcessedPage> for TelemetryRow {
    fn from(page: &ProcessedPage) -> Self {
        Self {
            ordinal: page.ordinal,
            kind: format!("{:#06x}", page.kind.raw()),
            depth_limit_bottom: page.depth_limit_bottom,
            depth_hard: page.depth_hard,
            temperature_c: page.temperature_c,
            temperature_f: page.temperature_f,
            latitude: page.latitude,
            longitude: page.longitude,
        }
    }
}

/// Export the pre-scan telemetry as CSV, one row per page.
pub fn write_telemetry(path: &Path, pages: &[ProcessedPage]) -> Result<()> {
    let file = File::create(path).map_err(|source| SlgError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    for page in pages {
        writer.serialize(TelemetryRow::from(page))?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = pages.len(), "telemetry CSV written");
    Ok(())
}
