use crate::utils::constants::PALETTE_SIZE;

/// Global Fahrenheit min/max over the pages that carried a reading.
///
/// Built once by the pre-scan, read-only afterwards. `Empty` means no page in
/// the range had a valid temperature; the overlay then falls back to palette
/// index 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureRange {
    Empty,
    Span { min: f32, max: f32 },
}

impl TemperatureRange {
    /// Fold one valid Fahrenheit reading into the range.
    pub fn observe(&mut self, fahrenheit: f32) {
        *self = match *self {
            TemperatureRange::Empty => TemperatureRange::Span {
                min: fahrenheit,
                max: fahrenheit,
            },
            TemperatureRange::Span { min, max } => TemperatureRange::Span {
                min: min.min(fahrenheit),
                max: max.max(fahrenheit),
            },
        };
    }

    pub fn min(&self) -> Option<f32> {
        match self {
            TemperatureRange::Empty => None,
            TemperatureRange::Span { min, .. } => Some(*min),
        }
    }

    pub fn max(&self) -> Option<f32> {
        match self {
            TemperatureRange::Empty => None,
            TemperatureRange::Span { max, .. } => Some(*max),
        }
    }

    /// Map a Fahrenheit reading to a palette index in `[0, 254]`.
    ///
    /// A zero-width range (all readings equal) maps everything to index 0.
    pub fn palette_index(&self, fahrenheit: f32) -> usize {
        let TemperatureRange::Span { min, max } = *self else {
            return 0;
        };
        let span = max - min;
        if span <= 0.0 {
            return 0;
        }
        let scaled = (PALETTE_SIZE as f32 * (fahrenheit - min) / span).round();
        (scaled.max(0.0) as usize).min(PALETTE_SIZE - 1)
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        TemperatureRange::Empty
    }
}
