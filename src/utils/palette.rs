use crate::models::Rgb;
use crate::utils::constants::PALETTE_SIZE;

/// Build the 255-entry temperature palette.
///
/// The table reproduces the gradient burned into the original plotter
/// firmware: a "warm" half (red 255, green 0, blue ramping up from 97) and a
/// "cool" half (red stepping down by 2, green up by 2, blue 255). Once the
/// warm-half ramp value passes 192 its step widens to 2; that quirk is part
/// of the device's gradient and is kept as-is. The finished ramp is reversed
/// into the output, so index 0 is the coolest color and 254 the warmest.
pub fn generate_palette() -> Vec<Rgb> {
    let mut ramp = Vec::with_capacity(PALETTE_SIZE);

    let mut blue = 96i32;
    for _ in 0..127 {
        blue += 1;
        if blue > 192 {
            blue += 1;
        }
        ramp.push(Rgb::new(255, 0, blue.clamp(0, 255) as u8));
    }

    for i in 127..PALETTE_SIZE as i32 {
        let red = (255 - 2 * (i - 126)).clamp(0, 255) as u8;
        let green = (2 * (i - 126)).clamp(0, 255) as u8;
        ramp.push(Rgb::new(red, green, 255));
    }

    ramp.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palette_has_exactly_255_entries() {
        assert_eq!(generate_palette().len(), PALETTE_SIZE);
    }

    #[test]
    fn test_palette_endpoints() {
        let palette = generate_palette();
        // Coolest entry: red fully stepped down (clamped), green saturated.
        assert_eq!(palette[0], Rgb::new(0, 255, 255));
        // Warmest entry: start of the original warm ramp.
        assert_eq!(palette[PALETTE_SIZE - 1], Rgb::new(255, 0, 97));
    }

    #[test]
    fn test_warm_half_ramp_quirk() {
        let palette = generate_palette();
        // Pre-reversal index i maps to output index 254 - i.
        let ramp_at = |i: usize| palette[PALETTE_SIZE - 1 - i];

        // Unit steps until the ramp value passes 192 at index 96.
        assert_eq!(ramp_at(0), Rgb::new(255, 0, 97));
        assert_eq!(ramp_at(95), Rgb::new(255, 0, 192));
        // From there the step is 2.
        assert_eq!(ramp_at(96), Rgb::new(255, 0, 194));
        assert_eq!(ramp_at(126), Rgb::new(255, 0, 254));
        // First cool entry.
        assert_eq!(ramp_at(127), Rgb::new(253, 2, 255));
    }
}
