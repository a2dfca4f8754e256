use crate::error::{Result, SlgError};
use crate::models::ImageBuffer;
use image::RgbImage;
use std::path::Path;
use tracing::info;

/// Raster sink: encode a finished tile buffer as an 8-bit RGB PNG.
pub fn write_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    let raster = RgbImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.to_raw_rgb(),
    )
    .ok_or_else(|| SlgError::Allocation {
        context: format!(
            "{}x{} raster for {}",
            image.width(),
            image.height(),
            path.display()
        ),
    })?;

    raster.save(path)?;
    info!(path = %path.display(), "image written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;
    use tempfile::TempDir;

    #[test]
    fn test_writes_decodable_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strip_output_0.png");

        let mut buffer = ImageBuffer::new(3, 2).unwrap();
        buffer.set(0, 0, Rgb::new(255, 0, 0));
        buffer.set(1, 2, Rgb::new(0, 0, 255));
        write_png(&buffer, &path).unwrap();

        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back.dimensions(), (3, 2));
        assert_eq!(back.get_pixel(0, 0), &image::Rgb([255, 0, 0]));
        assert_eq!(back.get_pixel(2, 1), &image::Rgb([0, 0, 255]));
    }
}
