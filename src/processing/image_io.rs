//! # Image I/O
//!
//! Bridges the `image` crate and [`Carrier`]: decoding files or bytes into
//! pixel buffers and writing carriers back out.
//!
//! 8-bit grayscale images are loaded as-is so the steganography core can
//! reject them; any other sample depth is reported as an invalid color mode.

use std::io::Cursor;
use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat};
use log::{debug, warn};

use crate::stego::{Carrier, ColorMode, StegoError};

/// Convert a decoded image into a carrier.
pub fn carrier_from_image(img: DynamicImage) -> Result<Carrier> {
    let (width, height) = img.dimensions();

    let (mode, data) = match img {
        DynamicImage::ImageRgb8(buf) => (ColorMode::Rgb, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (ColorMode::Rgba, buf.into_raw()),
        DynamicImage::ImageLuma8(buf) => (ColorMode::Luma, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (ColorMode::LumaAlpha, buf.into_raw()),
        other => {
            return Err(StegoError::InvalidColorMode(format!("{:?}", other.color())).into());
        }
    };

    Ok(Carrier::new(width, height, mode, data)?)
}

/// Convert a carrier back into an image of the same dimensions and mode.
pub fn carrier_to_image(carrier: Carrier) -> Result<DynamicImage> {
    let (width, height, mode) = (carrier.width(), carrier.height(), carrier.mode());
    let data = carrier.into_raw();

    let img = match mode {
        ColorMode::Rgb => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        ColorMode::Rgba => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
        ColorMode::Luma => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        ColorMode::LumaAlpha => {
            ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLumaA8)
        }
    };

    img.with_context(|| format!("pixel buffer does not fit a {}x{} {} image", width, height, mode))
}

/// Load a carrier from an image file (PNG, BMP, JPEG, ...).
pub fn load_carrier<P: AsRef<Path>>(path: P) -> Result<Carrier> {
    let path = path.as_ref();
    let img =
        image::open(path).with_context(|| format!("failed to open image {}", path.display()))?;
    let (width, height) = img.dimensions();
    debug!("Loaded {} ({}x{}, {:?})", path.display(), width, height, img.color());
    carrier_from_image(img)
}

/// Load a carrier from encoded image bytes.
pub fn load_carrier_from_memory(bytes: &[u8]) -> Result<Carrier> {
    let img = image::load_from_memory(bytes).context("failed to decode image data")?;
    carrier_from_image(img)
}

/// Formats whose compression rewrites pixel values and so destroys LSB payloads.
pub fn is_lossy(format: ImageFormat) -> bool {
    matches!(format, ImageFormat::Jpeg)
}

/// Save a carrier to `path`, picking the format from the file extension.
///
/// Saving to a lossy format fails unless `allow_lossy` is set, in which case
/// the file is written with a warning.
pub fn save_carrier<P: AsRef<Path>>(carrier: Carrier, path: P, allow_lossy: bool) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)
        .with_context(|| format!("cannot infer image format from {}", path.display()))?;

    if is_lossy(format) {
        if !allow_lossy {
            bail!(
                "refusing to save to lossy format {:?} ({}): the hidden message would be destroyed",
                format,
                path.display()
            );
        }
        warn!(
            "Saving to lossy format {:?}; the hidden message will likely not survive",
            format
        );
    }

    carrier_to_image(carrier)?
        .save_with_format(path, format)
        .with_context(|| format!("failed to save image {}", path.display()))?;

    debug!("Saved {} as {:?}", path.display(), format);
    Ok(())
}

/// Encode a carrier as PNG bytes.
pub fn carrier_to_png_bytes(carrier: Carrier) -> Result<Vec<u8>> {
    let mut output_bytes = Vec::new();
    carrier_to_image(carrier)?
        .write_to(&mut Cursor::new(&mut output_bytes), ImageFormat::Png)
        .context("failed to encode PNG")?;
    Ok(output_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, Rgb32FImage, RgbImage};

    #[test]
    fn test_rgb_image_becomes_rgb_carrier() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 9]));
        let carrier = carrier_from_image(DynamicImage::ImageRgb8(img.clone())).unwrap();

        assert_eq!(carrier.mode(), ColorMode::Rgb);
        assert_eq!(carrier.pixel_count(), 6);
        assert_eq!(carrier.as_raw(), img.as_raw().as_slice());

        let back = carrier_to_image(carrier).unwrap();
        assert_eq!(back.to_rgb8(), img);
    }

    #[test]
    fn test_grayscale_loads_as_luma() {
        let img = image::GrayImage::from_pixel(2, 2, Luma([5]));
        let carrier = carrier_from_image(DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(carrier.mode(), ColorMode::Luma);
    }

    #[test]
    fn test_float_image_is_invalid_mode() {
        let img = Rgb32FImage::new(2, 2);
        let err = carrier_from_image(DynamicImage::ImageRgb32F(img)).unwrap_err();

        match err.downcast_ref::<StegoError>() {
            Some(StegoError::InvalidColorMode(name)) => assert_eq!(name, "Rgb32F"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_png_bytes_round_trip() {
        let carrier = Carrier::new(2, 1, ColorMode::Rgba, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let bytes = carrier_to_png_bytes(carrier.clone()).unwrap();
        assert_eq!(load_carrier_from_memory(&bytes).unwrap(), carrier);
    }

    #[test]
    fn test_refuses_jpeg_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let carrier = Carrier::new(1, 1, ColorMode::Rgb, vec![0, 0, 0]).unwrap();

        assert!(save_carrier(carrier, &path, false).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_writes_jpeg_when_lossy_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let carrier = Carrier::new(8, 8, ColorMode::Rgb, vec![120; 192]).unwrap();

        save_carrier(carrier, &path, true).unwrap();

        assert!(path.exists());
        let reloaded = load_carrier(&path).unwrap();
        assert_eq!(reloaded.mode(), ColorMode::Rgb);
        assert_eq!(reloaded.pixel_count(), 64);
    }
}
