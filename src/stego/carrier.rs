//! # Carrier Images
//!
//! A [`Carrier`] is the in-memory pixel data hosting the hidden bits: a width,
//! a height, a [`ColorMode`] and a flat, interleaved buffer of 8-bit channels.
//! Carriers are immutable; encoding always produces a new one.

use std::fmt;

use serde::Serialize;

use super::error::StegoError;

/// Channel layout of a carrier's pixels.
///
/// Only [`ColorMode::Rgb`] and [`ColorMode::Rgba`] can host a message. The
/// grayscale modes are representable so that the core itself rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorMode {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ColorMode {
    /// Number of 8-bit channels per pixel.
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Luma => 1,
            ColorMode::LumaAlpha => 2,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    /// Whether messages can be embedded in (or read from) this mode.
    pub fn is_supported(self) -> bool {
        matches!(self, ColorMode::Rgb | ColorMode::Rgba)
    }

    /// Fail with [`StegoError::InvalidColorMode`] unless the mode is RGB or RGBA.
    pub fn ensure_supported(self) -> Result<(), StegoError> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(StegoError::InvalidColorMode(self.to_string()))
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Luma => "L",
            ColorMode::LumaAlpha => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
        };
        f.write_str(name)
    }
}

/// Pixel data of a carrier image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    width: u32,
    height: u32,
    mode: ColorMode,
    data: Vec<u8>,
}

impl Carrier {
    /// Build a carrier from a raw interleaved buffer.
    ///
    /// # Errors
    /// - [`StegoError::DimensionsTooLarge`] if the buffer size overflows `usize`
    /// - [`StegoError::BufferSizeMismatch`] if `data.len()` is not
    ///   `width * height * mode.channels()`
    pub fn new(
        width: u32,
        height: u32,
        mode: ColorMode,
        data: Vec<u8>,
    ) -> Result<Self, StegoError> {
        let expected = buffer_len(width, height, mode)?;
        if data.len() != expected {
            return Err(StegoError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            mode,
            data,
        })
    }

    /// Build a carrier by evaluating `f` for every pixel, row by row.
    ///
    /// `f` must return exactly `mode.channels()` values.
    pub fn from_fn<F>(
        width: u32,
        height: u32,
        mode: ColorMode,
        mut f: F,
    ) -> Result<Self, StegoError>
    where
        F: FnMut(u32, u32) -> Vec<u8>,
    {
        let mut data = Vec::with_capacity(buffer_len(width, height, mode)?);
        for y in 0..height {
            for x in 0..width {
                data.extend(f(x, y));
            }
        }
        Self::new(width, height, mode, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Number of pixels (width × height).
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Pixels in natural order, each as a slice of its channel values.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.mode.channels())
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Bytes needed for a `width` × `height` buffer in `mode`.
fn buffer_len(width: u32, height: u32, mode: ColorMode) -> Result<usize, StegoError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(mode.channels()))
        .ok_or(StegoError::DimensionsTooLarge { width, height })
}
