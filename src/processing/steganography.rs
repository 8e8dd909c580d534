//! # LSB Steganography on Image Files
//!
//! File and byte level entry points: decode an image, hide or recover text
//! with the [`stego`](crate::stego) core, and write the result back.
//!
//! ### Encoding Process
//! 1. Load the image and convert it to a [`Carrier`](crate::stego::Carrier)
//! 2. Embed the text in the LSBs of the RGB channels
//! 3. Save the new image (lossless formats only, unless explicitly allowed)
//!
//! ### Decoding Process
//! 1. Load the image
//! 2. Read the RGB LSBs until the end-of-message terminator
//!
//! ### Capacity
//! An image can store `(width * height * 3 - 16) / 8` characters, where 3 is
//! the number of RGB channels and 16 the length of the terminator.
//!
//! Example: An 800x600 image can store ~180 KB of text.

use std::path::Path;

use anyhow::Result;
use log::{debug, info};

use super::image_io;
use crate::stego::{self, CapacityReport};

/// Embed text into an image file and save the result to `output_path`.
///
/// # Errors
/// - Image cannot be opened or is not RGB/RGBA
/// - Text does not fit, or holds characters above U+00FF
/// - Output format is lossy and `allow_lossy` is false
///
/// # Example
/// ```ignore
/// embed_text("cover.png", "Secret message", "secret.png", false)?;
/// ```
pub fn embed_text<P, Q>(image_path: P, text: &str, output_path: Q, allow_lossy: bool) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let carrier = image_io::load_carrier(&image_path)?;
    let report = CapacityReport::for_carrier(&carrier);
    debug!(
        "Embedding {} characters into {}x{} {} image (max {})",
        text.chars().count(),
        report.width,
        report.height,
        report.mode,
        report.max_message_chars
    );

    let encoded = stego::encode_message(&carrier, text)?;
    image_io::save_carrier(encoded, &output_path, allow_lossy)?;

    info!(
        "Message encoded successfully and saved to {}",
        output_path.as_ref().display()
    );
    Ok(())
}

/// Extract the text hidden in an image file.
///
/// # Errors
/// - Image cannot be opened or is not RGB/RGBA
/// - No terminator is found in the image
pub fn extract_text<P: AsRef<Path>>(image_path: P) -> Result<String> {
    let carrier = image_io::load_carrier(&image_path)?;
    let text = stego::decode_message(&carrier)?;

    info!(
        "Decoded {} characters from {}",
        text.chars().count(),
        image_path.as_ref().display()
    );
    Ok(text)
}

/// Embed text into in-memory image bytes.
///
/// # Arguments
/// - `image_bytes`: Raw bytes of the input image (any format supported by `image` crate)
/// - `text`: Text to embed, every character in U+0000..=U+00FF
///
/// # Returns
/// - `Ok(Vec<u8>)`: PNG image bytes with embedded text
/// - `Err`: If the image is too small, can't be loaded, or has an unsupported mode
pub fn embed_text_bytes(image_bytes: &[u8], text: &str) -> Result<Vec<u8>> {
    let carrier = image_io::load_carrier_from_memory(image_bytes)?;
    let encoded = stego::encode_message(&carrier, text)?;
    image_io::carrier_to_png_bytes(encoded)
}

/// Extract text embedded in in-memory image bytes.
pub fn extract_text_bytes(image_bytes: &[u8]) -> Result<String> {
    let carrier = image_io::load_carrier_from_memory(image_bytes)?;
    Ok(stego::decode_message(&carrier)?)
}

/// Report how much text an image file can hold.
pub fn inspect_capacity<P: AsRef<Path>>(image_path: P) -> Result<CapacityReport> {
    let carrier = image_io::load_carrier(image_path)?;
    Ok(CapacityReport::for_carrier(&carrier))
}
