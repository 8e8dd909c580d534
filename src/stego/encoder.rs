//! # LSB Encoder
//!
//! Writes the framed message into the least significant bit of each pixel's
//! R, G and B channels, in pixel order. The output is a fresh buffer built by
//! mapping every channel index; the input carrier is never touched.

use super::capacity;
use super::carrier::Carrier;
use super::error::StegoError;
use super::frame;

/// Only the first three channels (R, G, B) of a pixel carry bits.
const WRITABLE_CHANNELS: usize = 3;

/// Embed `message` into a copy of `carrier`.
///
/// Checks run before any pixel is produced, so a failure never yields a
/// partially encoded image.
///
/// # Errors
/// - [`StegoError::InvalidColorMode`] if the carrier is not RGB/RGBA
/// - [`StegoError::CharacterOutOfRange`] if the message has a char above U+00FF
/// - [`StegoError::MessageTooLarge`] if the carrier is too small
pub fn encode(carrier: &Carrier, message: &str) -> Result<Carrier, StegoError> {
    carrier.mode().ensure_supported()?;

    let bits = frame::frame(message)?;
    capacity::validate(bits.len(), carrier.pixel_count())?;

    let channels = carrier.mode().channels();
    let data = carrier
        .as_raw()
        .iter()
        .enumerate()
        .map(|(index, &value)| embed_channel(&bits, channels, index, value))
        .collect();

    Carrier::new(carrier.width(), carrier.height(), carrier.mode(), data)
}

/// New value of the channel at flat buffer position `index`.
fn embed_channel(bits: &[u8], channels: usize, index: usize, value: u8) -> u8 {
    let channel = index % channels;
    if channel >= WRITABLE_CHANNELS {
        return value;
    }

    let bit_index = (index / channels) * WRITABLE_CHANNELS + channel;
    match bits.get(bit_index) {
        Some(&bit) => (value & !1) | bit,
        None => value,
    }
}
