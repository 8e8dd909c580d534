//! # LSB Steganography Core
//!
//! Hides a text message in the least significant bits of an image's RGB
//! channels and recovers it later.
//!
//! ## Encoding
//! 1. Reject carriers that are not RGB or RGBA
//! 2. Frame the message: 8 bits per character (MSB first) + 16-bit terminator
//! 3. Check capacity: `ceil(bits / 3)` pixels are needed
//! 4. Write bit `i` into the LSB of channel `i % 3` of pixel `i / 3`
//!
//! ## Decoding
//! 1. Reject carriers that are not RGB or RGBA
//! 2. Read the LSB of R, G, B for every pixel in order
//! 3. Cut the stream at the first terminator and rebuild the characters
//!
//! The message is not encrypted and does not survive lossy recompression.
//! Everything here is pure and synchronous: no I/O, no logging, no shared state.

pub mod capacity;
pub mod carrier;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frame;

pub use capacity::CapacityReport;
pub use carrier::{Carrier, ColorMode};
pub use error::StegoError;

/// Hide `message` in a copy of `carrier`.
///
/// See [`encoder::encode`] for the failure modes.
pub fn encode_message(carrier: &Carrier, message: &str) -> Result<Carrier, StegoError> {
    encoder::encode(carrier, message)
}

/// Read the message hidden in `carrier`.
///
/// See [`decoder::decode`] for the failure modes.
pub fn decode_message(carrier: &Carrier) -> Result<String, StegoError> {
    decoder::decode(carrier)
}
