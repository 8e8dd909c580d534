//! # Steganography Errors
//!
//! Every failure of the encode/decode core is reported through [`StegoError`].
//! All of them are deterministic and input-dependent, so none are retried.

use thiserror::Error;

/// Errors returned by the LSB steganography core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The carrier is not in RGB or RGBA mode.
    #[error("image must be in RGB or RGBA mode, got {0}")]
    InvalidColorMode(String),

    /// The framed message needs more pixels than the carrier has.
    #[error(
        "message is too long to be encoded in the image: required pixels {required}, available pixels {available}"
    )]
    MessageTooLarge { required: u64, available: u64 },

    /// No terminator pattern was found in the carrier's bit stream.
    #[error("no valid message found in the image")]
    NoMessageFound,

    /// A character of the message does not fit in a single byte.
    #[error("character {character:?} at position {position} is outside the 8-bit range")]
    CharacterOutOfRange { character: char, position: usize },

    /// A raw pixel buffer does not match the declared dimensions and mode.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Width × height × channels does not fit in memory addressing.
    #[error("image dimensions {width}x{height} are too large")]
    DimensionsTooLarge { width: u32, height: u32 },
}
