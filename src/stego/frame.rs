//! # Message Framing
//!
//! Converts a text message to and from the bit sequence carried by the image.
//!
//! ## Format
//! ```text
//! [8 bits per character, MSB first][1111111111111110]
//! ```
//!
//! Bits are stored one per `u8` (value 0 or 1). The 16-bit terminator is found
//! by scanning for its first occurrence at any bit offset. Message content is
//! not escaped, so a message whose own bits contain the terminator pattern is
//! cut short at that point on decode.

use super::error::StegoError;

/// End-of-message marker appended after the payload.
pub const TERMINATOR: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];

/// [`TERMINATOR`] read as a big-endian 16-bit word.
const TERMINATOR_WORD: u16 = 0xFFFE;

const BITS_PER_CHAR: usize = 8;

/// Length in bits of the framed sequence for `message`.
pub fn framed_len(message: &str) -> usize {
    message.chars().count() * BITS_PER_CHAR + TERMINATOR.len()
}

/// Frame a message into its bit sequence followed by the terminator.
///
/// # Errors
/// - [`StegoError::CharacterOutOfRange`] if any character is above U+00FF
pub fn frame(message: &str) -> Result<Vec<u8>, StegoError> {
    let mut bits = Vec::with_capacity(framed_len(message));

    for (position, character) in message.chars().enumerate() {
        let byte = u8::try_from(u32::from(character))
            .map_err(|_| StegoError::CharacterOutOfRange { character, position })?;

        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push((byte >> shift) & 1);
        }
    }

    bits.extend_from_slice(&TERMINATOR);
    Ok(bits)
}

/// Recover the message from a framed bit sequence.
///
/// # Errors
/// - [`StegoError::NoMessageFound`] if the terminator never appears
pub fn unframe(bits: &[u8]) -> Result<String, StegoError> {
    unframe_stream(bits.iter().copied())
}

/// Same as [`unframe`] but consumes bits lazily, stopping at the first
/// terminator. Only the low bit of each item is used.
pub fn unframe_stream<I>(bits: I) -> Result<String, StegoError>
where
    I: IntoIterator<Item = u8>,
{
    let mut bytes = Vec::new();
    let mut current: u8 = 0;
    let mut count: usize = 0;
    let mut window: u16 = 0;

    for bit in bits {
        let bit = bit & 1;
        window = (window << 1) | u16::from(bit);
        current = (current << 1) | bit;
        count += 1;

        if count % BITS_PER_CHAR == 0 {
            bytes.push(current);
            current = 0;
        }

        if count >= TERMINATOR.len() && window == TERMINATOR_WORD {
            // Whole bytes before the terminator; a trailing partial byte is dropped.
            bytes.truncate((count - TERMINATOR.len()) / BITS_PER_CHAR);
            return Ok(bytes.into_iter().map(char::from).collect());
        }
    }

    Err(StegoError::NoMessageFound)
}
