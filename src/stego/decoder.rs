//! # LSB Decoder
//!
//! Reads the least significant bit of R, G and B for every pixel, in the same
//! order the encoder writes them, and unframes the resulting bit stream.

use super::carrier::Carrier;
use super::error::StegoError;
use super::frame;

/// Lazily yield the LSB of the first three channels of every pixel.
pub fn extract_bits(carrier: &Carrier) -> impl Iterator<Item = u8> + '_ {
    carrier
        .pixels()
        .flat_map(|pixel| pixel.iter().take(3).map(|value| value & 1))
}

/// Recover the message hidden in `carrier`.
///
/// # Errors
/// - [`StegoError::InvalidColorMode`] if the carrier is not RGB/RGBA
/// - [`StegoError::NoMessageFound`] if no terminator appears in the carrier
pub fn decode(carrier: &Carrier) -> Result<String, StegoError> {
    carrier.mode().ensure_supported()?;
    frame::unframe_stream(extract_bits(carrier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::carrier::ColorMode;

    #[test]
    fn test_extract_bits_skips_alpha() {
        let carrier = Carrier::new(2, 1, ColorMode::Rgba, vec![1, 0, 1, 0, 0, 3, 2, 1]).unwrap();
        let bits: Vec<u8> = extract_bits(&carrier).collect();
        assert_eq!(bits, vec![1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_decode_blank_carriers() {
        let zeros = Carrier::new(16, 16, ColorMode::Rgb, vec![0; 768]).unwrap();
        assert_eq!(decode(&zeros), Err(StegoError::NoMessageFound));

        let ones = Carrier::new(16, 16, ColorMode::Rgba, vec![255; 1024]).unwrap();
        assert_eq!(decode(&ones), Err(StegoError::NoMessageFound));
    }

    #[test]
    fn test_decode_rejects_grayscale() {
        let carrier = Carrier::new(4, 4, ColorMode::LumaAlpha, vec![0; 32]).unwrap();
        assert_eq!(
            decode(&carrier),
            Err(StegoError::InvalidColorMode("LA".to_string()))
        );
    }

    #[test]
    fn test_decode_handcrafted_lsbs() {
        // "A" = 01000001, then the terminator: 24 bits over 8 pixels.
        let bits = "010000011111111111111110";
        let data: Vec<u8> = bits
            .bytes()
            .map(|b| if b == b'1' { 0x41 } else { 0x40 })
            .collect();
        let carrier = Carrier::new(8, 1, ColorMode::Rgb, data).unwrap();

        assert_eq!(decode(&carrier).unwrap(), "A");
    }
}
