//! # Capacity
//!
//! Each pixel hosts 3 bits (the LSB of R, G and B). Alpha is never written.

use serde::Serialize;

use super::carrier::{Carrier, ColorMode};
use super::error::StegoError;
use super::frame::TERMINATOR;

/// Writable bits per pixel.
pub const BITS_PER_PIXEL: u64 = 3;

/// Pixels needed to carry `framed_bits` bits.
pub fn required_pixels(framed_bits: usize) -> u64 {
    (framed_bits as u64).div_ceil(BITS_PER_PIXEL)
}

/// Check that `framed_bits` fit in a carrier of `pixel_count` pixels.
///
/// # Errors
/// - [`StegoError::MessageTooLarge`] with the required and available pixel counts
pub fn validate(framed_bits: usize, pixel_count: u64) -> Result<(), StegoError> {
    let required = required_pixels(framed_bits);
    if required > pixel_count {
        return Err(StegoError::MessageTooLarge {
            required,
            available: pixel_count,
        });
    }
    Ok(())
}

/// Summary of how much a carrier can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    pub mode: ColorMode,
    pub pixels: u64,
    pub capacity_bits: u64,
    /// Longest message (in characters) that still fits with its terminator.
    pub max_message_chars: u64,
}

impl CapacityReport {
    pub fn for_carrier(carrier: &Carrier) -> Self {
        let pixels = carrier.pixel_count();
        let capacity_bits = pixels * BITS_PER_PIXEL;
        let max_message_chars = capacity_bits.saturating_sub(TERMINATOR.len() as u64) / 8;

        Self {
            width: carrier.width(),
            height: carrier.height(),
            mode: carrier.mode(),
            pixels,
            capacity_bits,
            max_message_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_pixels_rounds_up() {
        assert_eq!(required_pixels(0), 0);
        assert_eq!(required_pixels(16), 6);
        assert_eq!(required_pixels(24), 8);
        assert_eq!(required_pixels(32), 11);
        assert_eq!(required_pixels(33), 11);
    }

    #[test]
    fn test_validate_exact_fit() {
        assert!(validate(24, 8).is_ok());
        assert_eq!(
            validate(24, 7),
            Err(StegoError::MessageTooLarge {
                required: 8,
                available: 7
            })
        );
    }

    #[test]
    fn test_terminator_alone_needs_six_pixels() {
        assert_eq!(
            validate(16, 4),
            Err(StegoError::MessageTooLarge {
                required: 6,
                available: 4
            })
        );
    }

    #[test]
    fn test_capacity_report() {
        let carrier = Carrier::new(10, 10, ColorMode::Rgba, vec![0; 400]).unwrap();
        let report = CapacityReport::for_carrier(&carrier);

        assert_eq!(report.pixels, 100);
        assert_eq!(report.capacity_bits, 300);
        assert_eq!(report.max_message_chars, 35);
    }

    #[test]
    fn test_capacity_report_tiny_carrier() {
        let carrier = Carrier::new(2, 2, ColorMode::Rgb, vec![0; 12]).unwrap();
        assert_eq!(CapacityReport::for_carrier(&carrier).max_message_chars, 0);
    }
}
