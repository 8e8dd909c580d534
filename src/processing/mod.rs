//! # Image Processing and Steganography
//!
//! This module connects image files to the LSB steganography core:
//! [`image_io`] decodes and writes images, [`steganography`] hides and
//! recovers text in them.

pub mod image_io;
pub mod steganography;

// Re-export main functions for convenience
pub use steganography::{
    embed_text, embed_text_bytes, extract_text, extract_text_bytes, inspect_capacity,
};
