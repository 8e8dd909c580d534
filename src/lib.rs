pub mod common;
pub mod processing;
pub mod stego;

pub use stego::{decode_message, encode_message, Carrier, ColorMode, StegoError};
