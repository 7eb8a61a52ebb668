//! Extended Golay (24,12,8) forward error correction, as specified by
//! IRIG-106 Chapter 7 (PCM over Ethernet).
//!
//! A 12-bit data word is encoded into a 24-bit systematic codeword (data in
//! the upper half, parity in the lower half). With minimum distance 8, up to
//! 3 bit errors per codeword are corrected and up to 4 are detected:
//! - GolayCodec / codec() for encode/decode/error-count operations
//! - Received for integer or 3-byte big-endian decoder input
//! - Lookup tables built once from the fixed matrix rows in `matrices`

pub mod codec;
pub mod codec_error;
pub mod debug;
pub mod matrices;
pub mod received;
pub mod tables;

// Re-export commonly used items
pub use codec::{GolayCodec, codec, decode, encode, errors, init_tables};
pub use codec_error::CodecErr;
pub use received::Received;
pub use tables::GolayTables;
