use std::sync::OnceLock;

use crate::codec_error::CodecErr;
use crate::received::Received;
use crate::tables::GolayTables;

/// Extended Golay (24,12,8) encoder/decoder over precomputed tables.
///
/// Owns its tables; construct once and share read-only. For a process-wide
/// instance use [`codec()`].
pub struct GolayCodec {
    tables: GolayTables,
}

impl GolayCodec {
    pub fn new() -> Self {
        GolayCodec {
            tables: GolayTables::build(),
        }
    }

    /// Encode a 12-bit data word into its 24-bit codeword.
    pub fn encode(&self, data: u16) -> Result<u32, CodecErr> {
        if data > 0xfff {
            return Err(CodecErr::DataOutOfRange { value: data as u32 });
        }
        Ok(self.tables.codeword(data))
    }

    /// Encode and pack the codeword big-endian into 3 bytes.
    pub fn encode_bytes(&self, data: u16) -> Result<[u8; 3], CodecErr> {
        let codeword = self.encode(data)?;
        Ok([(codeword >> 16) as u8, (codeword >> 8) as u8, codeword as u8])
    }

    /// Decode a received word, correcting up to 3 bit errors.
    ///
    /// Beyond 3 errors the result is still a 12-bit value but carries no
    /// correctness guarantee and no error is raised; callers that need
    /// failure detection should consult [`GolayCodec::errors`] as well.
    pub fn decode<'a>(&self, received: impl Into<Received<'a>>) -> Result<u16, CodecErr> {
        let word = received.into().into_word()?;
        let (v1, v2) = split(word);
        let syndrome = self.tables.syndrome2(v1, v2);
        Ok(v1 ^ self.tables.correction(syndrome))
    }

    /// Estimated bit-error count of a received word: 0-3 exact, 4 = weight
    /// >= 4, beyond the guaranteed correction radius.
    pub fn errors<'a>(&self, received: impl Into<Received<'a>>) -> Result<u8, CodecErr> {
        let word = received.into().into_word()?;
        let (v1, v2) = split(word);
        Ok(self.tables.error_weight(self.tables.syndrome2(v1, v2)))
    }
}

impl Default for GolayCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a 24-bit word into data field (bits 12-23) and parity field (bits 0-11).
#[inline]
fn split(word: u32) -> (u16, u16) {
    (((word >> 12) & 0xfff) as u16, (word & 0xfff) as u16)
}

static CODEC: OnceLock<GolayCodec> = OnceLock::new();

/// Process-wide codec instance. Tables are built on first use; concurrent
/// first calls race on construction but only one result is published.
pub fn codec() -> &'static GolayCodec {
    CODEC.get_or_init(GolayCodec::new)
}

/// Force table construction up front. Idempotent; later calls are no-ops.
pub fn init_tables() {
    let _ = codec();
}

/// Encode via the process-wide codec.
pub fn encode(data: u16) -> Result<u32, CodecErr> {
    codec().encode(data)
}

/// Decode via the process-wide codec.
pub fn decode<'a>(received: impl Into<Received<'a>>) -> Result<u16, CodecErr> {
    codec().decode(received)
}

/// Error count via the process-wide codec.
pub fn errors<'a>(received: impl Into<Received<'a>>) -> Result<u8, CodecErr> {
    codec().errors(received)
}
