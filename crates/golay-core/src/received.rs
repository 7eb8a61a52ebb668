use crate::codec_error::CodecErr;

/// A received codeword handed to the decoder: either a 24-bit integer or a
/// 3-byte big-endian buffer. Both variants normalize to the internal 24-bit
/// representation before any table lookup, so the core stays oblivious to
/// the input shape.
#[derive(Debug, Clone, Copy)]
pub enum Received<'a> {
    Word(u32),
    Bytes(&'a [u8]),
}

impl Received<'_> {
    /// Validate range/shape and return the 24-bit word.
    pub fn into_word(self) -> Result<u32, CodecErr> {
        match self {
            Received::Word(value) => {
                if value > 0xff_ffff {
                    return Err(CodecErr::WordOutOfRange { value });
                }
                Ok(value)
            }
            Received::Bytes(bytes) => {
                let [b0, b1, b2]: [u8; 3] = bytes
                    .try_into()
                    .map_err(|_| CodecErr::WrongBufferLen { found: bytes.len() })?;
                Ok(((b0 as u32) << 16) | ((b1 as u32) << 8) | (b2 as u32))
            }
        }
    }
}

impl From<u32> for Received<'static> {
    fn from(value: u32) -> Self {
        Received::Word(value)
    }
}

impl<'a> From<&'a [u8]> for Received<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Received::Bytes(bytes)
    }
}

impl<'a> From<&'a [u8; 3]> for Received<'a> {
    fn from(bytes: &'a [u8; 3]) -> Self {
        Received::Bytes(bytes)
    }
}
