use core::fmt;

/// Input validation errors at the codec boundary. All are detected before
/// any table access; the codec itself has no failure modes.
#[derive(Debug, PartialEq, Eq)]
pub enum CodecErr {
    /// Encode input exceeds the 12-bit data word range.
    DataOutOfRange { value: u32 },
    /// Decode input exceeds the 24-bit codeword range.
    WordOutOfRange { value: u32 },
    /// Decode byte input was not exactly 3 bytes.
    WrongBufferLen { found: usize },
}

impl fmt::Display for CodecErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecErr::DataOutOfRange { value } => {
                write!(f, "only 12-bit unsigned values allowed, got {:#x}", value)
            }
            CodecErr::WordOutOfRange { value } => {
                write!(f, "only 24-bit unsigned values supported, got {:#x}", value)
            }
            CodecErr::WrongBufferLen { found } => {
                write!(f, "3-byte input required, got {} bytes", found)
            }
        }
    }
}

impl std::error::Error for CodecErr {}
