use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrcError {
    /// Null buffer pointer paired with a non-zero length
    NullBuffer { len: usize },
    /// Computed checksum differs from the stored one
    Mismatch { expected: u32, actual: u32 },
}

impl fmt::Display for CrcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullBuffer { len } => write!(f, "Null buffer with length {}", len),
            Self::Mismatch { expected, actual } => write!(
                f,
                "CRC checksum mismatch: expected {:#010x}, got {:#010x}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for CrcError {}

pub type Result<T> = core::result::Result<T, CrcError>;
