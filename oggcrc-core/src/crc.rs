use crate::error::{CrcError, Result};

/// Generator polynomial of the Ogg page checksum, in normal (MSB-first) form.
pub const POLYNOMIAL: u32 = 0x04C1_1DB7;

/// CRC-32 with Ogg framing parameters: polynomial 0x04C11DB7, no input or
/// output reflection, initial value 0 and no final XOR.
///
/// This is not the zlib/PNG CRC-32. Feeding Ogg pages through the reflected
/// table produces checksums that no Ogg demuxer will accept.
#[derive(Debug, Clone)]
pub struct OggCrc {
    table: [u32; 256],
}

impl OggCrc {
    /// Builds the 256-entry lookup table. Usable in const context, which is
    /// how the shared instance behind [`crc32`] is created.
    pub const fn new() -> Self {
        let mut table = [0u32; 256];
        let mut i = 0;
        while i < 256 {
            let mut crc = (i as u32) << 24;
            let mut j = 0;
            while j < 8 {
                if crc & 0x8000_0000 != 0 {
                    crc = (crc << 1) ^ POLYNOMIAL;
                } else {
                    crc <<= 1;
                }
                j += 1;
            }
            table[i] = crc;
            i += 1;
        }

        Self { table }
    }

    /// Computes the checksum of `data` as one complete buffer.
    pub fn checksum(&self, data: &[u8]) -> u32 {
        let mut crc = 0u32;

        for &byte in data {
            let index = ((crc >> 24) ^ byte as u32) & 0xFF;
            crc = (crc << 8) ^ self.table[index as usize];
        }

        crc
    }

    /// Returns the lookup table; entry `i` is `i << 24` reduced modulo the polynomial.
    pub fn table(&self) -> &[u32; 256] {
        &self.table
    }
}

impl Default for OggCrc {
    fn default() -> Self {
        Self::new()
    }
}

/// Lookup table evaluated at compile time; read-only for the life of the process.
static OGG_CRC: OggCrc = OggCrc::new();

/// Computes the Ogg CRC-32 of `data` using the shared lookup table.
pub fn crc32(data: &[u8]) -> u32 {
    OGG_CRC.checksum(data)
}

/// Bit-at-a-time form of [`crc32`]. Slow, but has no table that could be
/// generated wrongly, so it serves as the reference the table is checked against.
pub fn crc32_bitwise(data: &[u8]) -> u32 {
    let mut crc = 0u32;

    for &byte in data {
        crc ^= (byte as u32) << 24;
        for _ in 0..8 {
            crc = if crc & 0x8000_0000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }

    crc
}

/// Checks `data` against a previously stored checksum.
///
/// The caller is still responsible for zeroing the checksum field inside
/// `data` before calling, exactly as when the value was generated.
pub fn verify(data: &[u8], expected: u32) -> Result<()> {
    let actual = crc32(data);
    if actual != expected {
        return Err(CrcError::Mismatch { expected, actual });
    }
    Ok(())
}
