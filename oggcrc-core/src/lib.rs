//! Ogg page checksum (CRC-32, polynomial 0x04C11DB7, unreflected, no
//! initial or final XOR).
//!
//! Callers hand over the whole page with its checksum field zeroed and get
//! back the value to store little-endian in that field, or to compare
//! against the stored one.

pub mod crc;
pub mod error;
pub mod ffi;

pub use crc::{OggCrc, POLYNOMIAL, crc32, crc32_bitwise, verify};
pub use error::{CrcError, Result};
