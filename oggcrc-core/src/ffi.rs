//! C-callable entry points, exported unmangled from the `cdylib` build.
//!
//! ```c
//! uint32_t ogg_crc32(const uint8_t *data, size_t len);
//! int32_t  ogg_crc32_checked(const uint8_t *data, size_t len, uint32_t *out);
//! ```
//!
//! `ogg_crc32` is not ABI-compatible with the older
//! `uint32_t ogg_crc32(uint32_t crc, uint8_t *data, size_t len)` declaration that
//! takes a running CRC first. Callers built against that header must be recompiled.

use core::slice;

use crate::crc::crc32;
use crate::error::{CrcError, Result};

pub const OGGCRC_OK: i32 = 0;
pub const OGGCRC_ERROR_NULL_BUFFER: i32 = -1;
pub const OGGCRC_ERROR_NULL_OUTPUT: i32 = -2;

/// Borrows the caller's buffer. A zero length is the empty buffer whatever
/// the pointer; a null pointer with any other length is refused.
///
/// # Safety
///
/// When `data` is non-null it must point to `len` readable bytes that stay
/// valid and unmodified for `'a`.
unsafe fn borrow_buffer<'a>(data: *const u8, len: usize) -> Result<&'a [u8]> {
    if len == 0 {
        return Ok(&[]);
    }
    if data.is_null() {
        tracing::error!(len, "Rejected null buffer");
        return Err(CrcError::NullBuffer { len });
    }
    Ok(unsafe { slice::from_raw_parts(data, len) })
}

/// Computes the Ogg CRC-32 of `len` bytes at `data`.
///
/// `(NULL, 0)` yields 0. `NULL` with a non-zero length is a contract
/// violation and aborts the process rather than returning a checksum of
/// the wrong bytes; use [`ogg_crc32_checked`] to get an error code instead.
///
/// # Safety
///
/// `data` must be null or point to at least `len` readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ogg_crc32(data: *const u8, len: usize) -> u32 {
    match unsafe { borrow_buffer(data, len) } {
        Ok(buffer) => crc32(buffer),
        // Unwinding out of an `extern "C"` function aborts.
        Err(e) => panic!("ogg_crc32: {}", e),
    }
}

/// Computes the Ogg CRC-32 of `len` bytes at `data` and writes it to `out`.
///
/// Returns [`OGGCRC_OK`] on success, or a negative error code. `out` is
/// left untouched on failure.
///
/// # Safety
///
/// - `data` must be null or point to at least `len` readable bytes.
/// - `out` must be null or point to a writable `u32`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ogg_crc32_checked(data: *const u8, len: usize, out: *mut u32) -> i32 {
    if out.is_null() {
        return OGGCRC_ERROR_NULL_OUTPUT;
    }

    match unsafe { borrow_buffer(data, len) } {
        Ok(buffer) => {
            unsafe { *out = crc32(buffer) };
            OGGCRC_OK
        }
        Err(_) => OGGCRC_ERROR_NULL_BUFFER,
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::process::Command;
    use std::ptr;

    use super::*;

    const NULL_BUFFER_CHILD: &str = "OGGCRC_NULL_BUFFER_CHILD";

    #[test]
    fn test_ogg_crc32_matches_slice_api() {
        let data = b"OggS";
        let crc = unsafe { ogg_crc32(data.as_ptr(), data.len()) };
        assert_eq!(crc, crc32(data));
        assert_eq!(crc, 0x5fb0a94f);
    }

    #[test]
    fn test_ogg_crc32_null_empty() {
        assert_eq!(unsafe { ogg_crc32(ptr::null(), 0) }, 0);
    }

    #[test]
    fn test_ogg_crc32_length_bounds_read() {
        let data = b"OggS trailing bytes";
        let crc = unsafe { ogg_crc32(data.as_ptr(), 4) };
        assert_eq!(crc, crc32(b"OggS"));
    }

    #[test]
    fn test_checked_success() {
        let data = b"123456789";
        let mut out = 0u32;
        let code = unsafe { ogg_crc32_checked(data.as_ptr(), data.len(), &mut out) };

        assert_eq!(code, OGGCRC_OK);
        assert_eq!(out, 0x89a1897f);
    }

    #[test]
    fn test_checked_null_buffer() {
        let mut out = 0xdead_beef_u32;
        let code = unsafe { ogg_crc32_checked(ptr::null(), 16, &mut out) };

        assert_eq!(code, OGGCRC_ERROR_NULL_BUFFER);
        assert_eq!(out, 0xdead_beef);

        let code = unsafe { ogg_crc32_checked(ptr::null(), 0, &mut out) };
        assert_eq!(code, OGGCRC_OK);
        assert_eq!(out, 0);
    }

    #[test]
    fn test_checked_null_output() {
        let data = b"OggS";
        let code = unsafe { ogg_crc32_checked(data.as_ptr(), data.len(), ptr::null_mut()) };
        assert_eq!(code, OGGCRC_ERROR_NULL_OUTPUT);
    }

    #[test]
    fn test_ogg_crc32_null_buffer_aborts() {
        // Re-run this test in a child process, where the abort is expected.
        if env::var_os(NULL_BUFFER_CHILD).is_some() {
            let crc = unsafe { ogg_crc32(ptr::null(), 8) };
            println!("checksum {crc:#010x}");
            return;
        }

        let output = Command::new(env::current_exe().unwrap())
            .args([
                "ffi::tests::test_ogg_crc32_null_buffer_aborts",
                "--exact",
                "--nocapture",
                "--test-threads=1",
            ])
            .env(NULL_BUFFER_CHILD, "1")
            .output()
            .unwrap();

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert!(!output.status.success());
        assert!(!stdout.contains("checksum "), "{stdout}");
        assert!(stderr.contains("ogg_crc32: Null buffer with length 8"), "{stderr}");
    }

    #[test]
    fn test_borrow_buffer_rejects_null() {
        let result = unsafe { borrow_buffer(ptr::null(), 8) };
        assert_eq!(result, Err(CrcError::NullBuffer { len: 8 }));
    }
}
