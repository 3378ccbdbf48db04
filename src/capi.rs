#![allow(unsafe_code)]

//! Flat C ABI for managed-runtime hosts.
//!
//! Every function here is exported unmangled so a managed runtime can bind
//! the compiled `cdylib` with P/Invoke-style declarations. The surface
//! mirrors the safe [`lz4f`] API one-to-one:
//!
//! | Symbol | Operation |
//! |---|---|
//! | `lz4b_version_number` | liblz4 version number |
//! | `lz4b_version_string` | liblz4 version string, copied into a caller buffer |
//! | `lz4b_compress_bound` | worst-case frame size for a given input size |
//! | `lz4b_compress_frame` | single-shot frame compression into a caller buffer |
//! | `lz4b_decompress_frame` | whole-frame decompression into an owned buffer |
//! | `lz4b_free_result` | releases a buffer returned by `lz4b_decompress_frame` |
//! | `lz4b_is_error` | whether a status code is an error |
//! | `lz4b_error_name` | human-readable name for a status code |
//!
//! Status codes are `isize`: non-negative values are byte counts, negative
//! values are errors. Library-reported errors keep liblz4's code (negated
//! table index), so [`lz4b_error_name`] resolves them through liblz4
//! itself; the two crate-raised conditions are published as
//! [`LZ4B_ERROR_ALLOCATION`] and [`LZ4B_ERROR_INCOMPLETE`].
//!
//! String-copying functions write at most `capacity` bytes and return the
//! number of bytes copied. No NUL terminator is appended; callers are
//! expected to use the returned length.
//!
//! [`lz4f`]: ../lz4f/index.html
//! [`lz4b_error_name`]: fn.lz4b_error_name.html
//! [`LZ4B_ERROR_ALLOCATION`]: constant.LZ4B_ERROR_ALLOCATION.html
//! [`LZ4B_ERROR_INCOMPLETE`]: constant.LZ4B_ERROR_INCOMPLETE.html

use crate::common::{self, Error, ErrorKind};
use crate::lz4f::{self, PreferencesBuilder};
use libc::{c_char, c_int, c_uint};
use std::{cmp, ptr, slice};

/// Status code returned when the decompression result buffer cannot be
/// grown. Distinct from every decode error liblz4 reports for a corrupt
/// stream.
pub const LZ4B_ERROR_ALLOCATION: isize = -(ErrorKind::AllocationFailed.index() as isize);

/// Status code returned when the compressed input ends before the frame
/// does.
pub const LZ4B_ERROR_INCOMPLETE: isize = -(ErrorKind::CompressedDataIncomplete.index() as isize);

const INCOMPLETE_NAME: &str = "ERROR_compressedData_incomplete";

fn status_code(err: Error) -> isize {
    -(err.kind().index() as isize)
}

fn preferences_for(compression_level: c_int) -> lz4f::Preferences {
    PreferencesBuilder::new()
        .compression_level(compression_level)
        .build()
}

unsafe fn ref_slice<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        Some(&[])
    } else if data.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(data, len))
    }
}

unsafe fn mut_slice<'a>(data: *mut u8, len: usize) -> Option<&'a mut [u8]> {
    if len == 0 {
        Some(&mut [])
    } else if data.is_null() {
        None
    } else {
        Some(slice::from_raw_parts_mut(data, len))
    }
}

unsafe fn copy_bounded(src: &[u8], dst: *mut c_char, capacity: usize) -> usize {
    if dst.is_null() {
        return 0;
    }
    let len = cmp::min(src.len(), capacity);
    ptr::copy_nonoverlapping(src.as_ptr(), dst as *mut u8, len);
    len
}

/// Returns the version number of liblz4.
#[no_mangle]
pub extern "C" fn lz4b_version_number() -> c_int {
    common::version_number() as c_int
}

/// Copies the version string of liblz4 into `dst` and returns the number
/// of bytes copied (at most `capacity`).
///
/// # Safety
///
/// `dst` must be valid for writes of `capacity` bytes, or null.
#[no_mangle]
pub unsafe extern "C" fn lz4b_version_string(dst: *mut c_char, capacity: usize) -> usize {
    copy_bounded(common::version_string().as_bytes(), dst, capacity)
}

/// Returns the maximum possible size of a compressed frame for an input of
/// `src_size` bytes at the given compression level.
#[no_mangle]
pub extern "C" fn lz4b_compress_bound(src_size: usize, compression_level: c_int) -> usize {
    lz4f::max_compressed_size(src_size, &preferences_for(compression_level))
}

/// Compresses `src` into a single LZ4 frame written to `dst`.
///
/// Returns the number of bytes written, or a negative status code. Size
/// `dst` with [`lz4b_compress_bound`] to guarantee success.
///
/// # Safety
///
/// `src` must be valid for reads of `src_len` bytes and `dst` for writes
/// of `dst_capacity` bytes; null pointers yield a negative status code.
///
/// [`lz4b_compress_bound`]: fn.lz4b_compress_bound.html
#[no_mangle]
pub unsafe extern "C" fn lz4b_compress_frame(
    src: *const u8,
    src_len: usize,
    dst: *mut u8,
    dst_capacity: usize,
    compression_level: c_int,
) -> isize {
    let src = match ref_slice(src, src_len) {
        Some(src) => src,
        None => return -(ErrorKind::SrcPtrWrong.index() as isize),
    };
    let dst = match mut_slice(dst, dst_capacity) {
        Some(dst) => dst,
        None => return -(ErrorKind::Generic.index() as isize),
    };
    match lz4f::compress(src, dst, &preferences_for(compression_level)) {
        Ok(len) => len as isize,
        Err(err) => status_code(err),
    }
}

/// Decompresses a whole LZ4 frame from `src` into a newly allocated buffer.
///
/// On success, writes the buffer pointer to `*dst` and returns its length.
/// The buffer is owned by the caller and must be released with
/// [`lz4b_free_result`], passing the returned length back.
///
/// On failure, writes null to `*dst` and returns a negative status code;
/// nothing needs to be released.
///
/// # Safety
///
/// `dst` must be valid for a pointer write and `src` for reads of
/// `src_len` bytes; null pointers yield a negative status code.
///
/// [`lz4b_free_result`]: fn.lz4b_free_result.html
#[no_mangle]
pub unsafe extern "C" fn lz4b_decompress_frame(
    dst: *mut *mut u8,
    src: *const u8,
    src_len: usize,
) -> isize {
    if dst.is_null() {
        return -(ErrorKind::Generic.index() as isize);
    }
    *dst = ptr::null_mut();
    let src = match ref_slice(src, src_len) {
        Some(src) => src,
        None => return -(ErrorKind::SrcPtrWrong.index() as isize),
    };
    match lz4f::decompress(src) {
        Ok(buf) => {
            let len = buf.len();
            *dst = Box::into_raw(buf.into_boxed_slice()) as *mut u8;
            len as isize
        }
        Err(err) => status_code(err),
    }
}

/// Releases a buffer returned by [`lz4b_decompress_frame`].
///
/// `len` must be the length that call returned. Null is ignored.
///
/// # Safety
///
/// `buffer` must be a pointer obtained from [`lz4b_decompress_frame`]
/// together with its returned length, and must not be released twice.
///
/// [`lz4b_decompress_frame`]: fn.lz4b_decompress_frame.html
#[no_mangle]
pub unsafe extern "C" fn lz4b_free_result(buffer: *mut u8, len: usize) {
    if buffer.is_null() {
        return;
    }
    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(buffer, len)));
}

/// Returns 1 if `code` is an error status, 0 otherwise.
#[no_mangle]
pub extern "C" fn lz4b_is_error(code: isize) -> c_uint {
    c_uint::from(code < 0)
}

/// Copies the name of a status code into `dst` and returns the number of
/// bytes copied (at most `capacity`).
///
/// # Safety
///
/// `dst` must be valid for writes of `capacity` bytes, or null.
#[no_mangle]
pub unsafe extern "C" fn lz4b_error_name(code: isize, dst: *mut c_char, capacity: usize) -> usize {
    let name = if code == LZ4B_ERROR_INCOMPLETE {
        INCOMPLETE_NAME
    } else {
        lz4f::error_name(code as usize)
    };
    copy_bounded(name.as_bytes(), dst, capacity)
}
