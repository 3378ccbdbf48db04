#![allow(unsafe_code)]

use super::binding::{self, DecompressionCtx, DecompressionOptions};
use super::Preferences;
use crate::common::{result_from_code, Error, ErrorKind, Report, Result};
use libc::{c_void, size_t};
use std::{ffi::CStr, mem::MaybeUninit, ptr::NonNull};

pub fn compress_frame_bound(src_size: usize, prefs: &Preferences) -> usize {
    unsafe { binding::LZ4F_compressFrameBound(src_size as size_t, prefs as *const Preferences) }
}

pub fn compress_frame(src: &[u8], dst: &mut [u8], prefs: &Preferences) -> Result<Report> {
    let code = unsafe {
        binding::LZ4F_compressFrame(
            dst.as_mut_ptr() as *mut c_void,
            dst.len() as size_t,
            src.as_ptr() as *const c_void,
            src.len() as size_t,
            prefs as *const Preferences,
        )
    };
    result_from_code(code).map(|dst_len| Report {
        dst_len,
        ..Default::default()
    })
}

/// Returns liblz4's name for a raw status code.
pub fn error_name(code: usize) -> &'static str {
    unsafe { CStr::from_ptr(binding::LZ4F_getErrorName(code)) }
        .to_str()
        .unwrap()
}

/// Owned streaming decompression session.
///
/// Wraps liblz4's decompression context so the context is released exactly
/// once, on every exit path, when the value is dropped.
pub struct DecompressionContext {
    ctx: NonNull<DecompressionCtx>,
}

impl DecompressionContext {
    pub fn new() -> Result<Self> {
        let mut ctx = MaybeUninit::<*mut DecompressionCtx>::uninit();
        unsafe {
            let code = binding::LZ4F_createDecompressionContext(
                ctx.as_mut_ptr(),
                binding::LZ4F_getVersion(),
            );
            result_from_code(code).and_then(|_| {
                NonNull::new(ctx.assume_init())
                    .ok_or_else(|| Error::new(ErrorKind::Generic))
                    .map(|ctx| Self { ctx })
            })
        }
    }

    /// Runs one decompression step.
    ///
    /// Reads from `src`, writes regenerated bytes into `dst`, and reports
    /// how much of each buffer was used plus the size hint for the next
    /// call (`expected_src_len`).
    pub fn decompress(&mut self, src: &[u8], dst: &mut [u8], stable_dst: bool) -> Result<Report> {
        let mut dst_len = dst.len() as size_t;
        let mut src_len = src.len() as size_t;
        let opt = DecompressionOptions::stable(stable_dst);
        let code = unsafe {
            binding::LZ4F_decompress(
                self.ctx.as_ptr(),
                dst.as_mut_ptr() as *mut c_void,
                &mut dst_len as *mut size_t,
                src.as_ptr() as *const c_void,
                &mut src_len as *mut size_t,
                &opt as *const DecompressionOptions,
            )
        };
        result_from_code(code).map(|hint| Report {
            dst_len,
            src_len: Some(src_len),
            expected_src_len: Some(hint),
        })
    }
}

impl Drop for DecompressionContext {
    fn drop(&mut self) {
        unsafe {
            binding::LZ4F_freeDecompressionContext(self.ctx.as_ptr());
        }
    }
}
