use super::Preferences;
use libc::{c_char, c_uint, c_void, size_t};

/// Opaque streaming decompression state advanced by `LZ4F_decompress`.
#[repr(C)]
pub struct DecompressionCtx {
    _private: [u8; 0],
}

#[derive(Debug, Default, Copy, Clone)]
#[repr(C)]
pub struct DecompressionOptions {
    pub stable_dst: c_uint,
    pub _reserved: [c_uint; 3],
}

impl DecompressionOptions {
    pub fn stable(stable: bool) -> Self {
        Self {
            stable_dst: u32::from(stable),
            ..Default::default()
        }
    }
}

extern "C" {
    pub fn LZ4F_getVersion() -> c_uint;
    pub fn LZ4F_compressFrameBound(src_size: size_t, prefs: *const Preferences) -> size_t;
    pub fn LZ4F_compressFrame(
        dst_buffer: *mut c_void,
        dst_capacity: size_t,
        src_buffer: *const c_void,
        src_size: size_t,
        prefs: *const Preferences,
    ) -> size_t;
    pub fn LZ4F_createDecompressionContext(
        ctx: *mut *mut DecompressionCtx,
        version: c_uint,
    ) -> size_t;
    pub fn LZ4F_freeDecompressionContext(ctx: *mut DecompressionCtx) -> size_t;
    pub fn LZ4F_decompress(
        ctx: *mut DecompressionCtx,
        dst_buffer: *mut c_void,
        dst_size_ptr: *mut size_t,
        src_buffer: *const c_void,
        src_size_ptr: *mut size_t,
        opt: *const DecompressionOptions,
    ) -> size_t;
    pub fn LZ4F_getErrorName(code: size_t) -> *const c_char;
}
