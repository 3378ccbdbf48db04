use lz4_bridge::capi;
use std::os::raw::c_char;
use std::{ptr, slice, str};

fn compress_via_capi(data: &[u8], level: i32) -> Vec<u8> {
    let mut comp = vec![0u8; capi::lz4b_compress_bound(data.len(), level)];
    let written = unsafe {
        capi::lz4b_compress_frame(data.as_ptr(), data.len(), comp.as_mut_ptr(), comp.len(), level)
    };
    assert!(written > 0);
    comp.truncate(written as usize);
    comp
}

#[test]
fn version_number_matches() {
    assert_eq!(
        capi::lz4b_version_number(),
        lz4_bridge::version_number() as i32
    );
}

#[test]
fn version_string_bounded() {
    let expected = lz4_bridge::version_string().as_bytes();

    let mut buf = [0xAAu8; 32];
    let len = unsafe { capi::lz4b_version_string(buf.as_mut_ptr() as *mut c_char, buf.len()) };
    assert_eq!(&buf[..len], expected);
    assert!(buf[len..].iter().all(|&b| b == 0xAA));

    // A short destination truncates; bytes past the capacity stay intact.
    let mut short = [0xAAu8; 8];
    let len = unsafe { capi::lz4b_version_string(short.as_mut_ptr() as *mut c_char, 2) };
    assert_eq!(len, 2);
    assert_eq!(&short[..2], &expected[..2]);
    assert!(short[2..].iter().all(|&b| b == 0xAA));
}

#[test]
fn compress_bound_deterministic() {
    for &level in &[0, 10, 12] {
        let first = capi::lz4b_compress_bound(65_536, level);
        assert!(first > 0);
        for _ in 0..10 {
            assert_eq!(capi::lz4b_compress_bound(65_536, level), first);
        }
    }
}

#[test]
fn round_trip() {
    let data: Vec<u8> = b"The quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(10_000)
        .collect();
    for &level in &[0, 12] {
        let comp = compress_via_capi(&data, level);

        let mut out: *mut u8 = ptr::null_mut();
        let len = unsafe { capi::lz4b_decompress_frame(&mut out, comp.as_ptr(), comp.len()) };
        assert_eq!(capi::lz4b_is_error(len), 0);
        assert_eq!(len as usize, data.len());
        assert!(!out.is_null());

        let restored = unsafe { slice::from_raw_parts(out, len as usize) }.to_vec();
        assert_eq!(restored, data);
        unsafe { capi::lz4b_free_result(out, len as usize) };
    }
}

#[test]
fn empty_content_round_trip() {
    let comp = compress_via_capi(&[], 0);

    let mut out: *mut u8 = ptr::null_mut();
    let len = unsafe { capi::lz4b_decompress_frame(&mut out, comp.as_ptr(), comp.len()) };
    assert_eq!(len, 0);
    assert!(!out.is_null());
    unsafe { capi::lz4b_free_result(out, 0) };
}

#[test]
fn decompress_garbage_reports_error_without_buffer() {
    let garbage = [0x55u8; 64];
    let mut out: *mut u8 = ptr::null_mut();
    let code = unsafe { capi::lz4b_decompress_frame(&mut out, garbage.as_ptr(), garbage.len()) };
    assert!(code < 0);
    assert_eq!(capi::lz4b_is_error(code), 1);
    assert!(out.is_null());

    let mut name = [0u8; 64];
    let len = unsafe { capi::lz4b_error_name(code, name.as_mut_ptr() as *mut c_char, name.len()) };
    assert!(len > 0);
    assert!(str::from_utf8(&name[..len]).unwrap().starts_with("ERROR"));
}

#[test]
fn truncated_input_reports_incomplete() {
    let comp = compress_via_capi(b"truncation probe", 0);

    let mut out: *mut u8 = ptr::null_mut();
    let code =
        unsafe { capi::lz4b_decompress_frame(&mut out, comp.as_ptr(), comp.len() - 1) };
    assert_eq!(code, capi::LZ4B_ERROR_INCOMPLETE);
    assert!(out.is_null());

    let mut name = [0u8; 64];
    let len = unsafe { capi::lz4b_error_name(code, name.as_mut_ptr() as *mut c_char, name.len()) };
    assert_eq!(
        str::from_utf8(&name[..len]).unwrap(),
        "ERROR_compressedData_incomplete"
    );
}

#[test]
fn error_name_for_library_code() {
    // Corrupted magic number: liblz4 reports an unknown frame type.
    let mut comp = compress_via_capi(b"corruption probe", 0);
    comp[0] ^= 0xFF;

    let mut out: *mut u8 = ptr::null_mut();
    let code = unsafe { capi::lz4b_decompress_frame(&mut out, comp.as_ptr(), comp.len()) };
    assert_eq!(capi::lz4b_is_error(code), 1);

    let mut name = [0u8; 64];
    let len = unsafe { capi::lz4b_error_name(code, name.as_mut_ptr() as *mut c_char, name.len()) };
    assert_eq!(
        str::from_utf8(&name[..len]).unwrap(),
        "ERROR_frameType_unknown"
    );
}

#[test]
fn null_pointer_arguments() {
    let data = [1u8; 16];

    let code = unsafe { capi::lz4b_decompress_frame(ptr::null_mut(), data.as_ptr(), data.len()) };
    assert_eq!(capi::lz4b_is_error(code), 1);

    let mut out: *mut u8 = ptr::null_mut();
    let code = unsafe { capi::lz4b_decompress_frame(&mut out, ptr::null(), data.len()) };
    assert_eq!(capi::lz4b_is_error(code), 1);
    assert!(out.is_null());

    let mut dst = [0u8; 64];
    let code = unsafe {
        capi::lz4b_compress_frame(ptr::null(), data.len(), dst.as_mut_ptr(), dst.len(), 0)
    };
    assert_eq!(capi::lz4b_is_error(code), 1);

    assert_eq!(
        unsafe { capi::lz4b_version_string(ptr::null_mut(), 16) },
        0
    );

    // Null is ignored.
    unsafe { capi::lz4b_free_result(ptr::null_mut(), 0) };
}
