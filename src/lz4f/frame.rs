//! Whole-buffer frame compression/decompression.

use super::{api, Preferences};
use crate::common::{AppendBuffer, Error, ErrorKind, Result, DECOMP_BUF_SIZE};
use std::cmp;

/// Calculates the maximum size of a compressed frame from the original size.
///
/// Use this to size the destination slice for [`compress`].
///
/// [`compress`]: fn.compress.html
pub fn max_compressed_size(original_size: usize, prefs: &Preferences) -> usize {
    api::compress_frame_bound(original_size, prefs)
}

/// Reads data from a slice and writes a compressed frame into another slice.
///
/// Returns the number of bytes written into `dst`. If `dst` is smaller than
/// [`max_compressed_size`], this function may fail with
/// [`ErrorKind::DstMaxSizeTooSmall`].
///
/// # Example
///
/// ```
/// use lz4_bridge::lz4f;
///
/// let data = b"As soon as they had strength, they arose, joined hands again, and went on.";
/// let prefs = lz4f::Preferences::default();
///
/// let mut buf = vec![0u8; lz4f::max_compressed_size(data.len(), &prefs)];
/// let len = lz4f::compress(data, &mut buf, &prefs).unwrap();
/// let compressed = &buf[..len];
/// # assert!(!compressed.is_empty());
/// ```
///
/// [`max_compressed_size`]: fn.max_compressed_size.html
/// [`ErrorKind::DstMaxSizeTooSmall`]: ../enum.ErrorKind.html#variant.DstMaxSizeTooSmall
pub fn compress(src: &[u8], dst: &mut [u8], prefs: &Preferences) -> Result<usize> {
    api::compress_frame(src, dst, prefs).map(|r| r.dst_len())
}

/// Reads data from a slice and appends a compressed frame to a `Vec<u8>`.
///
/// Returns the number of bytes appended. Existing content of `dst` is kept.
///
/// # Example
///
/// ```
/// use lz4_bridge::lz4f;
///
/// let mut buf = Vec::new();
/// lz4f::compress_to_vec(b"Hello world!", &mut buf, &lz4f::Preferences::default()).unwrap();
///
/// assert_eq!(lz4f::decompress(&buf).unwrap(), b"Hello world!".to_vec());
/// ```
pub fn compress_to_vec(src: &[u8], dst: &mut Vec<u8>, prefs: &Preferences) -> Result<usize> {
    let orig_len = dst.len();
    dst.resize(orig_len + max_compressed_size(src.len(), prefs), 0);
    let result = compress(src, &mut dst[orig_len..], prefs);
    dst.truncate(orig_len + result.unwrap_or(0));
    result
}

/// Decompresses a whole LZ4 frame into an owned buffer.
///
/// The decompressed size does not need to be known in advance: output is
/// regenerated through a fixed-size scratch buffer and accumulated until
/// the frame reports completion.
///
/// On any error the partially accumulated output is discarded; the
/// decompression session and all intermediate buffers are released on
/// every path.
///
/// # Example
///
/// ```
/// use lz4_bridge::lz4f;
///
/// let mut comp = Vec::new();
/// lz4f::compress_to_vec(b"Goodnight world!", &mut comp, &lz4f::Preferences::default()).unwrap();
///
/// let orig = lz4f::decompress(&comp).unwrap();
/// assert_eq!(orig.as_slice(), &b"Goodnight world!"[..]);
/// ```
pub fn decompress(src: &[u8]) -> Result<Vec<u8>> {
    let mut ctx = api::DecompressionContext::new()?;
    let mut scratch = [0u8; DECOMP_BUF_SIZE];
    let mut result = AppendBuffer::new();
    let mut consumed = 0;
    // The first window is empty: the initial call consumes nothing and only
    // reports how many header bytes the parser wants next.
    let mut window = 0;
    loop {
        let report = ctx.decompress(&src[consumed..consumed + window], &mut scratch[..], false)?;
        consumed += report.src_len().unwrap_or(0);
        let produced = report.dst_len();
        if produced > 0 {
            result
                .append(&scratch[..produced])
                .map_err(|_| Error::new(ErrorKind::AllocationFailed))?;
        }
        match report.expected_src_len().unwrap_or(0) {
            0 => return Ok(result.into_vec()),
            hint => {
                if consumed >= src.len() {
                    // The parser wants more input than the caller supplied.
                    return Err(Error::new(ErrorKind::CompressedDataIncomplete));
                }
                window = cmp::min(hint, src.len() - consumed);
            }
        }
    }
}
