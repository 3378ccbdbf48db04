//! LZ4 Frame Compressor/Decompressor.
//!
//! The frame format is liblz4's self-describing container (magic number,
//! descriptor, compressed blocks, optional checksums). Everything here
//! treats it as an opaque, versioned binary contract owned by liblz4.
//!
//! # Examples
//!
//! ```
//! use lz4_bridge::lz4f;
//!
//! let mut comp = Vec::new();
//! lz4f::compress_to_vec(b"Hello world!", &mut comp, &lz4f::Preferences::default()).unwrap();
//!
//! let orig = lz4f::decompress(&comp).unwrap();
//! assert_eq!(orig.as_slice(), &b"Hello world!"[..]);
//! ```

mod api;
mod binding;
mod frame;
mod frame_info;
mod preferences;

pub use frame::{compress, compress_to_vec, decompress, max_compressed_size};
pub use frame_info::{BlockChecksum, BlockMode, BlockSize, ContentChecksum, FrameInfo, FrameType};
pub use preferences::{
    AutoFlush, FavorDecSpeed, Preferences, PreferencesBuilder, CLEVEL_DEFAULT, CLEVEL_HIGH,
    CLEVEL_MAX,
};

pub(crate) use api::error_name;
