//! Thin liblz4 frame bindings with a flat C ABI for managed-runtime hosts.
//!
//! The LZ4 algorithm, the frame format and all checksum handling live in
//! liblz4 itself (linked through `lz4-sys`). This crate only exposes the
//! frame API two ways:
//!
//! - a safe Rust API in [`lz4f`], slice in / `Vec` out;
//! - a flat table of unmangled C symbols in [`capi`], suitable for
//!   P/Invoke-style consumption from a managed runtime.
//!
//! # Examples
//!
//! Compress a buffer into an LZ4 frame and restore it:
//!
//! ```
//! use lz4_bridge::lz4f;
//!
//! let data = b"As soon as they had strength, they arose, joined hands again, and went on.";
//!
//! let mut comp = Vec::new();
//! lz4f::compress_to_vec(data, &mut comp, &lz4f::Preferences::default()).unwrap();
//!
//! let orig = lz4f::decompress(&comp).unwrap();
//! assert_eq!(orig.as_slice(), &data[..]);
//! ```
//!
//! [`lz4f`]: lz4f/index.html
//! [`capi`]: capi/index.html

#![deny(unsafe_code)]

// liblz4 object code for the extern blocks in the binding modules.
use lz4_sys as _;

mod common;

pub mod capi;
pub mod lz4f;

pub use common::{version_number, version_string, AppendBuffer, Error, ErrorKind, Result};
