mod api;
mod binding;
mod buffer;
mod error;
mod report;

pub use api::{version_number, version_string};
pub use buffer::AppendBuffer;
pub use error::{Error, ErrorKind, Result};

pub(crate) use error::result_from_code;
pub(crate) use report::Report;

/// Capacity of the scratch buffer one decompression step regenerates into.
pub(crate) const DECOMP_BUF_SIZE: usize = 256;
