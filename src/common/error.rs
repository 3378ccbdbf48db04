use std::{convert, error, fmt, io, result};

/// Errors reported by liblz4, plus the two conditions this crate raises
/// itself: result-buffer growth failure and input that ends before the
/// frame does.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    Generic = 1,
    MaxBlockSizeInvalid = 2,
    BlockModeInvalid = 3,
    ContentChecksumFlagInvalid = 4,
    CompressionLevelInvalid = 5,
    HeaderVersionWrong = 6,
    BlockChecksumInvalid = 7,
    ReservedFlagSet = 8,
    /// Raised by liblz4 on internal allocation failure, and by this crate
    /// when the decompression result buffer cannot be grown.
    AllocationFailed = 9,
    SrcSizeTooLarge = 10,
    DstMaxSizeTooSmall = 11,
    FrameHeaderIncomplete = 12,
    FrameTypeUnknown = 13,
    FrameSizeWrong = 14,
    SrcPtrWrong = 15,
    DecompressionFailed = 16,
    HeaderChecksumInvalid = 17,
    ContentChecksumInvalid = 18,
    FrameDecodingAlreadyStarted = 19,
    /// The compressed input was exhausted while the frame parser still
    /// expected more bytes. Not a liblz4 code; slot 20 is its table end.
    CompressedDataIncomplete = 21,
}

/// Largest error index this crate maps; anything above it is not an error
/// code on the C surface.
pub(crate) const ERROR_INDEX_MAX: usize = ErrorKind::CompressedDataIncomplete.index();

impl ErrorKind {
    /// Slot in liblz4's error table. Negated, this is the status code
    /// returned across the C ABI.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        match index {
            2 => Self::MaxBlockSizeInvalid,
            3 => Self::BlockModeInvalid,
            4 => Self::ContentChecksumFlagInvalid,
            5 => Self::CompressionLevelInvalid,
            6 => Self::HeaderVersionWrong,
            7 => Self::BlockChecksumInvalid,
            8 => Self::ReservedFlagSet,
            9 => Self::AllocationFailed,
            10 => Self::SrcSizeTooLarge,
            11 => Self::DstMaxSizeTooSmall,
            12 => Self::FrameHeaderIncomplete,
            13 => Self::FrameTypeUnknown,
            14 => Self::FrameSizeWrong,
            15 => Self::SrcPtrWrong,
            16 => Self::DecompressionFailed,
            17 => Self::HeaderChecksumInvalid,
            18 => Self::ContentChecksumInvalid,
            19 => Self::FrameDecodingAlreadyStarted,
            21 => Self::CompressedDataIncomplete,
            _ => Self::Generic,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> result::Result<(), fmt::Error> {
        <Self as fmt::Debug>::fmt(self, f)
    }
}

/// The error type for compression/decompression operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the corresponding `ErrorKind` for this error.
    pub const fn kind(self) -> ErrorKind {
        self.kind
    }
}

impl convert::From<Error> for io::Error {
    fn from(err: Error) -> Self {
        Self::new(io::ErrorKind::Other, err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> result::Result<(), fmt::Error> {
        <ErrorKind as fmt::Display>::fmt(&self.kind, f)
    }
}

impl error::Error for Error {}

/// A specialized [`Result`] type for compression/decompression operations.
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
pub type Result<T> = result::Result<T, Error>;

/// Converts a raw liblz4 status code into a `Result`.
///
/// Mirrors `LZ4F_isError`: error codes are `(size_t)-index` for small
/// positive indices, so a wrapped negation inside the table range marks
/// an error and everything else is a payload value.
pub(crate) fn result_from_code(code: usize) -> Result<usize> {
    let index = code.wrapping_neg();
    if index != 0 && index <= ERROR_INDEX_MAX {
        Err(Error::new(ErrorKind::from_index(index)))
    } else {
        Ok(code)
    }
}
