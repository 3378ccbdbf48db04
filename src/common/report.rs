/// A result of one successful compression/decompression call.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Report {
    pub(crate) dst_len: usize,
    pub(crate) src_len: Option<usize>,
    pub(crate) expected_src_len: Option<usize>,
}

impl Report {
    /// Returns the length of the data written to the destination buffer.
    pub const fn dst_len(&self) -> usize {
        self.dst_len
    }

    /// Returns the length of the data consumed from the source buffer.
    ///
    /// The value is present only if the underlying liblz4 API
    /// explicitly returns one.
    pub const fn src_len(&self) -> Option<usize> {
        self.src_len
    }

    /// Returns the number of source bytes the next call should be given,
    /// if the underlying liblz4 API reports one. Zero means the current
    /// frame is fully decoded.
    pub const fn expected_src_len(&self) -> Option<usize> {
        self.expected_src_len
    }
}
