use std::collections::TryReserveError;

/// Append-only byte buffer with fallible growth.
///
/// Accumulates chunks of regenerated output during streaming decompression.
/// Growth goes through [`try_reserve`] so an allocator refusal surfaces as
/// an error value instead of aborting the process.
///
/// [`try_reserve`]: https://doc.rust-lang.org/std/vec/struct.Vec.html#method.try_reserve
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppendBuffer {
    buf: Vec<u8>,
}

impl AppendBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the number of bytes recorded so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends `chunk` at the end, growing the allocation as needed.
    ///
    /// On growth failure the buffer is unchanged and still usable.
    pub fn append(&mut self, chunk: &[u8]) -> Result<(), TryReserveError> {
        self.buf.try_reserve(chunk.len())?;
        self.buf.extend_from_slice(chunk);
        Ok(())
    }

    /// Consumes the buffer and returns the recorded bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

impl AsRef<[u8]> for AppendBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}
