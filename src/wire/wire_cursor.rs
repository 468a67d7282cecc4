use crate::wire::WireEncodeError;

/// Output buffer with a write offset, the destination for all encoding.
///
/// A cursor is either bounded by a fixed byte limit or unbounded. Bounded
/// cursors mirror a caller-supplied fixed buffer: any write that would
/// exceed the limit fails with `CapacityExceeded` before mutating the
/// buffer, so bytes written by earlier operations stay intact. The caller
/// must still discard the whole message after a failed write.
pub struct WireCursor {
    buf: Vec<u8>,
    max_size: Option<usize>,
}

impl WireCursor {
    /// Creates a cursor that refuses to grow past `max_size` bytes.
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            buf: Vec::with_capacity(max_size),
            max_size: Some(max_size),
        }
    }

    /// Creates a cursor with no size limit.
    pub fn unbounded() -> Self {
        Self {
            buf: Vec::new(),
            max_size: None,
        }
    }

    /// Appends a single byte.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), WireEncodeError> {
        if self.max_size.is_some_and(|max_size| self.buf.len() >= max_size) {
            return Err(WireEncodeError::CapacityExceeded);
        }

        self.buf.push(byte);

        Ok(())
    }

    /// Appends a byte slice. The capacity check covers the whole slice, so
    /// a failing call writes nothing.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), WireEncodeError> {
        if self
            .max_size
            .is_some_and(|max_size| self.buf.len() + data.len() > max_size)
        {
            return Err(WireEncodeError::CapacityExceeded);
        }

        self.buf.extend_from_slice(data);

        Ok(())
    }

    /// Number of bytes written so far.
    pub fn bytes_written(&self) -> usize {
        self.buf.len()
    }

    /// Remaining room, or `None` for an unbounded cursor.
    pub fn remaining(&self) -> Option<usize> {
        self.max_size.map(|max_size| max_size - self.buf.len())
    }

    /// The bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the cursor, returning the written bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}
