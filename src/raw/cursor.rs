//! Forward-only reads over an immutable byte buffer.

/// A forward-only cursor over a byte slice.
///
/// Reads never fail: a read past the end of the buffer returns as many bytes
/// as remain (possibly none), and callers compare the returned length against
/// what they asked for.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    r: &'a [u8],
    i: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of a buffer.
    pub fn new(r: &'a [u8]) -> Self {
        Self { r, i: 0 }
    }

    /// Offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.i
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.r.len() - self.i
    }

    /// Read up to `n` bytes, advancing past however many were returned.
    pub fn read_n(&mut self, n: usize) -> &'a [u8] {
        let n = n.min(self.remaining());
        let s = &self.r[self.i..self.i + n];
        self.i += n;
        s
    }

    /// Read up to one byte.
    pub fn read_one(&mut self) -> &'a [u8] {
        self.read_n(1)
    }

    /// Read exactly `N` bytes, or nothing at all.
    ///
    /// Unlike [`read_n`](Self::read_n), a short buffer leaves the cursor where
    /// it was.
    pub fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let s = self.r.get(self.i..self.i + N)?;
        self.i += N;
        s.try_into().ok()
    }

    /// Read a null-terminated string.
    ///
    /// Returns the bytes before the terminator and the number of bytes
    /// consumed (including the terminator). If no terminator remains in the
    /// buffer, returns `None` and leaves the cursor in place.
    pub fn read_cstring(&mut self) -> Option<(&'a [u8], usize)> {
        let rest = &self.r[self.i..];
        let end = rest.iter().position(|&b| b == 0)?;
        self.i += end + 1;
        Some((&rest[..end], end + 1))
    }
}
