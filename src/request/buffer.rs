/// Growable read buffer with a fill cursor and a consume cursor.
///
/// ```text
/// [ consumed | pending | unfilled ]
/// 0          ^consumed ^filled    ^capacity
/// ```
///
/// Bytes are read into [`unfilled_mut`], made visible with [`advance`], inspected through
/// [`pending`] and released with [`consume`]. [`compact`] moves the pending bytes back to offset
/// `0` so the unfilled region is always at the tail.
///
/// [`unfilled_mut`]: ReadBuffer::unfilled_mut
/// [`advance`]: ReadBuffer::advance
/// [`pending`]: ReadBuffer::pending
/// [`consume`]: ReadBuffer::consume
/// [`compact`]: ReadBuffer::compact
pub struct ReadBuffer {
    buf: Box<[u8]>,
    filled: usize,
    consumed: usize,
}

impl ReadBuffer {
    /// Create new buffer with exactly `capacity` bytes.
    ///
    /// A zero capacity is bumped to `1` so that [`grow`](ReadBuffer::grow) can double it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity.max(1)].into_boxed_slice(),
            filled: 0,
            consumed: 0,
        }
    }

    /// Returns the total capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if there is no unfilled space left.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled == self.buf.len()
    }

    /// Returns the bytes filled but not yet consumed.
    #[inline]
    pub fn pending(&self) -> &[u8] {
        &self.buf[self.consumed..self.filled]
    }

    /// Returns the unfilled tail for the next read.
    #[inline]
    pub fn unfilled_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.filled..]
    }

    /// Marks `n` bytes of the unfilled tail as filled.
    ///
    /// # Panics
    ///
    /// Panics if `n` is larger than the unfilled length.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        assert!(n <= self.buf.len() - self.filled, "advance past buffer capacity");
        self.filled += n;
    }

    /// Marks `n` pending bytes as consumed.
    ///
    /// # Panics
    ///
    /// Panics if `n` is larger than the pending length.
    #[inline]
    pub fn consume(&mut self, n: usize) {
        assert!(n <= self.filled - self.consumed, "consume past filled bytes");
        self.consumed += n;
    }

    /// Moves the pending bytes to the front of the buffer.
    pub fn compact(&mut self) {
        if self.consumed == 0 {
            return;
        }
        self.buf.copy_within(self.consumed..self.filled, 0);
        self.filled -= self.consumed;
        self.consumed = 0;
    }

    /// Doubles the capacity, keeping pending bytes at their current offsets.
    pub fn grow(&mut self) {
        let mut buf = vec![0; self.buf.len() * 2].into_boxed_slice();
        buf[..self.filled].copy_from_slice(&self.buf[..self.filled]);
        self.buf = buf;
    }
}

impl std::fmt::Debug for ReadBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ReadBuffer")
            .field("capacity", &self.buf.len())
            .field("filled", &self.filled)
            .field("consumed", &self.consumed)
            .finish()
    }
}
