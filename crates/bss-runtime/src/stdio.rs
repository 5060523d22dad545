//! Bounded formatted writes into fixed-capacity buffers.
//!
//! [`FixedBuf::snprintf`] follows C `snprintf` semantics:
//! - the capacity counts the terminator, so at most `N - 1` content bytes fit
//! - content is always followed by a zero byte (when `N > 0`)
//! - overlong output is truncated, never overflowed
//! - the return value reports the length the full output would have needed
//!
//! Truncation lands on a UTF-8 character boundary so the stored content is
//! always a valid `&str`. For ASCII text this is the same as C byte truncation.

use core::fmt;

/// Outcome of a bounded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatted {
    /// Content bytes stored, excluding the terminator.
    pub written: usize,
    /// Bytes the untruncated output would occupy, excluding the terminator.
    pub required: usize,
}

impl Formatted {
    pub fn truncated(&self) -> bool {
        self.written < self.required
    }
}

/// A text buffer of exactly `N` bytes, terminator included.
///
/// `FixedBuf::new()` is all zero bytes, so a `static` of this type can live
/// in `.bss` alongside zero-initialized integers.
#[derive(Clone)]
pub struct FixedBuf<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> FixedBuf<N> {
    /// Largest content length that still leaves room for the terminator.
    const LIMIT: usize = N.saturating_sub(1);

    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Declared capacity in bytes, terminator included.
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_str(&self) -> &str {
        // Writes only ever copy whole characters
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    /// Content plus its terminating zero byte, as C would see it.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..(self.len + 1).min(N)]
    }

    /// True if every byte is still zero, i.e. nothing was ever kept here.
    pub fn is_zeroed(&self) -> bool {
        self.len == 0 && self.bytes.iter().all(|&b| b == 0)
    }

    pub fn clear(&mut self) {
        self.bytes[..self.len].fill(0);
        self.len = 0;
    }

    /// Replace the contents with formatted output, truncating to capacity.
    pub fn snprintf(&mut self, args: fmt::Arguments<'_>) -> Formatted {
        self.clear();

        let mut sink = Sink {
            buf: self,
            required: 0,
            full: false,
        };
        // A failing Display impl keeps whatever was written before it failed
        let _ = fmt::write(&mut sink, args);
        let required = sink.required;

        Formatted {
            written: self.len,
            required,
        }
    }
}

impl<const N: usize> Default for FixedBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for FixedBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for FixedBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBuf")
            .field("capacity", &N)
            .field("content", &self.as_str())
            .finish()
    }
}

/// `fmt::Write` adapter that counts everything but stores only what fits.
struct Sink<'a, const N: usize> {
    buf: &'a mut FixedBuf<N>,
    required: usize,
    full: bool,
}

impl<const N: usize> fmt::Write for Sink<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.required += s.len();
        if self.full {
            return Ok(());
        }

        let room = FixedBuf::<N>::LIMIT - self.buf.len;
        let take = floor_char_boundary(s, room);
        let start = self.buf.len;
        self.buf.bytes[start..start + take].copy_from_slice(&s.as_bytes()[..take]);
        self.buf.len += take;

        // Once anything is dropped, later pieces must not fill the gap
        if take < s.len() {
            self.full = true;
        }
        Ok(())
    }
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}
