//! Fixed-capacity UTF-8 string.
//!
//! [`Cstring<N>`] stores up to `N` bytes inline and never allocates. Instead of failing, operations
//! that don't fit truncate at a character boundary and record the problem in sticky
//! [`ErrorFlags`], to be checked once after a whole chain of operations.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::AddAssign;
use core::str;

use crate::compare::ByteStr;

bitflags::bitflags! {
    /// Sticky error state of a [`Cstring`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ErrorFlags: u8 {
        /// Content was cut off because the capacity was exceeded.
        const OVERFLOW = 1 << 0;
        /// A position did not denote a character inside the string.
        const OUT_OF_RANGE = 1 << 1;
    }
}

/// String of at most `N` bytes of UTF-8.
#[derive(Clone)]
pub struct Cstring<const N: usize> {
    buf: [u8; N],
    len: usize,
    flags: ErrorFlags,
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }

    let mut index = index;
    while !s.is_char_boundary(index) {
        index -= 1;
    }

    index
}

impl<const N: usize> Cstring<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            flags: ErrorFlags::empty(),
        }
    }

    /// Renders `value` through its `Display` impl, truncated to the capacity.
    pub fn from_display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        let mut s = Self::new();
        // Only a failing `Display` impl can error here, keep whatever it wrote.
        let _ = fmt::Write::write_fmt(&mut s, format_args!("{value}"));

        s
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of characters, as opposed to bytes.
    pub fn characters(&self) -> usize {
        self.as_str().chars().count()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: every mutation copies whole characters from `str`s or replaces ASCII bytes with
        // ASCII bytes, and cuts only at character boundaries, so `buf[..len]` is always UTF-8.
        unsafe { str::from_utf8_unchecked(&self.buf[..self.len]) }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn error_flags(&self) -> ErrorFlags {
        self.flags
    }

    #[inline]
    pub fn clear_error_flags(&mut self) {
        self.flags = ErrorFlags::empty();
    }

    /// Empties the string and clears the error flags.
    pub fn clear(&mut self) {
        self.len = 0;
        self.flags = ErrorFlags::empty();
    }

    /// Appends as much of `s` as fits, sets [`ErrorFlags::OVERFLOW`] if anything is left over.
    pub fn push_str(&mut self, s: &str) {
        let room = N - self.len;
        let take = if s.len() <= room {
            s.len()
        } else {
            self.flags |= ErrorFlags::OVERFLOW;
            floor_char_boundary(s, room)
        };

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
    }

    pub fn push(&mut self, ch: char) {
        self.push_str(ch.encode_utf8(&mut [0; 4]));
    }

    /// At most `len` bytes starting at byte `pos`, shortened to end on a character boundary.
    ///
    /// The result inherits the error flags. A `pos` that isn't the start of a character sets
    /// [`ErrorFlags::OUT_OF_RANGE`] and yields an empty string.
    pub fn substr(&self, pos: usize, len: usize) -> Self {
        let end = pos.saturating_add(len);
        self.slice_or_flag(pos, end, pos < self.len)
    }

    /// The bytes in `[from, to)`, the Arduino `substring` flavor of [`Cstring::substr`].
    pub fn substring(&self, from: usize, to: usize) -> Self {
        self.slice_or_flag(from, to, from < self.len && from <= to)
    }

    fn slice_or_flag(&self, from: usize, to: usize, valid: bool) -> Self {
        let mut r = Self::new();
        r.flags = self.flags;

        let s = self.as_str();
        if !valid || !s.is_char_boundary(from) {
            r.flags |= ErrorFlags::OUT_OF_RANGE;
            return r;
        }

        let to = floor_char_boundary(s, to);
        r.push_str(&s[from..to]);

        r
    }

    /// Byte position of the first occurrence of `pat` at or after `from`.
    pub fn find(&self, pat: &str, from: usize) -> Option<usize> {
        let tail = self.as_str().get(from..)?;
        tail.find(pat).map(|i| i + from)
    }

    /// Byte position of the last occurrence of `pat` at or after `from`.
    pub fn rfind(&self, pat: &str, from: usize) -> Option<usize> {
        let tail = self.as_str().get(from..)?;
        tail.rfind(pat).map(|i| i + from)
    }

    #[inline]
    pub fn starts_with(&self, pat: &str) -> bool {
        self.as_str().starts_with(pat)
    }

    #[inline]
    pub fn ends_with(&self, pat: &str) -> bool {
        self.as_str().ends_with(pat)
    }

    /// Cuts the string off at byte `pos`, rounded down to a character boundary.
    pub fn erase(&mut self, pos: usize) {
        self.len = floor_char_boundary(self.as_str(), pos);
    }

    /// Strips leading and trailing spaces.
    pub fn trim(&mut self) {
        self.ltrim();
        self.rtrim();
    }

    pub fn ltrim(&mut self) {
        let skip = self.as_bytes().iter().take_while(|&&b| b == b' ').count();
        self.buf.copy_within(skip..self.len, 0);
        self.len -= skip;
    }

    pub fn rtrim(&mut self) {
        let keep = self.as_str().trim_end_matches(' ').len();
        self.len = keep;
    }

    /// ASCII upper case, other characters are left alone.
    pub fn to_upper(&mut self) {
        self.buf[..self.len].make_ascii_uppercase();
    }

    /// ASCII lower case, other characters are left alone.
    pub fn to_lower(&mut self) {
        self.buf[..self.len].make_ascii_lowercase();
    }

    /// Appends `fill` until the string is `to_len` bytes long or the next one wouldn't fit.
    ///
    /// Asking for more than the capacity pads up to the capacity and sets
    /// [`ErrorFlags::OVERFLOW`].
    pub fn rpad(&mut self, to_len: usize, fill: char) {
        let to_len = if to_len > N {
            self.flags |= ErrorFlags::OVERFLOW;
            N
        } else {
            to_len
        };

        while self.len + fill.len_utf8() <= to_len {
            self.push(fill);
        }
    }
}

impl<const N: usize> Default for Cstring<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<&str> for Cstring<N> {
    fn from(s: &str) -> Self {
        let mut r = Self::new();
        r.push_str(s);

        r
    }
}

/// Never fails: overflow is recorded in the error flags instead.
impl<const N: usize> fmt::Write for Cstring<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl<const N: usize> AddAssign<&str> for Cstring<N> {
    fn add_assign(&mut self, rhs: &str) {
        self.push_str(rhs);
    }
}

impl<const N: usize> AddAssign<char> for Cstring<N> {
    fn add_assign(&mut self, rhs: char) {
        self.push(rhs);
    }
}

/// Appends the content, the flags of `rhs` carry over.
impl<const N: usize, const M: usize> AddAssign<&Cstring<M>> for Cstring<N> {
    fn add_assign(&mut self, rhs: &Cstring<M>) {
        self.flags |= rhs.flags;
        self.push_str(rhs.as_str());
    }
}

impl<const N: usize> AsRef<str> for Cstring<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<[u8]> for Cstring<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> ByteStr for Cstring<N> {
    #[inline]
    fn as_byte_str(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> fmt::Display for Cstring<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Debug for Cstring<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)?;
        if !self.flags.is_empty() {
            write!(f, " {:?}", self.flags)?;
        }

        Ok(())
    }
}

// Comparisons look at the content only and ignore the error flags.

impl<const N: usize, const M: usize> PartialEq<Cstring<M>> for Cstring<N> {
    fn eq(&self, other: &Cstring<M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for Cstring<N> {}

impl<const N: usize> PartialEq<str> for Cstring<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for Cstring<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> PartialEq<Cstring<N>> for str {
    fn eq(&self, other: &Cstring<N>) -> bool {
        self == other.as_str()
    }
}

impl<const N: usize> PartialEq<Cstring<N>> for &str {
    fn eq(&self, other: &Cstring<N>) -> bool {
        *self == other.as_str()
    }
}

impl<const N: usize, const M: usize> PartialOrd<Cstring<M>> for Cstring<N> {
    fn partial_cmp(&self, other: &Cstring<M>) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_bytes()))
    }
}

impl<const N: usize> Ord for Cstring<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl<const N: usize> PartialOrd<str> for Cstring<N> {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_bytes()))
    }
}

impl<const N: usize> PartialOrd<&str> for Cstring<N> {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_bytes()))
    }
}

impl<const N: usize> Hash for Cstring<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}
