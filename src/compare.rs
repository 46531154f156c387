//! Element comparison.
//!
//! Every algorithm in this crate asks a [`Comparator`] whether two elements are equal, smaller or
//! greater, it never applies `==` or `<` on its own. Ordinary value types use [`Natural`], which
//! forwards to the native operators. String-like handles have to be ordered by their content:
//! [`Lexicographic`] compares bytes like `strcmp` and [`Collated`] accepts any three-way collation
//! function, e.g. [`ascii_case_insensitive`].

use alloc::boxed::Box;
use alloc::ffi::CString;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ffi::CStr;

/// Three-outcome comparison of an `A` against a `B`.
///
/// Implementations must be consistent: `smaller` has to be a strict weak ordering and `equals` and
/// `greater` have to agree with it. The sort engines do not detect violations, they only promise to
/// terminate and keep every element.
pub trait Comparator<A: ?Sized, B: ?Sized = A> {
    fn compare(&self, a: &A, b: &B) -> Ordering;

    #[inline]
    fn equals(&self, a: &A, b: &B) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    #[inline]
    fn smaller(&self, a: &A, b: &B) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    #[inline]
    fn greater(&self, a: &A, b: &B) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl<A: ?Sized, B: ?Sized, C: Comparator<A, B> + ?Sized> Comparator<A, B> for &C {
    #[inline]
    fn compare(&self, a: &A, b: &B) -> Ordering {
        (**self).compare(a, b)
    }

    #[inline]
    fn equals(&self, a: &A, b: &B) -> bool {
        (**self).equals(a, b)
    }

    #[inline]
    fn smaller(&self, a: &A, b: &B) -> bool {
        (**self).smaller(a, b)
    }

    #[inline]
    fn greater(&self, a: &A, b: &B) -> bool {
        (**self).greater(a, b)
    }
}

/// Native `==`, `<` and `>`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Natural;

impl<A: PartialOrd<B> + ?Sized, B: ?Sized> Comparator<A, B> for Natural {
    #[inline]
    fn compare(&self, a: &A, b: &B) -> Ordering {
        // Incomparable values, e.g. NaN, have no place in an order. Treat them as ties.
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }

    #[inline]
    fn equals(&self, a: &A, b: &B) -> bool {
        a == b
    }

    #[inline]
    fn smaller(&self, a: &A, b: &B) -> bool {
        a < b
    }

    #[inline]
    fn greater(&self, a: &A, b: &B) -> bool {
        a > b
    }
}

/// Equality with the native operator.
#[inline]
pub fn equals<A: PartialEq<B> + ?Sized, B: ?Sized>(a: &A, b: &B) -> bool {
    a == b
}

/// Strict less-than with the native operator.
#[inline]
pub fn smaller<A: PartialOrd<B> + ?Sized, B: ?Sized>(a: &A, b: &B) -> bool {
    a < b
}

/// Strict greater-than with the native operator.
#[inline]
pub fn greater<A: PartialOrd<B> + ?Sized, B: ?Sized>(a: &A, b: &B) -> bool {
    a > b
}

/// Byte view of a string-like value.
///
/// For C strings the terminating nul is not part of the view.
pub trait ByteStr {
    fn as_byte_str(&self) -> &[u8];
}

impl ByteStr for str {
    #[inline]
    fn as_byte_str(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteStr for [u8] {
    #[inline]
    fn as_byte_str(&self) -> &[u8] {
        self
    }
}

impl ByteStr for String {
    #[inline]
    fn as_byte_str(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteStr for Vec<u8> {
    #[inline]
    fn as_byte_str(&self) -> &[u8] {
        self
    }
}

impl ByteStr for CStr {
    #[inline]
    fn as_byte_str(&self) -> &[u8] {
        self.to_bytes()
    }
}

impl ByteStr for CString {
    #[inline]
    fn as_byte_str(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T: ByteStr + ?Sized> ByteStr for &T {
    #[inline]
    fn as_byte_str(&self) -> &[u8] {
        (**self).as_byte_str()
    }
}

impl<T: ByteStr + ?Sized> ByteStr for &mut T {
    #[inline]
    fn as_byte_str(&self) -> &[u8] {
        (**self).as_byte_str()
    }
}

impl<T: ByteStr + ?Sized> ByteStr for Box<T> {
    #[inline]
    fn as_byte_str(&self) -> &[u8] {
        (**self).as_byte_str()
    }
}

impl<T: ByteStr + ?Sized> ByteStr for Rc<T> {
    #[inline]
    fn as_byte_str(&self) -> &[u8] {
        (**self).as_byte_str()
    }
}

/// Byte-wise lexicographic order of string contents, the `strcmp` order.
#[derive(Copy, Clone, Debug, Default)]
pub struct Lexicographic;

impl<A: ByteStr + ?Sized, B: ByteStr + ?Sized> Comparator<A, B> for Lexicographic {
    #[inline]
    fn compare(&self, a: &A, b: &B) -> Ordering {
        a.as_byte_str().cmp(b.as_byte_str())
    }
}

/// String order defined by a collation function over the raw bytes.
///
/// The collation has to be a total order, e.g. break ties of case-folded comparisons with the
/// raw bytes like [`ascii_case_insensitive`] does.
#[derive(Copy, Clone, Debug)]
pub struct Collated<F> {
    collate: F,
}

impl<F> Collated<F>
where
    F: Fn(&[u8], &[u8]) -> Ordering,
{
    pub const fn new(collate: F) -> Self {
        Self { collate }
    }
}

impl Collated<fn(&[u8], &[u8]) -> Ordering> {
    pub const fn ascii_case_insensitive() -> Self {
        Self {
            collate: ascii_case_insensitive,
        }
    }
}

impl<A, B, F> Comparator<A, B> for Collated<F>
where
    A: ByteStr + ?Sized,
    B: ByteStr + ?Sized,
    F: Fn(&[u8], &[u8]) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &A, b: &B) -> Ordering {
        (self.collate)(a.as_byte_str(), b.as_byte_str())
    }
}

/// Orders ASCII letters without regard to case, `"apple" < "Banana" < "cherry"`.
///
/// Strings that only differ in case are ordered by their raw bytes, so `"Apple" < "apple"`.
pub fn ascii_case_insensitive(a: &[u8], b: &[u8]) -> Ordering {
    let folded = a
        .iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase));

    folded.then_with(|| a.cmp(b))
}

/// Inverts another comparator, sorting with it yields non-increasing order.
#[derive(Copy, Clone, Debug, Default)]
pub struct Reversed<C>(pub C);

impl<A: ?Sized, C: Comparator<A>> Comparator<A> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &A, b: &A) -> Ordering {
        self.0.compare(b, a)
    }

    #[inline]
    fn equals(&self, a: &A, b: &A) -> bool {
        self.0.equals(b, a)
    }

    #[inline]
    fn smaller(&self, a: &A, b: &A) -> bool {
        self.0.smaller(b, a)
    }

    #[inline]
    fn greater(&self, a: &A, b: &A) -> bool {
        self.0.greater(b, a)
    }
}
