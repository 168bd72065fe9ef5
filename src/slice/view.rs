//! Safe borrowed byte view.

use std::{
    borrow::{Borrow, Cow},
    cmp::Ordering,
    ffi::{c_char, CStr},
    fmt,
    ops::Index,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{SliceError, SliceResult},
    logging::slice_log,
};

/// Borrowed view over `len()` bytes owned elsewhere.
///
/// Copying a `Slice` copies the (address, length) pair only. The view can be
/// narrowed from the front with [`Slice::remove_prefix`] or reset with
/// [`Slice::clear`]; it never grows and never touches the bytes it covers.
///
/// Out-of-range indexing and over-long prefix removal panic in every build
/// profile. Use [`Slice::get`], [`Slice::try_byte_at`] or
/// [`Slice::try_remove_prefix`] when the bound comes from untrusted input.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Slice<'a> {
    data: &'a [u8],
}

impl<'a> Slice<'a> {
    /// Create a view over `data`.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// The empty view.
    #[inline]
    pub const fn empty() -> Self {
        Self { data: &[] }
    }

    /// Create a view over `len` bytes starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, properly aligned (always true for `u8`) and
    /// valid for reads of `len` bytes for all of `'a`. The bytes must not be
    /// mutated or freed while the view or any copy of it is alive.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> Self {
        debug_assert!(!ptr.is_null());
        Self {
            data: unsafe { std::slice::from_raw_parts(ptr, len) },
        }
    }

    /// Create a view over a NUL-terminated string, excluding the terminator.
    #[inline]
    pub fn from_cstr(s: &'a CStr) -> Self {
        Self { data: s.to_bytes() }
    }

    /// Create a view by scanning `ptr` up to its first NUL byte.
    ///
    /// # Safety
    ///
    /// Same requirements as [`CStr::from_ptr`]: `ptr` must point to a
    /// NUL-terminated buffer that stays valid and unmodified for `'a`.
    #[inline]
    pub unsafe fn from_nul_terminated(ptr: *const c_char) -> Self {
        Self::from_cstr(unsafe { CStr::from_ptr(ptr) })
    }

    /// Length of the view in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the viewed bytes with the lifetime of the backing storage.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Pointer to the first viewed byte. Never null.
    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// Return the `index`-th byte.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    #[track_caller]
    pub fn byte_at(&self, index: usize) -> u8 {
        match self.data.get(index) {
            Some(byte) => *byte,
            None => index_out_of_range(index, self.len()),
        }
    }

    /// Return the `index`-th byte, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// Checked form of [`Slice::byte_at`].
    pub fn try_byte_at(&self, index: usize) -> SliceResult<u8> {
        self.get(index).ok_or_else(|| {
            slice_log!(
                log::Level::Debug,
                "slice_index_rejected",
                "index={} len={}",
                index,
                self.len()
            );
            SliceError::IndexOutOfBounds {
                index,
                len: self.len(),
            }
        })
    }

    /// Reset to the empty view. The previously viewed bytes are untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.data = &[];
    }

    /// Drop the first `n` bytes from the view.
    ///
    /// # Panics
    ///
    /// Panics if `n > self.len()`.
    #[inline]
    #[track_caller]
    pub fn remove_prefix(&mut self, n: usize) {
        if n > self.len() {
            prefix_out_of_range(n, self.len());
        }
        self.data = &self.data[n..];
    }

    /// Checked form of [`Slice::remove_prefix`]; leaves the view unchanged
    /// on error.
    pub fn try_remove_prefix(&mut self, n: usize) -> SliceResult<()> {
        if n > self.len() {
            slice_log!(
                log::Level::Debug,
                "slice_prefix_rejected",
                "n={} len={}",
                n,
                self.len()
            );
            return Err(SliceError::PrefixOutOfBounds { n, len: self.len() });
        }
        self.data = &self.data[n..];
        Ok(())
    }

    /// Split off the first `n` bytes and narrow `self` past them.
    ///
    /// Returns `None` and leaves `self` unchanged if fewer than `n` bytes
    /// remain.
    pub fn split_prefix(&mut self, n: usize) -> Option<Slice<'a>> {
        if n > self.len() {
            return None;
        }
        let (head, tail) = self.data.split_at(n);
        self.data = tail;
        Some(Slice::new(head))
    }

    /// Whether `prefix` is a prefix of this view. Always true for an empty
    /// `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: Slice<'_>) -> bool {
        self.data.starts_with(prefix.data)
    }

    /// Three-way lexicographic comparison of unsigned bytes; on a shared
    /// prefix the shorter view sorts first.
    #[inline]
    pub fn compare(&self, other: Slice<'_>) -> Ordering {
        self.data.cmp(other.data)
    }

    /// Index of the first byte where the views differ, or the length of the
    /// shorter view when one is a prefix of the other.
    pub fn difference_offset(&self, other: Slice<'_>) -> usize {
        self.data
            .iter()
            .zip(other.data)
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Copy the viewed bytes into a new owned buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Render the bytes as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.data)
    }
}

#[cold]
#[track_caller]
fn index_out_of_range(index: usize, len: usize) -> ! {
    panic!("slice index {index} out of range for slice of length {len}")
}

#[cold]
#[track_caller]
fn prefix_out_of_range(n: usize, len: usize) -> ! {
    panic!("cannot remove {n} bytes from slice of length {len}")
}

impl PartialOrd for Slice<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slice<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl Index<usize> for Slice<'_> {
    type Output = u8;

    #[track_caller]
    fn index(&self, index: usize) -> &u8 {
        match self.data.get(index) {
            Some(byte) => byte,
            None => index_out_of_range(index, self.len()),
        }
    }
}

impl PartialEq<[u8]> for Slice<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.data == other
    }
}

impl PartialEq<&[u8]> for Slice<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.data == *other
    }
}

impl PartialEq<Slice<'_>> for [u8] {
    fn eq(&self, other: &Slice<'_>) -> bool {
        self == other.data
    }
}

impl AsRef<[u8]> for Slice<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl Borrow<[u8]> for Slice<'_> {
    fn borrow(&self) -> &[u8] {
        self.data
    }
}

impl fmt::Debug for Slice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slice(\"{}\")", self.data.escape_ascii())
    }
}

impl Serialize for Slice<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.data)
    }
}

impl<'de> Deserialize<'de> for Slice<'de> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BorrowedBytes;

        impl<'de> de::Visitor<'de> for BorrowedBytes {
            type Value = Slice<'de>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a borrowed byte string")
            }

            fn visit_borrowed_bytes<E: de::Error>(self, v: &'de [u8]) -> Result<Self::Value, E> {
                Ok(Slice::new(v))
            }

            fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<Self::Value, E> {
                Ok(Slice::new(v.as_bytes()))
            }
        }

        deserializer.deserialize_bytes(BorrowedBytes)
    }
}
