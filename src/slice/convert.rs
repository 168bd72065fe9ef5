//! Zero-copy conversions from common byte sources into [`Slice`].
//!
//! Every impl borrows the source's current address and length; none of them
//! allocate. The borrow keeps the source from being resized while a view
//! into it is alive.

use std::ffi::CStr;

use super::Slice;

impl<'a> From<&'a [u8]> for Slice<'a> {
    fn from(value: &'a [u8]) -> Self {
        Slice::new(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Slice<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Slice::new(value.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for Slice<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Slice::new(value.as_slice())
    }
}

impl<'a> From<&'a str> for Slice<'a> {
    fn from(value: &'a str) -> Self {
        Slice::new(value.as_bytes())
    }
}

impl<'a> From<&'a String> for Slice<'a> {
    fn from(value: &'a String) -> Self {
        Slice::new(value.as_bytes())
    }
}

impl<'a> From<&'a CStr> for Slice<'a> {
    fn from(value: &'a CStr) -> Self {
        Slice::from_cstr(value)
    }
}

#[cfg(feature = "type_bytes")]
impl<'a> From<&'a bytes::Bytes> for Slice<'a> {
    fn from(value: &'a bytes::Bytes) -> Self {
        Slice::new(value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::*;

    #[test]
    fn sources_share_storage() {
        let vec = b"abc".to_vec();
        let string = String::from("abc");

        let from_vec = Slice::from(&vec);
        let from_string = Slice::from(&string);

        assert_eq!(from_vec.as_ptr(), vec.as_ptr());
        assert_eq!(from_string.as_ptr(), string.as_ptr());
        assert_eq!(from_vec, from_string);
    }

    #[test]
    fn cstr_excludes_terminator() {
        let owned = CString::new("hello").unwrap();
        let view = Slice::from(owned.as_c_str());
        assert_eq!(view.len(), 5);
        assert_eq!(view, Slice::from("hello"));

        let literal = Slice::from_cstr(c"lit");
        assert_eq!(literal.len(), 3);
    }

    #[test]
    fn raw_nul_terminated_scans_to_first_nul() {
        let buf = b"key\0trailing\0";
        let view = unsafe { Slice::from_nul_terminated(buf.as_ptr().cast()) };
        assert_eq!(view, Slice::from("key"));
        assert_eq!(view.as_ptr(), buf.as_ptr());
    }

    #[test]
    fn empty_sources() {
        assert!(Slice::from("").is_empty());
        assert!(Slice::from(&Vec::<u8>::new()).is_empty());
        assert_eq!(Slice::from(&[0u8; 0]), Slice::default());
    }

    #[cfg(feature = "type_bytes")]
    #[test]
    fn bytes_borrows_shared_buffer() {
        let shared = bytes::Bytes::from_static(b"hello! keyslice");
        let view = Slice::from(&shared);
        assert_eq!(view.as_ptr(), shared.as_ptr());
        assert_eq!(view.len(), shared.len());
    }
}
