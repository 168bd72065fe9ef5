#![deny(missing_docs)]
//! Zero-copy byte views for storage engines.
//!
//! [`Slice`] is the argument and return type for keys, values and encoded
//! records crossing API boundaries. It borrows bytes from whatever owns them
//! (a `Vec<u8>`, a `String`, a literal, a C string, a `bytes::Bytes` with the
//! `type_bytes` feature) and never allocates or copies unless asked to with
//! [`Slice::to_vec`].

mod logging;

/// Borrowed byte views.
pub mod slice;

/// Key ordering and index-key shortening.
pub mod comparator;

/// Fixed-width and varint codecs that consume a [`Slice`].
pub mod coding;

/// Errors for checked slice operations and decoding.
pub mod error;

pub use crate::{
    comparator::{BytewiseComparator, Comparator},
    error::{SliceError, SliceResult},
    slice::Slice,
};
