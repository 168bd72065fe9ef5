//! Borrowed byte views.
//!
//! [`Slice`] is the handle passed wherever the engine needs a key, a value or
//! an encoded record without taking ownership. It is a shared borrow with a
//! lifetime, so the "storage must outlive the view" contract is checked by the
//! compiler.
mod convert;
mod view;

pub use view::Slice;
