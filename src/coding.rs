//! Fixed-width and varint codecs over [`Slice`].
//!
//! Encoders append little-endian bytes to a `Vec<u8>`. Decoders read from the
//! front of a `&mut Slice` and narrow it past what they consumed, so a record
//! can be parsed field by field without copying. A failed decode leaves the
//! input untouched.

use crate::{
    error::{SliceError, SliceResult},
    logging::slice_log,
    slice::Slice,
};

const MAX_VARINT32_LEN: usize = 5;
const MAX_VARINT64_LEN: usize = 10;

/// Append `value` as 4 little-endian bytes.
pub fn put_fixed32(dst: &mut Vec<u8>, value: u32) {
    dst.extend_from_slice(&value.to_le_bytes());
}

/// Append `value` as 8 little-endian bytes.
pub fn put_fixed64(dst: &mut Vec<u8>, value: u64) {
    dst.extend_from_slice(&value.to_le_bytes());
}

/// Append `value` as a varint of at most 5 bytes.
pub fn put_varint32(dst: &mut Vec<u8>, value: u32) {
    put_varint64(dst, u64::from(value));
}

/// Append `value` as a varint of at most 10 bytes.
pub fn put_varint64(dst: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        dst.push((value as u8) | 0x80);
        value >>= 7;
    }
    dst.push(value as u8);
}

/// Append the length of `value` as a varint32 followed by its bytes.
///
/// # Panics
///
/// Panics if `value` is longer than `u32::MAX` bytes.
pub fn put_length_prefixed_slice(dst: &mut Vec<u8>, value: Slice<'_>) {
    let len = u32::try_from(value.len()).unwrap_or_else(|_| {
        panic!(
            "length-prefixed slice of {} bytes exceeds u32::MAX",
            value.len()
        )
    });
    put_varint32(dst, len);
    dst.extend_from_slice(value.as_bytes());
}

/// Number of bytes [`put_varint64`] emits for `value`.
pub fn varint_length(mut value: u64) -> usize {
    let mut len = 1;
    while value >= 0x80 {
        value >>= 7;
        len += 1;
    }
    len
}

/// Decode 4 little-endian bytes.
pub fn get_fixed32(input: &mut Slice<'_>) -> SliceResult<u32> {
    let bytes = take(input, 4)?;
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes.as_bytes());
    Ok(u32::from_le_bytes(buf))
}

/// Decode 8 little-endian bytes.
pub fn get_fixed64(input: &mut Slice<'_>) -> SliceResult<u64> {
    let bytes = take(input, 8)?;
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes.as_bytes());
    Ok(u64::from_le_bytes(buf))
}

/// Decode a varint that must fit in 32 bits.
pub fn get_varint32(input: &mut Slice<'_>) -> SliceResult<u32> {
    let (value, consumed) = decode_varint(*input, MAX_VARINT32_LEN, 32)?;
    input.remove_prefix(consumed);
    // decode_varint rejects anything wider than 32 bits
    Ok(value as u32)
}

/// Decode a varint that must fit in 64 bits.
pub fn get_varint64(input: &mut Slice<'_>) -> SliceResult<u64> {
    let (value, consumed) = decode_varint(*input, MAX_VARINT64_LEN, 64)?;
    input.remove_prefix(consumed);
    Ok(value)
}

/// Decode a varint32 length followed by that many bytes, returned as a view
/// into the same storage as `input`.
pub fn get_length_prefixed_slice<'a>(input: &mut Slice<'a>) -> SliceResult<Slice<'a>> {
    let mut cursor = *input;
    let len = get_varint32(&mut cursor)? as usize;
    let value = take(&mut cursor, len)?;
    *input = cursor;
    Ok(value)
}

fn take<'a>(input: &mut Slice<'a>, n: usize) -> SliceResult<Slice<'a>> {
    let remaining = input.len();
    input
        .split_prefix(n)
        .ok_or_else(|| truncated(n, remaining))
}

fn decode_varint(input: Slice<'_>, max_len: usize, bits: u32) -> SliceResult<(u64, usize)> {
    let bytes = input.as_bytes();
    let mut value = 0u64;
    for (i, &byte) in bytes.iter().take(max_len).enumerate() {
        let shift = 7 * i as u32;
        let payload = u64::from(byte & 0x7f);
        if i == max_len - 1 && (byte & 0x80 != 0 || payload >> (bits - shift) != 0) {
            slice_log!(
                log::Level::Debug,
                "varint_malformed",
                "bits={} len={}",
                bits,
                max_len
            );
            return Err(SliceError::MalformedVarint { bits });
        }
        value |= payload << shift;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    // Every byte seen so far had its continuation bit set.
    Err(truncated(bytes.len() + 1, bytes.len()))
}

fn truncated(needed: usize, remaining: usize) -> SliceError {
    slice_log!(
        log::Level::Debug,
        "decode_truncated",
        "needed={} remaining={}",
        needed,
        remaining
    );
    SliceError::Truncated { needed, remaining }
}
