//! Key ordering used by tables and indexes built on [`Slice`].

use std::cmp::Ordering;

use crate::slice::Slice;

/// Total order over keys plus the key-shortening hooks index blocks use.
///
/// Implementations must be thread-safe and must order keys identically for
/// the lifetime of any data written with them; [`Comparator::name`] is stored
/// next to that data so a mismatch can be detected on open.
pub trait Comparator: Send + Sync {
    /// Stable identifier for this ordering.
    fn name(&self) -> &'static str;

    /// Three-way comparison of two keys.
    fn compare(&self, a: Slice<'_>, b: Slice<'_>) -> Ordering;

    /// If `start < limit`, may shorten `start` to some key `k` with
    /// `start <= k < limit`. Leaving `start` unchanged is always correct.
    fn find_shortest_separator(&self, start: &mut Vec<u8>, limit: Slice<'_>);

    /// May shorten `key` to some key `k >= key`. Leaving `key` unchanged is
    /// always correct.
    fn find_short_successor(&self, key: &mut Vec<u8>);
}

/// Lexicographic unsigned-byte ordering, identical to [`Slice::compare`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BytewiseComparator;

impl BytewiseComparator {
    /// Name recorded for data ordered by this comparator.
    pub const NAME: &'static str = "keyslice.BytewiseComparator";
}

impl Comparator for BytewiseComparator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compare(&self, a: Slice<'_>, b: Slice<'_>) -> Ordering {
        a.compare(b)
    }

    fn find_shortest_separator(&self, start: &mut Vec<u8>, limit: Slice<'_>) {
        let current = Slice::new(start);
        let min_len = current.len().min(limit.len());
        let diff_index = current.difference_offset(limit);
        if diff_index >= min_len {
            // One key is a prefix of the other.
            return;
        }

        let diff_byte = start[diff_index];
        if diff_byte < u8::MAX && diff_byte + 1 < limit.byte_at(diff_index) {
            start[diff_index] += 1;
            start.truncate(diff_index + 1);
            debug_assert_eq!(self.compare(Slice::new(start), limit), Ordering::Less);
        }
    }

    fn find_short_successor(&self, key: &mut Vec<u8>) {
        if let Some(pos) = key.iter().position(|byte| *byte != u8::MAX) {
            key[pos] += 1;
            key.truncate(pos + 1);
        }
        // All 0xff (or empty): nothing shorter sorts after it.
    }
}
