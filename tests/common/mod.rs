//! Common test utilities for integration tests.

/// Seeded generator so failures reproduce.
pub fn rng(seed: u64) -> fastrand::Rng {
    fastrand::Rng::with_seed(seed)
}

/// Random key drawn from a small alphabet so shared prefixes are common.
pub fn random_key(rng: &mut fastrand::Rng, max_len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ab\x00\x7f\x80\xff";
    let len = rng.usize(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.usize(..ALPHABET.len())])
        .collect()
}

/// `count` random keys of at most `max_len` bytes.
pub fn random_keys(rng: &mut fastrand::Rng, count: usize, max_len: usize) -> Vec<Vec<u8>> {
    (0..count).map(|_| random_key(rng, max_len)).collect()
}
