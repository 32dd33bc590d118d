use rand::Rng;
use std::collections::HashSet;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_owned();
    }

    let mut buf = Vec::with_capacity(13);
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();

    // only ascii digits went in
    buf.into_iter().map(char::from).collect()
}

/// Hands out random base-36 tokens, never the same one twice.
///
/// Candidates are drawn uniformly from `[0, 8^token_length)` and redrawn
/// until one is found that hasn't been seen yet. The caller is responsible
/// for not asking for more tokens than the key space holds; see
/// `Profile::validate`.
pub struct TokenSource {
    key_space: u64,
    seen: HashSet<String>,
    rejections: u64,
}

impl TokenSource {
    /// Panics if `key_space` is zero.
    pub fn new(key_space: u64) -> Self {
        assert!(key_space > 0);
        TokenSource {
            key_space,
            seen: HashSet::new(),
            rejections: 0,
        }
    }

    pub fn with_capacity(key_space: u64, capacity: usize) -> Self {
        let mut ts = TokenSource::new(key_space);
        ts.seen.reserve(capacity);
        ts
    }

    pub fn next<R: Rng>(&mut self, rng: &mut R) -> String {
        loop {
            let candidate = to_base36(rng.gen_range(0, self.key_space));
            if self.seen.insert(candidate.clone()) {
                return candidate;
            }
            self.rejections += 1;
            trace!("rejected duplicate token {}", candidate);
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn rejections(&self) -> u64 {
        self.rejections
    }

    #[cfg(test)]
    pub fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }
}
