//! String hashing for the platform flag store.
//!
//! The store's branching layout (and therefore the order `cmod fmt` prints
//! platforms in) is a function of this hash, so it must stay FNV-1a 64.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Compute the 64-bit FNV-1a hash of `s`.
pub fn fnv1a(s: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for &byte in s.as_bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Iterator over the 2-bit child selectors derived from a hash.
///
/// Yields the top two bits, then shifts the hash left by two. After 32 steps
/// every selector is 0.
#[derive(Debug, Clone, Copy)]
pub struct Selectors(u64);

impl Selectors {
    pub fn new(hash: u64) -> Self {
        Self(hash)
    }
}

impl Iterator for Selectors {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let slot = (self.0 >> 62) as usize;
        self.0 <<= 2;
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(fnv1a(""), 0xcbf29ce484222325);
        assert_eq!(fnv1a("a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv1a("foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(fnv1a("ab"), fnv1a("ba"));
    }

    #[test]
    fn selectors_walk_the_hash_two_bits_at_a_time() {
        let slots: Vec<usize> = Selectors::new(0b10_01_11 << 58).take(4).collect();
        assert_eq!(slots, vec![2, 1, 3, 0]);
    }

    #[test]
    fn selectors_run_out_to_zero() {
        let mut sel = Selectors::new(u64::MAX);
        for _ in 0..32 {
            assert_eq!(sel.next(), Some(3));
        }
        assert_eq!(sel.next(), Some(0));
    }
}
