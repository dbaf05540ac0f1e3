//! Deterministic 32-bit xorshift generator.
//!
//! Every tile of a render owns one of these, so repeated runs with the
//! same seed and tile layout reproduce the image bit for bit. The
//! generator implements [`RngCore`] and [`SeedableRng`], which lets it
//! stand in anywhere the `rand` traits are expected.

use rand::{Error, RngCore, SeedableRng};

/// Replacement state for a zero seed. Xorshift maps zero to zero, so a
/// zero-seeded generator would emit zeros forever.
const ZERO_SEED_FALLBACK: u32 = 0x9E37_79B9;

/// Xorshift generator with 32 bits of state (Marsaglia's 13/17/5 triple).
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator from a raw seed word. A zero seed is replaced
    /// with a fixed nonzero constant.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { ZERO_SEED_FALLBACK } else { seed },
        }
    }

    /// Advance the state and return the next word.
    #[inline]
    pub fn next_word(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform sample in [0, 1].
    #[inline]
    pub fn unilateral(&mut self) -> f32 {
        self.next_word() as f32 / u32::MAX as f32
    }

    /// Uniform sample in [-1, 1].
    #[inline]
    pub fn bilateral(&mut self) -> f32 {
        -1.0 + 2.0 * self.unilateral()
    }
}

impl RngCore for Xorshift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = self.next_word() as u64;
        let hi = self.next_word() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xorshift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence() {
        // First output from state 1: computed by hand from the 13/17/5
        // shift triple.
        let mut rng = Xorshift32::new(1);
        assert_eq!(rng.next_word(), 270_369);
    }

    #[test]
    fn test_zero_seed_still_generates() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_word(), 0);

        let mut seeded = Xorshift32::from_seed([0; 4]);
        assert_ne!(seeded.next_word(), 0);
    }

    #[test]
    fn test_from_seed_is_little_endian() {
        let mut a = Xorshift32::from_seed([1, 0, 0, 0]);
        let mut b = Xorshift32::new(1);
        assert_eq!(a.next_word(), b.next_word());
    }

    #[test]
    fn test_unilateral_range() {
        let mut rng = Xorshift32::new(42);
        for _ in 0..1000 {
            let x = rng.unilateral();
            assert!((0.0..=1.0).contains(&x));
        }
    }

    #[test]
    fn test_bilateral_range() {
        let mut rng = Xorshift32::new(42);
        for _ in 0..1000 {
            let x = rng.bilateral();
            assert!((-1.0..=1.0).contains(&x));
        }
    }

    #[test]
    fn test_clone_continues_same_stream() {
        let mut rng = Xorshift32::new(7);
        rng.next_word();

        let mut fork = rng.clone();
        for _ in 0..8 {
            assert_eq!(rng.next_word(), fork.next_word());
        }
    }

    #[test]
    fn test_fill_bytes_deterministic() {
        let mut a = Xorshift32::new(99);
        let mut b = Xorshift32::new(99);

        let mut buf_a = [0u8; 7];
        let mut buf_b = [0u8; 7];
        a.fill_bytes(&mut buf_a);
        b.fill_bytes(&mut buf_b);

        assert_eq!(buf_a, buf_b);
        assert!(buf_a.iter().any(|&byte| byte != 0));
    }
}
