// rng.rs - Random sources
//
// Every random decision in the rain goes through `RandomSource`, so a test
// can replay an exact script of samples. The default source is a 32-bit
// xorshift: tiny, allocation-free and good enough for decoration.

/// A stream of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;

    /// True with probability `p`.
    #[inline]
    fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    #[inline]
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.next_f32() * len as f32) as usize).min(len.saturating_sub(1))
    }

    /// Uniform integer in `lo..=hi`.
    #[inline]
    fn range(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.index((hi - lo + 1) as usize) as u32
    }

    #[inline]
    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.index(items.len())]
    }
}

const FALLBACK_SEED: u32 = 0xDEAD_BEEF;

/// xorshift32
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// A zero seed would lock the generator at zero, so it is replaced.
    pub fn new(seed: u32) -> Self {
        Self { state: if seed == 0 { FALLBACK_SEED } else { seed } }
    }

    /// Seed from a float in `[0, 1)`, e.g. `Math.random()`.
    pub fn from_unit(x: f64) -> Self {
        Self::new((x.clamp(0.0, 1.0) * u32::MAX as f64) as u32)
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(FALLBACK_SEED)
    }
}

impl RandomSource for XorShift32 {
    #[inline(always)]
    fn next_f32(&mut self) -> f32 {
        let s = &mut self.state;
        *s ^= *s << 13;
        *s ^= *s >> 17;
        *s ^= *s << 5;
        (*s >> 8) as f32 * (1.0 / 16777216.0)
    }
}

/// Replays a fixed list of samples, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct Replay {
    samples: Vec<f32>,
    pos: usize,
}

impl Replay {
    pub fn new(samples: impl Into<Vec<f32>>) -> Self {
        let mut samples = samples.into();
        if samples.is_empty() {
            samples.push(0.0);
        }
        for s in &mut samples {
            *s = s.clamp(0.0, 0.999_999);
        }
        Self { samples, pos: 0 }
    }

    /// Always yields `x`.
    pub fn constant(x: f32) -> Self {
        Self::new(vec![x])
    }

    /// Number of samples consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for Replay {
    fn next_f32(&mut self) -> f32 {
        let x = self.samples[self.pos % self.samples.len()];
        self.pos += 1;
        x
    }
}
