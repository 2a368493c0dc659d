//! Seeded 1D gradient noise
//!
//! Used to perturb procedural outlines (meteor rims). Same seed, same samples.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// 1D Perlin-style gradient noise with a frequency scale.
///
/// Samples are smooth, continuous and lie in `[-1, 1]`.
pub struct Noise1D {
    /// 512-entry permutation table (256 entries, doubled to avoid wrapping)
    perm: [u8; 512],
    frequency: f32,
}

impl Noise1D {
    /// Default frequency applied to sample coordinates
    pub const DEFAULT_FREQUENCY: f32 = 0.1;

    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(&mut rng);

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }

        Self {
            perm,
            frequency: Self::DEFAULT_FREQUENCY,
        }
    }

    /// Set the frequency scale
    #[must_use]
    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sample the noise at `x`
    pub fn sample(&self, x: f32) -> f32 {
        let x = x * self.frequency;
        let cell = x.floor();
        let t = x - cell;
        // Truncation is fine: the table wraps every 256 cells.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let i = (cell as i64).rem_euclid(256) as usize;

        let g0 = self.gradient(i);
        let g1 = self.gradient(i + 1);
        let d0 = g0 * t;
        let d1 = g1 * (t - 1.0);

        // Two 1D gradients peak at 0.5 each
        2.0 * (d0 + fade(t) * (d1 - d0))
    }

    /// `count` consecutive samples scaled by `amplitude`
    pub fn samples(&self, count: usize, amplitude: f32) -> Vec<f32> {
        (0..count).map(|i| self.sample(i as f32) * amplitude).collect()
    }

    fn gradient(&self, index: usize) -> f32 {
        if self.perm[index & 511] & 1 == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
