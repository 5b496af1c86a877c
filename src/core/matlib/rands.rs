use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::f64::consts::PI;

/// A source of pseudo-random numbers, passed explicitly to every consumer
pub trait RandomStream {
    /// Generate a uniform random number in [0, 1)
    fn unifrand(&mut self) -> f64;

    /// Generate a standard normal random variable using Box-Muller method
    fn normal(&mut self) -> f64 {
        loop {
            let x1 = self.unifrand();
            if x1 > 0.0 {
                let x2 = self.unifrand();
                return (-2.0 * x1.ln()).sqrt() * (2.0 * PI * x2).cos();
            }
        }
    }

    /// Generate a uniform index in [0, bound)
    fn index_below(&mut self, bound: usize) -> usize {
        let k = (self.unifrand() * bound as f64) as usize;
        k.min(bound.saturating_sub(1))
    }
}

/// Seeded generator; identical seeds reproduce identical sequences
pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomStream for SeededRng {
    fn unifrand(&mut self) -> f64 {
        self.inner.r#gen::<f64>()
    }

    fn normal(&mut self) -> f64 {
        self.inner.sample::<f64, _>(StandardNormal)
    }

    fn index_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.inner.gen_range(0..bound)
    }
}

/// Random permutation of `0..n` (Fisher-Yates)
pub fn permutation<R: RandomStream + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut remaining = n;
    while remaining > 1 {
        let j = rng.index_below(remaining);
        remaining -= 1;
        indices.swap(remaining, j);
    }
    indices
}
