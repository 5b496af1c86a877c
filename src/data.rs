//! Synthetic training data and the train/test split.

use matlib::{permutation, RandomStream};

use crate::error::{PipelineError, Result};
use crate::features::N_FEATURES;

/// Generator weights, in column order
pub const TRUE_WEIGHTS: [f64; N_FEATURES] = [
    5_000_000.0, // Square_Footage
    2_000_000.0, // Bedrooms
    1_500_000.0, // Bathrooms
    3_000_000.0, // Location_Rating
    500_000.0,   // Floor_Number
    800_000.0,   // Parking_Spots
    2_000_000.0, // Swimming_Pool
    2_000_000.0, // Security_Rating
];

/// Standard deviation of the additive target noise
pub const NOISE_STD: f64 = 500_000.0;

/// Feature matrix (row-major, [`N_FEATURES`] columns) with its targets
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TrainingSet {
    /// Pair a row-major matrix with its targets; the matrix must hold
    /// exactly `y.len()` rows of [`N_FEATURES`] values.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() * N_FEATURES {
            return Err(PipelineError::DimensionMismatch {
                context: "training matrix",
                expected: y.len() * N_FEATURES,
                got: x.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn nrows(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Flat row-major feature matrix
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.x[i * N_FEATURES..(i + 1) * N_FEATURES]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.x.chunks_exact(N_FEATURES)
    }

    /// Copy the given rows, in the given order
    pub fn select(&self, indices: &[usize]) -> TrainingSet {
        let mut x = Vec::with_capacity(indices.len() * N_FEATURES);
        let mut y = Vec::with_capacity(indices.len());
        for &i in indices {
            x.extend_from_slice(self.row(i));
            y.push(self.y[i]);
        }
        TrainingSet { x, y }
    }
}

/// Generate `n` rows of uniform [0, 1) attributes and their noisy linear prices.
///
/// All `n * 8` attributes are drawn first (row by row), then the `n` noise
/// terms, all from the same stream.
pub fn generate<R: RandomStream + ?Sized>(n: usize, rng: &mut R) -> TrainingSet {
    let x: Vec<f64> = (0..n * N_FEATURES).map(|_| rng.unifrand()).collect();

    let clean: Vec<f64> = x
        .chunks_exact(N_FEATURES)
        .map(|row| matlib::dot(row, &TRUE_WEIGHTS))
        .collect();
    let y = clean
        .into_iter()
        .map(|price| price + NOISE_STD * rng.normal())
        .collect();

    TrainingSet { x, y }
}

/// Training and test partitions, with the source row indices of each
#[derive(Debug, Clone)]
pub struct DataSplit {
    pub train: TrainingSet,
    pub test: TrainingSet,
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}

/// Number of test rows for `n` rows at `test_fraction`
pub fn test_size(n: usize, test_fraction: f64) -> usize {
    ((n as f64 * test_fraction).round() as usize).min(n)
}

/// Shuffle the row indices and hold out the first `round(n * test_fraction)`
/// of them as the test set.
pub fn split<R: RandomStream + ?Sized>(
    data: &TrainingSet,
    test_fraction: f64,
    rng: &mut R,
) -> Result<DataSplit> {
    if !(0.0..1.0).contains(&test_fraction) {
        return Err(PipelineError::InvalidSplit(test_fraction));
    }

    let n = data.nrows();
    let n_test = test_size(n, test_fraction);
    let order = permutation(n, rng);
    let (test_indices, train_indices) = order.split_at(n_test);

    Ok(DataSplit {
        train: data.select(train_indices),
        test: data.select(test_indices),
        train_indices: train_indices.to_vec(),
        test_indices: test_indices.to_vec(),
    })
}
