//! Ordinary least squares on standardized features.

use crate::data::TrainingSet;
use crate::error::{PipelineError, Result};
use crate::features::{FeatureVector, N_FEATURES};

/// Linear model `y = w . x + b` fitted without regularization
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    weights: [f64; N_FEATURES],
    intercept: f64,
}

impl LinearModel {
    /// Fit weights and intercept minimizing the sum of squared residuals.
    ///
    /// The design matrix gets a leading column of ones for the intercept
    /// and the normal equations are solved in closed form.
    pub fn fit(train: &TrainingSet) -> Result<Self> {
        let nrows = train.nrows();
        let ncols = N_FEATURES + 1;
        if nrows < ncols {
            return Err(PipelineError::InsufficientData {
                needed: ncols,
                got: nrows,
            });
        }

        let mut design = Vec::with_capacity(nrows * ncols);
        for row in train.rows() {
            design.push(1.0);
            design.extend_from_slice(row);
        }

        let beta = matlib::least_squares(&design, train.y(), nrows, ncols)
            .map_err(PipelineError::SingularSystem)?;

        Self::from_parts(&beta[1..], beta[0])
    }

    pub fn from_parts(weights: &[f64], intercept: f64) -> Result<Self> {
        let weights: [f64; N_FEATURES] =
            weights.try_into().map_err(|_| PipelineError::DimensionMismatch {
                context: "model weights",
                expected: N_FEATURES,
                got: weights.len(),
            })?;
        Ok(Self { weights, intercept })
    }

    pub fn weights(&self) -> &[f64; N_FEATURES] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// dot(x_scaled, w) + b
    pub fn predict(&self, x_scaled: &FeatureVector) -> f64 {
        matlib::dot(x_scaled.as_slice(), &self.weights) + self.intercept
    }
}
