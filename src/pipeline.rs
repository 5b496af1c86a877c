//! The fitted valuation pipeline: scaler plus model, built once and shared
//! read-only by every inference call.

use matlib::RandomStream;
use tracing::{debug, info};

use crate::config::ModelConfig;
use crate::currency;
use crate::data::{generate, split, TrainingSet};
use crate::error::{PipelineError, Result, ValidationError};
use crate::features::{FeatureVector, N_FEATURES};
use crate::model::LinearModel;
use crate::scaler::Standardizer;
use crate::validation::{validate, RawAttributes};

/// Held-out scores of a fitted pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub n_train: usize,
    pub n_test: usize,
    pub r_squared: f64,
    pub rmse: f64,
    pub mae: f64,
}

/// A priced property
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub value: f64,
    pub formatted: String,
}

impl Estimate {
    /// `₹ <grouped digits>`
    pub fn display(&self) -> String {
        currency::display(self.value)
    }
}

#[derive(Debug, Clone)]
pub struct ValuationPipeline {
    scaler: Standardizer,
    model: LinearModel,
    evaluation: Option<Evaluation>,
}

impl ValuationPipeline {
    /// Generate the synthetic data, split it, fit the scaler on the training
    /// rows and the model on the scaled training rows.
    ///
    /// `rng` is consumed by generation first and then by the split.
    pub fn train<R: RandomStream + ?Sized>(config: &ModelConfig, rng: &mut R) -> Result<Self> {
        let data = generate(config.n_samples, rng);
        let parts = split(&data, config.test_fraction, rng)?;
        Self::fit(&parts.train, &parts.test)
    }

    /// Fit on `train` and score on `test` (which may be empty)
    pub fn fit(train: &TrainingSet, test: &TrainingSet) -> Result<Self> {
        let needed = N_FEATURES + 1;
        if train.nrows() < needed {
            return Err(PipelineError::InsufficientData {
                needed,
                got: train.nrows(),
            });
        }

        let scaler = Standardizer::fit(train)?;
        let model = LinearModel::fit(&scaler.transform_set(train)?)?;
        debug!(
            weights = ?model.weights(),
            intercept = model.intercept(),
            means = ?scaler.means(),
            scales = ?scaler.scales(),
            "fitted parameters"
        );

        let mut pipeline = Self {
            scaler,
            model,
            evaluation: None,
        };

        if !test.is_empty() {
            pipeline.evaluation = Some(pipeline.evaluate(train.nrows(), test)?);
        }

        match &pipeline.evaluation {
            Some(eval) => info!(
                n_train = eval.n_train,
                n_test = eval.n_test,
                r_squared = eval.r_squared,
                rmse = eval.rmse,
                "valuation model fitted"
            ),
            None => info!(n_train = train.nrows(), "valuation model fitted without a test set"),
        }

        Ok(pipeline)
    }

    /// Assemble from previously fitted parts
    pub fn from_parts(scaler: Standardizer, model: LinearModel) -> Self {
        Self {
            scaler,
            model,
            evaluation: None,
        }
    }

    pub fn scaler(&self) -> &Standardizer {
        &self.scaler
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    /// Check raw attribute strings
    pub fn validate(&self, raw: &RawAttributes) -> std::result::Result<FeatureVector, ValidationError> {
        validate(raw)
    }

    /// Standardize `x` and apply the model
    pub fn predict(&self, x: &FeatureVector) -> f64 {
        self.model.predict(&self.scaler.transform(x))
    }

    /// Predict for a raw row of [`N_FEATURES`] values
    pub fn predict_row(&self, row: &[f64]) -> Result<f64> {
        Ok(self.predict(&FeatureVector::from_slice(row)?))
    }

    /// Lakh/crore rendering of an amount
    pub fn format(&self, amount: f64) -> String {
        currency::format(amount)
    }

    /// validate, predict, format
    pub fn estimate(&self, raw: &RawAttributes) -> std::result::Result<Estimate, ValidationError> {
        let x = self.validate(raw)?;
        let value = self.predict(&x);
        Ok(Estimate {
            value,
            formatted: currency::format(value),
        })
    }

    fn evaluate(&self, n_train: usize, test: &TrainingSet) -> Result<Evaluation> {
        let predicted = test
            .rows()
            .map(|row| self.predict_row(row))
            .collect::<Result<Vec<f64>>>()?;

        Ok(Evaluation {
            n_train,
            n_test: test.nrows(),
            r_squared: stats::r_squared(test.y(), &predicted),
            rmse: stats::rmse(test.y(), &predicted),
            mae: stats::mae(test.y(), &predicted),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Feature;
    use crate::validation::raw_from_pairs;
    use matlib::SeededRng;

    fn trained() -> ValuationPipeline {
        ValuationPipeline::train(&ModelConfig::default(), &mut SeededRng::new(42)).unwrap()
    }

    #[test]
    fn test_train_defaults() {
        let pipeline = trained();
        let eval = pipeline.evaluation().unwrap();
        assert_eq!(eval.n_train, 800);
        assert_eq!(eval.n_test, 200);
        // Signal variance is ~4.1e12 against 2.5e11 of noise
        assert!(eval.r_squared > 0.85, "r2 = {}", eval.r_squared);
        assert!(eval.rmse < 700_000.0, "rmse = {}", eval.rmse);
    }

    #[test]
    fn test_training_is_reproducible() {
        let a = trained();
        let b = trained();
        assert_eq!(a.model(), b.model());
        assert_eq!(a.scaler(), b.scaler());
    }

    #[test]
    fn test_predict_is_linear_in_scaled_input() {
        let pipeline = trained();
        let x = FeatureVector::new([0.1, 0.9, 0.4, 0.6, 0.0, 1.0, 0.5, 0.3]);
        let z = pipeline.scaler().transform(&x);
        let expected = matlib::dot(z.as_slice(), pipeline.model().weights())
            + pipeline.model().intercept();
        assert!((pipeline.predict(&x) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_estimate_end_to_end() {
        let pipeline = trained();
        let raw = raw_from_pairs(Feature::ALL.iter().map(|f| (f.name(), "0.5")));

        let first = pipeline.estimate(&raw).unwrap();
        let second = pipeline.estimate(&raw).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.formatted, currency::format(first.value));
        assert!(first.display().starts_with("₹ "));
        assert_eq!(first.display(), format!("₹ {}", first.formatted));

        // Mid-range inputs price near half the total generator weight
        assert!((first.value - 8_400_000.0).abs() < 300_000.0, "{}", first.value);
    }

    #[test]
    fn test_estimate_rejects_invalid_input() {
        let pipeline = trained();
        let before = pipeline.model().clone();

        let mut raw = raw_from_pairs(Feature::ALL.iter().map(|f| (f.name(), "1")));
        raw.insert("Location_Rating".to_string(), "-5".to_string());
        let err = pipeline.estimate(&raw).unwrap_err();
        assert_eq!(err.feature(), "Location_Rating");
        assert_eq!(pipeline.model(), &before);
    }

    #[test]
    fn test_no_test_set() {
        let config = ModelConfig {
            test_fraction: 0.0,
            ..ModelConfig::default()
        };
        let pipeline = ValuationPipeline::train(&config, &mut SeededRng::new(1)).unwrap();
        assert!(pipeline.evaluation().is_none());
    }

    #[test]
    fn test_too_few_training_rows() {
        let config = ModelConfig {
            n_samples: 10,
            test_fraction: 0.5,
            seed: 1,
        };
        assert_eq!(
            ValuationPipeline::train(&config, &mut SeededRng::new(1)).unwrap_err(),
            PipelineError::InsufficientData { needed: 9, got: 5 }
        );
    }

    #[test]
    fn test_predict_row_checks_dimension() {
        let pipeline = trained();
        assert!(matches!(
            pipeline.predict_row(&[0.5; 4]),
            Err(PipelineError::DimensionMismatch { got: 4, .. })
        ));
        let x = [0.5; N_FEATURES];
        assert_eq!(
            pipeline.predict_row(&x).unwrap(),
            pipeline.predict(&FeatureVector::new(x))
        );
    }

    #[test]
    fn test_from_parts() {
        let scaler = Standardizer::from_parts(&[0.0; 8], &[1.0; 8]).unwrap();
        let model = LinearModel::from_parts(&[1.0; 8], 10.0).unwrap();
        let pipeline = ValuationPipeline::from_parts(scaler, model);
        assert_eq!(pipeline.predict(&FeatureVector::new([1.0; 8])), 18.0);
        assert_eq!(pipeline.format(1234567.0), "12,34,567");
    }
}
