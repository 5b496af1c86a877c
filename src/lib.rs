//! Property valuation from eight numeric attributes.
//!
//! A [`ValuationPipeline`] is trained once on seeded synthetic data and then
//! answers any number of `validate -> predict -> format` calls without
//! changing.

pub mod config;
pub mod currency;
pub mod data;
pub mod error;
pub mod features;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod scaler;
pub mod validation;

pub use config::ModelConfig;
pub use currency::format as format_currency;
pub use data::{generate, split, DataSplit, TrainingSet};
pub use error::{PipelineError, ValidationError};
pub use features::{Feature, FeatureVector, N_FEATURES};
pub use matlib::{RandomStream, SeededRng};
pub use model::LinearModel;
pub use pipeline::{Estimate, Evaluation, ValuationPipeline};
pub use scaler::Standardizer;
pub use validation::{raw_from_pairs, validate, RawAttributes};
