//! Conversion of raw attribute strings into a checked feature vector.

use std::collections::HashMap;

use tracing::debug;

use crate::error::ValidationError;
use crate::features::{Feature, FeatureVector, N_FEATURES};

/// Raw user input keyed by canonical feature name
pub type RawAttributes = HashMap<String, String>;

/// Validate the eight raw values in feature order, stopping at the first
/// failure.
///
/// Each value is trimmed, must be non-empty, must parse as a finite real
/// number and must not be negative.
pub fn validate(raw: &RawAttributes) -> Result<FeatureVector, ValidationError> {
    let mut values = [0.0; N_FEATURES];
    for feature in Feature::ALL {
        let Some(text) = raw.get(feature.name()) else {
            debug!(feature = feature.name(), "attribute missing");
            return Err(ValidationError::Missing {
                feature: feature.name(),
            });
        };
        values[feature.index()] = parse_value(feature, text).map_err(|e| {
            debug!(feature = feature.name(), error = %e, "attribute rejected");
            e
        })?;
    }
    Ok(FeatureVector::new(values))
}

/// Check a single raw value
pub fn parse_value(feature: Feature, text: &str) -> Result<f64, ValidationError> {
    let name = feature.name();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { feature: name });
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotNumeric { feature: name })?;
    if !value.is_finite() {
        return Err(ValidationError::NotNumeric { feature: name });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { feature: name });
    }
    Ok(value)
}

/// Build a raw attribute map from `(name, value)` pairs
pub fn raw_from_pairs<'a, I>(pairs: I) -> RawAttributes
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
