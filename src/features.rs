//! The fixed attribute catalogue and the vector that carries it.

use std::fmt;
use std::ops::Index;

use crate::error::{PipelineError, Result};

/// Number of attributes every vector, scaler and model carries
pub const N_FEATURES: usize = 8;

/// Property attributes in training column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    SquareFootage,
    Bedrooms,
    Bathrooms,
    LocationRating,
    FloorNumber,
    ParkingSpots,
    SwimmingPool,
    SecurityRating,
}

impl Feature {
    pub const ALL: [Feature; N_FEATURES] = [
        Feature::SquareFootage,
        Feature::Bedrooms,
        Feature::Bathrooms,
        Feature::LocationRating,
        Feature::FloorNumber,
        Feature::ParkingSpots,
        Feature::SwimmingPool,
        Feature::SecurityRating,
    ];

    /// Canonical key, as used in raw attribute maps
    pub fn name(self) -> &'static str {
        match self {
            Feature::SquareFootage => "Square_Footage",
            Feature::Bedrooms => "Bedrooms",
            Feature::Bathrooms => "Bathrooms",
            Feature::LocationRating => "Location_Rating",
            Feature::FloorNumber => "Floor_Number",
            Feature::ParkingSpots => "Parking_Spots",
            Feature::SwimmingPool => "Swimming_Pool",
            Feature::SecurityRating => "Security_Rating",
        }
    }

    /// Prompt label shown to a user entering the value
    pub fn label(self) -> &'static str {
        match self {
            Feature::SquareFootage => "Square Footage (sq ft)",
            Feature::LocationRating => "Location Rating (1-10)",
            Feature::SecurityRating => "Security Rating (1-10)",
            Feature::SwimmingPool => "Swimming Pool (0/1)",
            other => other.name(),
        }
    }

    /// Column position
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Eight attribute values in [`Feature::ALL`] order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; N_FEATURES]);

impl FeatureVector {
    pub fn new(values: [f64; N_FEATURES]) -> Self {
        Self(values)
    }

    /// Build from a slice, rejecting any length other than [`N_FEATURES`]
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let array: [f64; N_FEATURES] =
            values.try_into().map_err(|_| PipelineError::DimensionMismatch {
                context: "feature vector",
                expected: N_FEATURES,
                got: values.len(),
            })?;
        Ok(Self(array))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn values(&self) -> [f64; N_FEATURES] {
        self.0
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.0[feature.index()]
    }
}

impl From<[f64; N_FEATURES]> for FeatureVector {
    fn from(values: [f64; N_FEATURES]) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order() {
        let names: Vec<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "Square_Footage",
                "Bedrooms",
                "Bathrooms",
                "Location_Rating",
                "Floor_Number",
                "Parking_Spots",
                "Swimming_Pool",
                "Security_Rating",
            ]
        );
        for (i, f) in Feature::ALL.iter().enumerate() {
            assert_eq!(f.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Feature::SquareFootage.label(), "Square Footage (sq ft)");
        assert_eq!(Feature::SwimmingPool.label(), "Swimming Pool (0/1)");
        assert_eq!(Feature::Bedrooms.label(), "Bedrooms");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Feature::from_name("Floor_Number"), Some(Feature::FloorNumber));
        assert_eq!(Feature::from_name("floor_number"), None);
    }

    #[test]
    fn test_from_slice_checks_length() {
        let v = FeatureVector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
        assert_eq!(v[Feature::SecurityRating], 8.0);
        assert_eq!(v.get(Feature::SquareFootage), 1.0);

        let err = FeatureVector::from_slice(&[1.0; 7]).unwrap_err();
        assert_eq!(
            err,
            PipelineError::DimensionMismatch {
                context: "feature vector",
                expected: 8,
                got: 7,
            }
        );
        assert!(FeatureVector::from_slice(&[1.0; 9]).is_err());
    }
}
