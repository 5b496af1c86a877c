//! Per-feature standardization.

use crate::data::TrainingSet;
use crate::error::{PipelineError, Result};
use crate::features::{Feature, FeatureVector, N_FEATURES};

/// Column scales at or below this fraction of `1 + |mean|` count as zero
const DEGENERATE_TOL: f64 = 1e-12;

/// Fitted per-feature means and standard deviations.
///
/// Created once by [`Standardizer::fit`] and never modified; every
/// stored scale is strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardizer {
    means: [f64; N_FEATURES],
    scales: [f64; N_FEATURES],
}

impl Standardizer {
    /// Compute the column means and population standard deviations of the
    /// training rows.
    pub fn fit(train: &TrainingSet) -> Result<Self> {
        if train.is_empty() {
            return Err(PipelineError::InsufficientData { needed: 1, got: 0 });
        }

        let mut means = [0.0; N_FEATURES];
        let mut scales = [0.0; N_FEATURES];
        for (ivar, feature) in Feature::ALL.iter().enumerate() {
            means[ivar] = stats::column_mean(train.x(), N_FEATURES, ivar);
            scales[ivar] = stats::column_std(train.x(), N_FEATURES, ivar);
            check_scale(*feature, means[ivar], scales[ivar])?;
        }

        Ok(Self { means, scales })
    }

    /// Rebuild from stored statistics, with the same checks `fit` applies
    pub fn from_parts(means: &[f64], scales: &[f64]) -> Result<Self> {
        let means: [f64; N_FEATURES] = to_array(means, "scaler means")?;
        let scales: [f64; N_FEATURES] = to_array(scales, "scaler scales")?;
        for (ivar, feature) in Feature::ALL.iter().enumerate() {
            check_scale(*feature, means[ivar], scales[ivar])?;
        }
        Ok(Self { means, scales })
    }

    pub fn means(&self) -> &[f64; N_FEATURES] {
        &self.means
    }

    pub fn scales(&self) -> &[f64; N_FEATURES] {
        &self.scales
    }

    /// (x_j - mean_j) / scale_j for every component
    pub fn transform(&self, x: &FeatureVector) -> FeatureVector {
        let mut out = [0.0; N_FEATURES];
        for (ivar, value) in x.as_slice().iter().enumerate() {
            out[ivar] = (value - self.means[ivar]) / self.scales[ivar];
        }
        FeatureVector::new(out)
    }

    /// Standardize one raw row; the row must have [`N_FEATURES`] values
    pub fn transform_row(&self, row: &[f64]) -> Result<FeatureVector> {
        Ok(self.transform(&FeatureVector::from_slice(row)?))
    }

    /// Standardize every row of a training set, keeping its targets
    pub fn transform_set(&self, data: &TrainingSet) -> Result<TrainingSet> {
        let mut x = Vec::with_capacity(data.x().len());
        for row in data.rows() {
            x.extend_from_slice(self.transform_row(row)?.as_slice());
        }
        TrainingSet::new(x, data.y().to_vec())
    }
}

fn check_scale(feature: Feature, mean: f64, scale: f64) -> Result<()> {
    if !scale.is_finite() || scale <= DEGENERATE_TOL * (1.0 + mean.abs()) {
        return Err(PipelineError::NumericalDegeneracy {
            feature: feature.name(),
        });
    }
    Ok(())
}

fn to_array(values: &[f64], context: &'static str) -> Result<[f64; N_FEATURES]> {
    values
        .try_into()
        .map_err(|_| PipelineError::DimensionMismatch {
            context,
            expected: N_FEATURES,
            got: values.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate;
    use matlib::SeededRng;

    #[test]
    fn test_transformed_columns_are_standard() {
        let train = generate(500, &mut SeededRng::new(42));
        let scaler = Standardizer::fit(&train).unwrap();
        let scaled = scaler.transform_set(&train).unwrap();

        for ivar in 0..N_FEATURES {
            let m = stats::column_mean(scaled.x(), N_FEATURES, ivar);
            let s = stats::column_std(scaled.x(), N_FEATURES, ivar);
            assert!(m.abs() < 1e-10, "column {} mean {}", ivar, m);
            assert!((s - 1.0).abs() < 1e-10, "column {} std {}", ivar, s);
        }
        assert_eq!(scaled.y(), train.y());
    }

    #[test]
    fn test_fit_matches_hand_computation() {
        // Column j holds j, j + 2 in the two rows: mean j + 1, std 1
        let mut x = Vec::new();
        for offset in [0.0, 2.0] {
            for j in 0..N_FEATURES {
                x.push(j as f64 + offset);
            }
        }
        let train = TrainingSet::new(x, vec![0.0, 0.0]).unwrap();
        let scaler = Standardizer::fit(&train).unwrap();

        for j in 0..N_FEATURES {
            assert!((scaler.means()[j] - (j as f64 + 1.0)).abs() < 1e-12);
            assert!((scaler.scales()[j] - 1.0).abs() < 1e-12);
        }

        let z = scaler.transform(&FeatureVector::new([5.0; N_FEATURES]));
        assert!((z[Feature::SquareFootage] - 4.0).abs() < 1e-12);
        assert!((z[Feature::SecurityRating] - (-3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_constant_column_is_degenerate() {
        let mut train = generate(50, &mut SeededRng::new(1));
        let mut x = train.x().to_vec();
        for row in x.chunks_exact_mut(N_FEATURES) {
            row[Feature::ParkingSpots.index()] = 0.3;
        }
        train = TrainingSet::new(x, train.y().to_vec()).unwrap();

        let err = Standardizer::fit(&train).unwrap_err();
        assert_eq!(
            err,
            PipelineError::NumericalDegeneracy {
                feature: "Parking_Spots"
            }
        );
    }

    #[test]
    fn test_single_row_is_degenerate() {
        let train = TrainingSet::new(vec![1.0; N_FEATURES], vec![1.0]).unwrap();
        assert!(matches!(
            Standardizer::fit(&train),
            Err(PipelineError::NumericalDegeneracy { .. })
        ));
    }

    #[test]
    fn test_empty_training_set() {
        let train = TrainingSet::new(Vec::new(), Vec::new()).unwrap();
        assert!(matches!(
            Standardizer::fit(&train),
            Err(PipelineError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_from_parts_checks_dimensions_and_scales() {
        assert!(Standardizer::from_parts(&[0.0; 8], &[1.0; 8]).is_ok());
        assert!(matches!(
            Standardizer::from_parts(&[0.0; 7], &[1.0; 8]),
            Err(PipelineError::DimensionMismatch { got: 7, .. })
        ));
        assert!(matches!(
            Standardizer::from_parts(&[0.0; 8], &[1.0; 9]),
            Err(PipelineError::DimensionMismatch { got: 9, .. })
        ));

        let mut scales = [1.0; 8];
        scales[2] = 0.0;
        assert_eq!(
            Standardizer::from_parts(&[0.0; 8], &scales),
            Err(PipelineError::NumericalDegeneracy {
                feature: "Bathrooms"
            })
        );
    }

    #[test]
    fn test_transform_row_rejects_wrong_length() {
        let scaler = Standardizer::from_parts(&[0.0; 8], &[2.0; 8]).unwrap();
        assert!(scaler.transform_row(&[1.0; 5]).is_err());
        let z = scaler.transform_row(&[4.0; 8]).unwrap();
        assert_eq!(z.values(), [2.0; 8]);
    }
}
