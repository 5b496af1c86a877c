// ============================================================================
// Goodness of fit
// ============================================================================

/// Coefficient of determination, 1 - SS_res / SS_tot
///
/// Returns 0 when the actual values have no variance or the inputs are empty.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    let n = actual.len().min(predicted.len());
    if n == 0 {
        return 0.0;
    }
    let m = crate::mean(&actual[..n]);

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (a, p) in actual.iter().zip(predicted.iter()) {
        ss_res += (a - p) * (a - p);
        ss_tot += (a - m) * (a - m);
    }

    if ss_tot <= 0.0 {
        return 0.0;
    }
    1.0 - ss_res / ss_tot
}

/// Root mean squared error
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    let n = actual.len().min(predicted.len());
    if n == 0 {
        return 0.0;
    }
    let ss: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p) * (a - p))
        .sum();
    (ss / n as f64).sqrt()
}

/// Mean absolute error
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    let n = actual.len().min(predicted.len());
    if n == 0 {
        return 0.0;
    }
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();
    sum / n as f64
}
