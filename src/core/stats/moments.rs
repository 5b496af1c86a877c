// ============================================================================
// Sample moments
// ============================================================================

/// Arithmetic mean; 0 for an empty slice
pub fn mean(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    x.iter().sum::<f64>() / x.len() as f64
}

/// Population standard deviation (divisor n); 0 for an empty slice
pub fn population_std(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let m = mean(x);
    let ss: f64 = x.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / x.len() as f64).sqrt()
}

// ============================================================================
// Column moments of a row-major matrix
// ============================================================================

/// Mean of column `col` in a row-major matrix with `ncols` columns
pub fn column_mean(data: &[f64], ncols: usize, col: usize) -> f64 {
    if ncols == 0 {
        return 0.0;
    }
    let nrows = data.len() / ncols;
    if nrows == 0 {
        return 0.0;
    }
    let sum: f64 = data.chunks_exact(ncols).map(|row| row[col]).sum();
    sum / nrows as f64
}

/// Population standard deviation of column `col`
pub fn column_std(data: &[f64], ncols: usize, col: usize) -> f64 {
    if ncols == 0 {
        return 0.0;
    }
    let nrows = data.len() / ncols;
    if nrows == 0 {
        return 0.0;
    }
    let m = column_mean(data, ncols, col);
    let ss: f64 = data
        .chunks_exact(ncols)
        .map(|row| {
            let diff = row[col] - m;
            diff * diff
        })
        .sum();
    (ss / nrows as f64).sqrt()
}
