
/// Pivots smaller than this fraction of the largest diagonal entry are treated as zero
const SINGULAR_TOL: f64 = 1e-12;

/// Inner product of two equal-length vectors
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Ordinary least squares via the normal equations
///
/// # Arguments
/// * `a_matrix` - Design matrix, `nrows` by `ncols`, row-major
/// * `b_vector` - Right-hand side (nrows)
///
/// # Returns
/// The `ncols` coefficients minimizing `|A x - b|^2`
pub fn least_squares(
    a_matrix: &[f64],
    b_vector: &[f64],
    nrows: usize,
    ncols: usize,
) -> Result<Vec<f64>, String> {
    if a_matrix.len() != nrows * ncols {
        return Err(format!(
            "Design matrix has {} elements, expected {} x {}",
            a_matrix.len(),
            nrows,
            ncols
        ));
    }
    if b_vector.len() != nrows {
        return Err(format!(
            "Right-hand side has {} elements, expected {}",
            b_vector.len(),
            nrows
        ));
    }
    if nrows < ncols {
        return Err(format!(
            "Under-determined system: {} rows for {} unknowns",
            nrows, ncols
        ));
    }

    // A'A is symmetric, fill the upper triangle and mirror it
    let mut ata = vec![0.0; ncols * ncols];
    let mut atb = vec![0.0; ncols];

    for row in a_matrix.chunks_exact(ncols) {
        for i in 0..ncols {
            for j in i..ncols {
                ata[i * ncols + j] += row[i] * row[j];
            }
        }
    }
    for i in 0..ncols {
        for j in 0..i {
            ata[i * ncols + j] = ata[j * ncols + i];
        }
    }

    for (row, &b) in a_matrix.chunks_exact(ncols).zip(b_vector.iter()) {
        for (acc, &x) in atb.iter_mut().zip(row.iter()) {
            *acc += x * b;
        }
    }

    gauss_elimination(&ata, &atb, ncols)
}

/// Gaussian elimination with partial pivoting
pub fn gauss_elimination(a: &[f64], b: &[f64], n: usize) -> Result<Vec<f64>, String> {
    if a.len() != n * n || b.len() != n {
        return Err(format!("Expected a {} x {} system", n, n));
    }

    let mut a = a.to_vec();
    let mut b = b.to_vec();

    let scale = (0..n)
        .map(|i| a[i * n + i].abs())
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);

    // Forward elimination
    for col in 0..n {
        let mut max_row = col;
        for row in (col + 1)..n {
            if a[row * n + col].abs() > a[max_row * n + col].abs() {
                max_row = row;
            }
        }

        if max_row != col {
            for j in 0..n {
                a.swap(col * n + j, max_row * n + j);
            }
            b.swap(col, max_row);
        }

        let pivot = a[col * n + col];
        if !pivot.is_finite() || pivot.abs() <= SINGULAR_TOL * scale {
            return Err(format!("Matrix is singular at column {}", col));
        }

        for row in (col + 1)..n {
            let factor = a[row * n + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in col..n {
                a[row * n + j] -= factor * a[col * n + j];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a[i * n + j] * x[j];
        }
        x[i] = sum / a[i * n + i];
    }

    Ok(x)
}
