//! Stationarity-enforcing parameter transforms
//!
//! Maps unconstrained real vectors to coefficients of a stationary
//! autoregressive polynomial `1 - phi_1 L - ... - phi_p L^p` through partial
//! autocorrelations (Monahan 1984, Jones 1980), and back. The optimizer
//! searches the unconstrained space so every candidate it evaluates is a
//! stationary AR / invertible MA model.

/// Map unconstrained values to stationary AR coefficients.
pub fn constrain_stationary(unconstrained: &[f64]) -> Vec<f64> {
    let n = unconstrained.len();
    let partial: Vec<f64> = unconstrained
        .iter()
        .map(|x| x / (1.0 + x * x).sqrt())
        .collect();

    // Durbin-Levinson recursion from partial autocorrelations
    let mut row = vec![0.0; n];
    for k in 0..n {
        let previous = row.clone();
        for i in 0..k {
            row[i] = previous[i] + partial[k] * previous[k - i - 1];
        }
        row[k] = partial[k];
    }
    row.iter().map(|y| -y).collect()
}

/// Inverse of [`constrain_stationary`].
///
/// Returns `None` when `constrained` is not strictly stationary.
pub fn unconstrain_stationary(constrained: &[f64]) -> Option<Vec<f64>> {
    let n = constrained.len();
    let mut row: Vec<f64> = constrained.iter().map(|c| -c).collect();
    let mut partial = vec![0.0; n];

    for k in (0..n).rev() {
        let r = row[k];
        if !(r.abs() < 1.0) {
            return None;
        }
        partial[k] = r;
        let scale = 1.0 - r * r;
        row = (0..k)
            .map(|i| (row[i] - r * row[k - i - 1]) / scale)
            .collect();
    }

    Some(partial.iter().map(|r| r / (1.0 - r * r).sqrt()).collect())
}

/// Map unconstrained values to invertible MA coefficients
/// `1 + theta_1 L + ... + theta_q L^q`.
pub fn constrain_invertible(unconstrained: &[f64]) -> Vec<f64> {
    constrain_stationary(unconstrained)
        .into_iter()
        .map(|c| -c)
        .collect()
}

/// Inverse of [`constrain_invertible`].
pub fn unconstrain_invertible(constrained: &[f64]) -> Option<Vec<f64>> {
    let negated: Vec<f64> = constrained.iter().map(|c| -c).collect();
    unconstrain_stationary(&negated)
}
