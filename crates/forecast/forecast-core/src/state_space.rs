//! ARMA(p, q) state-space form and exact Gaussian likelihood
//!
//! Harvey representation with state dimension `r = max(p, q + 1)`:
//!
//! ```text
//! y_t       = Z a_t,            Z = [1, 0, ..., 0]
//! a_{t+1}   = T a_t + R e_t,    e_t ~ N(0, sigma2)
//! ```
//!
//! `T` holds the AR coefficients in its first column and ones on the
//! superdiagonal; `R = [1, theta_1, ..., theta_{r-1}]`. The filter runs with
//! unit innovation variance so `sigma2` can be concentrated out.

use std::f64::consts::PI;

use forecast_spi::{ForecastError, Result};

type Matrix = Vec<Vec<f64>>;

/// State-space system of a stationary ARMA model.
#[derive(Debug, Clone)]
pub struct ArmaStateSpace {
    transition: Matrix,
    state_cov: Matrix,
    initial_cov: Matrix,
}

/// Output of one Kalman filter pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutput {
    /// Sum of standardized squared innovations `v^2 / F`
    pub sum_squares: f64,
    /// Sum of `ln F`
    pub sum_log_variance: f64,
    /// Number of observations filtered
    pub nobs: usize,
    /// Predicted state for the period after the last observation
    pub state: Vec<f64>,
}

impl FilterOutput {
    /// Maximum-likelihood innovation variance.
    pub fn sigma2(&self) -> f64 {
        self.sum_squares / self.nobs as f64
    }

    /// Log-likelihood with `sigma2` concentrated out.
    pub fn concentrated_log_likelihood(&self) -> f64 {
        let n = self.nobs as f64;
        -0.5 * n * ((2.0 * PI).ln() + self.sigma2().ln() + 1.0) - 0.5 * self.sum_log_variance
    }
}

impl ArmaStateSpace {
    /// Build the system; the initial state covariance is the unconditional
    /// one, which only exists for stationary AR coefficients.
    pub fn new(ar: &[f64], ma: &[f64]) -> Result<Self> {
        let r = state_dimension(ar.len(), ma.len());

        let mut transition = vec![vec![0.0; r]; r];
        for (i, phi) in ar.iter().enumerate() {
            transition[i][0] = *phi;
        }
        for i in 0..r - 1 {
            transition[i][i + 1] = 1.0;
        }

        let mut selection = vec![0.0; r];
        selection[0] = 1.0;
        selection[1..=ma.len()].copy_from_slice(ma);
        let state_cov: Matrix = selection
            .iter()
            .map(|a| selection.iter().map(|b| a * b).collect())
            .collect();

        let initial_cov = solve_discrete_lyapunov(&transition, &state_cov)?;
        Ok(Self {
            transition,
            state_cov,
            initial_cov,
        })
    }

    /// State dimension.
    pub fn dimension(&self) -> usize {
        self.transition.len()
    }

    /// Unconditional state covariance (per unit innovation variance).
    pub fn initial_covariance(&self) -> &[Vec<f64>] {
        &self.initial_cov
    }

    /// Run the Kalman filter over zero-mean observations.
    pub fn filter(&self, observations: &[f64]) -> Result<FilterOutput> {
        let r = self.dimension();
        let t = &self.transition;
        let mut a = vec![0.0; r];
        let mut p = self.initial_cov.clone();
        let mut sum_squares = 0.0;
        let mut sum_log_variance = 0.0;

        for (index, &y) in observations.iter().enumerate() {
            let v = y - a[0];
            let f = p[0][0];
            if !(f > 0.0 && f.is_finite()) {
                return Err(ForecastError::NumericalError(format!(
                    "innovation variance {} at observation {}",
                    f, index
                )));
            }
            sum_squares += v * v / f;
            sum_log_variance += f.ln();

            let p_col: Vec<f64> = p.iter().map(|row| row[0]).collect();
            let gain = mat_vec(t, &p_col);
            let predicted = mat_vec(t, &a);
            a = predicted
                .iter()
                .zip(&gain)
                .map(|(x, k)| x + k * v / f)
                .collect();

            let tpt = mat_mul_transpose(&mat_mul(t, &p), t);
            for i in 0..r {
                for j in 0..r {
                    p[i][j] = tpt[i][j] + self.state_cov[i][j] - gain[i] * gain[j] / f;
                }
            }
        }

        Ok(FilterOutput {
            sum_squares,
            sum_log_variance,
            nobs: observations.len(),
            state: a,
        })
    }
}

/// `max(p, q + 1)`
pub fn state_dimension(p: usize, q: usize) -> usize {
    p.max(q + 1)
}

/// Point forecasts `Z a`, `Z T a`, `Z T^2 a`, ... from a predicted state.
pub fn project_state(ar: &[f64], state: &[f64], steps: usize) -> Vec<f64> {
    let r = state.len();
    let mut a = state.to_vec();
    let mut forecasts = Vec::with_capacity(steps);
    for _ in 0..steps {
        let head = a.first().copied().unwrap_or(0.0);
        forecasts.push(head);
        a = (0..r)
            .map(|i| {
                let ar_term = ar.get(i).map_or(0.0, |phi| phi * head);
                let shifted = a.get(i + 1).copied().unwrap_or(0.0);
                ar_term + shifted
            })
            .collect();
    }
    forecasts
}

/// Solve `P = T P T' + Q` through `(I - T (x) T) vec(P) = vec(Q)`.
pub fn solve_discrete_lyapunov(t: &[Vec<f64>], q: &[Vec<f64>]) -> Result<Matrix> {
    let r = t.len();
    let m = r * r;
    let mut system = vec![vec![0.0; m + 1]; m];
    for i in 0..r {
        for j in 0..r {
            let row = i * r + j;
            for k in 0..r {
                for l in 0..r {
                    system[row][k * r + l] = -t[i][k] * t[j][l];
                }
            }
            system[row][row] += 1.0;
            system[row][m] = q[i][j];
        }
    }

    let solution = gaussian_elimination(system)?;
    let mut p = vec![vec![0.0; r]; r];
    for i in 0..r {
        for j in 0..r {
            p[i][j] = 0.5 * (solution[i * r + j] + solution[j * r + i]);
        }
    }
    Ok(p)
}

/// Solve an augmented `m x (m + 1)` system with partial pivoting.
fn gaussian_elimination(mut system: Matrix) -> Result<Vec<f64>> {
    let m = system.len();
    for col in 0..m {
        let pivot = (col..m)
            .max_by(|&a, &b| system[a][col].abs().total_cmp(&system[b][col].abs()))
            .unwrap_or(col);
        if !(system[pivot][col].abs() > 1e-12) {
            return Err(ForecastError::NumericalError(
                "singular system for the initial state covariance".to_string(),
            ));
        }
        system.swap(col, pivot);
        for row in col + 1..m {
            let factor = system[row][col] / system[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..=m {
                system[row][k] -= factor * system[col][k];
            }
        }
    }

    let mut x = vec![0.0; m];
    for row in (0..m).rev() {
        let tail: f64 = (row + 1..m).map(|k| system[row][k] * x[k]).sum();
        x[row] = (system[row][m] - tail) / system[row][row];
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(ForecastError::NumericalError(
            "non-finite initial state covariance".to_string(),
        ));
    }
    Ok(x)
}

fn mat_vec(a: &[Vec<f64>], x: &[f64]) -> Vec<f64> {
    a.iter()
        .map(|row| row.iter().zip(x).map(|(a, b)| a * b).sum())
        .collect()
}

fn mat_mul(a: &[Vec<f64>], b: &[Vec<f64>]) -> Matrix {
    let n = b.first().map_or(0, |row| row.len());
    a.iter()
        .map(|row| {
            (0..n)
                .map(|j| row.iter().zip(b).map(|(x, b_row)| x * b_row[j]).sum())
                .collect()
        })
        .collect()
}

/// `A B'`
fn mat_mul_transpose(a: &[Vec<f64>], b: &[Vec<f64>]) -> Matrix {
    a.iter()
        .map(|row| {
            b.iter()
                .map(|b_row| row.iter().zip(b_row).map(|(x, y)| x * y).sum())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ar1_initial_covariance() {
        let system = ArmaStateSpace::new(&[0.5], &[]).unwrap();
        assert_eq!(system.dimension(), 1);
        let p = system.initial_covariance();
        assert!((p[0][0] - 1.0 / 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_ma1_initial_covariance() {
        let theta = 0.4;
        let system = ArmaStateSpace::new(&[], &[theta]).unwrap();
        let p = system.initial_covariance();
        assert_eq!(system.dimension(), 2);
        assert!((p[0][0] - (1.0 + theta * theta)).abs() < 1e-12);
        assert!((p[0][1] - theta).abs() < 1e-12);
        assert!((p[1][1] - theta * theta).abs() < 1e-12);
    }

    #[test]
    fn test_unit_root_is_singular() {
        assert!(matches!(
            ArmaStateSpace::new(&[1.0], &[]),
            Err(ForecastError::NumericalError(_))
        ));
    }

    #[test]
    fn test_ar1_likelihood_matches_closed_form() {
        let phi: f64 = 0.6;
        let y = [0.3, -0.2, 0.5, 0.1, -0.4, 0.25];
        let output = ArmaStateSpace::new(&[phi], &[]).unwrap().filter(&y).unwrap();

        let mut sum_squares = y[0] * y[0] * (1.0 - phi * phi);
        for t in 1..y.len() {
            sum_squares += (y[t] - phi * y[t - 1]).powi(2);
        }
        let sum_log = (1.0 / (1.0 - phi * phi)).ln();

        assert!((output.sum_squares - sum_squares).abs() < 1e-12);
        assert!((output.sum_log_variance - sum_log).abs() < 1e-12);
        assert!((output.state[0] - phi * y[5]).abs() < 1e-12);

        let n = y.len() as f64;
        let sigma2 = sum_squares / n;
        let expected = -0.5 * n * ((2.0 * PI).ln() + sigma2.ln() + 1.0) - 0.5 * sum_log;
        assert!((output.concentrated_log_likelihood() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_white_noise_likelihood() {
        let y = [1.0, -1.0, 2.0, -2.0];
        let output = ArmaStateSpace::new(&[], &[]).unwrap().filter(&y).unwrap();
        assert_eq!(output.sum_log_variance, 0.0);
        assert!((output.sigma2() - 2.5).abs() < 1e-12);
        assert_eq!(output.state, vec![0.0]);
    }

    #[test]
    fn test_project_state() {
        let forecasts = project_state(&[0.5], &[2.0], 3);
        assert_eq!(forecasts, vec![2.0, 1.0, 0.5]);

        // MA(1): the second step onward is zero
        let forecasts = project_state(&[], &[0.7, 0.0], 3);
        assert_eq!(forecasts, vec![0.7, 0.0, 0.0]);
    }

    #[test]
    fn test_lyapunov_two_dimensional() {
        let t = vec![vec![0.5, 1.0], vec![-0.2, 0.0]];
        let q = vec![vec![1.0, 0.3], vec![0.3, 0.09]];
        let p = solve_discrete_lyapunov(&t, &q).unwrap();
        let tpt = mat_mul_transpose(&mat_mul(&t, &p), &t);
        for i in 0..2 {
            for j in 0..2 {
                assert!((p[i][j] - tpt[i][j] - q[i][j]).abs() < 1e-10);
            }
        }
    }
}
