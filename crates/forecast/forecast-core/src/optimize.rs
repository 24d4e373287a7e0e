//! Nelder-Mead simplex minimizer

use forecast_api::FitOptions;
use forecast_spi::{ForecastError, Result};

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Result of a successful minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Minimum {
    /// Best point found
    pub point: Vec<f64>,
    /// Objective value at `point`
    pub value: f64,
    /// Iterations used
    pub iterations: usize,
}

/// Derivative-free simplex minimizer.
///
/// Converges when both the spread of objective values and the largest
/// coordinate distance from the best vertex are within `tolerance`.
/// Objectives may return `f64::INFINITY` for infeasible points.
#[derive(Debug, Clone, Copy)]
pub struct NelderMead {
    max_iterations: usize,
    tolerance: f64,
}

impl NelderMead {
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    pub fn minimize<F>(&self, objective: F, start: &[f64]) -> Result<Minimum>
    where
        F: Fn(&[f64]) -> f64,
    {
        let n = start.len();
        if n == 0 {
            return Ok(Minimum {
                point: Vec::new(),
                value: objective(start),
                iterations: 0,
            });
        }

        let mut simplex: Vec<(Vec<f64>, f64)> = Vec::with_capacity(n + 1);
        simplex.push((start.to_vec(), objective(start)));
        for i in 0..n {
            let mut vertex = start.to_vec();
            vertex[i] = if vertex[i] != 0.0 {
                vertex[i] * 1.05
            } else {
                0.00025
            };
            let value = objective(&vertex);
            simplex.push((vertex, value));
        }

        let mut iterations = 0;
        loop {
            simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
            if self.converged(&simplex) {
                break;
            }
            if iterations >= self.max_iterations {
                return Err(ForecastError::NonConvergence(format!(
                    "simplex did not converge within {} iterations",
                    self.max_iterations
                )));
            }
            iterations += 1;

            let centroid: Vec<f64> = (0..n)
                .map(|j| simplex[..n].iter().map(|(x, _)| x[j]).sum::<f64>() / n as f64)
                .collect();
            let (worst, worst_value) = simplex[n].clone();
            let best_value = simplex[0].1;
            let second_worst_value = simplex[n - 1].1;

            let reflected = along(&centroid, &worst, -REFLECTION);
            let reflected_value = objective(&reflected);

            if reflected_value < best_value {
                let expanded = along(&centroid, &worst, -REFLECTION * EXPANSION);
                let expanded_value = objective(&expanded);
                simplex[n] = if expanded_value < reflected_value {
                    (expanded, expanded_value)
                } else {
                    (reflected, reflected_value)
                };
                continue;
            }
            if reflected_value < second_worst_value {
                simplex[n] = (reflected, reflected_value);
                continue;
            }

            let (contracted, contracted_value) = if reflected_value < worst_value {
                let point = along(&centroid, &worst, -REFLECTION * CONTRACTION);
                let value = objective(&point);
                (point, value)
            } else {
                let point = along(&centroid, &worst, CONTRACTION);
                let value = objective(&point);
                (point, value)
            };
            if contracted_value < reflected_value.min(worst_value) {
                simplex[n] = (contracted, contracted_value);
                continue;
            }

            let best = simplex[0].0.clone();
            for vertex in simplex.iter_mut().skip(1) {
                for (x, b) in vertex.0.iter_mut().zip(&best) {
                    *x = b + SHRINK * (*x - b);
                }
                vertex.1 = objective(&vertex.0);
            }
        }

        let (point, value) = simplex.swap_remove(0);
        Ok(Minimum {
            point,
            value,
            iterations,
        })
    }

    fn converged(&self, simplex: &[(Vec<f64>, f64)]) -> bool {
        let (best, best_value) = &simplex[0];
        if !best_value.is_finite() {
            return false;
        }
        simplex[1..].iter().all(|(x, value)| {
            (value - best_value).abs() <= self.tolerance
                && x.iter()
                    .zip(best)
                    .all(|(a, b)| (a - b).abs() <= self.tolerance)
        })
    }
}

impl From<FitOptions> for NelderMead {
    fn from(options: FitOptions) -> Self {
        Self::new(options.max_iterations, options.tolerance)
    }
}

/// `centroid + t * (point - centroid)`
fn along(centroid: &[f64], point: &[f64], t: f64) -> Vec<f64> {
    centroid
        .iter()
        .zip(point)
        .map(|(c, p)| c + t * (p - c))
        .collect()
}
