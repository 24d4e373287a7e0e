//! ARIMA (AutoRegressive Integrated Moving Average) estimation
//!
//! The model combines three components:
//!
//! - **AR (AutoRegressive)**: Uses past values to predict future values
//! - **I (Integrated)**: Differencing to achieve stationarity
//! - **MA (Moving Average)**: Uses past forecast errors
//!
//! ## Estimation
//!
//! Parameters are estimated by exact maximum likelihood: the `d`-times
//! differenced series is run through a Kalman filter over the ARMA
//! state-space form, the innovation variance is concentrated out, and the
//! remaining likelihood is maximized with Nelder-Mead over unconstrained
//! parameters mapped to stationary AR and invertible MA coefficients.
//! A mean is estimated only when `d == 0`.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::arima::Arima;
//! use forecast_spi::ArimaOrder;
//!
//! let data: Vec<f64> = (0..60).map(|i| 10.0 + ((i * 37) % 11) as f64 / 11.0).collect();
//! let model = Arima::new(ArimaOrder::new(1, 0, 0)).unwrap();
//! let fitted = model.fit(&data).unwrap();
//! assert_eq!(fitted.forecast(3).len(), 3);
//! ```

use data_spi::DataError;
use forecast_api::FitOptions;
use forecast_spi::{ArimaOrder, ForecastError, Result};
use serde::Serialize;

use crate::optimize::NelderMead;
use crate::state_space::{project_state, state_dimension, ArmaStateSpace, FilterOutput};
use crate::transform::{
    constrain_invertible, constrain_stationary, unconstrain_stationary,
};

/// ARIMA model of a fixed order, ready to fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arima {
    order: ArimaOrder,
    options: FitOptions,
}

impl Arima {
    /// Create a model of the given order
    ///
    /// Orders are limited to `p <= 10`, `d <= 2`, `q <= 10`.
    pub fn new(order: ArimaOrder) -> Result<Self> {
        order.validate()?;
        Ok(Self {
            order,
            options: FitOptions::default(),
        })
    }

    pub fn with_options(mut self, options: FitOptions) -> Self {
        self.options = options;
        self
    }

    pub fn order(&self) -> ArimaOrder {
        self.order
    }

    /// Estimate the model on `data`.
    ///
    /// Requires more than `p + d + q` finite observations.
    pub fn fit(&self, data: &[f64]) -> Result<FittedArima> {
        self.options.validate()?;
        if let Some((index, value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(DataError::NonFiniteValue {
                index,
                value: *value,
            }
            .into());
        }
        let required = self.order.total() + 1;
        if data.len() < required {
            return Err(ForecastError::InsufficientData {
                required,
                actual: data.len(),
            });
        }

        let ArimaOrder { p, d, q } = self.order;
        let levels = difference_levels(data, d);
        let level_lasts: Vec<f64> = levels[..d]
            .iter()
            .map(|level| level[level.len() - 1])
            .collect();
        let w = &levels[d];
        let layout = ParamLayout {
            mean: d == 0,
            p,
            q,
        };

        let first = w[0];
        if w.iter().all(|&x| x == first) && (layout.mean || first == 0.0) {
            return Ok(FittedArima {
                order: self.order,
                ar: vec![0.0; p],
                ma: vec![0.0; q],
                mean: layout.mean.then_some(first),
                sigma2: 0.0,
                log_likelihood: None,
                aic: None,
                bic: None,
                iterations: 0,
                nobs: w.len(),
                state: vec![0.0; state_dimension(p, q)],
                level_lasts,
            });
        }

        let objective = |x: &[f64]| match layout.evaluate(x, w) {
            Ok(output) => {
                let ll = output.concentrated_log_likelihood();
                if ll.is_finite() {
                    -ll / w.len() as f64
                } else {
                    f64::INFINITY
                }
            }
            Err(_) => f64::INFINITY,
        };

        let start = layout.start_values(w);
        if !objective(&start).is_finite() {
            return Err(ForecastError::NonConvergence(
                "likelihood is not finite at the starting values".to_string(),
            ));
        }

        let minimum = NelderMead::from(self.options).minimize(objective, &start)?;
        let output = layout
            .evaluate(&minimum.point, w)
            .map_err(|err| ForecastError::NonConvergence(err.to_string()))?;
        let ll = output.concentrated_log_likelihood();
        if !ll.is_finite() {
            return Err(ForecastError::NonConvergence(
                "likelihood is not finite at the optimum".to_string(),
            ));
        }

        let (mean, ar, ma) = layout.unpack(&minimum.point);
        let k = (minimum.point.len() + 1) as f64;
        let n = w.len() as f64;
        Ok(FittedArima {
            order: self.order,
            ar,
            ma,
            mean: layout.mean.then_some(mean),
            sigma2: output.sigma2(),
            log_likelihood: Some(ll),
            aic: Some(-2.0 * ll + 2.0 * k),
            bic: Some(-2.0 * ll + k * n.ln()),
            iterations: minimum.iterations,
            nobs: w.len(),
            state: output.state,
            level_lasts,
        })
    }
}

/// Estimated ARIMA model.
///
/// Immutable once fitted; [`FittedArima::forecast`] continues from the end of
/// the training data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedArima {
    order: ArimaOrder,
    ar: Vec<f64>,
    ma: Vec<f64>,
    mean: Option<f64>,
    sigma2: f64,
    log_likelihood: Option<f64>,
    aic: Option<f64>,
    bic: Option<f64>,
    iterations: usize,
    nobs: usize,
    #[serde(skip)]
    state: Vec<f64>,
    #[serde(skip)]
    level_lasts: Vec<f64>,
}

impl FittedArima {
    pub fn order(&self) -> ArimaOrder {
        self.order
    }

    /// AR coefficients `phi_1..phi_p`
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar
    }

    /// MA coefficients `theta_1..theta_q`
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma
    }

    /// Estimated mean of the series (only when `d == 0`)
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// Innovation variance
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Maximized log-likelihood; `None` for a degenerate series
    pub fn log_likelihood(&self) -> Option<f64> {
        self.log_likelihood
    }

    pub fn aic(&self) -> Option<f64> {
        self.aic
    }

    pub fn bic(&self) -> Option<f64> {
        self.bic
    }

    /// Optimizer iterations used
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Observations in the likelihood (after differencing)
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Forecast `steps` values past the end of the training data.
    pub fn forecast(&self, steps: usize) -> Vec<f64> {
        let mean = self.mean.unwrap_or(0.0);
        let mut forecasts: Vec<f64> = project_state(&self.ar, &self.state, steps)
            .into_iter()
            .map(|f| f + mean)
            .collect();

        for last in self.level_lasts.iter().rev() {
            let mut level = *last;
            for f in forecasts.iter_mut() {
                level += *f;
                *f = level;
            }
        }
        forecasts
    }
}

/// Position of each parameter in the optimizer's vector:
/// `[mean?, ar (unconstrained)..., ma (unconstrained)...]`
#[derive(Debug, Clone, Copy)]
struct ParamLayout {
    mean: bool,
    p: usize,
    q: usize,
}

impl ParamLayout {
    fn offset(&self) -> usize {
        usize::from(self.mean)
    }

    fn unpack(&self, x: &[f64]) -> (f64, Vec<f64>, Vec<f64>) {
        let m = self.offset();
        let mean = if self.mean { x[0] } else { 0.0 };
        let ar = constrain_stationary(&x[m..m + self.p]);
        let ma = constrain_invertible(&x[m + self.p..m + self.p + self.q]);
        (mean, ar, ma)
    }

    fn evaluate(&self, x: &[f64], w: &[f64]) -> Result<FilterOutput> {
        let (mean, ar, ma) = self.unpack(x);
        let system = ArmaStateSpace::new(&ar, &ma)?;
        let centered: Vec<f64> = w.iter().map(|v| v - mean).collect();
        system.filter(&centered)
    }

    /// Sample mean, Yule-Walker AR coefficients and zero MA coefficients.
    fn start_values(&self, w: &[f64]) -> Vec<f64> {
        let mut start = Vec::with_capacity(self.offset() + self.p + self.q);
        if self.mean {
            start.push(w.iter().sum::<f64>() / w.len() as f64);
        }
        let ar = yule_walker(w, self.p);
        start.extend(unconstrain_stationary(&ar).unwrap_or_else(|| vec![0.0; self.p]));
        start.extend(std::iter::repeat(0.0).take(self.q));
        start
    }
}

/// `levels[k]` is `data` differenced `k` times, for `k` in `0..=d`.
fn difference_levels(data: &[f64], d: usize) -> Vec<Vec<f64>> {
    let mut levels = vec![data.to_vec()];
    for k in 0..d {
        let next = levels[k].windows(2).map(|w| w[1] - w[0]).collect();
        levels.push(next);
    }
    levels
}

/// Yule-Walker AR coefficients from sample autocovariances.
fn yule_walker(data: &[f64], order: usize) -> Vec<f64> {
    if order == 0 {
        return Vec::new();
    }

    let n = data.len();
    let mean: f64 = data.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = data.iter().map(|x| x - mean).collect();

    let autocov: Vec<f64> = (0..=order)
        .map(|k| {
            let sum: f64 = (k..n).map(|i| centered[i] * centered[i - k]).sum();
            sum / n as f64
        })
        .collect();

    levinson_durbin(&autocov, order)
}

/// Solve the Yule-Walker equations with the Levinson-Durbin recursion.
fn levinson_durbin(autocov: &[f64], order: usize) -> Vec<f64> {
    let mut coeffs = vec![0.0; order];
    let mut error = autocov[0];
    if !(error > 0.0) {
        return coeffs;
    }

    for k in 0..order {
        let mut acc = autocov[k + 1];
        for j in 0..k {
            acc -= coeffs[j] * autocov[k - j];
        }
        let reflection = acc / error;

        let previous = coeffs.clone();
        coeffs[k] = reflection;
        for j in 0..k {
            coeffs[j] = previous[j] - reflection * previous[k - 1 - j];
        }

        error *= 1.0 - reflection * reflection;
        if !(error > 0.0) {
            break;
        }
    }

    coeffs
}
