//! Defines the loss functions used to compute empirical risks.

use crate::error::{LoggerError, LoggerResult};


/// This trait defines the loss functions a risk logger evaluates.
///
/// A loss is owned by the caller and only borrowed by the loggers.
pub trait Loss {
    /// The name of the loss function.
    fn name(&self) -> &str;


    /// Loss values for the given response and prediction.
    ///
    /// Most losses return one value per example.
    /// A loss may instead return a single aggregated value
    /// (e.g., a ranking measure);
    /// the risk loggers average whatever this method returns.
    fn defined_loss(&self, response: &[f64], prediction: &[f64]) -> Vec<f64>;
}


/// Some well-known loss functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossKind {
    /// Squared loss `(y - f)^2`.
    Quadratic,

    /// Absolute loss `|y - f|`.
    /// This loss function is also known as
    /// **Least Absolute Deviation (LAD)**.
    Absolute,

    /// Binomial loss `ln(1 + exp(-2yf))` for labels `y` in `{-1, +1}`.
    Binomial,
}


impl LossKind {
    /// Loss value for a single point.
    pub fn eval_at_point(&self, response: f64, prediction: f64) -> f64 {
        match self {
            Self::Quadratic => (response - prediction).powi(2),
            Self::Absolute => (response - prediction).abs(),
            Self::Binomial => (-2.0 * response * prediction).exp().ln_1p(),
        }
    }
}


impl Loss for LossKind {
    fn name(&self) -> &str {
        match self {
            Self::Quadratic => "Quadratic loss",
            Self::Absolute => "Absolute loss",
            Self::Binomial => "Binomial loss",
        }
    }


    fn defined_loss(&self, response: &[f64], prediction: &[f64]) -> Vec<f64> {
        response.iter()
            .zip(prediction)
            .map(|(&y, &f)| self.eval_at_point(y, f))
            .collect()
    }
}


/// Computes the mean of `loss` over `(response, prediction)`.
pub(crate) fn empirical_risk(
    loss: &dyn Loss,
    response: &[f64],
    prediction: &[f64],
) -> LoggerResult<f64>
{
    if response.len() != prediction.len() {
        return Err(LoggerError::LengthMismatch {
            expected: response.len(),
            found: prediction.len(),
        });
    }

    let values = loss.defined_loss(response, prediction);
    if values.is_empty() {
        return Err(LoggerError::EmptyLoss(loss.name().to_string()));
    }

    let n_items = values.len() as f64;
    Ok(values.iter().sum::<f64>() / n_items)
}
