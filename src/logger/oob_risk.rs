//! Provides [`OobRiskLogger`].

use std::collections::HashMap;

use crate::{
    BaseLearner,
    Logger,
    Loss,
    HeldOutSample,
    sample::Feature,
    error::{LoggerError, LoggerResult},
    loss::empirical_risk,
};
use super::core::{risk_stop_criteria, risk_status};
use super::DEFAULT_EPS_FOR_BREAK;


/// Tracks the empirical risk over held-out (out-of-bag) examples.
///
/// The logger cannot ask the model for its held-out prediction,
/// so it accumulates a shadow prediction by itself.
/// The shadow prediction starts at the offset at iteration `1`
/// and, at each iteration, is updated by
/// ```text
/// f_oob^[m] = f_oob^[m-1] + learning_rate * b^[m](x_oob),
/// ```
/// where `b^[m]` is the chosen base learner.
/// This is exactly the rule the boosting loop applies
/// to its training prediction.
///
/// As a stopper, [`OobRiskLogger`] halts the training with the same rule
/// as [`InbagRiskLogger`](crate::InbagRiskLogger).
pub struct OobRiskLogger<'a> {
    is_stopper: bool,

    // Loss used to compute the empirical risk.
    loss: &'a dyn Loss,

    eps_for_break: f64,

    // Held-out features, keyed by the data identifier of base learners.
    held_out_data: &'a HashMap<String, Feature>,

    held_out_response: Vec<f64>,

    // Model prediction on the held-out examples.
    shadow_prediction: Vec<f64>,

    tracked_risk: Vec<f64>,
}


impl<'a> OobRiskLogger<'a> {
    /// Construct a new instance of `OobRiskLogger`.
    /// The logger is not a stopper by default.
    pub fn new(
        loss: &'a dyn Loss,
        held_out_data: &'a HashMap<String, Feature>,
        held_out_response: Vec<f64>,
    ) -> Self
    {
        let shadow_prediction = vec![0.0; held_out_response.len()];
        Self {
            is_stopper: false,
            loss,
            eps_for_break: DEFAULT_EPS_FOR_BREAK,
            held_out_data,
            held_out_response,
            shadow_prediction,
            tracked_risk: Vec::new(),
        }
    }


    /// Construct a new instance of `OobRiskLogger`
    /// that evaluates `sample`.
    pub fn from_sample(loss: &'a dyn Loss, sample: &'a HeldOutSample)
        -> Self
    {
        Self::new(loss, sample.features(), sample.response().to_vec())
    }


    /// Use this logger as a stopper.
    pub fn stopper(mut self, is_stopper: bool) -> Self {
        self.is_stopper = is_stopper;
        self
    }


    /// Set the threshold of the relative improvement.
    pub fn eps_for_break(mut self, eps_for_break: f64) -> Self {
        self.eps_for_break = eps_for_break;
        self
    }


    /// Returns the current model prediction on the held-out examples.
    pub fn shadow_prediction(&self) -> &[f64] {
        &self.shadow_prediction[..]
    }
}


impl Logger for OobRiskLogger<'_> {
    fn name(&self) -> &str {
        "Out-of-bag risk logger"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Stopper", format!("{}", self.is_stopper)),
            ("Loss", self.loss.name().to_string()),
            ("Eps for break", format!("{}", self.eps_for_break)),
            ("# of examples", format!("{}", self.held_out_response.len())),
            ("# of features", format!("{}", self.held_out_data.len())),
        ]);
        Some(info)
    }


    fn log_step(
        &mut self,
        iteration: usize,
        _response: &[f64],
        _prediction: &[f64],
        chosen_learner: &dyn BaseLearner,
        offset: f64,
        learning_rate: f64,
    ) -> LoggerResult<()>
    {
        if iteration == 1 {
            self.shadow_prediction.fill(offset);
        }

        let id = chosen_learner.data_identifier();
        let data = self.held_out_data.get(id)
            .ok_or_else(|| LoggerError::UnknownFeature(id.to_string()))?;

        let contribution = chosen_learner.predict(data);
        if contribution.len() != self.shadow_prediction.len() {
            return Err(LoggerError::LengthMismatch {
                expected: self.shadow_prediction.len(),
                found: contribution.len(),
            });
        }

        self.shadow_prediction.iter_mut()
            .zip(contribution)
            .for_each(|(f, b)| { *f += learning_rate * b; });

        let risk = empirical_risk(
            self.loss,
            &self.held_out_response[..],
            &self.shadow_prediction[..],
        )?;
        tracing::trace!(iteration, risk, feature = id, "out-of-bag risk");

        self.tracked_risk.push(risk);
        Ok(())
    }


    fn reached_stop_criteria(&self) -> LoggerResult<bool> {
        risk_stop_criteria(
            self.name(),
            self.is_stopper,
            &self.tracked_risk[..],
            self.eps_for_break,
        )
    }


    fn logged_data(&self) -> Vec<f64> {
        self.tracked_risk.clone()
    }


    fn clear_logger_data(&mut self) {
        self.tracked_risk.clear();
        self.shadow_prediction.fill(0.0);
    }


    fn status(&self) -> LoggerResult<String> {
        risk_status(self.name(), &self.tracked_risk[..])
    }


    fn is_stopper(&self) -> bool {
        self.is_stopper
    }
}
