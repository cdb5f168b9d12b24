//! Provides [`InbagRiskLogger`].

use crate::{
    BaseLearner,
    Logger,
    Loss,
    error::LoggerResult,
    loss::empirical_risk,
};
use super::core::{risk_stop_criteria, risk_status};
use super::DEFAULT_EPS_FOR_BREAK;


/// Tracks the empirical risk over the training examples.
///
/// The risk at iteration `m` is the mean of the loss values
/// between the training response and
/// the cumulative training prediction `f^[m]`.
/// The loss may differ from the one used to train the model.
///
/// As a stopper, [`InbagRiskLogger`] halts the training
/// once the relative improvement
/// ```text
/// eps^[m] = (R^[m-1] - R^[m]) / R^[m-1]
/// ```
/// is at most `eps_for_break`.
pub struct InbagRiskLogger<'a> {
    is_stopper: bool,

    // Loss used to compute the empirical risk.
    loss: &'a dyn Loss,

    eps_for_break: f64,

    tracked_risk: Vec<f64>,
}


impl<'a> InbagRiskLogger<'a> {
    /// Construct a new instance of `InbagRiskLogger`.
    /// The logger is not a stopper by default.
    pub fn new(loss: &'a dyn Loss) -> Self {
        Self {
            is_stopper: false,
            loss,
            eps_for_break: DEFAULT_EPS_FOR_BREAK,
            tracked_risk: Vec::new(),
        }
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
}


impl Logger for InbagRiskLogger<'_> {
    fn name(&self) -> &str {
        "Inbag risk logger"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Stopper", format!("{}", self.is_stopper)),
            ("Loss", self.loss.name().to_string()),
            ("Eps for break", format!("{}", self.eps_for_break)),
        ]);
        Some(info)
    }


    fn log_step(
        &mut self,
        iteration: usize,
        response: &[f64],
        prediction: &[f64],
        _chosen_learner: &dyn BaseLearner,
        _offset: f64,
        _learning_rate: f64,
    ) -> LoggerResult<()>
    {
        let risk = empirical_risk(self.loss, response, prediction)?;
        tracing::trace!(iteration, risk, "inbag risk");

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
    }


    fn status(&self) -> LoggerResult<String> {
        risk_status(self.name(), &self.tracked_risk[..])
    }


    fn is_stopper(&self) -> bool {
        self.is_stopper
    }
}
