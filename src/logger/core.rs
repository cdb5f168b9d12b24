//! Provides `Logger` trait.

use crate::{
    BaseLearner,
    error::{LoggerError, LoggerResult},
};


/// Width of the status field of the risk and time loggers.
pub(crate) const STATUS_WIDTH: usize = 17;
/// Number of decimals printed for a risk value.
pub(crate) const PREC_WIDTH: usize = 5;


/// The trait [`Logger`](Logger) defines the lifecycle
/// of a tracking policy.
///
/// Once per boosting iteration, the outer loop calls
/// [`Logger::log_step`](Logger::log_step),
/// and then asks [`Logger::reached_stop_criteria`](Logger::reached_stop_criteria)
/// whether the training should halt.
/// [`Logger::clear_logger_data`](Logger::clear_logger_data)
/// must be called before re-training with the same logger;
/// otherwise the new trajectory is appended to the old one.
pub trait Logger {
    /// The name of the logger.
    fn name(&self) -> &str;


    /// Parameters of the logger,
    /// shown by [`LoggerRegistry::print_stats`].
    ///
    /// [`LoggerRegistry::print_stats`]: crate::LoggerRegistry::print_stats
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Records one observation.
    ///
    /// - `iteration` is the current iteration, starting at `1`.
    /// - `response` and `prediction` are the training response and
    ///   the cumulative training prediction after this iteration.
    /// - `chosen_learner` is the base learner selected at this iteration.
    /// - `offset` is the initial prediction of the model.
    /// - `learning_rate` is the shrinkage applied to `chosen_learner`.
    fn log_step(
        &mut self,
        iteration: usize,
        response: &[f64],
        prediction: &[f64],
        chosen_learner: &dyn BaseLearner,
        offset: f64,
        learning_rate: f64,
    ) -> LoggerResult<()>;


    /// Returns `true` if the stopping criterion is satisfied.
    /// Always returns `Ok(false)` if the logger is not a stopper.
    fn reached_stop_criteria(&self) -> LoggerResult<bool>;


    /// Returns the trajectory recorded since the last clear.
    fn logged_data(&self) -> Vec<f64>;


    /// Resets every accumulator of the logger.
    fn clear_logger_data(&mut self);


    /// Renders the latest observation in a field of
    /// [`Logger::status_width`](Logger::status_width) characters.
    fn status(&self) -> LoggerResult<String>;


    /// Width of the string returned by [`Logger::status`](Logger::status).
    fn status_width(&self) -> usize {
        STATUS_WIDTH
    }


    /// Returns `true` if the logger is used as a stopper.
    fn is_stopper(&self) -> bool;
}


/// Relative improvement between the two latest risks,
/// `(r[m-1] - r[m]) / r[m-1]`.
/// Returns `None` if less than two risks are recorded.
pub(crate) fn relative_improvement(risks: &[f64]) -> LoggerResult<Option<f64>> {
    let [.., prev, curr] = risks else {
        return Ok(None);
    };

    if *prev == 0.0 {
        return Err(LoggerError::ZeroRisk { iteration: risks.len() });
    }

    Ok(Some((prev - curr) / prev))
}


/// Stopping rule shared by the risk loggers.
pub(crate) fn risk_stop_criteria(
    name: &str,
    is_stopper: bool,
    risks: &[f64],
    eps_for_break: f64,
) -> LoggerResult<bool>
{
    if !is_stopper { return Ok(false); }

    if risks.is_empty() {
        return Err(LoggerError::NoObservation(name.to_string()));
    }

    let reached = relative_improvement(risks)?
        .is_some_and(|eps| eps <= eps_for_break);
    Ok(reached)
}


/// Renders a risk value in the status field.
pub(crate) fn risk_status(name: &str, risks: &[f64]) -> LoggerResult<String> {
    risks.last()
        .map(|risk| format!("{risk:>STATUS_WIDTH$.PREC_WIDTH$}"))
        .ok_or_else(|| LoggerError::NoObservation(name.to_string()))
}
