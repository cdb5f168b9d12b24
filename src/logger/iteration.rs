//! Provides [`IterationLogger`].

use crate::{
    BaseLearner,
    Logger,
    error::{LoggerError, LoggerResult},
};


/// Counts the boosting iterations.
///
/// As a stopper, [`IterationLogger`] halts the training
/// once the iteration reaches `max_iterations`.
///
/// # Example
/// ```
/// use boostwatch::prelude::*;
///
/// let logger = IterationLogger::new(500)
///     .stopper(true);
/// assert!(logger.is_stopper());
/// ```
#[derive(Debug, Clone)]
pub struct IterationLogger {
    is_stopper: bool,

    // Used only if `is_stopper` is `true`.
    max_iterations: usize,

    iterations: Vec<usize>,
}


impl IterationLogger {
    /// Construct a new instance of `IterationLogger`.
    /// The logger is not a stopper by default.
    pub fn new(max_iterations: usize) -> Self {
        Self {
            is_stopper: false,
            max_iterations,
            iterations: Vec::new(),
        }
    }


    /// Use this logger as a stopper.
    pub fn stopper(mut self, is_stopper: bool) -> Self {
        self.is_stopper = is_stopper;
        self
    }


    /// Returns the maximal number of iterations.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }


    /// Returns the latest logged iteration.
    pub fn current_iteration(&self) -> Option<usize> {
        self.iterations.last().copied()
    }
}


impl Logger for IterationLogger {
    fn name(&self) -> &str {
        "Iteration logger"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Stopper", format!("{}", self.is_stopper)),
            ("Max iterations", format!("{}", self.max_iterations)),
        ]);
        Some(info)
    }


    fn log_step(
        &mut self,
        iteration: usize,
        _response: &[f64],
        _prediction: &[f64],
        _chosen_learner: &dyn BaseLearner,
        _offset: f64,
        _learning_rate: f64,
    ) -> LoggerResult<()>
    {
        self.iterations.push(iteration);
        Ok(())
    }


    fn reached_stop_criteria(&self) -> LoggerResult<bool> {
        if !self.is_stopper { return Ok(false); }

        let iteration = self.current_iteration()
            .ok_or_else(|| LoggerError::NoObservation(self.name().into()))?;
        Ok(self.max_iterations <= iteration)
    }


    fn logged_data(&self) -> Vec<f64> {
        self.iterations.iter()
            .map(|&it| it as f64)
            .collect()
    }


    fn clear_logger_data(&mut self) {
        self.iterations.clear();
    }


    fn status(&self) -> LoggerResult<String> {
        let iteration = self.current_iteration()
            .ok_or_else(|| LoggerError::NoObservation(self.name().into()))?;

        let width = self.status_width();
        let status = format!("{iteration}/{}", self.max_iterations);
        Ok(format!("{status:>width$}"))
    }


    fn status_width(&self) -> usize {
        // A non-stopper may run past `max_iterations`.
        let widest = self.current_iteration()
            .map_or(self.max_iterations, |it| it.max(self.max_iterations));
        widest.to_string().len() + self.max_iterations.to_string().len() + 1
    }


    fn is_stopper(&self) -> bool {
        self.is_stopper
    }
}
