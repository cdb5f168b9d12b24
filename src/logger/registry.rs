//! Provides [`LoggerRegistry`].

use colored::Colorize;
use polars::prelude::*;

use std::fmt;

use crate::{
    BaseLearner,
    Logger,
    error::{LoggerError, LoggerResult},
};

/// Separator between two status fields.
pub const STATUS_SEPARATOR: &str = "   ";

const WIDTH: usize = 8;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// An ordered collection of uniquely named loggers.
///
/// The outer boosting loop reports every iteration to the registry
/// through [`LoggerRegistry::log_step`]
/// and halts once [`LoggerRegistry::any_stop_criteria_reached`]
/// returns `true`.
///
/// # Example
/// ```
/// use boostwatch::prelude::*;
///
/// let loss = LossKind::Quadratic;
/// let registry = LoggerRegistry::new()
///     .with("iterations", IterationLogger::new(100).stopper(true))
///     .unwrap()
///     .with("risk", InbagRiskLogger::new(&loss))
///     .unwrap();
///
/// assert_eq!(registry.names(), vec!["iterations", "risk"]);
/// assert_eq!(registry.n_stoppers(), 1);
/// ```
#[derive(Default)]
pub struct LoggerRegistry<'a> {
    entries: Vec<(String, Box<dyn Logger + 'a>)>,
}


impl fmt::Debug for LoggerRegistry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(id, l)| (id, l.name())))
            .finish()
    }
}


impl<'a> LoggerRegistry<'a> {
    /// Construct an empty registry.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }


    /// Register `logger` with identifier `id`.
    /// Identifiers are unique.
    pub fn register<S, L>(&mut self, id: S, logger: L) -> LoggerResult<()>
        where S: ToString,
              L: Logger + 'a,
    {
        self.register_boxed(id, Box::new(logger))
    }


    /// Register a boxed `logger` with identifier `id`.
    pub fn register_boxed<S>(&mut self, id: S, logger: Box<dyn Logger + 'a>)
        -> LoggerResult<()>
        where S: ToString,
    {
        let id = id.to_string();
        if self.get(&id).is_some() {
            return Err(LoggerError::DuplicateLogger(id));
        }

        tracing::debug!(
            id = id.as_str(),
            logger = logger.name(),
            stopper = logger.is_stopper(),
            "register logger"
        );
        self.entries.push((id, logger));
        Ok(())
    }


    /// Register `logger` with identifier `id` and return the registry.
    pub fn with<S, L>(mut self, id: S, logger: L) -> LoggerResult<Self>
        where S: ToString,
              L: Logger + 'a,
    {
        self.register(id, logger)?;
        Ok(self)
    }


    /// Returns the logger registered as `id`.
    pub fn get(&self, id: &str) -> Option<&(dyn Logger + 'a)> {
        self.entries.iter()
            .find(|(key, _)| key == id)
            .map(|(_, logger)| logger.as_ref())
    }


    /// Returns the identifiers in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter()
            .map(|(id, _)| id.as_str())
            .collect()
    }


    /// Returns the number of registered loggers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }


    /// Returns `true` if no logger is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }


    /// Returns the number of loggers used as stoppers.
    pub fn n_stoppers(&self) -> usize {
        self.entries.iter()
            .filter(|(_, logger)| logger.is_stopper())
            .count()
    }


    /// Reports the current iteration to every logger,
    /// in registration order.
    ///
    /// On error, the loggers before the failing one have already
    /// recorded this iteration while the others have not.
    /// Call [`LoggerRegistry::clear_all`] before using the registry again.
    pub fn log_step(
        &mut self,
        iteration: usize,
        response: &[f64],
        prediction: &[f64],
        chosen_learner: &dyn BaseLearner,
        offset: f64,
        learning_rate: f64,
    ) -> LoggerResult<()>
    {
        self.entries.iter_mut()
            .try_for_each(|(_, logger)| {
                logger.log_step(
                    iteration,
                    response,
                    prediction,
                    chosen_learner,
                    offset,
                    learning_rate,
                )
            })
    }


    /// Returns `true` if any stopper reached its stopping criterion.
    pub fn any_stop_criteria_reached(&self) -> LoggerResult<bool> {
        for (id, logger) in self.entries.iter() {
            if logger.reached_stop_criteria()? {
                tracing::info!(id = id.as_str(), "stop criterion reached");
                return Ok(true);
            }
        }
        Ok(false)
    }


    /// Clears the data of every logger.
    /// Call this method before re-training with the same registry.
    pub fn clear_all(&mut self) {
        self.entries.iter_mut()
            .for_each(|(_, logger)| logger.clear_logger_data());
        tracing::debug!(n_loggers = self.entries.len(), "clear loggers");
    }


    /// Collects the trajectories into a `DataFrame`.
    /// Each logger becomes a column named by its identifier,
    /// each row corresponds to an iteration.
    pub fn collect_logged_data(&self) -> LoggerResult<DataFrame> {
        let mut n_rows = None;

        let columns = self.entries.iter()
            .map(|(id, logger)| {
                let data = logger.logged_data();
                let expected = *n_rows.get_or_insert(data.len());
                if data.len() != expected {
                    return Err(LoggerError::InconsistentLength {
                        id: id.clone(),
                        expected,
                        found: data.len(),
                    });
                }
                Ok(Series::new(id, data))
            })
            .collect::<LoggerResult<Vec<_>>>()?;

        let df = DataFrame::new(columns)?;
        Ok(df)
    }


    /// Concatenates the status of every logger.
    /// Each field is at least as wide as the logger identifier,
    /// so that the line is aligned with
    /// [`LoggerRegistry::render_header`].
    pub fn render_status_line(&self) -> LoggerResult<String> {
        let line = self.entries.iter()
            .map(|(id, logger)| {
                let width = column_width(id, logger.as_ref());
                logger.status()
                    .map(|status| format!("{status:>width$}"))
            })
            .collect::<LoggerResult<Vec<_>>>()?
            .join(STATUS_SEPARATOR);
        Ok(line)
    }


    /// Renders the identifiers aligned to the status fields.
    pub fn render_header(&self) -> String {
        self.entries.iter()
            .map(|(id, logger)| {
                let width = column_width(id, logger.as_ref());
                format!("{id:>width$}")
            })
            .collect::<Vec<_>>()
            .join(STATUS_SEPARATOR)
    }


    /// Prints the header row to the console.
    pub fn print_header(&self) {
        println!(
            "      {:>WIDTH$}{STATUS_SEPARATOR}{}\n",
            "ROUND".bold().red(),
            self.render_header().bold().blue(),
        );
    }


    /// Prints the status row of `iteration` to the console.
    /// Set `finished` for the last iteration of the training.
    pub fn print_status(&self, iteration: usize, finished: bool)
        -> LoggerResult<()>
    {
        let line = self.render_status_line()?;
        let marker = if finished {
            "[FIN]".bold().bright_green()
        } else {
            "[LOG]".bold().magenta()
        };
        println!(
            "{} {}{STATUS_SEPARATOR}{}",
            marker,
            format!("{:>WIDTH$}", iteration).red(),
            line,
        );
        Ok(())
    }


    /// Prints the registered loggers and their parameters.
    pub fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "LOGGERS".bold(), "",
        );
        println!("\n{header}");

        for (id, logger) in self.entries.iter() {
            println!(
                "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
                id.bold(),
                logger.name().bold().green(),
            );
            if let Some(info) = logger.info() {
                let line = info.into_iter()
                    .map(|(key, val)| {
                        format!(
                            "    + {:<STAT_WIDTH$}\t{:>width$}",
                            key,
                            val.bold().yellow(),
                            width = STAT_WIDTH - 8
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                println!("{line}");
            }
        }
        println!("{:=^FULL_WIDTH$}\n", "".bold());
    }
}


fn column_width(id: &str, logger: &dyn Logger) -> usize {
    id.len().max(logger.status_width())
}


impl fmt::Display for LoggerRegistry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registered loggers: {}", self.entries.len())?;
        for (id, logger) in self.entries.iter() {
            let stopper = if logger.is_stopper() { " (stopper)" } else { "" };
            writeln!(f, "  {id}: {}{stopper}", logger.name())?;
        }
        Ok(())
    }
}
