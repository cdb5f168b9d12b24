//! Provides [`TimeLogger`] and [`TimeUnit`].

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::{
    BaseLearner,
    Logger,
    error::{LoggerError, LoggerResult},
};
use super::core::STATUS_WIDTH;


/// Unit of the time measured by [`TimeLogger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Microseconds
    Microseconds,
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
}


impl TimeUnit {
    /// Convert `duration` into this unit.
    /// The fraction is truncated.
    pub fn count(&self, duration: Duration) -> u128 {
        match self {
            Self::Microseconds => duration.as_micros(),
            Self::Seconds => duration.as_secs() as u128,
            Self::Minutes => (duration.as_secs() / 60) as u128,
        }
    }
}


impl FromStr for TimeUnit {
    type Err = LoggerError;

    fn from_str(unit: &str) -> Result<Self, Self::Err> {
        match unit {
            "microseconds" => Ok(Self::Microseconds),
            "seconds" => Ok(Self::Seconds),
            "minutes" => Ok(Self::Minutes),
            _ => Err(LoggerError::InvalidTimeUnit(unit.to_string())),
        }
    }
}


impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self {
            Self::Microseconds => "microseconds",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
        };
        write!(f, "{unit}")
    }
}


/// Tracks the elapsed wall-clock time.
///
/// The clock starts at the first [`Logger::log_step`] after a clear.
/// As a stopper, [`TimeLogger`] halts the training
/// once the elapsed time reaches `max_time` (in `unit`).
///
/// The trajectory depends on the machine load,
/// so it is not reproducible across runs.
#[derive(Debug, Clone)]
pub struct TimeLogger {
    is_stopper: bool,

    // Used only if `is_stopper` is `true`.
    max_time: u64,

    unit: TimeUnit,

    // Set at the first observation after a clear.
    start: Option<Instant>,

    elapsed: Vec<u128>,
}


impl TimeLogger {
    /// Construct a new instance of `TimeLogger`.
    /// The logger is not a stopper by default.
    pub fn new(unit: TimeUnit) -> Self {
        Self {
            is_stopper: false,
            max_time: u64::MAX,
            unit,
            start: None,
            elapsed: Vec::new(),
        }
    }


    /// Construct a new instance of `TimeLogger`
    /// from the name of the unit,
    /// one of `microseconds`, `seconds`, or `minutes`.
    pub fn with_unit_name(unit: &str) -> LoggerResult<Self> {
        unit.parse::<TimeUnit>().map(Self::new)
    }


    /// Use this logger as a stopper.
    pub fn stopper(mut self, is_stopper: bool) -> Self {
        self.is_stopper = is_stopper;
        self
    }


    /// Set the time budget in `unit`.
    pub fn max_time(mut self, max_time: u64) -> Self {
        self.max_time = max_time;
        self
    }


    /// Returns the time unit.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}


impl Logger for TimeLogger {
    fn name(&self) -> &str {
        "Time logger"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let limit = if self.max_time != u64::MAX {
            format!("{} {}", self.max_time, self.unit)
        } else {
            "Nothing".into()
        };
        let info = Vec::from([
            ("Stopper", format!("{}", self.is_stopper)),
            ("Time limit", limit),
        ]);
        Some(info)
    }


    fn log_step(
        &mut self,
        _iteration: usize,
        _response: &[f64],
        _prediction: &[f64],
        _chosen_learner: &dyn BaseLearner,
        _offset: f64,
        _learning_rate: f64,
    ) -> LoggerResult<()>
    {
        if self.elapsed.is_empty() {
            self.start = Some(Instant::now());
        }
        let elapsed = self.start
            .map_or(Duration::ZERO, |start| start.elapsed());

        self.elapsed.push(self.unit.count(elapsed));
        Ok(())
    }


    fn reached_stop_criteria(&self) -> LoggerResult<bool> {
        if !self.is_stopper { return Ok(false); }

        let elapsed = self.elapsed.last()
            .ok_or_else(|| LoggerError::NoObservation(self.name().into()))?;
        Ok(*elapsed >= self.max_time as u128)
    }


    fn logged_data(&self) -> Vec<f64> {
        self.elapsed.iter()
            .map(|&t| t as f64)
            .collect()
    }


    fn clear_logger_data(&mut self) {
        self.elapsed.clear();
        self.start = None;
    }


    fn status(&self) -> LoggerResult<String> {
        self.elapsed.last()
            .map(|t| format!("{t:>STATUS_WIDTH$}"))
            .ok_or_else(|| LoggerError::NoObservation(self.name().into()))
    }


    fn is_stopper(&self) -> bool {
        self.is_stopper
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_truncates() {
        let duration = Duration::from_millis(119_999);
        assert_eq!(TimeUnit::Microseconds.count(duration), 119_999_000);
        assert_eq!(TimeUnit::Seconds.count(duration), 119);
        assert_eq!(TimeUnit::Minutes.count(duration), 1);
    }


    #[test]
    fn unit_parses_known_names_only() {
        assert_eq!("seconds".parse::<TimeUnit>().unwrap(), TimeUnit::Seconds);
        assert_eq!(
            "minutes".parse::<TimeUnit>().unwrap().to_string(),
            "minutes"
        );
        let err = "hours".parse::<TimeUnit>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidTimeUnit(u) if u == "hours"));
    }
}
