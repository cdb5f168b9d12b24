//! Defines the error type shared by every logger.

use thiserror::Error;


/// Result type returned by the fallible operations of this crate.
pub type LoggerResult<T> = std::result::Result<T, LoggerError>;


/// Errors raised while configuring or driving the loggers.
///
/// None of them is transient.
/// The caller decides whether to abort the training session.
#[derive(Debug, Error)]
pub enum LoggerError {
    // Configuration ----------------------------------------------------------
    /// The time unit is not one of
    /// `microseconds`, `seconds`, or `minutes`.
    #[error(
        "time unit has to be one of 'microseconds', 'seconds' or 'minutes', \
        got '{0}'"
    )]
    InvalidTimeUnit(String),

    /// The chosen base learner refers to a feature
    /// that the held-out data does not contain.
    #[error("feature '{0}' is not contained in the held-out data")]
    UnknownFeature(String),

    /// An out-of-bag logger is configured but no held-out data is given.
    #[error("logger '{0}' requires held-out data")]
    MissingHeldOut(String),

    /// The target column is missing from a data frame.
    #[error("target column '{0}' is not found")]
    MissingTarget(String),

    /// Two held-out features have the same name.
    #[error("feature '{0}' appears more than once in the held-out data")]
    DuplicateFeature(String),

    /// A logger with the same identifier is already registered.
    #[error("logger '{0}' is already registered")]
    DuplicateLogger(String),

    /// Failed to parse a configuration.
    #[error(transparent)]
    Config(#[from] serde_json::Error),

    /// An error raised by `polars`.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),


    // Arithmetic -------------------------------------------------------------
    /// The previous risk is zero,
    /// so that the relative improvement is not defined.
    #[error(
        "relative improvement at iteration {iteration} is undefined \
        since the previous risk is zero"
    )]
    ZeroRisk {
        /// Number of recorded risks when the error occured.
        iteration: usize,
    },


    // State ------------------------------------------------------------------
    /// The logger is queried before any call of `log_step`.
    #[error("logger '{0}' has no observation yet")]
    NoObservation(String),

    /// Two vectors that must have the same length do not.
    #[error("length mismatch: expected {expected}, got {found}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// The loss function returned no value.
    #[error("loss '{0}' returned an empty vector")]
    EmptyLoss(String),

    /// Trajectories of the registered loggers have different lengths.
    #[error(
        "logger '{id}' recorded {found} observations \
        while the others recorded {expected}"
    )]
    InconsistentLength {
        /// Identifier of the logger.
        id: String,
        /// Length of the first trajectory.
        expected: usize,
        /// Length of the trajectory of `id`.
        found: usize,
    },
}
