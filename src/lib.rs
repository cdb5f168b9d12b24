#![warn(missing_docs)]

//!
//! A crate that watches a component-wise boosting loop.
//!
//! Every boosting iteration is reported to a set of **loggers**.
//! Each logger records one trajectory per training run
//! and may additionally act as a **stopper**,
//! a logger that halts the training
//! once its own criterion is satisfied.
//!
//! This crate provides the following loggers.
//!
//! - [`IterationLogger`]
//!     Counts the iterations.
//!     As a stopper, halts at a fixed number of iterations.
//!
//! - [`InbagRiskLogger`]
//!     Tracks the empirical risk over the training examples.
//!     As a stopper, halts once the relative improvement of the risk
//!     falls below a threshold.
//!
//! - [`OobRiskLogger`]
//!     Tracks the empirical risk over held-out examples
//!     by accumulating its own copy of the model prediction.
//!     Stops with the same rule as [`InbagRiskLogger`].
//!
//! - [`TimeLogger`]
//!     Tracks the elapsed wall-clock time.
//!     As a stopper, halts after a time budget.
//!
//! [`LoggerRegistry`] drives all registered loggers,
//! decides whether the training halts,
//! and exports the trajectories as a `polars::DataFrame`.

pub mod error;
pub mod loss;
pub mod base_learner;
pub mod sample;
pub mod logger;
pub mod config;
pub mod prelude;


pub use error::{LoggerError, LoggerResult};
pub use loss::{Loss, LossKind};
pub use base_learner::BaseLearner;
pub use sample::{Feature, HeldOutSample};

pub use logger::{
    Logger,
    IterationLogger,
    InbagRiskLogger,
    OobRiskLogger,
    TimeLogger,
    TimeUnit,
    LoggerRegistry,
};

pub use config::{RegistryConfig, LoggerConfig};
