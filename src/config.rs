//! Builds a [`LoggerRegistry`] from a serialized configuration.
//!
//! ```
//! use boostwatch::prelude::*;
//!
//! let json = r#"{
//!     "loggers": [
//!         { "id": "iterations", "type": "iteration",
//!           "stopper": true, "max_iterations": 500 },
//!         { "id": "risk", "type": "inbag_risk", "eps_for_break": 1e-4 },
//!         { "id": "time", "type": "time", "unit": "seconds" }
//!     ]
//! }"#;
//!
//! let loss = LossKind::Quadratic;
//! let registry = RegistryConfig::from_json(json)
//!     .unwrap()
//!     .build(&loss, None)
//!     .unwrap();
//! assert_eq!(registry.names(), vec!["iterations", "risk", "time"]);
//! ```

use serde::{Serialize, Deserialize};

use crate::{
    Logger,
    Loss,
    HeldOutSample,
    IterationLogger,
    InbagRiskLogger,
    OobRiskLogger,
    TimeLogger,
    LoggerRegistry,
    error::{LoggerError, LoggerResult},
    logger::DEFAULT_EPS_FOR_BREAK,
};


/// Configuration of a single logger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoggerConfig {
    /// See [`IterationLogger`].
    Iteration {
        /// Use the logger as a stopper.
        #[serde(default)]
        stopper: bool,
        /// Maximal number of iterations.
        max_iterations: usize,
    },

    /// See [`InbagRiskLogger`].
    InbagRisk {
        /// Use the logger as a stopper.
        #[serde(default)]
        stopper: bool,
        /// Threshold of the relative improvement.
        #[serde(default = "default_eps_for_break")]
        eps_for_break: f64,
    },

    /// See [`OobRiskLogger`].
    /// Requires held-out data when built.
    OobRisk {
        /// Use the logger as a stopper.
        #[serde(default)]
        stopper: bool,
        /// Threshold of the relative improvement.
        #[serde(default = "default_eps_for_break")]
        eps_for_break: f64,
    },

    /// See [`TimeLogger`].
    Time {
        /// Use the logger as a stopper.
        #[serde(default)]
        stopper: bool,
        /// Time budget in `unit`.
        #[serde(default = "default_max_time")]
        max_time: u64,
        /// One of `microseconds`, `seconds`, or `minutes`.
        #[serde(default = "default_unit")]
        unit: String,
    },
}


fn default_eps_for_break() -> f64 { DEFAULT_EPS_FOR_BREAK }
fn default_max_time() -> u64 { u64::MAX }
fn default_unit() -> String { "microseconds".into() }


impl LoggerConfig {
    /// Build the logger described by `self`.
    /// `id` only appears in error messages.
    pub fn build<'a>(
        &self,
        id: &str,
        loss: &'a dyn Loss,
        held_out: Option<&'a HeldOutSample>,
    ) -> LoggerResult<Box<dyn Logger + 'a>>
    {
        let logger: Box<dyn Logger + 'a> = match self {
            Self::Iteration { stopper, max_iterations } => {
                let logger = IterationLogger::new(*max_iterations)
                    .stopper(*stopper);
                Box::new(logger)
            },
            Self::InbagRisk { stopper, eps_for_break } => {
                let logger = InbagRiskLogger::new(loss)
                    .eps_for_break(*eps_for_break)
                    .stopper(*stopper);
                Box::new(logger)
            },
            Self::OobRisk { stopper, eps_for_break } => {
                let sample = held_out
                    .ok_or_else(|| LoggerError::MissingHeldOut(id.into()))?;
                let logger = OobRiskLogger::from_sample(loss, sample)
                    .eps_for_break(*eps_for_break)
                    .stopper(*stopper);
                Box::new(logger)
            },
            Self::Time { stopper, max_time, unit } => {
                let logger = TimeLogger::with_unit_name(unit)?
                    .max_time(*max_time)
                    .stopper(*stopper);
                Box::new(logger)
            },
        };
        Ok(logger)
    }
}


/// A logger configuration with its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLoggerConfig {
    /// Identifier of the logger in the registry.
    pub id: String,
    /// Configuration of the logger.
    #[serde(flatten)]
    pub logger: LoggerConfig,
}


/// Configuration of a [`LoggerRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Loggers in registration order.
    pub loggers: Vec<NamedLoggerConfig>,
}


impl RegistryConfig {
    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> LoggerResult<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }


    /// Serialize `self` as JSON.
    pub fn to_json(&self) -> LoggerResult<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }


    /// Append a logger configuration.
    pub fn logger<S: ToString>(mut self, id: S, logger: LoggerConfig)
        -> Self
    {
        self.loggers.push(NamedLoggerConfig { id: id.to_string(), logger });
        self
    }


    /// Build a registry.
    /// Every risk logger evaluates `loss`;
    /// out-of-bag loggers evaluate `held_out`.
    pub fn build<'a>(
        &self,
        loss: &'a dyn Loss,
        held_out: Option<&'a HeldOutSample>,
    ) -> LoggerResult<LoggerRegistry<'a>>
    {
        let mut registry = LoggerRegistry::new();
        for NamedLoggerConfig { id, logger } in self.loggers.iter() {
            let logger = logger.build(id, loss, held_out)?;
            registry.register_boxed(id, logger)?;
        }
        Ok(registry)
    }
}
