//! Provides the loggers and the registry that drives them.

mod core;

mod iteration;
mod inbag_risk;
mod oob_risk;
mod time;

mod registry;


/// Logger trait
pub use self::core::Logger;

pub use self::iteration::IterationLogger;
pub use self::inbag_risk::InbagRiskLogger;
pub use self::oob_risk::OobRiskLogger;
pub use self::time::{TimeLogger, TimeUnit};

pub use self::registry::{LoggerRegistry, STATUS_SEPARATOR};


/// Default threshold of the relative improvement
/// used by the risk loggers.
pub const DEFAULT_EPS_FOR_BREAK: f64 = 1e-5;
