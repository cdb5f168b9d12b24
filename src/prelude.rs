//! Exports the loggers, the registry, and the collaborator traits.
//!
pub use crate::logger::{
    // Logger trait
    Logger,


    // Loggers ----------------------------------
    IterationLogger,
    InbagRiskLogger,
    OobRiskLogger,
    TimeLogger,
    TimeUnit,


    // Registry ---------------------------------
    LoggerRegistry,
};


pub use crate::config::{
    RegistryConfig,
    LoggerConfig,
};


pub use crate::loss::{
    Loss,
    LossKind,
};


pub use crate::base_learner::BaseLearner;


pub use crate::sample::{
    Feature,
    HeldOutSample,
};


pub use crate::error::{
    LoggerError,
    LoggerResult,
};
