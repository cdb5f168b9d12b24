//! Defines the view a logger has on the base learner
//! chosen at each boosting iteration.

use crate::sample::Feature;


/// A fitted base learner, as seen by the loggers.
///
/// The outer boosting loop owns the base learners.
/// Loggers only read the identifier of the feature
/// the base learner was fitted on
/// and ask for its predictions on held-out data.
pub trait BaseLearner {
    /// Identifier of the feature (or feature group)
    /// this base learner is fitted on.
    fn data_identifier(&self) -> &str;


    /// Predicts the contribution of this base learner
    /// for every row of `data`.
    /// The learning rate is **not** applied.
    fn predict(&self, data: &Feature) -> Vec<f64>;
}
