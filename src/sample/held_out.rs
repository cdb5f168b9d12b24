use std::collections::HashMap;

use polars::prelude::*;
use rayon::prelude::*;
use super::feature_struct::*;

use crate::error::{LoggerError, LoggerResult};


/// Struct `HeldOutSample` holds the examples an [`OobRiskLogger`] evaluates.
///
/// The features must be prepared exactly as the training features,
/// so that every base learner finds its data by the same identifier.
///
/// [`OobRiskLogger`]: crate::OobRiskLogger
#[derive(Debug, Clone)]
pub struct HeldOutSample {
    pub(crate) features: HashMap<String, Feature>,
    pub(crate) response: Vec<f64>,
}


impl HeldOutSample {
    /// Construct a held-out sample from features and the response.
    /// Every feature must have `response.len()` examples
    /// and a name no other feature has.
    pub fn new(features: Vec<Feature>, response: Vec<f64>)
        -> LoggerResult<Self>
    {
        let n_sample = response.len();
        if let Some(feat) = features.iter().find(|f| f.len() != n_sample) {
            return Err(LoggerError::LengthMismatch {
                expected: n_sample,
                found: feat.len(),
            });
        }

        let mut map = HashMap::with_capacity(features.len());
        for feat in features {
            let name = feat.name().to_string();
            if map.contains_key(&name) {
                return Err(LoggerError::DuplicateFeature(name));
            }
            map.insert(name, feat);
        }

        Ok(Self { features: map, response })
    }


    /// Convert `polars::DataFrame` into `HeldOutSample`.
    /// The column named `target` becomes the response,
    /// every other column becomes a dense feature.
    pub fn from_dataframe(data: &DataFrame, target: &str)
        -> LoggerResult<Self>
    {
        let response = data.column(target)
            .map_err(|_| LoggerError::MissingTarget(target.to_string()))
            .and_then(DenseFeature::from_series)?
            .sample;

        let features = data.get_columns()
            .into_par_iter()
            .filter(|series| series.name() != target)
            .map(Feature::from_series)
            .collect::<LoggerResult<Vec<_>>>()?;

        Self::new(features, response)
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.response.len(), self.features.len())
    }


    /// Returns the feature map, keyed by feature name.
    pub fn features(&self) -> &HashMap<String, Feature> {
        &self.features
    }


    /// Returns the response vector.
    pub fn response(&self) -> &[f64] {
        &self.response[..]
    }
}
