use polars::prelude::*;
use std::ops::Index;
use std::slice::Iter;

use crate::error::LoggerResult;


/// Dense representation of a feature.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseFeature {
    /// Feature name
    pub name: String,
    /// Feature values.
    pub sample: Vec<f64>,
}


/// Sparse representation of a feature.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseFeature {
    /// Feature name
    pub name: String,
    /// Pairs of sample index and feature value,
    /// sorted by the sample index.
    pub sample: Vec<(usize, f64)>,
    /// Number of examples.
    /// Note that `self.n_sample >= self.sample.len()`.
    pub(crate) n_sample: usize,
}


/// Held-out data of a single feature.
/// A base learner fitted on this feature predicts on it.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// Dense representation of a feature
    Dense(DenseFeature),
    /// Sparse representation of a feature
    Sparse(SparseFeature),
}


impl Feature {
    /// Construct a dense feature from its values.
    pub fn dense<T: ToString>(name: T, sample: Vec<f64>) -> Self {
        Self::Dense(DenseFeature { name: name.to_string(), sample })
    }


    /// Construct a sparse feature from `(index, value)` pairs.
    /// Rows that do not appear in `sample` have value `0`.
    pub fn sparse<T: ToString>(
        name: T,
        mut sample: Vec<(usize, f64)>,
        n_sample: usize,
    ) -> Self
    {
        sample.sort_by_key(|(i, _)| *i);
        assert!(
            sample.last().map_or(true, |(i, _)| *i < n_sample),
            "sparse index exceeds the number of examples"
        );
        Self::Sparse(SparseFeature { name: name.to_string(), sample, n_sample })
    }


    /// Convert `polars::Series` into a dense feature.
    pub fn from_series(series: &Series) -> LoggerResult<Self> {
        DenseFeature::from_series(series).map(Self::Dense)
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        match self {
            Self::Dense(feat) => &feat.name,
            Self::Sparse(feat) => &feat.name,
        }
    }


    /// Returns the number of examples in this feature.
    pub fn len(&self) -> usize {
        match self {
            Self::Dense(feat) => feat.sample.len(),
            Self::Sparse(feat) => feat.n_sample,
        }
    }


    /// Returns `true` if the number of examples is equals to `0`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /// Returns all values of this feature, including zeros.
    pub fn to_dense(&self) -> Vec<f64> {
        match self {
            Self::Dense(feat) => feat.sample.clone(),
            Self::Sparse(feat) => {
                let mut values = vec![0.0_f64; feat.n_sample];
                feat.sample.iter()
                    .for_each(|&(i, x)| { values[i] = x; });
                values
            },
        }
    }
}


impl DenseFeature {
    /// Returns an iterator over feature values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.sample.iter()
    }


    /// Convert `polars::Series` into `DenseFeature`.
    pub fn from_series(series: &Series) -> LoggerResult<Self> {
        let name = series.name().to_string();

        let series = series.cast(&DataType::Float64)?;
        let sample = series.f64()?
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                PolarsError::ComputeError(
                    format!("feature '{name}' contains null values").into()
                )
            })?;

        Ok(Self { name, sample, })
    }
}


impl SparseFeature {
    /// Returns an iterator over non-zero feature values.
    pub fn iter(&self) -> Iter<'_, (usize, f64)> {
        self.sample.iter()
    }


    /// Returns the number of indices that have zero-value.
    pub fn zero_counts(&self) -> usize {
        self.n_sample - self.sample.len()
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        match self {
            Self::Dense(feat)  => &feat[idx],
            Self::Sparse(feat) => &feat[idx],
        }
    }
}


impl Index<usize> for DenseFeature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.sample[idx]
    }
}


impl Index<usize> for SparseFeature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        assert!(idx < self.n_sample, "index out of range");
        self.sample[..].binary_search_by(|(i, _)| i.cmp(&idx))
            .map(|pos| &self.sample[pos].1)
            .unwrap_or(&0.0)
    }
}
