//! Held-out features and response evaluated by the out-of-bag logger.

// Provides feature struct.
pub(crate) mod feature_struct;
// Provides held-out sample struct.
pub(crate) mod held_out;


pub use held_out::HeldOutSample;
pub use feature_struct::{Feature, DenseFeature, SparseFeature};
