//! Information-Theoretic Feature Selection
//!
//! Greedy forward selection of `k` features from a discretized feature
//! matrix, a class column and a per-sample weight vector:
//!
//! - [`Cmim`]: Conditional Mutual Information Maximisation with lazy,
//!   incremental refinement of per-feature score bounds
//! - [`Disr`]: Double Input Symmetrical Relevance with a write-once cache of
//!   pair relevances
//!
//! Both selectors request their statistics from an
//! [`InformationOracle`](info_oracle::InformationOracle) and default to the
//! weighted one. Each call owns all of its scratch state, so a selector can
//! be shared freely between threads.
//!
//! ```
//! use feature_select::{Cmim, FeatureSelector, FeatureView};
//!
//! // 6 samples x 3 features, column-major; feature 1 is the class itself
//! let matrix = [
//!     0.0, 0.0, 1.0, 1.0, 0.0, 1.0,
//!     0.0, 1.0, 0.0, 1.0, 0.0, 1.0,
//!     1.0, 1.0, 0.0, 0.0, 1.0, 1.0,
//! ];
//! let class = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0];
//! let weights = [1.0; 6];
//!
//! let view = FeatureView::from_column_major(&matrix, 6, 3).unwrap();
//! let selection = Cmim::new().select(2, &view, &class, &weights).unwrap();
//! assert_eq!(selection.features[0], 1);
//! ```

mod arena;
mod cmim;
mod config;
mod disr;
mod error;
mod selector;
mod validate;
mod view;

pub use cmim::Cmim;
pub use config::{Algorithm, SelectorConfig};
pub use disr::Disr;
pub use error::SelectionError;
pub use selector::{FeatureSelector, Selection, SelectionStats};
pub use view::FeatureView;

pub use info_oracle::{InformationOracle, OracleError, UnweightedOracle, WeightedOracle};
