//! Information Oracle
//!
//! Weighted and unweighted entropy, conditional entropy and mutual
//! information over discrete vectors, plus the relabelling and merging
//! helpers that feature selectors build joint variables with.
//!
//! Inputs are discrete codes stored as `f64`. Any finite value is a valid
//! code; distinct values are distinct states.

mod discrete;
mod error;
mod oracle;
mod weighted;

pub use discrete::{merge_discretized, normalize_labels, Discretized};
pub use error::OracleError;
pub use oracle::{InformationOracle, UnweightedOracle, WeightedOracle};
pub use weighted::{
    conditional_entropy, conditional_mutual_information, entropy, joint_entropy,
    mutual_information, weighted_conditional_entropy, weighted_conditional_mutual_information,
    weighted_entropy, weighted_joint_entropy, weighted_mutual_information,
};
