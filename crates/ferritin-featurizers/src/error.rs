//! Error types for featurization.
//!
//! Construction-time problems (bad chain indices, bad atom selections, failed chain
//! heuristics) surface from the featurizer builders. Per-frame problems surface from
//! the first offending `transform` call and abort it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeaturizerError {
    /// Empty, duplicate or out-of-range indices, or an unusable chain index.
    #[error("invalid selection for `{field}`: {reason}")]
    InvalidSelection { field: &'static str, reason: String },

    #[error("no protein chain found: no chain contains a CA atom")]
    NoProteinFound,

    #[error("no ligand chain found: every chain other than protein chain {protein_chain} has more than {max_atoms} atoms")]
    NoLigandFound {
        protein_chain: usize,
        max_atoms: usize,
    },

    /// A frame whose atom count disagrees with the topology.
    #[error("frame {frame} has {found} atoms but the topology has {expected}")]
    TopologyMismatch {
        frame: usize,
        expected: usize,
        found: usize,
    },

    #[error("{context}: mobile set has {mobile} points but reference set has {reference}")]
    DimensionMismatch {
        context: &'static str,
        mobile: usize,
        reference: usize,
    },

    #[error("feature matrix shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl FeaturizerError {
    pub fn invalid_selection(field: &'static str, reason: impl Into<String>) -> Self {
        FeaturizerError::InvalidSelection {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FeaturizerError>;
