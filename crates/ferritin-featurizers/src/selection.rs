//! Atom subsets used for alignment and for calculation.
//!
//! An [`AtomSelection`] names a subset; it is resolved once, at featurizer construction,
//! into a validated [`AtomIndexSet`].
use crate::chains::ChainRoles;
use crate::error::{FeaturizerError, Result};
use ferritin_trajectory::{Frame, Selection, Topology};
use itertools::Itertools;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AtomSelection {
    /// Every atom of the protein chain.
    #[default]
    Protein,
    /// Every atom of the ligand chain.
    Ligand,
    /// Every atom of the topology.
    All,
    /// Exactly these atom indices, in this order.
    Custom(Vec<usize>),
}

impl AtomSelection {
    /// Whether resolving this selection needs protein/ligand chain roles.
    pub fn needs_chain_roles(&self) -> bool {
        matches!(self, AtomSelection::Protein | AtomSelection::Ligand)
    }

    /// Resolve into concrete indices. `roles` is only consulted for
    /// [`AtomSelection::Protein`] and [`AtomSelection::Ligand`].
    pub fn resolve(
        &self,
        topology: &Topology,
        roles: Option<ChainRoles>,
        field: &'static str,
    ) -> Result<AtomIndexSet> {
        let chain_roles = || {
            roles.ok_or_else(|| {
                FeaturizerError::invalid_selection(field, "protein and ligand chains are unresolved")
            })
        };
        let selection = match self {
            AtomSelection::Protein => topology.select().chain(chain_roles()?.protein).collect(),
            AtomSelection::Ligand => topology.select().chain(chain_roles()?.ligand).collect(),
            AtomSelection::All => topology.select().collect(),
            AtomSelection::Custom(indices) => Selection::new(indices.clone()),
        };
        AtomIndexSet::new(selection, topology, field)
    }
}

/// Ordered, non-empty, duplicate-free atom indices that are valid in a topology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtomIndexSet {
    indices: Vec<usize>,
}

impl AtomIndexSet {
    pub fn new(selection: Selection, topology: &Topology, field: &'static str) -> Result<Self> {
        let indices = selection.into_indices();
        if indices.is_empty() {
            return Err(FeaturizerError::invalid_selection(field, "selection is empty"));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i >= topology.n_atoms()) {
            return Err(FeaturizerError::invalid_selection(
                field,
                format!(
                    "atom index {bad} is out of range for a topology with {} atoms",
                    topology.n_atoms()
                ),
            ));
        }
        if let Some(dup) = indices.iter().duplicates().next() {
            return Err(FeaturizerError::invalid_selection(
                field,
                format!("atom index {dup} appears more than once"),
            ));
        }
        Ok(AtomIndexSet { indices })
    }
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
    pub fn len(&self) -> usize {
        self.indices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
    /// Coordinates of the selected atoms, in selection order.
    ///
    /// `None` if the frame is too short; callers validate the frame size first.
    pub fn gather(&self, frame: &Frame) -> Option<Vec<[f64; 3]>> {
        frame.gather(&self.indices)
    }
}
