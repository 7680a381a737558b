//! Combine Selections

use crate::topology::{Atom, Topology};
use std::ops::BitAnd;

/// Selection
///
/// Selections are ordered atom indices that can be used to
/// identify specific sets of atoms within a [`Topology`].
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub(crate) indices: Vec<usize>,
}

impl Selection {
    pub fn new(indices: Vec<usize>) -> Self {
        Selection { indices }
    }
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
    pub fn len(&self) -> usize {
        self.indices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
    pub fn and(&self, other: &Selection) -> Selection {
        let indices: Vec<usize> = self
            .indices
            .iter()
            .filter(|&&idx| other.indices.contains(&idx))
            .cloned()
            .collect();
        Selection::new(indices)
    }
}

impl BitAnd for &Selection {
    type Output = Selection;

    fn bitand(self, other: Self) -> Selection {
        self.and(other)
    }
}

/// Fluent atom filtering over a [`Topology`].
///
/// Starts from every atom; each call narrows the current selection.
pub struct AtomSelector<'a> {
    topology: &'a Topology,
    current_selection: Selection,
}

impl<'a> AtomSelector<'a> {
    pub(crate) fn new(topology: &'a Topology) -> Self {
        AtomSelector {
            topology,
            current_selection: Selection::new((0..topology.n_atoms()).collect()),
        }
    }
    fn narrow<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Atom) -> bool,
    {
        let selection = Selection::new(
            self.topology
                .atoms()
                .filter(|atom| predicate(*atom))
                .map(Atom::index)
                .collect(),
        );
        self.current_selection = &self.current_selection & &selection;
        self
    }
    pub fn chain(mut self, chain_index: usize) -> Self {
        let chain_selection = Selection::new(
            self.topology
                .chain(chain_index)
                .map(|chain| chain.atom_indices().collect())
                .unwrap_or_default(),
        );
        self.current_selection = &self.current_selection & &chain_selection;
        self
    }
    pub fn heavy(self) -> Self {
        self.narrow(|atom| !atom.is_hydrogen())
    }
    pub fn collect(self) -> Selection {
        self.current_selection
    }
}
