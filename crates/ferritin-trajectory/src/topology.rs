//! Topology: Chains -> Residues -> Atoms
//!
//! The [`Topology`] owns its chains top-down. Atom indices are global, unique and
//! contiguous over the whole topology (`0..n_atoms`) so they can be used directly
//! to index into a [`Frame`](crate::Frame)'s coordinates. Residue indices are global
//! in the same way.
//!
//! Topologies are assembled with a [`TopologyBuilder`]:
//!
//! ```
//! use ferritin_trajectory::Topology;
//!
//! let mut builder = Topology::builder();
//! builder
//!     .chain("A")
//!     .residue("GLY", 1)
//!     .atom("N", "N")
//!     .atom("CA", "C")
//!     .chain("B")
//!     .residue("LIG", 1)
//!     .atom("C1", "C");
//! let topology = builder.build().unwrap();
//! assert_eq!(topology.n_atoms(), 3);
//! assert_eq!(topology.n_chains(), 2);
//! ```
use crate::selection::AtomSelector;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TopologyError {
    #[error("residue `{0}` was added before any chain")]
    ResidueWithoutChain(String),
    #[error("atom `{0}` was added before any residue")]
    AtomWithoutResidue(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    index: usize,
    name: String,
    element: String,
}

impl Atom {
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn element_name(&self) -> &str {
        &self.element
    }
    /// Alpha carbons mark protein backbone residues.
    pub fn is_alpha_carbon(&self) -> bool {
        self.name == "CA"
    }
    /// Falls back to the atom name when no element was recorded.
    pub fn is_hydrogen(&self) -> bool {
        match self.element.as_str() {
            "" => self.name.starts_with('H'),
            element => element.eq_ignore_ascii_case("H") || element.eq_ignore_ascii_case("D"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Residue {
    index: usize,
    name: String,
    res_seq: i32,
    chain_index: usize,
    atoms: Vec<Atom>,
}

impl Residue {
    /// Global residue index within the topology.
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Sequence number as recorded in the source structure.
    pub fn res_seq(&self) -> i32 {
        self.res_seq
    }
    pub fn chain_index(&self) -> usize {
        self.chain_index
    }
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
    pub fn atom_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.atoms.iter().map(Atom::index)
    }
    pub fn find_atom_by_name(&self, name: &str) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.name() == name)
    }
    pub fn alpha_carbon(&self) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.is_alpha_carbon())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    index: usize,
    id: String,
    residues: Vec<Residue>,
}

impl Chain {
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> + '_ {
        self.residues.iter().flat_map(|residue| residue.atoms.iter())
    }
    pub fn atom_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.atoms().map(Atom::index)
    }
    pub fn atom_count(&self) -> usize {
        self.residues.iter().map(Residue::atom_count).sum()
    }
    pub fn alpha_carbon_count(&self) -> usize {
        self.atoms().filter(|atom| atom.is_alpha_carbon()).count()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Topology {
    chains: Vec<Chain>,
    n_atoms: usize,
    n_residues: usize,
}

impl Topology {
    pub fn builder() -> TopologyBuilder {
        TopologyBuilder::new()
    }
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }
    pub fn chain(&self, index: usize) -> Option<&Chain> {
        self.chains.get(index)
    }
    pub fn n_chains(&self) -> usize {
        self.chains.len()
    }
    pub fn n_atoms(&self) -> usize {
        self.n_atoms
    }
    pub fn n_residues(&self) -> usize {
        self.n_residues
    }
    pub fn residues(&self) -> impl Iterator<Item = &Residue> + '_ {
        self.chains.iter().flat_map(|chain| chain.residues.iter())
    }
    pub fn residue(&self, index: usize) -> Option<&Residue> {
        self.residues().nth(index)
    }
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> + '_ {
        self.residues().flat_map(|residue| residue.atoms.iter())
    }
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms().nth(index)
    }
    pub fn select(&self) -> AtomSelector<'_> {
        AtomSelector::new(self)
    }
}

/// Incremental builder for a [`Topology`].
///
/// `chain` opens a new chain, `residue` opens a new residue in the most recent chain
/// and `atom` appends to the most recent residue. Misuse is recorded and reported by
/// [`TopologyBuilder::build`].
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    chains: Vec<Chain>,
    n_atoms: usize,
    n_residues: usize,
    error: Option<TopologyError>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn chain(&mut self, id: impl Into<String>) -> &mut Self {
        let index = self.chains.len();
        self.chains.push(Chain {
            index,
            id: id.into(),
            residues: Vec::new(),
        });
        self
    }
    pub fn residue(&mut self, name: impl Into<String>, res_seq: i32) -> &mut Self {
        let name = name.into();
        match self.chains.last_mut() {
            Some(chain) => {
                chain.residues.push(Residue {
                    index: self.n_residues,
                    name,
                    res_seq,
                    chain_index: chain.index,
                    atoms: Vec::new(),
                });
                self.n_residues += 1;
            }
            None => {
                self.error
                    .get_or_insert(TopologyError::ResidueWithoutChain(name));
            }
        }
        self
    }
    pub fn atom(&mut self, name: impl Into<String>, element: impl Into<String>) -> &mut Self {
        let name = name.into();
        match self
            .chains
            .last_mut()
            .and_then(|chain| chain.residues.last_mut())
        {
            Some(residue) => {
                residue.atoms.push(Atom {
                    index: self.n_atoms,
                    name,
                    element: element.into(),
                });
                self.n_atoms += 1;
            }
            None => {
                self.error
                    .get_or_insert(TopologyError::AtomWithoutResidue(name));
            }
        }
        self
    }
    pub fn build(self) -> Result<Topology, TopologyError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(Topology {
            chains: self.chains,
            n_atoms: self.n_atoms,
            n_residues: self.n_residues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_chain_topology() -> Topology {
        let mut builder = Topology::builder();
        builder
            .chain("A")
            .residue("MET", 1)
            .atom("N", "N")
            .atom("CA", "C")
            .atom("C", "C")
            .residue("GLY", 2)
            .atom("N", "N")
            .atom("CA", "C")
            .atom("HA2", "H")
            .chain("B")
            .residue("LIG", 1)
            .atom("C1", "C")
            .atom("O1", "O");
        builder.build().unwrap()
    }

    #[test]
    fn test_global_indices_are_contiguous() {
        let topology = two_chain_topology();
        assert_eq!(topology.n_atoms(), 8);
        assert_eq!(topology.n_residues(), 3);
        let indices: Vec<usize> = topology.atoms().map(Atom::index).collect();
        assert_eq!(indices, (0..8).collect::<Vec<_>>());

        let ligand = topology.chain(1).unwrap();
        assert_eq!(ligand.atom_indices().collect::<Vec<_>>(), vec![6, 7]);
        assert_eq!(ligand.residues()[0].index(), 2);
        assert_eq!(ligand.residues()[0].chain_index(), 1);
    }

    #[test]
    fn test_chain_queries() {
        let topology = two_chain_topology();
        let protein = topology.chain(0).unwrap();
        assert_eq!(protein.id(), "A");
        assert_eq!(protein.atom_count(), 6);
        assert_eq!(protein.alpha_carbon_count(), 2);
        assert_eq!(topology.chain(1).unwrap().alpha_carbon_count(), 0);

        let gly = topology.residue(1).unwrap();
        assert_eq!(gly.name(), "GLY");
        assert_eq!(gly.res_seq(), 2);
        assert_eq!(gly.alpha_carbon().map(Atom::index), Some(4));
        assert!(gly.find_atom_by_name("HA2").unwrap().is_hydrogen());
        assert_eq!(topology.atom(7).unwrap().element_name(), "O");
    }

    #[test]
    fn test_builder_misuse() {
        let mut builder = Topology::builder();
        builder.residue("ALA", 1).atom("CA", "C");
        assert_eq!(
            builder.build(),
            Err(TopologyError::ResidueWithoutChain("ALA".to_string()))
        );

        let mut builder = Topology::builder();
        builder.chain("A").atom("CA", "C");
        assert_eq!(
            builder.build(),
            Err(TopologyError::AtomWithoutResidue("CA".to_string()))
        );
    }
}
