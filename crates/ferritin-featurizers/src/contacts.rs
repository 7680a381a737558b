//! Ligand contact featurization.
//!
//! For every residue of the binding pocket the feature is the minimum Euclidean
//! distance between the residue's atoms and any ligand atom. No periodic wrapping is
//! applied; trajectories are assumed to be whole.
//!
//! The pocket is fixed at construction from a reference frame: a protein residue
//! belongs to it iff its minimum distance to the ligand is `<= cutoff`. Pocket order
//! follows residue order in the topology.
use crate::chains::{resolve_chains, ChainRoles};
use crate::describe::{FeatureDescriptor, FeatureKind};
use crate::error::{FeaturizerError, Result};
use crate::featurizer::{check_reference, Featurizer};
use bon::bon;
use clap::ValueEnum;
use ferritin_trajectory::{Chain, Frame, Residue, Topology};
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;
use std::sync::Arc;
use strum::{Display, EnumString};

/// Default distance cutoff, in the trajectory's native units.
pub const DEFAULT_CUTOFF: f64 = 0.8;

/// Which atoms of a residue take part in its distance to the ligand.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, ValueEnum, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ContactScheme {
    /// All atoms.
    #[default]
    Closest,
    /// Non-hydrogen atoms.
    ClosestHeavy,
    /// The alpha carbon only.
    Ca,
}

impl ContactScheme {
    fn residue_atoms(&self, residue: &Residue) -> Vec<usize> {
        match self {
            ContactScheme::Closest => residue.atom_indices().collect(),
            ContactScheme::ClosestHeavy => residue
                .atoms()
                .iter()
                .filter(|atom| !atom.is_hydrogen())
                .map(|atom| atom.index())
                .collect(),
            ContactScheme::Ca => residue.alpha_carbon().map(|atom| atom.index()).into_iter().collect(),
        }
    }

    /// Ligand atoms measured against. Only `ClosestHeavy` drops hydrogens.
    fn ligand_atoms(&self, topology: &Topology, ligand_chain: usize) -> Vec<usize> {
        let ligand = topology.select().chain(ligand_chain);
        match self {
            ContactScheme::ClosestHeavy => ligand.heavy().collect().into_indices(),
            ContactScheme::Closest | ContactScheme::Ca => ligand.collect().into_indices(),
        }
    }
}

/// How pocket residues are chosen from the protein chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BindingPocket {
    /// Residues within this distance of the ligand in the reference frame.
    Within(f64),
    /// Every measurable protein residue.
    All,
}

impl Default for BindingPocket {
    fn default() -> Self {
        BindingPocket::Within(DEFAULT_CUTOFF)
    }
}

pub(crate) fn check_cutoff(field: &'static str, cutoff: f64) -> Result<f64> {
    if cutoff.is_finite() && cutoff >= 0.0 {
        Ok(cutoff)
    } else {
        Err(FeaturizerError::invalid_selection(
            field,
            format!("cutoff must be a finite, non-negative distance, got {cutoff}"),
        ))
    }
}

/// Global residue indices of the binding pocket, in topology order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PocketResidueSet {
    residues: Vec<usize>,
}

impl PocketResidueSet {
    pub fn residues(&self) -> &[usize] {
        &self.residues
    }
    pub fn len(&self) -> usize {
        self.residues.len()
    }
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
    pub fn contains(&self, residue: usize) -> bool {
        self.residues.binary_search(&residue).is_ok()
    }
}

/// Minimum distance between any atom of `a` and any atom of `b`.
///
/// Infinite if either set is empty.
fn min_distance(coords: &[[f64; 3]], a: &[usize], b: &[usize]) -> f64 {
    a.iter()
        .cartesian_product(b)
        .map(|(&i, &j)| {
            let (p, q) = (coords[i], coords[j]);
            (p[0] - q[0]).powi(2) + (p[1] - q[1]).powi(2) + (p[2] - q[2]).powi(2)
        })
        .fold(f64::INFINITY, f64::min)
        .sqrt()
}

fn chain_of<'a>(
    topology: &'a Topology,
    field: &'static str,
    index: usize,
) -> Result<&'a Chain> {
    topology.chain(index).ok_or_else(|| {
        FeaturizerError::invalid_selection(field, format!("chain index {index} is out of range"))
    })
}

/// Protein residues that can be measured under `scheme`, with their atoms.
fn measurable_residues(
    topology: &Topology,
    protein_chain: usize,
    scheme: ContactScheme,
) -> Result<Vec<(usize, Vec<usize>)>> {
    let chain = chain_of(topology, "protein_chain", protein_chain)?;
    Ok(chain
        .residues()
        .iter()
        .filter_map(|residue| {
            let atoms = scheme.residue_atoms(residue);
            if atoms.is_empty() {
                warn!(
                    "skipping residue {}{} (index {}): no atoms under the `{}` scheme",
                    residue.name(),
                    residue.res_seq(),
                    residue.index(),
                    scheme
                );
                None
            } else {
                Some((residue.index(), atoms))
            }
        })
        .collect())
}

/// Select the binding pocket from a reference frame.
pub fn build_pocket(
    topology: &Topology,
    reference_frame: &Frame,
    protein_chain: usize,
    ligand_chain: usize,
    pocket: BindingPocket,
    scheme: ContactScheme,
) -> Result<PocketResidueSet> {
    ContactEngine::new(topology, reference_frame, protein_chain, ligand_chain, pocket, scheme)
        .map(|engine| engine.pocket)
}

/// Per-frame minimum distances between the ligand and the pocket residues.
#[derive(Clone, Debug)]
pub struct ContactEngine {
    n_atoms: usize,
    scheme: ContactScheme,
    ligand_atoms: Vec<usize>,
    pocket: PocketResidueSet,
    pocket_atoms: Vec<Vec<usize>>,
}

impl ContactEngine {
    pub fn new(
        topology: &Topology,
        reference_frame: &Frame,
        protein_chain: usize,
        ligand_chain: usize,
        pocket: BindingPocket,
        scheme: ContactScheme,
    ) -> Result<Self> {
        if protein_chain == ligand_chain {
            return Err(FeaturizerError::invalid_selection(
                "ligand_chain",
                format!("chain {ligand_chain} is already the protein chain"),
            ));
        }
        check_reference("reference_frame", topology, reference_frame, 0)?;
        chain_of(topology, "ligand_chain", ligand_chain)?;
        let ligand_atoms = scheme.ligand_atoms(topology, ligand_chain);
        if ligand_atoms.is_empty() {
            return Err(FeaturizerError::invalid_selection(
                "ligand_chain",
                format!("chain {ligand_chain} has no atoms under the `{scheme}` scheme"),
            ));
        }
        let candidates = measurable_residues(topology, protein_chain, scheme)?;
        let n_candidates = candidates.len();

        let coords = reference_frame.coordinates();
        let (residues, pocket_atoms): (Vec<usize>, Vec<Vec<usize>>) = candidates
            .into_iter()
            .filter(|(_, atoms)| match pocket {
                BindingPocket::All => true,
                BindingPocket::Within(cutoff) => {
                    min_distance(coords, atoms, &ligand_atoms) <= cutoff
                }
            })
            .unzip();

        debug!(
            "binding pocket: {} of {} protein residues ({:?}, scheme `{}`)",
            residues.len(),
            n_candidates,
            pocket,
            scheme
        );
        Ok(ContactEngine {
            n_atoms: topology.n_atoms(),
            scheme,
            ligand_atoms,
            pocket: PocketResidueSet { residues },
            pocket_atoms,
        })
    }

    pub fn pocket(&self) -> &PocketResidueSet {
        &self.pocket
    }

    pub fn scheme(&self) -> ContactScheme {
        self.scheme
    }

    /// One minimum distance per pocket residue, measured in `frame`.
    pub fn distances(&self, frame: &Frame, frame_index: usize) -> Result<Vec<f64>> {
        if frame.n_atoms() != self.n_atoms {
            return Err(FeaturizerError::TopologyMismatch {
                frame: frame_index,
                expected: self.n_atoms,
                found: frame.n_atoms(),
            });
        }
        let coords = frame.coordinates();
        Ok(self
            .pocket_atoms
            .iter()
            .map(|atoms| min_distance(coords, atoms, &self.ligand_atoms))
            .collect())
    }
}

/// Minimum ligand distance for each binding-pocket residue.
#[derive(Clone, Debug)]
pub struct LigandContactFeaturizer {
    topology: Arc<Topology>,
    roles: ChainRoles,
    engine: ContactEngine,
}

#[bon]
impl LigandContactFeaturizer {
    /// `reference_frame` fixes the chain roles (when not given) and the pocket.
    #[builder]
    pub fn new(
        topology: Arc<Topology>,
        reference_frame: Frame,
        protein_chain: Option<usize>,
        ligand_chain: Option<usize>,
        #[builder(default)] binding_pocket: BindingPocket,
        #[builder(default)] scheme: ContactScheme,
    ) -> Result<Self> {
        if let BindingPocket::Within(cutoff) = binding_pocket {
            check_cutoff("binding_pocket", cutoff)?;
        }
        let roles = resolve_chains(&topology, protein_chain, ligand_chain)?;
        let engine = ContactEngine::new(
            &topology,
            &reference_frame,
            roles.protein,
            roles.ligand,
            binding_pocket,
            scheme,
        )?;
        Ok(LigandContactFeaturizer {
            topology,
            roles,
            engine,
        })
    }
}

impl LigandContactFeaturizer {
    pub fn chain_roles(&self) -> ChainRoles {
        self.roles
    }
    pub fn pocket(&self) -> &PocketResidueSet {
        self.engine.pocket()
    }
    pub(crate) fn describe_as(&self, featurizer: &'static str, kind: FeatureKind) -> Vec<FeatureDescriptor> {
        let chain = &self.topology.chains()[self.roles.protein];
        chain
            .residues()
            .iter()
            .filter(|residue| self.pocket().contains(residue.index()))
            .enumerate()
            .map(|(i, residue)| {
                FeatureDescriptor::for_residue(featurizer, i, kind, chain, residue, self.engine.scheme())
            })
            .collect()
    }
}

impl Featurizer for LigandContactFeaturizer {
    type Output = f64;

    fn name(&self) -> &'static str {
        "LigandContactFeaturizer"
    }
    fn n_features(&self) -> usize {
        self.pocket().len()
    }
    fn featurize_frame(&self, frame: &Frame, frame_index: usize) -> Result<Vec<f64>> {
        self.engine.distances(frame, frame_index)
    }
    fn describe_features(&self) -> Vec<FeatureDescriptor> {
        self.describe_as(self.name(), FeatureKind::LigandContactDistance)
    }
}
