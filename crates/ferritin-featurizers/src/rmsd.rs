//! RMSD to one or more reference frames.
//!
//! Each frame is superposed onto a reference using one atom set, and the RMSD is
//! measured on a second, independent set. The usual case aligns on the protein
//! and measures the ligand, which tracks ligand motion inside the pocket.
use crate::chains::{resolve_chains, ChainRoles};
use crate::describe::{FeatureDescriptor, FeatureKind};
use crate::error::{FeaturizerError, Result};
use crate::featurizer::{check_frame, check_reference, Featurizer};
use crate::selection::{AtomIndexSet, AtomSelection};
use crate::superpose::{align, rmsd};
use bon::bon;
use ferritin_trajectory::{Frame, Topology, Trajectory};
use log::debug;
use std::sync::Arc;

/// Align-set and calculate-set coordinates of one reference frame.
#[derive(Clone, Debug)]
struct ReferenceCoords {
    align: Vec<[f64; 3]>,
    calculate: Vec<[f64; 3]>,
}

/// Check `frame` against the topology, then gather the coordinates of `set`.
fn gather_checked(
    topology: &Topology,
    set: &AtomIndexSet,
    frame: &Frame,
    frame_index: usize,
) -> Result<Vec<[f64; 3]>> {
    check_frame(topology, frame, frame_index)?;
    set.gather(frame).ok_or(FeaturizerError::TopologyMismatch {
        frame: frame_index,
        expected: topology.n_atoms(),
        found: frame.n_atoms(),
    })
}

#[derive(Clone, Debug)]
pub struct LigandRmsdFeaturizer {
    topology: Arc<Topology>,
    roles: Option<ChainRoles>,
    align_set: AtomIndexSet,
    calculate_set: AtomIndexSet,
    references: Vec<ReferenceCoords>,
}

#[bon]
impl LigandRmsdFeaturizer {
    /// Resolve and validate both atom sets and cache the reference coordinates.
    ///
    /// Chain roles are only resolved when `align_by` or `calculate_for` refers to
    /// the protein or the ligand. With `reference_traj` every one of its frames is a
    /// reference, in order; otherwise `reference_frame` is the only one.
    #[builder]
    pub fn new(
        topology: Arc<Topology>,
        reference_frame: Frame,
        protein_chain: Option<usize>,
        ligand_chain: Option<usize>,
        #[builder(default)] align_by: AtomSelection,
        #[builder(default = AtomSelection::Ligand)] calculate_for: AtomSelection,
        reference_traj: Option<Trajectory>,
    ) -> Result<Self> {
        let roles = if align_by.needs_chain_roles() || calculate_for.needs_chain_roles() {
            Some(resolve_chains(&topology, protein_chain, ligand_chain)?)
        } else {
            None
        };
        let align_set = align_by.resolve(&topology, roles, "align_by")?;
        let calculate_set = calculate_for.resolve(&topology, roles, "calculate_for")?;
        check_reference("reference_frame", &topology, &reference_frame, 0)?;

        let (field, reference_frames) = match &reference_traj {
            Some(traj) if traj.is_empty() => {
                return Err(FeaturizerError::invalid_selection(
                    "reference_traj",
                    "reference trajectory has no frames",
                ))
            }
            Some(traj) => ("reference_traj", traj.frames()),
            None => ("reference_frame", std::slice::from_ref(&reference_frame)),
        };
        let references = reference_frames
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                check_reference(field, &topology, frame, i)?;
                Ok(ReferenceCoords {
                    align: gather_checked(&topology, &align_set, frame, i)?,
                    calculate: gather_checked(&topology, &calculate_set, frame, i)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "rmsd: {} align atoms, {} calculate atoms, {} references",
            align_set.len(),
            calculate_set.len(),
            references.len()
        );
        Ok(LigandRmsdFeaturizer {
            topology,
            roles,
            align_set,
            calculate_set,
            references,
        })
    }
}

impl LigandRmsdFeaturizer {
    /// Resolved chain roles, if either selection needed them.
    pub fn chain_roles(&self) -> Option<ChainRoles> {
        self.roles
    }
    pub fn align_set(&self) -> &AtomIndexSet {
        &self.align_set
    }
    pub fn calculate_set(&self) -> &AtomIndexSet {
        &self.calculate_set
    }
    pub fn n_references(&self) -> usize {
        self.references.len()
    }
}

impl Featurizer for LigandRmsdFeaturizer {
    type Output = f64;

    fn name(&self) -> &'static str {
        "LigandRmsdFeaturizer"
    }
    fn n_features(&self) -> usize {
        self.references.len()
    }
    fn featurize_frame(&self, frame: &Frame, frame_index: usize) -> Result<Vec<f64>> {
        let mobile_align = gather_checked(&self.topology, &self.align_set, frame, frame_index)?;
        let mobile_calculate =
            gather_checked(&self.topology, &self.calculate_set, frame, frame_index)?;

        self.references
            .iter()
            .map(|reference| {
                let transform = align(&mobile_align, &reference.align)?;
                rmsd(&transform.apply(&mobile_calculate), &reference.calculate)
            })
            .collect()
    }
    fn describe_features(&self) -> Vec<FeatureDescriptor> {
        (0..self.references.len())
            .map(|r| FeatureDescriptor::for_reference(self.name(), r, FeatureKind::LigandRmsd, r))
            .collect()
    }
}
