//! ferritin-featurizers
//!
//! - protein-ligand contact distances and binary contacts against a binding pocket.
//! - ligand RMSD with independent alignment and calculation atom sets.
//! - CLI to featurize multi-model PDB/mmCIF trajectories into JSON.
//!
//! ```
//! use ferritin_featurizers::{BindingPocket, Featurizer, LigandContactFeaturizer};
//! use ferritin_trajectory::{Frame, Topology, Trajectory};
//! use std::sync::Arc;
//!
//! let mut builder = Topology::builder();
//! builder
//!     .chain("A")
//!     .residue("ALA", 1)
//!     .atom("CA", "C")
//!     .residue("GLY", 2)
//!     .atom("CA", "C")
//!     .chain("B")
//!     .residue("LIG", 1)
//!     .atom("C1", "C");
//! let topology = Arc::new(builder.build().unwrap());
//! let frame = Frame::new(vec![[0.0, 0.0, 0.0], [9.0, 0.0, 0.0], [0.5, 0.0, 0.0]]);
//!
//! let featurizer = LigandContactFeaturizer::builder()
//!     .topology(topology.clone())
//!     .reference_frame(frame.clone())
//!     .binding_pocket(BindingPocket::Within(1.0))
//!     .build()
//!     .unwrap();
//! let traj = Trajectory::new(topology, vec![frame]);
//! let features = featurizer.partial_transform(&traj).unwrap();
//! assert_eq!(features.dim(), (1, 1));
//! ```
mod binary;
mod chains;
mod contacts;
mod describe;
mod error;
mod featurizer;
mod rmsd;
mod selection;
mod superpose;
#[cfg(test)]
mod test_utilities;
mod utils;

pub use binary::{binarize, BinaryLigandContactFeaturizer};
pub use chains::{resolve_chains, ChainRoles, MAX_LIGAND_ATOMS};
pub use contacts::{
    build_pocket, BindingPocket, ContactEngine, ContactScheme, LigandContactFeaturizer,
    PocketResidueSet, DEFAULT_CUTOFF,
};
pub use describe::{FeatureDescriptor, FeatureKind};
pub use error::{FeaturizerError, Result};
pub use featurizer::Featurizer;
pub use rmsd::LigandRmsdFeaturizer;
pub use selection::{AtomIndexSet, AtomSelection};
pub use superpose::{align, rmsd, superposed_rmsd, RigidTransform};
