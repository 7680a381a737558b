//! Synthetic topologies and trajectories for unit tests.
use ferritin_trajectory::{Frame, Topology, Trajectory};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Chain "A" with `n_residues` one-atom ALA residues (each atom a `CA`) followed by
/// chain "B" with a single `LIG` residue of `n_ligand_atoms` carbons.
///
/// Protein atoms come first, so atom `i < n_residues` is residue `i`.
pub(crate) fn protein_ligand_topology(n_residues: usize, n_ligand_atoms: usize) -> Topology {
    let mut builder = Topology::builder();
    builder.chain("A");
    for i in 0..n_residues {
        builder.residue("ALA", i as i32 + 1).atom("CA", "C");
    }
    builder.chain("B").residue("LIG", 1);
    for i in 0..n_ligand_atoms {
        builder.atom(format!("C{}", i + 1), "C");
    }
    builder.build().unwrap()
}

/// `n_frames` frames of coordinates drawn uniformly from the unit cube.
pub(crate) fn random_trajectory(topology: Arc<Topology>, n_frames: usize, seed: u64) -> Trajectory {
    let mut rng = StdRng::seed_from_u64(seed);
    let frames = (0..n_frames)
        .map(|_| {
            Frame::new(
                (0..topology.n_atoms())
                    .map(|_| [rng.gen(), rng.gen(), rng.gen()])
                    .collect(),
            )
        })
        .collect();
    Trajectory::new(topology, frames)
}
