use crate::frame::{Frame, Trajectory};
use crate::topology::{Topology, TopologyError};
use pdbtbx::{Model, PDB};
use std::sync::Arc;

// the PDB API requires us to iterate:
// Model --> Chain --> Residue --> Atom if we want data from all.
// Atoms are visited in the same order for the topology and for each frame,
// so index `i` in a frame is atom `i` of the topology.
fn topology_from_model(model: &Model) -> Result<Topology, TopologyError> {
    let mut builder = Topology::builder();
    for chain in model.chains() {
        builder.chain(chain.id());
        for residue in chain.residues() {
            let (res_number, _insertion_code) = residue.id();
            builder.residue(residue.name().unwrap_or_default(), res_number as i32);
            for atom in residue.atoms() {
                let element = atom
                    .element()
                    .map(|element| element.symbol().to_string())
                    .unwrap_or_default();
                builder.atom(atom.name(), element);
            }
        }
    }
    builder.build()
}

fn frame_from_model(model: &Model) -> Frame {
    let coords = model
        .chains()
        .flat_map(|chain| chain.residues())
        .flat_map(|residue| residue.atoms())
        .map(|atom| {
            let (x, y, z) = atom.pos();
            [x, y, z]
        })
        .collect();
    Frame::new(coords)
}

/// Topology of the first model. An empty PDB gives an empty topology.
impl TryFrom<&PDB> for Topology {
    type Error = TopologyError;

    fn try_from(pdb_data: &PDB) -> Result<Self, Self::Error> {
        match pdb_data.models().next() {
            Some(model) => topology_from_model(model),
            None => Topology::builder().build(),
        }
    }
}

/// Every model becomes one frame; the topology is taken from the first model.
impl TryFrom<&PDB> for Trajectory {
    type Error = TopologyError;

    fn try_from(pdb_data: &PDB) -> Result<Self, Self::Error> {
        let topology = Arc::new(Topology::try_from(pdb_data)?);
        let frames = pdb_data.models().map(frame_from_model).collect();
        Ok(Trajectory::new(topology, frames))
    }
}
