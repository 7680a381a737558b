use super::{first_frame, load_trajectory, reference_trajectory, write_features};
use crate::cli::TrajectoryArgs;
use anyhow::Context;
use ferritin_featurizers::{AtomSelection, LigandRmsdFeaturizer};
use std::sync::Arc;

pub struct RmsdArgs {
    pub traj: TrajectoryArgs,
    pub align_by: AtomSelection,
    pub calculate_for: AtomSelection,
}

/// Every frame of the reference file is one reference, one output column each.
pub fn execute(args: RmsdArgs) -> anyhow::Result<()> {
    let traj = load_trajectory(&args.traj.input)?;
    let references = reference_trajectory(&traj, args.traj.reference.as_deref())?;

    let featurizer = LigandRmsdFeaturizer::builder()
        .topology(Arc::clone(traj.topology()))
        .reference_frame(first_frame(&references)?)
        .reference_traj(references)
        .maybe_protein_chain(args.traj.protein_chain)
        .maybe_ligand_chain(args.traj.ligand_chain)
        .align_by(args.align_by)
        .calculate_for(args.calculate_for)
        .build()
        .context("could not set up ligand RMSD")?;
    write_features(&featurizer, &traj, &args.traj.output)
}
