use super::{first_frame, load_trajectory, reference_trajectory, write_features};
use crate::cli::TrajectoryArgs;
use anyhow::Context;
use ferritin_featurizers::{
    BinaryLigandContactFeaturizer, BindingPocket, ContactScheme, LigandContactFeaturizer,
};
use std::sync::Arc;

pub struct ContactsArgs {
    pub traj: TrajectoryArgs,
    pub cutoff: f64,
    pub pocket_cutoff: Option<f64>,
    pub all_residues: bool,
    pub scheme: ContactScheme,
    pub binary: bool,
}

pub fn execute(args: ContactsArgs) -> anyhow::Result<()> {
    let traj = load_trajectory(&args.traj.input)?;
    let reference = first_frame(&reference_trajectory(&traj, args.traj.reference.as_deref())?)?;
    let topology = Arc::clone(traj.topology());

    let binding_pocket = if args.all_residues {
        Some(BindingPocket::All)
    } else {
        args.pocket_cutoff.map(BindingPocket::Within)
    };

    if args.binary {
        let featurizer = BinaryLigandContactFeaturizer::builder()
            .topology(topology)
            .reference_frame(reference)
            .maybe_protein_chain(args.traj.protein_chain)
            .maybe_ligand_chain(args.traj.ligand_chain)
            .cutoff(args.cutoff)
            .maybe_binding_pocket(binding_pocket)
            .scheme(args.scheme)
            .build()
            .context("could not set up binary contacts")?;
        write_features(&featurizer, &traj, &args.traj.output)
    } else {
        let featurizer = LigandContactFeaturizer::builder()
            .topology(topology)
            .reference_frame(reference)
            .maybe_protein_chain(args.traj.protein_chain)
            .maybe_ligand_chain(args.traj.ligand_chain)
            .binding_pocket(binding_pocket.unwrap_or(BindingPocket::Within(args.cutoff)))
            .scheme(args.scheme)
            .build()
            .context("could not set up contact distances")?;
        write_features(&featurizer, &traj, &args.traj.output)
    }
}
