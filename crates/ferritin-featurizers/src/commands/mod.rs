pub mod contacts;
pub mod rmsd;

use anyhow::{anyhow, Context};
use ferritin_featurizers::{FeatureDescriptor, Featurizer};
use ferritin_trajectory::{Frame, Trajectory};
use itertools::Itertools;
use log::{info, warn};
use pdbtbx::{ReadOptions, StrictnessLevel};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;

/// The JSON document written by every subcommand.
#[derive(Serialize)]
struct FeatureOutput<T> {
    features: Vec<FeatureDescriptor>,
    matrix: Vec<Vec<T>>,
}

/// Read a multi-model structure file, one frame per model.
///
/// Parsed loosely: header and metadata complaints are logged, only unreadable
/// coordinates abort.
pub fn load_trajectory(path: &str) -> anyhow::Result<Trajectory> {
    let (pdb, warnings) = ReadOptions::default()
        .set_level(StrictnessLevel::Loose)
        .read(path)
        .map_err(|errors| {
            anyhow!(
                "could not read {path}: {}",
                errors.iter().map(ToString::to_string).join("; ")
            )
        })?;
    for warning in &warnings {
        warn!("{path}: {warning}");
    }
    let traj = Trajectory::try_from(&pdb).with_context(|| format!("invalid topology in {path}"))?;
    info!(
        "{path}: {} frames, {} atoms",
        traj.n_frames(),
        traj.topology().n_atoms()
    );
    Ok(traj)
}

/// Reference frames from `--reference`, or the first input frame.
pub fn reference_trajectory(
    input: &Trajectory,
    reference: Option<&str>,
) -> anyhow::Result<Trajectory> {
    let traj = match reference {
        Some(path) => load_trajectory(path)?,
        None => input.slice(0..1),
    };
    anyhow::ensure!(!traj.is_empty(), "reference has no frames");
    Ok(traj)
}

pub fn first_frame(traj: &Trajectory) -> anyhow::Result<Frame> {
    traj.frame(0)
        .cloned()
        .ok_or_else(|| anyhow!("trajectory has no frames"))
}

/// Featurize `traj` and write descriptors plus matrix as JSON to `output`.
pub fn write_features<F>(featurizer: &F, traj: &Trajectory, output: &str) -> anyhow::Result<()>
where
    F: Featurizer,
    F::Output: Serialize,
{
    let matrix = featurizer
        .partial_transform(traj)
        .with_context(|| format!("{} failed", featurizer.name()))?;
    let document = FeatureOutput {
        features: featurizer.describe_features(),
        matrix: matrix.outer_iter().map(|row| row.to_vec()).collect(),
    };
    let file = File::create(output).with_context(|| format!("could not create {output}"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &document)?;
    info!(
        "wrote {} x {} features to {output}",
        matrix.nrows(),
        matrix.ncols()
    );
    Ok(())
}
