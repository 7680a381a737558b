//! The common featurizer surface.
//!
//! A featurizer turns each frame of a trajectory into a fixed-length row. Rows are
//! assembled into a `frames x features` [`Array2`], one per input trajectory.
use crate::describe::FeatureDescriptor;
use crate::error::{FeaturizerError, Result};
use crate::utils::parallel::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use ferritin_trajectory::{Frame, Topology, Trajectory};
use log::debug;
use ndarray::Array2;

/// Fail with [`FeaturizerError::TopologyMismatch`] unless the frame has one coordinate
/// per topology atom.
pub(crate) fn check_frame(topology: &Topology, frame: &Frame, frame_index: usize) -> Result<()> {
    if frame.n_atoms() != topology.n_atoms() {
        return Err(FeaturizerError::TopologyMismatch {
            frame: frame_index,
            expected: topology.n_atoms(),
            found: frame.n_atoms(),
        });
    }
    Ok(())
}

/// Validate a configured reference frame, naming the builder field it came from.
pub(crate) fn check_reference(
    field: &'static str,
    topology: &Topology,
    frame: &Frame,
    frame_index: usize,
) -> Result<()> {
    if frame.n_atoms() != topology.n_atoms() {
        return Err(FeaturizerError::invalid_selection(
            field,
            format!(
                "reference frame {frame_index} has {} atoms but the topology has {}",
                frame.n_atoms(),
                topology.n_atoms()
            ),
        ));
    }
    Ok(())
}

pub trait Featurizer: Sync {
    /// Element type of the feature matrix.
    type Output: Copy + Send + Sync;

    fn name(&self) -> &'static str;

    /// Number of columns, fixed at construction.
    fn n_features(&self) -> usize;

    /// Features of a single frame. `frame_index` is only used for error reporting.
    fn featurize_frame(&self, frame: &Frame, frame_index: usize) -> Result<Vec<Self::Output>>;

    /// One descriptor per output column, in column order.
    fn describe_features(&self) -> Vec<FeatureDescriptor>;

    /// Lazily featurize a trajectory one frame at a time, in frame order.
    fn iter_frames<'a>(
        &'a self,
        traj: &'a Trajectory,
    ) -> impl Iterator<Item = Result<Vec<Self::Output>>> + 'a {
        traj.frames()
            .iter()
            .enumerate()
            .map(move |(i, frame)| self.featurize_frame(frame, i))
    }

    /// Featurize every frame of one trajectory.
    ///
    /// The first failing frame aborts the call; no partial matrix is returned.
    fn partial_transform(&self, traj: &Trajectory) -> Result<Array2<Self::Output>> {
        let rows: Vec<Vec<Self::Output>> = traj
            .frames()
            .par_iter()
            .enumerate()
            .map(|(i, frame)| self.featurize_frame(frame, i))
            .collect::<Result<Vec<_>>>()?;

        let n_frames = rows.len();
        let flat: Vec<Self::Output> = rows.into_iter().flatten().collect();
        let features = Array2::from_shape_vec((n_frames, self.n_features()), flat)?;
        debug!(
            "{}: featurized {} frames into {} features",
            self.name(),
            n_frames,
            self.n_features()
        );
        Ok(features)
    }

    /// Featurize each trajectory; one matrix per trajectory, in input order.
    fn transform(&self, trajs: &[Trajectory]) -> Result<Vec<Array2<Self::Output>>> {
        trajs
            .iter()
            .map(|traj| self.partial_transform(traj))
            .collect()
    }
}
