//! Frames and Trajectories
//!
//! A [`Frame`] is a flat array of 3-D coordinates, one per atom index of the associated
//! [`Topology`]. A [`Trajectory`] is an ordered sequence of frames that share one topology.
//!
//! Frames are not validated against the topology on construction: consumers check the
//! atom count of each frame when they use it so that the offending frame index can be
//! reported.
use crate::topology::Topology;
use std::ops::Range;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    coords: Vec<[f64; 3]>,
}

impl Frame {
    pub fn new(coords: Vec<[f64; 3]>) -> Self {
        Frame { coords }
    }
    pub fn coordinates(&self) -> &[[f64; 3]] {
        &self.coords
    }
    pub fn coord(&self, idx: usize) -> Option<&[f64; 3]> {
        self.coords.get(idx)
    }
    pub fn n_atoms(&self) -> usize {
        self.coords.len()
    }
    /// Gather the coordinates for `indices`, in the order given.
    ///
    /// Returns `None` if any index is out of range.
    pub fn gather(&self, indices: &[usize]) -> Option<Vec<[f64; 3]>> {
        indices.iter().map(|&i| self.coords.get(i).copied()).collect()
    }
}

impl From<Vec<[f64; 3]>> for Frame {
    fn from(coords: Vec<[f64; 3]>) -> Self {
        Frame::new(coords)
    }
}

#[derive(Clone, Debug)]
pub struct Trajectory {
    topology: Arc<Topology>,
    frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new(topology: Arc<Topology>, frames: Vec<Frame>) -> Self {
        Trajectory { topology, frames }
    }
    pub fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
    pub fn frame(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx)
    }
    pub fn n_frames(&self) -> usize {
        self.frames.len()
    }
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
    /// A new trajectory holding the frames in `range`, sharing this topology.
    pub fn slice(&self, range: Range<usize>) -> Trajectory {
        let end = range.end.min(self.frames.len());
        let start = range.start.min(end);
        Trajectory::new(self.topology.clone(), self.frames[start..end].to_vec())
    }
    /// Split into consecutive trajectories of at most `chunk_size` frames.
    ///
    /// A `chunk_size` of zero is treated as one.
    pub fn chunks(&self, chunk_size: usize) -> impl Iterator<Item = Trajectory> + '_ {
        self.frames
            .chunks(chunk_size.max(1))
            .map(|frames| Trajectory::new(self.topology.clone(), frames.to_vec()))
    }
}
