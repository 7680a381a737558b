//! # ferritin-trajectory
//!
//! Plain-data representation of molecular topologies and coordinate trajectories.
//!
//! __ferritin-trajectory__ provides:
//! * A [`Topology`] of chains, residues and atoms with contiguous global atom indices
//! * [`Frame`]s of 3-D coordinates and [`Trajectory`]s of frames sharing one topology
//! * Index-based [`Selection`]s and a fluent [`AtomSelector`] for picking atom subsets
//! * Conversion from [`pdbtbx::PDB`] where each model becomes one frame
//!
//! Topologies are immutable once built and are shared between trajectories via [`Arc`](std::sync::Arc).
//!
mod conversions;
mod frame;
mod selection;
mod topology;

pub use self::frame::{Frame, Trajectory};
pub use self::selection::{AtomSelector, Selection};
pub use self::topology::{Atom, Chain, Residue, Topology, TopologyBuilder, TopologyError};
