//! Geometric collaborators of the topology kernel: node coordinates and
//! signed measures. Only the orientation pass consumes these.

pub mod coordinates;
pub mod measure;

pub use coordinates::Coordinates;
pub use measure::signed_measure;
