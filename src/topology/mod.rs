//! Mesh topology: shapes, elements, adjacency, and orientation.

pub mod adjacency;
pub mod arena;
pub mod cell_type;
pub mod connectivity;
pub mod element;
pub mod ids;
pub mod mesh;
pub mod orientation;

pub use adjacency::{Adjacency, BoundaryFace, build_adjacency};
pub use arena::ElementArena;
pub use cell_type::CellType;
pub use connectivity::ShapeDescriptor;
pub use element::{Element, FaceNodes, Neighbor};
pub use ids::{ElementId, NodeId};
pub use mesh::MeshTopology;
pub use orientation::{OrientationReport, orient_elements};
