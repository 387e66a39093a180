//! # mesh-primal
//!
//! mesh-primal is the element-topology kernel of an unstructured-mesh PDE
//! solver: it turns a flat list of cells (VTK shape tag plus global node
//! indices) into a navigable mesh graph — per-element face definitions,
//! element-to-element adjacency across shared faces, boundary-face
//! classification, and orientation-consistent node ordering. Flux assembly,
//! gradient reconstruction, partitioning, and boundary-condition application
//! all consume this graph.
//!
//! ## Features
//! - Compile-time connectivity descriptor tables for line, triangle,
//!   quadrilateral, tetrahedron, pyramid, prism, and hexahedron cells
//! - Dense element arena with inline node/neighbor storage (no per-element
//!   heap allocation)
//! - One-pass face-matching adjacency builder with non-manifold detection
//!   and deterministic boundary classification
//! - Orientation pass enforcing the positive-measure convention, parallel
//!   under the optional `rayon` feature
//!
//! ## Determinism
//!
//! Adjacency and boundary classification are keyed by face node-sets, not
//! scan order, so rebuilding from the same element set — in any input order —
//! reproduces the identical topology.
//!
//! ## Usage
//! Add `mesh-primal` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mesh-primal = "0.3"
//! # Optional: features = ["rayon"]
//! ```
//!
//! ## Errors
//!
//! Every structural defect (wrong node count, duplicate nodes, non-manifold
//! face, degenerate measure) aborts the build with a
//! [`MeshTopologyError`](mesh_error::MeshTopologyError); no partial topology
//! is ever returned, since a malformed mesh cannot be partially solved.

pub mod geometry;
pub mod mesh_error;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::geometry::coordinates::Coordinates;
    pub use crate::geometry::measure::signed_measure;
    pub use crate::mesh_error::MeshTopologyError;
    pub use crate::topology::adjacency::{Adjacency, BoundaryFace, build_adjacency};
    pub use crate::topology::arena::ElementArena;
    pub use crate::topology::cell_type::CellType;
    pub use crate::topology::connectivity::ShapeDescriptor;
    pub use crate::topology::element::{Element, FaceNodes, Neighbor};
    pub use crate::topology::ids::{ElementId, NodeId};
    pub use crate::topology::mesh::MeshTopology;
    pub use crate::topology::orientation::{OrientationReport, orient_elements};
}
