//! MeshTopologyError: unified error type for mesh-primal public APIs
//!
//! Every failure in the topology kernel is unrecoverable for the current
//! build: the caller must fix the input mesh and rebuild. Nothing is
//! logged-and-continued, since a partially built topology cannot be handed
//! to a solver.

use crate::topology::cell_type::CellType;
use crate::topology::element::Neighbor;
use crate::topology::ids::{ElementId, NodeId};
use thiserror::Error;

/// Unified error type for mesh-primal operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshTopologyError {
    /// An input row carried a cell-type tag outside the supported VTK set.
    #[error("unknown cell-type tag {tag} at input position {position}")]
    UnknownCellTag { position: usize, tag: u8 },
    /// An input row's node list does not match its declared shape.
    #[error(
        "node count mismatch at input position {position}: {cell:?} expects {expected} nodes, got {found}"
    )]
    NodeCountMismatch {
        position: usize,
        cell: CellType,
        expected: usize,
        found: usize,
    },
    /// An input row lists the same global node more than once.
    #[error("duplicate node {node} at input position {position}")]
    DuplicateNode { position: usize, node: NodeId },
    /// Local node access past the shape's node count.
    #[error("node index {index} out of range for element {element} ({count} nodes)")]
    NodeIndexOutOfRange {
        element: ElementId,
        index: usize,
        count: usize,
    },
    /// Local face access past the shape's face count.
    #[error("face index {face} out of range for element {element} ({count} faces)")]
    FaceIndexOutOfRange {
        element: ElementId,
        face: usize,
        count: usize,
    },
    /// A neighbor slot was assigned twice with different values; this is an
    /// adjacency-builder bug, not a mesh defect.
    #[error(
        "neighbor already assigned for element {element} face {face}: slot holds {existing:?}, refused {requested:?}"
    )]
    NeighborReassigned {
        element: ElementId,
        face: usize,
        existing: Neighbor,
        requested: Neighbor,
    },
    /// A geometric face is shared by three or more elements; the mesh is
    /// non-manifold and cannot be solved.
    #[error("non-manifold face {nodes:?} shared by elements {elements:?}")]
    NonManifoldFace {
        nodes: Vec<NodeId>,
        elements: Vec<ElementId>,
    },
    /// Signed measure is zero or non-finite; the element is degenerate.
    #[error("degenerate element {element}: signed measure {measure}")]
    DegenerateElement { element: ElementId, measure: f64 },
    /// An element id outside the arena's dense range.
    #[error("invalid element id {element} (arena holds {count} elements)")]
    InvalidElementId { element: ElementId, count: usize },
    /// The orientation pass needs a coordinate for a node the store lacks.
    #[error("missing coordinates for node {node}")]
    MissingCoordinates { node: NodeId },
    /// Coordinate stores only support planar (2) and volumetric (3) dimensions.
    #[error("unsupported coordinate dimension {dim} (expected 2 or 3)")]
    UnsupportedDimension { dim: usize },
    /// A coordinate slice does not match the store's declared dimension.
    #[error("coordinate slice for node {node} has {found} components, store expects {expected}")]
    CoordinateLengthMismatch {
        node: NodeId,
        expected: usize,
        found: usize,
    },
}
