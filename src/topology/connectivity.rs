//! Per-shape connectivity descriptor tables.
//!
//! One immutable [`ShapeDescriptor`] exists per cell shape; every element of
//! that shape shares it. All tables are `const`, so shape-constant queries
//! (face layout, edge adjacency, orientation permutation) cost a table lookup
//! and never allocate. Face node lists are *local* indices into the element's
//! node array; the element resolves them to global node ids.
//!
//! Vertex and face numbering follows the VTK conventions used by common mesh
//! interchange formats: for the hexahedron the bottom face is `[0,1,2,3]` and
//! the top `[4,5,6,7]`; the prism stacks triangle `[3,4,5]` over `[0,1,2]`;
//! the pyramid puts apex `4` over base quad `[0,1,2,3]`.

use crate::topology::cell_type::CellType;

/// Upper bound on nodes per element (hexahedron).
pub const MAX_NODES: usize = 8;
/// Upper bound on faces per element (hexahedron).
pub const MAX_FACES: usize = 6;
/// Upper bound on nodes per face (quadrilateral face).
pub const MAX_FACE_NODES: usize = 4;

/// Compile-time-fixed connectivity metadata for one cell shape.
///
/// `face_nodes[f]` lists, in declared order, the local node positions that
/// compose local face `f`. `node_neighbors[n]` lists the local nodes joined
/// to node `n` by an edge. `orientation_swaps` is the shape's fixed node
/// permutation reversing the sign convention; applying it twice restores the
/// original order.
#[derive(Debug)]
pub struct ShapeDescriptor {
    pub cell: CellType,
    pub node_count: usize,
    pub face_count: usize,
    pub neighbor_element_count: usize,
    pub max_nodes_per_face: usize,
    pub vtk_tag: u8,
    pub face_nodes: &'static [&'static [usize]],
    pub node_neighbors: &'static [&'static [usize]],
    pub orientation_swaps: &'static [(usize, usize)],
}

/// The degenerate 1-D shape: its single face is the node pair itself, and
/// the orientation flip is an endpoint swap.
pub static LINE: ShapeDescriptor = ShapeDescriptor {
    cell: CellType::Line,
    node_count: 2,
    face_count: 1,
    neighbor_element_count: 1,
    max_nodes_per_face: 2,
    vtk_tag: 3,
    face_nodes: &[&[0, 1]],
    node_neighbors: &[&[1], &[0]],
    orientation_swaps: &[(0, 1)],
};

pub static TRIANGLE: ShapeDescriptor = ShapeDescriptor {
    cell: CellType::Triangle,
    node_count: 3,
    face_count: 3,
    neighbor_element_count: 3,
    max_nodes_per_face: 2,
    vtk_tag: 5,
    face_nodes: &[&[0, 1], &[1, 2], &[2, 0]],
    node_neighbors: &[&[1, 2], &[2, 0], &[0, 1]],
    orientation_swaps: &[(0, 2)],
};

pub static QUADRILATERAL: ShapeDescriptor = ShapeDescriptor {
    cell: CellType::Quadrilateral,
    node_count: 4,
    face_count: 4,
    neighbor_element_count: 4,
    max_nodes_per_face: 2,
    vtk_tag: 9,
    face_nodes: &[&[0, 1], &[1, 2], &[2, 3], &[3, 0]],
    node_neighbors: &[&[1, 3], &[2, 0], &[3, 1], &[0, 2]],
    orientation_swaps: &[(1, 3)],
};

pub static TETRAHEDRON: ShapeDescriptor = ShapeDescriptor {
    cell: CellType::Tetrahedron,
    node_count: 4,
    face_count: 4,
    neighbor_element_count: 4,
    max_nodes_per_face: 3,
    vtk_tag: 10,
    face_nodes: &[&[0, 2, 1], &[0, 1, 3], &[0, 3, 2], &[1, 2, 3]],
    node_neighbors: &[&[1, 2, 3], &[0, 2, 3], &[0, 1, 3], &[0, 1, 2]],
    orientation_swaps: &[(0, 1)],
};

pub static PYRAMID: ShapeDescriptor = ShapeDescriptor {
    cell: CellType::Pyramid,
    node_count: 5,
    face_count: 5,
    neighbor_element_count: 5,
    max_nodes_per_face: 4,
    vtk_tag: 14,
    face_nodes: &[&[0, 3, 2, 1], &[4, 3, 0], &[4, 0, 1], &[2, 4, 1], &[3, 4, 2]],
    node_neighbors: &[
        &[1, 3, 4],
        &[0, 2, 4],
        &[1, 3, 4],
        &[0, 2, 4],
        &[0, 1, 2, 3],
    ],
    orientation_swaps: &[(1, 3)],
};

pub static PRISM: ShapeDescriptor = ShapeDescriptor {
    cell: CellType::Prism,
    node_count: 6,
    face_count: 5,
    neighbor_element_count: 5,
    max_nodes_per_face: 4,
    vtk_tag: 13,
    face_nodes: &[
        &[3, 4, 1, 0],
        &[5, 2, 1, 4],
        &[2, 5, 3, 0],
        &[0, 1, 2],
        &[5, 4, 3],
    ],
    node_neighbors: &[
        &[1, 2, 3],
        &[0, 2, 4],
        &[0, 1, 5],
        &[0, 4, 5],
        &[1, 3, 5],
        &[2, 3, 4],
    ],
    orientation_swaps: &[(0, 1), (3, 4)],
};

pub static HEXAHEDRON: ShapeDescriptor = ShapeDescriptor {
    cell: CellType::Hexahedron,
    node_count: 8,
    face_count: 6,
    neighbor_element_count: 6,
    max_nodes_per_face: 4,
    vtk_tag: 12,
    face_nodes: &[
        &[0, 1, 5, 4],
        &[1, 2, 6, 5],
        &[2, 3, 7, 6],
        &[3, 0, 4, 7],
        &[0, 3, 2, 1],
        &[4, 5, 6, 7],
    ],
    node_neighbors: &[
        &[1, 3, 4],
        &[0, 2, 5],
        &[1, 3, 6],
        &[0, 2, 7],
        &[0, 5, 7],
        &[1, 4, 6],
        &[2, 5, 7],
        &[3, 4, 6],
    ],
    orientation_swaps: &[(1, 3), (5, 7)],
};

impl CellType {
    /// Returns the shared connectivity descriptor for this shape.
    pub const fn descriptor(self) -> &'static ShapeDescriptor {
        match self {
            CellType::Line => &LINE,
            CellType::Triangle => &TRIANGLE,
            CellType::Quadrilateral => &QUADRILATERAL,
            CellType::Tetrahedron => &TETRAHEDRON,
            CellType::Pyramid => &PYRAMID,
            CellType::Prism => &PRISM,
            CellType::Hexahedron => &HEXAHEDRON,
        }
    }
}
