//! Cell type metadata for mesh elements.

use serde::{Deserialize, Serialize};

/// Supported cell shapes for primal-grid elements.
///
/// The set is closed: every shape the kernel can ingest has a variant here,
/// and all shape-specific behavior (face layout, orientation permutation) is
/// looked up from its [`ShapeDescriptor`](crate::topology::connectivity::ShapeDescriptor).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CellType {
    /// 1D segment/edge.
    Line,
    /// 2D simplex.
    Triangle,
    /// 2D tensor-product cell.
    Quadrilateral,
    /// 3D simplex.
    Tetrahedron,
    /// 3D quad-base cell with apex.
    Pyramid,
    /// 3D wedge.
    Prism,
    /// 3D tensor-product cell.
    Hexahedron,
}

impl CellType {
    /// All supported shapes, in ascending dimension order.
    pub const ALL: [CellType; 7] = [
        CellType::Line,
        CellType::Triangle,
        CellType::Quadrilateral,
        CellType::Tetrahedron,
        CellType::Pyramid,
        CellType::Prism,
        CellType::Hexahedron,
    ];

    /// Returns the topological dimension of the cell.
    pub const fn dimension(self) -> u8 {
        match self {
            CellType::Line => 1,
            CellType::Triangle | CellType::Quadrilateral => 2,
            CellType::Tetrahedron | CellType::Pyramid | CellType::Prism | CellType::Hexahedron => 3,
        }
    }

    /// Returns the VTK cell-type code used by common mesh interchange formats.
    pub const fn vtk_tag(self) -> u8 {
        match self {
            CellType::Line => 3,
            CellType::Triangle => 5,
            CellType::Quadrilateral => 9,
            CellType::Tetrahedron => 10,
            CellType::Hexahedron => 12,
            CellType::Prism => 13,
            CellType::Pyramid => 14,
        }
    }

    /// Maps a VTK cell-type code back to a shape, if supported.
    pub const fn from_vtk_tag(tag: u8) -> Option<CellType> {
        match tag {
            3 => Some(CellType::Line),
            5 => Some(CellType::Triangle),
            9 => Some(CellType::Quadrilateral),
            10 => Some(CellType::Tetrahedron),
            12 => Some(CellType::Hexahedron),
            13 => Some(CellType::Prism),
            14 => Some(CellType::Pyramid),
            _ => None,
        }
    }

    /// True for shapes with a signed area/volume; line elements are
    /// connectivity duals and carry no orientation convention.
    pub const fn has_signed_measure(self) -> bool {
        !matches!(self, CellType::Line)
    }
}
