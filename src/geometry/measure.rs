//! Signed geometric measures per cell shape.
//!
//! The adopted convention is positive-measure everywhere: counter-clockwise
//! node order in the XY plane for 2-D cells, positive volume for 3-D cells.
//! Volumes of non-simplex cells are evaluated by fixed tetrahedral
//! decompositions of the VTK-ordered vertex lists, so a consistently inverted
//! cell yields a negative total. Line elements carry no signed measure.
//!
//! Vertex slices are ordered like the element's node array and embedded in
//! 3-D (`z = 0` for planar meshes).

use crate::topology::cell_type::CellType;

/// Signed measure of one cell: area for 2-D shapes, volume for 3-D shapes.
///
/// Returns `None` for shapes without an orientation convention (lines).
/// The caller guarantees `vertices.len()` matches the shape's node count.
pub fn signed_measure(cell: CellType, vertices: &[[f64; 3]]) -> Option<f64> {
    debug_assert_eq!(vertices.len(), cell.descriptor().node_count);
    match cell {
        CellType::Line => None,
        CellType::Triangle => Some(signed_area_xy(vertices[0], vertices[1], vertices[2])),
        CellType::Quadrilateral => Some(
            signed_area_xy(vertices[0], vertices[1], vertices[2])
                + signed_area_xy(vertices[0], vertices[2], vertices[3]),
        ),
        CellType::Tetrahedron => Some(signed_volume(
            vertices[0],
            vertices[1],
            vertices[2],
            vertices[3],
        )),
        CellType::Pyramid => Some(pyramid_signed_volume(vertices)),
        CellType::Prism => Some(prism_signed_volume(vertices)),
        CellType::Hexahedron => Some(hex_signed_volume(vertices)),
    }
}

fn signed_area_xy(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> f64 {
    0.5 * ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]))
}

fn signed_volume(a: [f64; 3], b: [f64; 3], c: [f64; 3], d: [f64; 3]) -> f64 {
    let ab = sub(b, a);
    let ac = sub(c, a);
    let ad = sub(d, a);
    dot(ab, cross(ac, ad)) / 6.0
}

fn pyramid_signed_volume(vertices: &[[f64; 3]]) -> f64 {
    signed_volume(vertices[0], vertices[1], vertices[2], vertices[4])
        + signed_volume(vertices[0], vertices[2], vertices[3], vertices[4])
}

fn prism_signed_volume(vertices: &[[f64; 3]]) -> f64 {
    signed_volume(vertices[0], vertices[1], vertices[2], vertices[3])
        + signed_volume(vertices[1], vertices[4], vertices[2], vertices[3])
        + signed_volume(vertices[2], vertices[4], vertices[5], vertices[3])
}

fn hex_signed_volume(vertices: &[[f64; 3]]) -> f64 {
    signed_volume(vertices[0], vertices[1], vertices[3], vertices[4])
        + signed_volume(vertices[1], vertices[2], vertices[3], vertices[6])
        + signed_volume(vertices[1], vertices[3], vertices[4], vertices[6])
        + signed_volume(vertices[1], vertices[4], vertices[5], vertices[6])
        + signed_volume(vertices[3], vertices[4], vertices[6], vertices[7])
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
