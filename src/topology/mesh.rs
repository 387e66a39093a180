//! Frozen mesh topology: the one-call build entry point.
//!
//! [`MeshTopology::build`] runs the full pipeline — ingest elements, match
//! faces, classify the boundary, enforce orientation — and returns an
//! immutable topology safe for unsynchronized concurrent reads by the solver
//! and partitioner. Any structural error aborts the build; no partial
//! topology escapes.

use crate::geometry::coordinates::Coordinates;
use crate::mesh_error::MeshTopologyError;
use crate::topology::adjacency::{Adjacency, BoundaryFace, build_adjacency};
use crate::topology::arena::ElementArena;
use crate::topology::element::{Element, Neighbor};
use crate::topology::ids::{ElementId, NodeId};
use crate::topology::orientation::{OrientationReport, orient_elements};

/// A fully built, read-only mesh topology.
#[derive(Debug)]
pub struct MeshTopology {
    arena: ElementArena,
    adjacency: Adjacency,
    orientation: OrientationReport,
}

impl MeshTopology {
    /// Builds the topology from `(vtk_tag, nodes)` rows and node
    /// coordinates.
    ///
    /// Coordinates drive the orientation pass; pass `None` for
    /// connectivity-only meshes (no orientation is enforced then).
    pub fn build<I, N>(
        rows: I,
        coordinates: Option<&Coordinates>,
    ) -> Result<Self, MeshTopologyError>
    where
        I: IntoIterator<Item = (u8, N)>,
        N: AsRef<[NodeId]>,
    {
        Self::from_arena(ElementArena::from_cells(rows)?, coordinates)
    }

    /// Builds from an already-populated arena.
    pub fn from_arena(
        mut arena: ElementArena,
        coordinates: Option<&Coordinates>,
    ) -> Result<Self, MeshTopologyError> {
        // Adjacency first, orientation second; flips preserve face
        // node-sets, so the neighbor links stay valid.
        let adjacency = build_adjacency(&mut arena)?;
        let orientation = match coordinates {
            Some(coords) => orient_elements(&mut arena, coords)?,
            None => OrientationReport::default(),
        };
        Ok(MeshTopology {
            arena,
            adjacency,
            orientation,
        })
    }

    /// Number of elements.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.arena.len()
    }

    /// The element with dense id `id`.
    pub fn element(&self, id: ElementId) -> Result<&Element, MeshTopologyError> {
        self.arena.get(id)
    }

    /// Iterates elements in dense id order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.arena.iter()
    }

    /// The neighbor across `element`'s local face `face`.
    pub fn neighbor(
        &self,
        element: ElementId,
        face: usize,
    ) -> Result<Neighbor, MeshTopologyError> {
        self.adjacency.neighbor(element, face)
    }

    /// The frozen adjacency table.
    #[inline]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Boundary faces in `(element, face)` order.
    #[inline]
    pub fn boundary_faces(&self) -> &[BoundaryFace] {
        self.adjacency.boundary_faces()
    }

    /// Summary of the orientation pass that ran during the build.
    #[inline]
    pub fn orientation_report(&self) -> OrientationReport {
        self.orientation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn build_without_coordinates_skips_orientation() {
        let topology = MeshTopology::build(
            [(5u8, vec![n(1), n(2), n(3)]), (5u8, vec![n(2), n(1), n(4)])],
            None,
        )
        .unwrap();
        assert_eq!(topology.element_count(), 2);
        assert_eq!(topology.orientation_report(), OrientationReport::default());
        assert_eq!(topology.adjacency().internal_face_count(), 1);
    }

    #[test]
    fn validation_failure_yields_no_topology() {
        let err = MeshTopology::build([(5u8, vec![n(1), n(2), n(3), n(4)])], None).unwrap_err();
        assert!(matches!(err, MeshTopologyError::NodeCountMismatch { position: 0, .. }));
    }

    #[test]
    fn orientation_repair_keeps_adjacency_valid() {
        // A flipped triangle must be repaired and still match its neighbor,
        // since flipping preserves face node-sets.
        let mut coords = Coordinates::new(2).unwrap();
        coords.insert(n(1), &[0.0, 0.0]).unwrap();
        coords.insert(n(2), &[1.0, 0.0]).unwrap();
        coords.insert(n(3), &[0.5, 1.0]).unwrap();
        coords.insert(n(4), &[0.5, -1.0]).unwrap();
        let topology = MeshTopology::build(
            [(5u8, vec![n(1), n(3), n(2)]), (5u8, vec![n(2), n(4), n(1)])],
            Some(&coords),
        )
        .unwrap();
        assert_eq!(topology.orientation_report().checked, 2);
        assert_eq!(topology.orientation_report().flipped, 2);
        assert_eq!(topology.adjacency().internal_face_count(), 1);
        assert_eq!(topology.boundary_faces().len(), 4);
    }
}
