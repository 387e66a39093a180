//! Primal-grid element: one mesh cell with shape-generic queries.
//!
//! An element owns its ordered global node indices and one neighbor slot per
//! local face. Node and neighbor storage is inline and fixed-capacity, sized
//! by the largest supported shape, so elements live contiguously in the arena
//! with no per-element heap allocation. The live prefix lengths come from the
//! shape's [`ShapeDescriptor`](crate::topology::connectivity::ShapeDescriptor).
//!
//! Only two mutators exist: [`Element::set_neighbor`]/[`Element::mark_boundary`]
//! (write-once per slot, driven by the adjacency builder) and
//! [`Element::change_orientation`] (a fixed involutive node permutation,
//! driven by the orientation pass).

use crate::mesh_error::MeshTopologyError;
use crate::topology::cell_type::CellType;
use crate::topology::connectivity::{MAX_FACE_NODES, MAX_FACES, MAX_NODES, ShapeDescriptor};
use crate::topology::ids::{ElementId, NodeId};
use serde::{Deserialize, Serialize};

/// Contents of one per-face neighbor slot.
///
/// Slots start `Unset`; the adjacency builder resolves every slot to either
/// `Element` (internal face) or `Boundary` (unmatched face) exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neighbor {
    /// Not yet classified; only observable before the adjacency builder runs.
    #[default]
    Unset,
    /// The face lies on the mesh boundary.
    Boundary,
    /// The element across this face.
    Element(ElementId),
}

impl Neighbor {
    /// True once the adjacency builder has classified this slot.
    #[inline]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Neighbor::Unset)
    }
}

/// The global node ids composing one face, in the descriptor's declared
/// local order. Inline storage; cheap to return by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceNodes {
    nodes: [NodeId; MAX_FACE_NODES],
    len: u8,
}

impl FaceNodes {
    #[inline]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::ops::Deref for FaceNodes {
    type Target = [NodeId];
    fn deref(&self) -> &[NodeId] {
        self.as_slice()
    }
}

/// One mesh cell: shape tag, ordered global nodes, per-face neighbor slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    cell: CellType,
    nodes: [NodeId; MAX_NODES],
    neighbors: [Neighbor; MAX_FACES],
}

impl Element {
    /// Constructs an element with the given dense id and node order.
    ///
    /// Callers go through the arena, which validates node count and
    /// distinctness first; `nodes.len()` must equal the shape's node count.
    pub(crate) fn new(id: ElementId, cell: CellType, node_ids: &[NodeId]) -> Self {
        debug_assert_eq!(node_ids.len(), cell.descriptor().node_count);
        let mut nodes = [NodeId::new(0); MAX_NODES];
        nodes[..node_ids.len()].copy_from_slice(node_ids);
        Element {
            id,
            cell,
            nodes,
            neighbors: [Neighbor::Unset; MAX_FACES],
        }
    }

    /// The element's dense global id.
    #[inline]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The element's shape.
    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.cell
    }

    /// The shared connectivity descriptor for this element's shape.
    #[inline]
    pub fn descriptor(&self) -> &'static ShapeDescriptor {
        self.cell.descriptor()
    }

    /// Number of nodes for this shape.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.descriptor().node_count
    }

    /// Number of faces for this shape.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.descriptor().face_count
    }

    /// The ordered global node ids, reflecting any orientation flip.
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes[..self.node_count()]
    }

    /// The global id of local node `index`.
    pub fn node(&self, index: usize) -> Result<NodeId, MeshTopologyError> {
        let count = self.node_count();
        if index >= count {
            return Err(MeshTopologyError::NodeIndexOutOfRange {
                element: self.id,
                index,
                count,
            });
        }
        Ok(self.nodes[index])
    }

    /// The global node ids composing local face `face`, in declared order.
    pub fn face_nodes(&self, face: usize) -> Result<FaceNodes, MeshTopologyError> {
        let locals = self.face_local_nodes(face)?;
        let mut nodes = [NodeId::new(0); MAX_FACE_NODES];
        for (slot, &local) in nodes.iter_mut().zip(locals) {
            *slot = self.nodes[local];
        }
        Ok(FaceNodes {
            nodes,
            len: locals.len() as u8,
        })
    }

    /// The neighbor slot for local face `face`.
    pub fn neighbor(&self, face: usize) -> Result<Neighbor, MeshTopologyError> {
        self.check_face(face)?;
        Ok(self.neighbors[face])
    }

    /// All neighbor slots, one per local face.
    #[inline]
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors[..self.face_count()]
    }

    /// Records the element across local face `face`. Write-once: re-setting
    /// the same value is a no-op, a different value is a logic error.
    pub fn set_neighbor(
        &mut self,
        face: usize,
        neighbor: ElementId,
    ) -> Result<(), MeshTopologyError> {
        self.resolve_slot(face, Neighbor::Element(neighbor))
    }

    /// Marks local face `face` as lying on the mesh boundary. Write-once,
    /// idempotent like [`Element::set_neighbor`].
    pub fn mark_boundary(&mut self, face: usize) -> Result<(), MeshTopologyError> {
        self.resolve_slot(face, Neighbor::Boundary)
    }

    /// Applies the shape's fixed orientation-reversing node permutation.
    ///
    /// Preserves the node set and the face node-sets; calling twice restores
    /// the original order.
    pub fn change_orientation(&mut self) {
        for &(a, b) in self.descriptor().orientation_swaps {
            self.nodes.swap(a, b);
        }
    }

    fn resolve_slot(&mut self, face: usize, value: Neighbor) -> Result<(), MeshTopologyError> {
        self.check_face(face)?;
        match self.neighbors[face] {
            Neighbor::Unset => {
                self.neighbors[face] = value;
                Ok(())
            }
            existing if existing == value => Ok(()),
            existing => Err(MeshTopologyError::NeighborReassigned {
                element: self.id,
                face,
                existing,
                requested: value,
            }),
        }
    }

    fn face_local_nodes(&self, face: usize) -> Result<&'static [usize], MeshTopologyError> {
        self.check_face(face)?;
        Ok(self.descriptor().face_nodes[face])
    }

    fn check_face(&self, face: usize) -> Result<(), MeshTopologyError> {
        let count = self.face_count();
        if face >= count {
            return Err(MeshTopologyError::FaceIndexOutOfRange {
                element: self.id,
                face,
                count,
            });
        }
        Ok(())
    }
}
