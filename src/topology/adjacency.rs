//! Face-matching adjacency builder and the frozen adjacency table.
//!
//! One batch pass over all elements: every local face is reduced to a
//! [`FaceKey`] (its global node set, sorted), and faces producing the same
//! key are the two sides of one internal face. Keys seen exactly once are
//! boundary faces; a key seen three times means the mesh is non-manifold and
//! the build aborts. Matching is keyed by node set, not scan order, so the
//! result is independent of the order elements were ingested.
//!
//! The builder fills the elements' write-once neighbor slots and returns a
//! self-contained immutable [`Adjacency`] table, so downstream readers can
//! use either surface after the build without synchronization.

use crate::mesh_error::MeshTopologyError;
use crate::topology::arena::ElementArena;
use crate::topology::connectivity::MAX_FACE_NODES;
use crate::topology::element::Neighbor;
use crate::topology::ids::{ElementId, NodeId};
use hashbrown::HashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Sorted global node set of one face instance; the matching key.
///
/// Transient: exists only inside the builder's pending map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct FaceKey {
    nodes: [NodeId; MAX_FACE_NODES],
    len: u8,
}

impl FaceKey {
    pub(crate) fn from_nodes(face_nodes: &[NodeId]) -> Self {
        debug_assert!(face_nodes.len() <= MAX_FACE_NODES);
        let mut nodes = [NodeId::new(0); MAX_FACE_NODES];
        nodes[..face_nodes.len()].copy_from_slice(face_nodes);
        nodes[..face_nodes.len()].sort_unstable();
        FaceKey {
            nodes,
            len: face_nodes.len() as u8,
        }
    }

    fn node_set(&self) -> Vec<NodeId> {
        self.nodes[..self.len as usize].to_vec()
    }
}

/// State of one face key during the matching pass.
#[derive(Clone, Copy)]
enum FaceSlot {
    /// Seen once; waiting for the element on the other side.
    Pending(ElementId, usize),
    /// Seen twice; both sides linked. A third sighting is non-manifold.
    Matched(ElementId, ElementId),
}

/// One unmatched face: the owning element and its local face index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoundaryFace {
    pub element: ElementId,
    pub face: usize,
}

/// Frozen element-to-element adjacency: per-face neighbor slots in CSR
/// layout plus the global boundary-face list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adjacency {
    offsets: Vec<usize>,
    neighbors: Vec<Neighbor>,
    boundary: Vec<BoundaryFace>,
    internal_faces: usize,
}

impl Adjacency {
    /// Number of elements covered by the table.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// The neighbor slot for `element`'s local face `face`.
    pub fn neighbor(
        &self,
        element: ElementId,
        face: usize,
    ) -> Result<Neighbor, MeshTopologyError> {
        let slots = self.element_neighbors(element)?;
        slots
            .get(face)
            .copied()
            .ok_or(MeshTopologyError::FaceIndexOutOfRange {
                element,
                face,
                count: slots.len(),
            })
    }

    /// All neighbor slots of `element`, one per local face.
    pub fn element_neighbors(&self, element: ElementId) -> Result<&[Neighbor], MeshTopologyError> {
        let idx = element.index();
        if idx >= self.element_count() {
            return Err(MeshTopologyError::InvalidElementId {
                element,
                count: self.element_count(),
            });
        }
        Ok(&self.neighbors[self.offsets[idx]..self.offsets[idx + 1]])
    }

    /// Boundary faces in `(element, face)` order, for the boundary-condition
    /// layer.
    #[inline]
    pub fn boundary_faces(&self) -> &[BoundaryFace] {
        &self.boundary
    }

    /// Boundary local-face indices grouped per owning element.
    pub fn boundary_faces_by_element(&self) -> HashMap<ElementId, Vec<usize>> {
        self.boundary
            .iter()
            .map(|bf| (bf.element, bf.face))
            .into_group_map()
            .into_iter()
            .collect()
    }

    /// Number of internal (matched) faces.
    #[inline]
    pub fn internal_face_count(&self) -> usize {
        self.internal_faces
    }

    /// Number of boundary (unmatched) faces.
    #[inline]
    pub fn boundary_face_count(&self) -> usize {
        self.boundary.len()
    }
}

/// Matches all element faces, links mutual neighbors, and classifies
/// boundary faces.
///
/// Runs once after ingestion. Fails with
/// [`MeshTopologyError::NonManifoldFace`] if any node set is shared by three
/// or more elements; the error carries the face's node set and every
/// implicated element id. Re-running on an unchanged arena reproduces the
/// identical table (neighbor slots re-resolve to the same values).
pub fn build_adjacency(arena: &mut ElementArena) -> Result<Adjacency, MeshTopologyError> {
    let mut offsets = Vec::with_capacity(arena.len() + 1);
    offsets.push(0usize);
    let mut total_faces = 0usize;
    for element in arena.iter() {
        total_faces += element.face_count();
        offsets.push(total_faces);
    }

    // Collect every face instance up front in dense id order, so slot
    // writes below never overlap the key scan.
    let mut instances = Vec::with_capacity(total_faces);
    for element in arena.iter() {
        for face in 0..element.face_count() {
            let key = FaceKey::from_nodes(&element.face_nodes(face)?);
            instances.push((key, element.id(), face));
        }
    }

    let mut pending: HashMap<FaceKey, FaceSlot> = HashMap::with_capacity(total_faces);
    let mut internal_faces = 0usize;
    for &(key, element, face) in &instances {
        match pending.entry(key) {
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(FaceSlot::Pending(element, face));
            }
            hashbrown::hash_map::Entry::Occupied(mut slot) => match *slot.get() {
                FaceSlot::Pending(owner, owner_face) => {
                    arena.get_mut(owner)?.set_neighbor(owner_face, element)?;
                    arena.get_mut(element)?.set_neighbor(face, owner)?;
                    slot.insert(FaceSlot::Matched(owner, element));
                    internal_faces += 1;
                }
                FaceSlot::Matched(first, second) => {
                    return Err(MeshTopologyError::NonManifoldFace {
                        nodes: key.node_set(),
                        elements: vec![first, second, element],
                    });
                }
            },
        }
    }

    // Every slot not matched to a second element is a boundary face; slots
    // already holding `Boundary` from an earlier run re-classify the same
    // way, so a rebuild reproduces the identical list. Scanning in dense id
    // order keeps it deterministic.
    let mut neighbors = Vec::with_capacity(total_faces);
    let mut boundary = Vec::new();
    for element in arena.iter_mut() {
        let id = element.id();
        for face in 0..element.face_count() {
            if !matches!(element.neighbor(face)?, Neighbor::Element(_)) {
                element.mark_boundary(face)?;
                boundary.push(BoundaryFace { element: id, face });
            }
        }
        neighbors.extend_from_slice(element.neighbors());
    }

    log::debug!(
        "adjacency built: {} elements, {} internal faces, {} boundary faces",
        arena.len(),
        internal_faces,
        boundary.len()
    );

    Ok(Adjacency {
        offsets,
        neighbors,
        boundary,
        internal_faces,
    })
}
