//! Contiguous element storage and the ingestion factory.
//!
//! Elements live in one dense `Vec` indexed by [`ElementId`]; ids are
//! assigned sequentially at insertion and never reused. Ingestion validates
//! each input row before the element exists, reporting the row's position in
//! the input stream (no global id has been assigned yet at that point).

use crate::mesh_error::MeshTopologyError;
use crate::topology::cell_type::CellType;
use crate::topology::element::Element;
use crate::topology::ids::{ElementId, NodeId};

/// Dense arena of mesh elements.
#[derive(Clone, Debug, Default)]
pub struct ElementArena {
    elements: Vec<Element>,
}

impl ElementArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty arena with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        ElementArena {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Validates one input row and inserts the element, returning its new
    /// sequential id.
    ///
    /// Fails if `nodes` does not match the shape's declared node count or
    /// lists the same global node twice; in both cases the error carries the
    /// row's position (`self.len()` at call time) rather than an element id.
    pub fn try_insert(
        &mut self,
        cell: CellType,
        nodes: &[NodeId],
    ) -> Result<ElementId, MeshTopologyError> {
        let position = self.elements.len();
        let expected = cell.descriptor().node_count;
        if nodes.len() != expected {
            return Err(MeshTopologyError::NodeCountMismatch {
                position,
                cell,
                expected,
                found: nodes.len(),
            });
        }
        for (i, &node) in nodes.iter().enumerate() {
            if nodes[..i].contains(&node) {
                return Err(MeshTopologyError::DuplicateNode { position, node });
            }
        }
        let id = ElementId::new(position as u64);
        self.elements.push(Element::new(id, cell, nodes));
        Ok(id)
    }

    /// Ingests `(vtk_tag, nodes)` rows in order, as supplied by the
    /// mesh-ingestion collaborator. Aborts on the first invalid row.
    pub fn from_cells<I, N>(rows: I) -> Result<Self, MeshTopologyError>
    where
        I: IntoIterator<Item = (u8, N)>,
        N: AsRef<[NodeId]>,
    {
        let mut arena = ElementArena::new();
        for (tag, nodes) in rows {
            let cell = CellType::from_vtk_tag(tag).ok_or(MeshTopologyError::UnknownCellTag {
                position: arena.len(),
                tag,
            })?;
            arena.try_insert(cell, nodes.as_ref())?;
        }
        Ok(arena)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the arena holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element with dense id `id`.
    pub fn get(&self, id: ElementId) -> Result<&Element, MeshTopologyError> {
        self.elements
            .get(id.index())
            .ok_or(MeshTopologyError::InvalidElementId {
                element: id,
                count: self.elements.len(),
            })
    }

    /// Mutable access for the build passes. Once the topology is frozen in a
    /// [`MeshTopology`](crate::topology::mesh::MeshTopology), only shared
    /// access remains.
    pub fn get_mut(&mut self, id: ElementId) -> Result<&mut Element, MeshTopologyError> {
        let count = self.elements.len();
        self.elements
            .get_mut(id.index())
            .ok_or(MeshTopologyError::InvalidElementId { element: id, count })
    }

    /// Iterates elements in dense id order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Mutable iteration in dense id order, for the build passes.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }

    #[cfg(feature = "rayon")]
    pub(crate) fn par_iter_mut(&mut self) -> rayon::slice::IterMut<'_, Element> {
        use rayon::prelude::*;
        self.elements.par_iter_mut()
    }
}

impl<'a> IntoIterator for &'a ElementArena {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
