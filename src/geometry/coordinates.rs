//! Node coordinate store supplied by the mesh-ingestion collaborator.
//!
//! The topology kernel itself is coordinate-free; only the orientation pass
//! reads positions, to sign each element's measure. Coordinates are keyed by
//! global [`NodeId`] with a declared embedding dimension of 2 or 3; 2-D
//! points live in the XY plane (`z = 0`).

use crate::mesh_error::MeshTopologyError;
use crate::topology::ids::NodeId;
use hashbrown::HashMap;

/// Node positions with a fixed embedding dimension.
#[derive(Clone, Debug)]
pub struct Coordinates {
    dim: usize,
    positions: HashMap<NodeId, [f64; 3]>,
}

impl Coordinates {
    /// Creates an empty store for dimension 2 or 3.
    pub fn new(dim: usize) -> Result<Self, MeshTopologyError> {
        if dim != 2 && dim != 3 {
            return Err(MeshTopologyError::UnsupportedDimension { dim });
        }
        Ok(Coordinates {
            dim,
            positions: HashMap::new(),
        })
    }

    /// The embedding dimension (2 or 3).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Number of stored node positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if no positions are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Stores the position of `node`. The slice length must match the
    /// declared dimension; re-inserting overwrites.
    pub fn insert(&mut self, node: NodeId, position: &[f64]) -> Result<(), MeshTopologyError> {
        if position.len() != self.dim {
            return Err(MeshTopologyError::CoordinateLengthMismatch {
                node,
                expected: self.dim,
                found: position.len(),
            });
        }
        let xyz = if self.dim == 2 {
            [position[0], position[1], 0.0]
        } else {
            [position[0], position[1], position[2]]
        };
        self.positions.insert(node, xyz);
        Ok(())
    }

    /// The position of `node`, embedded in 3-D.
    pub fn position(&self, node: NodeId) -> Result<[f64; 3], MeshTopologyError> {
        self.positions
            .get(&node)
            .copied()
            .ok_or(MeshTopologyError::MissingCoordinates { node })
    }

    /// Gathers the positions of `nodes` in order.
    pub fn gather(&self, nodes: &[NodeId]) -> Result<Vec<[f64; 3]>, MeshTopologyError> {
        nodes.iter().map(|&node| self.position(node)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn only_planar_and_volumetric_dims() {
        assert!(Coordinates::new(2).is_ok());
        assert!(Coordinates::new(3).is_ok());
        assert!(matches!(
            Coordinates::new(1),
            Err(MeshTopologyError::UnsupportedDimension { dim: 1 })
        ));
        assert!(Coordinates::new(4).is_err());
    }

    #[test]
    fn planar_points_embed_in_xy() {
        let mut coords = Coordinates::new(2).unwrap();
        coords.insert(n(1), &[3.0, 4.0]).unwrap();
        assert_eq!(coords.position(n(1)).unwrap(), [3.0, 4.0, 0.0]);
    }

    #[test]
    fn wrong_slice_length_rejected() {
        let mut coords = Coordinates::new(3).unwrap();
        assert_eq!(
            coords.insert(n(1), &[1.0, 2.0]).unwrap_err(),
            MeshTopologyError::CoordinateLengthMismatch {
                node: n(1),
                expected: 3,
                found: 2,
            }
        );
        // A planar store likewise refuses a 3-component slice.
        let mut planar = Coordinates::new(2).unwrap();
        assert_eq!(
            planar.insert(n(2), &[1.0, 2.0, 3.0]).unwrap_err(),
            MeshTopologyError::CoordinateLengthMismatch {
                node: n(2),
                expected: 2,
                found: 3,
            }
        );
    }

    #[test]
    fn missing_node_errors() {
        let coords = Coordinates::new(3).unwrap();
        assert_eq!(
            coords.position(n(9)).unwrap_err(),
            MeshTopologyError::MissingCoordinates { node: n(9) }
        );
    }

    #[test]
    fn gather_preserves_order() {
        let mut coords = Coordinates::new(2).unwrap();
        coords.insert(n(1), &[0.0, 0.0]).unwrap();
        coords.insert(n(2), &[1.0, 0.0]).unwrap();
        let got = coords.gather(&[n(2), n(1)]).unwrap();
        assert_eq!(got, vec![[1.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
    }
}
