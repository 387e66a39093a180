use mesh_primal::mesh_error::MeshTopologyError;
use mesh_primal::topology::adjacency::{BoundaryFace, build_adjacency};
use mesh_primal::topology::arena::ElementArena;
use mesh_primal::topology::cell_type::CellType;
use mesh_primal::topology::element::Neighbor;
use mesh_primal::topology::ids::{ElementId, NodeId};

fn n(raw: u64) -> NodeId {
    NodeId::new(raw)
}

fn e(raw: u64) -> ElementId {
    ElementId::new(raw)
}

/// 3x3 structured quad grid on a 4x4 node lattice, node id = row * 4 + col.
fn quad_grid_rows() -> Vec<(u8, Vec<NodeId>)> {
    let mut rows = Vec::new();
    for j in 0..3u64 {
        for i in 0..3u64 {
            let v0 = j * 4 + i;
            rows.push((9u8, vec![n(v0), n(v0 + 1), n(v0 + 5), n(v0 + 4)]));
        }
    }
    rows
}

#[test]
fn two_triangles_share_one_edge() {
    let mut arena = ElementArena::new();
    let a = arena.try_insert(CellType::Triangle, &[n(1), n(2), n(3)]).unwrap();
    let b = arena.try_insert(CellType::Triangle, &[n(2), n(1), n(4)]).unwrap();
    let adjacency = build_adjacency(&mut arena).unwrap();

    // Edge {1,2} is A's face 0 and B's face 0.
    assert_eq!(adjacency.neighbor(a, 0).unwrap(), Neighbor::Element(b));
    assert_eq!(adjacency.neighbor(b, 0).unwrap(), Neighbor::Element(a));
    assert_eq!(adjacency.internal_face_count(), 1);
    assert_eq!(
        adjacency.boundary_faces(),
        &[
            BoundaryFace { element: a, face: 1 },
            BoundaryFace { element: a, face: 2 },
            BoundaryFace { element: b, face: 1 },
            BoundaryFace { element: b, face: 2 },
        ]
    );
    // The element slots agree with the frozen table.
    assert_eq!(arena.get(a).unwrap().neighbor(1).unwrap(), Neighbor::Boundary);
    assert_eq!(arena.get(b).unwrap().neighbor(0).unwrap(), Neighbor::Element(a));
}

#[test]
fn two_tetrahedra_share_one_triangle() {
    let mut arena = ElementArena::new();
    let a = arena
        .try_insert(CellType::Tetrahedron, &[n(1), n(2), n(3), n(4)])
        .unwrap();
    let b = arena
        .try_insert(CellType::Tetrahedron, &[n(1), n(3), n(2), n(5)])
        .unwrap();
    let adjacency = build_adjacency(&mut arena).unwrap();

    // Face {1,2,3} is local face 0 of both tets.
    assert_eq!(adjacency.neighbor(a, 0).unwrap(), Neighbor::Element(b));
    assert_eq!(adjacency.neighbor(b, 0).unwrap(), Neighbor::Element(a));
    assert_eq!(adjacency.internal_face_count(), 1);
    assert_eq!(adjacency.boundary_face_count(), 6);
}

#[test]
fn three_tetrahedra_sharing_a_face_is_non_manifold() {
    let mut arena = ElementArena::new();
    for apex in [4, 5, 6] {
        arena
            .try_insert(CellType::Tetrahedron, &[n(1), n(2), n(3), n(apex)])
            .unwrap();
    }
    let err = build_adjacency(&mut arena).unwrap_err();
    assert_eq!(
        err,
        MeshTopologyError::NonManifoldFace {
            nodes: vec![n(1), n(2), n(3)],
            elements: vec![e(0), e(1), e(2)],
        }
    );
}

#[test]
fn neighbor_symmetry_on_quad_grid() {
    let mut arena = ElementArena::from_cells(quad_grid_rows()).unwrap();
    let adjacency = build_adjacency(&mut arena).unwrap();

    for element in arena.iter() {
        for face in 0..element.face_count() {
            if let Neighbor::Element(other) = adjacency.neighbor(element.id(), face).unwrap() {
                let back = adjacency.element_neighbors(other).unwrap();
                assert!(
                    back.contains(&Neighbor::Element(element.id())),
                    "no back-link from {other} to {}",
                    element.id()
                );
            }
        }
    }
}

#[test]
fn face_count_law_on_quad_grid() {
    let mut arena = ElementArena::from_cells(quad_grid_rows()).unwrap();
    let adjacency = build_adjacency(&mut arena).unwrap();

    let total_faces: usize = arena.iter().map(|el| el.face_count()).sum();
    assert_eq!(
        total_faces,
        2 * adjacency.internal_face_count() + adjacency.boundary_face_count()
    );
    // 3x3 quads: 12 internal edges, 12 boundary edges.
    assert_eq!(adjacency.internal_face_count(), 12);
    assert_eq!(adjacency.boundary_face_count(), 12);
}

#[test]
fn rebuilding_is_idempotent() {
    let mut arena = ElementArena::from_cells(quad_grid_rows()).unwrap();
    let first = build_adjacency(&mut arena).unwrap();
    let second = build_adjacency(&mut arena).unwrap();
    assert_eq!(first, second);
    // The second run must re-classify already-resolved boundary slots, not
    // skip them.
    assert_eq!(second.boundary_face_count(), 12);
    assert_eq!(second.boundary_faces(), first.boundary_faces());
}

#[test]
fn classification_is_independent_of_input_order() {
    let rows = quad_grid_rows();
    let mut arena = ElementArena::from_cells(rows.clone()).unwrap();
    let baseline = build_adjacency(&mut arena).unwrap();

    // Reverse the input order; element k now holds original row perm[k].
    let perm: Vec<usize> = (0..rows.len()).rev().collect();
    let permuted_rows: Vec<_> = perm.iter().map(|&i| rows[i].clone()).collect();
    let mut permuted_arena = ElementArena::from_cells(permuted_rows).unwrap();
    let permuted = build_adjacency(&mut permuted_arena).unwrap();

    let back: Vec<ElementId> = perm.iter().map(|&i| e(i as u64)).collect();
    for k in 0..rows.len() {
        let original = back[k];
        for face in 0..arena.get(original).unwrap().face_count() {
            let translated = match permuted.neighbor(e(k as u64), face).unwrap() {
                Neighbor::Element(other) => Neighbor::Element(back[other.index()]),
                other => other,
            };
            assert_eq!(translated, baseline.neighbor(original, face).unwrap());
        }
    }

    let mut translated_boundary: Vec<BoundaryFace> = permuted
        .boundary_faces()
        .iter()
        .map(|bf| BoundaryFace {
            element: back[bf.element.index()],
            face: bf.face,
        })
        .collect();
    translated_boundary.sort();
    assert_eq!(translated_boundary, baseline.boundary_faces());
}

#[test]
fn mixed_tet_pyramid_mesh_matches_across_the_quad_face() {
    // A pyramid's base quad can only match another quad face; its triangle
    // faces match tets.
    let mut arena = ElementArena::new();
    let pyramid = arena
        .try_insert(CellType::Pyramid, &[n(1), n(2), n(3), n(4), n(5)])
        .unwrap();
    // Tet glued to the pyramid's triangle face {4,5,3} (local face 4).
    let tet = arena
        .try_insert(CellType::Tetrahedron, &[n(3), n(4), n(5), n(6)])
        .unwrap();
    let adjacency = build_adjacency(&mut arena).unwrap();

    assert_eq!(adjacency.neighbor(pyramid, 4).unwrap(), Neighbor::Element(tet));
    assert_eq!(adjacency.internal_face_count(), 1);
    // Pyramid base stays boundary: nothing matches a four-node key here.
    assert_eq!(adjacency.neighbor(pyramid, 0).unwrap(), Neighbor::Boundary);
}

#[test]
fn boundary_faces_group_by_element() {
    let mut arena = ElementArena::new();
    let a = arena.try_insert(CellType::Triangle, &[n(1), n(2), n(3)]).unwrap();
    let b = arena.try_insert(CellType::Triangle, &[n(2), n(1), n(4)]).unwrap();
    let adjacency = build_adjacency(&mut arena).unwrap();

    let by_element = adjacency.boundary_faces_by_element();
    assert_eq!(by_element[&a], vec![1, 2]);
    assert_eq!(by_element[&b], vec![1, 2]);
}
