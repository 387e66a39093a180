//! Orientation-consistency pass.
//!
//! Enforces the mesh-wide positive-measure convention: counter-clockwise in
//! the XY plane for 2-D cells, positive volume for 3-D cells. Each element
//! whose signed measure comes out negative gets its shape's fixed node
//! permutation applied exactly once; already-correct elements are untouched,
//! so a second run is a no-op. Elements with zero or non-finite measure are
//! degenerate and abort the build.
//!
//! The pass is per-element with no cross-element state; with the `rayon`
//! feature it runs in parallel.

use crate::geometry::coordinates::Coordinates;
use crate::geometry::measure::signed_measure;
use crate::mesh_error::MeshTopologyError;
use crate::topology::arena::ElementArena;
use crate::topology::element::Element;

/// Tolerance below which a signed measure counts as degenerate.
const MEASURE_EPS: f64 = 1e-12;

/// Summary of one orientation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrientationReport {
    /// Elements whose measure was evaluated (lines are skipped).
    pub checked: usize,
    /// Elements whose node order was flipped.
    pub flipped: usize,
}

/// Checks and repairs the orientation of every area/volume element.
///
/// `coordinates` must cover every node of every non-line element. Fails with
/// [`MeshTopologyError::DegenerateElement`] on a zero or non-finite measure
/// and with [`MeshTopologyError::MissingCoordinates`] on an uncovered node;
/// both abort the build.
pub fn orient_elements(
    arena: &mut ElementArena,
    coordinates: &Coordinates,
) -> Result<OrientationReport, MeshTopologyError> {
    let outcomes = run_per_element(arena, coordinates)?;
    let mut report = OrientationReport::default();
    for flipped in outcomes {
        match flipped {
            Some(true) => {
                report.checked += 1;
                report.flipped += 1;
            }
            Some(false) => report.checked += 1,
            None => {}
        }
    }
    log::debug!(
        "orientation pass: {} elements checked, {} flipped",
        report.checked,
        report.flipped
    );
    Ok(report)
}

/// Orients one element; `Some(true)` if it was flipped, `None` if the shape
/// carries no orientation convention.
fn orient_one(
    element: &mut Element,
    coordinates: &Coordinates,
) -> Result<Option<bool>, MeshTopologyError> {
    if !element.cell_type().has_signed_measure() {
        return Ok(None);
    }
    let vertices = coordinates.gather(element.nodes())?;
    let measure = signed_measure(element.cell_type(), &vertices)
        .unwrap_or(f64::NAN);
    if !measure.is_finite() || measure.abs() <= MEASURE_EPS {
        return Err(MeshTopologyError::DegenerateElement {
            element: element.id(),
            measure,
        });
    }
    if measure < 0.0 {
        element.change_orientation();
        #[cfg(debug_assertions)]
        {
            let recheck =
                signed_measure(element.cell_type(), &coordinates.gather(element.nodes())?);
            debug_assert!(
                recheck.is_some_and(|m| m > 0.0),
                "orientation flip did not produce a positive measure"
            );
        }
        return Ok(Some(true));
    }
    Ok(Some(false))
}

#[cfg(not(feature = "rayon"))]
fn run_per_element(
    arena: &mut ElementArena,
    coordinates: &Coordinates,
) -> Result<Vec<Option<bool>>, MeshTopologyError> {
    arena
        .iter_mut()
        .map(|element| orient_one(element, coordinates))
        .collect()
}

#[cfg(feature = "rayon")]
fn run_per_element(
    arena: &mut ElementArena,
    coordinates: &Coordinates,
) -> Result<Vec<Option<bool>>, MeshTopologyError> {
    use rayon::prelude::*;
    arena
        .par_iter_mut()
        .map(|element| orient_one(element, coordinates))
        .collect()
}
