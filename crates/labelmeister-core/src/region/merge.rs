//! Rectangle-merge validation.
//!
//! A selection can be merged when it exactly tiles its bounding box. Three
//! checks together certify that without a polygon union:
//!
//! 1. **Connectivity** - breadth-first search over the shared-edge graph
//!    reaches every region from the first one
//! 2. **Area conservation** - the summed region area equals the bounding-box
//!    area, which rules out gaps
//! 3. **Pairwise overlap** - no two regions share more than
//!    [`AREA_TOLERANCE`] of area, which rules out double coverage

use std::collections::{BTreeSet, VecDeque};

use super::Region;
use crate::error::{LayoutError, MergeRejection};
use crate::geometry::{Rect, AREA_TOLERANCE, EDGE_TOLERANCE};

/// Combine a selection of regions into one region.
///
/// The result covers the bounding box of the inputs, carries the id of the
/// first input and the union of all `merged_cell_ids`. It is never
/// discarded. A single-region selection is always valid.
///
/// # Errors
///
/// - `InvalidArgument` for an empty selection
/// - `InvalidGeometry` with the failing check otherwise
///
/// # Example
///
/// ```ignore
/// let grid = Grid::new(300.0, 300.0, 3, 3)?;
/// let cells = grid.generate_cells();
/// let block = [cells[0].clone(), cells[1].clone(), cells[3].clone(), cells[4].clone()];
/// let merged = combine_regions(&block)?;
/// assert_eq!(merged.width, 200.0);
/// ```
pub fn combine_regions(regions: &[Region]) -> Result<Region, LayoutError> {
    let first = regions.first().ok_or_else(|| {
        LayoutError::InvalidArgument("cannot combine empty selection".to_string())
    })?;

    if let Err(reason) = validate_tiling(regions) {
        tracing::debug!(first = first.id, count = regions.len(), %reason, "merge rejected");
        return Err(reason.into());
    }

    // Non-empty input always has a bounding box
    let bounds = Rect::bounding_box(regions.iter().map(Region::rect)).unwrap_or_default();
    let merged_cell_ids: BTreeSet<_> = regions
        .iter()
        .flat_map(|r| r.merged_cell_ids.iter().copied())
        .collect();

    Ok(Region {
        id: first.id,
        x: bounds.x,
        y: bounds.y,
        width: bounds.width,
        height: bounds.height,
        merged_cell_ids,
        discarded: false,
    })
}

fn validate_tiling(regions: &[Region]) -> Result<(), MergeRejection> {
    if regions.len() < 2 {
        return Ok(());
    }

    if !all_connected(regions) {
        return Err(MergeRejection::NotConnected);
    }

    let rects: Vec<Rect> = regions.iter().map(Region::rect).collect();
    let bounding_area = Rect::bounding_box(rects.iter().copied())
        .map(|b| b.area())
        .unwrap_or_default();
    let region_area: f64 = rects.iter().map(Rect::area).sum();
    if (region_area - bounding_area).abs() > AREA_TOLERANCE {
        return Err(MergeRejection::NotRectangle {
            region_area,
            bounding_area,
        });
    }

    for (i, a) in rects.iter().enumerate() {
        for (j, b) in rects.iter().enumerate().skip(i + 1) {
            if a.intersection_area(b) > AREA_TOLERANCE {
                return Err(MergeRejection::Overlapping {
                    first: regions[i].id,
                    second: regions[j].id,
                });
            }
        }
    }

    Ok(())
}

/// Breadth-first search from the first region over shared edges.
fn all_connected(regions: &[Region]) -> bool {
    let mut visited = vec![false; regions.len()];
    let mut queue = VecDeque::from([0usize]);
    visited[0] = true;
    let mut reached = 1;

    while let Some(current) = queue.pop_front() {
        let current_rect = regions[current].rect();
        for (i, other) in regions.iter().enumerate() {
            if visited[i] {
                continue;
            }
            if current_rect.shares_edge(&other.rect(), EDGE_TOLERANCE) {
                visited[i] = true;
                reached += 1;
                queue.push_back(i);
            }
        }
    }

    reached == regions.len()
}
