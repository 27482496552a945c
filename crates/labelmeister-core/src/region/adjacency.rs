//! Neighbour lookup for regions.

use super::Region;
use crate::geometry::EDGE_TOLERANCE;

/// Return every candidate that shares an edge with `region`.
///
/// Two regions are adjacent when one pair of opposite edges lies within
/// [`EDGE_TOLERANCE`] of each other and the regions overlap along the
/// perpendicular axis by more than a point. Candidates with the same id as
/// `region` are skipped, so a region is never its own neighbour.
pub fn adjacent_regions<'a>(region: &Region, candidates: &'a [Region]) -> Vec<&'a Region> {
    let rect = region.rect();
    candidates
        .iter()
        .filter(|other| other.id != region.id)
        .filter(|other| rect.shares_edge(&other.rect(), EDGE_TOLERANCE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn region(id: u32, x: f64, y: f64, w: f64, h: f64) -> Region {
        Region::cell(id, Rect::new(x, y, w, h))
    }

    fn ids(found: &[&Region]) -> Vec<u32> {
        let mut ids: Vec<u32> = found.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_no_neighbors() {
        let a = region(1, 0.0, 0.0, 10.0, 10.0);
        let all = vec![a.clone(), region(2, 100.0, 100.0, 10.0, 10.0)];
        assert!(adjacent_regions(&a, &all).is_empty());
    }

    #[test]
    fn test_excludes_self() {
        let a = region(1, 0.0, 0.0, 10.0, 10.0);
        assert!(adjacent_regions(&a, std::slice::from_ref(&a)).is_empty());
    }

    #[test]
    fn test_each_side() {
        let center = region(1, 10.0, 10.0, 10.0, 10.0);
        let all = vec![
            center.clone(),
            region(2, 20.0, 10.0, 10.0, 10.0),
            region(3, 0.0, 10.0, 10.0, 10.0),
            region(4, 10.0, 0.0, 10.0, 10.0),
            region(5, 10.0, 20.0, 10.0, 10.0),
        ];
        assert_eq!(ids(&adjacent_regions(&center, &all)), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_gap_within_tolerance() {
        let a = region(1, 0.0, 0.0, 10.0, 10.0);
        let all = vec![region(2, 10.5, 0.0, 10.0, 10.0)];
        assert_eq!(ids(&adjacent_regions(&a, &all)), vec![2]);
    }

    #[test]
    fn test_overlapping_without_shared_edge() {
        let a = region(1, 0.0, 0.0, 10.0, 10.0);
        let all = vec![region(2, 5.0, 5.0, 10.0, 10.0)];
        assert!(adjacent_regions(&a, &all).is_empty());
    }

    #[test]
    fn test_edge_aligned_but_offset_vertically() {
        let a = region(1, 0.0, 0.0, 10.0, 10.0);
        let all = vec![region(2, 10.0, 20.0, 10.0, 10.0)];
        assert!(adjacent_regions(&a, &all).is_empty());
    }

    #[test]
    fn test_corner_touch_is_not_adjacent() {
        let a = region(1, 0.0, 0.0, 10.0, 10.0);
        let all = vec![region(2, 10.0, 10.0, 10.0, 10.0)];
        assert!(adjacent_regions(&a, &all).is_empty());
    }

    #[test]
    fn test_partial_edge_overlap_counts() {
        // A wide merged region next to a single tall cell
        let wide = region(1, 0.0, 0.0, 200.0, 100.0);
        let all = vec![region(2, 200.0, 50.0, 100.0, 100.0)];
        assert_eq!(ids(&adjacent_regions(&wide, &all)), vec![2]);
    }
}
