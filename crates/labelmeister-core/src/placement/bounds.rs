//! Keeping placements inside the surface.
//!
//! Every mutating operation here is total: it never fails and finishes by
//! clamping, so a placement that went through any of them has its visual box
//! inside the surface whenever the box fits at all.

use super::{anchor_from_center, anchor_from_top_left, visual_center, visual_top_left};
use super::{Placement, Rotation, MIN_SCALE};
use crate::geometry::Point;
use crate::region::Region;
use crate::surface::Surface;

/// Margin kept free on every side by [`fit_scale`], in surface units.
pub const FIT_MARGIN: f64 = 5.0;

/// Slack absorbing rounding in the anchor to top-left round trip.
const BOUNDS_EPSILON: f64 = 1e-9;

/// Move the placement so its visual box lies inside the surface.
///
/// Each axis of the visual top-left is clamped to `[0, extent - size]`,
/// falling back to 0 when the box is larger than the surface. Calling this
/// twice in a row changes nothing the second time.
pub fn clamp_to_surface(placement: &mut Placement, region: &Region, surface: &Surface) {
    let footprint = placement.footprint(region);
    let (width, height) = footprint.visual_size(placement.rotation);
    let top_left = visual_top_left(placement.anchor(), footprint, placement.rotation);

    let clamped = Point::new(
        clamp_axis(top_left.x, surface.width - width),
        clamp_axis(top_left.y, surface.height - height),
    );
    if clamped == top_left {
        return;
    }

    let anchor = anchor_from_top_left(clamped, footprint, placement.rotation);
    tracing::trace!(
        region = placement.region_id,
        from_x = placement.x,
        from_y = placement.y,
        to_x = anchor.x,
        to_y = anchor.y,
        "clamped placement to surface"
    );
    // Axes are independent; an untouched axis keeps its exact value
    if clamped.x != top_left.x {
        placement.x = anchor.x;
    }
    if clamped.y != top_left.y {
        placement.y = anchor.y;
    }
}

#[inline]
fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

/// Whether the placement's visual box lies entirely inside the surface.
pub fn is_valid(placement: &Placement, region: &Region, surface: &Surface) -> bool {
    let bounds = placement.visual_bounds(region);
    bounds.x >= -BOUNDS_EPSILON
        && bounds.y >= -BOUNDS_EPSILON
        && bounds.right() <= surface.width + BOUNDS_EPSILON
        && bounds.bottom() <= surface.height + BOUNDS_EPSILON
}

/// Set a new anchor, then clamp. Non-finite coordinates are ignored.
pub fn move_to(placement: &mut Placement, x: f64, y: f64, region: &Region, surface: &Surface) {
    if !x.is_finite() || !y.is_finite() {
        return;
    }
    placement.x = x;
    placement.y = y;
    clamp_to_surface(placement, region, surface);
}

/// Turn the placement by `delta` degrees, snapped to a quarter turn.
///
/// The visual center stays where it was: the center is taken under the old
/// rotation, the anchor is solved for the same center under the new one, and
/// the result is clamped. A non-finite delta is ignored.
pub fn rotate(placement: &mut Placement, delta: f64, region: &Region, surface: &Surface) {
    if !delta.is_finite() {
        return;
    }
    let footprint = placement.footprint(region);
    let center = visual_center(placement.anchor(), footprint, placement.rotation);

    placement.rotation = placement.rotation.rotated_by(delta);
    let anchor = anchor_from_center(center, footprint, placement.rotation);
    placement.x = anchor.x;
    placement.y = anchor.y;

    clamp_to_surface(placement, region, surface);
}

/// Set both scale factors, floored at [`MIN_SCALE`], then clamp.
pub fn scale(
    placement: &mut Placement,
    scale_x: f64,
    scale_y: f64,
    region: &Region,
    surface: &Surface,
) {
    // f64::max discards NaN, so a NaN factor also lands on the floor
    placement.scale_x = scale_x.max(MIN_SCALE);
    placement.scale_y = scale_y.max(MIN_SCALE);
    clamp_to_surface(placement, region, surface);
}

/// Largest uniform scale showing the whole region on the surface.
///
/// Leaves [`FIT_MARGIN`] free on every side and honours the rotation. The
/// result never enlarges the region and never drops below [`MIN_SCALE`].
pub fn fit_scale(region: &Region, rotation: Rotation, surface: &Surface) -> f64 {
    let (width, height) = if rotation.swaps_dimensions() {
        (region.height, region.width)
    } else {
        (region.width, region.height)
    };
    let available_width = surface.width - FIT_MARGIN * 2.0;
    let available_height = surface.height - FIT_MARGIN * 2.0;

    let scale = (available_width / width).min(available_height / height);
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, 1.0)
}

/// Index of the topmost placement whose visual box contains `point`.
///
/// Higher `z_index` wins; among equal `z_index` the later placement wins,
/// since it is drawn last. Placements whose region is missing or discarded
/// are skipped.
pub fn placement_at(placements: &[Placement], regions: &[Region], point: Point) -> Option<usize> {
    placements
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            regions
                .iter()
                .find(|r| r.id == p.region_id)
                .is_some_and(|region| {
                    !region.discarded && p.visual_bounds(region).contains(point)
                })
        })
        .max_by_key(|(i, p)| (p.z_index, *i))
        .map(|(i, _)| i)
}

/// Placements in drawing order: ascending `z_index`, ties in list order.
pub fn ordered_by_z(placements: &[Placement]) -> Vec<&Placement> {
    let mut ordered: Vec<&Placement> = placements.iter().collect();
    ordered.sort_by_key(|p| p.z_index);
    ordered
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::geometry::Rect;
    use proptest::prelude::*;

    fn rotation_strategy() -> impl Strategy<Value = Rotation> {
        prop_oneof![
            Just(Rotation::Deg0),
            Just(Rotation::Deg90),
            Just(Rotation::Deg180),
            Just(Rotation::Deg270),
        ]
    }

    /// Strategy for an arbitrary placement over a region of arbitrary size.
    fn placement_strategy() -> impl Strategy<Value = (Placement, Region)> {
        (
            1.0f64..300.0,
            1.0f64..300.0,
            -500.0f64..500.0,
            -500.0f64..500.0,
            rotation_strategy(),
            0.1f64..3.0,
            0.1f64..3.0,
        )
            .prop_map(|(w, h, x, y, rotation, sx, sy)| {
                let region = Region::cell(0, Rect::new(0.0, 0.0, w, h));
                let mut placement = Placement::new(0, x, y);
                placement.rotation = rotation;
                placement.scale_x = sx;
                placement.scale_y = sy;
                (placement, region)
            })
    }

    fn surface_strategy() -> impl Strategy<Value = Surface> {
        (10.0f64..400.0, 10.0f64..400.0).prop_map(|(w, h)| Surface::new(w, h, 1.0).unwrap())
    }

    proptest! {
        /// Property: Clamping twice is the same as clamping once.
        #[test]
        fn prop_clamp_idempotent(
            (placement, region) in placement_strategy(),
            surface in surface_strategy(),
        ) {
            let mut once = placement;
            clamp_to_surface(&mut once, &region, &surface);
            let mut twice = once.clone();
            clamp_to_surface(&mut twice, &region, &surface);
            prop_assert!((once.x - twice.x).abs() < 1e-9);
            prop_assert!((once.y - twice.y).abs() < 1e-9);
            prop_assert_eq!(once.rotation, twice.rotation);
        }

        /// Property: A clamped placement is valid whenever its box fits the surface.
        #[test]
        fn prop_clamped_is_valid_when_it_fits(
            (mut placement, region) in placement_strategy(),
            surface in surface_strategy(),
        ) {
            let (w, h) = placement.footprint(&region).visual_size(placement.rotation);
            prop_assume!(w <= surface.width && h <= surface.height);

            clamp_to_surface(&mut placement, &region, &surface);
            prop_assert!(is_valid(&placement, &region, &surface));
        }

        /// Property: Four quarter turns restore rotation, anchor and center.
        #[test]
        fn prop_four_quarter_turns_round_trip(
            w in 1.0f64..50.0,
            h in 1.0f64..50.0,
            sx in 0.1f64..2.0,
            sy in 0.1f64..2.0,
            cx in 100.0f64..400.0,
            cy in 100.0f64..400.0,
            start in rotation_strategy(),
        ) {
            // Half extents never exceed 50, so the box fits at every step
            let region = Region::cell(0, Rect::new(0.0, 0.0, w, h));
            let surface = Surface::new(500.0, 500.0, 1.0).unwrap();
            let mut placement = Placement::new(0, 0.0, 0.0);
            placement.rotation = start;
            placement.scale_x = sx;
            placement.scale_y = sy;
            let anchor = anchor_from_center(
                Point::new(cx, cy),
                placement.footprint(&region),
                start,
            );
            placement.x = anchor.x;
            placement.y = anchor.y;
            let original = placement.clone();

            for _ in 0..4 {
                rotate(&mut placement, 90.0, &region, &surface);
                let center = placement.visual_bounds(&region).center();
                prop_assert!((center.x - cx).abs() < 1e-9);
                prop_assert!((center.y - cy).abs() < 1e-9);
            }

            prop_assert_eq!(placement.rotation, original.rotation);
            prop_assert!((placement.x - original.x).abs() < 1e-9);
            prop_assert!((placement.y - original.y).abs() < 1e-9);
        }
    }
}
