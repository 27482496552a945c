//! Conversions between the anchor origin and the visual box.

use super::{Footprint, Rotation};
use crate::geometry::Point;

/// Offset from the anchor to the visual top-left corner.
fn top_left_offset(footprint: Footprint, rotation: Rotation) -> Point {
    let Footprint { width, height } = footprint;
    match rotation {
        Rotation::Deg0 => Point::new(0.0, 0.0),
        Rotation::Deg90 => Point::new(-height, 0.0),
        Rotation::Deg180 => Point::new(-width, -height),
        Rotation::Deg270 => Point::new(0.0, -width),
    }
}

/// Visual top-left corner of a placement anchored at `anchor`.
pub fn visual_top_left(anchor: Point, footprint: Footprint, rotation: Rotation) -> Point {
    let offset = top_left_offset(footprint, rotation);
    Point::new(anchor.x + offset.x, anchor.y + offset.y)
}

/// Anchor that puts the visual top-left corner at `top_left`.
pub fn anchor_from_top_left(top_left: Point, footprint: Footprint, rotation: Rotation) -> Point {
    let offset = top_left_offset(footprint, rotation);
    Point::new(top_left.x - offset.x, top_left.y - offset.y)
}

/// Center of the visual box of a placement anchored at `anchor`.
pub fn visual_center(anchor: Point, footprint: Footprint, rotation: Rotation) -> Point {
    let top_left = visual_top_left(anchor, footprint, rotation);
    let (width, height) = footprint.visual_size(rotation);
    Point::new(top_left.x + width / 2.0, top_left.y + height / 2.0)
}

/// Anchor that puts the visual center at `center`.
pub fn anchor_from_center(center: Point, footprint: Footprint, rotation: Rotation) -> Point {
    let (width, height) = footprint.visual_size(rotation);
    let top_left = Point::new(center.x - width / 2.0, center.y - height / 2.0);
    anchor_from_top_left(top_left, footprint, rotation)
}
