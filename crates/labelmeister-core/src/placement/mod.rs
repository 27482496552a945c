//! Placement of cutouts on the output surface.
//!
//! A placement stamps one region onto the surface with its own position,
//! quarter-turn rotation and non-uniform scale. Several placements may share
//! a region; they refer to it by id only.
//!
//! # Anchor Origin
//!
//! The stored `(x, y)` is the rotation anchor, which is the visual top-left
//! only at 0°. With `w`/`h` the scaled but unrotated size of the region,
//! rotation is clockwise about the anchor:
//!
//! | rotation | visual top-left  | visual size |
//! |----------|------------------|-------------|
//! | 0        | `(x, y)`         | `w x h`     |
//! | 90       | `(x - h, y)`     | `h x w`     |
//! | 180      | `(x - w, y - h)` | `w x h`     |
//! | 270      | `(x, y - w)`     | `h x w`     |

mod anchor;
mod bounds;

pub use anchor::{anchor_from_center, anchor_from_top_left, visual_center, visual_top_left};
pub use bounds::{
    clamp_to_surface, fit_scale, is_valid, move_to, ordered_by_z, placement_at, rotate, scale,
    FIT_MARGIN,
};

use crate::error::InvalidRotation;
use crate::geometry::{Point, Rect};
use crate::region::{Region, RegionId};
use serde::{Deserialize, Serialize};

/// Smallest allowed scale factor on either axis.
pub const MIN_SCALE: f64 = 0.1;

/// A quarter-turn rotation, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Snap an arbitrary angle to the nearest quarter turn in `0..360`.
    ///
    /// Exact halfway angles (45°, 135°, ...) round to the even quarter turn.
    /// Non-finite input maps to 0°.
    pub fn from_degrees(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Rotation::Deg0;
        }
        let quarters = (degrees / 90.0).round_ties_even() % 4.0;
        match quarters.rem_euclid(4.0) as u8 {
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            3 => Rotation::Deg270,
            _ => Rotation::Deg0,
        }
    }

    /// The rotation reached by turning a further `delta` degrees.
    pub fn rotated_by(self, delta: f64) -> Self {
        Self::from_degrees(self.degrees() as f64 + delta)
    }

    /// Returns true for 90° and 270°, which swap width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = InvalidRotation;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Scaled, unrotated size of a placed region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    /// Size of the visual bounding box under `rotation`.
    pub fn visual_size(self, rotation: Rotation) -> (f64, f64) {
        if rotation.swaps_dimensions() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

/// One stamped copy of a region on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Region this placement shows, looked up by id.
    pub region_id: RegionId,
    /// Anchor origin; see the module docs for its meaning per rotation.
    pub x: f64,
    pub y: f64,
    pub rotation: Rotation,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Stacking order; higher values draw on top.
    pub z_index: i32,
}

impl Placement {
    /// Create an unrotated, unscaled placement at `(x, y)`.
    pub fn new(region_id: RegionId, x: f64, y: f64) -> Self {
        Self {
            region_id,
            x,
            y,
            rotation: Rotation::Deg0,
            scale_x: 1.0,
            scale_y: 1.0,
            z_index: 0,
        }
    }

    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn footprint(&self, region: &Region) -> Footprint {
        Footprint {
            width: region.width * self.scale_x,
            height: region.height * self.scale_y,
        }
    }

    /// The surface-space rectangle this placement covers.
    pub fn visual_bounds(&self, region: &Region) -> Rect {
        let footprint = self.footprint(region);
        let top_left = visual_top_left(self.anchor(), footprint, self.rotation);
        let (width, height) = footprint.visual_size(self.rotation);
        Rect::new(top_left.x, top_left.y, width, height)
    }
}
