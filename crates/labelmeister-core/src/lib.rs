//! LabelMeister Core - region algebra and placement engine
//!
//! This crate carves a rasterized page into grid cells, merges adjacent cells
//! into rectangular cutouts, and places those cutouts on a label strip with
//! quarter-turn rotation and non-uniform scale, keeping them inside the strip.
//!
//! Decoding, cropping, compositing and PDF output belong to the host; this
//! crate only produces the geometry they need.
//!
//! # Module Structure
//!
//! - `geometry` - Rectangles, points and the edge-sharing predicate
//! - `grid` - Row/column partition of the canvas
//! - `region` - Cutout regions, merge validation and adjacency
//! - `surface` - Output surfaces, unit conversion and the strip catalog
//! - `placement` - Anchor/visual transforms, clamping, rotation and scale
//! - `session` - The editing pipeline tying the above together
//! - `template` - Flat persistence record

pub mod error;
pub mod geometry;
pub mod grid;
pub mod placement;
pub mod region;
pub mod session;
pub mod surface;
pub mod template;

pub use error::{InvalidRotation, LayoutError, MergeRejection};
pub use geometry::{Point, Rect};
pub use grid::{Grid, GridAxis};
pub use placement::{Placement, Rotation};
pub use region::{adjacent_regions, combine_regions, Region, RegionId, RegionSet};
pub use session::Session;
pub use surface::{StripPreset, Surface, PREDEFINED_STRIPS};
pub use template::Template;
