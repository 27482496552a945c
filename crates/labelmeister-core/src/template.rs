//! Flat persistence record for a whole editing session.
//!
//! Cross references are integer ids only, so any serde format can store a
//! template without changes here.

use std::collections::HashSet;

use crate::error::LayoutError;
use crate::grid::Grid;
use crate::placement::{Placement, MIN_SCALE};
use crate::region::Region;
use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// Allowed slack when checking that a loaded region lies on the canvas.
const CANVAS_SLACK: f64 = 1e-6;

/// A saved grid, its regions, the target surface and the placements on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub grid: Grid,
    pub regions: Vec<Region>,
    pub surface: Surface,
    pub placements: Vec<Placement>,
}

impl Template {
    /// Check a template that came from outside, typically from storage.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first problem found: a malformed
    /// grid or surface, a duplicate region id, a region off the canvas, a
    /// placement pointing at a missing region, or a scale below the floor.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.grid.validate()?;
        self.surface.validate()?;

        let mut ids = HashSet::with_capacity(self.regions.len());
        for region in &self.regions {
            if !ids.insert(region.id) {
                return Err(LayoutError::InvalidArgument(format!(
                    "duplicate region id {}",
                    region.id
                )));
            }
            if !region.discarded && !self.on_canvas(region) {
                return Err(LayoutError::InvalidArgument(format!(
                    "region {} lies outside the canvas",
                    region.id
                )));
            }
        }

        for placement in &self.placements {
            if !ids.contains(&placement.region_id) {
                return Err(LayoutError::InvalidArgument(format!(
                    "placement refers to unknown region {}",
                    placement.region_id
                )));
            }
            if placement.scale_x < MIN_SCALE || placement.scale_y < MIN_SCALE {
                return Err(LayoutError::InvalidArgument(format!(
                    "placement of region {} has scale below {MIN_SCALE}",
                    placement.region_id
                )));
            }
        }

        Ok(())
    }

    fn on_canvas(&self, region: &Region) -> bool {
        region.width >= 0.0
            && region.height >= 0.0
            && region.x >= -CANVAS_SLACK
            && region.y >= -CANVAS_SLACK
            && region.right() <= self.grid.canvas_width() + CANVAS_SLACK
            && region.bottom() <= self.grid.canvas_height() + CANVAS_SLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::placement::Rotation;

    fn template() -> Template {
        let grid = Grid::new(300.0, 300.0, 3, 3).unwrap();
        let regions = grid.generate_cells();
        let mut placement = Placement::new(4, 10.0, 20.0);
        placement.rotation = Rotation::Deg90;
        Template {
            name: "shipping".to_string(),
            grid,
            regions,
            surface: Surface::new(100.0, 150.0, 12.0).unwrap(),
            placements: vec![placement],
        }
    }

    #[test]
    fn test_valid_template() {
        assert!(template().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let original = template();
        let json = serde_json::to_string_pretty(&original).unwrap();
        let loaded: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, original);
        assert!(json.contains("\"rotation\": 90"));
    }

    #[test]
    fn test_rejects_dangling_placement() {
        let mut t = template();
        t.placements.push(Placement::new(99, 0.0, 0.0));
        assert!(matches!(t.validate(), Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_duplicate_region_ids() {
        let mut t = template();
        let copy = t.regions[0].clone();
        t.regions.push(copy);
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_rejects_region_off_canvas() {
        let mut t = template();
        t.regions.push(Region::cell(50, Rect::new(250.0, 250.0, 100.0, 100.0)));
        assert!(t.validate().is_err());

        // Discarded regions are not checked against the canvas
        t.regions.last_mut().unwrap().discard();
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_scale() {
        let mut t = template();
        t.placements[0].scale_y = 0.01;
        assert!(t.validate().is_err());
    }
}
