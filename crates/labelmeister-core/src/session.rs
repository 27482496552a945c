//! The editing session: grid, regions, surface and placements together.
//!
//! A session owns all four structures for one document and is the only
//! writer of them. It is not synchronized; hosts that edit from several
//! threads must serialize access themselves.
//!
//! # Pipeline
//!
//! 1. Adjust grid lines ([`Session::update_line`]), which regenerates cells
//! 2. Merge, discard and restore regions
//! 3. Place, move, rotate and scale cutouts on the surface
//! 4. Hand [`Session::placements_by_z`] to the export renderer
//!
//! Whenever the region set changes, placements whose region no longer exists
//! are dropped and the remaining ones are clamped again.

use crate::error::LayoutError;
use crate::geometry::Point;
use crate::grid::{Grid, GridAxis};
use crate::placement::{self, Placement};
use crate::region::{Region, RegionId, RegionSet};
use crate::surface::Surface;
use crate::template::Template;

/// One document being carved up and laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    grid: Grid,
    regions: RegionSet,
    surface: Surface,
    placements: Vec<Placement>,
}

impl Session {
    /// Start a session with one region per grid cell and no placements.
    pub fn new(grid: Grid, surface: Surface) -> Self {
        let regions = RegionSet::from_grid(&grid);
        Self {
            grid,
            regions,
            surface,
            placements: Vec::new(),
        }
    }

    /// Restore a session from a saved template.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the template fails [`Template::validate`].
    pub fn from_template(template: Template) -> Result<Self, LayoutError> {
        template.validate()?;
        let mut session = Self {
            grid: template.grid,
            regions: RegionSet::new(template.regions),
            surface: template.surface,
            placements: template.placements,
        };
        session.reconcile_placements();
        Ok(session)
    }

    /// Capture the session as a template.
    pub fn to_template(&self, name: impl Into<String>) -> Template {
        Template {
            name: name.into(),
            grid: self.grid.clone(),
            regions: self.regions.as_slice().to_vec(),
            surface: self.surface,
            placements: self.placements.clone(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    // =========================================================================
    // Grid and regions
    // =========================================================================

    /// Move a grid line and regenerate the cells.
    ///
    /// A move the grid ignores leaves the session untouched, merges and
    /// discards included. Returns `true` when the cells were regenerated.
    pub fn update_line(&mut self, axis: GridAxis, index: usize, position: f64) -> bool {
        if !self.grid.update_line(axis, index, position) {
            return false;
        }
        self.regenerate();
        true
    }

    /// Replace the regions with fresh cells from the grid, undoing merges and
    /// discards.
    pub fn regenerate(&mut self) {
        self.regions = RegionSet::from_grid(&self.grid);
        tracing::debug!(cells = self.regions.len(), "regenerated regions");
        self.reconcile_placements();
    }

    /// Merge the selected regions; see [`RegionSet::merge`].
    pub fn merge(&mut self, ids: &[RegionId]) -> Result<RegionId, LayoutError> {
        let id = self.regions.merge(ids)?;
        self.reconcile_placements();
        Ok(id)
    }

    pub fn discard(&mut self, id: RegionId) -> bool {
        self.regions.discard(id)
    }

    pub fn restore(&mut self, id: RegionId) -> bool {
        self.regions.restore(id)
    }

    pub fn adjacent(&self, id: RegionId) -> Vec<&Region> {
        self.regions.adjacent_to(id)
    }

    // =========================================================================
    // Placements
    // =========================================================================

    /// Place an unscaled copy of a region with its anchor at `(x, y)`.
    ///
    /// Returns the new placement's index, or `None` when the region is
    /// unknown or discarded.
    pub fn place(&mut self, region_id: RegionId, x: f64, y: f64) -> Option<usize> {
        self.place_with(region_id, x, y, |_, _, _| 1.0)
    }

    /// Place a copy of a region scaled to fit the surface
    /// (see [`placement::fit_scale`]).
    pub fn place_fitted(&mut self, region_id: RegionId, x: f64, y: f64) -> Option<usize> {
        self.place_with(region_id, x, y, |p, region, surface| {
            placement::fit_scale(region, p.rotation, surface)
        })
    }

    fn place_with(
        &mut self,
        region_id: RegionId,
        x: f64,
        y: f64,
        scale_for: impl FnOnce(&Placement, &Region, &Surface) -> f64,
    ) -> Option<usize> {
        let region = self.regions.get(region_id).filter(|r| !r.discarded)?;
        let mut new = Placement::new(region_id, 0.0, 0.0);
        let factor = scale_for(&new, region, &self.surface);
        placement::scale(&mut new, factor, factor, region, &self.surface);
        placement::move_to(&mut new, x, y, region, &self.surface);

        self.placements.push(new);
        Some(self.placements.len() - 1)
    }

    /// Drag a placement to a new anchor. Returns `false` for a bad index.
    pub fn move_placement(&mut self, index: usize, x: f64, y: f64) -> bool {
        self.edit_placement(index, |p, region, surface| {
            placement::move_to(p, x, y, region, surface)
        })
    }

    /// Rotate a placement about its visual center.
    pub fn rotate_placement(&mut self, index: usize, delta: f64) -> bool {
        self.edit_placement(index, |p, region, surface| {
            placement::rotate(p, delta, region, surface)
        })
    }

    pub fn scale_placement(&mut self, index: usize, scale_x: f64, scale_y: f64) -> bool {
        self.edit_placement(index, |p, region, surface| {
            placement::scale(p, scale_x, scale_y, region, surface)
        })
    }

    pub fn set_z_index(&mut self, index: usize, z_index: i32) -> bool {
        match self.placements.get_mut(index) {
            Some(p) => {
                p.z_index = z_index;
                true
            }
            None => false,
        }
    }

    pub fn remove_placement(&mut self, index: usize) -> Option<Placement> {
        (index < self.placements.len()).then(|| self.placements.remove(index))
    }

    /// Index of the topmost placement under a surface point. Placements of
    /// discarded regions are hidden.
    pub fn placement_at(&self, point: Point) -> Option<usize> {
        placement::placement_at(&self.placements, self.regions.as_slice(), point)
    }

    /// Placements in the order the export renderer draws them, without those
    /// of discarded regions.
    pub fn placements_by_z(&self) -> Vec<&Placement> {
        placement::ordered_by_z(&self.placements)
            .into_iter()
            .filter(|p| self.regions.get(p.region_id).is_some_and(|r| !r.discarded))
            .collect()
    }

    /// Switch to another surface, clamping every placement onto it.
    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
        self.reconcile_placements();
    }

    fn edit_placement(
        &mut self,
        index: usize,
        edit: impl FnOnce(&mut Placement, &Region, &Surface),
    ) -> bool {
        let Some(p) = self.placements.get_mut(index) else {
            return false;
        };
        let Some(region) = self.regions.get(p.region_id) else {
            return false;
        };
        edit(p, region, &self.surface);
        true
    }

    fn reconcile_placements(&mut self) {
        let regions = &self.regions;
        let before = self.placements.len();
        self.placements.retain(|p| regions.contains(p.region_id));

        for p in &mut self.placements {
            if let Some(region) = regions.get(p.region_id) {
                placement::clamp_to_surface(p, region, &self.surface);
            }
        }

        let dropped = before - self.placements.len();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped placements of removed regions");
        }
    }
}
