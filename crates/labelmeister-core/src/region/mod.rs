//! Cutout regions and the set that owns them.
//!
//! A region starts life as one grid cell. Merging replaces several regions
//! with a single one covering their bounding box; discarding only flips a
//! flag so the region can be restored later.
//!
//! ## Identity
//!
//! Region ids are assigned in row-major order by [`Grid::generate_cells`]
//! and stay stable until the next regeneration. A merged region keeps the id
//! of the first region in the selection, so placements that reference that
//! id survive the merge.
//!
//! [`Grid::generate_cells`]: crate::grid::Grid::generate_cells

mod adjacency;
mod merge;

pub use adjacency::adjacent_regions;
pub use merge::combine_regions;

use std::collections::{BTreeSet, HashSet};

use crate::error::LayoutError;
use crate::geometry::Rect;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Identifier of a region within one grid generation.
pub type RegionId = u32;

/// A rectangular cutout of the source canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Original cell ids this region covers.
    pub merged_cell_ids: BTreeSet<RegionId>,
    pub discarded: bool,
}

impl Region {
    /// Create a single-cell region whose only merged id is its own.
    pub fn cell(id: RegionId, rect: Rect) -> Self {
        Self {
            id,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            merged_cell_ids: BTreeSet::from([id]),
            discarded: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Mark the region as discarded. Idempotent.
    pub fn discard(&mut self) {
        self.discarded = true;
    }

    /// Clear the discarded flag. Idempotent.
    pub fn restore(&mut self) {
        self.discarded = false;
    }
}

/// The regions of one grid generation, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Partition a grid into one region per cell.
    pub fn from_grid(grid: &Grid) -> Self {
        Self::new(grid.generate_cells())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.get(id).is_some()
    }

    /// Regions that have not been discarded.
    pub fn active(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| !r.discarded)
    }

    /// Discard a region by id. Returns `false` when the id is unknown.
    pub fn discard(&mut self, id: RegionId) -> bool {
        self.update(id, Region::discard)
    }

    /// Restore a discarded region by id. Returns `false` when the id is unknown.
    pub fn restore(&mut self, id: RegionId) -> bool {
        self.update(id, Region::restore)
    }

    /// Regions sharing an edge with the region `id`; empty for an unknown id.
    pub fn adjacent_to(&self, id: RegionId) -> Vec<&Region> {
        match self.get(id) {
            Some(region) => adjacent_regions(region, &self.regions),
            None => Vec::new(),
        }
    }

    /// Merge the selected regions into one.
    ///
    /// The selection is validated by [`combine_regions`]. On success the
    /// inputs are removed and the merged region takes the list position of
    /// the first selected region. Repeated ids in the selection are ignored.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the selection is empty or names an unknown id
    /// - `InvalidGeometry` if the regions do not tile a rectangle
    pub fn merge(&mut self, ids: &[RegionId]) -> Result<RegionId, LayoutError> {
        let mut seen = HashSet::with_capacity(ids.len());
        let mut selected = Vec::with_capacity(ids.len());
        for &id in ids {
            if !seen.insert(id) {
                continue;
            }
            let region = self
                .get(id)
                .ok_or_else(|| LayoutError::InvalidArgument(format!("unknown region id {id}")))?;
            selected.push(region.clone());
        }

        let merged = combine_regions(&selected)?;
        let merged_id = merged.id;

        self.regions
            .retain(|r| r.id == merged_id || !seen.contains(&r.id));
        if let Some(slot) = self.regions.iter_mut().find(|r| r.id == merged_id) {
            *slot = merged;
        }

        tracing::debug!(
            id = merged_id,
            inputs = selected.len(),
            remaining = self.regions.len(),
            "merged regions"
        );
        Ok(merged_id)
    }

    fn update(&mut self, id: RegionId, f: impl FnOnce(&mut Region)) -> bool {
        match self.regions.iter_mut().find(|r| r.id == id) {
            Some(region) => {
                f(region);
                true
            }
            None => false,
        }
    }
}
