//! WASM bindings for the editing session.
//!
//! `JsSession` wraps the core `Session` so the whole document state stays in
//! WASM memory. Region and placement lists cross the boundary as plain
//! objects through serde_wasm_bindgen; everything else uses scalars.

use labelmeister_core::{
    Grid, GridAxis, LayoutError, Point, Session, StripPreset, Surface, Template,
};
use wasm_bindgen::prelude::*;

fn js_error(err: LayoutError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// An editing session for one scanned page.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const session = new JsSession(2480, 3508, 3, 2, 62, 100, 300);
/// const id = session.merge(new Uint32Array([0, 1]));
/// const index = session.place_fitted(id, 5, 5);
/// session.rotate_placement(index, 90);
/// const plan = session.render_order();
/// ```
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsSession {
    /// Create a session over a `canvas_width` x `canvas_height` pixel page,
    /// split into `rows` x `columns` cells, targeting a strip measured in
    /// millimetres and printed at `dpi`.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        canvas_width: f64,
        canvas_height: f64,
        rows: u32,
        columns: u32,
        strip_width_mm: f64,
        strip_height_mm: f64,
        dpi: f64,
    ) -> Result<JsSession, JsValue> {
        let grid = Grid::new(canvas_width, canvas_height, rows, columns).map_err(js_error)?;
        let surface = Surface::from_dpi(strip_width_mm, strip_height_mm, dpi).map_err(js_error)?;
        Ok(Self {
            inner: Session::new(grid, surface),
        })
    }

    /// Create a session targeting one of the predefined strips by name.
    pub fn with_preset(
        canvas_width: f64,
        canvas_height: f64,
        rows: u32,
        columns: u32,
        preset: &str,
        dpi: f64,
    ) -> Result<JsSession, JsValue> {
        let preset = StripPreset::find(preset)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown strip preset: {}", preset)))?;
        Self::new(
            canvas_width,
            canvas_height,
            rows,
            columns,
            preset.width,
            preset.height,
            dpi,
        )
    }

    /// Restore a session from a template object produced by `to_template`.
    pub fn from_template(template: JsValue) -> Result<JsSession, JsValue> {
        let template: Template = serde_wasm_bindgen::from_value(template)
            .map_err(|e| JsValue::from_str(&format!("Invalid template: {}", e)))?;
        let inner = Session::from_template(template).map_err(js_error)?;
        Ok(Self { inner })
    }

    pub fn to_template(&self, name: &str) -> Result<JsValue, JsValue> {
        to_js(&self.inner.to_template(name))
    }

    // =========================================================================
    // Grid
    // =========================================================================

    /// Drag an interior row line. Returns `false` when nothing moved, in
    /// which case merges and placements are kept.
    pub fn update_row_line(&mut self, index: u32, position: f64) -> bool {
        self.inner.update_line(GridAxis::Row, index as usize, position)
    }

    pub fn update_column_line(&mut self, index: u32, position: f64) -> bool {
        self.inner.update_line(GridAxis::Column, index as usize, position)
    }

    pub fn row_lines(&self) -> Vec<f64> {
        self.inner.grid().row_lines().to_vec()
    }

    pub fn column_lines(&self) -> Vec<f64> {
        self.inner.grid().column_lines().to_vec()
    }

    /// Throw away merges and discards and start again from the grid cells.
    pub fn regenerate(&mut self) {
        self.inner.regenerate();
    }

    // =========================================================================
    // Regions
    // =========================================================================

    #[wasm_bindgen(getter)]
    pub fn region_count(&self) -> usize {
        self.inner.regions().len()
    }

    /// All regions, discarded ones included, as an array of objects.
    pub fn regions(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.regions())
    }

    /// Merge the selected regions into one rectangle.
    ///
    /// Returns the id of the merged region, or throws with the reason the
    /// selection was rejected.
    pub fn merge(&mut self, ids: Vec<u32>) -> Result<u32, JsValue> {
        self.inner.merge(&ids).map_err(js_error)
    }

    pub fn discard(&mut self, id: u32) -> bool {
        self.inner.discard(id)
    }

    pub fn restore(&mut self, id: u32) -> bool {
        self.inner.restore(id)
    }

    /// Ids of the regions sharing an edge with `id`.
    pub fn adjacent(&self, id: u32) -> Vec<u32> {
        self.inner.adjacent(id).iter().map(|r| r.id).collect()
    }

    // =========================================================================
    // Placements
    // =========================================================================

    #[wasm_bindgen(getter)]
    pub fn placement_count(&self) -> usize {
        self.inner.placements().len()
    }

    /// All placements in insertion order.
    pub fn placements(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.placements())
    }

    /// Placements in the order they should be drawn on export. Placements of
    /// discarded regions are left out.
    pub fn render_order(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.placements_by_z())
    }

    /// Place an unscaled copy of a region. Returns the placement index, or
    /// `undefined` for an unknown or discarded region.
    pub fn place(&mut self, region_id: u32, x: f64, y: f64) -> Option<u32> {
        self.inner.place(region_id, x, y).map(|i| i as u32)
    }

    /// Place a copy scaled to fit the strip.
    pub fn place_fitted(&mut self, region_id: u32, x: f64, y: f64) -> Option<u32> {
        self.inner.place_fitted(region_id, x, y).map(|i| i as u32)
    }

    pub fn move_placement(&mut self, index: u32, x: f64, y: f64) -> bool {
        self.inner.move_placement(index as usize, x, y)
    }

    /// Rotate by `delta` degrees, snapped to the nearest quarter turn.
    pub fn rotate_placement(&mut self, index: u32, delta: f64) -> bool {
        self.inner.rotate_placement(index as usize, delta)
    }

    pub fn scale_placement(&mut self, index: u32, scale_x: f64, scale_y: f64) -> bool {
        self.inner.scale_placement(index as usize, scale_x, scale_y)
    }

    pub fn set_z_index(&mut self, index: u32, z_index: i32) -> bool {
        self.inner.set_z_index(index as usize, z_index)
    }

    pub fn remove_placement(&mut self, index: u32) -> bool {
        self.inner.remove_placement(index as usize).is_some()
    }

    /// Index of the topmost placement under a strip point, if any.
    pub fn placement_at(&self, x: f64, y: f64) -> Option<u32> {
        self.inner.placement_at(Point::new(x, y)).map(|i| i as u32)
    }

    // =========================================================================
    // Surface
    // =========================================================================

    /// Switch to another strip size; existing placements are clamped onto it.
    pub fn set_strip(&mut self, width_mm: f64, height_mm: f64, dpi: f64) -> Result<(), JsValue> {
        let surface = Surface::from_dpi(width_mm, height_mm, dpi).map_err(js_error)?;
        self.inner.set_surface(surface);
        Ok(())
    }

    /// Output raster size of the strip as `[width, height]` pixels.
    pub fn strip_pixel_size(&self) -> Vec<u32> {
        let (width, height) = self.inner.surface().pixel_size();
        vec![width, height]
    }
}
