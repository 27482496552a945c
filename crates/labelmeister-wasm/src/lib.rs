//! LabelMeister WASM - WebAssembly bindings for LabelMeister
//!
//! This crate exposes the labelmeister-core editing session to
//! JavaScript/TypeScript. Decoding the page, cropping cutouts and writing
//! the PDF stay on the JavaScript side; these bindings hand back the
//! geometry to do it with.
//!
//! # Module Structure
//!
//! - `session` - `JsSession`, the grid/merge/placement pipeline
//! - `presets` - The predefined label strip catalog
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSession, strip_names } from '@labelmeister/wasm';
//!
//! await init();
//!
//! const session = JsSession.with_preset(width, height, 3, 3, strip_names()[4], 300);
//! const id = session.merge(new Uint32Array([0, 1, 3, 4]));
//! session.place_fitted(id, 5, 5);
//! ```

use wasm_bindgen::prelude::*;

mod presets;
mod session;

pub use presets::{predefined_strips, strip_names};
pub use session::JsSession;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
