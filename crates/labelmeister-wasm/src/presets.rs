//! Strip catalog bindings.

use labelmeister_core::PREDEFINED_STRIPS;
use wasm_bindgen::prelude::*;

/// The predefined strip sizes as an array of
/// `{ name, width, height, landscape }` objects (millimetres).
#[wasm_bindgen]
pub fn predefined_strips() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&PREDEFINED_STRIPS[..])
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Names of the predefined strips, in catalog order.
#[wasm_bindgen]
pub fn strip_names() -> Vec<String> {
    PREDEFINED_STRIPS.iter().map(|p| p.name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_names() {
        let names = strip_names();
        assert_eq!(names.len(), PREDEFINED_STRIPS.len());
        assert!(names.iter().any(|n| n == "62x100mm"));
        assert_eq!(names.last().map(String::as_str), Some("Custom"));
    }
}
