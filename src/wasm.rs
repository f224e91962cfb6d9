//! WASM bindings for tortoise-hare.
//!
//! Exposes `visualize` and `simulateJson` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

/// Render the step-by-step frames for an edge-list source with default
/// settings (Unicode box-drawing, padding 1).
#[wasm_bindgen]
pub fn visualize(src: &str) -> Result<String, JsError> {
    crate::visualize_dsl(src, true, 1, None).map_err(|e| JsError::new(&e))
}

/// Compute the ordered node sequence and step sequence for an edge-list
/// source and return them as a JSON string (camelCase fields), ready to
/// drive a browser presentation layer.
#[wasm_bindgen(js_name = "simulateJson")]
pub fn simulate_json(src: &str) -> Result<String, JsError> {
    crate::export_dsl_json(src, None).map_err(|e| JsError::new(&e))
}
