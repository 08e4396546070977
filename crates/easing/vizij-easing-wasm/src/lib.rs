use js_sys::Array;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_easing_core::{EasingKind, EasingSpec};

/// Accepts a catalog name or an object `{ kind, amplitude?, period?,
/// overshoot? }`. Both forms take any spelling of the name (`"out_bounce"`,
/// `"OutBounce"`, `"out-bounce"`).
fn spec_from_js(spec: JsValue) -> Result<EasingSpec, JsError> {
    console_error_panic_hook::set_once();
    if let Some(name) = spec.as_string() {
        let kind: EasingKind = name.parse().map_err(|e| JsError::new(&format!("{e}")))?;
        return Ok(kind.into());
    }
    swb::from_value(spec).map_err(|e| JsError::new(&format!("easing spec error: {e}")))
}

/// Evaluate the raw form `f(t, b, c, d)`.
/// Example:
///   ease("in_quad", 1, 0, 10, 2)  // 2.5
#[wasm_bindgen]
pub fn ease(spec: JsValue, t: f64, b: f64, c: f64, d: f64) -> Result<f64, JsError> {
    let spec = spec_from_js(spec)?;
    spec.ease(t, b, c, d)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Evaluate the normalized form `f(t)` over `[0, 1]`.
#[wasm_bindgen(js_name = ease_unit)]
pub fn ease_unit(spec: JsValue, t: f64) -> Result<f64, JsError> {
    let spec = spec_from_js(spec)?;
    spec.ease_unit(t).map_err(|e| JsError::new(&e.to_string()))
}

/// Evaluate the ranged form: eases `time` within `[start, end]`.
#[wasm_bindgen(js_name = ease_range)]
pub fn ease_range(spec: JsValue, time: f64, start: f64, end: f64) -> Result<f64, JsError> {
    let spec = spec_from_js(spec)?;
    spec.ease_range(time, start, end)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Every catalog name, in declaration order.
#[wasm_bindgen(js_name = easing_names)]
pub fn easing_names() -> Array {
    EasingKind::ALL
        .iter()
        .map(|kind| JsValue::from_str(kind.name()))
        .collect()
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
