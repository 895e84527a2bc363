//!
//! [`RenderPayload`] over the caller's own JavaScript object, so the
//! rendering library receives that exact object with the target fields
//! written onto it.
//!

use crate::error::Error;
use crate::payload::{RenderKind, RenderPayload, CHART_TYPE, CONTAINER, HEIGHT, WIDTH};
use crate::result::Result;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Accept `data` as a render payload if it is an object (functions included)
pub fn try_into_payload(data: JsValue) -> Result<Object> {
    if data.is_object() || data.is_function() {
        Ok(data.unchecked_into())
    } else {
        Err(Error::Custom(format!("render payload must be an object, got {data:?}")))
    }
}

fn set(object: &Object, key: &str, value: &JsValue) -> Result<()> {
    if Reflect::set(object, &JsValue::from_str(key), value)? {
        Ok(())
    } else {
        Err(Error::PayloadNotWritable(key.to_string()))
    }
}

impl RenderPayload for Object {
    /// Falsy `chartType` (including `undefined`, `NaN` and `""`) selects the map
    fn render_kind(&self) -> Result<RenderKind> {
        if Reflect::get(self, &JsValue::from_str(CHART_TYPE))?.is_truthy() {
            Ok(RenderKind::Chart)
        } else {
            Ok(RenderKind::Map)
        }
    }

    fn set_target(&mut self, selector: &str, width: u32, height: &str) -> Result<()> {
        set(self, CONTAINER, &JsValue::from_str(selector))?;
        set(self, WIDTH, &JsValue::from(width))?;
        set(self, HEIGHT, &JsValue::from_str(height))?;
        Ok(())
    }
}
