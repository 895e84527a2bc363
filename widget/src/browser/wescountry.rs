//!
//! [`RenderService`] delegating to the `wesCountry` JavaScript library
//! registered on the global object by the injected script.
//!

use crate::config::DEFAULT_NAMESPACE;
use crate::error::Error;
use crate::result::Result;
use crate::service::RenderService;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

pub struct WesCountry {
    namespace: String,
}

impl Default for WesCountry {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl WesCountry {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
        }
    }

    fn global(&self) -> Option<JsValue> {
        Reflect::get(&js_sys::global(), &JsValue::from_str(&self.namespace))
            .ok()
            .filter(|v| v.is_object())
    }

    /// Resolve `<namespace>.<path...>`, returning the owner object and the value
    fn lookup(&self, path: &[&str]) -> Result<(JsValue, JsValue)> {
        let mut owner = JsValue::UNDEFINED;
        let mut value = self
            .global()
            .ok_or_else(|| Error::DependencyNotReady(self.namespace.clone()))?;
        for name in path {
            let next = Reflect::get(&value, &JsValue::from_str(name))?;
            if next.is_undefined() || next.is_null() {
                return Err(Error::DependencyNotReady(format!(
                    "{}.{}",
                    self.namespace,
                    path.join(".")
                )));
            }
            owner = value;
            value = next;
        }
        Ok((owner, value))
    }

    fn call(&self, path: &[&str], args: &[JsValue]) -> Result<JsValue> {
        let (owner, value) = self.lookup(path)?;
        let function = value.dyn_into::<Function>().map_err(|_| {
            Error::Custom(format!("{}.{} is not a function", self.namespace, path.join(".")))
        })?;
        let result = match args {
            [] => function.call0(&owner)?,
            [arg] => function.call1(&owner, arg)?,
            _ => function.apply(&owner, &args.iter().collect::<js_sys::Array>())?,
        };
        Ok(result)
    }

    /// `true` once `guid`, `maps.createMap` and `charts.chart` are present
    pub fn is_loaded(&self) -> bool {
        self.lookup(&["guid"]).is_ok()
            && self.lookup(&["maps", "createMap"]).is_ok()
            && self.lookup(&["charts", "chart"]).is_ok()
    }
}

impl RenderService<Object> for WesCountry {
    fn is_ready(&self) -> bool {
        self.is_loaded()
    }

    fn generate_id(&self) -> Result<String> {
        let guid = self.call(&["guid"], &[])?;
        guid.as_string()
            .or_else(|| guid.as_f64().map(|n| n.to_string()))
            .ok_or_else(|| Error::Custom(format!("{}.guid() returned {guid:?}", self.namespace)))
    }

    fn render_map(&self, payload: &Object) -> Result<()> {
        self.call(&["maps", "createMap"], &[payload.clone().into()])?;
        Ok(())
    }

    fn render_chart(&self, payload: &Object) -> Result<()> {
        self.call(&["charts", "chart"], &[payload.clone().into()])?;
        Ok(())
    }
}
