//!
//! Render payload forwarded to the rendering library and the
//! [`RenderKind`] selecting the map or the chart entry point.
//!

use crate::result::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CONTAINER: &str = "container";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const CHART_TYPE: &str = "chartType";

/// Open key/value payload. Only [`CHART_TYPE`] is interpreted; the
/// dispatcher writes [`CONTAINER`], [`WIDTH`] and [`HEIGHT`] and leaves
/// every other field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Accepts JSON objects only
    pub fn try_from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn chart_type(&self) -> Option<&Value> {
        self.get(CHART_TYPE)
    }

    pub fn container(&self) -> Option<&str> {
        self.get(CONTAINER).and_then(Value::as_str)
    }

    pub fn width(&self) -> Option<u64> {
        self.get(WIDTH).and_then(Value::as_u64)
    }

    pub fn height(&self) -> Option<&str> {
        self.get(HEIGHT).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Object handed through the [`Dispatcher`](crate::dispatcher::Dispatcher)
/// to a [`RenderService`](crate::service::RenderService). The dispatcher
/// reads the render kind from it and writes the target fields into it;
/// the object itself is what the renderer receives.
pub trait RenderPayload {
    fn render_kind(&self) -> Result<RenderKind>;

    /// Write [`CONTAINER`], [`WIDTH`] and [`HEIGHT`]
    fn set_target(&mut self, selector: &str, width: u32, height: &str) -> Result<()>;
}

impl RenderPayload for Payload {
    fn render_kind(&self) -> Result<RenderKind> {
        Ok(RenderKind::of(self))
    }

    fn set_target(&mut self, selector: &str, width: u32, height: &str) -> Result<()> {
        self.insert(CONTAINER, selector);
        self.insert(WIDTH, width);
        self.insert(HEIGHT, height);
        Ok(())
    }
}

/// Rendering entry point a payload is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderKind {
    Map,
    Chart,
}

impl RenderKind {
    /// `chartType` absent, `null`, `false`, `0` or `""` selects [`RenderKind::Map`];
    /// any other value selects [`RenderKind::Chart`].
    pub fn of(payload: &Payload) -> Self {
        match payload.chart_type() {
            None | Some(Value::Null) | Some(Value::Bool(false)) => RenderKind::Map,
            Some(Value::String(s)) if s.is_empty() => RenderKind::Map,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => RenderKind::Map,
            Some(_) => RenderKind::Chart,
        }
    }
}
