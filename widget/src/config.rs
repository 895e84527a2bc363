//!
//! Widget configuration: asset locations, container naming and sizing.
//!

use crate::result::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STYLESHEET: &str = "wesCountry.min.css";
pub const DEFAULT_SCRIPT: &str = "wesCountry.min.js";
pub const DEFAULT_ID_PREFIX: &str = "landportal-widget";
pub const DEFAULT_HEIGHT: &str = "500";
pub const DEFAULT_NAMESPACE: &str = "wesCountry";

/// Settings shared by the [`Injector`](crate::injector::Injector) and the
/// [`Dispatcher`](crate::dispatcher::Dispatcher).
///
/// All fields are optional when deserializing; missing keys take
/// their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Stylesheet URL injected before the script
    pub stylesheet: String,
    /// Script URL of the rendering library
    pub script: String,
    /// Container ids are built as `<id_prefix>-<guid>`
    pub id_prefix: String,
    /// Value written to the payload `height` field
    pub height: String,
    /// Global namespace registered by the rendering library
    pub namespace: String,
    /// CSS selector of the element receiving containers. When unset the
    /// document decides (see [`Document::insert_container`](crate::document::Document::insert_container)).
    pub parent: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            parent: None,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_parent<S: Into<String>>(mut self, selector: S) -> Self {
        self.parent = Some(selector.into());
        self
    }

    /// Element id for a container created with the given guid
    pub fn element_id(&self, guid: &str) -> String {
        format!("{}-{guid}", self.id_prefix)
    }
}
