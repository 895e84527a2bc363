//!
//! Resource injector: appends `<script>` and `<link rel="stylesheet">`
//! elements to the document head.
//!

use crate::config::WidgetConfig;
use crate::document::Document;
use crate::resource::Resource;
use crate::result::Result;
use workflow_log::*;

pub struct Injector<'doc, D: Document + ?Sized> {
    document: &'doc D,
}

impl<'doc, D: Document + ?Sized> Injector<'doc, D> {
    pub fn new(document: &'doc D) -> Self {
        Self { document }
    }

    /// Inject `filename` as a script (`js`) or a stylesheet (`css`).
    /// Any other tag appends nothing and returns
    /// [`Error::UnsupportedResourceKind`](crate::error::Error::UnsupportedResourceKind).
    pub fn inject(&self, filename: &str, tag: &str) -> Result<()> {
        let resource = Resource::parse(filename, tag)?;
        self.inject_resource(&resource)
    }

    /// Append the resource element; the host loads it asynchronously.
    pub fn inject_resource(&self, resource: &Resource) -> Result<()> {
        log_trace!("injecting {} `{}`", resource.kind, resource.filename);
        self.document.append_to_head(&resource.element())
    }

    /// Append the resource element and wait for its `load` event.
    pub async fn load(&self, resource: &Resource) -> Result<()> {
        log_trace!("loading {} `{}`", resource.kind, resource.filename);
        self.document.load(&resource.element()).await
    }

    fn assets(config: &WidgetConfig) -> [Resource; 2] {
        [
            Resource::stylesheet(&config.stylesheet),
            Resource::script(&config.script),
        ]
    }

    /// Inject the configured stylesheet followed by the script.
    pub fn inject_assets(&self, config: &WidgetConfig) -> Result<()> {
        for resource in Self::assets(config).iter() {
            self.inject_resource(resource)?;
        }
        Ok(())
    }

    /// Load the configured stylesheet followed by the script, resolving
    /// once both have loaded.
    pub async fn load_assets(&self, config: &WidgetConfig) -> Result<()> {
        for resource in Self::assets(config).iter() {
            self.load(resource).await?;
        }
        log_info!("widget assets loaded: `{}`, `{}`", config.stylesheet, config.script);
        Ok(())
    }
}
