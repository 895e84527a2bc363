//!
//! Land Portal embeddable widget loader.
//!
//! Two responsibilities, composed in sequence:
//!
//! - [`injector`] appends the stylesheet and the script of the
//!   `wesCountry` rendering library to the document head, optionally
//!   waiting for their `load` events, and [`assets::AssetLoader`] makes
//!   that load happen once however many callers ask for it;
//! - [`dispatcher`] creates a uniquely named container, measures it,
//!   completes the caller's payload with `container`, `width` and
//!   `height`, and hands it to the map or the chart renderer.
//!
//! Both work against the [`Document`] and [`RenderService`] traits.
//! On `wasm32` the [`browser`] module provides DOM and `wesCountry`
//! implementations along with the entry points exported to JavaScript;
//! [`memory::MemoryDocument`] is a headless document usable anywhere.
//!
//! Example:
//!
//! ```rust ignore
//! use landportal_widget::prelude::*;
//!
//! let document = MemoryDocument::new(960);
//! Injector::new(&document).inject_assets(&WidgetConfig::default())?;
//!
//! let mut payload = Payload::from_json(r#"{ "chartType": "bar" }"#)?;
//! let target = Dispatcher::new(WidgetConfig::default(), &document, &service)
//!     .render(&mut payload)?;
//! ```

pub mod assets;
pub mod config;
pub mod dispatcher;
pub mod document;
pub mod error;
pub mod injector;
pub mod memory;
pub mod payload;
pub mod resource;
pub mod result;
pub mod service;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        pub mod browser;
    }
}

pub use assets::{AssetLoader, AssetStatus};
pub use config::WidgetConfig;
pub use dispatcher::{Dispatcher, RenderTarget};
pub use document::Document;
pub use error::Error;
pub use injector::Injector;
pub use payload::{Payload, RenderKind, RenderPayload};
pub use resource::{Resource, ResourceElement, ResourceKind};
pub use result::Result;
pub use service::RenderService;

pub mod prelude {
    pub use crate::assets::{AssetLoader, AssetStatus};
    pub use crate::config::WidgetConfig;
    pub use crate::dispatcher::{Dispatcher, RenderTarget};
    pub use crate::document::Document;
    pub use crate::injector::Injector;
    pub use crate::memory::MemoryDocument;
    pub use crate::payload::{Payload, RenderKind, RenderPayload};
    pub use crate::resource::{Resource, ResourceKind};
    pub use crate::service::RenderService;

    #[cfg(target_arch = "wasm32")]
    pub use crate::browser::{BrowserDocument, WesCountry};
}
