//!
//! Browser (wasm32) implementations of [`Document`](crate::document::Document)
//! and [`RenderService`](crate::service::RenderService), plus the entry
//! points exported to JavaScript.
//!

pub mod document;
pub mod loader;
pub mod payload;
pub mod wescountry;

pub use document::BrowserDocument;
pub use wescountry::WesCountry;
