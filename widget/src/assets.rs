//!
//! [`AssetLoader`] loads the widget stylesheet and script at most once.
//! Concurrent callers share the in-flight load and resolve together.
//!

use crate::config::WidgetConfig;
use crate::document::Document;
use crate::error::Error;
use crate::injector::Injector;
use crate::result::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use workflow_core::lookup::{LookupHandler, RequestType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    /// Assets were injected by this call or by the call it waited on
    Loaded,
    /// Assets were already loaded
    Exists,
}

#[derive(Default)]
pub struct AssetLoader {
    lookup: LookupHandler<(), (), Error>,
    loaded: AtomicBool,
}

impl AssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    /// Load the configured assets into `document`. A failed load leaves
    /// the loader idle so that a later call retries.
    pub async fn load<D: Document + ?Sized>(
        &self,
        document: &D,
        config: &WidgetConfig,
    ) -> Result<AssetStatus> {
        if self.is_loaded() {
            return Ok(AssetStatus::Exists);
        }

        match self.lookup.queue(&()).await {
            RequestType::New(receiver) => {
                let result = Injector::new(document).load_assets(config).await;
                if result.is_ok() {
                    self.loaded.store(true, Ordering::SeqCst);
                }
                self.lookup.complete(&(), result).await;
                receiver.recv().await??;
            }
            RequestType::Pending(receiver) => {
                receiver.recv().await??;
            }
        }
        Ok(AssetStatus::Loaded)
    }
}
