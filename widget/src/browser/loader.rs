//!
//! Entry points exported to JavaScript.
//!
//! ```javascript
//! import init, { configure, install, load } from "./landportal_widget.js";
//! await init();
//! configure({ script: "/static/wesCountry.min.js", stylesheet: "/static/wesCountry.min.css" });
//! install();
//! await load();
//! // JSONP responses of the data API now reach the widget:
//! //   callback({ chartType: "bar", series: [ ... ] });
//! ```
//!
//! With the `autoload` feature, [`install`] and [`load`] run when the module
//! starts, using the default configuration.
//!

use crate::assets::{AssetLoader, AssetStatus};
use crate::browser::payload::try_into_payload;
use crate::browser::{BrowserDocument, WesCountry};
use crate::config::WidgetConfig;
use crate::dispatcher::{Dispatcher, RenderTarget};
use crate::error::Error;
use crate::result::Result;
use js_sys::Reflect;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use workflow_log::*;
use workflow_wasm::callback::*;

/// Global function name called by JSONP responses
pub const JSONP_CALLBACK: &str = "callback";

thread_local! {
    static CONFIG: RefCell<WidgetConfig> = RefCell::new(WidgetConfig::default());
    static LOADER: Rc<AssetLoader> = Rc::new(AssetLoader::new());
    static CALLBACKS: CallbackMap = CallbackMap::new();
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

fn config() -> WidgetConfig {
    CONFIG.with(|config| config.borrow().clone())
}

/// Replace the widget configuration. Keys missing from `config` take
/// their default values. Asset URLs only apply to loads that have not
/// completed yet.
#[wasm_bindgen]
pub fn configure(config: JsValue) -> std::result::Result<(), JsValue> {
    let config: WidgetConfig = serde_wasm_bindgen::from_value(config)?;
    if LOADER.with(|loader| loader.is_loaded()) {
        log_warning!(
            "landportal-widget: assets already loaded, `{}` and `{}` are ignored",
            config.stylesheet,
            config.script
        );
    }
    CONFIG.with(|current| *current.borrow_mut() = config);
    Ok(())
}

async fn load_assets() -> Result<AssetStatus> {
    let config = config();
    if WesCountry::new(&config.namespace).is_loaded() {
        return Ok(AssetStatus::Exists);
    }
    let loader = LOADER.with(Rc::clone);
    loader.load(&BrowserDocument::new(), &config).await
}

/// Inject the stylesheet and the script of the rendering library and
/// resolve once both have loaded. Concurrent calls share a single
/// injection; later calls resolve immediately.
#[wasm_bindgen]
pub async fn load() -> std::result::Result<(), JsValue> {
    load_assets().await?;
    Ok(())
}

fn render_impl(data: JsValue) -> Result<RenderTarget> {
    let config = config();
    let mut payload = try_into_payload(data)?;
    let document = BrowserDocument::new();
    let service = WesCountry::new(&config.namespace);
    Dispatcher::new(config, &document, &service).render(&mut payload)
}

/// Render `data` synchronously. The container is placed right after the
/// calling `<script>` unless a `parent` selector is configured. Fails when
/// the rendering library has not been loaded yet.
///
/// `container`, `width` and `height` are written onto `data`, which is
/// then passed to the library as is.
#[wasm_bindgen]
pub fn callback(data: JsValue) -> std::result::Result<(), JsValue> {
    render_impl(data)?;
    Ok(())
}

/// Load the assets if needed, then render `data`.
#[wasm_bindgen]
pub async fn render(data: JsValue) -> std::result::Result<(), JsValue> {
    load_assets().await?;
    render_impl(data)?;
    Ok(())
}

/// Register [`callback`] on the global object under [`JSONP_CALLBACK`]
#[wasm_bindgen]
pub fn install() -> std::result::Result<(), JsValue> {
    if INSTALLED.with(Cell::get) {
        return Ok(());
    }

    let handler = callback!(move |data: JsValue| -> std::result::Result<(), JsValue> {
        render_impl(data)?;
        Ok(())
    });
    let installed = Reflect::set(
        &js_sys::global(),
        &JsValue::from_str(JSONP_CALLBACK),
        handler.get_fn(),
    )?;
    if !installed {
        return Err(Error::Custom(format!("unable to set global `{JSONP_CALLBACK}`")).into());
    }
    CALLBACKS.with(|callbacks| callbacks.retain(handler))?;
    INSTALLED.with(|flag| flag.set(true));
    Ok(())
}

#[cfg(feature = "autoload")]
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = install() {
        log_error!("landportal-widget: {err:?}");
    }
    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = load_assets().await {
            log_error!("landportal-widget: {err}");
        }
    });
}
