//!
//! [`Document`] backed by the page DOM through [`web_sys`].
//!

use crate::document::Document;
use crate::error::Error;
use crate::resource::ResourceElement;
use crate::result::Result;
use async_trait::async_trait;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use workflow_core::channel::oneshot;
use workflow_dom::utils::{body, document};
use workflow_wasm::callback::*;

pub struct BrowserDocument {
    document: web_sys::Document,
}

impl Default for BrowserDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserDocument {
    pub fn new() -> Self {
        Self {
            document: document(),
        }
    }

    /// `<head>`, falling back to `<body>` for documents without one
    fn root(&self) -> Result<Element> {
        let collection = self.document.get_elements_by_tag_name("head");
        match collection.item(0) {
            Some(head) => Ok(head),
            None => Ok(body()?),
        }
    }

    fn create(&self, element: &ResourceElement) -> Result<Element> {
        let el = self.document.create_element(&element.tag)?;
        for (name, value) in element.attributes.iter() {
            el.set_attribute(name, value)?;
        }
        Ok(el)
    }
}

#[async_trait(?Send)]
impl Document for BrowserDocument {
    fn append_to_head(&self, element: &ResourceElement) -> Result<()> {
        let el = self.create(element)?;
        self.root()?.append_child(&el)?;
        Ok(())
    }

    async fn load(&self, element: &ResourceElement) -> Result<()> {
        let el = self.create(element)?;
        let url = element.url().unwrap_or_default().to_string();

        let (sender, receiver) = oneshot::<bool>();
        let on_load = {
            let sender = sender.clone();
            callback!(move |_event: web_sys::Event| {
                sender.try_send(true).ok();
            })
        };
        let on_error = callback!(move |_event: web_sys::Event| {
            sender.try_send(false).ok();
        });
        el.add_event_listener_with_callback("load", on_load.get_fn())?;
        el.add_event_listener_with_callback("error", on_error.get_fn())?;
        self.root()?.append_child(&el)?;

        if receiver.recv().await? {
            Ok(())
        } else {
            Err(Error::ResourceLoad(url))
        }
    }

    /// Without a `parent` selector the container is placed right after the
    /// currently executing `<script>`, or appended to `<body>` when no script
    /// is executing (e.g. from an async task).
    fn insert_container(&self, parent: Option<&str>, id: &str) -> Result<()> {
        let container = self.document.create_element("div")?;
        container.set_id(id);

        if let Some(selector) = parent {
            let parent = self
                .document
                .query_selector(selector)?
                .ok_or_else(|| Error::ParentNotFound(selector.to_string()))?;
            parent.append_child(&container)?;
            return Ok(());
        }

        if let Some(script) = self.document.current_script() {
            if let Some(parent) = script.parent_node() {
                parent.insert_before(&container, script.next_sibling().as_ref())?;
                return Ok(());
            }
        }

        body()?.append_child(&container)?;
        Ok(())
    }

    fn offset_width(&self, id: &str) -> Result<Option<u32>> {
        match self.document.get_element_by_id(id) {
            Some(el) => {
                let el = el
                    .dyn_into::<HtmlElement>()
                    .map_err(|_| Error::Custom(format!("`{id}` is not an html element")))?;
                Ok(Some(el.offset_width().max(0) as u32))
            }
            None => Ok(None),
        }
    }
}
