//!
//! Headless [`Document`] keeping the head and the widget containers
//! in memory. Block containers take the width of their parent, which
//! is declared up front with [`MemoryDocument::with_parent`].
//!

use crate::document::Document;
use crate::error::Error;
use crate::resource::ResourceElement;
use crate::result::Result;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

pub const BODY: &str = "body";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryContainer {
    pub id: String,
    pub parent: String,
}

#[derive(Default)]
struct Inner {
    head: Vec<ResourceElement>,
    parents: HashMap<String, u32>,
    containers: Vec<MemoryContainer>,
    loaded: Vec<String>,
    broken: HashSet<String>,
}

pub struct MemoryDocument {
    inner: RefCell<Inner>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new(0)
    }
}

impl MemoryDocument {
    /// Create a document whose `body` is `body_width` pixels wide
    pub fn new(body_width: u32) -> Self {
        let mut inner = Inner::default();
        inner.parents.insert(BODY.to_string(), body_width);
        Self {
            inner: RefCell::new(inner),
        }
    }

    /// Declare an element matching `selector` with the given width
    pub fn with_parent(self, selector: &str, width: u32) -> Self {
        self.inner
            .borrow_mut()
            .parents
            .insert(selector.to_string(), width);
        self
    }

    /// Make [`Document::load`] fail for the given URL
    pub fn with_broken_url(self, url: &str) -> Self {
        self.inner.borrow_mut().broken.insert(url.to_string());
        self
    }

    /// Seed the head with an element, as if present in the page markup
    pub fn push_head(&self, element: ResourceElement) {
        self.inner.borrow_mut().head.push(element);
    }

    pub fn head(&self) -> Vec<ResourceElement> {
        self.inner.borrow().head.clone()
    }

    pub fn containers(&self) -> Vec<MemoryContainer> {
        self.inner.borrow().containers.clone()
    }

    /// URLs whose `load` completed, in completion order
    pub fn loaded(&self) -> Vec<String> {
        self.inner.borrow().loaded.clone()
    }
}

#[async_trait(?Send)]
impl Document for MemoryDocument {
    fn append_to_head(&self, element: &ResourceElement) -> Result<()> {
        self.inner.borrow_mut().head.push(element.clone());
        Ok(())
    }

    async fn load(&self, element: &ResourceElement) -> Result<()> {
        self.append_to_head(element)?;
        let url = element.url().unwrap_or_default().to_string();
        let mut inner = self.inner.borrow_mut();
        if inner.broken.contains(&url) {
            return Err(Error::ResourceLoad(url));
        }
        inner.loaded.push(url);
        Ok(())
    }

    fn insert_container(&self, parent: Option<&str>, id: &str) -> Result<()> {
        let parent = parent.unwrap_or(BODY);
        let mut inner = self.inner.borrow_mut();
        if !inner.parents.contains_key(parent) {
            return Err(Error::ParentNotFound(parent.to_string()));
        }
        inner.containers.push(MemoryContainer {
            id: id.to_string(),
            parent: parent.to_string(),
        });
        Ok(())
    }

    fn offset_width(&self, id: &str) -> Result<Option<u32>> {
        let inner = self.inner.borrow();
        let width = inner
            .containers
            .iter()
            .find(|container| container.id == id)
            .and_then(|container| inner.parents.get(&container.parent).copied());
        Ok(width)
    }
}
