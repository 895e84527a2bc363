//!
//! Descriptors of the external resources (scripts and stylesheets)
//! injected into the document head.
//!

use crate::error::Error;
use crate::result::Result;
use std::fmt;
use std::str::FromStr;

/// Kind of resource being injected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// JavaScript source, tag `js`
    Script,
    /// CSS stylesheet, tag `css`
    Stylesheet,
}

impl ResourceKind {
    pub fn as_tag(&self) -> &'static str {
        match self {
            ResourceKind::Script => "js",
            ResourceKind::Stylesheet => "css",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "js" => Ok(ResourceKind::Script),
            "css" => Ok(ResourceKind::Stylesheet),
            _ => Err(Error::UnsupportedResourceKind(tag.to_string())),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A resource to be injected; used once and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub filename: String,
    pub kind: ResourceKind,
}

impl Resource {
    pub fn new<S: Into<String>>(filename: S, kind: ResourceKind) -> Self {
        Self {
            filename: filename.into(),
            kind,
        }
    }

    pub fn script<S: Into<String>>(filename: S) -> Self {
        Self::new(filename, ResourceKind::Script)
    }

    pub fn stylesheet<S: Into<String>>(filename: S) -> Self {
        Self::new(filename, ResourceKind::Stylesheet)
    }

    /// Build a descriptor from a `js` / `css` tag
    pub fn parse<S: Into<String>>(filename: S, tag: &str) -> Result<Self> {
        Ok(Self::new(filename, tag.parse()?))
    }

    /// Element to append to the document head for this resource
    pub fn element(&self) -> ResourceElement {
        match self.kind {
            ResourceKind::Script => ResourceElement::new("script")
                .with_attribute("type", "text/javascript")
                .with_attribute("src", &self.filename),
            ResourceKind::Stylesheet => ResourceElement::new("link")
                .with_attribute("rel", "stylesheet")
                .with_attribute("type", "text/css")
                .with_attribute("href", &self.filename),
        }
    }
}

/// Tag name and attributes of an element, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl ResourceElement {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The URL the element loads (`src` or `href`)
    pub fn url(&self) -> Option<&str> {
        self.attribute("src").or_else(|| self.attribute("href"))
    }
}
