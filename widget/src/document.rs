//!
//! [`Document`] trait abstracting the DOM operations performed by the
//! [`Injector`](crate::injector::Injector) and the
//! [`Dispatcher`](crate::dispatcher::Dispatcher).
//!
//! The browser implementation lives in [`crate::browser`] (wasm32 only),
//! a headless implementation is provided by [`crate::memory::MemoryDocument`].
//!

use crate::resource::ResourceElement;
use crate::result::Result;
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Document {
    /// Append an element to the document head without waiting for it to load.
    fn append_to_head(&self, element: &ResourceElement) -> Result<()>;

    /// Append an element to the document head and resolve once the
    /// host reports the `load` event for it.
    async fn load(&self, element: &ResourceElement) -> Result<()>;

    /// Create an empty block container with the given element id.
    ///
    /// With `parent` set the container is appended to the first element
    /// matching that selector. Without it the implementation picks its
    /// default location.
    fn insert_container(&self, parent: Option<&str>, id: &str) -> Result<()>;

    /// Rendered width of the element with the given id, `None` when no
    /// such element is attached.
    fn offset_width(&self, id: &str) -> Result<Option<u32>>;
}
