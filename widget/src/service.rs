//!
//! [`RenderService`] capability handed to the
//! [`Dispatcher`](crate::dispatcher::Dispatcher): id generation plus the
//! map and chart entry points of the rendering library.
//!

use crate::payload::Payload;
use crate::result::Result;

/// Rendering library accepting payloads of type `P`
pub trait RenderService<P: ?Sized = Payload> {
    /// `true` once the library is available. The dispatcher refuses to
    /// touch the document while this returns `false`.
    fn is_ready(&self) -> bool {
        true
    }

    /// Globally unique identifier used to name a container
    fn generate_id(&self) -> Result<String>;

    fn render_map(&self, payload: &P) -> Result<()>;

    fn render_chart(&self, payload: &P) -> Result<()>;
}
