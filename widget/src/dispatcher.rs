//!
//! Render dispatcher: creates a uniquely named container, measures it,
//! completes the payload and hands it to the map or chart renderer.
//!

use crate::config::WidgetConfig;
use crate::document::Document;
use crate::error::Error;
use crate::payload::{RenderKind, RenderPayload};
use crate::result::Result;
use crate::service::RenderService;
use workflow_log::*;

/// Container produced by a [`Dispatcher::render`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    /// Identifier returned by [`RenderService::generate_id`]
    pub guid: String,
    /// `<id_prefix>-<guid>`
    pub element_id: String,
    /// `#<element_id>`, the value written to the payload `container` field
    pub selector: String,
    pub width: u32,
    pub kind: RenderKind,
}

pub struct Dispatcher<'a, D: Document + ?Sized, S: ?Sized> {
    config: WidgetConfig,
    document: &'a D,
    service: &'a S,
}

impl<'a, D, S> Dispatcher<'a, D, S>
where
    D: Document + ?Sized,
    S: ?Sized,
{
    pub fn new(config: WidgetConfig, document: &'a D, service: &'a S) -> Self {
        Self {
            config,
            document,
            service,
        }
    }

    /// Render the payload, choosing the entry point from its `chartType`
    /// field (see [`RenderPayload::render_kind`]).
    pub fn render<P>(&self, payload: &mut P) -> Result<RenderTarget>
    where
        P: RenderPayload + ?Sized,
        S: RenderService<P>,
    {
        let kind = payload.render_kind()?;
        self.render_as(payload, kind)
    }

    /// Render the payload with an explicitly selected entry point.
    pub fn render_as<P>(&self, payload: &mut P, kind: RenderKind) -> Result<RenderTarget>
    where
        P: RenderPayload + ?Sized,
        S: RenderService<P>,
    {
        if !self.service.is_ready() {
            return Err(Error::DependencyNotReady(self.config.namespace.clone()));
        }

        let guid = self.service.generate_id()?;
        let element_id = self.config.element_id(&guid);
        if self.document.offset_width(&element_id)?.is_some() {
            return Err(Error::DuplicateTarget(element_id));
        }
        self.document
            .insert_container(self.config.parent.as_deref(), &element_id)?;
        let width = self
            .document
            .offset_width(&element_id)?
            .ok_or_else(|| Error::TargetNotAttached(element_id.clone()))?;

        let selector = format!("#{element_id}");
        payload.set_target(&selector, width, &self.config.height)?;

        log_trace!("rendering {kind:?} into `{selector}` ({width}px)");
        match kind {
            RenderKind::Map => self.service.render_map(payload)?,
            RenderKind::Chart => self.service.render_chart(payload)?,
        }

        Ok(RenderTarget {
            guid,
            element_id,
            selector,
            width,
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;
    use crate::payload::Payload;
    use crate::resource::ResourceElement;
    use async_trait::async_trait;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Recorder {
        unavailable: bool,
        fixed_id: bool,
        next: Cell<u32>,
        calls: RefCell<Vec<(RenderKind, Payload)>>,
    }

    impl Recorder {
        fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Default::default()
            }
        }

        fn repeating() -> Self {
            Self {
                fixed_id: true,
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<(RenderKind, Payload)> {
            self.calls.borrow().clone()
        }
    }

    impl RenderService for Recorder {
        fn is_ready(&self) -> bool {
            !self.unavailable
        }

        fn generate_id(&self) -> Result<String> {
            let n = self.next.get();
            if !self.fixed_id {
                self.next.set(n + 1);
            }
            Ok(format!("a1b2-{n}"))
        }

        fn render_map(&self, payload: &Payload) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((RenderKind::Map, payload.clone()));
            Ok(())
        }

        fn render_chart(&self, payload: &Payload) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((RenderKind::Chart, payload.clone()));
            Ok(())
        }
    }

    /// Accepts inserts but never attaches them
    struct Detached;

    #[async_trait(?Send)]
    impl Document for Detached {
        fn append_to_head(&self, _element: &ResourceElement) -> Result<()> {
            Ok(())
        }

        async fn load(&self, _element: &ResourceElement) -> Result<()> {
            Ok(())
        }

        fn insert_container(&self, _parent: Option<&str>, _id: &str) -> Result<()> {
            Ok(())
        }

        fn offset_width(&self, _id: &str) -> Result<Option<u32>> {
            Ok(None)
        }
    }

    fn is_container_selector(selector: &str) -> bool {
        selector
            .strip_prefix("#landportal-widget-")
            .is_some_and(|id| {
                !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
    }

    #[test]
    fn map_payload_end_to_end() {
        let doc = MemoryDocument::new(800);
        let service = Recorder::default();
        let dispatcher = Dispatcher::new(WidgetConfig::default(), &doc, &service);

        let mut payload =
            Payload::try_from_value(json!({ "chartType": null, "region": "US" })).unwrap();
        let target = dispatcher.render(&mut payload).unwrap();

        assert_eq!(payload.get("region"), Some(&json!("US")));
        assert_eq!(payload.get("chartType"), Some(&json!(null)));
        assert!(is_container_selector(payload.container().unwrap()));
        assert_eq!(payload.container(), Some(target.selector.as_str()));
        assert_eq!(target.selector, format!("#landportal-widget-{}", target.guid));
        assert_eq!(payload.height(), Some("500"));
        assert_eq!(payload.width(), Some(800));
        assert_eq!(target.kind, RenderKind::Map);

        let calls = service.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (RenderKind::Map, payload));
    }

    #[test]
    fn chart_payload_goes_to_chart_renderer() {
        let doc = MemoryDocument::new(800);
        let service = Recorder::default();
        let dispatcher = Dispatcher::new(WidgetConfig::default(), &doc, &service);

        let mut payload = Payload::try_from_value(json!({ "chartType": "bar" })).unwrap();
        let target = dispatcher.render(&mut payload).unwrap();

        assert_eq!(target.kind, RenderKind::Chart);
        let kinds: Vec<_> = service.calls().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![RenderKind::Chart]);
    }

    #[test]
    fn width_matches_the_created_element() {
        let doc = MemoryDocument::new(1200).with_parent("#widgets", 360);
        let service = Recorder::default();
        let config = WidgetConfig::default().with_parent("#widgets");
        let dispatcher = Dispatcher::new(config, &doc, &service);

        let mut payload = Payload::new();
        let target = dispatcher.render(&mut payload).unwrap();

        assert_eq!(doc.offset_width(&target.element_id).unwrap(), Some(360));
        assert_eq!(payload.width(), Some(360));
        assert_eq!(doc.containers()[0].parent, "#widgets");
    }

    #[test]
    fn sequential_renders_create_distinct_containers() {
        let doc = MemoryDocument::new(640);
        let service = Recorder::default();
        let dispatcher = Dispatcher::new(WidgetConfig::default(), &doc, &service);

        let mut first = Payload::try_from_value(json!({ "indicator": "WB-SP.RUR.TOTL" })).unwrap();
        let mut second = first.clone();
        let a = dispatcher.render(&mut first).unwrap();
        let b = dispatcher.render(&mut second).unwrap();

        assert_ne!(a.element_id, b.element_id);
        assert_ne!(first.container(), second.container());
        let containers = doc.containers();
        assert_eq!(containers.len(), 2);
        assert_ne!(containers[0].id, containers[1].id);
    }

    #[test]
    fn explicit_kind_overrides_chart_type() {
        let doc = MemoryDocument::new(640);
        let service = Recorder::default();
        let dispatcher = Dispatcher::new(WidgetConfig::default(), &doc, &service);

        let mut payload = Payload::try_from_value(json!({ "chartType": "pie" })).unwrap();
        dispatcher.render_as(&mut payload, RenderKind::Map).unwrap();
        assert_eq!(service.calls()[0].0, RenderKind::Map);
    }

    #[test]
    fn library_not_ready_fails_before_touching_the_document() {
        let doc = MemoryDocument::new(640);
        let service = Recorder::unavailable();
        let dispatcher = Dispatcher::new(WidgetConfig::default(), &doc, &service);

        let mut payload = Payload::new();
        match dispatcher.render(&mut payload) {
            Err(Error::DependencyNotReady(ns)) => assert_eq!(ns, "wesCountry"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(doc.containers().is_empty());
        assert_eq!(payload, Payload::new());
        assert!(service.calls().is_empty());
    }

    #[test]
    fn detached_target_is_reported() {
        let service = Recorder::default();
        let dispatcher = Dispatcher::new(WidgetConfig::default(), &Detached, &service);

        let mut payload = Payload::new();
        match dispatcher.render(&mut payload) {
            Err(Error::TargetNotAttached(id)) => assert_eq!(id, "landportal-widget-a1b2-0"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(payload.container().is_none());
        assert!(service.calls().is_empty());
    }

    #[test]
    fn missing_parent_is_reported() {
        let doc = MemoryDocument::new(640);
        let service = Recorder::default();
        let config = WidgetConfig::default().with_parent("#nowhere");
        let dispatcher = Dispatcher::new(config, &doc, &service);

        let err = dispatcher.render(&mut Payload::new()).unwrap_err();
        assert!(matches!(err, Error::ParentNotFound(s) if s == "#nowhere"));
    }

    #[test]
    fn repeated_guid_does_not_create_a_second_container() {
        let doc = MemoryDocument::new(640);
        let service = Recorder::repeating();
        let dispatcher = Dispatcher::new(WidgetConfig::default(), &doc, &service);

        dispatcher.render(&mut Payload::new()).unwrap();
        let mut second = Payload::try_from_value(json!({ "chartType": "bar" })).unwrap();
        match dispatcher.render(&mut second) {
            Err(Error::DuplicateTarget(id)) => assert_eq!(id, "landportal-widget-a1b2-0"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(doc.containers().len(), 1);
        assert!(second.container().is_none());
        assert_eq!(service.calls().len(), 1);
    }

    /// Remembers the address of the object it was handed
    #[derive(Default)]
    struct Seen(Cell<usize>);

    impl RenderService for Seen {
        fn generate_id(&self) -> Result<String> {
            Ok("seen".to_string())
        }

        fn render_map(&self, payload: &Payload) -> Result<()> {
            self.0.set(payload as *const Payload as usize);
            Ok(())
        }

        fn render_chart(&self, payload: &Payload) -> Result<()> {
            self.render_map(payload)
        }
    }

    #[test]
    fn renderer_receives_the_callers_object() {
        let doc = MemoryDocument::new(640);
        let service = Seen::default();
        let dispatcher = Dispatcher::new(WidgetConfig::default(), &doc, &service);

        let mut payload = Payload::try_from_value(json!({
            "chartType": "line",
            "series": [{ "name": "US", "values": [1.5, null, 3] }],
            "options": { "legend": { "show": false } }
        }))
        .unwrap();
        let original = payload.clone();
        dispatcher.render(&mut payload).unwrap();

        assert_eq!(service.0.get(), &payload as *const Payload as usize);
        for key in ["chartType", "series", "options"] {
            assert_eq!(payload.get(key), original.get(key));
        }
    }

    /// Payload refusing writes, like a frozen JS object
    struct Frozen(Payload);

    impl RenderPayload for Frozen {
        fn render_kind(&self) -> Result<RenderKind> {
            self.0.render_kind()
        }

        fn set_target(&mut self, _selector: &str, _width: u32, _height: &str) -> Result<()> {
            Err(Error::PayloadNotWritable(crate::payload::CONTAINER.to_string()))
        }
    }

    impl RenderService<Frozen> for Recorder {
        fn is_ready(&self) -> bool {
            <Self as RenderService>::is_ready(self)
        }

        fn generate_id(&self) -> Result<String> {
            <Self as RenderService>::generate_id(self)
        }

        fn render_map(&self, payload: &Frozen) -> Result<()> {
            <Self as RenderService>::render_map(self, &payload.0)
        }

        fn render_chart(&self, payload: &Frozen) -> Result<()> {
            <Self as RenderService>::render_chart(self, &payload.0)
        }
    }

    #[test]
    fn unwritable_payload_is_not_rendered() {
        let doc = MemoryDocument::new(640);
        let service = Recorder::default();
        let dispatcher = Dispatcher::new(WidgetConfig::default(), &doc, &service);

        let err = dispatcher.render(&mut Frozen(Payload::new())).unwrap_err();
        assert!(matches!(err, Error::PayloadNotWritable(field) if field == "container"));
        assert!(service.calls().is_empty());
    }
}
