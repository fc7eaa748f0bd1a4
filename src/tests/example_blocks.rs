//! Fixture blocks and a recording host shared across the test suite

use std::sync::{Arc, Mutex};

use crate::core::attribute::{
    AttributeBag, AttributeDescriptor, AttributeSchema, AttributeType,
};
use crate::core::block::{BlockDefinition, RenderContext};
use crate::core::host::{BlockHost, PlainAttributeWriter};
use crate::core::registry::BlockRegistration;
use crate::core::wrapper::WrapperComposer;
use crate::sections::SectionContent;

/// A section body that renders a fixed paragraph
pub struct HeroContent;

impl SectionContent for HeroContent {
    fn name(&self) -> &str {
        "hero"
    }

    fn schema(&self) -> AttributeSchema {
        AttributeSchema::new().declare(
            "heroKicker",
            AttributeDescriptor::new(AttributeType::String),
        )
    }

    fn content(&self, _bag: &AttributeBag, _ctx: &RenderContext) -> String {
        "<p class=\"hero-body\">Hero body</p>".to_string()
    }
}

/// A section body gated on a `items` attribute being non-empty
pub struct ListingContent;

impl SectionContent for ListingContent {
    fn name(&self) -> &str {
        "listing"
    }

    fn content(&self, bag: &AttributeBag, _ctx: &RenderContext) -> String {
        let count = bag
            .resolve("items")
            .and_then(|v| v.as_array())
            .map(Vec::len)
            .unwrap_or(0);
        format!("<p>{count} items</p>")
    }

    fn is_content_shown(&self, bag: &AttributeBag) -> bool {
        bag.is_truthy("items")
    }
}

/// A plain (non-section) block definition
pub struct PlainBlock;

impl BlockDefinition for PlainBlock {
    fn name(&self) -> &str {
        "plain"
    }

    fn schema(&self) -> AttributeSchema {
        AttributeSchema::new().declare(
            "message",
            AttributeDescriptor::new(AttributeType::String).with_default("hi"),
        )
    }

    fn render(&self, bag: &AttributeBag, _ctx: &RenderContext) -> String {
        let schema = self.schema();
        format!(
            "<p>{}</p>",
            schema.str_of(bag, "message").unwrap_or_default()
        )
    }
}

/// Records every host call for assertions
#[derive(Default)]
pub struct RecordingHost {
    pub registered: Mutex<Vec<String>>,
    pub enqueued: Mutex<Vec<(String, String, Vec<String>)>>,
    pub translations: Mutex<Vec<(String, String, String)>>,
}

impl BlockHost for RecordingHost {
    fn register_block_type(&self, qualified_name: &str, _registration: &BlockRegistration) {
        self.registered.lock().unwrap().push(qualified_name.to_string());
    }

    fn enqueue_script(
        &self,
        handle: &str,
        url: &str,
        deps: &[String],
        _version: &str,
        _defer: bool,
    ) {
        self.enqueued
            .lock()
            .unwrap()
            .push((handle.to_string(), url.to_string(), deps.to_vec()));
    }

    fn set_script_translations(&self, handle: &str, domain: &str, path: &str) {
        self.translations.lock().unwrap().push((
            handle.to_string(),
            domain.to_string(),
            path.to_string(),
        ));
    }
}

/// A render context over the plain writer, scoped by the `acme` slug
pub fn test_context() -> RenderContext {
    RenderContext::new(Arc::new(WrapperComposer::new(
        "acme",
        Arc::new(PlainAttributeWriter),
    )))
}
