//! Block definition contract
//!
//! The [`BlockDefinition`] trait is the polymorphic unit everything else
//! operates on: a plugin-scoped name, a declared attribute schema, and a
//! render function. [`RenderContext`] bundles the collaborators a render
//! call needs so the trait implementations stay free of ambient state.

use std::sync::Arc;

use super::attribute::{AttributeBag, AttributeSchema};
use super::hooks::{attributes_hook, Filters};
use super::wrapper::WrapperComposer;

/// A named, independently renderable content unit
///
/// `render` must be a total function of the bag: no mutation of the bag, no
/// external state reads besides the bag and the declared hooks, and a
/// self-contained markup fragment as the result.
pub trait BlockDefinition: Send + Sync {
    /// The plugin-scoped block name (without the registry prefix)
    fn name(&self) -> &str;

    /// The declared attribute schema, before hook augmentation.
    ///
    /// External code augments the schema through the per-block attributes
    /// hook; see [`RenderContext::effective_schema`].
    fn schema(&self) -> AttributeSchema;

    /// Produce the block's markup for one attribute bag
    fn render(&self, bag: &AttributeBag, ctx: &RenderContext) -> String;
}

/// Collaborators available to a render call
///
/// Holds the wrapper composer and the schema filter table, both scoped by
/// the owning registry's slug.
#[derive(Clone)]
pub struct RenderContext {
    composer: Arc<WrapperComposer>,
    schema_filters: Arc<Filters<AttributeSchema>>,
}

impl RenderContext {
    /// Create a context around a wrapper composer
    pub fn new(composer: Arc<WrapperComposer>) -> Self {
        Self {
            composer,
            schema_filters: Arc::new(Filters::new()),
        }
    }

    /// The wrapper-attribute composer
    pub fn composer(&self) -> &WrapperComposer {
        &self.composer
    }

    /// The schema filter table, for registering attribute augmentations.
    ///
    /// Hooks are named per block: see
    /// [`attributes_hook`](super::hooks::attributes_hook).
    pub fn schema_filters(&self) -> &Arc<Filters<AttributeSchema>> {
        &self.schema_filters
    }

    /// A block's schema after the per-block-name attributes hook.
    ///
    /// This is the schema handed to the host at registration, so external
    /// code can add or override attribute declarations without subclassing.
    pub fn effective_schema(&self, block: &dyn BlockDefinition) -> AttributeSchema {
        let hook = attributes_hook(self.composer.slug(), block.name());
        self.schema_filters.apply(&hook, block.schema())
    }
}

/// The conventional root CSS class for the block being rendered, derived
/// from the qualified name the registry injected into the bag:
/// `acme/hero` becomes `block-acme-hero`. `None` when the bag carries no
/// block name.
pub fn block_css_class(bag: &AttributeBag) -> Option<String> {
    bag.block_name()
        .map(|name| format!("block-{}", name.replace('/', "-")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attribute::BLOCK_NAME_ATTR;

    #[test]
    fn test_block_css_class_from_qualified_name() {
        let bag = AttributeBag::new().with(BLOCK_NAME_ATTR, "acme/hero");
        assert_eq!(block_css_class(&bag), Some("block-acme-hero".to_string()));
    }

    #[test]
    fn test_block_css_class_missing_name() {
        assert_eq!(block_css_class(&AttributeBag::new()), None);
    }
}
