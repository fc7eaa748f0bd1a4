//! Host framework collaborators
//!
//! The host block-editor framework is consumed through these narrow traits
//! and never reimplemented here. Production code hands in adapters over the
//! real framework APIs; tests hand in recording fakes.

use super::markup::escape_attr;
use super::registry::BlockRegistration;
use super::wrapper::WrapperArgs;

/// Host block-registration and asset APIs
///
/// The registry drives these at the host's lifecycle stages: block-type
/// registration first, then editor-script enqueueing.
pub trait BlockHost: Send + Sync {
    /// Register a block type under its qualified `<prefix>/<name>` name
    fn register_block_type(&self, qualified_name: &str, registration: &BlockRegistration);

    /// Enqueue a script with its dependency handles
    fn enqueue_script(&self, handle: &str, url: &str, deps: &[String], version: &str, defer: bool);

    /// Register the translation catalog for an enqueued script
    fn set_script_translations(&self, handle: &str, domain: &str, path: &str);
}

/// Host wrapper-attribute stringifier
///
/// Given the composed `id`/`class`/`style` arguments, produces the final
/// HTML attribute string, including any attributes the host injects on its
/// own (block-support classes, anchors from block supports, and so on).
pub trait WrapperAttributeWriter: Send + Sync {
    /// Render the wrapper arguments as an HTML attribute string
    fn stringify(&self, args: &WrapperArgs) -> String;
}

/// Plain wrapper-attribute writer
///
/// Serializes `id`, `class` and `style` with attribute escaping and nothing
/// else. Stands in for the host's stringifier in tests and host-less
/// rendering; a real host adapter would also merge the attributes the
/// framework injects independently.
#[derive(Debug, Clone, Default)]
pub struct PlainAttributeWriter;

impl WrapperAttributeWriter for PlainAttributeWriter {
    fn stringify(&self, args: &WrapperArgs) -> String {
        let mut parts = Vec::new();
        if let Some(id) = args.id.as_deref() {
            parts.push(format!("id=\"{}\"", escape_attr(id)));
        }
        if let Some(class) = args.class.as_deref() {
            parts.push(format!("class=\"{}\"", escape_attr(class)));
        }
        if let Some(style) = args.style.as_deref() {
            parts.push(format!("style=\"{}\"", escape_attr(style)));
        }
        parts.join(" ")
    }
}
