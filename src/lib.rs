//! Block Support - convenience layer for server-rendered content blocks
//!
//! This crate reduces the boilerplate a plugin carries when it ships
//! server-rendered blocks for a block-editor host framework: declaring
//! attribute schemas with defaults, composing wrapper classes and styles
//! from editor-controlled color attributes, registering blocks and their
//! editor scripts at the host's lifecycle stages, and a reusable Section
//! layout template (header, body, footer, background image, spacing).
//!
//! The host framework itself is consumed through narrow traits
//! ([`core::host`]); nothing here talks to a running host directly, which
//! keeps the whole crate testable in isolation.

pub mod core;
pub mod sections;
mod tests;

// Re-export commonly used types
pub use crate::core::attribute::{
    AttributeBag, AttributeDescriptor, AttributeSchema, AttributeType, AttributeValue, TextMode,
    BLOCK_NAME_ATTR,
};
pub use crate::core::block::{block_css_class, BlockDefinition, RenderContext};
pub use crate::core::hooks::{stage, Actions, Filters, DEFAULT_PRIORITY};
pub use crate::core::host::{BlockHost, PlainAttributeWriter, WrapperAttributeWriter};
pub use crate::core::registry::{
    BlockRegistration, BlockRegistry, RegistryConfig, RegistryError, RenderPayload,
};
pub use crate::core::wrapper::{ColorClassPrecedence, WrapperArgs, WrapperComposer};
pub use crate::sections::{section_schema, Section, SectionContent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
