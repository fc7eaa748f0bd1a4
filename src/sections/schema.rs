//! The shared Section attribute schema
//!
//! Declared once and merged under every Section block's own schema;
//! block-specific entries win on key collision.

use indexmap::IndexMap;

use crate::core::attribute::{
    AttributeDescriptor, AttributeSchema, AttributeType, AttributeValue,
};

fn object(entries: &[(&str, AttributeValue)]) -> AttributeValue {
    AttributeValue::Object(
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect::<IndexMap<_, _>>(),
    )
}

/// The base schema shared by every Section block: alignment and anchor,
/// the wrapper toggle, background image fields, sizing and spacing, and
/// the header/footer sub-fields.
pub fn section_schema() -> AttributeSchema {
    use AttributeType::{Boolean, Object, String};

    AttributeSchema::new()
        .declare(
            "align",
            AttributeDescriptor::new(String).with_default("full"),
        )
        .declare("anchor", AttributeDescriptor::new(String))
        .declare(
            "sectionWrapperEnabled",
            AttributeDescriptor::new(Boolean).with_default(true),
        )
        .declare("backgroundImageId", AttributeDescriptor::new(String))
        .declare("backgroundImageUrl", AttributeDescriptor::new(String))
        .declare(
            "backgroundImageFocalPoint",
            AttributeDescriptor::new(Object).with_default(object(&[
                ("x", AttributeValue::Number(0.5)),
                ("y", AttributeValue::Number(0.5)),
            ])),
        )
        .declare(
            "backgroundImageDimensions",
            AttributeDescriptor::new(Object).with_default(object(&[
                ("width", AttributeValue::Integer(0)),
                ("height", AttributeValue::Integer(0)),
            ])),
        )
        .declare(
            "isSectionFullHeight",
            AttributeDescriptor::new(Boolean).with_default(false),
        )
        .declare(
            "sectionContentWidth",
            AttributeDescriptor::new(String).with_default("page-width"),
        )
        .declare(
            "sectionVerticalSpacing",
            AttributeDescriptor::new(String).with_default("normal"),
        )
        .declare(
            "sectionHeaderShow",
            AttributeDescriptor::new(Boolean).with_default(false),
        )
        .declare(
            "sectionHeaderStyle",
            AttributeDescriptor::new(String).with_default("normal"),
        )
        .declare("sectionEyebrow", AttributeDescriptor::new(String))
        .declare(
            "sectionTitle",
            AttributeDescriptor::new(String).rich_text(),
        )
        .declare(
            "sectionSubtitle",
            AttributeDescriptor::new(String).rich_text(),
        )
        .declare(
            "sectionCtaShow",
            AttributeDescriptor::new(Boolean).with_default(false),
        )
        .declare("sectionCtaText", AttributeDescriptor::new(String))
        .declare("sectionCtaLink", AttributeDescriptor::new(String))
        .declare(
            "sectionFooterShow",
            AttributeDescriptor::new(Boolean).with_default(false),
        )
        .declare(
            "sectionFooterAlignment",
            AttributeDescriptor::new(String).with_default("center"),
        )
        .declare(
            "sectionFooterText",
            AttributeDescriptor::new(String).rich_text(),
        )
        .declare(
            "sectionFooterCtaShow",
            AttributeDescriptor::new(Boolean).with_default(false),
        )
        .declare("sectionFooterCtaText", AttributeDescriptor::new(String))
        .declare("sectionFooterCtaLink", AttributeDescriptor::new(String))
}
