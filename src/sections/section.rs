//! The Section template
//!
//! A Section renders as a fixed three-part template: an optional header, the
//! block-specific body, and an optional footer, wrapped in a `<section>`
//! element whose classes and inline styles are derived from the section
//! attributes. Concrete blocks implement [`SectionContent`] and are adapted
//! into a [`BlockDefinition`] by [`Section`].

use crate::core::attribute::{AttributeBag, AttributeSchema, AttributeValue, TextMode};
use crate::core::block::{BlockDefinition, RenderContext};
use crate::core::markup::{escape_attr, escape_html, escape_url, join_classes};
use crate::core::wrapper::WrapperArgs;

use super::schema::section_schema;

/// The block-specific half of a Section
///
/// Supplies the body markup and, optionally, extra attribute declarations
/// and a visibility gate for dynamic content.
pub trait SectionContent: Send + Sync {
    /// The plugin-scoped block name
    fn name(&self) -> &str;

    /// Block-specific attribute declarations, merged over the shared
    /// section schema (block entries win on collision)
    fn schema(&self) -> AttributeSchema {
        AttributeSchema::new()
    }

    /// Produce the section body markup
    fn content(&self, bag: &AttributeBag, ctx: &RenderContext) -> String;

    /// Gate called before anything renders. Returning `false` suppresses
    /// the entire block, wrapper included. Useful to hide dynamic blocks
    /// with no content.
    fn is_content_shown(&self, bag: &AttributeBag) -> bool {
        let _ = bag;
        true
    }
}

/// Adapter turning a [`SectionContent`] into a [`BlockDefinition`] with the
/// standard section template around it
pub struct Section<T: SectionContent> {
    inner: T,
}

impl<T: SectionContent> Section<T> {
    /// Wrap a content implementation in the section template
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// The wrapped content implementation
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: SectionContent> BlockDefinition for Section<T> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn schema(&self) -> AttributeSchema {
        section_schema().merged_with(&self.inner.schema())
    }

    fn render(&self, bag: &AttributeBag, ctx: &RenderContext) -> String {
        if !self.inner.is_content_shown(bag) {
            return String::new();
        }

        let schema = self.schema();
        let mut classes: Vec<String> = Vec::new();
        let mut args = WrapperArgs::new();

        // Escaping of id/class/style is the stringifier's contract.
        if let Some(anchor) = bag.str_value("anchor") {
            args.id = Some(anchor.to_string());
        }
        if let Some(align) = schema.str_of(bag, "align") {
            classes.push(format!("align{align}"));
        }
        if schema.is_truthy(bag, "displayAsCarousel") {
            classes.push("has-carousel".to_string());
        }

        if !schema.is_truthy(bag, "sectionWrapperEnabled") {
            // Bare wrapper only; header and footer are skipped entirely.
            args.class = Some(join_classes(&classes));
            let wrapper = ctx.composer().compose(bag, args);

            let mut out = String::new();
            out.push_str(&format!("<div {wrapper}>\n"));
            out.push_str(&self.inner.content(bag, ctx));
            out.push_str("\n</div>\n");
            return out;
        }

        classes.push("section".to_string());

        let background_url = schema
            .str_of(bag, "backgroundImageUrl")
            .filter(|url| !url.is_empty());

        if background_url.is_some() {
            classes.push("has-background-image".to_string());
            classes.push("bg-cover".to_string());
        }
        if schema.is_truthy(bag, "isSectionFullHeight") {
            classes.push("is-full-height".to_string());
        }
        if schema.is_truthy(bag, "sectionHeaderShow") {
            classes.push("has-header".to_string());
        }
        if schema.is_truthy(bag, "sectionFooterShow") {
            classes.push("has-footer".to_string());
        }
        if let Some(width) = schema.str_of(bag, "sectionContentWidth") {
            classes.push(format!("has-{width}-content"));
        }
        if let Some(spacing) = schema.str_of(bag, "sectionVerticalSpacing") {
            classes.push(format!("has-{spacing}-vspacing"));
        }

        let mut styles: Vec<String> = Vec::new();
        if let Some(url) = background_url {
            styles.push(format!("background-image: url({});", escape_url(url)));
            styles.push(format!(
                "background-position: {};",
                focal_point_position(schema.value_of(bag, "backgroundImageFocalPoint"))
            ));
        }

        // The host stringifier owns the anchor in the full template; only
        // class and style travel through the composer here.
        let args = WrapperArgs {
            id: None,
            class: Some(join_classes(&classes)),
            style: if styles.is_empty() {
                None
            } else {
                Some(styles.join(" "))
            },
        };
        let wrapper = ctx.composer().compose(bag, args);

        let mut out = String::new();
        out.push_str(&format!("<section {wrapper}>\n"));
        out.push_str(&render_header(bag, &schema));
        out.push_str("<div class=\"section-body\">\n");
        out.push_str(&self.inner.content(bag, ctx));
        out.push_str("\n</div>\n");
        out.push_str(&render_footer(bag, &schema));
        out.push_str("</section>\n");
        out
    }
}

/// Convert a focal point to a CSS `background-position` value.
///
/// Coordinates are normalized to [0, 1] and scaled to percentages; a
/// missing or malformed coordinate falls back to the centered 0.5 the
/// schema defaults to.
pub fn focal_point_position(focal_point: Option<&AttributeValue>) -> String {
    let coord = |axis: &str| -> f64 {
        focal_point
            .and_then(AttributeValue::as_object)
            .and_then(|obj| obj.get(axis))
            .and_then(AttributeValue::as_number)
            .unwrap_or(0.5)
    };

    format!(
        "{}% {}%",
        format_percentage(coord("x")),
        format_percentage(coord("y"))
    )
}

/// Format a [0, 1] coordinate as a percentage, rounding away float noise
/// so `0.1` prints as `10` rather than `10.000000000000002`
fn format_percentage(value: f64) -> String {
    let scaled = (value * 100.0 * 10_000.0).round() / 10_000.0;
    format!("{scaled}")
}

/// A string attribute escaped per its schema-declared text mode, `None`
/// when absent or empty
fn text_value(bag: &AttributeBag, schema: &AttributeSchema, key: &str) -> Option<String> {
    let value = schema.str_of(bag, key).filter(|s| !s.is_empty())?;
    let mode = schema.get(key).map(|d| d.text_mode).unwrap_or_default();
    Some(match mode {
        TextMode::Plain => escape_html(value),
        TextMode::TrustedRichText => value.to_string(),
    })
}

fn render_header(bag: &AttributeBag, schema: &AttributeSchema) -> String {
    if !schema.is_truthy(bag, "sectionHeaderShow") {
        return String::new();
    }

    let style = schema.str_of(bag, "sectionHeaderStyle").unwrap_or("normal");
    let classes = join_classes(&["section-header".to_string(), format!("is-style-{style}")]);

    let mut out = String::new();
    out.push_str(&format!("<header class=\"{}\">\n", escape_attr(&classes)));
    out.push_str("<div class=\"section-header-content\">\n");

    if let Some(eyebrow) = text_value(bag, schema, "sectionEyebrow") {
        out.push_str(&format!("<p class=\"section-eyebrow\">{eyebrow}</p>\n"));
    }
    if let Some(title) = text_value(bag, schema, "sectionTitle") {
        out.push_str(&format!("<h2 class=\"section-title\">{title}</h2>\n"));
    }
    if let Some(subtitle) = text_value(bag, schema, "sectionSubtitle") {
        out.push_str(&format!("<p class=\"section-subtitle\">{subtitle}</p>\n"));
    }

    out.push_str("</div>\n");

    if schema.is_truthy(bag, "sectionCtaShow") {
        let link = schema.str_of(bag, "sectionCtaLink").unwrap_or("");
        let text = schema.str_of(bag, "sectionCtaText").unwrap_or("");
        out.push_str("<p class=\"section-cta\">\n");
        out.push_str(&format!(
            "<a class=\"section-cta-link text-button\" href=\"{}\">{}</a>\n",
            escape_url(link),
            escape_html(text)
        ));
        out.push_str("</p>\n");
    }

    out.push_str("</header>\n");
    out
}

fn render_footer(bag: &AttributeBag, schema: &AttributeSchema) -> String {
    if !schema.is_truthy(bag, "sectionFooterShow") {
        return String::new();
    }

    let alignment = schema
        .str_of(bag, "sectionFooterAlignment")
        .unwrap_or("center");
    let classes = join_classes(&[
        "section-footer".to_string(),
        format!("is-{alignment}-aligned"),
    ]);

    let mut out = String::new();
    out.push_str(&format!("<footer class=\"{}\">\n", escape_attr(&classes)));
    out.push_str("<div class=\"section-footer-content\">\n");

    if let Some(text) = text_value(bag, schema, "sectionFooterText") {
        out.push_str(&format!("<p class=\"section-footer-text\">{text}</p>\n"));
    }

    if schema.is_truthy(bag, "sectionFooterCtaShow") {
        let link = schema.str_of(bag, "sectionFooterCtaLink").unwrap_or("");
        let text = schema.str_of(bag, "sectionFooterCtaText").unwrap_or("");
        out.push_str("<div class=\"section-footer-cta\">\n");
        out.push_str(&format!(
            "<a class=\"section-footer-cta-button button\" href=\"{}\">{}</a>\n",
            escape_url(link),
            escape_html(text)
        ));
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n");
    out.push_str("</footer>\n");
    out
}
