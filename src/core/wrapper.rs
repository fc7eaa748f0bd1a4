//! Wrapper-attribute composition
//!
//! Derives CSS classes for editor-controlled color attributes, merges them
//! into the caller-supplied wrapper arguments, applies the per-block
//! wrapper-args hook, and delegates the final HTML attribute string to the
//! host's stringifier.

use std::sync::Arc;

use super::attribute::AttributeBag;
use super::hooks::{wrapper_args_hook, Filters};
use super::host::WrapperAttributeWriter;
use super::markup::join_classes;

/// Wrapper argument set: the reserved `id`/`class`/`style` keys
///
/// `class` and `style` are free-form strings built by concatenation at the
/// point they leave this crate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrapperArgs {
    /// Element id
    pub id: Option<String>,
    /// Space-joined class string
    pub class: Option<String>,
    /// Inline style string
    pub style: Option<String>,
}

impl WrapperArgs {
    /// Create an empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the class string
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the style string
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Append class tokens to the existing class string.
    ///
    /// Appends with a single separating space when a class is already set,
    /// otherwise becomes the class string with no leading space.
    pub fn append_classes<S: AsRef<str>>(&mut self, classes: &[S]) {
        if classes.is_empty() {
            return;
        }
        let joined = join_classes(classes);
        self.class = Some(match self.class.take() {
            Some(existing) => format!("{existing} {joined}"),
            None => joined,
        });
    }
}

/// Which color class wins when both a gradient and a flat background color
/// are present.
///
/// The two orders were both shipped at different points; gradient-wins is
/// the canonical default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorClassPrecedence {
    /// A gradient suppresses the flat background-color class
    #[default]
    GradientWins,
    /// A flat background color suppresses the gradient class
    BackgroundColorWins,
}

/// Derive color classes from the bag's color attributes.
///
/// Emission order is fixed: the gradient-or-background class, then the
/// text-color class, then the generic `has-background` marker. Presence,
/// not truthiness, governs whether a color attribute participates.
pub fn color_classes(bag: &AttributeBag, precedence: ColorClassPrecedence) -> Vec<String> {
    let background = bag.str_value("backgroundColor");
    let gradient = bag.str_value("gradient");
    let text = bag.str_value("textColor");

    let mut classes = Vec::new();

    let gradient_class = gradient.map(|g| format!("has-{g}-gradient-background"));
    let background_class = background.map(|b| format!("has-{b}-background-color"));
    let primary = match precedence {
        ColorClassPrecedence::GradientWins => gradient_class.or(background_class),
        ColorClassPrecedence::BackgroundColorWins => background_class.or(gradient_class),
    };
    if let Some(class) = primary {
        classes.push(class);
    }

    if let Some(text) = text {
        classes.push(format!("has-{text}-color"));
    }

    if background.is_some() || gradient.is_some() {
        classes.push("has-background".to_string());
    }

    classes
}

/// Composes the final wrapper-attribute string for a block's root element
///
/// Owns the crate-side half of the job (color classes, class merging, the
/// wrapper-args hook) and delegates serialization to the injected host
/// stringifier.
pub struct WrapperComposer {
    slug: String,
    precedence: ColorClassPrecedence,
    filters: Arc<Filters<WrapperArgs>>,
    writer: Arc<dyn WrapperAttributeWriter>,
}

impl WrapperComposer {
    /// Create a composer scoped by `slug`, delegating to `writer`
    pub fn new(slug: impl Into<String>, writer: Arc<dyn WrapperAttributeWriter>) -> Self {
        Self {
            slug: slug.into(),
            precedence: ColorClassPrecedence::default(),
            filters: Arc::new(Filters::new()),
            writer,
        }
    }

    /// Override the color-class precedence
    pub fn with_precedence(mut self, precedence: ColorClassPrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// The wrapper-args filter table, for registering overrides.
    ///
    /// Hooks are named per block: see
    /// [`wrapper_args_hook`](super::hooks::wrapper_args_hook).
    pub fn filters(&self) -> &Arc<Filters<WrapperArgs>> {
        &self.filters
    }

    /// The slug scoping this composer's hook names
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Compose the wrapper-attribute string for one render.
    ///
    /// Derives color classes from `bag`, merges them into `args`, applies
    /// the per-block wrapper-args hook (keyed by the name the registry
    /// injected into the bag), and hands the result to the host
    /// stringifier. Total over well-formed input; the only side effects
    /// are whatever the hook callbacks do.
    pub fn compose(&self, bag: &AttributeBag, mut args: WrapperArgs) -> String {
        args.append_classes(&color_classes(bag, self.precedence));

        let hook = wrapper_args_hook(&self.slug, bag.block_name().unwrap_or_default());
        let args = self.filters.apply(&hook, args);

        self.writer.stringify(&args)
    }
}
