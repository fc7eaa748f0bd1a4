//! Block registry
//!
//! Maintains the mapping from block name to registration arguments for one
//! host plugin, registers each block with the host framework at the
//! block-registration lifecycle stage, and enqueues editor scripts at the
//! asset stage. The map is populated at process start-up and read-only on
//! the per-request render path.

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, warn};

use super::attribute::{AttributeBag, AttributeSchema, AttributeValue, BLOCK_NAME_ATTR};
use super::block::{BlockDefinition, RenderContext};
use super::hooks::{stage, Actions};
use super::host::BlockHost;
use super::markup::trim_trailing_slash;

/// Script handles every block's editor script depends on unless its
/// registration overrides the list.
pub const DEFAULT_SCRIPT_DEPENDENCIES: &[&str] =
    &["blocks", "components", "element", "i18n", "block-editor"];

/// Default priority for the lifecycle stage callbacks
const DEFAULT_LOAD_PRIORITY: i32 = 99;

/// Registry errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The block name prefix is required static configuration; an empty
    /// prefix is a programmer error surfaced at construction time.
    #[error("block name prefix is not configured")]
    MissingPrefix,
}

/// Static configuration for a block registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Plugin-scoped prefix; blocks register as `<prefix>/<name>`
    pub prefix: String,
    /// Base URL editor scripts are served from; `<base>/<name>.js`
    pub assets_base_url: String,
    /// Version string passed through to script enqueueing
    pub version: String,
    /// Translation domain for editor scripts
    pub text_domain: String,
    /// Path to the translation catalogs
    pub translations_path: String,
    /// Dependencies merged ahead of the default set for every block
    pub extra_script_dependencies: Vec<String>,
    /// Priority of the block-registration stage callback
    pub load_priority: i32,
    /// Priority of the asset-enqueue stage callback
    pub asset_load_priority: i32,
    /// Whether editor scripts are enqueued with the defer flag
    pub defer_scripts: bool,
}

impl RegistryConfig {
    /// Create a configuration with the given prefix and defaults for
    /// everything else
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            assets_base_url: String::new(),
            version: String::new(),
            text_domain: String::new(),
            translations_path: String::new(),
            extra_script_dependencies: Vec::new(),
            load_priority: DEFAULT_LOAD_PRIORITY,
            asset_load_priority: DEFAULT_LOAD_PRIORITY,
            defer_scripts: false,
        }
    }

    /// Set the assets base URL
    pub fn with_assets_base_url(mut self, url: impl Into<String>) -> Self {
        self.assets_base_url = url.into();
        self
    }

    /// Set the version string
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the translation domain and catalog path
    pub fn with_translations(
        mut self,
        domain: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        self.text_domain = domain.into();
        self.translations_path = path.into();
        self
    }

    /// Add script dependencies merged ahead of the default set
    pub fn with_extra_script_dependencies(mut self, deps: Vec<String>) -> Self {
        self.extra_script_dependencies = deps;
        self
    }

    /// Set the lifecycle stage priorities
    pub fn with_priorities(mut self, load: i32, assets: i32) -> Self {
        self.load_priority = load;
        self.asset_load_priority = assets;
        self
    }
}

/// Registration arguments for one block
///
/// Immutable once handed to the host's registration call.
#[derive(Clone, Default)]
pub struct BlockRegistration {
    /// Attribute schema registered with the host
    pub attributes: Option<AttributeSchema>,
    /// Per-block override of the editor-script dependency list
    pub script_dependencies: Option<Vec<String>>,
    /// Server-side render callback; blocks without one render client-side
    pub render: Option<Arc<dyn BlockDefinition>>,
    /// Host-specific passthrough options
    pub options: serde_json::Map<String, JsonValue>,
}

impl BlockRegistration {
    /// Create an empty registration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registered attribute schema
    pub fn with_attributes(mut self, attributes: AttributeSchema) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Override the script dependency list for this block
    pub fn with_script_dependencies(mut self, deps: Vec<String>) -> Self {
        self.script_dependencies = Some(deps);
        self
    }

    /// Set the server-side render callback
    pub fn with_render(mut self, render: Arc<dyn BlockDefinition>) -> Self {
        self.render = Some(render);
        self
    }

    /// Set a host-specific passthrough option
    pub fn with_option(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.options.insert(key.into(), value);
        self
    }
}

/// The unit of a host render call: the qualified block name plus the
/// attribute bag for one content instance, named as the host sends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPayload {
    /// Qualified block name, `<prefix>/<name>`
    #[serde(rename = "blockName")]
    pub block_name: String,
    /// Attribute bag for this instance
    #[serde(rename = "attrs", default)]
    pub attributes: AttributeBag,
}

impl RenderPayload {
    /// Create a payload
    pub fn new(block_name: impl Into<String>, attributes: AttributeBag) -> Self {
        Self {
            block_name: block_name.into(),
            attributes,
        }
    }
}

/// Block registry for one host plugin
///
/// Composed by reference into whatever plugin object needs it, not
/// inherited. Cloning yields another handle onto the same registry, so the
/// lifecycle callbacks can hold one. Insertion order is preserved through
/// to registration.
#[derive(Clone)]
pub struct BlockRegistry {
    config: Arc<RegistryConfig>,
    blocks: Arc<RwLock<IndexMap<String, BlockRegistration>>>,
}

impl BlockRegistry {
    /// Create a registry, failing fast on invalid configuration
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        if config.prefix.trim().is_empty() {
            return Err(RegistryError::MissingPrefix);
        }
        Ok(Self {
            config: Arc::new(config),
            blocks: Arc::new(RwLock::new(IndexMap::new())),
        })
    }

    /// The registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Add a block.
    ///
    /// A later call with the same name replaces the earlier registration
    /// arguments and keeps the original position in registration order.
    pub fn add_block(&self, name: impl Into<String>, registration: BlockRegistration) {
        self.blocks.write().insert(name.into(), registration);
    }

    /// Add a block only when `condition` holds, for gating on an optional
    /// capability or sibling plugin
    pub fn add_block_if(
        &self,
        condition: bool,
        name: impl Into<String>,
        registration: BlockRegistration,
    ) {
        if condition {
            self.add_block(name, registration);
        }
    }

    /// Add a block definition, registering its hook-filtered schema and
    /// itself as the render callback
    pub fn add_block_definition(&self, block: Arc<dyn BlockDefinition>, ctx: &RenderContext) {
        let registration = BlockRegistration::new()
            .with_attributes(ctx.effective_schema(block.as_ref()))
            .with_render(Arc::clone(&block));
        self.add_block(block.name().to_string(), registration);
    }

    /// Remove a block; no-op when the name is unknown
    pub fn remove_block(&self, name: &str) {
        self.blocks.write().shift_remove(name);
    }

    /// Whether a block is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.read().contains_key(name)
    }

    /// A copy of the registration arguments stored under `name`
    pub fn registration(&self, name: &str) -> Option<BlockRegistration> {
        self.blocks.read().get(name).cloned()
    }

    /// Registered block names in registration order
    pub fn block_names(&self) -> Vec<String> {
        self.blocks.read().keys().cloned().collect()
    }

    /// Number of registered blocks
    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    /// Whether no blocks are registered
    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }

    /// The qualified name a block registers under
    pub fn qualified_name(&self, name: &str) -> String {
        format!("{}/{}", self.config.prefix, name)
    }

    /// Register every block with the host framework.
    ///
    /// Invoked once per process at the host's block-registration stage;
    /// re-invocation re-registers and idempotency is the host's concern.
    pub fn register_blocks(&self, host: &dyn BlockHost) {
        let blocks = self.blocks.read();
        for (name, registration) in blocks.iter() {
            let qualified = self.qualified_name(name);
            debug!(block = %qualified, "registering block type");
            host.register_block_type(&qualified, registration);
        }
    }

    /// Enqueue every block's editor script and translation catalog.
    ///
    /// Runs at the editor-asset stage, after [`register_blocks`]. The
    /// script URL is deterministic: `<assets_base_url>/<name>.js`.
    ///
    /// [`register_blocks`]: Self::register_blocks
    pub fn load_block_assets(&self, host: &dyn BlockHost) {
        let base = trim_trailing_slash(&self.config.assets_base_url);
        let blocks = self.blocks.read();
        for (name, registration) in blocks.iter() {
            let handle = format!("{}-{}", self.config.prefix, name);
            let url = format!("{base}/{name}.js");
            let deps = registration
                .script_dependencies
                .clone()
                .unwrap_or_else(|| self.default_script_dependencies());

            debug!(script = %handle, %url, "enqueueing block editor script");
            host.enqueue_script(
                &handle,
                &url,
                &deps,
                &self.config.version,
                self.config.defer_scripts,
            );
            host.set_script_translations(
                &handle,
                &self.config.text_domain,
                &self.config.translations_path,
            );
        }
    }

    /// The dependency set for blocks without an override: configured extra
    /// dependencies first, then the capability-wide defaults
    pub fn default_script_dependencies(&self) -> Vec<String> {
        self.config
            .extra_script_dependencies
            .iter()
            .cloned()
            .chain(DEFAULT_SCRIPT_DEPENDENCIES.iter().map(|s| s.to_string()))
            .collect()
    }

    /// Inject the block's qualified name into its attribute bag under
    /// [`BLOCK_NAME_ATTR`], so render-time code can reference its own block
    /// type. Pure and idempotent.
    pub fn add_block_name(mut payload: RenderPayload) -> RenderPayload {
        payload.attributes.insert(
            BLOCK_NAME_ATTR,
            AttributeValue::String(payload.block_name.clone()),
        );
        payload
    }

    /// Render one block instance.
    ///
    /// Looks up the payload's block, injects the block name into the bag,
    /// and invokes the registered render callback. An unknown block or a
    /// registration without a server-side callback logs a warning and
    /// renders nothing; the page keeps rendering.
    pub fn render_block(&self, payload: RenderPayload, ctx: &RenderContext) -> String {
        let payload = Self::add_block_name(payload);

        let short_name = payload
            .block_name
            .strip_prefix(&format!("{}/", self.config.prefix))
            .unwrap_or(&payload.block_name);

        let blocks = self.blocks.read();
        let Some(registration) = blocks.get(short_name) else {
            warn!(block = %payload.block_name, "render requested for unregistered block");
            return String::new();
        };

        match &registration.render {
            Some(block) => {
                let block = Arc::clone(block);
                drop(blocks);
                block.render(&payload.attributes, ctx)
            }
            None => {
                warn!(block = %payload.block_name, "block has no server-side render callback");
                String::new()
            }
        }
    }

    /// Attach the registry to the host lifecycle stages: block
    /// registration at the configured load priority, asset enqueueing at
    /// the asset priority.
    pub fn install(&self, actions: &Actions, host: &Arc<dyn BlockHost>) {
        let registry = self.clone();
        let stage_host = Arc::clone(host);
        actions.add(stage::REGISTER, self.config.load_priority, move || {
            registry.register_blocks(stage_host.as_ref());
        });

        let registry = self.clone();
        let stage_host = Arc::clone(host);
        actions.add(
            stage::ENQUEUE_ASSETS,
            self.config.asset_load_priority,
            move || {
                registry.load_block_assets(stage_host.as_ref());
            },
        );
    }
}
