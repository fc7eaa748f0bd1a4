//! Hook pipelines for extensibility
//!
//! Named, synchronous, ordered callback pipelines, modeled as explicit
//! objects injected into the composer and registry rather than ambient
//! global dispatch. [`Filters`] transform a value through every callback
//! registered under a hook name; [`Actions`] fire plain callbacks at a
//! lifecycle stage. Callbacks run in ascending priority order; ties run in
//! registration order.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Default callback priority
pub const DEFAULT_PRIORITY: i32 = 10;

/// Lifecycle stage names fired by the host, in order: declare blocks,
/// register block types, enqueue editor assets.
pub mod stage {
    /// Initial load stage, where the host plugin declares its blocks
    pub const LOAD: &str = "load";
    /// Block-registration stage
    pub const REGISTER: &str = "register";
    /// Editor-asset enqueue stage, after registration
    pub const ENQUEUE_ASSETS: &str = "enqueue_assets";
}

struct FilterEntry<T> {
    priority: i32,
    callback: Box<dyn Fn(T) -> T + Send + Sync>,
}

/// Named filter pipelines over values of type `T`
///
/// A filter takes the value and returns the (possibly replaced) value.
/// Applying an unknown hook name is the identity.
pub struct Filters<T> {
    chains: RwLock<HashMap<String, Vec<FilterEntry<T>>>>,
}

impl<T> Filters<T> {
    /// Create an empty filter table
    pub fn new() -> Self {
        Self {
            chains: RwLock::new(HashMap::new()),
        }
    }

    /// Register a callback under `hook` at the given priority.
    ///
    /// Lower priorities run first; equal priorities run in the order they
    /// were added.
    pub fn add(
        &self,
        hook: impl Into<String>,
        priority: i32,
        callback: impl Fn(T) -> T + Send + Sync + 'static,
    ) {
        let mut chains = self.chains.write();
        let chain = chains.entry(hook.into()).or_default();
        let entry = FilterEntry {
            priority,
            callback: Box::new(callback),
        };
        // Insert after all entries with priority <= ours to keep ties stable.
        let pos = chain.partition_point(|e| e.priority <= priority);
        chain.insert(pos, entry);
    }

    /// Register a callback at [`DEFAULT_PRIORITY`]
    pub fn on(&self, hook: impl Into<String>, callback: impl Fn(T) -> T + Send + Sync + 'static) {
        self.add(hook, DEFAULT_PRIORITY, callback);
    }

    /// Pass `value` through every callback registered under `hook`
    pub fn apply(&self, hook: &str, value: T) -> T {
        let chains = self.chains.read();
        match chains.get(hook) {
            Some(chain) => chain.iter().fold(value, |v, entry| (entry.callback)(v)),
            None => value,
        }
    }

    /// Whether any callback is registered under `hook`
    pub fn has(&self, hook: &str) -> bool {
        self.chains.read().contains_key(hook)
    }
}

impl<T> Default for Filters<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct ActionEntry {
    priority: i32,
    callback: Box<dyn Fn() + Send + Sync>,
}

/// Named action pipelines fired at lifecycle stages
///
/// The host fires each stage exactly once per process start-up; callbacks
/// run synchronously in priority order.
pub struct Actions {
    chains: RwLock<HashMap<String, Vec<ActionEntry>>>,
}

impl Actions {
    /// Create an empty action table
    pub fn new() -> Self {
        Self {
            chains: RwLock::new(HashMap::new()),
        }
    }

    /// Register a callback for `stage` at the given priority
    pub fn add(
        &self,
        stage: impl Into<String>,
        priority: i32,
        callback: impl Fn() + Send + Sync + 'static,
    ) {
        let mut chains = self.chains.write();
        let chain = chains.entry(stage.into()).or_default();
        let entry = ActionEntry {
            priority,
            callback: Box::new(callback),
        };
        let pos = chain.partition_point(|e| e.priority <= priority);
        chain.insert(pos, entry);
    }

    /// Fire every callback registered for `stage`.
    ///
    /// Callbacks must not register further actions on this table while the
    /// stage is firing; stages are wired up before the host fires them.
    pub fn fire(&self, stage: &str) {
        let chains = self.chains.read();
        if let Some(chain) = chains.get(stage) {
            for entry in chain.iter() {
                (entry.callback)();
            }
        }
    }

    /// Number of callbacks registered for `stage`
    pub fn len(&self, stage: &str) -> usize {
        self.chains.read().get(stage).map(Vec::len).unwrap_or(0)
    }
}

impl Default for Actions {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook name for augmenting a block's attribute schema
pub fn attributes_hook(slug: &str, block_name: &str) -> String {
    format!("{slug}_{block_name}_attributes")
}

/// Hook name for a late override of a block's wrapper arguments
pub fn wrapper_args_hook(slug: &str, block_name: &str) -> String {
    format!("{slug}_{block_name}_wrapper_args")
}
