//! Property-based tests for the deterministic and idempotent contracts

use proptest::prelude::*;
use std::sync::Arc;

use crate::core::attribute::{AttributeBag, AttributeValue};
use crate::core::host::PlainAttributeWriter;
use crate::core::registry::{BlockRegistry, RenderPayload};
use crate::core::wrapper::{WrapperArgs, WrapperComposer};

fn color_token() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}"
}

proptest! {
    /// Equal (bag, args) pairs always compose to identical strings
    #[test]
    fn compose_is_deterministic(
        background in proptest::option::of(color_token()),
        gradient in proptest::option::of(color_token()),
        text in proptest::option::of(color_token()),
        base_class in proptest::option::of("[a-z ]{0,16}"),
    ) {
        let composer = WrapperComposer::new("acme", Arc::new(PlainAttributeWriter));

        let mut bag = AttributeBag::new();
        if let Some(b) = &background {
            bag.insert("backgroundColor", b.clone());
        }
        if let Some(g) = &gradient {
            bag.insert("gradient", g.clone());
        }
        if let Some(t) = &text {
            bag.insert("textColor", t.clone());
        }

        let args = || {
            let mut args = WrapperArgs::new();
            args.class = base_class.clone();
            args
        };

        prop_assert_eq!(
            composer.compose(&bag, args()),
            composer.compose(&bag, args())
        );
    }

    /// Presence governs resolution: a stored value comes back verbatim, an
    /// absent key resolves to nothing
    #[test]
    fn resolve_is_presence_based(
        key in "[a-zA-Z][a-zA-Z0-9]{0,10}",
        value in prop_oneof![
            Just(AttributeValue::Bool(false)),
            Just(AttributeValue::String(String::new())),
            Just(AttributeValue::Integer(0)),
            color_token().prop_map(AttributeValue::String),
        ],
    ) {
        let bag = AttributeBag::new().with(key.clone(), value.clone());
        prop_assert_eq!(bag.resolve(&key), Some(&value));

        let other = format!("{key}X");
        prop_assert!(bag.resolve(&other).is_none());
    }

    /// Injecting the block name twice yields the same bag as injecting it
    /// once
    #[test]
    fn add_block_name_is_idempotent(name in "[a-z]{1,8}/[a-z]{1,8}") {
        let payload = RenderPayload::new(name, AttributeBag::new().with("x", 1i64));

        let once = BlockRegistry::add_block_name(payload);
        let twice = BlockRegistry::add_block_name(once.clone());

        prop_assert_eq!(once, twice);
    }
}
