//! Benchmarks for the hot render-path pieces: wrapper composition and the
//! full section template.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use block_support::core::attribute::{AttributeBag, AttributeSchema};
use block_support::core::block::{BlockDefinition, RenderContext};
use block_support::core::host::PlainAttributeWriter;
use block_support::core::wrapper::{WrapperArgs, WrapperComposer};
use block_support::sections::{Section, SectionContent};
use block_support::BLOCK_NAME_ATTR;

struct BenchContent;

impl SectionContent for BenchContent {
    fn name(&self) -> &str {
        "bench"
    }

    fn schema(&self) -> AttributeSchema {
        AttributeSchema::new()
    }

    fn content(&self, _bag: &AttributeBag, _ctx: &RenderContext) -> String {
        "<p>body</p>".to_string()
    }
}

fn section_bag() -> AttributeBag {
    serde_json::from_str(
        r#"{
            "_name": "acme/bench",
            "align": "full",
            "sectionWrapperEnabled": true,
            "sectionHeaderShow": true,
            "sectionEyebrow": "New",
            "sectionTitle": "Hello",
            "sectionFooterShow": true,
            "sectionFooterText": "Fine print",
            "backgroundImageUrl": "https://example.com/bg.jpg",
            "backgroundImageFocalPoint": {"x": 0.25, "y": 0.75},
            "backgroundColor": "red"
        }"#,
    )
    .unwrap()
}

fn bench_compose(c: &mut Criterion) {
    let composer = WrapperComposer::new("acme", Arc::new(PlainAttributeWriter));
    let bag = AttributeBag::new()
        .with(BLOCK_NAME_ATTR, "acme/bench")
        .with("backgroundColor", "red")
        .with("textColor", "white");

    c.bench_function("compose_wrapper_attributes", |b| {
        b.iter(|| {
            composer.compose(
                black_box(&bag),
                WrapperArgs::new().with_class("section alignfull"),
            )
        })
    });
}

fn bench_section_render(c: &mut Criterion) {
    let ctx = RenderContext::new(Arc::new(WrapperComposer::new(
        "acme",
        Arc::new(PlainAttributeWriter),
    )));
    let section = Section::new(BenchContent);
    let bag = section_bag();

    c.bench_function("section_full_render", |b| {
        b.iter(|| section.render(black_box(&bag), &ctx))
    });
}

criterion_group!(benches, bench_compose, bench_section_render);
criterion_main!(benches);
