//! Benchmarks for provider renders and accessor reads.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use render_context::context::create_context;
use render_context::core::{RenderOutput, RenderPass};
use render_context::slots::{FnSlot, StaticSlot};
use render_context::testing::{sample_profile, Profile};

fn accessor_benchmark(c: &mut Criterion) {
    let (_provider, accessor) = create_context::<String>();
    c.bench_function("accessor_get_unset", |b| b.iter(|| black_box(accessor.get())));
}

fn provider_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let pass = RenderPass::new();

    let (provider, _) = create_context::<String>();
    let slot = StaticSlot::new("<p>ok</p>");
    let value = "dark".to_string();
    c.bench_function("provider_render_static", |b| {
        b.iter(|| rt.block_on(provider.render(&pass, black_box(&value), &slot)))
    });

    let (provider, accessor) = create_context::<Profile>();
    let reader = FnSlot::new(move |_: &RenderPass| {
        Ok(RenderOutput::new(accessor.with(|p| p.name.clone()).unwrap_or_default()))
    });
    let profile = sample_profile("bench");
    c.bench_function("provider_render_profile_read", |b| {
        b.iter(|| rt.block_on(provider.render(&pass, black_box(&profile), &reader)))
    });
}

criterion_group!(benches, accessor_benchmark, provider_benchmark);
criterion_main!(benches);
