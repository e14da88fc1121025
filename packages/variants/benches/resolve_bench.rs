//! Resolver benchmarks
//!
//! Resolution sits on the render hot path, so a wide configuration (tens of
//! axes, dozens of compound rules) must stay in the microsecond range.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use windlass_variants::{resolve_class_name, CompoundVariant, Props, VariantDef, VariantTable};

fn generate_table(num_axes: usize, values_per_axis: usize) -> VariantTable {
    let mut table = VariantTable::new();

    for axis in 0..num_axes {
        let entries: Vec<(String, String)> = (0..values_per_axis)
            .map(|value| (format!("value{}", value), format!("axis{}-class{}", axis, value)))
            .collect();
        table.insert(format!("axis{}", axis), VariantDef::Map(entries));
    }

    table
}

fn generate_compounds(num_rules: usize, keys_per_rule: usize) -> Vec<CompoundVariant> {
    (0..num_rules)
        .map(|rule| {
            let mut selector = Props::new();
            for key in 0..keys_per_rule {
                selector.insert(format!("axis{}", (rule + key) % 20), "value0");
            }
            CompoundVariant::new(selector, format!("compound-{}", rule))
        })
        .collect()
}

fn generate_props(num_axes: usize) -> Props {
    let mut props = Props::new();
    // Half the axes set explicitly, the rest left to defaults.
    for axis in (0..num_axes).step_by(2) {
        props.insert(format!("axis{}", axis), "value1");
    }
    props
}

fn generate_defaults(num_axes: usize) -> Props {
    let mut defaults = Props::new();
    for axis in 0..num_axes {
        defaults.insert(format!("axis{}", axis), "value0");
    }
    defaults
}

fn bench_resolve_small(c: &mut Criterion) {
    let variants = generate_table(3, 4);
    let defaults = generate_defaults(3);
    let compounds = generate_compounds(2, 2);
    let props = generate_props(3);

    c.bench_function("resolve_3_axes", |b| {
        b.iter(|| {
            resolve_class_name(
                black_box(&props),
                black_box(&variants),
                black_box(&defaults),
                black_box(&compounds),
                black_box("btn"),
            )
        })
    });
}

fn bench_resolve_wide(c: &mut Criterion) {
    let variants = generate_table(20, 10);
    let defaults = generate_defaults(20);
    let compounds = generate_compounds(30, 3);
    let props = generate_props(20);

    c.bench_function("resolve_20_axes_30_compounds", |b| {
        b.iter(|| {
            resolve_class_name(
                black_box(&props),
                black_box(&variants),
                black_box(&defaults),
                black_box(&compounds),
                black_box("btn"),
            )
        })
    });
}

criterion_group!(benches, bench_resolve_small, bench_resolve_wide);
criterion_main!(benches);
