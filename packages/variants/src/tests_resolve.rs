//! Resolution tests covering the documented behavior end to end
use crate::*;

fn resolve(
    props: &Props,
    variants: &VariantTable,
    defaults: &Props,
    compounds: &[CompoundVariant],
    base: &str,
) -> String {
    resolve_class_name(props, variants, defaults, compounds, base)
}

#[test]
fn test_simple_record_variants() {
    let props = Props::new().set("variant", "primary");
    let variants = VariantTable::new().with(
        "variant",
        VariantDef::map([("primary", "bg-blue-600"), ("secondary", "bg-gray-200")]),
    );

    let class = resolve(&props, &variants, &Props::new(), &[], "btn");

    assert_eq!(class, "btn bg-blue-600");
}

#[test]
fn test_default_variants_used_when_prop_missing() {
    let variants = VariantTable::new()
        .with(
            "variant",
            VariantDef::map([("primary", "bg-blue-600"), ("secondary", "bg-gray-200")]),
        )
        .with("size", VariantDef::map([("sm", "text-xs"), ("md", "text-sm")]));
    let defaults = Props::new().set("variant", "secondary").set("size", "md");

    let class = resolve(&Props::new(), &variants, &defaults, &[], "btn");

    assert_eq!(class, "btn bg-gray-200 text-sm");
}

#[test]
fn test_computed_variant() {
    let props = Props::new().set("padding", 4);
    let variants = VariantTable::new().with(
        "padding",
        VariantDef::computed(|value, _, _| {
            value.and_then(Value::to_key).map(|v| format!("p-{}", v))
        }),
    );

    let class = resolve(&props, &variants, &Props::new(), &[], "box");

    assert_eq!(class, "box p-4");
}

#[test]
fn test_compound_variants_apply_most_specific() {
    let props = Props::new().set("variant", "primary").set("size", "lg");
    let variants = VariantTable::new()
        .with(
            "variant",
            VariantDef::map([("primary", "bg-blue-600"), ("secondary", "bg-gray-200")]),
        )
        .with("size", VariantDef::map([("sm", "text-xs"), ("lg", "text-lg")]));
    let compounds = vec![
        CompoundVariant::new(Props::new().set("variant", "primary"), "shadow"),
        CompoundVariant::new(
            Props::new().set("variant", "primary").set("size", "lg"),
            "shadow-lg",
        ),
    ];

    let class = resolve(&props, &variants, &Props::new(), &compounds, "btn");

    // The two-key rule wins over the one-key rule.
    assert_eq!(class, "btn bg-blue-600 text-lg shadow-lg");
}

#[test]
fn test_compound_default_to_overrides_defaults() {
    let props = Props::new().set("variant", "special");
    let variants = VariantTable::new()
        .with(
            "variant",
            VariantDef::map([("default", "bg-gray-200"), ("special", "bg-purple-600")]),
        )
        .with(
            "size",
            VariantDef::map([("sm", "text-xs"), ("md", "text-sm"), ("lg", "text-lg")]),
        );
    let defaults = Props::new().set("variant", "default").set("size", "md");
    let compounds = vec![CompoundVariant::new(
        Props::new().set("variant", "special"),
        "ring-2",
    )
    .with_default_to(Props::new().set("size", "lg"))];

    let class = resolve(&props, &variants, &defaults, &compounds, "btn");

    // size defaulted to lg via default_to, not md from default_variants.
    assert_eq!(class, "btn bg-purple-600 text-lg ring-2");
}

#[test]
fn test_default_to_does_not_override_explicit_prop() {
    let props = Props::new().set("variant", "special").set("size", "sm");
    let variants = VariantTable::new()
        .with("variant", VariantDef::map([("special", "bg-purple-600")]))
        .with(
            "size",
            VariantDef::map([("sm", "text-xs"), ("lg", "text-lg")]),
        );
    let compounds = vec![CompoundVariant::new(
        Props::new().set("variant", "special"),
        "ring-2",
    )
    .with_default_to(Props::new().set("size", "lg"))];

    let class = resolve(&props, &variants, &Props::new(), &compounds, "btn");

    assert_eq!(class, "btn bg-purple-600 text-xs ring-2");
}

#[test]
fn test_default_to_inert_when_rule_not_selected() {
    // The default_to carrier loses to a higher-precision rule, so its
    // overrides must not apply.
    let props = Props::new().set("variant", "special").set("tone", "loud");
    let variants = VariantTable::new()
        .with("variant", VariantDef::map([("special", "bg-purple-600")]))
        .with(
            "size",
            VariantDef::map([("md", "text-sm"), ("lg", "text-lg")]),
        );
    let defaults = Props::new().set("size", "md");
    let compounds = vec![
        CompoundVariant::new(Props::new().set("variant", "special"), "ring-2")
            .with_default_to(Props::new().set("size", "lg")),
        CompoundVariant::new(
            Props::new().set("variant", "special").set("tone", "loud"),
            "ring-4",
        ),
    ];

    let class = resolve(&props, &variants, &defaults, &compounds, "btn");

    assert_eq!(class, "btn bg-purple-600 text-sm ring-4");
}

#[test]
fn test_compound_matching_against_defaults() {
    // Plain-mode lookup sees default variants, so a rule can match with no
    // props at all.
    let variants = VariantTable::new()
        .with("variant", VariantDef::map([("primary", "bg-blue-600")]))
        .with("size", VariantDef::map([("md", "text-sm")]));
    let defaults = Props::new().set("variant", "primary").set("size", "md");
    let compounds = vec![CompoundVariant::new(
        Props::new().set("variant", "primary").set("size", "md"),
        "shadow",
    )];

    let class = resolve(&Props::new(), &variants, &defaults, &compounds, "btn");

    assert_eq!(class, "btn bg-blue-600 text-sm shadow");
}

#[test]
fn test_caller_class_prop_leads_the_list() {
    let props = Props::new().set("class", "custom").set("padded", true);
    let variants = VariantTable::new().with(
        "padded",
        VariantDef::map([("true", "p-4"), ("false", "")]),
    );

    let class = resolve(&props, &variants, &Props::new(), &[], "base");

    assert_eq!(class, "custom base p-4");
}

#[test]
fn test_class_name_prop_seeds_when_class_absent() {
    let props = Props::new().set("className", "custom");

    let class = resolve(&props, &VariantTable::new(), &Props::new(), &[], "base");

    assert_eq!(class, "custom base");
}

#[test]
fn test_boolean_false_maps_to_no_class() {
    let props = Props::new().set("padded", false);
    let variants = VariantTable::new().with(
        "padded",
        VariantDef::map([("true", "p-4"), ("false", "")]),
    );

    let class = resolve(&props, &variants, &Props::new(), &[], "base");

    assert_eq!(class, "base");
}

#[test]
fn test_no_deduplication_of_repeated_fragments() {
    let props = Props::new().set("a", "x").set("b", "x");
    let variants = VariantTable::new()
        .with("a", VariantDef::map([("x", "shared")]))
        .with("b", VariantDef::map([("x", "shared")]));

    let class = resolve(&props, &variants, &Props::new(), &[], "base");

    assert_eq!(class, "base shared shared");
}

#[test]
fn test_resolution_is_deterministic() {
    let props = Props::new().set("variant", "primary").set("size", "lg");
    let variants = VariantTable::new()
        .with("variant", VariantDef::map([("primary", "bg-blue-600")]))
        .with("size", VariantDef::map([("lg", "text-lg")]));
    let compounds = vec![CompoundVariant::new(
        Props::new().set("variant", "primary"),
        "shadow",
    )];

    let first = resolve(&props, &variants, &Props::new(), &compounds, "btn");
    let second = resolve(&props, &variants, &Props::new(), &compounds, "btn");

    assert_eq!(first, second);
    assert_eq!(first, "btn bg-blue-600 text-lg shadow");
}
