use crate::Styled;
use windlass_variants::{CompoundVariant, Props, Value, VariantDef};

fn button() -> Styled {
    Styled::new("button")
        .with_class_name("inline-flex")
        .with_default_prop("type", "button")
        .with_variant(
            "variant",
            VariantDef::map([
                ("primary", "bg-blue-600 text-white"),
                ("secondary", "bg-gray-100 text-gray-900"),
            ]),
        )
        .with_variant(
            "size",
            VariantDef::map([("sm", "text-xs px-2 py-1"), ("md", "text-sm px-3 py-2")]),
        )
        .with_default_variant("variant", "primary")
        .with_default_variant("size", "md")
}

#[test]
fn test_renders_tag_with_classes_and_children() {
    let html = button().render(
        &Props::new()
            .set("variant", "secondary")
            .set("size", "sm")
            .set("children", "Click me")
            .set("id", "save-button"),
    );

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<button"));
    assert!(html.ends_with("</button>"));
    assert!(html.contains("id=\"save-button\""));
    assert!(html.contains("type=\"button\""));
    assert!(html.contains("Click me"));

    // classes composed from base + variants
    assert!(html.contains("inline-flex"));
    assert!(html.contains("bg-gray-100 text-gray-900"));
    assert!(html.contains("text-xs px-2 py-1"));

    // variant props must NOT be rendered as attributes
    assert!(!html.contains("variant=\""));
    assert!(!html.contains("size=\""));
}

#[test]
fn test_merges_existing_class_attribute() {
    let styled = Styled::new("div")
        .with_class_name("base")
        .with_variant("padded", VariantDef::map([("true", "p-4"), ("false", "")]))
        .with_default_variant("padded", true);

    let html = styled.render(&Props::new().set("class", "custom").set("children", "Hello"));

    assert!(html.contains("class=\"custom base p-4\""));
    assert!(html.contains(">Hello</div>"));
}

#[test]
fn test_as_prop_changes_tag() {
    let styled = Styled::new("button")
        .with_class_name("inline-flex")
        .with_variant(
            "variant",
            VariantDef::map([("primary", "bg-blue-600"), ("link", "text-blue-600 underline")]),
        )
        .with_default_variant("variant", "primary");

    let html = styled.render(
        &Props::new()
            .set("as", "a")
            .set("href", "/foo")
            .set("variant", "link")
            .set("children", "Go"),
    );

    assert!(html.starts_with("<a "));
    assert!(html.ends_with("</a>"));
    assert!(html.contains("href=\"/foo\""));
    assert!(html.contains("text-blue-600 underline"));
    assert!(!html.contains("variant=\""));
    assert!(!html.contains("as=\""));
}

#[test]
fn test_void_tags_render_no_children_or_closing_tag() {
    let styled = Styled::new("img")
        .with_class_name("rounded")
        .with_variant(
            "size",
            VariantDef::map([("thumb", "w-16 h-16"), ("full", "w-full")]),
        )
        .with_default_variant("size", "thumb");

    let html = styled.render(&Props::new().set("src", "/cat.png").set("children", "ignored"));

    assert!(html.starts_with("<img"));
    assert!(html.ends_with(">"));
    assert!(!html.contains("</img>"));
    assert!(!html.contains("ignored"));
    assert!(html.contains("src=\"/cat.png\""));
    assert!(html.contains("class=\"rounded w-16 h-16\""));
}

#[test]
fn test_default_props_yield_to_caller_props() {
    let html = button().render(&Props::new().set("type", "submit"));

    assert!(html.contains("type=\"submit\""));
    assert!(!html.contains("type=\"button\""));
}

#[test]
fn test_boolean_and_null_attribute_serialization() {
    let styled = Styled::new("button");

    let html = styled.render(
        &Props::new()
            .set("disabled", true)
            .set("hidden", false)
            .set("title", Value::Null)
            .set("children", "Save"),
    );

    // true renders bare, false and null are omitted entirely.
    assert!(html.contains(" disabled>") || html.contains(" disabled "));
    assert!(!html.contains("hidden"));
    assert!(!html.contains("title"));
    assert!(!html.contains("=\"true\""));
}

#[test]
fn test_attribute_names_and_values_are_escaped() {
    let styled = Styled::new("div");

    let html = styled.render(
        &Props::new()
            .set("title", "a \"quoted\" <value> & more")
            .set("children", ""),
    );

    assert!(html.contains("title=\"a &quot;quoted&quot; &lt;value&gt; &amp; more\""));
    assert!(!html.contains("<value>"));
}

#[test]
fn test_numeric_attribute_values_render_without_trailing_zero() {
    let styled = Styled::new("input");

    let html = styled.render(&Props::new().set("tabindex", 3));

    assert!(html.contains("tabindex=\"3\""));
}

#[test]
fn test_compound_variant_classes_reach_the_markup() {
    let styled = Styled::new("button")
        .with_class_name("btn")
        .with_variant("variant", VariantDef::map([("primary", "bg-blue-600")]))
        .with_variant("size", VariantDef::map([("lg", "text-lg")]))
        .with_compound(CompoundVariant::new(
            Props::new().set("variant", "primary").set("size", "lg"),
            "shadow-lg",
        ));

    let html = styled.render(&Props::new().set("variant", "primary").set("size", "lg"));

    assert!(html.contains("class=\"btn bg-blue-600 text-lg shadow-lg\""));
}

#[test]
fn test_class_name_prop_is_not_serialized_twice() {
    let styled = Styled::new("div").with_class_name("base");

    let html = styled.render(&Props::new().set("className", "custom"));

    assert!(html.contains("class=\"custom base\""));
    assert!(!html.contains("className"));
}

#[test]
fn test_no_classes_renders_no_class_attribute() {
    let styled = Styled::new("span");

    let html = styled.render(&Props::new().set("children", "plain"));

    assert_eq!(html, "<span>plain</span>");
}

#[test]
fn test_render_strict_rejects_reserved_axis() {
    let styled = Styled::new("div").with_variant("class", VariantDef::map([("a", "b")]));

    let result = styled.render_strict(&Props::new());

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("reserved"));
}

#[test]
fn test_render_strict_tolerates_warnings() {
    // An orphan default variant is warning-level only.
    let styled = Styled::new("div")
        .with_class_name("base")
        .with_default_variant("size", "md");

    let html = styled
        .render_strict(&Props::new().set("children", "ok"))
        .expect("warnings must not block rendering");

    assert_eq!(html, "<div class=\"base\">ok</div>");
}

#[test]
fn test_renders_props_built_from_json() {
    let props = Props::from_json(serde_json::json!({
        "variant": "secondary",
        "disabled": true,
        "children": "Click me",
    }));

    let html = button().render(&props);

    assert!(html.contains("bg-gray-100 text-gray-900"));
    assert!(html.contains(" disabled"));
    assert!(html.contains("Click me"));
}

#[test]
fn test_render_is_deterministic() {
    let props = Props::new()
        .set("variant", "secondary")
        .set("children", "Click");

    assert_eq!(button().render(&props), button().render(&props));
}
