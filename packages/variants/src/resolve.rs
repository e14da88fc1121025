//! # Class Name Resolution
//!
//! Resolves a prop set against variant tables into a single space-separated
//! class string.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Resolution is fully deterministic.**
//!
//! For any (props, variants, defaults, compounds, base) input,
//! `resolve_class_name` MUST produce identical output on every invocation:
//!
//! - Pair-list tables iterate in declaration order, never hash order
//! - No time/random/environment dependence, no shared state
//! - Computed variants are invoked at most once each, in variant-table
//!   declaration order, and never during compound matching
//!
//! ## Two Lookup Modes
//!
//! A variant's effective value is resolved in one of two modes:
//!
//! - **Plain** (compound selector matching): prop → default variant. The
//!   `default_to` overrides are a consequence of a match, not an input to
//!   it, so matching never consults them.
//! - **Compounded** (fragment computation): prop → active compound's
//!   `default_to` override → default variant.
//!
//! All compound matching runs before any fragment is computed, because the
//! winning `default_to` map is unknown until matching completes.
//!
//! ## Error Posture
//!
//! Resolution never fails. Unknown prop keys, missing map entries, computed
//! variants returning nothing, and whitespace-only fragments all degrade to
//! "no contribution". Validation lives in [`crate::validator`] and is
//! strictly opt-in.

use crate::value::{Props, Value};
use crate::variant::{CompoundVariant, VariantDef, VariantTable};
use tracing::trace;

/// Outcome of scanning the compound variant list: the winning fragment, the
/// `default_to` overrides it carries, and its precision.
#[derive(Debug, Clone, Default, PartialEq)]
struct CompoundMatch {
    class: String,
    defaults: Props,
    precision: usize,
}

/// Resolve a prop set to its final class string.
///
/// The output begins with the caller's own `class`/`className` prop (if
/// any), then the base class name, then one fragment per variant axis in
/// declaration order, then the active compound variant's fragment. Empty
/// and whitespace-only candidates are dropped; no deduplication is
/// performed.
pub fn resolve_class_name(
    props: &Props,
    variants: &VariantTable,
    default_variants: &Props,
    compound_variants: &[CompoundVariant],
    base_class_name: &str,
) -> String {
    let mut class_names: Vec<String> = Vec::new();

    if let Some(class) = props_class(props) {
        class_names.push(class.to_string());
    }
    class_names.push(base_class_name.to_string());

    // Matching first: the winning default_to map feeds every compounded
    // lookup below.
    let compound = select_compound_variant(props, default_variants, compound_variants);

    for (name, def) in variants.iter() {
        let value = variant_value(name, props, default_variants, Some(&compound.defaults));

        match def {
            VariantDef::Computed(compute) => {
                if let Some(class) = compute(value, props, variants) {
                    let trimmed = class.trim();
                    if !trimmed.is_empty() {
                        class_names.push(trimmed.to_string());
                    }
                }
            }
            VariantDef::Map(_) => {
                if let Some(key) = value.and_then(Value::to_key) {
                    if let Some(fragment) = def.lookup(&key) {
                        let trimmed = fragment.trim();
                        if !trimmed.is_empty() {
                            class_names.push(trimmed.to_string());
                        }
                    }
                }
            }
        }
    }

    if !compound.class.is_empty() {
        class_names.push(compound.class);
    }

    class_names.retain(|c| !c.trim().is_empty());
    class_names.join(" ")
}

/// The caller's own class seed: the first of `class`/`className` that is
/// present and non-null, kept only if string-typed.
fn props_class(props: &Props) -> Option<&str> {
    let value = props
        .get("class")
        .filter(|v| !v.is_null())
        .or_else(|| props.get("className").filter(|v| !v.is_null()))?;
    value.as_str()
}

/// Effective value for one variant axis.
///
/// Plain mode passes `compounded = None`; compounded mode passes the active
/// compound variant's `default_to` map. A `Null` prop or override counts as
/// absent and falls through.
fn variant_value<'a>(
    key: &str,
    props: &'a Props,
    default_variants: &'a Props,
    compounded: Option<&'a Props>,
) -> Option<&'a Value> {
    if let Some(value) = props.get(key) {
        if !value.is_null() {
            return Some(value);
        }
    }

    compounded
        .and_then(|overrides| overrides.get(key))
        .filter(|v| !v.is_null())
        .or_else(|| default_variants.get(key))
}

/// Fold over the compound list in declaration order.
///
/// A candidate replaces the accumulator when every selector key's
/// plain-mode value equals the required value and its precision is `>=` the
/// best so far. The `>=` comparator is load-bearing: a later rule of equal
/// precision replaces an earlier match, including between two zero-key
/// selectors.
fn select_compound_variant(
    props: &Props,
    default_variants: &Props,
    compound_variants: &[CompoundVariant],
) -> CompoundMatch {
    compound_variants
        .iter()
        .fold(CompoundMatch::default(), |best, candidate| {
            let precision = candidate.precision();

            let matches = candidate.selector.iter().all(|(key, required)| {
                variant_value(key, props, default_variants, None) == Some(required)
            });

            if matches && precision >= best.precision {
                trace!(precision, class = %candidate.class, "compound variant matched");
                CompoundMatch {
                    class: candidate.class.clone(),
                    defaults: candidate.default_to.clone(),
                    precision,
                }
            } else {
                best
            }
        })
}
