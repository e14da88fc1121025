//! Reusable class style bundles

use crate::resolve::resolve_class_name;
use crate::value::{Props, Value};
use crate::variant::{CompoundVariant, VariantDef, VariantTable};

/// An owned bundle of base class, variant tables, defaults, and compound
/// rules, resolvable against any prop set.
///
/// This is the reusable form of [`resolve_class_name`]: configure once,
/// resolve per call.
#[derive(Debug, Default)]
pub struct ClassStyle {
    pub base_class_name: String,
    pub variants: VariantTable,
    pub default_variants: Props,
    pub compound_variants: Vec<CompoundVariant>,
}

impl ClassStyle {
    pub fn new(base_class_name: impl Into<String>) -> Self {
        Self {
            base_class_name: base_class_name.into(),
            variants: VariantTable::new(),
            default_variants: Props::new(),
            compound_variants: Vec::new(),
        }
    }

    /// Declare a variant axis. Axes contribute fragments in declaration
    /// order.
    pub fn with_variant(mut self, name: impl Into<String>, def: VariantDef) -> Self {
        self.variants.insert(name, def);
        self
    }

    pub fn with_default_variant(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default_variants.insert(name, value);
        self
    }

    /// Append a compound rule. Declaration order matters: among equal-
    /// precision matches, the last declared wins.
    pub fn with_compound(mut self, compound: CompoundVariant) -> Self {
        self.compound_variants.push(compound);
        self
    }

    /// Resolve a prop set to its class string.
    pub fn resolve(&self, props: &Props) -> String {
        resolve_class_name(
            props,
            &self.variants,
            &self.default_variants,
            &self.compound_variants,
            &self.base_class_name,
        )
    }
}
