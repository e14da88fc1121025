//! Variant definitions and compound variant rules

use crate::value::{Props, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed variant callback.
///
/// Receives the effective value for its axis (after prop / compound
/// override / default fallback), the full prop set, and the variant table.
/// Returns the class fragment to contribute, or `None` for no contribution.
/// `Fn` (not `FnMut`) encodes the side-effect-free contract.
pub type ComputedFn =
    Box<dyn Fn(Option<&Value>, &Props, &VariantTable) -> Option<String> + Send + Sync>;

/// A single variant axis definition.
pub enum VariantDef {
    /// Static map from value key to class fragment, in declaration order.
    Map(Vec<(String, String)>),
    /// Computed fragment.
    Computed(ComputedFn),
}

impl VariantDef {
    pub fn map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        VariantDef::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>, &Props, &VariantTable) -> Option<String> + Send + Sync + 'static,
    {
        VariantDef::Computed(Box::new(f))
    }

    /// Look up a fragment by value key. Always `None` for computed variants.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        match self {
            VariantDef::Map(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            VariantDef::Computed(_) => None,
        }
    }
}

impl fmt::Debug for VariantDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantDef::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            VariantDef::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Ordered table of variant axes. Iteration order is declaration order,
/// which fixes both fragment order in the output and the order computed
/// variants are invoked in.
#[derive(Debug, Default)]
pub struct VariantTable {
    entries: Vec<(String, VariantDef)>,
}

impl VariantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, def: VariantDef) -> Self {
        self.insert(name, def);
        self
    }

    /// Insert or replace. A replaced axis keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, def: VariantDef) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = def;
        } else {
            self.entries.push((name, def));
        }
    }

    pub fn get(&self, name: &str) -> Option<&VariantDef> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, VariantDef)> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

/// A rule contributing an extra class fragment when a combination of
/// variant values is selected.
///
/// `selector` key-count is the rule's precision. `default_to` overrides
/// default-variant fallback for axes the caller left unset, but only while
/// this rule is the active match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant {
    pub selector: Props,
    pub class: String,
    pub default_to: Props,
}

impl CompoundVariant {
    pub fn new(selector: Props, class: impl Into<String>) -> Self {
        Self {
            selector,
            class: class.into(),
            default_to: Props::new(),
        }
    }

    /// Builder-style `default_to` attachment.
    pub fn with_default_to(mut self, default_to: Props) -> Self {
        self.default_to = default_to;
        self
    }

    pub fn precision(&self) -> usize {
        self.selector.len()
    }
}
