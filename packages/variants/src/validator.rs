//! Opt-in validators for detecting style misconfiguration
//!
//! Resolution itself never fails (unknown axes and missing entries degrade
//! to "no contribution"), so configuration mistakes are silent by design.
//! The validator surfaces them without changing resolution behavior.

use crate::style::ClassStyle;
use crate::variant::VariantDef;

/// Prop keys the composition layer owns. `class`/`className` seed the
/// class list; `as`/`children` are consumed by the renderer before
/// attribute serialization. A variant axis with one of these names would
/// be shadowed.
const RESERVED_AXES: &[&str] = &["class", "className", "as", "children"];

/// Validation warning level
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    /// Warning that should be addressed
    Warning,
    /// Error that will cause issues
    Error,
}

/// Validation warning
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
    pub axis: Option<String>,
}

impl ValidationWarning {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Warning,
            message: message.into(),
            axis: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Error,
            message: message.into(),
            axis: None,
        }
    }

    pub fn with_axis(mut self, axis: impl Into<String>) -> Self {
        self.axis = Some(axis.into());
        self
    }
}

/// Validator for class style configurations
pub struct Validator {
    /// Whether dev mode is enabled
    dev_mode: bool,
    /// Collected warnings
    warnings: Vec<ValidationWarning>,
}

impl Validator {
    pub fn new(dev_mode: bool) -> Self {
        Self {
            dev_mode,
            warnings: Vec::new(),
        }
    }

    /// Validate a class style configuration
    pub fn validate(&mut self, style: &ClassStyle) -> Vec<ValidationWarning> {
        self.warnings.clear();

        if !self.dev_mode {
            return vec![];
        }

        self.check_reserved_axes(style);
        self.check_default_variants(style);
        self.check_compound_selectors(style);
        self.check_whitespace_fragments(style);

        self.warnings.clone()
    }

    fn check_reserved_axes(&mut self, style: &ClassStyle) {
        for name in style.variants.names() {
            if RESERVED_AXES.contains(&name) {
                self.warnings.push(
                    ValidationWarning::error(format!(
                        "variant axis '{}' shadows a reserved prop key",
                        name
                    ))
                    .with_axis(name),
                );
            }
        }
    }

    fn check_default_variants(&mut self, style: &ClassStyle) {
        for key in style.default_variants.keys() {
            if !style.variants.contains_key(key) {
                self.warnings.push(
                    ValidationWarning::warning(format!(
                        "default variant '{}' has no matching variant axis",
                        key
                    ))
                    .with_axis(key),
                );
            }
        }
    }

    fn check_compound_selectors(&mut self, style: &ClassStyle) {
        for (index, compound) in style.compound_variants.iter().enumerate() {
            for key in compound.selector.keys() {
                // Selectors can legally match on raw prop keys, so an
                // unknown axis is suspicious but not fatal.
                if !style.variants.contains_key(key) && !style.default_variants.contains_key(key) {
                    self.warnings.push(
                        ValidationWarning::warning(format!(
                            "compound variant {} selects on '{}', which is neither a variant axis nor a default",
                            index, key
                        ))
                        .with_axis(key),
                    );
                }
            }

            for key in compound.default_to.keys() {
                if !style.variants.contains_key(key) {
                    self.warnings.push(
                        ValidationWarning::warning(format!(
                            "compound variant {} defaults '{}', which is not a variant axis",
                            index, key
                        ))
                        .with_axis(key),
                    );
                }
            }
        }
    }

    fn check_whitespace_fragments(&mut self, style: &ClassStyle) {
        for (name, def) in style.variants.iter() {
            if let VariantDef::Map(entries) = def {
                for (key, fragment) in entries {
                    // Empty string is the documented "no class for this
                    // value" mechanism; whitespace-only is a typo.
                    if !fragment.is_empty() && fragment.trim().is_empty() {
                        self.warnings.push(
                            ValidationWarning::warning(format!(
                                "variant '{}' value '{}' maps to a whitespace-only fragment",
                                name, key
                            ))
                            .with_axis(name.as_str()),
                        );
                    }
                }
            }
        }
    }
}
