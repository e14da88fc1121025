//! Styled component rendering - props to HTML markup
//!
//! The renderer is a thin wrapper over class resolution: it merges default
//! props under caller props, strips variant keys from the attribute set,
//! computes the class string from the *original* props, and serializes the
//! rest as escaped HTML attributes around the children.

use thiserror::Error;
use tracing::debug;
use windlass_variants::{
    ClassStyle, CompoundVariant, Props, ValidationLevel, Validator, Value, VariantDef,
};

/// Errors that can occur during strict rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid style configuration: {0}")]
    InvalidConfig(String),

    #[error("Render error: {0}")]
    Generic(String),
}

impl From<String> for RenderError {
    fn from(s: String) -> Self {
        RenderError::Generic(s)
    }
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Generic(s.to_string())
    }
}

/// A styled component: a tag, a class style, and default props.
///
/// `render` is total; every malformed input degrades to an attribute or
/// class simply not appearing. `render_strict` validates the configuration
/// first and refuses on error-level findings.
#[derive(Debug)]
pub struct Styled {
    pub tag: String,
    pub style: ClassStyle,
    pub default_props: Props,
}

impl Styled {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            style: ClassStyle::new(""),
            default_props: Props::new(),
        }
    }

    /// Base class names, emitted right after the caller's own `class` prop.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.style.base_class_name = class_name.into();
        self
    }

    pub fn with_variant(mut self, name: impl Into<String>, def: VariantDef) -> Self {
        self.style.variants.insert(name, def);
        self
    }

    pub fn with_default_variant(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.style.default_variants.insert(name, value);
        self
    }

    pub fn with_compound(mut self, compound: CompoundVariant) -> Self {
        self.style.compound_variants.push(compound);
        self
    }

    /// Attributes rendered unless the caller overrides them (e.g.
    /// `type="button"` on a button component).
    pub fn with_default_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default_props.insert(name, value);
        self
    }

    /// Render the component to markup.
    pub fn render(&self, props: &Props) -> String {
        let tag = props
            .get("as")
            .and_then(Value::as_str)
            .unwrap_or(&self.tag);

        debug!(%tag, "rendering styled component");

        // Merge default props under caller props. Caller wins; new keys
        // append after the defaults.
        let mut attrs = self.default_props.clone();
        for (key, value) in props.iter() {
            attrs.insert(key.as_str(), value.clone());
        }

        // Children are content, not an attribute.
        let children = attrs
            .remove("children")
            .as_ref()
            .and_then(Value::to_key)
            .unwrap_or_default();
        attrs.remove("as");

        // Variant keys select classes; they never serialize as attributes.
        for name in self.style.variants.names() {
            attrs.remove(name);
        }

        // Class resolution sees the original props, variant keys included.
        let class_name = self.style.resolve(props);
        attrs.remove("className");
        if class_name.is_empty() {
            attrs.remove("class");
        } else {
            attrs.insert("class", class_name);
        }

        let mut markup = String::new();
        markup.push('<');
        markup.push_str(tag);

        for (name, value) in attrs.iter() {
            match value {
                Value::Null | Value::Bool(false) => continue,
                Value::Bool(true) => {
                    markup.push(' ');
                    markup.push_str(&escape_html(name));
                }
                other => {
                    let text = other.to_key().unwrap_or_default();
                    markup.push(' ');
                    markup.push_str(&escape_html(name));
                    markup.push_str("=\"");
                    markup.push_str(&escape_html(&text));
                    markup.push('"');
                }
            }
        }

        markup.push('>');

        if is_void_element(tag) {
            return markup;
        }

        markup.push_str(&children);
        markup.push_str("</");
        markup.push_str(tag);
        markup.push('>');

        markup
    }

    /// Validate the style configuration, then render.
    pub fn render_strict(&self, props: &Props) -> Result<String, RenderError> {
        let mut validator = Validator::new(true);
        let warnings = validator.validate(&self.style);

        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.level == ValidationLevel::Error)
            .map(|w| w.message.clone())
            .collect();

        if !errors.is_empty() {
            return Err(RenderError::InvalidConfig(errors.join("; ")));
        }

        Ok(self.render(props))
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
