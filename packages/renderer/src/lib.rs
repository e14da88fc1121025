pub mod component;

#[cfg(test)]
mod tests;

pub use component::{RenderError, Styled};
