//! Template rendering engine.
//!
//! Provides the highlighted live preview of a prompt template and its
//! conversion to display formats.

mod template_renderer;

pub use template_renderer::{
    MarkedUpString, PreviewFormat, Segment, TemplateRenderer, Token, tokenize,
};
