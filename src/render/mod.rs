//! Terminal output for analysis results.
//!
//! [`Renderer`] draws a result as an animated, highlighted report or as
//! indented JSON. The building blocks are usable on their own: [`wrap_text`]
//! for display-width wrapping, [`Highlighter`] for keyword emphasis and
//! [`progressive_print`] for the typing effect.

pub mod highlight;
pub mod json;
pub mod report;
pub mod typing;
pub mod width;
pub mod wrap;

pub use highlight::{Emphasis, Highlighter, Span};
pub use json::pretty_json;
pub use report::{RenderTiming, Renderer};
pub use typing::progressive_print;
pub use width::{compute_width, resolve_width};
pub use wrap::wrap_text;
