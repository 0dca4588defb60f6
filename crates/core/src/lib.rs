//! pagesmith-core: markup handling for the pagesmith generator.
//!
//! Everything here is pure string work, no I/O except the optional external
//! transpiler process:
//!
//! - [`prompt::instruction`] -- the instruction template sent to the model
//! - [`extract::extract_html`] -- cut the HTML document out of model output
//! - [`theme::inject_theme`] -- splice theme CSS into a document
//! - [`component::render_component`] -- compose and transpile a JSX snippet
//! - [`preview::render_preview`] -- the document shown in the preview frame

pub mod component;
pub mod error;
pub mod extract;
pub mod preview;
pub mod prompt;
pub mod theme;
pub mod types;

// ── Convenience re-exports ──────────────────────────────────────────

pub use component::{
    compose, preview_document, render_component, DeferredTranspiler, ExternalTranspiler, Rendered,
    Transpiler,
};
pub use error::{RenderError, ThemeError, UnknownVariant};
pub use extract::{extract_html, strip_code_fences};
pub use preview::render_preview;
pub use theme::{inject_theme, theme_css};
pub use types::{
    ContentType, Font, GenerationRequest, GenerationResult, PreviewRequest, Theme, ThemeConfig,
    DEFAULT_PRIMARY_COLOR,
};
