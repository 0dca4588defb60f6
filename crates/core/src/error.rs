use std::io;

/// Errors raised while validating a [`ThemeConfig`](crate::ThemeConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The primary color is neither a hex color nor a CSS color name.
    #[error("invalid primary color '{value}': expected #rgb, #rrggbb, #rrggbbaa or a CSS color name")]
    InvalidColor { value: String },
}

/// Errors raised while turning component markup into runnable script.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The transpiler rejected the composed source. The message is the
    /// transpiler's own diagnostic text, unmodified.
    #[error("{0}")]
    Transpile(String),

    /// The external transpiler could not be started or talked to.
    #[error("failed to run transpiler '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The transpiler produced output that is not valid UTF-8.
    #[error("transpiler output is not valid UTF-8")]
    InvalidOutput,
}

/// A string that does not name any variant of one of the option enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
