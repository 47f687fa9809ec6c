use thiserror::Error;

/// Errors produced by the plotting engine and the recording facade.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// The facade was asked for an operation the engine does not define.
    #[error("no such operation: `{0}`")]
    NoSuchOperation(String),

    /// A safe (immediate) function was used where a draw operation was expected.
    #[error("`{0}` runs immediately and cannot be recorded")]
    NotRecordable(String),

    /// A draw operation was invoked as if it were an immediate function.
    #[error("`{0}` is a draw operation; record it instead of invoking it")]
    NotImmediate(String),

    /// An argument was missing or had the wrong shape.
    #[error("bad argument for `{op}`: {msg}")]
    BadArgument { op: String, msg: String },

    /// A colour could not be coerced into an RGB triple.
    #[error("unsupported color: {0}")]
    UnsupportedColor(String),

    /// The figure selected a theme that is not in the registry.
    #[error("unknown plot theme `{0}`")]
    UnknownTheme(String),

    /// The UI theme did not provide a colour token the synthesizer needs.
    #[error("UI theme `{theme}` has no `{token}` color")]
    MissingToken { theme: String, token: String },
}

impl PlotError {
    pub(crate) fn bad(op: &str, msg: impl Into<String>) -> Self {
        PlotError::BadArgument {
            op: op.to_string(),
            msg: msg.into(),
        }
    }
}
