use relayout_rules::StyleError;
use thiserror::Error;

pub type TranslateResult<T> = Result<T, TranslateError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    #[error("Unresolvable style at {path}: {source}")]
    UnresolvedStyle {
        path: String,
        #[source]
        source: StyleError,
    },

    #[error("Malformed <include> at {path}: missing 'layout' attribute")]
    MissingLayoutAttribute { path: String },

    #[error("Element '{tag}' at {path} requires a custom arrangement the strategy does not provide")]
    UnsupportedArrangement { tag: String, path: String },
}
