use relayout_rules::StyleError;
use thiserror::Error;

pub type DescriptorResult<T> = Result<T, DescriptorError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptorError {
    #[error("Unresolvable style at {path}: {source}")]
    UnresolvedStyle {
        path: String,
        #[source]
        source: StyleError,
    },

    #[error("Malformed <include> at {path}: missing 'layout' attribute")]
    MissingLayoutAttribute { path: String },

    #[error("Ambiguous identifier '{name}' at {path}: already bound in this layout")]
    DuplicateIdentifier { name: String, path: String },

    #[error("Cannot combine an empty set of layout parses")]
    EmptyCombine,

    #[error("Cannot combine layouts with different names: '{expected}' and '{found}'")]
    MixedNames { expected: String, found: String },
}
