use thiserror::Error;

pub type RulesResult<T> = Result<T, RulesError>;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Invalid rule file: {0}")]
    InvalidRuleFile(#[from] serde_json::Error),

    #[error("Duplicate element rule for tag '{tag}'")]
    DuplicateElementRule { tag: String },

    #[error("Duplicate attribute rule for '{key}' on '{scope}'")]
    DuplicateAttributeRule { key: String, scope: String },
}
