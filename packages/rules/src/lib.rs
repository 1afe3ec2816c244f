pub mod error;
pub mod replacements;
pub mod style;
pub mod web;

pub use error::{RulesError, RulesResult};
pub use replacements::{
    strip_resource_prefix, AttributeReplacement, ChildArrangement, ElementReplacement,
    PropertyRule, PropertyTarget, Replacements, RuleSet, ValueKind,
};
pub use style::{effective_attributes, StyleError, StyleResolver, StyleSheet};
pub use web::builtin_web;
