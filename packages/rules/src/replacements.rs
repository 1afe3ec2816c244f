use crate::error::{RulesError, RulesResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a replaced element places its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildArrangement {
    /// Leaf element; source children are ignored.
    #[default]
    None,
    /// Children flow along one axis selected by the source orientation.
    Linear,
    /// Children overlap in a stack, aligned per-child.
    Frame,
    /// Delegated entirely to the layout strategy.
    Custom,
}

/// Replacement directive for one source tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementReplacement {
    /// Source tag this rule applies to.
    pub id: String,
    /// Destination tag.
    pub to: String,
    /// Default destination attributes.
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    /// Default destination CSS properties.
    #[serde(default)]
    pub css: IndexMap<String, String>,
    #[serde(default)]
    pub children: ChildArrangement,
}

impl ElementReplacement {
    /// The baked-in generic-container fallback used when a rule file defines
    /// no `View` entry. Keeps `Replacements::element` total.
    pub fn generic_container() -> Self {
        Self {
            id: "View".to_string(),
            to: "div".to_string(),
            attributes: IndexMap::new(),
            css: IndexMap::new(),
            children: ChildArrangement::None,
        }
    }
}

/// Where a destination property lands on the converted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyTarget {
    Attribute,
    #[default]
    Css,
}

/// How a source attribute value is rewritten before substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    Raw,
    /// Mobile dimension vocabulary: `match_parent` → `100%`,
    /// `wrap_content` → `auto`, `12dp`/`12sp` → `12px`.
    Dimension,
    /// Strips resource-reference prefixes: `@+id/title` → `title`.
    Resource,
}

/// One destination property produced from a source attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRule {
    pub key: String,
    /// Template for the destination value; `{value}` is replaced with the
    /// (possibly rewritten) source value.
    #[serde(default = "default_value_template")]
    pub value: String,
    #[serde(default)]
    pub target: PropertyTarget,
    #[serde(default)]
    pub kind: ValueKind,
}

fn default_value_template() -> String {
    "{value}".to_string()
}

impl PropertyRule {
    fn render(&self, source_value: &str) -> String {
        let rewritten = match self.kind {
            ValueKind::Raw => source_value.to_string(),
            ValueKind::Dimension => rewrite_dimension(source_value),
            ValueKind::Resource => strip_resource_prefix(source_value).to_string(),
        };
        self.value.replace("{value}", &rewritten)
    }
}

fn rewrite_dimension(value: &str) -> String {
    match value {
        "match_parent" | "fill_parent" => "100%".to_string(),
        "wrap_content" => "auto".to_string(),
        _ => {
            if let Some(number) = value.strip_suffix("dp").or_else(|| value.strip_suffix("sp")) {
                if number.parse::<f64>().is_ok() {
                    return format!("{}px", number);
                }
            }
            value.to_string()
        }
    }
}

/// Strip a resource-reference prefix (`@+id/`, `@id/`, `@layout/`, `@style/`).
pub fn strip_resource_prefix(value: &str) -> &str {
    for prefix in ["@+id/", "@id/", "@layout/", "@style/", "@drawable/", "@mipmap/"] {
        if let Some(stripped) = value.strip_prefix(prefix) {
            return stripped;
        }
    }
    value
}

/// Replacement directive for one source attribute key.
///
/// A single source attribute may fan out to several destination properties;
/// an empty property list drops it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeReplacement {
    /// Source attribute key this rule applies to.
    pub id: String,
    /// Restrict the rule to one source tag; unscoped rules apply to any tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyRule>,
}

impl AttributeReplacement {
    /// Destination (target, key, value) triples for one source value.
    pub fn apply(&self, source_value: &str) -> Vec<(PropertyTarget, String, String)> {
        self.properties
            .iter()
            .map(|rule| (rule.target, rule.key.clone(), rule.render(source_value)))
            .collect()
    }
}

/// On-disk rule file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub elements: Vec<ElementReplacement>,
    #[serde(default)]
    pub attributes: Vec<AttributeReplacement>,
}

/// The read-only rule table, loaded once before any translation begins.
///
/// `element` is total: unrecognized tags resolve to the table's fallback (the
/// `View` entry when present, otherwise a generic container), so the walker
/// never aborts on unknown vocabulary.
#[derive(Debug, Clone)]
pub struct Replacements {
    elements: HashMap<String, ElementReplacement>,
    scoped_attributes: HashMap<(String, String), AttributeReplacement>,
    attributes: HashMap<String, AttributeReplacement>,
    fallback: ElementReplacement,
}

impl Replacements {
    pub fn from_rule_set(rule_set: RuleSet) -> RulesResult<Self> {
        let mut elements = HashMap::new();
        for rule in rule_set.elements {
            if elements.insert(rule.id.clone(), rule.clone()).is_some() {
                return Err(RulesError::DuplicateElementRule { tag: rule.id });
            }
        }

        let mut scoped_attributes = HashMap::new();
        let mut attributes = HashMap::new();
        for rule in rule_set.attributes {
            match &rule.element {
                Some(element) => {
                    let key = (element.clone(), rule.id.clone());
                    if scoped_attributes.insert(key, rule.clone()).is_some() {
                        return Err(RulesError::DuplicateAttributeRule {
                            key: rule.id,
                            scope: rule.element.unwrap_or_default(),
                        });
                    }
                }
                None => {
                    if attributes.insert(rule.id.clone(), rule.clone()).is_some() {
                        return Err(RulesError::DuplicateAttributeRule {
                            key: rule.id,
                            scope: "*".to_string(),
                        });
                    }
                }
            }
        }

        let fallback = elements
            .get("View")
            .cloned()
            .unwrap_or_else(ElementReplacement::generic_container);

        Ok(Self {
            elements,
            scoped_attributes,
            attributes,
            fallback,
        })
    }

    pub fn from_json(json: &str) -> RulesResult<Self> {
        let rule_set: RuleSet = serde_json::from_str(json)?;
        Self::from_rule_set(rule_set)
    }

    /// Total lookup: unknown tags get the fallback directive.
    pub fn element(&self, tag: &str) -> &ElementReplacement {
        self.elements.get(tag).unwrap_or(&self.fallback)
    }

    /// Attribute lookup, element-scoped entry first. `None` means the
    /// attribute is dropped silently.
    pub fn attribute(&self, tag: &str, key: &str) -> Option<&AttributeReplacement> {
        self.scoped_attributes
            .get(&(tag.to_string(), key.to_string()))
            .or_else(|| self.attributes.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: &str, to: &str, children: ChildArrangement) -> ElementReplacement {
        ElementReplacement {
            id: id.to_string(),
            to: to.to_string(),
            attributes: IndexMap::new(),
            css: IndexMap::new(),
            children,
        }
    }

    #[test]
    fn test_element_lookup_is_total() {
        let replacements = Replacements::from_rule_set(RuleSet::default()).unwrap();
        let rule = replacements.element("com.vendor.FancyWidget");
        assert_eq!(rule.to, "div");
        assert_eq!(rule.children, ChildArrangement::None);
    }

    #[test]
    fn test_view_entry_becomes_fallback() {
        let mut rule_set = RuleSet::default();
        rule_set.elements.push(ElementReplacement {
            css: [("display".to_string(), "block".to_string())]
                .into_iter()
                .collect(),
            ..element("View", "span", ChildArrangement::None)
        });
        let replacements = Replacements::from_rule_set(rule_set).unwrap();
        assert_eq!(replacements.element("Unknown").to, "span");
        assert_eq!(
            replacements.element("Unknown").css.get("display"),
            Some(&"block".to_string())
        );
    }

    #[test]
    fn test_scoped_attribute_wins_over_unscoped() {
        let rule_set = RuleSet {
            elements: vec![],
            attributes: vec![
                AttributeReplacement {
                    id: "android:src".to_string(),
                    element: None,
                    properties: vec![PropertyRule {
                        key: "data-src".to_string(),
                        value: "{value}".to_string(),
                        target: PropertyTarget::Attribute,
                        kind: ValueKind::Raw,
                    }],
                },
                AttributeReplacement {
                    id: "android:src".to_string(),
                    element: Some("ImageView".to_string()),
                    properties: vec![PropertyRule {
                        key: "src".to_string(),
                        value: "{value}".to_string(),
                        target: PropertyTarget::Attribute,
                        kind: ValueKind::Raw,
                    }],
                },
            ],
        };
        let replacements = Replacements::from_rule_set(rule_set).unwrap();
        let scoped = replacements.attribute("ImageView", "android:src").unwrap();
        assert_eq!(scoped.properties[0].key, "src");
        let unscoped = replacements.attribute("VideoView", "android:src").unwrap();
        assert_eq!(unscoped.properties[0].key, "data-src");
        assert!(replacements.attribute("ImageView", "android:never").is_none());
    }

    #[test]
    fn test_attribute_fan_out_and_templates() {
        let rule = AttributeReplacement {
            id: "android:padding".to_string(),
            element: None,
            properties: vec![
                PropertyRule {
                    key: "padding".to_string(),
                    value: "{value}".to_string(),
                    target: PropertyTarget::Css,
                    kind: ValueKind::Dimension,
                },
                PropertyRule {
                    key: "data-padded".to_string(),
                    value: "true".to_string(),
                    target: PropertyTarget::Attribute,
                    kind: ValueKind::Raw,
                },
            ],
        };
        let applied = rule.apply("16dp");
        assert_eq!(
            applied,
            vec![
                (PropertyTarget::Css, "padding".to_string(), "16px".to_string()),
                (
                    PropertyTarget::Attribute,
                    "data-padded".to_string(),
                    "true".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_dimension_rewrites() {
        assert_eq!(rewrite_dimension("match_parent"), "100%");
        assert_eq!(rewrite_dimension("wrap_content"), "auto");
        assert_eq!(rewrite_dimension("12dp"), "12px");
        assert_eq!(rewrite_dimension("14sp"), "14px");
        assert_eq!(rewrite_dimension("50%"), "50%");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "elements": [
                {"id": "LinearLayout", "to": "div", "css": {"display": "flex"}, "children": "linear"}
            ],
            "attributes": [
                {"id": "android:alpha", "properties": [{"key": "opacity"}]}
            ]
        }"#;
        let replacements = Replacements::from_json(json).unwrap();
        let rule = replacements.element("LinearLayout");
        assert_eq!(rule.to, "div");
        assert_eq!(rule.children, ChildArrangement::Linear);
        let attr = replacements.attribute("View", "android:alpha").unwrap();
        assert_eq!(attr.apply("0.5")[0].2, "0.5");
    }

    #[test]
    fn test_duplicate_element_rule_rejected() {
        let rule_set = RuleSet {
            elements: vec![
                element("TextView", "p", ChildArrangement::None),
                element("TextView", "span", ChildArrangement::None),
            ],
            attributes: vec![],
        };
        assert!(matches!(
            Replacements::from_rule_set(rule_set),
            Err(RulesError::DuplicateElementRule { .. })
        ));
    }
}
