use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A translated destination element.
///
/// CSS properties are kept apart from plain attributes until emission so
/// child-arrangement strategies can add alignment properties without string
/// surgery on a `style` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestNode {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub css: IndexMap<String, String>,
    pub children: Vec<DestNode>,
}

impl DestNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            css: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_css(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.css.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: DestNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a class token to the `class` attribute.
    pub fn append_class(&mut self, class: &str) {
        match self.attributes.get_mut("class") {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => {
                self.attributes
                    .insert("class".to_string(), class.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_class() {
        let mut node = DestNode::new("div");
        node.append_class("android-TextView");
        assert_eq!(node.attributes.get("class").unwrap(), "android-TextView");
        node.append_class("highlight");
        assert_eq!(
            node.attributes.get("class").unwrap(),
            "android-TextView highlight"
        );
    }
}
