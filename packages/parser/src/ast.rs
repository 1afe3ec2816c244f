use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single element in a parsed layout resource.
///
/// Attribute order is the source document order; keys are unique within one
/// element. The tree is immutable once parsed — all downstream passes walk it
/// by reference and produce new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: LayoutNode) -> Self {
        self.children.push(child);
        self
    }

    /// Look up an attribute by key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Final segment of the tag name after the last `.` separator
    /// (`com.example.widget.Chip` → `Chip`).
    pub fn local_name(&self) -> &str {
        self.tag.rsplit('.').next().unwrap_or(&self.tag)
    }
}
