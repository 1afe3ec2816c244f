use crate::error::{DescriptorError, DescriptorResult};
use relayout_common::layout_class_name;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// A named reference to an identified element, exposed to generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Normalized (camelCase) identifier, unique within one layout.
    pub name: String,
    /// Source element tag, used for runtime-type lookup at emission.
    pub element: String,
    /// Raw resource identifier with reference prefixes stripped.
    pub resource_id: String,
    /// True when the element is absent from at least one variant.
    pub optional: bool,
}

/// A named reference to another logical layout embedded via `<include>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubLayout {
    pub name: String,
    pub resource_id: String,
    /// Logical name of the referenced layout.
    pub layout: String,
    /// Generated class of the referenced layout (`row_item` → `RowItemXml`).
    pub layout_class: String,
    pub optional: bool,
}

/// A side-effect hook invoked after hydration.
///
/// Layout parsing produces none of these today; the merge still reconciles
/// them so descriptors built by other frontends combine correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub invocation: String,
    pub optional: bool,
}

/// Everything known about one logical layout across its variants.
///
/// Constructed once per logical name and read-only afterwards; ordered maps
/// and sets keep merging and emission deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    pub name: String,
    /// Variant qualifiers contributing to this layout; the default folder
    /// contributes the empty qualifier.
    pub variants: BTreeSet<String>,
    pub files: BTreeSet<PathBuf>,
    pub bindings: BTreeMap<String, Binding>,
    pub sublayouts: BTreeMap<String, SubLayout>,
    pub actions: BTreeMap<String, Action>,
}

impl LayoutDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: BTreeSet::new(),
            files: BTreeSet::new(),
            bindings: BTreeMap::new(),
            sublayouts: BTreeMap::new(),
            actions: BTreeMap::new(),
        }
    }

    /// Generated wrapper class name for this layout.
    pub fn class_name(&self) -> String {
        layout_class_name(&self.name)
    }
}

/// Merge all variant parses of one logical layout into a single descriptor.
///
/// `variants` and `files` are unions. An entry present in every contributing
/// parse keeps its value; an entry absent from at least one is forced
/// optional. Contributors are visited in ascending variant-qualifier order
/// (default first), so both set membership and representative payloads are
/// independent of argument order.
pub fn combine(parses: Vec<LayoutDescriptor>) -> DescriptorResult<LayoutDescriptor> {
    let mut sorted = parses;
    sorted.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));

    let first = sorted.first().ok_or(DescriptorError::EmptyCombine)?;
    let mut result = LayoutDescriptor::new(first.name.clone());

    for parse in &sorted {
        if parse.name != result.name {
            return Err(DescriptorError::MixedNames {
                expected: result.name.clone(),
                found: parse.name.clone(),
            });
        }
        result.variants.extend(parse.variants.iter().cloned());
        result.files.extend(parse.files.iter().cloned());
    }

    for parse in &sorted {
        for (key, value) in &parse.bindings {
            result
                .bindings
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        for (key, value) in &parse.sublayouts {
            result
                .sublayouts
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        for (key, value) in &parse.actions {
            result
                .actions
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    for (key, binding) in result.bindings.iter_mut() {
        if !sorted.iter().all(|p| p.bindings.contains_key(key)) {
            binding.optional = true;
        }
    }
    for (key, sublayout) in result.sublayouts.iter_mut() {
        if !sorted.iter().all(|p| p.sublayouts.contains_key(key)) {
            sublayout.optional = true;
        }
    }
    for (key, action) in result.actions.iter_mut() {
        if !sorted.iter().all(|p| p.actions.contains_key(key)) {
            action.optional = true;
        }
    }

    Ok(result)
}

fn sort_key(descriptor: &LayoutDescriptor) -> String {
    descriptor
        .variants
        .iter()
        .next()
        .cloned()
        .unwrap_or_default()
}
