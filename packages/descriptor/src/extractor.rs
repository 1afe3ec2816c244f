use crate::descriptor::{Binding, LayoutDescriptor, SubLayout};
use crate::error::{DescriptorError, DescriptorResult};
use relayout_common::{camel_case, layout_class_name};
use relayout_parser::LayoutNode;
use relayout_rules::{effective_attributes, strip_resource_prefix, StyleResolver};
use std::path::Path;
use tracing::debug;

/// Host-managed tab marker; never bound and never descended into.
const TAB_ITEM_TAG: &str = "com.google.android.material.tabs.TabItem";

/// Collect every identified element of one variant parse into a descriptor.
///
/// Walks the raw source tree, independent of translation. The accumulator is
/// local to this call and returned, never hidden state, so extraction of many
/// files can run in parallel against one shared resolver.
pub fn extract(
    name: &str,
    variant: &str,
    file: &Path,
    root: &LayoutNode,
    resolver: &dyn StyleResolver,
) -> DescriptorResult<LayoutDescriptor> {
    let mut descriptor = LayoutDescriptor::new(name);
    descriptor.variants.insert(variant.to_string());
    descriptor.files.insert(file.to_path_buf());
    collect(root, &root.tag, resolver, &mut descriptor)?;
    Ok(descriptor)
}

fn collect(
    node: &LayoutNode,
    path: &str,
    resolver: &dyn StyleResolver,
    descriptor: &mut LayoutDescriptor,
) -> DescriptorResult<()> {
    if node.tag == TAB_ITEM_TAG {
        debug!(path = %path, "skipping host-managed tab item");
        return Ok(());
    }

    let effective = effective_attributes(&node.attributes, resolver).map_err(|source| {
        DescriptorError::UnresolvedStyle {
            path: path.to_string(),
            source,
        }
    })?;

    if let Some(raw) = effective.get("android:id") {
        let resource_id = strip_resource_prefix(raw).to_string();
        let binding_name = camel_case(&resource_id);

        if descriptor.bindings.contains_key(&binding_name)
            || descriptor.sublayouts.contains_key(&binding_name)
        {
            return Err(DescriptorError::DuplicateIdentifier {
                name: binding_name,
                path: path.to_string(),
            });
        }

        if node.tag == "include" {
            let layout_raw =
                effective
                    .get("layout")
                    .ok_or_else(|| DescriptorError::MissingLayoutAttribute {
                        path: path.to_string(),
                    })?;
            let layout_name = strip_resource_prefix(layout_raw);
            descriptor.sublayouts.insert(
                binding_name.clone(),
                SubLayout {
                    name: binding_name,
                    resource_id,
                    layout: layout_name.to_string(),
                    layout_class: layout_class_name(layout_name),
                    optional: false,
                },
            );
        } else {
            descriptor.bindings.insert(
                binding_name.clone(),
                Binding {
                    name: binding_name,
                    element: node.tag.clone(),
                    resource_id,
                    optional: false,
                },
            );
        }
    }

    for (index, child) in node.children.iter().enumerate() {
        let child_path = format!("{}/{}[{}]", path, child.tag, index);
        collect(child, &child_path, resolver, descriptor)?;
    }
    Ok(())
}
