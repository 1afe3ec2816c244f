use crate::element_types::ElementTypes;
use relayout_descriptor::LayoutDescriptor;
use relayout_rules::Replacements;

/// Emit the TypeScript wrapper for one merged layout.
///
/// The wrapper exposes `_root`, one typed reference per binding and
/// sublayout, and a zero-argument `inflate()` that hydrates the generated
/// markup and returns the bound references keyed by name. Binding types go
/// through the element replacement's destination tag, then the runtime-type
/// table; optional entries become optional members.
pub fn generate_wrapper(
    descriptor: &LayoutDescriptor,
    replacements: &Replacements,
    types: &ElementTypes,
) -> String {
    let class_name = descriptor.class_name();
    let mut out = String::new();

    out.push_str("import {inflateHtmlFile} from \"android-xml-runtime\";\n");
    out.push_str(&format!("import html from './{}.html'\n", descriptor.name));
    for sublayout in descriptor.sublayouts.values() {
        out.push_str(&format!(
            "import {{{}}} from './{}'\n",
            sublayout.layout_class, sublayout.layout
        ));
    }
    out.push('\n');

    out.push_str(&format!("export interface {} {{\n", class_name));
    out.push_str("    _root: HTMLElement\n");
    for binding in descriptor.bindings.values() {
        let dest_tag = &replacements.element(&binding.element).to;
        out.push_str(&format!(
            "    {}{}: {}\n",
            binding.name,
            if binding.optional { "?" } else { "" },
            types.lookup(dest_tag)
        ));
    }
    for sublayout in descriptor.sublayouts.values() {
        out.push_str(&format!(
            "    {}{}: {}\n",
            sublayout.name,
            if sublayout.optional { "?" } else { "" },
            sublayout.layout_class
        ));
    }
    out.push_str("}\n\n");

    let outlet_names = descriptor
        .bindings
        .keys()
        .chain(descriptor.sublayouts.keys())
        .map(|name| format!("\"{}\"", name))
        .collect::<Vec<_>>()
        .join(", ");

    out.push_str(&format!("export namespace {} {{\n", class_name));
    out.push_str("    export function inflate() {\n");
    if outlet_names.is_empty() {
        out.push_str(&format!(
            "        return inflateHtmlFile(html) as {}\n",
            class_name
        ));
    } else {
        out.push_str(&format!(
            "        return inflateHtmlFile(html, {}) as {}\n",
            outlet_names, class_name
        ));
    }
    out.push_str("    }\n");
    out.push_str("}\n");

    out
}
