use crate::dest::DestNode;
use crate::error::{TranslateError, TranslateResult};
use crate::gravity::{Align, Gravity};
use indexmap::IndexMap;
use relayout_parser::LayoutNode;
use relayout_rules::{
    effective_attributes, ChildArrangement, PropertyTarget, Replacements, StyleResolver,
};
use tracing::{debug, warn};

/// Source values meaning "fill available space" along an axis.
fn fills_parent(value: Option<&str>) -> bool {
    matches!(value, Some("match_parent") | Some("fill_parent"))
}

/// Target-specific behavior injected into the generic walker.
///
/// Traversal lives in one place; a strategy only customizes node decoration
/// and `custom`-arranged elements. The default child-arrangement algorithms
/// (`none`/`linear`/`frame`) are provided here and may be overridden
/// wholesale by a target that lays children out differently.
pub trait LayoutStrategy {
    /// Post-process a converted node (marker classes, target attributes).
    fn decorate(&self, _source: &LayoutNode, _dest: &mut DestNode) {}

    /// Place and align the children of `source` inside `dest`.
    fn arrange_children(
        &self,
        translator: &Translator,
        arrangement: ChildArrangement,
        source: &LayoutNode,
        effective: &IndexMap<String, String>,
        dest: &mut DestNode,
        path: &str,
    ) -> TranslateResult<()> {
        match arrangement {
            ChildArrangement::None => {
                if !source.children.is_empty() {
                    debug!(tag = %source.tag, "leaf element; ignoring {} children", source.children.len());
                }
                Ok(())
            }
            ChildArrangement::Linear => arrange_linear(translator, source, effective, dest, path),
            ChildArrangement::Frame => arrange_frame(translator, source, dest, path),
            ChildArrangement::Custom => {
                warn!(tag = %source.tag, "custom arrangement not handled by strategy");
                Err(TranslateError::UnsupportedArrangement {
                    tag: source.tag.clone(),
                    path: path.to_string(),
                })
            }
        }
    }
}

/// Children flow along one axis; each child's cross-axis alignment comes from
/// its size along the main axis (fill → stretch) or its own gravity.
pub fn arrange_linear(
    translator: &Translator,
    source: &LayoutNode,
    effective: &IndexMap<String, String>,
    dest: &mut DestNode,
    path: &str,
) -> TranslateResult<()> {
    let vertical = effective.get("android:orientation").map(String::as_str) == Some("vertical");
    dest.css.insert(
        "flex-direction".to_string(),
        if vertical { "column" } else { "row" }.to_string(),
    );

    let main_size_key = if vertical {
        "android:layout_height"
    } else {
        "android:layout_width"
    };

    for (index, child) in source.children.iter().enumerate() {
        let mut child_dest = translator.convert_child(child, path, index)?;
        let align = if fills_parent(child.attr(main_size_key)) {
            Align::Stretch
        } else {
            child
                .attr("android:layout_gravity")
                .map(Gravity::parse)
                .unwrap_or_default()
                .axis(!vertical)
        };
        child_dest
            .css
            .insert("align-self".to_string(), align.css_value().to_string());
        dest.children.push(child_dest);
    }
    Ok(())
}

/// Children overlap in a stack; both axes are aligned independently from the
/// child's size attributes and gravity.
pub fn arrange_frame(
    translator: &Translator,
    source: &LayoutNode,
    dest: &mut DestNode,
    path: &str,
) -> TranslateResult<()> {
    for (index, child) in source.children.iter().enumerate() {
        let mut child_dest = translator.convert_child(child, path, index)?;
        let gravity = child
            .attr("android:layout_gravity")
            .map(Gravity::parse)
            .unwrap_or_default();

        let horizontal = if fills_parent(child.attr("android:layout_width")) {
            Align::Stretch
        } else {
            gravity.axis(false)
        };
        let vertical = if fills_parent(child.attr("android:layout_height")) {
            Align::Stretch
        } else {
            gravity.axis(true)
        };

        child_dest.css.insert(
            "justify-self".to_string(),
            horizontal.css_value().to_string(),
        );
        child_dest
            .css
            .insert("align-self".to_string(), vertical.css_value().to_string());
        dest.children.push(child_dest);
    }
    Ok(())
}

/// The web target: converted elements keep a marker class derived from the
/// source tag's local name so unmapped widgets stay selectable in CSS.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStrategy;

impl LayoutStrategy for WebStrategy {
    fn decorate(&self, source: &LayoutNode, dest: &mut DestNode) {
        dest.append_class(&format!("android-{}", source.local_name()));
    }
}

/// Recursive tree walker applying the rule table.
///
/// Pure and synchronous; the rule table, style resolver and strategy are all
/// read-only, so one translator may serve many files across threads.
pub struct Translator<'a> {
    replacements: &'a Replacements,
    resolver: &'a dyn StyleResolver,
    strategy: &'a dyn LayoutStrategy,
}

impl<'a> Translator<'a> {
    pub fn new(
        replacements: &'a Replacements,
        resolver: &'a dyn StyleResolver,
        strategy: &'a dyn LayoutStrategy,
    ) -> Self {
        Self {
            replacements,
            resolver,
            strategy,
        }
    }

    /// Translate a source tree into a destination tree.
    pub fn convert_element(&self, source: &LayoutNode) -> TranslateResult<DestNode> {
        self.convert_at(source, &source.tag)
    }

    /// Translate one child, extending the element path used in errors.
    pub fn convert_child(
        &self,
        child: &LayoutNode,
        parent_path: &str,
        index: usize,
    ) -> TranslateResult<DestNode> {
        let path = format!("{}/{}[{}]", parent_path, child.tag, index);
        self.convert_at(child, &path)
    }

    fn convert_at(&self, source: &LayoutNode, path: &str) -> TranslateResult<DestNode> {
        let effective = effective_attributes(&source.attributes, self.resolver).map_err(
            |source_err| TranslateError::UnresolvedStyle {
                path: path.to_string(),
                source: source_err,
            },
        )?;

        if source.tag == "include" && !effective.contains_key("layout") {
            return Err(TranslateError::MissingLayoutAttribute {
                path: path.to_string(),
            });
        }

        let rule = self.replacements.element(&source.tag);
        let mut dest = DestNode::new(rule.to.clone());
        dest.attributes = rule.attributes.clone();
        dest.css = rule.css.clone();

        for (key, value) in &effective {
            match self.replacements.attribute(&source.tag, key) {
                Some(attr_rule) => {
                    for (target, dest_key, dest_value) in attr_rule.apply(value) {
                        match target {
                            PropertyTarget::Attribute => {
                                dest.attributes.insert(dest_key, dest_value);
                            }
                            PropertyTarget::Css => {
                                dest.css.insert(dest_key, dest_value);
                            }
                        }
                    }
                }
                None => {
                    if key != "style" && !key.starts_with("xmlns") {
                        debug!(tag = %source.tag, attribute = %key, "no rule; dropping attribute");
                    }
                }
            }
        }

        self.strategy.decorate(source, &mut dest);

        self.strategy
            .arrange_children(self, rule.children, source, &effective, &mut dest, path)?;

        Ok(dest)
    }
}
