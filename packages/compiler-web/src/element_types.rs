use std::collections::HashMap;

/// Fixed tag → DOM runtime type table for the web target.
///
/// Built once at process start and passed by reference to the emitter; never
/// mutated afterward. Unrecognized tags fall back to the generic element
/// type, mirroring the translator's unknown-vocabulary guarantee.
#[derive(Debug, Clone)]
pub struct ElementTypes {
    map: HashMap<&'static str, &'static str>,
    fallback: &'static str,
}

impl ElementTypes {
    /// The standard DOM element map.
    pub fn web() -> Self {
        let map = HashMap::from([
            ("a", "HTMLAnchorElement"),
            ("audio", "HTMLAudioElement"),
            ("body", "HTMLBodyElement"),
            ("br", "HTMLBRElement"),
            ("button", "HTMLButtonElement"),
            ("canvas", "HTMLCanvasElement"),
            ("data", "HTMLDataElement"),
            ("datalist", "HTMLDataListElement"),
            ("dialog", "HTMLDialogElement"),
            ("div", "HTMLDivElement"),
            ("dl", "HTMLDListElement"),
            ("embed", "HTMLEmbedElement"),
            ("fieldset", "HTMLFieldSetElement"),
            ("form", "HTMLFormElement"),
            ("h1", "HTMLHeadingElement"),
            ("h2", "HTMLHeadingElement"),
            ("h3", "HTMLHeadingElement"),
            ("h4", "HTMLHeadingElement"),
            ("h5", "HTMLHeadingElement"),
            ("h6", "HTMLHeadingElement"),
            ("hr", "HTMLHRElement"),
            ("iframe", "HTMLIFrameElement"),
            ("img", "HTMLImageElement"),
            ("input", "HTMLInputElement"),
            ("label", "HTMLLabelElement"),
            ("legend", "HTMLLegendElement"),
            ("li", "HTMLLIElement"),
            ("link", "HTMLLinkElement"),
            ("meter", "HTMLMeterElement"),
            ("object", "HTMLObjectElement"),
            ("ol", "HTMLOListElement"),
            ("optgroup", "HTMLOptGroupElement"),
            ("option", "HTMLOptionElement"),
            ("output", "HTMLOutputElement"),
            ("p", "HTMLParagraphElement"),
            ("picture", "HTMLPictureElement"),
            ("pre", "HTMLPreElement"),
            ("progress", "HTMLProgressElement"),
            ("select", "HTMLSelectElement"),
            ("span", "HTMLSpanElement"),
            ("table", "HTMLTableElement"),
            ("td", "HTMLTableCellElement"),
            ("template", "HTMLTemplateElement"),
            ("textarea", "HTMLTextAreaElement"),
            ("th", "HTMLTableCellElement"),
            ("tr", "HTMLTableRowElement"),
            ("ul", "HTMLUListElement"),
            ("video", "HTMLVideoElement"),
        ]);
        Self {
            map,
            fallback: "HTMLElement",
        }
    }

    pub fn lookup(&self, tag: &str) -> &'static str {
        self.map.get(tag).copied().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_and_fallback() {
        let types = ElementTypes::web();
        assert_eq!(types.lookup("a"), "HTMLAnchorElement");
        assert_eq!(types.lookup("img"), "HTMLImageElement");
        assert_eq!(types.lookup("input"), "HTMLInputElement");
        assert_eq!(types.lookup("custom-widget"), "HTMLElement");
    }
}
