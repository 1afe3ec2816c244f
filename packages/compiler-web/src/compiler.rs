use relayout_translator::DestNode;

/// Options for HTML emission
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn line_break(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize a translated tree to an HTML fragment.
///
/// The fragment has no doctype or head; it is hydrated at runtime by the
/// generated wrapper's `inflate()` entry point.
pub fn compile_document(root: &DestNode, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    compile_node(root, &mut ctx);
    ctx.get_output()
}

fn compile_node(node: &DestNode, ctx: &mut Context) {
    if ctx.options.pretty {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", node.tag));

    for (key, value) in &node.attributes {
        ctx.add(&format!(" {}=\"{}\"", key, escape_html(value)));
    }

    if !node.css.is_empty() {
        let style = node
            .css
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("; ");
        ctx.add(&format!(" style=\"{}\"", escape_html(&style)));
    }

    if node.children.is_empty() && is_self_closing(&node.tag) {
        ctx.add("/>");
        ctx.line_break();
        return;
    }

    ctx.add(">");

    if !node.children.is_empty() {
        ctx.line_break();
        ctx.depth += 1;
        for child in &node.children {
            compile_node(child, ctx);
        }
        ctx.depth -= 1;
        if ctx.options.pretty {
            ctx.add_indent();
        }
    }

    ctx.add(&format!("</{}>", node.tag));
    ctx.line_break();
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
