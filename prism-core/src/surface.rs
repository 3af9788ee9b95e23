//! In-memory surface implementation

use prism_plugin_api::Surface;

/// A surface that renders to an in-memory frame.
///
/// Backs the CLI's one-shot rendering and the test suites; a real
/// frontend would substitute its own [`Surface`] over a DOM node or
/// framebuffer.
#[derive(Debug)]
pub struct FrameSurface {
    size: (u16, u16),
    class: Option<String>,
    nodes: Vec<String>,
}

impl FrameSurface {
    /// Create an empty surface of the given size
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            size: (cols, rows),
            class: None,
            nodes: Vec::new(),
        }
    }

    /// Change the surface size.
    ///
    /// The active effect is not notified here; the owner forwards a
    /// resize through its host afterwards.
    pub fn set_size(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    /// Current presentation class
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Rendered nodes, in insertion order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Render the frame as one newline-joined string
    pub fn render(&self) -> String {
        self.nodes.join("\n")
    }
}

impl Surface for FrameSurface {
    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn set_class(&mut self, class: Option<&str>) {
        self.class = class.map(str::to_string);
    }

    fn push(&mut self, node: &str) {
        self.nodes.push(node.to_string());
    }

    fn size(&self) -> (u16, u16) {
        self.size
    }
}
