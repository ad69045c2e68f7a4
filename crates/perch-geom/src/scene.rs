//! In-memory [`Layout`] used by tests and the command-line tool.
//!
//! A scene is a flat arena of nodes keyed by [`ElementId`], each holding its
//! document-relative box and the id of its parent. The document root is
//! implicit and always present. Moving a node with `set_offset` does not move
//! its children, matching how an absolutely positioned panel behaves.

use std::collections::BTreeMap;

use tracing::trace;

use crate::{
    Error, Result,
    geom::{Offset, Rect, Viewport},
    layout::{ElementId, Layout},
};

/// A single laid-out node.
#[derive(Debug, Clone, Copy)]
struct Node {
    /// Parent node, `ElementId::DOCUMENT` for top-level nodes.
    parent: ElementId,
    /// Box in document coordinates.
    rect: Rect,
    /// Expanded/visible flag reported through `Layout::is_expanded`.
    expanded: bool,
}

/// A fixed document with a scrollable viewport.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Viewport size and scroll.
    viewport: Viewport,
    /// Box of the document root.
    document: Rect,
    /// All nodes except the document root.
    nodes: BTreeMap<ElementId, Node>,
    /// Every `set_offset` call, in order.
    writes: Vec<(ElementId, Offset)>,
}

impl Scene {
    /// An empty document exactly the size of `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            document: Rect::new(0.0, 0.0, viewport.width, viewport.height),
            nodes: BTreeMap::new(),
            writes: Vec::new(),
        }
    }

    /// Override the document size (e.g. for a page taller than the viewport).
    pub fn with_document_size(mut self, w: f64, h: f64) -> Self {
        self.document = Rect::new(0.0, 0.0, w, h);
        self
    }

    /// Builder form of [`Scene::insert`].
    pub fn with_element(mut self, id: ElementId, parent: ElementId, rect: Rect) -> Result<Self> {
        self.insert(id, parent, rect)?;
        Ok(self)
    }

    /// Add or replace a node. `parent` must be the document or an existing
    /// node.
    pub fn insert(&mut self, id: ElementId, parent: ElementId, rect: Rect) -> Result<()> {
        if id.is_root() {
            return Err(Error::RootElement(id));
        }
        if parent == ElementId::WINDOW {
            return Err(Error::RootElement(parent));
        }
        if parent != ElementId::DOCUMENT && !self.nodes.contains_key(&parent) {
            return Err(Error::UnknownElement(parent));
        }
        self.nodes.insert(
            id,
            Node {
                parent,
                rect,
                expanded: true,
            },
        );
        Ok(())
    }

    /// Mark a node as expanded or collapsed.
    pub fn set_expanded(&mut self, id: ElementId, expanded: bool) -> Result<()> {
        let node = self.nodes.get_mut(&id).ok_or(Error::UnknownElement(id))?;
        node.expanded = expanded;
        Ok(())
    }

    /// Replace viewport size and scroll.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Scroll the page to `(x, y)`.
    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.viewport.scroll_x = x;
        self.viewport.scroll_y = y;
    }

    /// Document-relative box of a node (or of the document root).
    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        if id == ElementId::DOCUMENT {
            return Some(self.document);
        }
        self.nodes.get(&id).map(|n| n.rect)
    }

    /// Every offset written through the layout so far.
    pub fn writes(&self) -> &[(ElementId, Offset)] {
        &self.writes
    }

    /// Forget recorded writes.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl Layout for Scene {
    fn bounding_rect(&self, id: ElementId) -> Result<Rect> {
        let rect = self.rect(id).ok_or(Error::UnknownElement(id))?;
        Ok(rect.translate(-self.viewport.scroll_x, -self.viewport.scroll_y))
    }

    fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(&id).map(|n| n.parent)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn document_rect(&self, id: ElementId) -> Result<Rect> {
        self.rect(id).ok_or(Error::UnknownElement(id))
    }

    fn set_offset(&mut self, id: ElementId, offset: Offset) -> Result<()> {
        let node = self.nodes.get_mut(&id).ok_or(Error::UnknownElement(id))?;
        node.rect = node.rect.at(offset);
        trace!(element = %id, %offset, "set_offset");
        self.writes.push((id, offset));
        Ok(())
    }

    fn is_expanded(&self, id: ElementId) -> bool {
        self.nodes.get(&id).is_none_or(|n| n.expanded)
    }
}
