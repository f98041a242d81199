//! Open document panes and owning-document resolution.

use rustc_hash::FxHashSet;
use std::path::PathBuf;

use crate::models::TextBuffer;

use super::error::{Result, ZoomError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Rendered image element metadata as delivered by the host view.
#[derive(Debug, Clone)]
pub struct ImageElement {
    pub id: ElementId,
    /// The reference identifier, typically a URI-like string.
    pub src: String,
    /// CSS-class-like markers attached by the renderer.
    pub classes: Vec<String>,
    /// Secondary source attribute carried by drawing embeds.
    pub fallback_src: Option<String>,
    /// Intrinsic pixel width, when the host already has it on hand.
    pub natural_width: Option<u32>,
}

impl ImageElement {
    pub fn new(id: ElementId, src: impl Into<String>) -> Self {
        Self {
            id,
            src: src.into(),
            classes: Vec::new(),
            fallback_src: None,
            natural_width: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneKind {
    /// A rendering/editing view over a Markdown document.
    MarkdownView,
    /// Any other pane type; never a zoom target.
    Other,
}

pub struct PaneState {
    pub kind: PaneKind,
    pub path: Option<PathBuf>,
    pub buffer: TextBuffer,
    pub dirty: bool,
    rendered: FxHashSet<ElementId>,
}

impl PaneState {
    pub fn new(kind: PaneKind, path: Option<PathBuf>, content: &str) -> Self {
        Self {
            kind,
            path,
            buffer: TextBuffer::from_text(content),
            dirty: false,
            rendered: FxHashSet::default(),
        }
    }

    pub fn markdown(path: Option<PathBuf>, content: &str) -> Self {
        Self::new(PaneKind::MarkdownView, path, content)
    }

    /// Record that the pane's rendered output contains this element.
    pub fn render_element(&mut self, id: ElementId) {
        self.rendered.insert(id);
    }

    pub fn remove_element(&mut self, id: ElementId) {
        self.rendered.remove(&id);
    }

    pub fn contains_element(&self, id: ElementId) -> bool {
        self.rendered.contains(&id)
    }
}

#[derive(Default)]
pub struct WorkspaceState {
    pub panes: Vec<PaneState>,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self { panes: Vec::new() }
    }

    pub fn open_pane(&mut self, pane: PaneState) -> usize {
        self.panes.push(pane);
        self.panes.len() - 1
    }

    /// Find the markdown-view pane whose rendered output contains the
    /// element. Non-markdown panes are never considered.
    pub fn resolve_owner(&self, element: ElementId) -> Result<usize> {
        self.panes
            .iter()
            .position(|p| p.kind == PaneKind::MarkdownView && p.contains_element(element))
            .ok_or(ZoomError::NoOwningDocument)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/workspace.rs"]
mod tests;
