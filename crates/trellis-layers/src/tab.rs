#![forbid(unsafe_code)]

//! Tabbed selection of one child among many.

use crate::{Layer, LayerRef};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use trellis_core::Attr;
use trellis_layout::{Size, size};
use trellis_render::Canvas;

/// Which child a [`Tab`] currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A named child.
    ByName(String),
    /// A positional child.
    ByIndex(usize),
    /// Nothing; the tab clears its area.
    Hidden,
}

/// Shows one of an ordered list of children, selected by name or index.
///
/// A fresh tab is [`Selection::Hidden`]. Selecting a name that was never
/// registered or an index out of range is not an error: the tab clears its
/// area and renders a diagnostic string in place, and a later valid
/// selection recovers. The tab's reported size is the maximum over *all*
/// children regardless of the current selection, so switching never changes
/// the space it asks its parent for.
pub struct Tab {
    children: RefCell<Vec<LayerRef>>,
    named: RefCell<HashMap<String, LayerRef>>,
    selection: RefCell<Selection>,
}

impl Tab {
    /// An empty, hidden tab.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            children: RefCell::new(Vec::new()),
            named: RefCell::new(HashMap::new()),
            selection: RefCell::new(Selection::Hidden),
        })
    }

    /// Replace the ordered child list.
    pub fn set_children(&self, children: Vec<LayerRef>) {
        *self.children.borrow_mut() = children;
    }

    /// Register a name for a child, returning the child for inline use in
    /// the element list.
    pub fn name(&self, name: impl Into<String>, child: LayerRef) -> LayerRef {
        self.named.borrow_mut().insert(name.into(), child.clone());
        child
    }

    /// Show the child registered under `name`.
    pub fn show_name(&self, name: impl Into<String>) {
        let name = name.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(name = %name, "tab selection");
        *self.selection.borrow_mut() = Selection::ByName(name);
    }

    /// Show the child at `index` in the element list.
    pub fn show_index(&self, index: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(index, "tab selection");
        *self.selection.borrow_mut() = Selection::ByIndex(index);
    }

    /// Show nothing.
    pub fn hide(&self) {
        *self.selection.borrow_mut() = Selection::Hidden;
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.selection.borrow().clone()
    }
}

enum Shown {
    Child(LayerRef),
    Diagnostic(String),
    Nothing,
}

impl Tab {
    fn shown(&self) -> Shown {
        match &*self.selection.borrow() {
            Selection::ByName(name) => match self.named.borrow().get(name) {
                Some(child) => Shown::Child(child.clone()),
                None => Shown::Diagnostic(format!("element not found: {name}")),
            },
            Selection::ByIndex(index) => match self.children.borrow().get(*index) {
                Some(child) => Shown::Child(child.clone()),
                None => Shown::Diagnostic(format!("invalid index: {index}")),
            },
            Selection::Hidden => Shown::Nothing,
        }
    }
}

impl Layer for Tab {
    fn width(&self) -> Size {
        size::max(self.children.borrow().iter().map(|c| c.width()))
    }

    fn height(&self) -> Size {
        size::max(self.children.borrow().iter().map(|c| c.height()))
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        match self.shown() {
            Shown::Child(child) => child.render(canvas),
            Shown::Diagnostic(message) => {
                canvas.clear();
                canvas.draw_text(0, 0, &message, Attr::DEFAULT, Attr::DEFAULT);
            }
            Shown::Nothing => canvas.clear(),
        }
    }

    fn invalidate(&self) {
        for child in self.children.borrow().iter() {
            child.invalidate();
        }
        for child in self.named.borrow().values() {
            child.invalidate();
        }
    }
}
