//! Collaborator traits standing in for the document: the row container, the
//! caption and the address fragment.
//!
//! The controller only ever talks to these, so its indexing and ordering logic
//! can run against an in-memory fake as well as against [`crate::page`].

/// The element holding the visible rows. The controller owns its child list.
pub trait RenderTarget {
    /// Handle type for the row nodes moved in and out of the container.
    type Node;
    /// Detach every child. Detached nodes stay alive in the document.
    fn clear(&mut self);
    /// Attach `node` as the last child.
    fn append(&mut self, node: &Self::Node);
}

/// Element whose markup describes the active filter.
pub trait CaptionTarget {
    fn replace_markup(&mut self, html: &str);
}

/// Placeholder for controllers built without a caption.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCaption;

impl CaptionTarget for NoCaption {
    fn replace_markup(&mut self, _html: &str) {}
}

/// The page address fragment (`#b`, `#social-sciences`, `#all`).
pub trait Navigator {
    /// Set the fragment without the leading `#`; `None` clears it.
    fn set_fragment(&mut self, fragment: Option<&str>);
    fn fragment(&self) -> Option<&str>;
}

/// In-memory [`Navigator`] that keeps every assignment in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentHistory {
    entries: Vec<Option<String>>,
}

impl FragmentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Option<String>] {
        &self.entries
    }
}

impl Navigator for FragmentHistory {
    fn set_fragment(&mut self, fragment: Option<&str>) {
        self.entries.push(fragment.map(str::to_string));
    }

    fn fragment(&self) -> Option<&str> {
        self.entries.last().and_then(|f| f.as_deref())
    }
}
