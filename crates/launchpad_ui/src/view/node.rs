//! Core view node types.

use std::fmt;

/// Unique identifier for a node within one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Creates a new node ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Stable identifier of an editable region.
///
/// Tags survive re-renders: the host uses them to find the node that shows
/// a given configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(pub &'static str);

impl Tag {
    /// Returns the tag text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// What a node shows.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Groups children.
    Container,
    /// A run of text.
    Text(String),
    /// An icon, by name. Drawing it is the host's job.
    Icon(&'static str),
    /// An activatable control leading somewhere.
    Link {
        /// Visible label.
        label: String,
        /// Where activation goes.
        destination: String,
        /// Tag of the field that supplied `destination`.
        destination_tag: Tag,
    },
    /// A decorative layer, by name.
    Layer(&'static str),
}

/// Visual state of a node relative to its resting layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    /// Opacity (0-1).
    pub opacity: f32,
    /// Translation from the resting position.
    pub offset: (f32, f32),
    /// Rotation in degrees.
    pub rotation: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl Visual {
    /// Fully visible, untransformed.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        offset: (0.0, 0.0),
        rotation: 0.0,
        scale: 1.0,
    };
}

impl Default for Visual {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A node in the view tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    /// What the node shows.
    pub kind: NodeKind,
    /// Editable-region tag, if any.
    pub tag: Option<Tag>,
    /// Visual state.
    pub visual: Visual,
}

impl ViewNode {
    /// Creates an untagged node with the identity visual.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            tag: None,
            visual: Visual::IDENTITY,
        }
    }

    /// Creates a container node.
    #[must_use]
    pub fn container() -> Self {
        Self::new(NodeKind::Container)
    }

    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(text.into()))
    }

    /// Attaches an editable-region tag.
    #[must_use]
    pub fn tagged(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Replaces the visual state.
    #[must_use]
    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = visual;
        self
    }

    /// Returns the text this node shows, if it is text or a link.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Link { label, .. } => Some(label),
            _ => None,
        }
    }
}
