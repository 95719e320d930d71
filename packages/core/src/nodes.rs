/// A node in the desired tree.
///
/// Virtual nodes are produced by the caller each frame and only borrowed by
/// the reconciler. Attaching one copies its data into a fresh live node, so
/// the same virtual tree can be walked again afterwards by the caller's own
/// content-diff pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VNode {
    /// The identity key for this node, unique among its siblings.
    ///
    /// A key signals that positional identity is not authoritative: the
    /// reconciler looks the live counterpart up by key, so a child that
    /// merely moved is relocated instead of destroyed and recreated.
    pub key: Option<String>,

    /// The desired children, in order.
    pub children: Vec<VNode>,
}

impl VNode {
    /// An unkeyed node with no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// A keyed node with no children.
    pub fn keyed(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            children: Vec::new(),
        }
    }

    /// Replace this node's children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = VNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// The identity key, if one was declared.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}
