use crate::tree::NodeId;

/// Errors that can occur while building or mutating the widget tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// The node does not exist (never added, or removed).
    UnknownNode(NodeId),

    /// The tree has no root node.
    NoRoot,

    /// A node cannot be its own child.
    SelfParent(NodeId),

    /// Attaching the child would make it an ancestor of itself.
    Cycle { parent: NodeId, child: NodeId },
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::UnknownNode(id) => write!(f, "Unknown node: {:?}", id),
            UiError::NoRoot => write!(f, "UI tree has no root node"),
            UiError::SelfParent(id) => write!(f, "Node {:?} cannot be its own child", id),
            UiError::Cycle { parent, child } => write!(
                f,
                "Adding {:?} under {:?} would create a cycle",
                child, parent
            ),
        }
    }
}

impl std::error::Error for UiError {}

/// Result type for UI tree operations.
pub type UiResult<T> = Result<T, UiError>;
