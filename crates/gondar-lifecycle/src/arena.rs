//! Attachment arena — one tracking record per live UI node.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::attachment::{SignalOutcome, TrackingAttachment};
use crate::trigger::EventTrigger;

/// Identifier of a UI node holding a tracking attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generates a fresh node identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Owns the tracking attachments of live UI nodes. Detaching a node drops
/// its attachment, latches included; a node attached again starts fresh.
#[derive(Debug, Default)]
pub struct AttachmentArena {
    attachments: HashMap<NodeId, TrackingAttachment>,
}

impl AttachmentArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `attachment` under a new node id.
    pub fn attach(&mut self, attachment: TrackingAttachment) -> NodeId {
        let node = NodeId::new();
        self.attachments.insert(node, attachment);
        debug!(%node, "attachment added");
        node
    }

    /// Delivers a lifecycle signal to `node`. Returns `None` if the node is
    /// not attached.
    pub fn signal(&mut self, node: NodeId, trigger: EventTrigger) -> Option<SignalOutcome> {
        let Some(attachment) = self.attachments.get_mut(&node) else {
            warn!(%node, %trigger, "signal for unknown node");
            return None;
        };
        Some(attachment.signal(trigger))
    }

    /// Removes and returns the attachment for `node`.
    pub fn detach(&mut self, node: NodeId) -> Option<TrackingAttachment> {
        let removed = self.attachments.remove(&node);
        if removed.is_some() {
            debug!(%node, "attachment removed");
        }
        removed
    }

    /// Returns `true` if `node` is attached.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.attachments.contains_key(&node)
    }

    /// Number of attached nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    /// Returns `true` if no node is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }
}
