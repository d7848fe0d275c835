//! Linear undo/redo history over immutable diagram snapshots.
//!
//! Snapshots capture the full node/edge collection rather than inverse
//! operations, so batched mutations (like a cascading delete) undo in one
//! step and jumping to an arbitrary snapshot is trivial.

use crate::diagram::{DiagramEdge, DiagramNode};

/// One immutable capture of diagram state.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

/// Snapshot arena plus a pointer. Any push discards the snapshots beyond the
/// pointer (no redo-branch preservation).
#[derive(Debug)]
pub struct History {
    snapshots: Vec<HistorySnapshot>,
    index: usize,
}

impl History {
    /// Starts the history at the given initial state.
    pub fn seeded(initial: HistorySnapshot) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
        }
    }

    /// The snapshot the pointer currently rests on.
    pub fn current(&self) -> &HistorySnapshot {
        &self.snapshots[self.index]
    }

    /// Records a new state, truncating any redo tail.
    pub fn push(&mut self, snapshot: HistorySnapshot) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);
        self.index += 1;
    }

    /// Moves the pointer back by one; `None` at the lower boundary.
    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.snapshots[self.index])
    }

    /// Moves the pointer forward by one; `None` at the upper boundary.
    pub fn redo(&mut self) -> Option<&HistorySnapshot> {
        if self.index + 1 >= self.snapshots.len() {
            return None;
        }
        self.index += 1;
        Some(&self.snapshots[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(tag: &str) -> HistorySnapshot {
        use crate::diagram::DiagramNode;
        use crate::model::ScreenType;
        HistorySnapshot {
            nodes: vec![DiagramNode::screen(tag, tag, ScreenType::Home)],
            edges: vec![],
        }
    }

    #[test]
    fn undo_and_redo_clamp_at_the_boundaries() {
        let mut history = History::seeded(snap("a"));
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());

        history.push(snap("b"));
        assert_eq!(history.undo().unwrap().nodes[0].id, "a");
        assert!(history.undo().is_none());
        assert_eq!(history.redo().unwrap().nodes[0].id, "b");
        assert!(history.redo().is_none());
    }

    #[test]
    fn push_after_undo_discards_the_redo_tail() {
        let mut history = History::seeded(snap("a"));
        history.push(snap("b"));
        history.push(snap("c"));
        history.undo();
        history.undo();
        history.push(snap("d"));
        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert_eq!(history.current().nodes[0].id, "d");
    }
}
