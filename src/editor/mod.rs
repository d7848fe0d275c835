//! Interactive diagram editing: selection, transforms, and undo/redo.
//!
//! The editor owns the live node/edge collection after layout hands it over;
//! it never consults the architecture that produced the diagram. Structural
//! mutations are gated by the `editable` flag and the current tool (select
//! vs. pan), and unmet preconditions are silent no-ops rather than errors —
//! the UI affordances that trigger them are disabled in the same situations.

pub mod history;

pub use history::{History, HistorySnapshot};

use crate::diagram::{Diagram, DiagramEdge, DiagramNode, NodeKind, Position};
use crate::model::Architecture;
use ahash::AHashSet;
use itertools::Itertools;

/// Pointer tool mode. Purely cosmetic aside from gating: in `Pan` mode drags
/// move the canvas, so structural mutations are not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Pan,
}

/// Shared x-coordinate an alignment collapses the selection onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignDirection {
    /// Minimum x of the selection.
    Left,
    /// Mean of the two extremes.
    Center,
    /// Maximum x of the selection.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributeDirection {
    Horizontal,
    Vertical,
}

const DUPLICATE_OFFSET: f64 = 32.0;

/// State machine over `{nodes, edges, selection, history}` with linear
/// undo/redo. One snapshot is recorded per user-visible mutation, so batched
/// operations (cascading delete, multi-node align) undo in a single step.
#[derive(Debug)]
pub struct DiagramEditor {
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
    selection: AHashSet<String>,
    history: History,
    editable: bool,
    tool: Tool,
    id_seq: u64,
}

impl DiagramEditor {
    /// Takes ownership of a freshly laid-out diagram and seeds the history
    /// with it.
    pub fn from_diagram(diagram: Diagram) -> Self {
        let initial = HistorySnapshot {
            nodes: diagram.nodes.clone(),
            edges: diagram.edges.clone(),
        };
        Self {
            nodes: diagram.nodes,
            edges: diagram.edges,
            selection: AHashSet::new(),
            history: History::seeded(initial),
            editable: true,
            tool: Tool::Select,
            id_seq: 0,
        }
    }

    // --- Accessors ---

    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn selection(&self) -> &AHashSet<String> {
        &self.selection
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn can_undo(&self) -> bool {
        self.editable && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editable && self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The current diagram state, e.g. for handing back to the renderer.
    pub fn diagram(&self) -> Diagram {
        Diagram {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    // --- Mode and selection (never recorded in history) ---

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    pub fn select(&mut self, node_id: &str) {
        if self.node(node_id).is_some() {
            self.selection.insert(node_id.to_string());
        }
    }

    pub fn toggle_select(&mut self, node_id: &str) {
        if self.selection.contains(node_id) {
            self.selection.remove(node_id);
        } else {
            self.select(node_id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // --- Structural mutations (one history entry each) ---

    /// Adds an edge with a default label. No-op when editing is gated off,
    /// when either endpoint is unknown, or when the edge already exists.
    pub fn connect(&mut self, source_id: &str, target_id: &str) {
        if !self.can_mutate() {
            return;
        }
        if self.node(source_id).is_none() || self.node(target_id).is_none() {
            return;
        }
        if self
            .edges
            .iter()
            .any(|e| e.source == source_id && e.target == target_id)
        {
            return;
        }
        self.id_seq += 1;
        let id = format!("edge_{}", self.id_seq);
        self.edges
            .push(DiagramEdge::new(id, source_id, target_id).labeled("go"));
        self.commit();
    }

    /// Updates a node position without recording history; drags are batched
    /// into one entry at [`end_drag`](Self::end_drag) so the undo stack is
    /// not flooded per pixel.
    pub fn move_node(&mut self, node_id: &str, position: Position) {
        if !self.can_mutate() {
            return;
        }
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) {
            node.position = position;
        }
    }

    /// Records one history entry for the drag that just finished, if it
    /// actually moved anything.
    pub fn end_drag(&mut self) {
        if !self.can_mutate() {
            return;
        }
        if self.dirty() {
            self.commit();
        }
    }

    /// Removes every selected node and, transitively, every edge incident to
    /// a removed node, then clears the selection. One undoable step.
    pub fn delete_selected(&mut self) {
        if !self.can_mutate() || self.selection.is_empty() {
            return;
        }
        let selected = std::mem::take(&mut self.selection);
        self.nodes.retain(|n| !selected.contains(&n.id));
        self.edges
            .retain(|e| !selected.contains(&e.source) && !selected.contains(&e.target));
        self.commit();
    }

    /// Clones a node under a fresh id at an offset position. Incident edges
    /// are not duplicated.
    pub fn duplicate(&mut self, node_id: &str) {
        if !self.can_mutate() {
            return;
        }
        let Some(node) = self.node(node_id).cloned() else {
            return;
        };
        let id = loop {
            self.id_seq += 1;
            let candidate = format!("{}_copy{}", node.id, self.id_seq);
            if self.node(&candidate).is_none() {
                break candidate;
            }
        };
        let mut copy = node;
        copy.id = id;
        copy.position = copy.position.offset(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        self.nodes.push(copy);
        self.commit();
    }

    /// Collapses the selection onto one shared x-coordinate. Requires at
    /// least two selected nodes.
    pub fn align(&mut self, direction: AlignDirection) {
        if !self.can_mutate() || self.selection.len() < 2 {
            return;
        }
        let Some((min, max)) = self
            .nodes
            .iter()
            .filter(|n| self.selection.contains(&n.id))
            .map(|n| n.position.x)
            .minmax_by(f64::total_cmp)
            .into_option()
        else {
            return;
        };
        let target = match direction {
            AlignDirection::Left => min,
            AlignDirection::Center => (min + max) / 2.0,
            AlignDirection::Right => max,
        };
        for node in &mut self.nodes {
            if self.selection.contains(&node.id) {
                node.position.x = target;
            }
        }
        self.commit();
    }

    /// Equalizes the spacing of the selection along one axis: the extreme
    /// members stay put and the interior members are repositioned onto an
    /// even grid between them. Requires at least three selected nodes.
    pub fn distribute(&mut self, direction: DistributeDirection) {
        if !self.can_mutate() || self.selection.len() < 3 {
            return;
        }
        let coord = |p: &Position| match direction {
            DistributeDirection::Horizontal => p.x,
            DistributeDirection::Vertical => p.y,
        };
        let ordered: Vec<usize> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| self.selection.contains(&n.id))
            .sorted_by(|(_, a), (_, b)| coord(&a.position).total_cmp(&coord(&b.position)))
            .map(|(index, _)| index)
            .collect();

        let first = coord(&self.nodes[ordered[0]].position);
        let last = coord(&self.nodes[ordered[ordered.len() - 1]].position);
        let step = (last - first) / (ordered.len() - 1) as f64;
        for (slot, &index) in ordered.iter().enumerate().skip(1).take(ordered.len() - 2) {
            let value = first + slot as f64 * step;
            match direction {
                DistributeDirection::Horizontal => self.nodes[index].position.x = value,
                DistributeDirection::Vertical => self.nodes[index].position.y = value,
            }
        }
        self.commit();
    }

    // --- History ---

    /// Steps back one snapshot; no-op at the lower boundary or when editing
    /// is disabled.
    pub fn undo(&mut self) {
        if !self.editable {
            return;
        }
        if let Some(snapshot) = self.history.undo() {
            let snapshot = snapshot.clone();
            self.restore(snapshot);
        }
    }

    /// Steps forward one snapshot; no-op at the upper boundary or when
    /// editing is disabled.
    pub fn redo(&mut self) {
        if !self.editable {
            return;
        }
        if let Some(snapshot) = self.history.redo() {
            let snapshot = snapshot.clone();
            self.restore(snapshot);
        }
    }

    /// Writes each screen node's position back into the architecture's
    /// last-known position cache.
    pub fn write_back(&self, architecture: &mut Architecture) {
        for node in &self.nodes {
            if node.kind != NodeKind::Screen {
                continue;
            }
            if let Some(screen) = architecture.screen_mut(&node.id) {
                screen.position = Some(node.position);
            }
        }
        architecture.touch();
    }

    // --- Internals ---

    fn can_mutate(&self) -> bool {
        self.editable && self.tool == Tool::Select
    }

    fn dirty(&self) -> bool {
        let current = self.history.current();
        current.nodes != self.nodes || current.edges != self.edges
    }

    fn commit(&mut self) {
        self.history.push(HistorySnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        });
    }

    fn restore(&mut self, snapshot: HistorySnapshot) {
        self.nodes = snapshot.nodes;
        self.edges = snapshot.edges;
        // Selection is a projection of the node collection; drop stale ids.
        let ids: AHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.selection.retain(|id| ids.contains(id.as_str()));
    }
}
