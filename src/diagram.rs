//! The renderable projection of an architecture: positioned nodes and edges.
//!
//! These structs serialize directly to the interchange shape shared with the
//! rendering collaborator:
//! `{nodes: [{id, type, position: {x, y}, data}], edges: [{id, source, target, label?, data?}]}`.
//! Positions are owned by this layer; the model layer only carries an optional
//! last-known position cache written back by the editor.

use crate::model::{ScreenType, TransitionTrigger};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Visual kind tag for a node. `Start` marks the single synthetic entry node
/// prepended to every diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Screen,
    Start,
    End,
}

/// Display payload carried by a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_type: Option<ScreenType>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub requires_auth: bool,
}

/// A positioned node. Its id equals the source screen's id, or the synthetic
/// `start` id for the entry node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Position,
    pub data: NodeData,
}

impl DiagramNode {
    pub fn screen(id: impl Into<String>, label: impl Into<String>, screen_type: ScreenType) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Screen,
            position: Position::default(),
            data: NodeData {
                label: label.into(),
                screen_type: Some(screen_type),
                requires_auth: false,
            },
        }
    }

    pub fn start() -> Self {
        Self {
            id: START_NODE_ID.to_string(),
            kind: NodeKind::Start,
            position: Position::default(),
            data: NodeData {
                label: "Start".to_string(),
                screen_type: None,
                requires_auth: false,
            },
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// Id of the synthetic entry node every diagram carries.
pub const START_NODE_ID: &str = "start";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<TransitionTrigger>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgeData>,
}

impl DiagramEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: None,
            data: None,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn triggered(mut self, trigger: TransitionTrigger) -> Self {
        self.data = Some(EdgeData {
            trigger: Some(trigger),
        });
        self
    }
}

/// The positioned node/edge collection handed to the rendering collaborator
/// and seeded into the editor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl Diagram {
    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
