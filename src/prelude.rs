//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the appflow crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.

// Domain model
pub use crate::model::{
    Architecture, ArchitectureMetadata, Complexity, Screen, ScreenType, Transition,
    TransitionTrigger,
};

// Generation
pub use crate::fallback::{FallbackGenerator, GoalFamily, classify_goal};
pub use crate::pipeline::{
    ArchitectureSynthesis, FlowSynthesis, GenerationPipeline, TextGenerator,
};
pub use crate::repair::{repair, stitch_connectivity};

// Diagram and editing
pub use crate::diagram::{Diagram, DiagramEdge, DiagramNode, NodeKind, Position, START_NODE_ID};
pub use crate::editor::{AlignDirection, DiagramEditor, DistributeDirection, Tool};
pub use crate::layout::{Stage, layout};

// Errors
pub use crate::error::{GenerationError, RepairError, ServiceError};
