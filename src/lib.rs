//! # Appflow - App-Flow Graph Engine
//!
//! **Appflow** turns a free-text app description into an editable directed
//! graph of screens and transitions, lays that graph out deterministically,
//! and drives the interactive editing of the resulting diagram.
//!
//! ## Core Workflow
//!
//! 1. **Generate**: [`pipeline::GenerationPipeline`] asks an external
//!    text-generation collaborator for a structured graph, repairs its
//!    untrusted output ([`repair`]), and falls back to the deterministic
//!    [`fallback::FallbackGenerator`] when the service fails or returns
//!    garbage. The caller always receives a valid, connected
//!    [`model::Architecture`].
//! 2. **Lay out**: [`layout::layout`] assigns 2-D coordinates by bucketing
//!    screens into ordered flow stages, producing a [`diagram::Diagram`].
//! 3. **Edit**: [`editor::DiagramEditor`] owns the diagram from then on —
//!    multi-select transforms, connectivity-preserving deletes, and linear
//!    undo/redo over immutable snapshots.
//! 4. **Export**: [`export`] serializes the architecture (and diagram) to a
//!    round-tripping JSON payload.
//!
//! ## Quick Start
//!
//! The offline path needs no service at all:
//!
//! ```rust
//! use appflow::prelude::*;
//!
//! // Deterministic generation from goal text.
//! let architecture = FallbackGenerator::generate("Build a todo app with login");
//! assert!(architecture.is_connected());
//!
//! // Deterministic stage-based layout.
//! let diagram = appflow::layout::layout(&architecture);
//! assert_eq!(diagram.nodes.len(), architecture.screens.len() + 1); // + start node
//!
//! // Interactive editing with linear undo/redo.
//! let mut editor = DiagramEditor::from_diagram(diagram);
//! editor.select("task_list");
//! editor.delete_selected();
//! editor.undo();
//! assert!(editor.node("task_list").is_some());
//! ```
//!
//! Against a real service, implement [`pipeline::TextGenerator`] over your
//! network client and let the pipeline absorb every failure mode:
//!
//! ```rust,no_run
//! use appflow::prelude::*;
//!
//! struct MyClient;
//!
//! impl TextGenerator for MyClient {
//!     async fn generate_text(&self, _prompt: &str) -> Result<String, ServiceError> {
//!         // Call your HTTP client here; the pipeline treats the returned
//!         // string as untrusted and repairs it before use.
//!         Err(ServiceError::Unavailable("not wired up".to_string()))
//!     }
//! }
//!
//! let pipeline = GenerationPipeline::for_architectures(MyClient);
//! let architecture = tokio_test::block_on(pipeline.generate("A recipe sharing app"))
//!     .expect("only an empty goal can fail");
//! assert!(!architecture.screens.is_empty());
//! ```

pub mod diagram;
pub mod editor;
pub mod error;
pub mod export;
pub mod fallback;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod repair;
