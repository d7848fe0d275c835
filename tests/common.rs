//! Common test utilities for building architectures, diagrams, and stub
//! generation services.
use appflow::prelude::*;

/// A hand-built four-screen architecture with a linear forward flow:
/// login -> dashboard -> list -> form.
#[allow(dead_code)]
pub fn sample_architecture() -> Architecture {
    Architecture::new(
        "sample",
        "Sample App",
        vec![
            Screen::new("login", "Log In", ScreenType::Login),
            Screen::new("dashboard", "Dashboard", ScreenType::Dashboard),
            Screen::new("items", "Item List", ScreenType::List),
            Screen::new("item_form", "Item Form", ScreenType::Form),
        ],
        vec![
            Transition::new("t1", "login", "dashboard", TransitionTrigger::ApiSuccess),
            Transition::new("t2", "dashboard", "items", TransitionTrigger::Navigation),
            Transition::new("t3", "items", "item_form", TransitionTrigger::UserAction),
        ],
    )
}

/// Three screen nodes `a`, `b`, `c` at x = {0, 100, 500} (y = 0) with edges
/// a -> b -> c.
#[allow(dead_code)]
pub fn three_node_diagram() -> Diagram {
    Diagram {
        nodes: vec![
            DiagramNode::screen("a", "A", ScreenType::Home).at(Position::new(0.0, 0.0)),
            DiagramNode::screen("b", "B", ScreenType::List).at(Position::new(100.0, 0.0)),
            DiagramNode::screen("c", "C", ScreenType::Detail).at(Position::new(500.0, 0.0)),
        ],
        edges: vec![
            DiagramEdge::new("e1", "a", "b"),
            DiagramEdge::new("e2", "b", "c"),
        ],
    }
}

/// A well-formed service response wrapped in prose and a markdown fence,
/// with one name-referenced transition, one dangling transition, and one
/// orphan screen.
#[allow(dead_code)]
pub const MESSY_RESPONSE: &str = r#"Sure! Here is the architecture you asked for:

```json
{
  "name": "Notes App",
  "description": "A simple notes app",
  "screens": [
    {"id": "home", "name": "Home", "type": "home"},
    {"id": "notes", "name": "Note List", "type": "list"},
    {"id": "editor", "name": "Note Editor", "type": "hyper_canvas"},
    {"id": "about", "name": "About", "type": "about"}
  ],
  "transitions": [
    {"id": "t1", "from": "home", "to": "Note List", "trigger": "swipe"},
    {"id": "t2", "from": "notes", "to": "editor", "trigger": "user_action"},
    {"id": "t3", "from": "editor", "to": "Trash", "trigger": "user_action"}
  ]
}
```

Let me know if you need anything else."#;

/// A stub for the external text-generation collaborator.
#[allow(dead_code)]
pub enum StubService {
    /// Resolves with the given canned text.
    Replies(&'static str),
    /// Fails like an unreachable network service.
    Down,
}

impl TextGenerator for StubService {
    async fn generate_text(&self, _prompt: &str) -> Result<String, ServiceError> {
        match self {
            StubService::Replies(text) => Ok((*text).to_string()),
            StubService::Down => Err(ServiceError::Unavailable("stubbed outage".to_string())),
        }
    }
}
