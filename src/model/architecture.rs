use super::{Screen, Transition, now_ms};
use crate::error::RepairError;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Coarse rank of how involved a generated architecture is, derived from its
/// screen and transition counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub fn rank(screen_count: usize, transition_count: usize) -> Self {
        match (screen_count, transition_count) {
            (s, _) if s <= 4 => Self::Simple,
            (s, t) if s >= 9 || t >= 14 => Self::Complex,
            _ => Self::Moderate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureMetadata {
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
    pub updated_at: u64,
    pub complexity: Complexity,
    pub screen_count: usize,
    pub endpoint_count: usize,
}

impl ArchitectureMetadata {
    pub fn stamp(screen_count: usize, transition_count: usize, now: u64) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            complexity: Complexity::rank(screen_count, transition_count),
            screen_count,
            endpoint_count: transition_count,
        }
    }
}

/// The validated screen/transition graph describing an app's structure.
///
/// Screens are kept in insertion order (creation order, not meaningful for
/// traversal). Invariants: every transition endpoint names an existing screen,
/// and after generation the graph is weakly connected from the entry screen
/// (the first screen in insertion order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Architecture {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub screens: Vec<Screen>,
    pub transitions: Vec<Transition>,
    pub metadata: ArchitectureMetadata,
}

impl Architecture {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        screens: Vec<Screen>,
        transitions: Vec<Transition>,
    ) -> Self {
        let metadata = ArchitectureMetadata::stamp(screens.len(), transitions.len(), now_ms());
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            screens,
            transitions,
            metadata,
        }
    }

    /// The designated entry point: the first screen in insertion order.
    pub fn entry_screen(&self) -> Option<&Screen> {
        self.screens.first()
    }

    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    pub fn screen_mut(&mut self, id: &str) -> Option<&mut Screen> {
        self.screens.iter_mut().find(|s| s.id == id)
    }

    /// Exact-name lookup, used to resolve transitions that reference screens
    /// by name instead of id.
    pub fn screen_by_name(&self, name: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.name == name)
    }

    /// Recomputes complexity/count metadata and bumps `updated_at`.
    pub fn touch(&mut self) {
        self.metadata.updated_at = now_ms();
        self.metadata.screen_count = self.screens.len();
        self.metadata.endpoint_count = self.transitions.len();
        self.metadata.complexity =
            Complexity::rank(self.screens.len(), self.transitions.len());
    }

    /// True when every screen can be reached from the entry screen, treating
    /// transitions as undirected (weak connectivity).
    pub fn is_connected(&self) -> bool {
        let Some(entry) = self.screens.first() else {
            return false;
        };
        if self.screens.len() == 1 {
            return true;
        }

        let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for t in &self.transitions {
            adjacency.entry(t.from.as_str()).or_default().push(&t.to);
            adjacency.entry(t.to.as_str()).or_default().push(&t.from);
        }

        let mut seen: AHashSet<&str> = AHashSet::new();
        let mut queue = vec![entry.id.as_str()];
        while let Some(id) = queue.pop() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(neighbors) = adjacency.get(id) {
                queue.extend(neighbors.iter().copied());
            }
        }
        self.screens.iter().all(|s| seen.contains(s.id.as_str()))
    }

    /// Checks the structural invariants: unique screen ids, transition
    /// endpoints that exist, and weak connectivity from the entry screen.
    pub fn validate(&self) -> Result<(), RepairError> {
        if self.screens.is_empty() {
            return Err(RepairError::EmptyArchitecture);
        }
        let ids: AHashSet<&str> = self.screens.iter().map(|s| s.id.as_str()).collect();
        for t in &self.transitions {
            for endpoint in [&t.from, &t.to] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(RepairError::DanglingEndpoint {
                        transition_id: t.id.clone(),
                        endpoint: endpoint.clone(),
                    });
                }
            }
        }
        if !self.is_connected() {
            let connected = self.connected_ids();
            let orphan = self
                .screens
                .iter()
                .find(|s| !connected.contains(s.id.as_str()))
                .map(|s| s.id.clone())
                .unwrap_or_default();
            return Err(RepairError::DisconnectedScreen(orphan));
        }
        Ok(())
    }

    fn connected_ids(&self) -> AHashSet<&str> {
        let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for t in &self.transitions {
            adjacency.entry(t.from.as_str()).or_default().push(&t.to);
            adjacency.entry(t.to.as_str()).or_default().push(&t.from);
        }
        let mut seen: AHashSet<&str> = AHashSet::new();
        if let Some(entry) = self.screens.first() {
            let mut queue = vec![entry.id.as_str()];
            while let Some(id) = queue.pop() {
                if !seen.insert(id) {
                    continue;
                }
                if let Some(neighbors) = adjacency.get(id) {
                    queue.extend(neighbors.iter().copied());
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScreenType, TransitionTrigger};

    fn arch(screens: Vec<Screen>, transitions: Vec<Transition>) -> Architecture {
        Architecture::new("a1", "Test", screens, transitions)
    }

    #[test]
    fn single_screen_is_connected() {
        let a = arch(vec![Screen::new("s1", "Home", ScreenType::Home)], vec![]);
        assert!(a.is_connected());
        assert!(a.validate().is_ok());
    }

    #[test]
    fn detached_screen_fails_validation() {
        let a = arch(
            vec![
                Screen::new("s1", "Home", ScreenType::Home),
                Screen::new("s2", "Settings", ScreenType::Settings),
            ],
            vec![],
        );
        assert!(!a.is_connected());
        assert!(matches!(
            a.validate(),
            Err(RepairError::DisconnectedScreen(id)) if id == "s2"
        ));
    }

    #[test]
    fn dangling_endpoint_fails_validation() {
        let a = arch(
            vec![Screen::new("s1", "Home", ScreenType::Home)],
            vec![Transition::new("t1", "s1", "ghost", TransitionTrigger::UserAction)],
        );
        assert!(matches!(
            a.validate(),
            Err(RepairError::DanglingEndpoint { endpoint, .. }) if endpoint == "ghost"
        ));
    }

    #[test]
    fn complexity_rank_boundaries() {
        assert_eq!(Complexity::rank(3, 2), Complexity::Simple);
        assert_eq!(Complexity::rank(6, 7), Complexity::Moderate);
        assert_eq!(Complexity::rank(10, 12), Complexity::Complex);
    }
}
