use crate::model::{Screen, Transition, TransitionTrigger};
use ahash::{AHashMap, AHashSet};

/// Returns the transition list augmented so that every screen is weakly
/// connected to the entry screen (the first screen in insertion order).
///
/// The pass walks screens in insertion order and bridges each weak component
/// the entry cannot reach with a single synthetic forward transition from the
/// most recently reached screen into that component. An orphan screen is just
/// the one-screen case of this; separately-edged islands are merged the same
/// way, and an edgeless entry screen still anchors the walk. The input is
/// never shrunk, so this is safe to run over hand-authored or round-tripped
/// architectures as well as freshly repaired ones.
pub fn stitch_connectivity(screens: &[Screen], transitions: &[Transition]) -> Vec<Transition> {
    let mut result = transitions.to_vec();
    if screens.len() < 2 {
        return result;
    }

    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for t in transitions {
        adjacency.entry(t.from.as_str()).or_default().push(&t.to);
        adjacency.entry(t.to.as_str()).or_default().push(&t.from);
    }
    let absorb = |reached: &mut AHashSet<String>, from: &str| {
        let mut queue = vec![from.to_string()];
        while let Some(id) = queue.pop() {
            if !reached.insert(id.clone()) {
                continue;
            }
            if let Some(neighbors) = adjacency.get(id.as_str()) {
                queue.extend(neighbors.iter().map(|n| n.to_string()));
            }
        }
    };

    let mut reached: AHashSet<String> = AHashSet::new();
    absorb(&mut reached, screens[0].id.as_str());

    let existing_ids: AHashSet<&str> = transitions.iter().map(|t| t.id.as_str()).collect();
    let mut last_reached = screens[0].id.as_str();
    let mut seq = 0usize;

    for screen in screens {
        let id = screen.id.as_str();
        if reached.contains(id) {
            last_reached = id;
            continue;
        }

        seq += 1;
        let mut stitch_id = format!("stitch_{seq}");
        while existing_ids.contains(stitch_id.as_str()) {
            seq += 1;
            stitch_id = format!("stitch_{seq}");
        }
        result.push(
            Transition::new(stitch_id, last_reached, id, TransitionTrigger::Navigation)
                .with_description(format!("Continue to {}", screen.name)),
        );
        // The bridge pulls in the screen's whole component, not just itself.
        absorb(&mut reached, id);
        last_reached = id;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScreenType;

    fn screen(id: &str) -> Screen {
        Screen::new(id, id.to_uppercase(), ScreenType::Home)
    }

    #[test]
    fn connected_graph_is_untouched() {
        let screens = vec![screen("a"), screen("b")];
        let transitions = vec![Transition::new("t1", "a", "b", TransitionTrigger::UserAction)];
        let result = stitch_connectivity(&screens, &transitions);
        assert_eq!(result, transitions);
    }

    #[test]
    fn orphan_gets_exactly_one_edge() {
        let screens = vec![screen("a"), screen("b"), screen("c")];
        let transitions = vec![Transition::new("t1", "a", "b", TransitionTrigger::UserAction)];
        let result = stitch_connectivity(&screens, &transitions);
        assert_eq!(result.len(), 2);
        let added = &result[1];
        assert_eq!(added.from, "b");
        assert_eq!(added.to, "c");
        assert_eq!(added.trigger, TransitionTrigger::Navigation);
    }

    #[test]
    fn edgeless_graph_becomes_a_chain_from_the_entry() {
        let screens = vec![screen("a"), screen("b"), screen("c")];
        let result = stitch_connectivity(&screens, &[]);
        assert_eq!(result.len(), 2);
        assert_eq!((result[0].from.as_str(), result[0].to.as_str()), ("a", "b"));
        assert_eq!((result[1].from.as_str(), result[1].to.as_str()), ("b", "c"));
    }

    #[test]
    fn single_screen_needs_no_stitching() {
        let screens = vec![screen("a")];
        assert!(stitch_connectivity(&screens, &[]).is_empty());
    }

    #[test]
    fn edgeless_entry_screen_is_bridged_to_the_rest() {
        // Entry has no incident transitions; the others are connected among
        // themselves. One bridge from the entry suffices.
        let screens = vec![screen("a"), screen("b"), screen("c")];
        let transitions = vec![Transition::new("t1", "b", "c", TransitionTrigger::UserAction)];
        let result = stitch_connectivity(&screens, &transitions);
        assert_eq!(result.len(), 2);
        assert_eq!((result[1].from.as_str(), result[1].to.as_str()), ("a", "b"));
    }

    #[test]
    fn separate_components_are_merged_with_one_bridge() {
        // No screen is edgeless, but {a, b} and {c, d} are disjoint islands.
        let screens = vec![screen("a"), screen("b"), screen("c"), screen("d")];
        let transitions = vec![
            Transition::new("t1", "a", "b", TransitionTrigger::UserAction),
            Transition::new("t2", "c", "d", TransitionTrigger::UserAction),
        ];
        let result = stitch_connectivity(&screens, &transitions);
        assert_eq!(result.len(), 3);
        let bridge = &result[2];
        assert_eq!((bridge.from.as_str(), bridge.to.as_str()), ("b", "c"));
        assert_eq!(bridge.trigger, TransitionTrigger::Navigation);
    }
}
