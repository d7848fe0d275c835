//! Deterministic stage-based layout for architecture graphs.
//!
//! This is a placement heuristic for the expected screen-type vocabulary, not
//! a general graph-layout algorithm: there is no force direction and no
//! crossing minimization. Screens are bucketed into ordered flow stages, each
//! populated stage gets a column, and screens sharing a stage fan out
//! vertically around the stage center. Edge selection is conservative — only
//! forward transitions between adjacent stages (plus essential intra-stage
//! actions) are drawn, and implied backward navigation is omitted to keep the
//! diagram legible.

use crate::diagram::{Diagram, DiagramEdge, DiagramNode, Position};
use crate::model::{Architecture, ScreenType, TransitionTrigger};
use ahash::AHashSet;

/// Ordered layout bucket for screen types. Variant order is the left-to-right
/// flow order on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Launch,
    Auth,
    Onboarding,
    Hub,
    Primary,
    Secondary,
    Account,
}

pub const STAGE_COUNT: usize = 7;

impl Stage {
    /// Total classification of screen types into stages. Types outside the
    /// recognized flow vocabulary land in `Hub` (via the `Home` normalization
    /// default) rather than erroring.
    pub fn of(screen_type: ScreenType) -> Self {
        use ScreenType::*;
        match screen_type {
            Splash | Loading => Self::Launch,
            Auth | Login | Signup | ForgotPassword | Paywall => Self::Auth,
            Onboarding => Self::Onboarding,
            Home | Dashboard | Feed => Self::Hub,
            List | Search | Filter | ProductList | Map | Calendar | Gallery | Chat => {
                Self::Primary
            }
            Detail | Form | ProductDetail | Cart | Checkout | Payment | Comments
            | MediaPlayer | Error | EmptyState => Self::Secondary,
            Profile | Settings | Notifications | OrderHistory | Help | About => Self::Account,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// True for types that are fanned onto the secondary row below the main stage
/// line, so a detail/form pair branching off a list does not cross it.
fn secondary_row(screen_type: ScreenType) -> bool {
    matches!(
        screen_type,
        ScreenType::Detail | ScreenType::Form | ScreenType::ProductDetail
    )
}

const START_X: f64 = 40.0;
const CENTER_Y: f64 = 300.0;
const COLUMN_SPACING: f64 = 260.0;
const BRANCH_SPACING: f64 = 140.0;
const SECONDARY_ROW_OFFSET: f64 = 90.0;

/// Label for an edge, derived from its (source stage, target stage) pair via
/// a fixed lookup rather than copied from the transition description, so
/// labels stay short and consistent.
fn edge_label(from: Stage, to: Stage) -> &'static str {
    use Stage::*;
    match (from, to) {
        (Launch, Auth) | (Launch, Onboarding) | (Launch, Hub) => "launch",
        (Auth, Onboarding) | (Auth, Hub) => "sign in",
        (Onboarding, Hub) | (Onboarding, Auth) => "continue",
        (Hub, Primary) => "browse",
        (Primary, Secondary) => "open",
        (Auth, Auth) | (Primary, Primary) => "act",
        (Secondary, Account) | (Hub, Account) => "account",
        _ => "go",
    }
}

/// Maps an architecture to a positioned diagram. Deterministic and
/// side-effect-free: structurally equal architectures produce identical node
/// positions and edge sets.
pub fn layout(architecture: &Architecture) -> Diagram {
    // Bucket screens by stage, preserving insertion order within each bucket.
    let mut buckets: [Vec<usize>; STAGE_COUNT] = Default::default();
    for (index, screen) in architecture.screens.iter().enumerate() {
        buckets[Stage::of(screen.screen_type).index()].push(index);
    }

    // Populated stages get compressed, increasing x columns.
    let mut column_of = [None; STAGE_COUNT];
    let mut next_column = 0usize;
    for (stage_index, bucket) in buckets.iter().enumerate() {
        if !bucket.is_empty() {
            column_of[stage_index] = Some(next_column);
            next_column += 1;
        }
    }

    let mut nodes = Vec::with_capacity(architecture.screens.len() + 1);
    nodes.push(DiagramNode::start().at(Position::new(START_X, CENTER_Y)));

    let mut positions = vec![Position::default(); architecture.screens.len()];
    for (stage_index, bucket) in buckets.iter().enumerate() {
        let Some(column) = column_of[stage_index] else {
            continue;
        };
        let x = START_X + (column as f64 + 1.0) * COLUMN_SPACING;
        let fan_height = (bucket.len().saturating_sub(1)) as f64 * BRANCH_SPACING;
        for (slot, &screen_index) in bucket.iter().enumerate() {
            let screen = &architecture.screens[screen_index];
            let mut y = CENTER_Y - fan_height / 2.0 + slot as f64 * BRANCH_SPACING;
            if secondary_row(screen.screen_type) {
                y += SECONDARY_ROW_OFFSET;
            }
            positions[screen_index] = Position::new(x, y);
        }
    }

    for (index, screen) in architecture.screens.iter().enumerate() {
        let mut node = DiagramNode::screen(&screen.id, &screen.name, screen.screen_type)
            .at(positions[index]);
        node.data.requires_auth = screen.requires_auth;
        nodes.push(node);
    }

    // The start node points at the first screen of the first populated stage.
    let mut edges = Vec::new();
    let first_screen = buckets
        .iter()
        .find(|bucket| !bucket.is_empty())
        .and_then(|bucket| bucket.first())
        .map(|&index| &architecture.screens[index]);
    if let Some(screen) = first_screen {
        edges.push(
            DiagramEdge::new("e_start", crate::diagram::START_NODE_ID, &screen.id)
                .labeled("launch"),
        );
    }

    // Conservative edge selection: forward adjacent-stage transitions, plus
    // intra-stage user actions (view/add style branches). Backward edges and
    // self-loops are deliberately not drawn.
    let mut drawn: AHashSet<(&str, &str)> = AHashSet::new();
    for transition in &architecture.transitions {
        if transition.from == transition.to {
            continue;
        }
        let (Some(from), Some(to)) = (
            architecture.screen(&transition.from),
            architecture.screen(&transition.to),
        ) else {
            continue;
        };
        let from_stage = Stage::of(from.screen_type);
        let to_stage = Stage::of(to.screen_type);
        // Adjacency is over populated columns, so an empty stage between two
        // populated ones does not break the drawn flow.
        let (Some(from_col), Some(to_col)) = (
            column_of[from_stage.index()],
            column_of[to_stage.index()],
        ) else {
            continue;
        };
        let adjacent_forward = to_col == from_col + 1;
        let essential_intra = from_stage == to_stage
            && transition.trigger == TransitionTrigger::UserAction;
        if !(adjacent_forward || essential_intra) {
            continue;
        }
        if !drawn.insert((transition.from.as_str(), transition.to.as_str())) {
            continue;
        }
        edges.push(
            DiagramEdge::new(
                format!("e_{}", transition.id),
                &transition.from,
                &transition.to,
            )
            .labeled(edge_label(from_stage, to_stage))
            .triggered(transition.trigger),
        );
    }

    Diagram { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_follows_the_flow() {
        assert!(Stage::of(ScreenType::Splash) < Stage::of(ScreenType::Login));
        assert!(Stage::of(ScreenType::Login) < Stage::of(ScreenType::Dashboard));
        assert!(Stage::of(ScreenType::Dashboard) < Stage::of(ScreenType::List));
        assert!(Stage::of(ScreenType::List) < Stage::of(ScreenType::Detail));
        assert!(Stage::of(ScreenType::Detail) < Stage::of(ScreenType::Settings));
    }

    #[test]
    fn miscellaneous_types_fall_to_the_hub_stage() {
        assert_eq!(Stage::of(ScreenType::Home), Stage::Hub);
        assert_eq!(Stage::of(ScreenType::Feed), Stage::Hub);
    }

    #[test]
    fn detail_and_form_sit_on_the_secondary_row() {
        assert!(secondary_row(ScreenType::Detail));
        assert!(secondary_row(ScreenType::Form));
        assert!(!secondary_row(ScreenType::List));
    }
}
