//! Generation pipeline: prompt -> untrusted text -> repair -> domain object,
//! with a deterministic fallback.
//!
//! The pipeline is generic over two seams. [`TextGenerator`] is the external
//! text-generation collaborator; its output is always treated as untrusted.
//! [`FlowSynthesis`] bundles the prompt/repair/fallback strategy for one kind
//! of generated object, so the same pipeline drives both the architecture
//! synthesis implemented here and parallel synthesis targets (e.g. a
//! wireframe component tree) without duplicating the orchestration.

use crate::error::{GenerationError, RepairError, ServiceError};
use crate::fallback::FallbackGenerator;
use crate::model::Architecture;
use crate::repair;
use log::{info, warn};

/// The external text-generation collaborator. Implementations wrap whatever
/// network client the application uses; the pipeline only sees a string.
pub trait TextGenerator {
    fn generate_text(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send;
}

/// Strategy bundle for one kind of generated object: how to prompt for it,
/// how to repair the service's untrusted answer into it, and how to build it
/// deterministically when the service fails.
pub trait FlowSynthesis {
    type Output;

    fn prompt(&self, goal: &str) -> String;
    fn repair(&self, raw_text: &str, goal: &str) -> Result<Self::Output, RepairError>;
    fn fallback(&self, goal: &str) -> Self::Output;
}

/// Synthesis strategy for app architectures.
pub struct ArchitectureSynthesis;

const ARCHITECTURE_PROMPT: &str = r#"You are an app architecture designer.
Given the app description below, respond with a single JSON object and no
other text, using exactly this shape:

{
  "name": "...",
  "description": "...",
  "screens": [
    {"id": "...", "name": "...", "type": "<one of: splash, onboarding, auth,
     login, signup, forgot_password, home, dashboard, list, detail, form,
     search, filter, profile, settings, notifications, feed, chat, comments,
     cart, checkout, payment, order_history, product_list, product_detail,
     map, calendar, gallery, media_player, paywall, help, about, error,
     loading, empty_state>",
     "description": "...", "components": ["..."], "requires_auth": false}
  ],
  "transitions": [
    {"id": "...", "from": "<screen id>", "to": "<screen id>",
     "trigger": "<one of: user_action, api_success, api_error, timer,
     condition, navigation>", "condition": null, "description": "..."}
  ]
}

Every screen must be reachable from the first screen. App description:
"#;

impl FlowSynthesis for ArchitectureSynthesis {
    type Output = Architecture;

    fn prompt(&self, goal: &str) -> String {
        format!("{ARCHITECTURE_PROMPT}{goal}")
    }

    fn repair(&self, raw_text: &str, goal: &str) -> Result<Architecture, RepairError> {
        repair::repair(raw_text, goal)
    }

    fn fallback(&self, goal: &str) -> Architecture {
        FallbackGenerator::generate(goal)
    }
}

/// Orchestrates one generation attempt against the service, repairing its
/// output on success and falling back deterministically on any failure.
///
/// Exactly one service attempt is made per invocation: the failure modes
/// (malformed JSON, refusal, timeout) are not generally retry-recoverable, so
/// the deterministic fallback *is* the retry strategy. The only error a
/// caller can see is [`GenerationError::EmptyGoal`].
pub struct GenerationPipeline<G, S> {
    generator: G,
    synthesis: S,
}

impl<G: TextGenerator, S: FlowSynthesis> GenerationPipeline<G, S> {
    pub fn new(generator: G, synthesis: S) -> Self {
        Self {
            generator,
            synthesis,
        }
    }

    pub async fn generate(&self, goal: &str) -> Result<S::Output, GenerationError> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(GenerationError::EmptyGoal);
        }

        let prompt = self.synthesis.prompt(goal);
        match self.generator.generate_text(&prompt).await {
            Ok(raw_text) => match self.synthesis.repair(&raw_text, goal) {
                Ok(output) => return Ok(output),
                Err(err) => warn!("discarding malformed generation response: {err}"),
            },
            Err(err) => warn!("generation service call failed: {err}"),
        }

        info!("answering with the deterministic fallback generator");
        Ok(self.synthesis.fallback(goal))
    }
}

impl<G: TextGenerator> GenerationPipeline<G, ArchitectureSynthesis> {
    /// Convenience constructor for the architecture pipeline.
    pub fn for_architectures(generator: G) -> Self {
        Self::new(generator, ArchitectureSynthesis)
    }
}
