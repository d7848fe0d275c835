use serde::{Deserialize, Serialize};
use std::fmt;

/// What causes a transition to fire. Closed set; unrecognized trigger strings
/// from the generation service normalize to [`TransitionTrigger::UserAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionTrigger {
    UserAction,
    ApiSuccess,
    ApiError,
    Timer,
    Condition,
    Navigation,
}

impl TransitionTrigger {
    pub fn parse_or_default(raw: &str) -> Self {
        let key: String = raw
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "useraction" | "tap" | "click" | "press" => Self::UserAction,
            "apisuccess" | "success" => Self::ApiSuccess,
            "apierror" | "error" | "failure" => Self::ApiError,
            "timer" | "timeout" | "delay" => Self::Timer,
            "condition" | "conditional" => Self::Condition,
            "navigation" | "navigate" | "auto" => Self::Navigation,
            _ => Self::UserAction,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserAction => "user_action",
            Self::ApiSuccess => "api_success",
            Self::ApiError => "api_error",
            Self::Timer => "timer",
            Self::Condition => "condition",
            Self::Navigation => "navigation",
        }
    }
}

impl fmt::Display for TransitionTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge between two screens. `from` and `to` must name screens that
/// exist in the same architecture; self-loops are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    pub from: String,
    pub to: String,
    pub trigger: TransitionTrigger,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Transition {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        trigger: TransitionTrigger,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            trigger,
            condition: None,
            description: String::new(),
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// True if the transition touches the given screen id at either end.
    pub fn touches(&self, screen_id: &str) -> bool {
        self.from == screen_id || self.to == screen_id
    }
}
