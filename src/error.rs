use thiserror::Error;

/// Errors that can occur while locating and decoding a structured payload
/// inside raw text returned by the generation service.
#[derive(Error, Debug, Clone)]
pub enum RepairError {
    #[error("No balanced JSON object could be located in the response text")]
    PayloadNotFound,

    #[error("Located payload could not be decoded: {0}")]
    DecodeError(String),

    #[error("Decoded payload contains no screens")]
    EmptyArchitecture,

    #[error("Transition '{transition_id}' references missing screen '{endpoint}'")]
    DanglingEndpoint {
        transition_id: String,
        endpoint: String,
    },

    #[error("Screen '{0}' is not connected to the entry screen")]
    DisconnectedScreen(String),
}

/// Errors raised by the external text-generation collaborator.
#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    #[error("Generation service unavailable: {0}")]
    Unavailable(String),

    #[error("Generation service timed out after {0} ms")]
    Timeout(u64),
}

/// The only error the generation pipeline surfaces to its caller.
///
/// Service failures and malformed responses are absorbed at the pipeline
/// boundary and answered with the deterministic fallback generator; an empty
/// goal is a usage error rejected upfront rather than attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Goal text is empty; nothing to generate")]
    EmptyGoal,
}
