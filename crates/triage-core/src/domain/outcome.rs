//! Outcome model: the structured answer of a chain walk.
//!
//! `handle_request` only hands back the response text; `dispatch` hands back
//! this record so callers can also see which link answered and whether the
//! request was resolved or fell off the end of the chain.

use serde::Serialize;

/// Resolved or rejected.
///
/// Serialized as SCREAMING_SNAKE_CASE: RESOLVED / REJECTED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeKind {
    Resolved,
    Rejected,
}

/// The answer of a chain walk, with the link that produced it.
///
/// Forwarding links pass their successor's outcome through untouched, so
/// `agent` always names the link that resolved or rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub kind: OutcomeKind,

    /// Name of the link that produced the response.
    pub agent: &'static str,

    pub response: String,
}

impl Outcome {
    /// `agent` resolved the request with `response`.
    pub fn resolved(agent: &'static str, response: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Resolved,
            agent,
            response: response.into(),
        }
    }

    /// `agent` was the terminal link and could not resolve the request.
    pub fn rejected(agent: &'static str, response: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Rejected,
            agent,
            response: response.into(),
        }
    }

    /// `true` unless the request fell off the end of the chain.
    pub fn is_resolved(&self) -> bool {
        self.kind == OutcomeKind::Resolved
    }

    /// The response text, as returned by `Handler::handle_request`.
    pub fn into_response(self) -> String {
        self.response
    }
}
