//! Request - what a customer submits to the chain.
//!
//! # Key points
//! - Private fields plus read accessors: no link can alter a request in flight
//! - Links borrow the request (`&Request`); the caller keeps ownership
//! - `description` and `origin` are carried payload, routing reads only `category`

use serde::{Deserialize, Serialize};

use super::{CustomerId, RequestCategory};

/// A customer request as it travels the chain.
///
/// Immutable after construction: fields are private and only read accessors
/// exist. The description is opaque payload; no handler inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    category: RequestCategory,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    origin: Option<CustomerId>,
}

impl Request {
    /// Accepts every input, including an empty description and no origin.
    pub fn new(
        category: RequestCategory,
        description: impl Into<String>,
        origin: Option<CustomerId>,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            origin,
        }
    }

    /// The classification that decides which link resolves the request.
    pub fn category(&self) -> RequestCategory {
        self.category
    }

    /// Free text from the customer, possibly empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The customer the request came from, if known.
    pub fn origin(&self) -> Option<CustomerId> {
        self.origin
    }
}
