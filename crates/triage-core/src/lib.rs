//! triage-core
//!
//! Customer-service request triage built as a chain of responsibility.
//!
//! # Modules
//! - **domain**: request data (categories, requests, origin ids, outcomes)
//! - **chain**: the `Handler` contract every link implements
//! - **agent**: the concrete links (Chatbot, Attendant, Technician)
//! - **app**: chain assembly (canonical chain, builder)

pub mod domain;
pub mod chain;
pub mod agent;
pub mod app;

pub use agent::{Attendant, Chatbot, Technician};
pub use app::{BuildError, Chain, ChainBuilder, LookupError};
pub use chain::{Handler, REJECTION};
pub use domain::{CustomerId, Outcome, OutcomeKind, Request, RequestCategory};
