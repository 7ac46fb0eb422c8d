//! Domain model (categories, requests, origin ids, outcomes).

pub mod category;
pub mod errors;
pub mod ids;
pub mod outcome;
pub mod request;

pub use category::RequestCategory;
pub use errors::{ParseCategoryError, ParseIdError};
pub use ids::{Customer, CustomerId, Id, IdMarker};
pub use outcome::{Outcome, OutcomeKind};
pub use request::Request;
