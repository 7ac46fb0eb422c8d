//! Agents - the concrete links of the customer-service chain.
//!
//! Canonical order: Chatbot -> Attendant -> Technician.

pub mod attendant;
pub mod chatbot;
pub mod technician;

pub use self::attendant::Attendant;
pub use self::chatbot::Chatbot;
pub use self::technician::Technician;
