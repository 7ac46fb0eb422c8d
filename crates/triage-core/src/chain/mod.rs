//! Chain - the contract shared by every link.

pub mod handler;

pub use self::handler::{Handler, REJECTION};
