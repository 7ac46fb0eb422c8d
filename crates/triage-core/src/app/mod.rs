//! App - chain assembly.
//!
//! - **chain**: `Chain`, the assembled links plus the canonical wiring
//! - **builder**: `ChainBuilder`, fail-fast assembly for other orderings

pub mod builder;
pub mod chain;

pub use self::builder::{BuildError, ChainBuilder};
pub use self::chain::{Chain, Links, LookupError};
