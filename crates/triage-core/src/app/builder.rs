//! ChainBuilder - assembling a chain in any order.
//!
//! Links are listed head first and constructed tail first, so each one is
//! handed its successor at construction and the result cannot be re-linked.
//!
//! # Fail-fast
//! - `expect_categories()` records the categories the chain must resolve
//! - `build()` checks that every one of them is resolvable by some link
//! - assembly problems are `BuildError`s; routing never errors

use std::collections::HashSet;
use std::sync::Arc;

use crate::chain::Handler;
use crate::domain::RequestCategory;

use super::chain::Chain;

type LinkFactory = Box<dyn FnOnce(Option<Arc<dyn Handler>>) -> Arc<dyn Handler>>;

/// # Example
/// ```ignore
/// let chain = ChainBuilder::new()
///     .link(Attendant::new)
///     .link(Technician::new)
///     .expect_categories(&[RequestCategory::Question])
///     .build()?;
/// ```
pub struct ChainBuilder {
    factories: Vec<LinkFactory>,
    expected: Option<Vec<RequestCategory>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("a chain needs at least one link")]
    EmptyChain,

    #[error("link {0:?} appears more than once")]
    DuplicateLink(String),

    #[error("no link resolves categories: {0:?}")]
    UncoveredCategories(Vec<RequestCategory>),
}

impl ChainBuilder {
    /// An empty builder with no expected categories.
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
            expected: None,
        }
    }

    /// Append a link after the ones already listed.
    ///
    /// `make` receives the link's successor; agent constructors such as
    /// `Chatbot::new` fit directly.
    pub fn link<H, F>(mut self, make: F) -> Self
    where
        H: Handler + 'static,
        F: FnOnce(Option<Arc<dyn Handler>>) -> H + 'static,
    {
        self.factories
            .push(Box::new(move |next: Option<Arc<dyn Handler>>| {
                Arc::new(make(next)) as Arc<dyn Handler>
            }));
        self
    }

    /// Categories the built chain must be able to resolve.
    ///
    /// Replaces any earlier expectation. Repeated categories are reported once.
    pub fn expect_categories(mut self, categories: &[RequestCategory]) -> Self {
        self.expected = Some(categories.to_vec());
        self
    }

    /// Construct the links tail first and validate the result.
    ///
    /// # Errors
    /// - `EmptyChain` when no link was listed
    /// - `DuplicateLink` when two links share a name
    /// - `UncoveredCategories` when an expected category has no resolving link
    pub fn build(self) -> Result<Chain, BuildError> {
        let Self {
            factories,
            expected,
        } = self;

        let mut next: Option<Arc<dyn Handler>> = None;
        for make in factories.into_iter().rev() {
            next = Some(make(next));
        }
        let chain = Chain::from_head(next.ok_or(BuildError::EmptyChain)?);

        let mut seen = HashSet::new();
        for link in chain.links() {
            if !seen.insert(link.name()) {
                return Err(BuildError::DuplicateLink(link.name().to_string()));
            }
        }

        if let Some(expected) = expected {
            let mut missing: Vec<RequestCategory> = Vec::new();
            for category in expected {
                let covered = chain.links().any(|link| link.can_resolve(category));
                if !covered && !missing.contains(&category) {
                    missing.push(category);
                }
            }
            if !missing.is_empty() {
                return Err(BuildError::UncoveredCategories(missing));
            }
        }

        Ok(chain)
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
