//! Chain - an assembled, immutable sequence of links.
//!
//! The chain only keeps its head; every other link is reached through
//! `Handler::successor`. Links are `Arc`-shared, so cloning a `Chain` is cheap
//! and the same links can be entered at any point.
//!
//! # Key points
//! - The chain is a singly linked list of `Arc<dyn Handler>`; it cannot be cyclic
//!   because a link gets its successor only when it is constructed
//! - `links()` walks the successors lazily, so nothing but the head is stored
//! - `entry()` hands out an inner link, whose contract is the same as the head's

use std::fmt;
use std::sync::Arc;

use crate::agent::{Attendant, Chatbot, Technician};
use crate::chain::Handler;
use crate::domain::{Outcome, Request};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no link named {name:?} in chain [{}]", .known.join(" -> "))]
    UnknownLink {
        name: String,
        known: Vec<&'static str>,
    },
}

/// An assembled chain, addressed through its head.
#[derive(Clone)]
pub struct Chain {
    head: Arc<dyn Handler>,
}

impl Chain {
    /// Wrap an already-linked head; its successors make up the rest of the chain.
    pub fn from_head(head: Arc<dyn Handler>) -> Self {
        Self { head }
    }

    /// Chatbot -> Attendant -> Technician.
    ///
    /// Built tail-first: the technician has no successor.
    pub fn canonical() -> Self {
        let technician: Arc<dyn Handler> = Arc::new(Technician::new(None));
        let attendant: Arc<dyn Handler> = Arc::new(Attendant::new(Some(technician)));
        let chatbot: Arc<dyn Handler> = Arc::new(Chatbot::new(Some(attendant)));
        Self::from_head(chatbot)
    }

    /// The link that receives requests by default.
    pub fn head(&self) -> &Arc<dyn Handler> {
        &self.head
    }

    /// Links from head to terminal.
    pub fn links(&self) -> Links<'_> {
        Links {
            next: Some(&self.head),
        }
    }

    /// Link names, head first.
    pub fn names(&self) -> Vec<&'static str> {
        self.links().map(|link| link.name()).collect()
    }

    /// The first link called `name`, for entering the chain past its head.
    pub fn entry(&self, name: &str) -> Result<&Arc<dyn Handler>, LookupError> {
        self.links()
            .find(|link| link.name() == name)
            .ok_or_else(|| LookupError::UnknownLink {
                name: name.to_string(),
                known: self.names(),
            })
    }

    /// Submit `request` to the head and return the structured answer.
    pub fn dispatch(&self, request: &Request) -> Outcome {
        self.head.dispatch(request)
    }

    /// Submit `request` to the head and return the response text only.
    pub fn handle_request(&self, request: &Request) -> String {
        self.head.handle_request(request)
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::canonical()
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Iterator over the links of a [`Chain`], head first.
pub struct Links<'a> {
    next: Option<&'a Arc<dyn Handler>>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a Arc<dyn Handler>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.successor();
        Some(current)
    }
}
