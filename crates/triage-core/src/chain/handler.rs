//! Handler trait - one link of the chain of responsibility.
//!
//! A link answers two questions about a category: "can I resolve it?" and
//! "with what text?". Both come from `resolution`, written by each link as an
//! exhaustive `match`. Forwarding and end-of-chain rejection are provided
//! methods, so every link walks the chain the same way.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Outcome, Request, RequestCategory};

/// Response of the link that finds no successor to forward to.
///
/// Used verbatim whichever link is terminal.
pub const REJECTION: &str = "Técnico: Esta requisição não pode ser atendida!";

/// A link of the chain.
///
/// Links hold no per-request state, so one chain can serve any number of
/// calls, from any number of threads.
///
/// # Example
/// ```ignore
/// struct Receptionist {
///     next: Option<Arc<dyn Handler>>,
/// }
///
/// impl Handler for Receptionist {
///     fn name(&self) -> &'static str {
///         "receptionist"
///     }
///
///     fn resolution(&self, category: RequestCategory) -> Option<&'static str> {
///         match category {
///             RequestCategory::Question => Some("Recepção: pergunte no balcão."),
///             RequestCategory::Complaint
///             | RequestCategory::UpdateInformation
///             | RequestCategory::Malfunctioning
///             | RequestCategory::Refund => None,
///         }
///     }
///
///     fn successor(&self) -> Option<&Arc<dyn Handler>> {
///         self.next.as_ref()
///     }
/// }
/// ```
pub trait Handler: Send + Sync {
    /// Stable, lowercase link name (used in logs and outcomes).
    fn name(&self) -> &'static str;

    /// The fixed response for `category`, or `None` when this link cannot
    /// resolve it.
    fn resolution(&self, category: RequestCategory) -> Option<&'static str>;

    /// Next link, `None` for the terminal one.
    fn successor(&self) -> Option<&Arc<dyn Handler>>;

    fn can_resolve(&self, category: RequestCategory) -> bool {
        self.resolution(category).is_some()
    }

    /// Resolve locally, otherwise forward; reject when the chain ends here.
    ///
    /// A capable link never forwards. A forwarded outcome is returned as the
    /// successor produced it.
    fn dispatch(&self, request: &Request) -> Outcome {
        let category = request.category();
        if let Some(response) = self.resolution(category) {
            debug!(agent = self.name(), %category, "resolved");
            return Outcome::resolved(self.name(), response);
        }

        match self.successor() {
            Some(next) => {
                debug!(agent = self.name(), next = next.name(), %category, "forwarded");
                next.dispatch(request)
            }
            None => {
                info!(agent = self.name(), %category, "no link left, rejecting");
                Outcome::rejected(self.name(), REJECTION)
            }
        }
    }

    fn handle_request(&self, request: &Request) -> String {
        self.dispatch(request).into_response()
    }
}
