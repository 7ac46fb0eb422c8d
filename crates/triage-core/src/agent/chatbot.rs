use std::sync::Arc;

use crate::chain::Handler;
use crate::domain::RequestCategory;

pub const COMPLAINT_REGISTERED: &str = "Chatbot: Sua reclamação foi registrada.";

/// First line of contact: registers complaints.
pub struct Chatbot {
    next: Option<Arc<dyn Handler>>,
}

impl Chatbot {
    pub const NAME: &'static str = "chatbot";

    /// `next` receives what the chatbot cannot resolve; `None` makes it terminal.
    pub fn new(next: Option<Arc<dyn Handler>>) -> Self {
        Self { next }
    }
}

impl Handler for Chatbot {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn resolution(&self, category: RequestCategory) -> Option<&'static str> {
        match category {
            RequestCategory::Complaint => Some(COMPLAINT_REGISTERED),
            RequestCategory::Question
            | RequestCategory::UpdateInformation
            | RequestCategory::Malfunctioning
            | RequestCategory::Refund => None,
        }
    }

    fn successor(&self) -> Option<&Arc<dyn Handler>> {
        self.next.as_ref()
    }
}
