use std::sync::Arc;

use crate::chain::Handler;
use crate::domain::RequestCategory;

pub const QUESTION_ANSWERED: &str = "Atendente: [Responde à questão].";
pub const REGISTRATION_UPDATED: &str = "Atendente: Seu cadastro foi atualizado.";

/// Human attendant: answers questions and updates customer records.
pub struct Attendant {
    next: Option<Arc<dyn Handler>>,
}

impl Attendant {
    pub const NAME: &'static str = "attendant";

    /// `next` receives what the attendant cannot resolve; `None` makes it terminal.
    pub fn new(next: Option<Arc<dyn Handler>>) -> Self {
        Self { next }
    }
}

impl Handler for Attendant {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn resolution(&self, category: RequestCategory) -> Option<&'static str> {
        match category {
            RequestCategory::Question => Some(QUESTION_ANSWERED),
            RequestCategory::UpdateInformation => Some(REGISTRATION_UPDATED),
            RequestCategory::Complaint
            | RequestCategory::Malfunctioning
            | RequestCategory::Refund => None,
        }
    }

    fn successor(&self) -> Option<&Arc<dyn Handler>> {
        self.next.as_ref()
    }
}
