use std::sync::Arc;

use crate::chain::Handler;
use crate::domain::RequestCategory;

pub const MALFUNCTION_FIX: &str =
    "Técnico: [Responde a como corrigir o problema de funcionamento].";
pub const REFUND_UNRESOLVED: &str =
    "Técnico: Não foi possível identificar a empresa responsável pelo reembolso.";

/// Technical staff: malfunctions and refunds. Last link of the canonical chain.
pub struct Technician {
    next: Option<Arc<dyn Handler>>,
}

impl Technician {
    pub const NAME: &'static str = "technician";

    /// `next` receives what the technician cannot resolve; `None` makes it terminal.
    pub fn new(next: Option<Arc<dyn Handler>>) -> Self {
        Self { next }
    }
}

impl Handler for Technician {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn resolution(&self, category: RequestCategory) -> Option<&'static str> {
        match category {
            RequestCategory::Malfunctioning => Some(MALFUNCTION_FIX),
            // answered here even though no company could be identified
            RequestCategory::Refund => Some(REFUND_UNRESOLVED),
            RequestCategory::Complaint
            | RequestCategory::Question
            | RequestCategory::UpdateInformation => None,
        }
    }

    fn successor(&self) -> Option<&Arc<dyn Handler>> {
        self.next.as_ref()
    }
}
