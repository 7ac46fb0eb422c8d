use std::sync::Arc;

use rstest::{fixture, rstest};
use triage_core::{
    Attendant, Chain, ChainBuilder, Chatbot, CustomerId, Handler, OutcomeKind, REJECTION, Request,
    RequestCategory, Technician,
};

const COMPLAINT: &str = "Chatbot: Sua reclamação foi registrada.";
const QUESTION: &str = "Atendente: [Responde à questão].";
const UPDATE: &str = "Atendente: Seu cadastro foi atualizado.";
const MALFUNCTION: &str = "Técnico: [Responde a como corrigir o problema de funcionamento].";
const REFUND: &str = "Técnico: Não foi possível identificar a empresa responsável pelo reembolso.";

/// The three links wired the canonical way, each kept addressable.
struct Desk {
    chatbot: Arc<dyn Handler>,
    attendant: Arc<dyn Handler>,
    technician: Arc<dyn Handler>,
}

#[fixture]
fn desk() -> Desk {
    let technician: Arc<dyn Handler> = Arc::new(Technician::new(None));
    let attendant: Arc<dyn Handler> = Arc::new(Attendant::new(Some(technician.clone())));
    let chatbot: Arc<dyn Handler> = Arc::new(Chatbot::new(Some(attendant.clone())));
    Desk {
        chatbot,
        attendant,
        technician,
    }
}

fn request(category: RequestCategory) -> Request {
    let description = match category {
        RequestCategory::Complaint => "Os produtos são menores que aparentam ser no anúncio.",
        RequestCategory::Question => "Como eu ativo o modo silencioso do micro-ondas?",
        RequestCategory::UpdateInformation => {
            "Gostaria de atualizar meu número de telefone para (12)98765-4321."
        }
        RequestCategory::Malfunctioning => {
            "A trempe na parte traseira esquerda do meu fogão não está acendendo."
        }
        RequestCategory::Refund => {
            "O laptop que foi entregue é de um modelo diferente daquele que eu pedi. \
             Gostaria de solicitar a troca pelo correto."
        }
    };
    Request::new(category, description, None)
}

#[rstest]
#[case::complaint(RequestCategory::Complaint, COMPLAINT)]
#[case::question(RequestCategory::Question, QUESTION)]
#[case::update_information(RequestCategory::UpdateInformation, UPDATE)]
#[case::malfunctioning(RequestCategory::Malfunctioning, MALFUNCTION)]
#[case::refund(RequestCategory::Refund, REFUND)]
fn chatbot_routes(desk: Desk, #[case] category: RequestCategory, #[case] expected: &str) {
    assert_eq!(desk.chatbot.handle_request(&request(category)), expected);
}

#[rstest]
#[case::complaint(RequestCategory::Complaint, REJECTION)]
#[case::question(RequestCategory::Question, QUESTION)]
#[case::update_information(RequestCategory::UpdateInformation, UPDATE)]
#[case::malfunctioning(RequestCategory::Malfunctioning, MALFUNCTION)]
#[case::refund(RequestCategory::Refund, REFUND)]
fn attendant_routes(desk: Desk, #[case] category: RequestCategory, #[case] expected: &str) {
    assert_eq!(desk.attendant.handle_request(&request(category)), expected);
}

#[rstest]
#[case::complaint(RequestCategory::Complaint, REJECTION)]
#[case::question(RequestCategory::Question, REJECTION)]
#[case::update_information(RequestCategory::UpdateInformation, REJECTION)]
#[case::malfunctioning(RequestCategory::Malfunctioning, MALFUNCTION)]
#[case::refund(RequestCategory::Refund, REFUND)]
fn technician_routes(desk: Desk, #[case] category: RequestCategory, #[case] expected: &str) {
    assert_eq!(desk.technician.handle_request(&request(category)), expected);
}

#[test]
fn rejection_literal() {
    assert_eq!(REJECTION, "Técnico: Esta requisição não pode ser atendida!");
}

#[rstest]
fn canonical_chain_matches_hand_wired(desk: Desk) {
    let chain = Chain::canonical();
    for category in RequestCategory::ALL {
        let r = request(category);
        assert_eq!(chain.handle_request(&r), desk.chatbot.handle_request(&r));
    }
}

#[rstest]
fn forwarding_equals_successor_answer(desk: Desk) {
    for link in [&desk.chatbot, &desk.attendant, &desk.technician] {
        for category in RequestCategory::ALL {
            if link.can_resolve(category) {
                continue;
            }
            let r = request(category);
            match link.successor() {
                Some(next) => assert_eq!(link.handle_request(&r), next.handle_request(&r)),
                None => assert_eq!(link.handle_request(&r), REJECTION),
            }
        }
    }
}

#[test]
fn capable_link_short_circuits() {
    // a technician behind the chatbot would reject complaints; the chatbot wins
    let chain = ChainBuilder::new()
        .link(Chatbot::new)
        .link(Technician::new)
        .build()
        .unwrap();
    let outcome = chain.dispatch(&request(RequestCategory::Complaint));
    assert_eq!(outcome.kind, OutcomeKind::Resolved);
    assert_eq!(outcome.agent, "chatbot");
    assert_eq!(outcome.response, COMPLAINT);

    // the successor of a capable link is never consulted
    let first = Technician::new(Some(Arc::new(Attendant::new(None))));
    assert_eq!(first.handle_request(&request(RequestCategory::Refund)), REFUND);
}

#[test]
fn terminal_rejection_from_any_ordering() {
    let chain = ChainBuilder::new()
        .link(Technician::new)
        .link(Attendant::new)
        .build()
        .unwrap();
    let outcome = chain.dispatch(&request(RequestCategory::Complaint));
    assert_eq!(outcome.kind, OutcomeKind::Rejected);
    assert_eq!(outcome.agent, "attendant");
    assert_eq!(outcome.response, REJECTION);
}

#[test]
fn idempotent() {
    let chain = Chain::canonical();
    for category in RequestCategory::ALL {
        let first = chain.handle_request(&request(category));
        let second = chain.handle_request(&request(category));
        assert_eq!(first, second);
    }
}

#[test]
fn description_and_origin_do_not_affect_routing() {
    let chain = Chain::canonical();
    for category in RequestCategory::ALL {
        let plain = Request::new(category, "", None);
        let with_origin = Request::new(category, "qualquer coisa", Some(CustomerId::generate()));
        assert_eq!(chain.handle_request(&plain), chain.handle_request(&with_origin));
    }
}

#[test]
fn request_is_untouched_by_routing() {
    let chain = Chain::canonical();
    let r = request(RequestCategory::Malfunctioning);
    let before = r.clone();
    chain.handle_request(&r);
    assert_eq!(r, before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_chain_serves_concurrent_callers() {
    let chain = Arc::new(Chain::canonical());

    let mut joins = Vec::new();
    for i in 0..32 {
        let chain = Arc::clone(&chain);
        let category = RequestCategory::ALL[i % RequestCategory::ALL.len()];
        joins.push(tokio::spawn(async move {
            (category, chain.handle_request(&request(category)))
        }));
    }

    for join in joins {
        let (category, response) = join.await.unwrap();
        assert_eq!(response, chain.handle_request(&request(category)));
    }
}
