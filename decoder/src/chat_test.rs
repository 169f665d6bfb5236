use super::*;

fn with_query(query: &str) -> ChatState {
    ChatState::default().apply(ChatEvent::QueryEdited(query.to_owned())).0
}

#[test]
fn chat_state_default_is_empty() {
    let state = ChatState::default();
    assert!(state.query.is_empty());
    assert!(state.response.is_empty());
}

#[test]
fn editing_query_keeps_previous_response() {
    let state = ChatState { query: String::new(), response: "earlier".to_owned() };
    let (next, effect) = state.apply(ChatEvent::QueryEdited("what is idli?".to_owned()));
    assert_eq!(effect, None);
    assert_eq!(next.query, "what is idli?");
    assert_eq!(next.response, "earlier");
}

#[test]
fn submit_empty_query_is_noop() {
    let state = ChatState { query: String::new(), response: "kept".to_owned() };
    let (next, effect) = state.apply(ChatEvent::Submitted);
    assert_eq!(effect, None);
    assert_eq!(next, state);
}

#[test]
fn submit_whitespace_query_is_sent() {
    let (_, effect) = with_query("  ").apply(ChatEvent::Submitted);
    assert_eq!(effect, Some(ChatEffect::Send(ChatRequest { query: "  ".to_owned() })));
}

#[test]
fn submit_sends_query_and_leaves_response() {
    let state = ChatState { response: "old".to_owned(), ..with_query("how do I make samosas?") };
    let (next, effect) = state.apply(ChatEvent::Submitted);
    assert_eq!(effect, Some(ChatEffect::Send(ChatRequest { query: "how do I make samosas?".to_owned() })));
    assert_eq!(next.response, "old");
}

#[test]
fn settled_reply_sets_response() {
    let (next, effect) =
        with_query("samosa?").apply(ChatEvent::Settled(Ok("Samosas are fried pastries.".to_owned())));
    assert_eq!(effect, None);
    assert_eq!(next.response, "Samosas are fried pastries.");
    assert_eq!(next.query, "samosa?");
}

#[test]
fn settled_service_error_apologizes_and_logs() {
    let failure = ChatFailure::Service("quota exceeded".to_owned());
    let (next, effect) = with_query("samosa?").apply(ChatEvent::Settled(Err(failure.clone())));
    assert_eq!(next.response, CHAT_APOLOGY);
    assert_eq!(effect, Some(ChatEffect::Log(failure)));
}

#[test]
fn settled_transport_error_apologizes_and_logs() {
    let failure = ChatFailure::Transport("connection refused".to_owned());
    let (next, effect) = with_query("samosa?").apply(ChatEvent::Settled(Err(failure.clone())));
    assert_eq!(next.response, CHAT_APOLOGY);
    assert_eq!(effect, Some(ChatEffect::Log(failure)));
}
