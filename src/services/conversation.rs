use std::sync::Arc;

use anyhow::Context;

use crate::services::dialogue::{self, Action};
use crate::state::AppState;

/// Run one conversation turn: classify the message, advance the appointment
/// flow for this session, and defer to the generative provider when the turn
/// is not part of it.
///
/// Classifier failures propagate; the adapter decides how to surface them.
/// The generative path never fails (its client maps errors internally).
pub async fn process_turn(
    state: &Arc<AppState>,
    session_id: &str,
    message: &str,
) -> anyhow::Result<String> {
    let nlu = state
        .classifier
        .classify(message)
        .await
        .context("intent classification failed")?;

    let action = {
        let mut sessions = state.sessions.lock().unwrap();
        let session = sessions.entry(session_id.to_string()).or_default();
        dialogue::respond(&state.dialogue, session, &nlu, message)
    };

    tracing::info!(
        session = session_id,
        intent = nlu.top_intent().unwrap_or("-"),
        confidence = nlu.top_confidence(),
        fallback = matches!(action, Action::Fallback { .. }),
        "processing turn"
    );

    match action {
        Action::Reply(reply) => Ok(reply),
        Action::Fallback { hint } => Ok(state.generative.complete(message, &hint).await),
    }
}
