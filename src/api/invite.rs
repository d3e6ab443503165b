use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::models::{CallableRequest, CallableResponse, InviteRequest, InviteResult};
use crate::state::AppState;

/// Callable route, named after the function it exposes
pub fn invite_routes() -> Router<AppState> {
    Router::new().route("/sendTrainerInvite", post(send_trainer_invite))
}

/// POST /sendTrainerInvite - Email a trainer invitation
///
/// Always answers 200 once the payload parses; delivery failures are reported
/// in the result body.
async fn send_trainer_invite(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CallableRequest<InviteRequest>>, JsonRejection>,
) -> Result<Json<CallableResponse<InviteResult>>> {
    let Json(CallableRequest { data: request }) = payload?;

    let result = state.dispatcher.dispatch(&request).await;

    Ok(Json(CallableResponse { result }))
}
