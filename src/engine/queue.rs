use crate::error::AppError;
use crate::models::request::ServiceRequest;
use crate::state::AppState;

pub async fn enqueue_request(state: &AppState, request: ServiceRequest) -> Result<(), AppError> {
    state
        .request_tx
        .send(request)
        .await
        .map_err(|err| AppError::Internal(format!("request queue send failed: {err}")))?;

    state.metrics.requests_in_queue.inc();
    Ok(())
}
