use crate::error::ServerError;
use crate::signaling::SignalingService;
use axum::Json;
use axum::extract::State;
use switchboard_core::{Credential, CredentialRequest};
use tracing::info;

/// `POST /token`: mint a join credential for the external media service.
pub async fn token_handler(
    State(service): State<SignalingService>,
    Json(request): Json<CredentialRequest>,
) -> Result<Json<Credential>, ServerError> {
    if request.room_name.trim().is_empty() || request.identity.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "roomName and identity are required".to_owned(),
        ));
    }

    let credential = service.issuer().issue(&request).await?;
    info!(
        room = %request.room_name,
        identity = %request.identity,
        "Issued media credential"
    );

    Ok(Json(credential))
}
