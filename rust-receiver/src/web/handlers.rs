//! Endpoint handlers.
//!
//! The slash-command handler only:
//! 1. Reads the raw body
//! 2. Verifies the Slack signature against those exact bytes
//! 3. Returns a Block Kit acknowledgment

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use tracing::{error, info, warn};

use crate::config::ConfigError;
use crate::web::blocks::SlackResponse;
use crate::web::command::SlashCommand;
use crate::web::signature::{SignatureVerifier, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub verifier: SignatureVerifier,
}

impl AppState {
    /// Build the state, binding the verifier to the configured secret.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let verifier = SignatureVerifier::new(config.signing_secret.as_bytes())
            .ok_or(ConfigError::MissingSigningSecret)?;

        Ok(Self {
            config: Arc::new(config),
            verifier,
        })
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Liveness body returned by `/healthz`.
pub const HEALTH_RESPONSE: &str = "health check response";

/// Health check endpoint.
pub async fn health() -> Json<&'static str> {
    Json(HEALTH_RESPONSE)
}

// =============================================================================
// Slash Command
// =============================================================================

/// Read a header as a string. Missing or non-UTF-8 values become empty.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Slash-command endpoint.
///
/// Returns 200 on a valid signature, 400 on a rejected one, and 500 if the
/// body could not be read. The body is a `SlackResponse` in every case.
pub async fn slack_command(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, Json<SlackResponse>) {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "slack_body_read_failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SlackResponse::default_error()),
            );
        }
    };

    let timestamp = header_str(&headers, TIMESTAMP_HEADER);
    let signature = header_str(&headers, SIGNATURE_HEADER);

    info!(
        body_length = body.len(),
        has_timestamp = !timestamp.is_empty(),
        has_signature = !signature.is_empty(),
        "slack_request_received"
    );

    let outcome = state.verifier.check(&body, timestamp, signature);
    if !outcome.is_verified() {
        warn!(
            outcome = outcome.as_str(),
            has_timestamp = !timestamp.is_empty(),
            signature_length = signature.len(),
            body_length = body.len(),
            "slack_verification_failed"
        );
        return (
            StatusCode::BAD_REQUEST,
            Json(SlackResponse::failed_verification()),
        );
    }

    // The signature already passed, so a body we cannot decode is still acknowledged
    match SlashCommand::from_form(&body) {
        Ok(command) => info!(
            team_id = %command.team_id,
            channel_id = %command.channel_id,
            user_id = %command.user_id,
            command = %command.command,
            "slack_request_verified"
        ),
        Err(e) => warn!(error = %e, "slack_command_decode_failed"),
    }

    (StatusCode::OK, Json(SlackResponse::verified()))
}
