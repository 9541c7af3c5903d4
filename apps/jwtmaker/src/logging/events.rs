//! Structured log events for the token pipeline.
//!
//! Player identity id and metadata are only ever logged through [`Redacted`].

use tracing::{debug, info, warn};

use crate::auth::claims::WorkerClaims;
use crate::config::params::TokenParams;
use crate::error::AppError;
use crate::logging::redact::Redacted;

pub fn params_loaded(params: &TokenParams) {
    debug!(
        event = "PARAMS_LOADED",
        worker_id = %params.worker_id,
        worker_type = %params.worker_type,
        runtime_id = %params.runtime_id,
        key_file = %params.pem_private_key_file,
        player_identity_id = %Redacted(&params.player_identity_id),
        player_identity_provider = %params.player_identity_provider,
        player_identity_metadata = %Redacted(&params.player_identity_metadata),
        "Token parameters loaded"
    );
}

pub fn token_minted(claims: &WorkerClaims) {
    info!(
        event = "TOKEN_MINTED",
        token_id = %claims.token_id,
        exp = claims.exp,
        worker_id = %claims.worker_id,
        runtime_id = %claims.runtime_id,
        player_identity = claims.player_identity.is_some(),
        "Worker token minted"
    );
}

pub fn token_failed(err: &AppError) {
    warn!(
        event = "TOKEN_FAILED",
        code = err.code(),
        detail = %err,
        "Worker token generation failed"
    );
}
