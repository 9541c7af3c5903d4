//! Claims carried by a worker login token.
//!
//! Fields are declared in lexicographic order so the serialized payload
//! matches what runtimes already receive from earlier releases.

use serde::{Deserialize, Serialize};

use crate::config::params::TokenParams;

/// Identity of the player on whose behalf the worker logs in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl PlayerIdentity {
    /// Keep only the non-empty values; `None` when all three are empty.
    pub fn from_parts(id: &str, provider: &str, metadata: &str) -> Option<Self> {
        let present = |value: &str| (!value.is_empty()).then(|| value.to_string());

        let identity = Self {
            id: present(id),
            metadata: present(metadata),
            provider: present(provider),
        };

        if identity == Self::default() {
            None
        } else {
            Some(identity)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerClaims {
    /// Expiry (seconds since epoch)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_identity: Option<PlayerIdentity>,
    pub runtime_id: String,
    pub token_id: String,
    pub worker_id: String,
    pub worker_type: String,
}

impl WorkerClaims {
    pub fn new(params: &TokenParams, token_id: String, exp: i64) -> Self {
        Self {
            exp,
            player_identity: PlayerIdentity::from_parts(
                &params.player_identity_id,
                &params.player_identity_provider,
                &params.player_identity_metadata,
            ),
            runtime_id: params.runtime_id.clone(),
            token_id,
            worker_id: params.worker_id.clone(),
            worker_type: params.worker_type.clone(),
        }
    }
}
