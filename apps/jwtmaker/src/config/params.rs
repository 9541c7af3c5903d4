//! Worker and player identity parameters read from the command line.

use clap::Args;

use crate::error::AppError;

/// Parameters describing the worker (and optionally the player) a token is
/// minted for. Every field defaults to the empty string when not supplied.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenParams {
    /// The Worker ID
    #[arg(
        long = "worker_id",
        env = "JWTMAKER_WORKER_ID",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub worker_id: String,

    /// The Worker type for the user process
    #[arg(
        long = "worker_type",
        env = "JWTMAKER_WORKER_TYPE",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub worker_type: String,

    /// The ID of the runtime the user process is connecting to
    #[arg(
        long = "runtime_id",
        env = "JWTMAKER_RUNTIME_ID",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub runtime_id: String,

    /// Path to a PEM-encoded RSA private key used to sign the token
    #[arg(
        long = "pem_private_key_file",
        env = "JWTMAKER_PEM_PRIVATE_KEY_FILE",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub pem_private_key_file: String,

    /// (optional) The ID of the player attempting the login
    #[arg(
        long = "player_identity_id",
        env = "JWTMAKER_PLAYER_IDENTITY_ID",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub player_identity_id: String,

    /// (optional) The provider of the identity for the player attempting the login
    #[arg(
        long = "player_identity_provider",
        env = "JWTMAKER_PLAYER_IDENTITY_PROVIDER",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub player_identity_provider: String,

    /// (optional) Metadata of the identity for the player attempting the login
    #[arg(
        long = "player_identity_metadata",
        env = "JWTMAKER_PLAYER_IDENTITY_METADATA",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub player_identity_metadata: String,
}

impl TokenParams {
    /// Mandatory fields, in the order they are checked.
    fn mandatory(&self) -> [(&'static str, &str); 4] {
        [
            ("worker_id", &self.worker_id),
            ("worker_type", &self.worker_type),
            ("runtime_id", &self.runtime_id),
            ("pem_private_key_file", &self.pem_private_key_file),
        ]
    }

    /// Fails on the first empty mandatory field.
    pub fn validate(&self) -> Result<(), AppError> {
        match self.mandatory().into_iter().find(|(_, value)| value.is_empty()) {
            Some((name, _)) => Err(AppError::missing(name)),
            None => Ok(()),
        }
    }

    pub fn has_player_identity(&self) -> bool {
        !self.player_identity_id.is_empty()
            || !self.player_identity_provider.is_empty()
            || !self.player_identity_metadata.is_empty()
    }
}
