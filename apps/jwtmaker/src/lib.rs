#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod telemetry;

// Re-exports for public API
pub use auth::claims::{PlayerIdentity, WorkerClaims};
pub use auth::jwt::{build_claims, mint_worker_token, sign_claims, SIGNING_ALGORITHM, TOKEN_TTL};
pub use auth::key_loader::load_private_key_pem;
pub use auth::token_id::{TokenIdSource, LEGACY_TOKEN_ID};
pub use config::cli::{Cli, ExitCodePolicy};
pub use config::params::TokenParams;
pub use error::AppError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    jwtmaker_test_support::logging::init();
}
