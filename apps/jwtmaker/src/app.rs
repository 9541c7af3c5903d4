//! The token pipeline: validate parameters, read the key, mint the token.

use std::time::SystemTime;

use crate::auth::jwt::{build_claims, sign_claims};
use crate::auth::key_loader::load_private_key_pem;
use crate::auth::token_id::TokenIdSource;
use crate::config::cli::Cli;
use crate::error::AppError;
use crate::logging::events;

/// Run the pipeline once as of `now`, returning the signed token.
pub fn run_at(cli: &Cli, now: SystemTime) -> Result<String, AppError> {
    let params = &cli.params;
    params.validate()?;
    events::params_loaded(params);

    let private_key = load_private_key_pem(&params.pem_private_key_file)?;

    let token_ids = TokenIdSource::from(cli.token_id.clone());
    let claims = build_claims(params, &token_ids, now)?;
    let token = sign_claims(&claims, &private_key)?;

    events::token_minted(&claims);
    Ok(token)
}

pub fn run(cli: &Cli) -> Result<String, AppError> {
    run_at(cli, SystemTime::now())
}
