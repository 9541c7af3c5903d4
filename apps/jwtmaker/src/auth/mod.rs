pub mod claims;
pub mod jwt;
pub mod key_loader;
pub mod token_id;
