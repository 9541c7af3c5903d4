pub mod events;
pub mod redact;
