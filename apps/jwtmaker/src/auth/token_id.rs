use uuid::Uuid;

/// Constant identifier earlier releases stamped on every token.
pub const LEGACY_TOKEN_ID: &str = "token_id";

/// Where a token's `token_id` claim comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TokenIdSource {
    /// A fresh UUID v4 for every token
    #[default]
    Random,
    /// The same value for every token
    Fixed(String),
}

impl TokenIdSource {
    pub fn legacy() -> Self {
        Self::Fixed(LEGACY_TOKEN_ID.to_string())
    }

    pub fn next_id(&self) -> String {
        match self {
            TokenIdSource::Random => Uuid::new_v4().to_string(),
            TokenIdSource::Fixed(id) => id.clone(),
        }
    }
}

impl From<Option<String>> for TokenIdSource {
    fn from(pinned: Option<String>) -> Self {
        pinned.map_or(TokenIdSource::Random, TokenIdSource::Fixed)
    }
}
