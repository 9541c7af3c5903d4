use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::cli::ExitCodePolicy;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing mandatory parameter {name}")]
    MissingParameter { name: &'static str },
    #[error("open {}: {}", .path.display(), .source)]
    KeyRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid RSA private key: {source}")]
    InvalidKey {
        #[source]
        source: jsonwebtoken::errors::Error,
    },
    #[error("failed to sign token: {source}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
    },
    #[error("system clock is set before the Unix epoch")]
    Clock,
}

impl AppError {
    /// Stable identifier for log events
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingParameter { .. } => "MISSING_PARAMETER",
            AppError::KeyRead { .. } => "KEY_READ",
            AppError::InvalidKey { .. } => "INVALID_KEY",
            AppError::Signing { .. } => "SIGNING",
            AppError::Clock => "CLOCK",
        }
    }

    /// Process exit status for this error under the given policy.
    ///
    /// A missing parameter always exits with 1. Under `Legacy` every later
    /// failure exits with 0, so callers have to inspect stdout to tell a
    /// token from an error message.
    pub fn exit_code(&self, policy: ExitCodePolicy) -> i32 {
        match (self, policy) {
            (AppError::MissingParameter { .. }, _) => 1,
            (_, ExitCodePolicy::Legacy) => 0,
            (AppError::KeyRead { .. }, ExitCodePolicy::Strict) => 3,
            (_, ExitCodePolicy::Strict) => 4,
        }
    }

    pub fn missing(name: &'static str) -> Self {
        Self::MissingParameter { name }
    }

    pub fn key_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::KeyRead {
            path: path.into(),
            source,
        }
    }
}
