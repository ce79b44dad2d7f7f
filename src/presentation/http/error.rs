// src/presentation/http/error.rs
use thiserror::Error;

use crate::application::error::ApplicationError;
use crate::presentation::routing::RouteError;

pub type RenderResult<T> = Result<T, RenderError>;

/// Failure to produce a server-rendered page. Never shown to the client: the
/// bootstrap falls back to the raw template instead.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("template error: {0}")]
    Template(String),

    #[error("page component panicked: {0}")]
    Panicked(String),
}

impl RenderError {
    #[must_use]
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Builds a `Panicked` error from a `catch_unwind` payload.
    #[must_use]
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self::Panicked(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payloads_keep_their_message() {
        let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(
            RenderError::from_panic(payload.as_ref()).to_string(),
            "page component panicked: boom"
        );

        let payload = std::panic::catch_unwind(|| panic!("{} {}", "formatted", 1)).unwrap_err();
        assert!(matches!(
            RenderError::from_panic(payload.as_ref()),
            RenderError::Panicked(msg) if msg == "formatted 1"
        ));
    }
}
