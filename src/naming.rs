//! Injected color-naming capability.
//!
//! The conversion core never looks up names itself; the surrounding viewer
//! passes a [`ColorNamer`] in and calls it per color, independently of any
//! color-math computation. Lookups never fail hard: anything that cannot be
//! named resolves to [`UNKNOWN_NAME`].

use async_trait::async_trait;

/// Placeholder name for failed or unavailable lookups.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Async lookup from a hex color to a human-readable name.
#[async_trait]
pub trait ColorNamer: Send + Sync {
    /// Name for `hex`. Implementations must not error; return
    /// [`UNKNOWN_NAME`] when no name can be produced.
    async fn name(&self, hex: &str) -> String;
}

/// Namer that knows nothing; every color resolves to [`UNKNOWN_NAME`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnknownNamer;

#[async_trait]
impl ColorNamer for UnknownNamer {
    async fn name(&self, _hex: &str) -> String {
        UNKNOWN_NAME.to_string()
    }
}

#[cfg(feature = "naming-http")]
pub use http::ColorPizzaNamer;

#[cfg(feature = "naming-http")]
mod http {
    use super::{ColorNamer, UNKNOWN_NAME};
    use async_trait::async_trait;
    use serde::Deserialize;

    const DEFAULT_BASE_URL: &str = "https://api.color.pizza";

    #[derive(Debug, Deserialize)]
    struct NamesResponse {
        colors: Vec<NamedColor>,
    }

    #[derive(Debug, Deserialize)]
    struct NamedColor {
        name: String,
    }

    /// [`ColorNamer`] backed by the color.pizza naming service.
    #[derive(Debug, Clone)]
    pub struct ColorPizzaNamer {
        client: reqwest::Client,
        base_url: String,
    }

    impl Default for ColorPizzaNamer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ColorPizzaNamer {
        pub fn new() -> Self {
            Self::with_base_url(DEFAULT_BASE_URL)
        }

        /// Point lookups at a different server, e.g. a local stub.
        pub fn with_base_url(base_url: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                base_url: base_url.into(),
            }
        }

        async fn lookup(&self, hex: &str) -> Result<Option<String>, reqwest::Error> {
            let url = format!("{}/v1/{}", self.base_url, hex.trim_start_matches('#'));
            let response: NamesResponse = self
                .client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            Ok(response.colors.into_iter().next().map(|c| c.name))
        }
    }

    #[async_trait]
    impl ColorNamer for ColorPizzaNamer {
        async fn name(&self, hex: &str) -> String {
            match self.lookup(hex).await {
                Ok(Some(name)) => name,
                Ok(None) => UNKNOWN_NAME.to_string(),
                Err(err) => {
                    tracing::warn!(hex, error = %err, "color name lookup failed");
                    UNKNOWN_NAME.to_string()
                }
            }
        }
    }
}
