//! One-shot catalog loader state machine.
//!
//! ```text
//! Idle ──begin──▶ Loading ──complete(2xx, valid body)──▶ Loaded
//!                    │
//!                    └──complete(error) / fail──────────▶ Errored
//! ```
//!
//! `Loaded` and `Errored` are terminal: there is no refresh and no retry.
//! The loader does not perform I/O itself. It hands out the request URL on
//! [`CatalogLoader::begin`] and consumes the response delivered later by the
//! plugin runtime, which keeps it usable from native tests.

use crate::catalog::api;
use crate::catalog::Catalog;
use crate::domain::LoadError;

/// Current phase of the catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    /// The catalog was installed; carries its size for display.
    Loaded { count: usize },
    Errored(LoadError),
}

impl LoadState {
    const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded { .. } => "loaded",
            Self::Errored(_) => "errored",
        }
    }

    /// Whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded { .. } | Self::Errored(_))
    }
}

/// Drives the single bulk fetch of the catalog.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    api_url: String,
    limit: u32,
    state: LoadState,
}

impl CatalogLoader {
    #[must_use]
    pub fn new(api_url: impl Into<String>, limit: u32) -> Self {
        Self {
            api_url: api_url.into(),
            limit,
            state: LoadState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// The terminal error, if the load failed.
    #[must_use]
    pub const fn error(&self) -> Option<&LoadError> {
        match &self.state {
            LoadState::Errored(err) => Some(err),
            _ => None,
        }
    }

    /// Moves `Idle -> Loading` and returns the URL to request.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidTransition`] if a load was already started;
    /// the state is left untouched.
    pub fn begin(&mut self) -> Result<String, LoadError> {
        if self.state != LoadState::Idle {
            return Err(self.invalid("begin loading"));
        }

        let url = api::listing_url(&self.api_url, self.limit);
        tracing::debug!(url = %url, limit = self.limit, "catalog load started");
        self.state = LoadState::Loading;
        Ok(url)
    }

    /// Consumes the HTTP response of the listing request.
    ///
    /// On success the loader becomes `Loaded` and the parsed catalog is
    /// returned for installation into the engine. Any failure moves the
    /// loader to `Errored` and is returned as well.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Status`] for a non-2xx response
    /// - [`LoadError::Malformed`] / [`LoadError::MissingIdentifier`] for a bad body
    /// - [`LoadError::InvalidTransition`] if no load is in flight (state untouched)
    pub fn complete(&mut self, status: u16, body: &[u8]) -> Result<Catalog, LoadError> {
        if self.state != LoadState::Loading {
            return Err(self.invalid("complete loading"));
        }

        let outcome = if (200..300).contains(&status) {
            api::parse_listing(body)
        } else {
            Err(LoadError::Status(status))
        };

        match outcome {
            Ok(catalog) => {
                tracing::debug!(item_count = catalog.len(), "catalog loaded");
                self.state = LoadState::Loaded {
                    count: catalog.len(),
                };
                Ok(catalog)
            }
            Err(err) => {
                self.record_failure(err.clone());
                Err(err)
            }
        }
    }

    /// Records a transport-level failure of the in-flight request.
    ///
    /// Ignored (with a debug log) when no load is in flight.
    pub fn fail(&mut self, reason: impl Into<String>) {
        if self.state != LoadState::Loading {
            tracing::debug!(state = self.state.label(), "ignoring failure outside of loading");
            return;
        }
        self.record_failure(LoadError::Transport(reason.into()));
    }

    fn record_failure(&mut self, err: LoadError) {
        tracing::warn!(error = %err, "catalog load failed");
        self.state = LoadState::Errored(err);
    }

    fn invalid(&self, operation: &'static str) -> LoadError {
        LoadError::InvalidTransition {
            operation,
            state: self.state.label(),
        }
    }
}
