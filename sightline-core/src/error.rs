use thiserror::Error;

/// Unified error type for the sightline workspace.
///
/// This covers request validation failures, the distinguished unknown-entity
/// condition, and fetch-layer failures (store errors and timeouts).
#[derive(Debug, Error)]
pub enum SightlineError {
    /// The supplied date range is not usable (end before start, or
    /// unrepresentable dates at the parsing boundary).
    #[error("invalid date range: {0}")]
    InvalidRange(String),

    /// A review asked for no entities, or for more than the chart can hold.
    #[error("invalid entity count: {count} (expected 1..=5)")]
    InvalidEntityCount {
        /// Number of entities the caller supplied.
        count: usize,
    },

    /// An entity identifier did not resolve against the record store.
    ///
    /// Kept distinct from [`SightlineError::Fetch`] so callers can render a
    /// 400-class "no such species" response rather than a generic failure.
    #[error("unknown entity: {entity}")]
    UnknownEntity {
        /// The identifier that failed to resolve.
        entity: String,
    },

    /// Invalid input argument (builder misuse, malformed scope, ...).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The record store failed while fetching one (entity, site) pair.
    #[error("fetch failed for {entity}: {msg}")]
    Fetch {
        /// Entity the fetch was for.
        entity: String,
        /// Site filter in effect, if any.
        site: Option<String>,
        /// Human-readable store error.
        msg: String,
    },

    /// One fetch exceeded the configured per-fetch timeout.
    #[error("fetch timed out for {entity}")]
    FetchTimeout {
        /// Entity the fetch was for.
        entity: String,
        /// Site filter in effect, if any.
        site: Option<String>,
    },

    /// The whole review exceeded the configured request deadline.
    #[error("review request timed out")]
    RequestTimeout,
}

impl SightlineError {
    /// Helper: build an `UnknownEntity` error for an identifier.
    pub fn unknown_entity(entity: impl Into<String>) -> Self {
        Self::UnknownEntity {
            entity: entity.into(),
        }
    }

    /// Helper: build a `Fetch` error tagged with the pair it was fetching.
    pub fn fetch(
        entity: impl Into<String>,
        site: Option<impl Into<String>>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Fetch {
            entity: entity.into(),
            site: site.map(Into::into),
            msg: msg.into(),
        }
    }

    /// Helper: build a `FetchTimeout` error tagged with the pair it was fetching.
    pub fn fetch_timeout(entity: impl Into<String>, site: Option<impl Into<String>>) -> Self {
        Self::FetchTimeout {
            entity: entity.into(),
            site: site.map(Into::into),
        }
    }
}
