use thiserror::Error;

use crate::types::Endpoint;

/// A period key that could not be placed on the timeline.
///
/// Raised by the strict month parsers only; amount parsing never fails (it
/// coerces to `0.0` instead). A malformed period key must fail loudly because
/// silently misfiling a point into the wrong month is worse than dropping it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable period key: {raw:?}")]
pub struct ParseError {
    /// The offending raw value, verbatim.
    pub raw: String,
}

impl ParseError {
    /// Build a `ParseError` carrying the offending raw value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// Unified error type for the umsatz workspace.
///
/// Structural per-record failures (`Parse`) are downgraded to warnings by the
/// series builders; the remaining variants describe batch-level failures
/// surfaced by the fetch orchestrator.
#[derive(Debug, Error)]
pub enum UmsatzError {
    /// A period key failed to parse. Carries the offending raw value.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual endpoint call failed at the transport level.
    #[error("{endpoint} failed: {msg}")]
    Endpoint {
        /// Endpoint that failed.
        endpoint: Endpoint,
        /// Human-readable error message from the connector.
        msg: String,
    },

    /// The connector does not implement the requested endpoint.
    #[error("unsupported endpoint: {endpoint}")]
    Unsupported {
        /// Endpoint that was requested.
        endpoint: Endpoint,
    },

    /// The overall fetch batch exceeded the configured deadline.
    #[error("request timed out: {endpoint}")]
    RequestTimeout {
        /// Endpoint group for which the batch timed out.
        endpoint: Endpoint,
    },

    /// The batch resolved after a newer batch had been initiated; its results
    /// must be discarded, never applied to visible state.
    #[error("fetch batch superseded (epoch {epoch})")]
    Superseded {
        /// Epoch tag of the stale batch.
        epoch: u64,
    },
}

impl UmsatzError {
    /// Helper: build an `Unsupported` error for an endpoint.
    #[must_use]
    pub const fn unsupported(endpoint: Endpoint) -> Self {
        Self::Unsupported { endpoint }
    }

    /// Helper: build an `Endpoint` error with the endpoint and message.
    pub fn endpoint(endpoint: Endpoint, msg: impl Into<String>) -> Self {
        Self::Endpoint {
            endpoint,
            msg: msg.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub const fn request_timeout(endpoint: Endpoint) -> Self {
        Self::RequestTimeout { endpoint }
    }
}
