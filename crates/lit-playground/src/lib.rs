//! Publishing example sources to a code-sharing playground.
//!
//! The playground accepts a program as the body of a `POST` request and
//! answers with an opaque share token, which pages turn into a "run this
//! example" link.
//!
//! - [`Publisher`]: the publishing seam used by the site assembler
//! - [`PlaygroundClient`]: blocking HTTP implementation
//! - `RecordingPublisher`: in-memory implementation for tests (`mock` feature)

mod client;
#[cfg(any(test, feature = "mock"))]
mod recording;

pub use client::{DEFAULT_PLAYGROUND_URL, DEFAULT_TIMEOUT, PlaygroundClient};
#[cfg(any(test, feature = "mock"))]
pub use recording::RecordingPublisher;

/// Error returned when publishing fails.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("playground returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("playground returned an empty share token")]
    EmptyToken,
}

/// Publishes runnable source and returns a reference token.
pub trait Publisher {
    /// Share `source` and return the playground's token for it.
    fn share(&self, source: &str) -> Result<String, PublishError>;
}
