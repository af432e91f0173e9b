//! In-memory publisher.

use std::cell::RefCell;

use crate::{PublishError, Publisher};

/// Publisher that records shared sources and hands out sequential tokens.
///
/// Tokens are `token-1`, `token-2`, ... in call order. A failing publisher
/// returns [`PublishError::Http`] for every call, still recording the source.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    shared: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingPublisher {
    /// Create a publisher that succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a publisher whose every call fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            shared: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    /// Sources shared so far, in call order.
    #[must_use]
    pub fn shared(&self) -> Vec<String> {
        self.shared.borrow().clone()
    }

    /// Number of `share` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.shared.borrow().len()
    }
}

impl Publisher for RecordingPublisher {
    fn share(&self, source: &str) -> Result<String, PublishError> {
        let mut shared = self.shared.borrow_mut();
        shared.push(source.to_owned());
        if self.fail {
            return Err(PublishError::Http("connection refused".to_owned()));
        }
        Ok(format!("token-{}", shared.len()))
    }
}
