//! Access token rotation
//!
//! Tokens are taken from the front of a queue for each request and put back
//! at the tail when pagination continues, spreading requests round-robin over
//! the pool so that no single token hits its rate limit first.

use crate::error::{Error, Result};
use crate::types::Credential;
use std::collections::VecDeque;

/// FIFO queue of access tokens, scoped to a single pagination run
#[derive(Debug, Clone, Default)]
pub struct CredentialRotator {
    queue: VecDeque<Credential>,
}

impl CredentialRotator {
    /// Seed the queue, keeping order and duplicates
    pub fn new<I, S>(credentials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Credential>,
    {
        Self {
            queue: credentials.into_iter().map(Into::into).collect(),
        }
    }

    /// Take the next token from the front
    pub fn pop(&mut self) -> Result<Credential> {
        self.queue.pop_front().ok_or(Error::CredentialsExhausted)
    }

    /// Return a token to the back of the queue
    pub fn push_back(&mut self, credential: Credential) {
        self.queue.push_back(credential);
    }

    /// Number of queued tokens
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
