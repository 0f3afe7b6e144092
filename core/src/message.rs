//! Notification sinks for human-readable operation messages.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Receives one message per completed service operation. Fire-and-forget.
pub trait MessageSink: Send + Sync {
    fn add(&self, message: String);
}

impl<S: MessageSink + ?Sized> MessageSink for Arc<S> {
    fn add(&self, message: String) {
        (**self).add(message);
    }
}

/// In-memory message list, the kind a UI renders under its main view.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Mutex<Vec<String>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MessageSink for MessageLog {
    fn add(&self, message: String) {
        self.lock().push(message);
    }
}

/// Forwards every message to `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn add(&self, message: String) {
        tracing::info!(target: "hero_core::messages", "{message}");
    }
}
