// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Notifier implementations.

use super::Notifier;

/// A message delivered to a notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Success message
    Success(String),
    /// Error message
    Error(String),
}

impl Notification {
    /// Message text
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(msg) | Notification::Error(msg) => msg,
        }
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}

/// Writes notifications to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&mut self, message: &str) {
        tracing::info!(target: "songqr::notify", "{}", message);
    }

    fn error(&mut self, message: &str) {
        tracing::warn!(target: "songqr::notify", "{}", message);
    }
}

/// Keeps every notification in order
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Vec<Notification>,
}

impl RecordingNotifier {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Most recent notification
    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Number of error notifications
    pub fn error_count(&self) -> usize {
        self.notifications.iter().filter(|n| n.is_error()).count()
    }

    /// Forget everything recorded
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.notifications.push(Notification::Success(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.notifications.push(Notification::Error(message.to_string()));
    }
}
