//! Destinations for rendered notifications.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use robosync_core::bus::QueueBinding;

/// Receives the rendered line of every decoded notification.
pub trait NotificationSink: Send + Sync {
    fn emit(&self, binding: &QueueBinding, line: &str);
}

/// Writes notifications to the `tracing` subscriber at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn emit(&self, binding: &QueueBinding, line: &str) {
        tracing::info!(
            queue = %binding.queue,
            routing_key = %binding.routing_key,
            "{line}"
        );
    }
}

/// Keeps every line in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines emitted so far, in arrival order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Lines emitted so far that start with `[<queue>]`.
    pub fn lines_for(&self, queue: &str) -> Vec<String> {
        let prefix = format!("[{queue}] ");
        self.lines()
            .into_iter()
            .filter(|line| line.starts_with(&prefix))
            .collect()
    }

    /// Waits until at least `count` lines were emitted or `timeout` elapses,
    /// then returns what is there.
    pub async fn wait_for(&self, count: usize, timeout: Duration) -> Vec<String> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let lines = self.lines();
            if lines.len() >= count || tokio::time::Instant::now() >= deadline {
                return lines;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

impl NotificationSink for MemorySink {
    fn emit(&self, _binding: &QueueBinding, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}
