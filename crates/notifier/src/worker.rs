//! A single queue worker.

use std::sync::Arc;

use tokio::sync::mpsc;

use robosync_core::bus::{Delivery, QueueBinding};
use robosync_core::notify::{decode_delivery, render_notification};

use crate::sink::NotificationSink;

/// Counters reported by a worker once its queue closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub delivered: usize,
    pub skipped: usize,
}

/// Consumes `deliveries` until the channel closes.
///
/// Messages that cannot be decoded are logged and skipped; the worker keeps
/// going.
pub async fn run_worker(
    binding: QueueBinding,
    mut deliveries: mpsc::Receiver<Delivery>,
    sink: Arc<dyn NotificationSink>,
) -> WorkerStats {
    let mut stats = WorkerStats::default();
    tracing::debug!(queue = %binding.queue, "Worker started");

    while let Some(delivery) = deliveries.recv().await {
        match decode_delivery(&delivery) {
            Ok(notification) => {
                sink.emit(&binding, &render_notification(&binding, &notification));
                stats.delivered += 1;
            }
            Err(e) => {
                tracing::warn!(
                    queue = %binding.queue,
                    routing_key = %delivery.routing_key,
                    content_type = delivery.content_type.as_deref().unwrap_or("-"),
                    error = %e,
                    "Skipping undecodable message"
                );
                stats.skipped += 1;
            }
        }
    }

    tracing::info!(
        queue = %binding.queue,
        delivered = stats.delivered,
        skipped = stats.skipped,
        "Worker stopped"
    );
    stats
}
