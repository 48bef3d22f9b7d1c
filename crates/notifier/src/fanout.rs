//! Supervisor that runs one worker task per queue.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use robosync_core::bus::{self, declare_topology, Broker, Delivery, QueueBinding, Topology};

use crate::sink::NotificationSink;
use crate::worker::{run_worker, WorkerStats};

/// Running fan-out workers.
pub struct FanOut {
    workers: Vec<JoinHandle<WorkerStats>>,
}

impl FanOut {
    /// Declares `topology` on `broker`, claims every queue and spawns a
    /// worker for each.
    ///
    /// Workers are only spawned once every queue has been claimed. If a claim
    /// fails, the queues already claimed are handed back to the broker and
    /// nothing is left running.
    pub async fn start<B: Broker + ?Sized>(
        broker: &B,
        topology: &Topology,
        sink: Arc<dyn NotificationSink>,
    ) -> bus::Result<Self> {
        declare_topology(broker, topology).await?;

        let mut claimed = Vec::with_capacity(topology.bindings.len());
        for binding in &topology.bindings {
            match broker.consume(&binding.queue).await {
                Ok(deliveries) => claimed.push((binding, deliveries)),
                Err(e) => {
                    release_all(broker, claimed).await;
                    return Err(e);
                }
            }
        }

        let workers: Vec<_> = claimed
            .into_iter()
            .map(|(binding, deliveries)| {
                tokio::spawn(run_worker(binding.clone(), deliveries, Arc::clone(&sink)))
            })
            .collect();

        tracing::info!(
            exchange = %topology.exchange,
            workers = workers.len(),
            "Notification fan-out started"
        );
        Ok(Self { workers })
    }

    /// Stops every worker without waiting for pending messages.
    pub fn abort(&self) {
        for handle in &self.workers {
            handle.abort();
        }
    }
}

async fn release_all<B: Broker + ?Sized>(
    broker: &B,
    claimed: Vec<(&QueueBinding, mpsc::Receiver<Delivery>)>,
) {
    for (binding, deliveries) in claimed {
        if let Err(e) = broker.release(&binding.queue, deliveries).await {
            tracing::error!(queue = %binding.queue, error = %e, "Failed to release queue");
        }
    }
}
