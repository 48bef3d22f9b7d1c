//! Application state with feature-selected backends.
//!
//! The storage backend (`inmemory` | `sqlite`) and the cache + event bus
//! backend (`memory` | `redis`) are chosen independently at compile time.
//! Each axis has its own factory module below.

use std::sync::Arc;

use robosync_core::bus::Topology;
use robosync_core::cache::Cache;
use robosync_core::events::EventPublisher;
use robosync_core::storage::RobotRepository;
use robosync_notifier::FanOut;

use crate::config::Config;
use crate::service::RobotService;

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub robots: Arc<RobotService>,
    /// In-process notification workers, present with the `memory` bus.
    fanout: Option<Arc<FanOut>>,
}

/// Cache and publisher of one bus backend, plus its local fan-out if any.
struct Messaging {
    cache: Arc<dyn Cache>,
    publisher: Arc<dyn EventPublisher>,
    fanout: Option<FanOut>,
}

impl AppState {
    /// Creates the state for the compiled-in backends.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repository = storage_backend::open(config).await?;
        let topology = Topology::robots(config.exchange_name.clone());
        let messaging = messaging_backend::connect(config, &topology).await?;

        let service = RobotService::new(
            repository,
            messaging.cache,
            messaging.publisher,
            config.cache_ttl(),
        );

        Ok(Self::build(service, messaging.fanout))
    }

    fn build(service: RobotService, fanout: Option<FanOut>) -> Self {
        Self {
            robots: Arc::new(service),
            fanout: fanout.map(Arc::new),
        }
    }

    /// Stops the in-process notification workers, if any.
    pub fn stop_notifications(&self) {
        if let Some(fanout) = &self.fanout {
            fanout.abort();
            tracing::info!("Notification workers stopped");
        }
    }
}

// ============================================================================
// Storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod storage_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    pub async fn open(_config: &Config) -> Result<Arc<dyn RobotRepository>, anyhow::Error> {
        tracing::info!("Using in-memory storage");
        Ok(Arc::new(InMemoryRepository::new()))
    }
}

#[cfg(feature = "sqlite")]
mod storage_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    pub async fn open(config: &Config) -> Result<Arc<dyn RobotRepository>, anyhow::Error> {
        let repository = SqliteRepository::new(&config.sqlite_path).await?;
        tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
        Ok(Arc::new(repository))
    }
}

// ============================================================================
// Cache + event bus backends
// ============================================================================

#[cfg(feature = "memory")]
mod messaging_backend {
    use super::*;
    use robosync_bus::{BusPublisher, MemoryBroker};
    use robosync_notifier::TracingSink;

    use crate::cache::MemoryCache;

    /// In-process cache and broker. The fan-out runs in this process since
    /// nothing else can reach the broker.
    pub(super) async fn connect(
        config: &Config,
        topology: &Topology,
    ) -> Result<Messaging, anyhow::Error> {
        let cache = Arc::new(MemoryCache::new(config.cache_max_entries));
        let broker = Arc::new(MemoryBroker::new(config.queue_capacity));

        let fanout = FanOut::start(broker.as_ref(), topology, Arc::new(TracingSink)).await?;
        let publisher = BusPublisher::connect(broker, topology.exchange.clone()).await?;

        Ok(Messaging {
            cache,
            publisher: Arc::new(publisher),
            fanout: Some(fanout),
        })
    }
}

#[cfg(feature = "redis")]
mod messaging_backend {
    use super::*;
    use robosync_bus::{BusPublisher, RedisBroker};
    use robosync_core::bus::declare_topology;

    use crate::cache::RedisCache;

    /// Redis cache and broker. Queues are declared here so events published
    /// before `robosync-notifier` starts wait for it.
    pub(super) async fn connect(
        config: &Config,
        topology: &Topology,
    ) -> Result<Messaging, anyhow::Error> {
        let cache = Arc::new(RedisCache::new(&config.redis_url).await?);
        let broker = Arc::new(RedisBroker::new(&config.redis_url).await?);

        declare_topology(broker.as_ref(), topology).await?;
        let publisher = BusPublisher::connect(broker, topology.exchange.clone()).await?;

        Ok(Messaging {
            cache,
            publisher: Arc::new(publisher),
            fanout: None,
        })
    }
}

// ============================================================================
// Test support
// ============================================================================
