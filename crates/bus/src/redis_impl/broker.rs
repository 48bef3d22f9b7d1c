//! Redis broker implementation.
//!
//! Layout:
//!
//! - `exchanges`: set of declared exchange names
//! - `exchange:<name>:bindings:<routing key>`: set of queues bound to a key
//! - `queue:<name>`: list of JSON envelopes, pushed left and popped right
//!
//! A message popped from a queue list is considered acknowledged.

use async_trait::async_trait;
use redis::AsyncCommands;
use tokio::sync::mpsc;

use robosync_core::bus::{
    binding_key, decode_envelope, encode_envelope, queue_key, Broker, BusError, Delivery,
    QueueBinding, Result, EXCHANGES_KEY,
};
use robosync_core::events::EventMessage;

use super::error::map_redis_error;

/// Seconds a consumer blocks on `BRPOP` before checking whether it should stop.
const POLL_TIMEOUT_SECS: f64 = 1.0;

/// Buffer between the forwarding task and the consumer.
const CONSUMER_BUFFER: usize = 64;

/// Redis broker using a connection manager for declarations and publishing.
///
/// Every consumed queue gets its own connection because `BRPOP` blocks it.
pub struct RedisBroker {
    client: redis::Client,
    conn: redis::aio::ConnectionManager,
}

impl RedisBroker {
    /// Creates a new Redis broker connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `BusError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client.clone())
            .await
            .map_err(map_redis_error)?;
        Ok(Self { client, conn })
    }

    async fn ensure_exchange(&self, exchange: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let declared: bool = conn
            .sismember(EXCHANGES_KEY, exchange)
            .await
            .map_err(map_redis_error)?;
        if !declared {
            return Err(BusError::ExchangeNotFound(exchange.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Broker for RedisBroker {
    async fn declare_exchange(&self, exchange: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.sadd::<_, _, ()>(EXCHANGES_KEY, exchange)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }

    async fn declare_queue(&self, exchange: &str, binding: &QueueBinding) -> Result<()> {
        self.ensure_exchange(exchange).await?;

        let mut conn = self.conn.clone();
        conn.sadd::<_, _, ()>(binding_key(exchange, binding.routing_key), &binding.queue)
            .await
            .map_err(map_redis_error)?;

        tracing::debug!(
            exchange,
            queue = %binding.queue,
            routing_key = %binding.routing_key,
            "Queue declared"
        );
        Ok(())
    }

    async fn publish(&self, exchange: &str, message: &EventMessage) -> Result<()> {
        self.ensure_exchange(exchange).await?;

        let mut conn = self.conn.clone();
        let queues: Vec<String> = conn
            .smembers(binding_key(exchange, message.routing_key))
            .await
            .map_err(map_redis_error)?;

        if queues.is_empty() {
            tracing::debug!(
                exchange,
                routing_key = %message.routing_key,
                "No queue bound, message dropped"
            );
            return Ok(());
        }

        let payload = encode_envelope(message)?;
        for queue in &queues {
            conn.lpush::<_, _, ()>(queue_key(queue), payload.as_slice())
                .await
                .map_err(map_redis_error)?;
        }
        Ok(())
    }

    async fn consume(&self, queue: &str) -> Result<mpsc::Receiver<Delivery>> {
        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(map_redis_error)?;

        let (tx, rx) = mpsc::channel(CONSUMER_BUFFER);
        let queue = queue.to_string();

        tokio::spawn(async move {
            if let Err(e) = run_forward_loop(conn, &queue, tx).await {
                tracing::error!(queue = %queue, error = %e, "Redis consumer stopped");
            }
        });

        Ok(rx)
    }
}

/// Pops envelopes off a queue list and forwards them until the receiver is
/// dropped or the connection fails.
async fn run_forward_loop(
    mut conn: redis::aio::MultiplexedConnection,
    queue: &str,
    tx: mpsc::Sender<Delivery>,
) -> Result<()> {
    let key = queue_key(queue);

    while !tx.is_closed() {
        let popped: Option<(String, Vec<u8>)> = conn
            .brpop(&key, POLL_TIMEOUT_SECS)
            .await
            .map_err(map_redis_error)?;

        let Some((_, payload)) = popped else {
            continue;
        };

        if !forward(&mut conn, &key, payload, &tx).await? {
            break;
        }
    }

    tracing::info!(queue, "Redis consumer finished");
    Ok(())
}

/// Hands one popped envelope to the consumer.
///
/// Returns `false` once the receiver is gone. The envelope is then pushed
/// back to the consuming end of the list so the next consumer gets it first.
async fn forward(
    conn: &mut redis::aio::MultiplexedConnection,
    key: &str,
    payload: Vec<u8>,
    tx: &mpsc::Sender<Delivery>,
) -> Result<bool> {
    let delivery = match decode_envelope(&payload) {
        Ok(delivery) => delivery,
        Err(e) => {
            tracing::warn!(key, error = %e, "Dropping malformed envelope");
            return Ok(true);
        }
    };

    if tx.send(delivery).await.is_err() {
        conn.rpush::<_, _, ()>(key, payload.as_slice())
            .await
            .map_err(map_redis_error)?;
        tracing::debug!(key, "Consumer gone, envelope requeued");
        return Ok(false);
    }
    Ok(true)
}
