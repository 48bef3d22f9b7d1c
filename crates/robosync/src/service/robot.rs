//! Cache-aside robot service.
//!
//! Every operation follows the same shape: the store decides success, the
//! cache is populated or invalidated afterwards, and an event describes what
//! happened. Only store errors reach the caller; cache and publish failures
//! are logged and swallowed.

use std::sync::Arc;
use std::time::Duration;

use robosync_core::cache::{deserialize_robot, robot_key, serialize_robot, Cache};
use robosync_core::events::{
    coordinates_changed_text, name_changed_text, robot_deleted_text, type_changed_text,
    EventPublisher, RoutingKey,
};
use robosync_core::robot::{Coordinates, NewRobot, Robot, RobotId};
use robosync_core::storage::{RepositoryError, Result, RobotRepository};

/// Robot operations backed by a repository, a cache and an event publisher.
///
/// Cache entries are never refreshed by a mutation, only evicted, so a miss is
/// the only reliable sign that the next read reflects the store.
pub struct RobotService {
    repository: Arc<dyn RobotRepository>,
    cache: Arc<dyn Cache>,
    publisher: Arc<dyn EventPublisher>,
    ttl: Duration,
}

impl RobotService {
    /// Creates a new robot service.
    ///
    /// # Arguments
    ///
    /// * `repository` - Durable storage for robots
    /// * `cache` - Read-through cache in front of the repository
    /// * `publisher` - Destination for change events
    /// * `ttl` - Time-to-live for cached robots
    pub fn new(
        repository: Arc<dyn RobotRepository>,
        cache: Arc<dyn Cache>,
        publisher: Arc<dyn EventPublisher>,
        ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            publisher,
            ttl,
        }
    }

    /// Stores a new robot, caches it and announces it. Returns the new id.
    ///
    /// When the store rejects the robot nothing is cached or published.
    pub async fn create(&self, new_robot: &NewRobot) -> Result<RobotId> {
        let robot = self.repository.create_robot(new_robot).await?;

        self.cache_robot(&robot).await;
        self.emit_snapshot(&robot, RoutingKey::Add).await;

        tracing::info!(robot_id = robot.id, name = %robot.name, "Robot created");
        Ok(robot.id)
    }

    /// Reads a robot, cache first.
    ///
    /// A cache error or an undecodable cached value counts as a miss. A
    /// successful read is announced; a failed one is not.
    pub async fn get(&self, id: RobotId) -> Result<Robot> {
        let key = robot_key(id);

        match self.cache.get(&key).await {
            Ok(Some(bytes)) => match deserialize_robot(&bytes) {
                Ok(robot) => {
                    tracing::trace!(robot_id = id, "Cache hit for robot");
                    self.emit_snapshot(&robot, RoutingKey::Get).await;
                    return Ok(robot);
                }
                Err(err) => {
                    tracing::warn!(robot_id = id, error = %err, "Cached robot is unreadable");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(robot_id = id, error = %err, "Cache lookup failed");
            }
        }

        tracing::trace!(robot_id = id, "Cache miss for robot");
        let robot = self
            .repository
            .get_robot(id)
            .await?
            .ok_or_else(|| RepositoryError::robot_not_found(id))?;

        self.cache_robot(&robot).await;
        self.emit_snapshot(&robot, RoutingKey::Get).await;

        Ok(robot)
    }

    pub async fn update_coordinates(&self, id: RobotId, coordinates: Coordinates) -> Result<()> {
        self.repository.update_coordinates(id, coordinates).await?;

        self.invalidate(id).await;
        self.emit_text(
            &coordinates_changed_text(id, coordinates),
            RoutingKey::UpdateCoordinates,
        )
        .await;

        tracing::debug!(robot_id = id, ?coordinates, "Robot moved");
        Ok(())
    }

    pub async fn update_name(&self, id: RobotId, name: &str) -> Result<()> {
        self.repository.update_name(id, name).await?;

        self.invalidate(id).await;
        self.emit_text(&name_changed_text(id, name), RoutingKey::UpdateName)
            .await;

        tracing::debug!(robot_id = id, name, "Robot renamed");
        Ok(())
    }

    pub async fn update_type(&self, id: RobotId, kind: &str) -> Result<()> {
        self.repository.update_type(id, kind).await?;

        self.invalidate(id).await;
        self.emit_text(&type_changed_text(id, kind), RoutingKey::UpdateType)
            .await;

        tracing::debug!(robot_id = id, kind, "Robot type changed");
        Ok(())
    }

    /// Deletes a robot.
    ///
    /// The delete event and the cache eviction happen before the store is
    /// touched, so they occur even when the robot does not exist. The
    /// store's answer is what the caller gets.
    pub async fn delete(&self, id: RobotId) -> Result<()> {
        self.emit_text(&robot_deleted_text(id), RoutingKey::Delete)
            .await;
        self.invalidate(id).await;

        self.repository.delete_robot(id).await?;

        tracing::info!(robot_id = id, "Robot deleted");
        Ok(())
    }

    async fn cache_robot(&self, robot: &Robot) {
        let bytes = match serialize_robot(robot) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(robot_id = robot.id, error = %err, "Failed to serialize robot");
                return;
            }
        };

        if let Err(err) = self
            .cache
            .set(&robot_key(robot.id), &bytes, Some(self.ttl))
            .await
        {
            tracing::warn!(robot_id = robot.id, error = %err, "Failed to cache robot");
        }
    }

    async fn invalidate(&self, id: RobotId) {
        if let Err(err) = self.cache.delete(&robot_key(id)).await {
            tracing::warn!(robot_id = id, error = %err, "Failed to invalidate robot cache");
        }
    }

    async fn emit_snapshot(&self, robot: &Robot, routing_key: RoutingKey) {
        if let Err(err) = self.publisher.publish_snapshot(robot, routing_key).await {
            tracing::warn!(
                robot_id = robot.id,
                routing_key = %routing_key,
                error = %err,
                "Failed to publish robot event"
            );
        }
    }

    async fn emit_text(&self, message: &str, routing_key: RoutingKey) {
        if let Err(err) = self.publisher.publish_text(message, routing_key).await {
            tracing::warn!(routing_key = %routing_key, error = %err, "Failed to publish robot event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Instant;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use robosync_bus::{BusPublisher, MemoryBroker};
    use robosync_core::bus::{declare_topology, Broker, BusError, Topology};
    use robosync_core::cache::{CacheError, Result as CacheResult};
    use robosync_core::events::{self, ContentType, EventMessage, PublishError};

    use crate::storage::InMemoryRepository;

    /// Ordered record of side effects across all mocks.
    type Journal = Arc<Mutex<Vec<String>>>;

    fn record(journal: &Journal, entry: impl Into<String>) {
        journal.lock().unwrap().push(entry.into());
    }

    // Repository that counts reads and can be told to fail every call
    struct MockRepository {
        inner: InMemoryRepository,
        journal: Journal,
        get_calls: AtomicUsize,
        fail: AtomicBool,
    }

    impl MockRepository {
        fn check(&self) -> Result<()> {
            if self.fail.load(Ordering::SeqCst) {
                Err(RepositoryError::ConnectionFailed("store down".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl RobotRepository for MockRepository {
        async fn create_robot(&self, robot: &NewRobot) -> Result<Robot> {
            self.check()?;
            record(&self.journal, "store:create");
            self.inner.create_robot(robot).await
        }

        async fn get_robot(&self, id: RobotId) -> Result<Option<Robot>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            self.inner.get_robot(id).await
        }

        async fn update_coordinates(&self, id: RobotId, coordinates: Coordinates) -> Result<()> {
            self.check()?;
            record(&self.journal, "store:update");
            self.inner.update_coordinates(id, coordinates).await
        }

        async fn update_name(&self, id: RobotId, name: &str) -> Result<()> {
            self.check()?;
            record(&self.journal, "store:update");
            self.inner.update_name(id, name).await
        }

        async fn update_type(&self, id: RobotId, kind: &str) -> Result<()> {
            self.check()?;
            record(&self.journal, "store:update");
            self.inner.update_type(id, kind).await
        }

        async fn delete_robot(&self, id: RobotId) -> Result<()> {
            self.check()?;
            record(&self.journal, "store:delete");
            self.inner.delete_robot(id).await
        }
    }

    // Cache with real expiry so TTL behavior can be observed
    struct MockCache {
        store: RwLock<HashMap<String, (Vec<u8>, Option<Instant>)>>,
        journal: Journal,
        set_calls: AtomicUsize,
        delete_calls: AtomicUsize,
        fail: AtomicBool,
    }

    impl MockCache {
        fn check(&self) -> CacheResult<()> {
            if self.fail.load(Ordering::SeqCst) {
                Err(CacheError::ConnectionFailed("cache down".to_string()))
            } else {
                Ok(())
            }
        }

        async fn contains(&self, key: &str) -> bool {
            self.store.read().await.contains_key(key)
        }

        async fn raw_set(&self, key: &str, value: &[u8]) {
            self.store
                .write()
                .await
                .insert(key.to_string(), (value.to_vec(), None));
        }
    }

    #[async_trait]
    impl Cache for MockCache {
        async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
            self.check()?;
            let store = self.store.read().await;
            Ok(store.get(key).and_then(|(value, expires_at)| {
                match expires_at {
                    Some(at) if Instant::now() >= *at => None,
                    _ => Some(value.clone()),
                }
            }))
        }

        async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> CacheResult<()> {
            self.set_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            record(&self.journal, "cache:set");
            let expires_at = ttl.map(|d| Instant::now() + d);
            self.store
                .write()
                .await
                .insert(key.to_string(), (value.to_vec(), expires_at));
            Ok(())
        }

        async fn delete(&self, key: &str) -> CacheResult<()> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            record(&self.journal, "cache:delete");
            self.store.write().await.remove(key);
            Ok(())
        }
    }

    // Publisher that keeps every message it was handed
    struct MockPublisher {
        messages: Mutex<Vec<EventMessage>>,
        journal: Journal,
        fail: AtomicBool,
    }

    impl MockPublisher {
        fn messages(&self) -> Vec<EventMessage> {
            self.messages.lock().unwrap().clone()
        }

        fn messages_for(&self, routing_key: RoutingKey) -> Vec<EventMessage> {
            self.messages()
                .into_iter()
                .filter(|m| m.routing_key == routing_key)
                .collect()
        }
    }

    #[async_trait]
    impl EventPublisher for MockPublisher {
        async fn publish(&self, message: EventMessage) -> events::Result<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(PublishError::Bus(BusError::ConnectionFailed(
                    "bus down".to_string(),
                )));
            }
            record(&self.journal, format!("event:{}", message.routing_key));
            self.messages.lock().unwrap().push(message);
            Ok(())
        }
    }

    struct Harness {
        repo: Arc<MockRepository>,
        cache: Arc<MockCache>,
        publisher: Arc<MockPublisher>,
        journal: Journal,
        service: RobotService,
    }

    fn harness_with_ttl(ttl: Duration) -> Harness {
        let journal: Journal = Arc::new(Mutex::new(Vec::new()));
        let repo = Arc::new(MockRepository {
            inner: InMemoryRepository::new(),
            journal: Arc::clone(&journal),
            get_calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        });
        let cache = Arc::new(MockCache {
            store: RwLock::new(HashMap::new()),
            journal: Arc::clone(&journal),
            set_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        });
        let publisher = Arc::new(MockPublisher {
            messages: Mutex::new(Vec::new()),
            journal: Arc::clone(&journal),
            fail: AtomicBool::new(false),
        });
        let service = RobotService::new(repo.clone(), cache.clone(), publisher.clone(), ttl);

        Harness {
            repo,
            cache,
            publisher,
            journal,
            service,
        }
    }

    fn harness() -> Harness {
        harness_with_ttl(Duration::from_secs(300))
    }

    fn scout() -> NewRobot {
        NewRobot::new("R1", "scout", Coordinates::new(1, 2, 3))
    }

    fn body_text(message: &EventMessage) -> String {
        String::from_utf8(message.body.clone()).unwrap()
    }

    #[tokio::test]
    async fn test_create_populates_cache_and_publishes_snapshot() {
        let h = harness();

        let id = h.service.create(&scout()).await.unwrap();

        let cached = h.cache.get(&robot_key(id)).await.unwrap().unwrap();
        let expected = Robot::from_new(id, &scout());
        assert_eq!(deserialize_robot(&cached).unwrap(), expected);

        let added = h.publisher.messages_for(RoutingKey::Add);
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].content_type, ContentType::Json);
        let published: Robot = serde_json::from_slice(&added[0].body).unwrap();
        assert_eq!(published, expected);
    }

    #[tokio::test]
    async fn test_create_store_failure_skips_cache_and_event() {
        let h = harness();
        h.repo.fail.store(true, Ordering::SeqCst);

        let result = h.service.create(&scout()).await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
        assert_eq!(h.cache.set_calls.load(Ordering::SeqCst), 0);
        assert!(h.publisher.messages().is_empty());
    }

    #[tokio::test]
    async fn test_read_after_create_is_served_from_cache() {
        let h = harness();
        let id = h.service.create(&scout()).await.unwrap();

        let robot = h.service.get(id).await.unwrap();

        assert_eq!(robot, Robot::from_new(id, &scout()));
        assert_eq!(h.repo.get_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.publisher.messages_for(RoutingKey::Get).len(), 1);
    }

    #[tokio::test]
    async fn test_read_miss_fetches_store_and_populates_cache() {
        let h = harness();
        let stored = h.repo.inner.create_robot(&scout()).await.unwrap();

        let robot = h.service.get(stored.id).await.unwrap();

        assert_eq!(robot, stored);
        assert_eq!(h.repo.get_calls.load(Ordering::SeqCst), 1);
        assert!(h.cache.contains(&robot_key(stored.id)).await);

        // Second read hits the cache
        h.service.get(stored.id).await.unwrap();
        assert_eq!(h.repo.get_calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.publisher.messages_for(RoutingKey::Get).len(), 2);
    }

    #[tokio::test]
    async fn test_read_missing_robot_is_not_found_without_event() {
        let h = harness();

        let result = h.service.get(99).await;

        assert_eq!(result, Err(RepositoryError::robot_not_found(99)));
        assert!(h.publisher.messages().is_empty());
        assert!(!h.cache.contains(&robot_key(99)).await);
    }

    #[tokio::test]
    async fn test_read_store_failure_is_surfaced_without_event() {
        let h = harness();
        h.repo.fail.store(true, Ordering::SeqCst);

        let result = h.service.get(1).await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
        assert!(h.publisher.messages().is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_cache_value_is_a_miss() {
        let h = harness();
        let stored = h.repo.inner.create_robot(&scout()).await.unwrap();
        h.cache.raw_set(&robot_key(stored.id), b"not json").await;

        let robot = h.service.get(stored.id).await.unwrap();

        assert_eq!(robot, stored);
        assert_eq!(h.repo.get_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cache_failure_falls_back_to_store() {
        let h = harness();
        let stored = h.repo.inner.create_robot(&scout()).await.unwrap();
        h.cache.fail.store(true, Ordering::SeqCst);

        let robot = h.service.get(stored.id).await.unwrap();

        assert_eq!(robot, stored);
        assert_eq!(h.repo.get_calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.publisher.messages_for(RoutingKey::Get).len(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_falls_back_to_store() {
        let h = harness_with_ttl(Duration::from_millis(50));
        let id = h.service.create(&scout()).await.unwrap();

        h.service.get(id).await.unwrap();
        assert_eq!(h.repo.get_calls.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;

        h.service.get(id).await.unwrap();
        assert_eq!(h.repo.get_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_mutation_then_read_reaches_store() {
        let h = harness();
        let id = h.service.create(&scout()).await.unwrap();

        h.service.update_name(id, "Renamed").await.unwrap();
        let robot = h.service.get(id).await.unwrap();

        assert_eq!(robot.name, "Renamed");
        assert_eq!(h.repo.get_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_update_coordinates_invalidates_and_describes_move() {
        let h = harness();
        for _ in 0..6 {
            h.repo.inner.create_robot(&scout()).await.unwrap();
        }
        let id = h.service.create(&scout()).await.unwrap();
        assert_eq!(id, 7);

        h.service
            .update_coordinates(id, Coordinates::new(9, 9, 9))
            .await
            .unwrap();

        let stored = h.repo.inner.get_robot(id).await.unwrap().unwrap();
        assert_eq!(stored.coordinates, Coordinates::new(9, 9, 9));
        assert!(!h.cache.contains("robots:7").await);

        let moved = h.publisher.messages_for(RoutingKey::UpdateCoordinates);
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].content_type, ContentType::PlainText);
        let text = body_text(&moved[0]);
        assert!(text.contains('7'));
        assert_eq!(text.matches('9').count(), 3);
    }

    #[tokio::test]
    async fn test_update_type_publishes_text() {
        let h = harness();
        let id = h.service.create(&scout()).await.unwrap();

        h.service.update_type(id, "digger").await.unwrap();

        let changed = h.publisher.messages_for(RoutingKey::UpdateType);
        assert_eq!(changed.len(), 1);
        assert_eq!(
            body_text(&changed[0]),
            format!("Type of robot with ID: {id} was changed to digger")
        );
        assert!(!h.cache.contains(&robot_key(id)).await);
    }

    #[tokio::test]
    async fn test_failed_update_skips_cache_and_event() {
        let h = harness();
        let id = h.service.create(&scout()).await.unwrap();
        let deletes_before = h.cache.delete_calls.load(Ordering::SeqCst);

        let result = h.service.update_name(404, "ghost").await;

        assert_eq!(result, Err(RepositoryError::robot_not_found(404)));
        assert_eq!(h.cache.delete_calls.load(Ordering::SeqCst), deletes_before);
        assert!(h.publisher.messages_for(RoutingKey::UpdateName).is_empty());
        assert!(h.cache.contains(&robot_key(id)).await);
    }

    #[tokio::test]
    async fn test_concurrent_renames_both_apply() {
        let h = harness();
        let id = h.service.create(&scout()).await.unwrap();

        let (a, b) = tokio::join!(
            h.service.update_name(id, "A"),
            h.service.update_name(id, "B")
        );

        assert!(a.is_ok());
        assert!(b.is_ok());
        let name = h.service.get(id).await.unwrap().name;
        assert!(name == "A" || name == "B");
        assert_eq!(h.cache.delete_calls.load(Ordering::SeqCst), 2);
        assert_eq!(h.publisher.messages_for(RoutingKey::UpdateName).len(), 2);
    }

    #[tokio::test]
    async fn test_delete_emits_then_invalidates_then_deletes() {
        let h = harness();
        let id = h.service.create(&scout()).await.unwrap();
        h.journal.lock().unwrap().clear();

        h.service.delete(id).await.unwrap();

        assert_eq!(
            *h.journal.lock().unwrap(),
            vec!["event:robots.Del", "cache:delete", "store:delete"]
        );
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let h = harness();
        let id = h.service.create(&scout()).await.unwrap();

        let first = h.service.delete(id).await;
        let second = h.service.delete(id).await;

        assert!(first.is_ok());
        assert_eq!(second, Err(RepositoryError::robot_not_found(id)));
        assert_eq!(h.cache.delete_calls.load(Ordering::SeqCst), 2);
        let deleted = h.publisher.messages_for(RoutingKey::Delete);
        assert_eq!(deleted.len(), 2);
        assert_eq!(
            body_text(&deleted[1]),
            format!("Robot with ID: {id} was destroyed")
        );
    }

    #[tokio::test]
    async fn test_cache_and_publish_failures_are_swallowed() {
        let h = harness();
        h.cache.fail.store(true, Ordering::SeqCst);
        h.publisher.fail.store(true, Ordering::SeqCst);

        let id = h.service.create(&scout()).await.unwrap();
        h.service.update_name(id, "still works").await.unwrap();
        h.service
            .update_coordinates(id, Coordinates::new(0, 0, 0))
            .await
            .unwrap();
        let robot = h.service.get(id).await.unwrap();
        h.service.delete(id).await.unwrap();

        assert_eq!(robot.name, "still works");
        assert!(h.publisher.messages().is_empty());
    }

    #[tokio::test]
    async fn test_create_reaches_add_queue_once() {
        let broker = Arc::new(MemoryBroker::new(16));
        let topology = Topology::default();
        declare_topology(broker.as_ref(), &topology).await.unwrap();
        let publisher = BusPublisher::connect(Arc::clone(&broker), &topology.exchange)
            .await
            .unwrap();

        let repo = Arc::new(InMemoryRepository::new());
        for _ in 0..6 {
            repo.create_robot(&scout()).await.unwrap();
        }
        let h = harness();
        let service = RobotService::new(
            repo,
            h.cache.clone(),
            Arc::new(publisher),
            Duration::from_secs(300),
        );

        let id = service.create(&scout()).await.unwrap();
        assert_eq!(id, 7);

        let mut add_queue = broker.consume("robot_add_queue").await.unwrap();
        let delivery = add_queue.try_recv().unwrap();
        assert!(add_queue.try_recv().is_err());

        assert_eq!(delivery.content_type.as_deref(), Some("application/json"));
        let snapshot: Robot = serde_json::from_slice(&delivery.body).unwrap();
        assert_eq!(snapshot, Robot::from_new(7, &scout()));

        let cached = h.cache.get("robots:7").await.unwrap().unwrap();
        assert_eq!(deserialize_robot(&cached).unwrap(), snapshot);
    }

    #[tokio::test]
    async fn test_update_coordinates_reaches_updatecord_queue_once() {
        let broker = Arc::new(MemoryBroker::new(16));
        let topology = Topology::default();
        declare_topology(broker.as_ref(), &topology).await.unwrap();
        let publisher = BusPublisher::connect(Arc::clone(&broker), &topology.exchange)
            .await
            .unwrap();

        let repo = Arc::new(InMemoryRepository::new());
        for _ in 0..6 {
            repo.create_robot(&scout()).await.unwrap();
        }
        let h = harness();
        let service = RobotService::new(
            Arc::clone(&repo) as Arc<dyn RobotRepository>,
            h.cache.clone(),
            Arc::new(publisher),
            Duration::from_secs(300),
        );
        let id = service.create(&scout()).await.unwrap();
        assert_eq!(id, 7);

        service
            .update_coordinates(id, Coordinates::new(9, 9, 9))
            .await
            .unwrap();

        let mut cord_queue = broker.consume("robot_updatecord_queue").await.unwrap();
        let delivery = cord_queue.try_recv().unwrap();
        assert!(cord_queue.try_recv().is_err());

        assert_eq!(delivery.routing_key, "robots.UpdateCord");
        assert_eq!(delivery.content_type.as_deref(), Some("text/plain"));
        let text = String::from_utf8(delivery.body).unwrap();
        assert!(text.contains('7'));
        assert_eq!(text.matches('9').count(), 3);

        let stored = repo.get_robot(id).await.unwrap().unwrap();
        assert_eq!(stored.coordinates, Coordinates::new(9, 9, 9));
        assert!(!h.cache.contains("robots:7").await);
    }
}
