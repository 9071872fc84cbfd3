use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::lookup::Lookup;

/// Persistence gateway keyed by integer id.
///
/// `save` is an upsert: a record without an id (or with an id the store
/// does not know) is inserted and receives a fresh id; otherwise the row is
/// updated in place. The store stamps `created` on insert and
/// `last_updated` on every save.
#[async_trait]
pub trait RecordRepository<E: Send + 'static>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<E>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Lookup<E>, ServiceError>;
    async fn save(&self, entity: E) -> Result<E, ServiceError>;
    async fn delete(&self, entity: E) -> Result<(), ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
}

/// In-memory gateway for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};

    use models::record::{now, Record};
    use tokio::sync::RwLock;

    pub struct InMemoryRepository<E> {
        rows: RwLock<BTreeMap<i32, E>>,
        next_id: AtomicI32,
        writes: AtomicUsize,
        offline: AtomicBool,
    }

    impl<E: Record> Default for InMemoryRepository<E> {
        fn default() -> Self {
            Self {
                rows: RwLock::new(BTreeMap::new()),
                next_id: AtomicI32::new(1),
                writes: AtomicUsize::new(0),
                offline: AtomicBool::new(false),
            }
        }
    }

    impl<E: Record> InMemoryRepository<E> {
        pub fn new() -> Self { Self::default() }

        /// Number of saves and deletes performed so far.
        pub fn writes(&self) -> usize { self.writes.load(Ordering::SeqCst) }

        /// While offline every call fails like an unreachable database.
        pub fn set_offline(&self, offline: bool) { self.offline.store(offline, Ordering::SeqCst); }

        pub async fn len(&self) -> usize { self.rows.read().await.len() }

        pub async fn is_empty(&self) -> bool { self.rows.read().await.is_empty() }

        fn ensure_online(&self) -> Result<(), ServiceError> {
            if self.offline.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("store unavailable".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl<E: Record> RecordRepository<E> for InMemoryRepository<E> {
        async fn find_all(&self) -> Result<Vec<E>, ServiceError> {
            self.ensure_online()?;
            Ok(self.rows.read().await.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Lookup<E>, ServiceError> {
            self.ensure_online()?;
            Ok(self.rows.read().await.get(&id).cloned().into())
        }

        async fn save(&self, mut entity: E) -> Result<E, ServiceError> {
            self.ensure_online()?;
            let now = now();
            let mut rows = self.rows.write().await;
            let current = entity.id().and_then(|id| rows.get(&id).map(|row| (id, row.created())));
            let (id, created) = match current {
                Some((id, created)) => (id, created.unwrap_or(now)),
                None => (self.next_id.fetch_add(1, Ordering::SeqCst), now),
            };
            entity.stamp(id, created, now);
            rows.insert(id, entity.clone());
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(entity)
        }

        async fn delete(&self, entity: E) -> Result<(), ServiceError> {
            self.ensure_online()?;
            let id = entity.id().ok_or_else(|| ServiceError::Validation("cannot delete an unsaved record".into()))?;
            self.rows.write().await.remove(&id);
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
            self.ensure_online()?;
            Ok(self.rows.read().await.contains_key(&id))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use models::employee::EmployeeData;

        fn employee(first: &str) -> EmployeeData {
            EmployeeData { first_name: first.into(), ..Default::default() }
        }

        #[tokio::test]
        async fn insert_assigns_sequential_ids() -> Result<(), ServiceError> {
            let repo = InMemoryRepository::<EmployeeData>::new();
            let a = repo.save(employee("a")).await?;
            let b = repo.save(employee("b")).await?;
            assert_eq!(a.id, Some(1));
            assert_eq!(b.id, Some(2));
            assert_eq!(a.created, a.last_updated);
            assert_eq!(repo.writes(), 2);
            Ok(())
        }

        #[tokio::test]
        async fn update_keeps_created_and_refreshes_last_updated() -> Result<(), ServiceError> {
            let repo = InMemoryRepository::<EmployeeData>::new();
            let first = repo.save(employee("a")).await?;
            let mut again = first.clone();
            again.created = None;
            again.first_name = "b".into();
            let second = repo.save(again).await?;
            assert_eq!(second.id, first.id);
            assert_eq!(second.created, first.created);
            assert!(second.last_updated >= first.last_updated);
            assert_eq!(repo.len().await, 1);
            Ok(())
        }

        #[tokio::test]
        async fn unknown_id_is_inserted_under_fresh_id() -> Result<(), ServiceError> {
            let repo = InMemoryRepository::<EmployeeData>::new();
            let saved = repo.save(EmployeeData { id: Some(42), ..employee("x") }).await?;
            assert_eq!(saved.id, Some(1));
            assert!(!repo.exists_by_id(42).await?);
            Ok(())
        }

        #[tokio::test]
        async fn offline_store_fails_every_call() {
            let repo = InMemoryRepository::<EmployeeData>::new();
            repo.set_offline(true);
            assert!(matches!(repo.find_all().await, Err(ServiceError::Db(_))));
            assert!(matches!(repo.save(employee("a")).await, Err(ServiceError::Db(_))));
            assert_eq!(repo.writes(), 0);
        }

        #[tokio::test]
        async fn find_all_is_ordered_by_id() -> Result<(), ServiceError> {
            let repo = InMemoryRepository::<EmployeeData>::new();
            for name in ["c", "a", "b"] {
                repo.save(employee(name)).await?;
            }
            let ids: Vec<_> = repo.find_all().await?.into_iter().filter_map(|e| e.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
            Ok(())
        }
    }
}
