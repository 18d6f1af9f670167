use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use uuid::Uuid;

/// Number of registered entities above which idle locks are pruned.
const PRUNE_THRESHOLD: usize = 1024;

/// Serializes writes per entity id.
///
/// Every lifecycle mutation holds the guard for the entity it touches
/// (an inquiry, a collaboration, a task) across its read-check-write
/// sequence, so two interleaved requests on the same id cannot both pass
/// the same status check. Different ids never contend.
#[derive(Default)]
pub struct EntityLocks {
    /// entity id -> lock shared by every writer of that entity
    locks: RwLock<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl EntityLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive write access to `id`.
    ///
    /// The returned guard releases the entity when dropped.
    pub async fn acquire(&self, id: Uuid) -> OwnedMutexGuard<()> {
        let existing = {
            let locks = self.locks.read().await;
            locks.get(&id).cloned()
        };

        let lock = match existing {
            Some(lock) => lock,
            None => {
                let mut locks = self.locks.write().await;
                if locks.len() >= PRUNE_THRESHOLD {
                    // Only the map itself holds idle locks.
                    locks.retain(|_, lock| Arc::strong_count(lock) > 1);
                }
                locks
                    .entry(id)
                    .or_insert_with(|| Arc::new(Mutex::new(())))
                    .clone()
            }
        };

        lock.lock_owned().await
    }

    /// Number of entities that currently have a registered lock.
    pub async fn tracked(&self) -> usize {
        self.locks.read().await.len()
    }
}
