use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

struct Slot {
    lock: Arc<AsyncMutex<()>>,
    /// Holder plus waiters.
    users: usize,
}

type LockTable = Arc<Mutex<HashMap<Uuid, Slot>>>;

fn lock_table(table: &LockTable) -> MutexGuard<'_, HashMap<Uuid, Slot>> {
    table.lock().unwrap_or_else(|e| e.into_inner())
}

/// Per-post async locks. A slot is dropped once nobody holds or waits on it.
#[derive(Clone, Default)]
pub struct PostLocks {
    table: LockTable,
}

/// Counts one holder or waiter of a slot for as long as it lives, including
/// while a `lock()` future is parked and later cancelled.
struct Registration {
    post_id: Uuid,
    table: LockTable,
}

impl Drop for Registration {
    fn drop(&mut self) {
        let mut table = lock_table(&self.table);
        if let Some(slot) = table.get_mut(&self.post_id) {
            slot.users = slot.users.saturating_sub(1);
            if slot.users == 0 {
                table.remove(&self.post_id);
            }
        }
    }
}

pub struct PostGuard {
    // Field order matters: the mutex is released before the slot is unregistered.
    _guard: OwnedMutexGuard<()>,
    _registration: Registration,
}

impl PostLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, post_id: Uuid) -> PostGuard {
        let (registration, lock) = {
            let mut table = lock_table(&self.table);
            let slot = table.entry(post_id).or_insert_with(|| Slot {
                lock: Arc::new(AsyncMutex::new(())),
                users: 0,
            });
            slot.users += 1;
            (
                Registration {
                    post_id,
                    table: self.table.clone(),
                },
                slot.lock.clone(),
            )
        };

        let guard = lock.lock_owned().await;
        PostGuard {
            _guard: guard,
            _registration: registration,
        }
    }

    pub fn len(&self) -> usize {
        lock_table(&self.table).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
