use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async mutex per guild.
///
/// serenity dispatches gateway events concurrently. Holding a guild's lock for the
/// whole run of a command makes precondition checks and the handler that follows them
/// atomic with respect to other commands in the same guild, while commands in
/// different guilds still run in parallel.
#[derive(Default)]
pub struct GuildLocks {
    locks: Mutex<HashMap<u64, Arc<AsyncMutex<()>>>>,
}

impl GuildLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to a guild.
    ///
    /// The returned guard releases the guild when dropped.
    pub async fn acquire(&self, guild_id: u64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.entry(guild_id).or_default().clone()
        };

        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn serializes_same_guild() {
        let locks = GuildLocks::new();

        let guard = locks.acquire(1).await;
        let second = tokio::time::timeout(Duration::from_millis(50), locks.acquire(1)).await;

        assert!(second.is_err());

        drop(guard);
        let third = tokio::time::timeout(Duration::from_millis(50), locks.acquire(1)).await;
        assert!(third.is_ok());
    }

    #[tokio::test]
    async fn does_not_block_other_guilds() {
        let locks = GuildLocks::new();

        let _guard = locks.acquire(1).await;
        let other = tokio::time::timeout(Duration::from_millis(50), locks.acquire(2)).await;

        assert!(other.is_ok());
    }
}
