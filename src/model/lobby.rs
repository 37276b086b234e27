//! In-memory lobby state.
//!
//! A lobby lives for 24 hours after it is hosted and each queue entry lives for 2 hours
//! after its latest join. Both are checked lazily whenever the lobby is accessed, so an
//! expired lobby stays in memory, invisible, until the next command for its guild.

use chrono::{DateTime, Duration, Utc};

/// How long a lobby stays open after being hosted, in hours.
pub const LOBBY_LIFETIME_HOURS: i64 = 24;

/// How long a queue entry stays valid after a join or re-join, in hours.
pub const QUEUE_JOIN_LIFETIME_HOURS: i64 = 2;

/// A queued member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueJoin {
    pub member_id: u64,
    pub end_time: DateTime<Utc>,
}

/// The active lobby of one guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyState {
    pub guild_id: u64,
    /// Snapshot of the guild's queue size when the lobby was hosted.
    pub queue_size: u32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Queued members in join order.
    pub queue: Vec<QueueJoin>,
}

/// Result of a successful join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Member was already queued; their entry was refreshed.
    AlreadyQueued,
    /// Member was appended to the queue.
    Joined,
    /// Member was appended and filled the lobby, which has been closed.
    ///
    /// Contains every queued member in join order.
    Popped { members: Vec<u64> },
}

impl LobbyState {
    pub fn new(guild_id: u64, queue_size: u32, now: DateTime<Utc>) -> Self {
        Self {
            guild_id,
            queue_size,
            start_time: now,
            end_time: now + Duration::hours(LOBBY_LIFETIME_HOURS),
            queue: Vec::new(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.end_time
    }

    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.queue_size as usize
    }

    /// Drops expired queue entries.
    ///
    /// # Returns
    /// - `true` - The lobby itself has expired and must be removed; the queue is untouched
    /// - `false` - The lobby is still open; only live entries remain in the queue
    pub fn clean_up(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_expired(now) {
            return true;
        }
        self.queue.retain(|join| now < join.end_time);
        false
    }

    /// Adds a member to the queue or refreshes their existing entry.
    ///
    /// Does not close a full lobby; the registry removes it when `is_full` holds.
    pub fn join(&mut self, member_id: u64, now: DateTime<Utc>) -> JoinOutcome {
        let end_time = now + Duration::hours(QUEUE_JOIN_LIFETIME_HOURS);

        if let Some(existing) = self.queue.iter_mut().find(|j| j.member_id == member_id) {
            existing.end_time = end_time;
            return JoinOutcome::AlreadyQueued;
        }

        self.queue.push(QueueJoin {
            member_id,
            end_time,
        });
        JoinOutcome::Joined
    }

    pub fn leave(&mut self, member_id: u64) {
        self.queue.retain(|join| join.member_id != member_id);
    }

    pub fn member_ids(&self) -> Vec<u64> {
        self.queue.iter().map(|join| join.member_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn new_lobby_ends_after_a_day() {
        let lobby = LobbyState::new(1, 8, start());

        assert_eq!(lobby.end_time - lobby.start_time, Duration::hours(24));
        assert!(lobby.queue.is_empty());
    }

    #[test]
    fn lobby_expires_strictly_after_end_time() {
        let lobby = LobbyState::new(1, 8, start());

        assert!(!lobby.is_expired(lobby.end_time));
        assert!(lobby.is_expired(lobby.end_time + Duration::seconds(1)));
    }

    #[test]
    fn rejoin_refreshes_without_duplicating() {
        let mut lobby = LobbyState::new(1, 8, start());

        assert_eq!(lobby.join(7, start()), JoinOutcome::Joined);
        let later = start() + Duration::minutes(90);
        assert_eq!(lobby.join(7, later), JoinOutcome::AlreadyQueued);

        assert_eq!(lobby.queue.len(), 1);
        assert_eq!(lobby.queue[0].end_time, later + Duration::hours(2));
    }

    #[test]
    fn clean_up_drops_expired_entries_but_keeps_lobby() {
        let mut lobby = LobbyState::new(1, 8, start());
        lobby.join(7, start());
        lobby.join(8, start() + Duration::hours(1));

        let expired = lobby.clean_up(start() + Duration::hours(2));

        assert!(!expired);
        assert_eq!(lobby.member_ids(), vec![8]);

        let expired = lobby.clean_up(start() + Duration::hours(3));

        assert!(!expired);
        assert!(lobby.queue.is_empty());
    }

    #[test]
    fn clean_up_reports_expired_lobby() {
        let mut lobby = LobbyState::new(1, 8, start());

        assert!(lobby.clean_up(start() + Duration::hours(25)));
    }

    #[test]
    fn leave_removes_only_that_member() {
        let mut lobby = LobbyState::new(1, 8, start());
        lobby.join(7, start());
        lobby.join(8, start());

        lobby.leave(7);
        lobby.leave(99);

        assert_eq!(lobby.member_ids(), vec![8]);
    }
}
