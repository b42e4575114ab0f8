use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{PlayerId, SessionId, TransactionId};

/// Генерация ID на основе монотонных счётчиков.
///
/// Каждый владелец (реестр, менеджер сессий) держит свой генератор
/// и пользуется только нужными ему счётчиками.
#[derive(Debug)]
pub struct IdGenerator {
    player_counter: AtomicU64,
    transaction_counter: AtomicU64,
    session_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            player_counter: AtomicU64::new(1),
            transaction_counter: AtomicU64::new(1),
            session_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_transaction_id(&self) -> TransactionId {
        self.transaction_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_session_id(&self) -> SessionId {
        self.session_counter.fetch_add(1, Ordering::Relaxed)
    }
}
