use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::PlayerId;

/// Простая генерация ID игроков на основе монотонного счётчика.
/// Удобно для локальных партий с ботами и тестов; фронт может передавать свои id.
#[derive(Debug)]
pub struct IdGenerator {
    player_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1.
    pub fn new() -> Self {
        Self {
            player_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
