//! Доменная модель фаркла: кости, очки, игроки, конфиг партии.

pub mod config;
pub mod dice;
pub mod player;
pub mod points;

// Базовый идентификатор игрока (выдаёт infra::IdGenerator или сам фронт).
pub type PlayerId = u64;

/// Сколько костей у игрока в начале каждого хода (и после hot dice).
pub const DICE_PER_TURN: u8 = 6;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Die и т.п.
pub use config::*;
pub use dice::*;
pub use player::*;
pub use points::*;
