use thiserror::Error;

use crate::domain::config::ConfigError;
use crate::domain::points::Points;
use crate::engine::EngineError;

/// Ошибки уровня партии (над движком одного хода).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Для входа в игру нужно набрать за ход не меньше {required} (сейчас {banked})")]
    InsufficientFirstEntry { banked: Points, required: Points },

    #[error("Ход не начат")]
    NoActiveTurn,

    #[error("Ход уже идёт")]
    TurnInProgress,

    #[error("Итог не совпадает с ходом партии: {expected} (перебор: {busted})")]
    TurnResultMismatch { expected: Points, busted: bool },

    #[error("Партия завершена")]
    GameOver,

    #[error("Некорректный список игроков: {0}")]
    InvalidPlayers(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
