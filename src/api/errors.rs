use serde::{Deserialize, Serialize};

use crate::domain::dice::DiceError;
use crate::domain::points::Points;
use crate::engine::EngineError;
use crate::session::SessionError;

/// Ошибки внешнего API (то, что отдаём фронту / чату).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, грань 7).
    BadRequest(String),

    /// Выбор костей нарушает правила.
    InvalidSelection(String),

    /// Не набран порог входа в игру.
    InsufficientFirstEntry { banked: Points, required: Points },

    /// Команда не может быть выполнена в текущем состоянии (нет хода, ход уже идёт и т.п.).
    InvalidCommand(String),

    /// Партия окончена.
    GameOver,

    /// Внутренняя ошибка.
    Internal(String),
}

impl ApiError {
    /// Текст для пользователя.
    pub fn reason(&self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::InvalidSelection(msg)
            | ApiError::InvalidCommand(msg)
            | ApiError::Internal(msg) => msg.clone(),
            ApiError::InsufficientFirstEntry { banked, required } => {
                SessionError::InsufficientFirstEntry {
                    banked: *banked,
                    required: *required,
                }
                .to_string()
            }
            ApiError::GameOver => SessionError::GameOver.to_string(),
        }
    }

    /// Ошибка валидации (выбор костей / порог входа), а не ошибка состояния.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidSelection(_) | ApiError::InsufficientFirstEntry { .. }
        )
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::EmptySelection
            | EngineError::ZeroScoreSelection
            | EngineError::IllegalSelection
            | EngineError::IndexOutOfRange(_)
            | EngineError::DuplicateIndex(_)
            | EngineError::NothingToBank => ApiError::InvalidSelection(err.to_string()),
            EngineError::CannotRoll | EngineError::TurnOver => {
                ApiError::InvalidCommand(err.to_string())
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InsufficientFirstEntry { banked, required } => {
                ApiError::InsufficientFirstEntry { banked, required }
            }
            SessionError::GameOver => ApiError::GameOver,
            SessionError::NoActiveTurn
            | SessionError::TurnInProgress
            | SessionError::TurnResultMismatch { .. } => {
                ApiError::InvalidCommand(err.to_string())
            }
            SessionError::InvalidPlayers(_) | SessionError::Config(_) => {
                ApiError::BadRequest(err.to_string())
            }
            SessionError::Engine(e) => ApiError::from(e),
        }
    }
}

impl From<DiceError> for ApiError {
    fn from(err: DiceError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
