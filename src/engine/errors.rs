use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки движка хода.
///
/// Все восстановимые: ход после ошибки остаётся в прежнем состоянии.
/// Перебор (bust) ошибкой НЕ является – это штатный исход броска.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    #[error("Не выбрано ни одной кости")]
    EmptySelection,

    #[error("Выбранные кости не приносят очков")]
    ZeroScoreSelection,

    #[error("Кости 2, 3, 4 и 6 можно откладывать только по три и больше")]
    IllegalSelection,

    #[error("Кости с индексом {0} нет в текущем броске")]
    IndexOutOfRange(usize),

    #[error("Кость с индексом {0} выбрана дважды")]
    DuplicateIndex(usize),

    #[error("Нет брошенных костей, которые можно отложить")]
    NothingToBank,

    #[error("Сейчас бросать нельзя: сначала отложите хотя бы одну кость")]
    CannotRoll,

    #[error("Ход уже завершён")]
    TurnOver,
}
