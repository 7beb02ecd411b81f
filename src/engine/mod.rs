//! Движок одного хода: бросок, откладывание костей, hot dice, перебор, конец хода.
//!
//! Высокоуровневый объект: `TurnStateMachine`
//! Основные операции:
//!   - `roll` – бросить оставшиеся кости (перебор определяется здесь);
//!   - `bank` – отложить выбранные кости и добавить очки к ходу;
//!   - `end_turn` – закрыть ход и отдать результат партии.

pub mod errors;
pub mod selection;
pub mod turn;

pub use errors::EngineError;
pub use selection::{select_dice, validate_selection};
pub use turn::{BankReceipt, RollOutcome, TurnPhase, TurnResult, TurnStateMachine};

use crate::domain::dice::{Die, Roll};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand` и скриптованные кости).
pub trait RandomSource {
    /// Одна честная кость, 1..=6.
    fn roll_die(&mut self) -> Die;

    /// Бросить `count` костей.
    fn roll_dice(&mut self, count: usize) -> Roll {
        (0..count).map(|_| self.roll_die()).collect()
    }
}
