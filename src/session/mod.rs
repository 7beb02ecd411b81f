//! Партия: очередь игроков, общий счёт, порог входа, финальный круг.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `start_turn` – начать ход текущего игрока;
//!   - `roll` / `bank` – проксируют в активный ход и пишут события;
//!   - `end_turn` – закрыть ход (с проверкой порога входа);
//!   - `complete_turn` – применить итог хода к счёту и передать ход.

pub mod errors;
pub mod game_session;
pub mod history;

pub use errors::SessionError;
pub use game_session::{GameSession, SessionStatus, TurnCompletion};
pub use history::{GameEvent, GameEventKind, GameHistory};
