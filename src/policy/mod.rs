//! Боты-соперники: простые эвристики поверх того же движка подсчёта.
//!
//! Бот ходит через те же операции `GameSession`, что и человек,
//! никаких особых правил валидации у него нет.

pub mod base;
pub mod driver;
pub mod heuristic;

pub use base::{OpponentPolicy, TurnContext};
pub use driver::play_policy_turn;
pub use heuristic::{PolicyProfile, SelectionStyle, ThresholdPolicy};
