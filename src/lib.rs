//! Движок игры в кости "Фаркл".
//!
//! Слои (от листьев к корню):
//! - `scoring` – подсчёт очков и легальность выбора костей;
//! - `engine` – машина состояний одного хода;
//! - `session` – партия: очередь, порог входа, финальный круг;
//! - `policy` – боты-соперники поверх тех же операций;
//! - `api` – команды, запросы и DTO для фронта.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod policy;
pub mod scoring;
pub mod session;

pub use domain::{Die, GameConfig, PlayerId, PlayerProfile, Points};
pub use engine::{RandomSource, TurnStateMachine};
pub use scoring::{has_scoring_dice, is_valid_selection, score, ScoringEngine};
pub use session::{GameSession, SessionError, SessionStatus};
