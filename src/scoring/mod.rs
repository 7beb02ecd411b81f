//! Движок подсчёта очков фаркла.
//!
//! Основные функции:
//!   `score(dice) -> Points`
//!   `has_scoring_dice(dice) -> bool`
//!   `is_valid_selection(selection) -> bool`
//!
//! Все остальные модули (ход, партия, боты, API) считают очки только через него.

pub mod combos;
pub mod engine;
pub mod options;

pub use combos::{describe_combo, Combo, ScoredCombo};
pub use engine::{has_scoring_dice, is_valid_selection, score, ScoringEngine};
pub use options::ScoringOption;
