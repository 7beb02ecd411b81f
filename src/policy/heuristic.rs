use serde::{Deserialize, Serialize};

use crate::domain::dice::Die;
use crate::domain::points::Points;
use crate::scoring::ScoringEngine;

use super::base::{OpponentPolicy, TurnContext};

/// Как бот откладывает кости.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SelectionStyle {
    /// Забрать всё, что приносит очки.
    AllScoring,
    /// Забрать одну самую дорогую группу, остальное перебросить.
    /// Если очки приносят все кости – забрать всё (hot dice).
    KeepDice,
}

/// Характер бота.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolicyProfile {
    pub name: String,
    /// Набрав за ход столько, бот останавливается.
    pub stop_at: Points,
    /// Меньше костей в руке – не рискует.
    pub min_dice_to_roll: u8,
    pub style: SelectionStyle,
}

impl PolicyProfile {
    /// Осторожный: фиксирует всё, что можно, и быстро останавливается.
    pub fn cautious() -> Self {
        Self {
            name: "cautious".into(),
            stop_at: Points(300),
            min_dice_to_roll: 3,
            style: SelectionStyle::AllScoring,
        }
    }

    pub fn balanced() -> Self {
        Self {
            name: "balanced".into(),
            stop_at: Points(550),
            min_dice_to_roll: 2,
            style: SelectionStyle::AllScoring,
        }
    }

    /// Азартный: оставляет кости на переброс и тянет до крупной суммы.
    pub fn reckless() -> Self {
        Self {
            name: "reckless".into(),
            stop_at: Points(1000),
            min_dice_to_roll: 1,
            style: SelectionStyle::KeepDice,
        }
    }
}

/// Бот с порогом остановки.
#[derive(Clone, Debug)]
pub struct ThresholdPolicy {
    profile: PolicyProfile,
}

impl ThresholdPolicy {
    pub fn new(profile: PolicyProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &PolicyProfile {
        &self.profile
    }
}

impl OpponentPolicy for ThresholdPolicy {
    fn choose_selection(&mut self, roll: &[Die], scoring: &ScoringEngine) -> Vec<usize> {
        let all = scoring.best_selection(roll);

        match self.profile.style {
            SelectionStyle::AllScoring => all,
            SelectionStyle::KeepDice => {
                if all.len() == roll.len() {
                    return all;
                }
                // Самая дорогая группа; при равенстве – та, что забирает меньше костей.
                scoring
                    .scoring_options(roll)
                    .into_iter()
                    .max_by(|a, b| {
                        a.points
                            .cmp(&b.points)
                            .then_with(|| b.indices.len().cmp(&a.indices.len()))
                    })
                    .map(|opt| opt.indices)
                    .unwrap_or(all)
            }
        }
    }

    fn should_roll_again(&mut self, ctx: &TurnContext) -> bool {
        // Без входа в игру ход всё равно не закрыть.
        if !ctx.has_entered_game && ctx.banked_score < ctx.entry_threshold {
            return true;
        }

        // В финальном круге надо обойти лидера, иначе ход бессмысленен.
        if ctx.final_round && ctx.projected_total() <= ctx.best_opponent_score {
            return true;
        }

        if !ctx.final_round && ctx.projected_total() >= ctx.target_score {
            return false;
        }

        if ctx.banked_score >= self.profile.stop_at {
            return false;
        }

        ctx.dice_remaining >= self.profile.min_dice_to_roll
    }
}
