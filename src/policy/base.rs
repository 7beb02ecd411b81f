use serde::{Deserialize, Serialize};

use crate::domain::dice::Die;
use crate::domain::points::Points;
use crate::scoring::ScoringEngine;
use crate::session::GameSession;

/// Всё, что бот знает о ходе, когда решает, бросать ли дальше.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnContext {
    /// Очки, накопленные в этом ходе.
    pub banked_score: Points,
    /// Сколько костей будет брошено, если продолжить.
    pub dice_remaining: u8,
    pub has_entered_game: bool,
    pub entry_threshold: Points,
    /// Общий счёт бота до этого хода.
    pub total_score: Points,
    pub target_score: Points,
    /// Лучший общий счёт среди остальных игроков.
    pub best_opponent_score: Points,
    pub final_round: bool,
}

impl TurnContext {
    /// Снять контекст с активного хода партии. `None`, если хода нет.
    pub fn from_session(session: &GameSession) -> Option<Self> {
        let turn = session.active_turn()?;
        let me = session.current_player();

        let best_opponent_score = session
            .players()
            .iter()
            .filter(|p| p.id() != me.id())
            .map(|p| p.total_score())
            .max()
            .unwrap_or(Points::ZERO);

        Some(Self {
            banked_score: turn.banked_score(),
            dice_remaining: turn.dice_remaining(),
            has_entered_game: me.has_entered_game(),
            entry_threshold: session.config().entry_threshold,
            total_score: me.total_score(),
            target_score: session.config().target_score,
            best_opponent_score,
            final_round: session.is_final_round(),
        })
    }

    /// Счёт, если закрыть ход прямо сейчас.
    pub fn projected_total(&self) -> Points {
        self.total_score + self.banked_score
    }
}

/// Бот-соперник.
///
/// Object-safe, чтобы держать ботов как `Box<dyn OpponentPolicy>`.
pub trait OpponentPolicy {
    /// Какие кости отложить из броска (индексы). Должен вернуть легальный выбор.
    fn choose_selection(&mut self, roll: &[Die], scoring: &ScoringEngine) -> Vec<usize>;

    /// Бросать ли ещё раз после откладывания.
    fn should_roll_again(&mut self, ctx: &TurnContext) -> bool;
}
