use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::dice::{faces_of, Die, Roll};
use crate::domain::points::Points;
use crate::domain::DICE_PER_TURN;
use crate::engine::errors::EngineError;
use crate::engine::selection::validate_selection;
use crate::engine::RandomSource;
use crate::scoring::{ScoringEngine, ScoringOption};

/// Фаза хода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    /// Можно бросать (начало хода, после откладывания, после hot dice).
    AwaitingRoll,
    /// Кости брошены, ждём выбора, что отложить.
    Rolled,
    /// Бросок без очков: все очки хода сгорели.
    Busted,
    /// Ход закрыт через `end_turn`.
    Ended,
}

/// Результат броска.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RollOutcome {
    /// В броске есть что отложить.
    Scoring { roll: Roll },
    /// Перебор: очков в броске нет, `forfeited` очков хода сгорело.
    Bust { roll: Roll, forfeited: Points },
}

impl RollOutcome {
    pub fn roll(&self) -> &[Die] {
        match self {
            RollOutcome::Scoring { roll } | RollOutcome::Bust { roll, .. } => roll,
        }
    }

    pub fn is_bust(&self) -> bool {
        matches!(self, RollOutcome::Bust { .. })
    }
}

/// Квитанция об успешном откладывании костей.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankReceipt {
    /// Что именно отложено.
    pub dice: Vec<Die>,
    /// Сколько принесло это откладывание.
    pub points: Points,
    /// Очки хода после откладывания.
    pub banked_score: Points,
    /// Сколько костей можно бросить дальше (6 после hot dice).
    pub dice_remaining: u8,
    /// Отложены все шесть костей – пул сброшен на полные шесть.
    pub hot_dice: bool,
}

/// Итог хода для партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnResult {
    /// При переборе всегда 0.
    pub banked_score: Points,
    pub busted: bool,
}

/// Состояние одного хода одного игрока.
///
/// Создаётся в начале хода и выбрасывается в конце.
/// Инвариант: `dice_remaining + dice_set_aside == 6` (до сброса по hot dice).
#[derive(Clone, Debug)]
pub struct TurnStateMachine {
    scoring: ScoringEngine,
    phase: TurnPhase,
    dice_remaining: u8,
    /// Сколько костей отложено в текущем цикле из шести.
    dice_set_aside: u8,
    current_roll: Roll,
    banked_score: Points,
    /// Остаётся true и после `end_turn`.
    busted: bool,
    rolls_made: u32,
    hot_dice_count: u32,
}

impl TurnStateMachine {
    pub fn new(scoring: ScoringEngine) -> Self {
        Self {
            scoring,
            phase: TurnPhase::AwaitingRoll,
            dice_remaining: DICE_PER_TURN,
            dice_set_aside: 0,
            current_roll: Vec::new(),
            banked_score: Points::ZERO,
            busted: false,
            rolls_made: 0,
            hot_dice_count: 0,
        }
    }

    /// Бросить все оставшиеся кости.
    ///
    /// Если в броске нет очков – ход переходит в `Busted`,
    /// все накопленные за ход очки сгорают. Перебор окончательный.
    pub fn roll<R: RandomSource>(&mut self, rng: &mut R) -> Result<RollOutcome, EngineError> {
        match self.phase {
            TurnPhase::AwaitingRoll => {}
            TurnPhase::Rolled => return Err(EngineError::CannotRoll),
            TurnPhase::Busted | TurnPhase::Ended => return Err(EngineError::TurnOver),
        }

        let roll = rng.roll_dice(self.dice_remaining as usize);
        self.current_roll = roll.clone();
        self.rolls_made += 1;

        if !self.scoring.has_scoring_dice(&roll) {
            let forfeited = self.banked_score;
            self.banked_score = Points::ZERO;
            self.phase = TurnPhase::Busted;
            self.busted = true;
            debug!(roll = ?faces_of(&roll), %forfeited, "перебор");
            return Ok(RollOutcome::Bust { roll, forfeited });
        }

        self.phase = TurnPhase::Rolled;
        debug!(roll = ?faces_of(&roll), "бросок");
        Ok(RollOutcome::Scoring { roll })
    }

    /// Отложить кости по индексам текущего броска.
    ///
    /// Порог входа в игру здесь НЕ проверяется – только при закрытии хода.
    pub fn bank(&mut self, indices: &[usize]) -> Result<BankReceipt, EngineError> {
        if matches!(self.phase, TurnPhase::Busted | TurnPhase::Ended) {
            return Err(EngineError::TurnOver);
        }
        if self.current_roll.is_empty() {
            return Err(EngineError::NothingToBank);
        }

        let (dice, points) = validate_selection(&self.scoring, &self.current_roll, indices)?;

        // Убираем отложенные кости из броска, сохраняя порядок остальных.
        let mut idx = 0;
        self.current_roll.retain(|_| {
            let keep = !indices.contains(&idx);
            idx += 1;
            keep
        });

        let taken = dice.len() as u8;
        self.banked_score += points;
        self.dice_remaining -= taken;
        self.dice_set_aside += taken;
        self.phase = TurnPhase::AwaitingRoll;

        let hot_dice = self.dice_remaining == 0;
        if hot_dice {
            self.dice_remaining = DICE_PER_TURN;
            self.dice_set_aside = 0;
            self.current_roll.clear();
            self.hot_dice_count += 1;
        }

        debug!(
            dice = ?faces_of(&dice),
            %points,
            banked = %self.banked_score,
            remaining = self.dice_remaining,
            hot_dice,
            "кости отложены"
        );

        Ok(BankReceipt {
            dice,
            points,
            banked_score: self.banked_score,
            dice_remaining: self.dice_remaining,
            hot_dice,
        })
    }

    /// Закрыть ход. Порог входа здесь тоже не проверяется – это дело партии.
    pub fn end_turn(&mut self) -> Result<TurnResult, EngineError> {
        if self.phase == TurnPhase::Ended {
            return Err(EngineError::TurnOver);
        }
        let result = self.pending_result();
        self.phase = TurnPhase::Ended;
        Ok(result)
    }

    /// Что вернёт `end_turn`, если закрыть ход прямо сейчас.
    pub fn pending_result(&self) -> TurnResult {
        TurnResult {
            banked_score: if self.busted {
                Points::ZERO
            } else {
                self.banked_score
            },
            busted: self.busted,
        }
    }

    /// Варианты откладывания для текущего броска.
    pub fn scoring_options(&self) -> Vec<ScoringOption> {
        if matches!(self.phase, TurnPhase::Busted | TurnPhase::Ended) {
            return Vec::new();
        }
        self.scoring.scoring_options(&self.current_roll)
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn dice_remaining(&self) -> u8 {
        self.dice_remaining
    }

    pub fn dice_set_aside(&self) -> u8 {
        self.dice_set_aside
    }

    pub fn current_roll(&self) -> &[Die] {
        &self.current_roll
    }

    pub fn banked_score(&self) -> Points {
        self.banked_score
    }

    pub fn rolls_made(&self) -> u32 {
        self.rolls_made
    }

    pub fn hot_dice_count(&self) -> u32 {
        self.hot_dice_count
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    pub fn is_busted(&self) -> bool {
        self.busted
    }

    pub fn can_roll(&self) -> bool {
        self.phase == TurnPhase::AwaitingRoll
    }

    pub fn can_end(&self) -> bool {
        self.phase != TurnPhase::Ended
    }
}
