use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::PlayerId;
use crate::engine::{BankReceipt, RollOutcome, TurnPhase};
use crate::scoring::ScoringOption;
use crate::session::{SessionStatus, TurnCompletion};

use super::errors::ApiError;

/// DTO игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub player_id: PlayerId,
    pub name: String,
    pub total_score: Points,
    pub has_entered_game: bool,
    /// Сейчас его ход.
    pub is_current: bool,
}

/// DTO активного хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnViewDto {
    pub phase: TurnPhase,
    pub dice_remaining: u8,
    pub current_roll: Vec<u8>,
    pub banked_score: Points,
    /// Что можно отложить из текущего броска (для подсветки костей).
    pub options: Vec<ScoringOption>,
    pub can_roll: bool,
    pub can_end: bool,
    /// Почему кнопка "закончить ход" заблокирована (например, порог входа).
    pub end_blocked_reason: Option<String>,
}

/// DTO партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub status: SessionStatus,
    pub target_score: Points,
    pub entry_threshold: Points,
    pub players: Vec<PlayerDto>,
    pub current_player: PlayerId,
    pub final_round: bool,
    pub winner: Option<PlayerId>,
    pub turn: Option<TurnViewDto>,
    /// Сколько событий в истории (фронт дочитывает через EventsSince).
    pub events_count: u32,
}

/// Ответ на бросок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollResponseDto {
    pub roll: Vec<u8>,
    pub busted: bool,
    /// Сколько очков хода сгорело (только при переборе).
    pub forfeited: Points,
    pub options: Vec<ScoringOption>,
}

impl RollResponseDto {
    pub fn from_outcome(outcome: &RollOutcome, options: Vec<ScoringOption>) -> Self {
        let roll = outcome.roll().iter().map(|d| d.face()).collect();
        match outcome {
            RollOutcome::Scoring { .. } => Self {
                roll,
                busted: false,
                forfeited: Points::ZERO,
                options,
            },
            RollOutcome::Bust { forfeited, .. } => Self {
                roll,
                busted: true,
                forfeited: *forfeited,
                options: Vec::new(),
            },
        }
    }
}

/// Ответ на откладывание костей: `{ valid, points, reason }`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankResponseDto {
    pub valid: bool,
    pub points: Points,
    pub banked_score: Points,
    pub dice_remaining: u8,
    pub hot_dice: bool,
    /// Заполняется только при отказе.
    pub reason: Option<String>,
}

impl BankResponseDto {
    pub fn accepted(receipt: &BankReceipt) -> Self {
        Self {
            valid: true,
            points: receipt.points,
            banked_score: receipt.banked_score,
            dice_remaining: receipt.dice_remaining,
            hot_dice: receipt.hot_dice,
            reason: None,
        }
    }

    /// Отказ: очки и кости хода остаются как были.
    pub fn rejected(err: &ApiError, banked_score: Points, dice_remaining: u8) -> Self {
        Self {
            valid: false,
            points: Points::ZERO,
            banked_score,
            dice_remaining,
            hot_dice: false,
            reason: Some(err.reason()),
        }
    }
}

/// Ответ на закрытие хода: `{ accepted, reason }` плюс итог хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompleteTurnResponseDto {
    pub accepted: bool,
    pub reason: Option<String>,
    pub banked_score: Points,
    pub busted: bool,
    pub points_added: Points,
    pub total_score: Points,
    pub status: SessionStatus,
}

impl CompleteTurnResponseDto {
    pub fn accepted(completion: &TurnCompletion, banked_score: Points) -> Self {
        Self {
            accepted: true,
            reason: None,
            banked_score,
            busted: completion.busted,
            points_added: completion.points_added,
            total_score: completion.total_score,
            status: completion.status,
        }
    }

    pub fn rejected(
        err: &ApiError,
        banked_score: Points,
        total_score: Points,
        status: SessionStatus,
    ) -> Self {
        Self {
            accepted: false,
            reason: Some(err.reason()),
            banked_score,
            busted: false,
            points_added: Points::ZERO,
            total_score,
            status,
        }
    }
}

/// Проверка выбора без изменения партии (подсветка "можно отложить" на фронте).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionCheckDto {
    pub valid: bool,
    pub points: Points,
    pub reason: Option<String>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Ход начат.
    TurnStarted(TurnViewDto),

    /// Кости брошены (возможно, перебор).
    Rolled(RollResponseDto),

    /// Результат откладывания (в том числе отказ).
    Banked(BankResponseDto),

    /// Результат закрытия хода (в том числе отказ по порогу входа).
    TurnCompleted(CompleteTurnResponseDto),
}
