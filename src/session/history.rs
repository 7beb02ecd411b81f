use serde::{Deserialize, Serialize};

use crate::domain::dice::Die;
use crate::domain::points::Points;
use crate::domain::PlayerId;

/// Тип события партии. Фронт (анимации, чат, звук) реагирует на них
/// уже после того, как вызов ядра вернулся.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Партия создана.
    SessionStarted {
        players: Vec<PlayerId>,
        target_score: Points,
    },

    /// Начался ход игрока.
    TurnStarted {
        player_id: PlayerId,
        turn_number: u32,
    },

    /// Бросок с очками.
    Rolled {
        player_id: PlayerId,
        roll: Vec<Die>,
    },

    /// Перебор: очки хода сгорели.
    Bust {
        player_id: PlayerId,
        roll: Vec<Die>,
        forfeited: Points,
    },

    /// Кости отложены.
    Bank {
        player_id: PlayerId,
        dice: Vec<Die>,
        points: Points,
        banked_score: Points,
        dice_remaining: u8,
    },

    /// Отложены все шесть костей, снова шесть в руке.
    HotDice {
        player_id: PlayerId,
        banked_score: Points,
    },

    /// Ход закрыт и применён к счёту.
    TurnCompleted {
        player_id: PlayerId,
        points_added: Points,
        total_score: Points,
        busted: bool,
        entered_game: bool,
    },

    /// Игрок дошёл до целевого счёта.
    TargetReached {
        player_id: PlayerId,
        total_score: Points,
    },

    /// Начался финальный круг (ровно один раз за партию).
    FinalRoundStart { initiator: PlayerId },

    /// Партия окончена.
    GameOver {
        winner: PlayerId,
        standings: Vec<(PlayerId, Points)>,
    },
}

/// Событие партии с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    /// События, начиная с номера `index` (фронт помнит, докуда дочитал).
    pub fn since(&self, index: u32) -> &[GameEvent] {
        let start = (index as usize).min(self.events.len());
        &self.events[start..]
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
