use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::PlayerId;

/// Базовый профиль игрока – то, что приходит при создании партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerProfile {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Состояние игрока в рамках партии.
///
/// Поля закрыты: общий счёт меняет только `GameSession` в конце хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    id: PlayerId,
    name: String,
    total_score: Points,
    /// true после первого хода, принёсшего не меньше порога входа.
    has_entered_game: bool,
}

impl PlayerState {
    pub fn new(profile: PlayerProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            total_score: Points::ZERO,
            has_entered_game: false,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_score(&self) -> Points {
        self.total_score
    }

    pub fn has_entered_game(&self) -> bool {
        self.has_entered_game
    }

    pub(crate) fn mark_entered(&mut self) {
        self.has_entered_game = true;
    }

    pub(crate) fn add_score(&mut self, points: Points) {
        self.total_score += points;
    }
}
