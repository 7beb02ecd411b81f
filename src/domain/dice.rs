use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки при построении костей из "сырых" чисел (фронт, конфиг, скрипт бросков).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DiceError {
    #[error("Значение кости {0} вне диапазона 1..=6")]
    FaceOutOfRange(u8),

    #[error("Пустой набор костей")]
    Empty,
}

/// Одна кость. Никакой идентичности, кроме значения грани внутри броска.
///
/// Конструктор гарантирует диапазон 1..=6, поэтому дальше по коду
/// (scoring, engine) значения вне диапазона уже невозможны.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    pub const ONE: Die = Die(1);
    pub const FIVE: Die = Die(5);

    /// Все грани по порядку.
    pub const ALL: [Die; 6] = [Die(1), Die(2), Die(3), Die(4), Die(5), Die(6)];

    pub fn new(face: u8) -> Result<Self, DiceError> {
        if (1..=6).contains(&face) {
            Ok(Die(face))
        } else {
            Err(DiceError::FaceOutOfRange(face))
        }
    }

    #[inline]
    pub fn face(self) -> u8 {
        self.0
    }

    /// Единицы и пятёрки приносят очки даже поодиночке.
    #[inline]
    pub fn scores_alone(self) -> bool {
        self.0 == 1 || self.0 == 5
    }
}

impl TryFrom<u8> for Die {
    type Error = DiceError;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        Die::new(face)
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> u8 {
        die.0
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Бросок: упорядоченный список костей, которые ещё в игре (1..=6 штук).
pub type Roll = Vec<Die>;

/// Собрать бросок из чисел. Первое значение вне 1..=6 – ошибка.
pub fn dice_from_faces(faces: &[u8]) -> Result<Roll, DiceError> {
    faces.iter().map(|&f| Die::new(f)).collect()
}

/// Вернуть грани броска как числа (для DTO и логов).
pub fn faces_of(dice: &[Die]) -> Vec<u8> {
    dice.iter().map(|d| d.face()).collect()
}

/// Подсчёт граней: индекс = значение грани (1..=6), индекс 0 не используется.
/// Счётчики насыщаются на 255.
pub fn face_counts(dice: &[Die]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for die in dice {
        let slot = &mut counts[die.face() as usize];
        *slot = slot.saturating_add(1);
    }
    counts
}
