// src/domain/config.rs

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::points::Points;

/// Ошибки загрузки и валидации конфига партии.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректный конфиг: {0}")]
    Invalid(String),
}

/// Таблица очков для комбинаций.
///
/// В старых версиях игры стрит стоил то 1500, то 2000.
/// Каноном считаем `standard()`, остальное – через конфиг.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringTable {
    /// Одиночная единица.
    pub single_one: Points,
    /// Одиночная пятёрка.
    pub single_five: Points,
    /// Три единицы (база для 4/5 единиц).
    pub triple_ones: Points,
    /// Три одинаковых 2..=6: `грань * face_multiplier`.
    pub face_multiplier: u32,
    /// Множитель базы для четырёх одинаковых.
    pub four_of_a_kind_factor: u32,
    /// Множитель базы для пяти одинаковых.
    pub five_of_a_kind_factor: u32,
    /// Шесть одинаковых – фиксированная сумма, независимо от грани.
    pub six_of_a_kind: Points,
    /// 1-2-3-4-5-6.
    pub straight: Points,
    /// Три разные пары.
    pub three_pairs: Points,
}

impl ScoringTable {
    /// Каноническая таблица.
    pub fn standard() -> Self {
        Self {
            single_one: Points(100),
            single_five: Points(50),
            triple_ones: Points(1000),
            face_multiplier: 100,
            four_of_a_kind_factor: 2,
            five_of_a_kind_factor: 4,
            six_of_a_kind: Points(5000),
            straight: Points(1500),
            three_pairs: Points(750),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let fixed = [
            ("single_one", self.single_one),
            ("single_five", self.single_five),
            ("triple_ones", self.triple_ones),
            ("six_of_a_kind", self.six_of_a_kind),
            ("straight", self.straight),
            ("three_pairs", self.three_pairs),
        ];
        for (name, value) in fixed {
            if value.is_zero() {
                return Err(format!("ScoringTable: {name} = 0"));
            }
        }
        if self.face_multiplier == 0 {
            return Err("ScoringTable: face_multiplier = 0".into());
        }
        if self.four_of_a_kind_factor == 0 || self.five_of_a_kind_factor == 0 {
            return Err("ScoringTable: of-a-kind factor = 0".into());
        }
        Ok(())
    }
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Конфигурация партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Сколько очков нужно набрать, чтобы запустить финальный круг.
    pub target_score: Points,

    /// Минимум очков за один ход, чтобы "войти в игру".
    pub entry_threshold: Points,

    /// Очки комбинаций.
    pub scoring: ScoringTable,
}

impl GameConfig {
    /// Обычная партия до 10 000.
    pub fn standard() -> Self {
        Self {
            target_score: Points(10_000),
            entry_threshold: Points(300),
            scoring: ScoringTable::standard(),
        }
    }

    /// Короткая партия (для тестов и быстрых игр с ботами).
    pub fn quick(target_score: Points) -> Self {
        Self {
            target_score,
            ..Self::standard()
        }
    }

    /// Жёсткая валидация конфига партии.
    pub fn validate_full(&self) -> Result<(), ConfigError> {
        if self.target_score.is_zero() {
            return Err(ConfigError::Invalid("GameConfig: target_score = 0".into()));
        }

        if self.entry_threshold > self.target_score {
            return Err(ConfigError::Invalid(
                "GameConfig: entry_threshold > target_score".into(),
            ));
        }

        self.scoring.validate().map_err(ConfigError::Invalid)?;

        Ok(())
    }

    /// Разобрать конфиг из JSON. Отсутствующие поля берутся из `standard()`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate_full()?;
        Ok(config)
    }

    /// Прочитать конфиг из JSON-файла.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
