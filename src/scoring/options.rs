use serde::{Deserialize, Serialize};

use crate::domain::dice::{face_counts, Die};
use crate::domain::points::Points;

use super::combos::{is_straight, is_three_pairs, Combo};
use super::engine::{fits_in_turn, ScoringEngine};

/// Один вариант "что можно отложить" из текущего броска.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoringOption {
    /// Индексы костей в броске (по возрастанию).
    pub indices: Vec<usize>,
    pub combo: Combo,
    pub points: Points,
}

impl ScoringEngine {
    /// Все легальные группы броска, которые можно отложить одним действием:
    /// стрит / три пары целиком, каждая группа 3+ одинаковых,
    /// каждая единица и пятёрка по отдельности.
    ///
    /// Фронт подсвечивает по ним кости, бот выбирает из них.
    pub fn scoring_options(&self, roll: &[Die]) -> Vec<ScoringOption> {
        if !fits_in_turn(roll) {
            return Vec::new();
        }
        let counts = face_counts(roll);
        let all: Vec<usize> = (0..roll.len()).collect();
        let mut options = Vec::new();

        if is_straight(&counts, roll.len()) {
            options.push(ScoringOption {
                indices: all.clone(),
                combo: Combo::Straight,
                points: self.table().straight,
            });
        } else if is_three_pairs(&counts, roll.len()) {
            options.push(ScoringOption {
                indices: all.clone(),
                combo: Combo::ThreePairs,
                points: self.table().three_pairs,
            });
        }

        for face in Die::ALL {
            let count = counts[face.face() as usize];
            if count < 3 {
                continue;
            }
            let indices: Vec<usize> = all.iter().copied().filter(|&i| roll[i] == face).collect();
            let dice: Vec<Die> = indices.iter().map(|&i| roll[i]).collect();
            options.push(ScoringOption {
                indices,
                combo: Combo::OfAKind { face, count },
                points: self.score(&dice),
            });
        }

        for (idx, die) in roll.iter().enumerate() {
            let (combo, points) = match die.face() {
                1 => (Combo::SingleOne, self.table().single_one),
                5 => (Combo::SingleFive, self.table().single_five),
                _ => continue,
            };
            options.push(ScoringOption {
                indices: vec![idx],
                combo,
                points,
            });
        }

        options
    }

    /// Индексы всех приносящих очки костей броска.
    ///
    /// Инвариант: `score(выбранные кости) == score(roll)`.
    pub fn best_selection(&self, roll: &[Die]) -> Vec<usize> {
        if !fits_in_turn(roll) {
            return Vec::new();
        }
        let counts = face_counts(roll);

        if is_straight(&counts, roll.len()) || is_three_pairs(&counts, roll.len()) {
            return (0..roll.len()).collect();
        }

        roll.iter()
            .enumerate()
            .filter(|(_, die)| die.scores_alone() || counts[die.face() as usize] >= 3)
            .map(|(idx, _)| idx)
            .collect()
    }
}
