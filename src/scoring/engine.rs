use crate::domain::config::ScoringTable;
use crate::domain::dice::{face_counts, Die};
use crate::domain::points::Points;
use crate::domain::DICE_PER_TURN;

use super::combos::{is_straight, is_three_pairs, Combo, ScoredCombo};

/// Движок подсчёта очков.
///
/// Без состояния: хранит только неизменяемую таблицу стоимостей,
/// поэтому его можно свободно клонировать и раздавать ходу, партии и ботам.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoringEngine {
    table: ScoringTable,
}

impl ScoringEngine {
    pub fn new(table: ScoringTable) -> Self {
        Self { table }
    }

    /// Движок с канонической таблицей очков.
    pub fn standard() -> Self {
        Self::new(ScoringTable::standard())
    }

    pub fn table(&self) -> &ScoringTable {
        &self.table
    }

    /// Разложить кости на комбинации в порядке приоритета:
    ///   1. стрит (6 костей);
    ///   2. три пары (6 костей), перебивает подсчёт "N одинаковых";
    ///   3. каждая грань, встречающаяся 3+ раз;
    ///   4. оставшиеся единицы и пятёрки поштучно.
    ///
    /// Остальные одиночные грани (2, 3, 4, 6) ничего не дают и в разложение не попадают.
    pub fn breakdown(&self, dice: &[Die]) -> Vec<ScoredCombo> {
        if !fits_in_turn(dice) {
            return Vec::new();
        }
        let counts = face_counts(dice);

        if is_straight(&counts, dice.len()) {
            return vec![ScoredCombo {
                combo: Combo::Straight,
                points: self.table.straight,
            }];
        }
        if is_three_pairs(&counts, dice.len()) {
            return vec![ScoredCombo {
                combo: Combo::ThreePairs,
                points: self.table.three_pairs,
            }];
        }

        let mut combos = Vec::new();

        for face in Die::ALL {
            let count = counts[face.face() as usize];
            if count >= 3 {
                combos.push(ScoredCombo {
                    combo: Combo::OfAKind { face, count },
                    points: self.of_a_kind_points(face, count),
                });
            }
        }

        // Одиночные 1 и 5 считаем только если они не ушли в "N одинаковых".
        if counts[1] < 3 {
            for _ in 0..counts[1] {
                combos.push(ScoredCombo {
                    combo: Combo::SingleOne,
                    points: self.table.single_one,
                });
            }
        }
        if counts[5] < 3 {
            for _ in 0..counts[5] {
                combos.push(ScoredCombo {
                    combo: Combo::SingleFive,
                    points: self.table.single_five,
                });
            }
        }

        combos
    }

    /// Стоимость набора костей. Пустой, "пустой по очкам" или больше шести костей = 0.
    pub fn score(&self, dice: &[Die]) -> Points {
        self.breakdown(dice).iter().map(|c| c.points).sum()
    }

    /// Есть ли в броске хоть что-то, что можно отложить.
    ///
    /// Эквивалентно `score(dice) > 0`: стрит, три пары, 3+ одинаковых или любая 1/5.
    pub fn has_scoring_dice(&self, dice: &[Die]) -> bool {
        if !fits_in_turn(dice) {
            return false;
        }
        let counts = face_counts(dice);

        counts[1] > 0
            || counts[5] > 0
            || counts[1..=6].iter().any(|&c| c >= 3)
            || is_straight(&counts, dice.len())
            || is_three_pairs(&counts, dice.len())
    }

    /// Можно ли отложить именно этот набор костей одним действием.
    ///
    /// - стрит и три пары легальны целиком;
    /// - единицы и пятёрки легальны всегда, в любом количестве;
    /// - 2, 3, 4, 6 – только если грань встречается в наборе 3+ раз.
    pub fn is_valid_selection(&self, selection: &[Die]) -> bool {
        if selection.is_empty() || !fits_in_turn(selection) {
            return false;
        }

        let counts = face_counts(selection);

        if is_straight(&counts, selection.len()) || is_three_pairs(&counts, selection.len()) {
            return true;
        }

        [2usize, 3, 4, 6]
            .iter()
            .all(|&face| counts[face] == 0 || counts[face] >= 3)
    }

    /// Стоимость "N одинаковых" (N >= 3).
    fn of_a_kind_points(&self, face: Die, count: u8) -> Points {
        let base = if face == Die::ONE {
            self.table.triple_ones
        } else {
            Points(u32::from(face.face()) * self.table.face_multiplier)
        };

        match count {
            3 => base,
            4 => base * self.table.four_of_a_kind_factor,
            5 => base * self.table.five_of_a_kind_factor,
            6 => self.table.six_of_a_kind,
            _ => Points::ZERO,
        }
    }
}

/// В одном ходе не бывает больше шести костей.
pub(crate) fn fits_in_turn(dice: &[Die]) -> bool {
    dice.len() <= DICE_PER_TURN as usize
}

/// `ScoringEngine::score` с канонической таблицей.
pub fn score(dice: &[Die]) -> Points {
    ScoringEngine::standard().score(dice)
}

/// `ScoringEngine::has_scoring_dice` (от таблицы не зависит).
pub fn has_scoring_dice(dice: &[Die]) -> bool {
    ScoringEngine::standard().has_scoring_dice(dice)
}

/// `ScoringEngine::is_valid_selection` (от таблицы не зависит).
pub fn is_valid_selection(selection: &[Die]) -> bool {
    ScoringEngine::standard().is_valid_selection(selection)
}
