use serde::{Deserialize, Serialize};

use crate::domain::dice::Die;
use crate::domain::points::Points;

/// Комбинация, которую распознал движок подсчёта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Combo {
    /// 1-2-3-4-5-6 из шести костей.
    Straight,
    /// Три разные пары из шести костей.
    ThreePairs,
    /// 3..=6 одинаковых.
    OfAKind { face: Die, count: u8 },
    /// Единица, не вошедшая в "N одинаковых".
    SingleOne,
    /// Пятёрка, не вошедшая в "N одинаковых".
    SingleFive,
}

/// Комбинация вместе с её стоимостью.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredCombo {
    pub combo: Combo,
    pub points: Points,
}

/// Человекочитаемое описание комбинации (для чата и логов).
pub fn describe_combo(combo: &Combo) -> String {
    match combo {
        Combo::Straight => "Стрит".to_string(),
        Combo::ThreePairs => "Три пары".to_string(),
        Combo::OfAKind { face, count } => format!("{count} x {face}"),
        Combo::SingleOne => "Единица".to_string(),
        Combo::SingleFive => "Пятёрка".to_string(),
    }
}

/// Шесть костей, каждая грань ровно по разу.
pub(crate) fn is_straight(counts: &[u8; 7], len: usize) -> bool {
    len == 6 && counts[1..=6].iter().all(|&c| c == 1)
}

/// Шесть костей, ровно три разные грани по два раза.
pub(crate) fn is_three_pairs(counts: &[u8; 7], len: usize) -> bool {
    len == 6 && counts[1..=6].iter().filter(|&&c| c == 2).count() == 3
}
