use crate::domain::dice::Die;
use crate::domain::points::Points;
use crate::engine::errors::EngineError;
use crate::scoring::ScoringEngine;

/// Достать кости по индексам из броска.
///
/// Проверяет только форму выбора: непустой, индексы в диапазоне, без повторов.
pub fn select_dice(roll: &[Die], indices: &[usize]) -> Result<Vec<Die>, EngineError> {
    if indices.is_empty() {
        return Err(EngineError::EmptySelection);
    }

    let mut taken = vec![false; roll.len()];
    let mut dice = Vec::with_capacity(indices.len());

    for &idx in indices {
        let die = *roll.get(idx).ok_or(EngineError::IndexOutOfRange(idx))?;
        if taken[idx] {
            return Err(EngineError::DuplicateIndex(idx));
        }
        taken[idx] = true;
        dice.push(die);
    }

    Ok(dice)
}

/// Проверка, можно ли отложить эти кости одним действием.
///
/// Порядок проверок: форма выбора → очки > 0 → правило "2/3/4/6 только тройками".
/// Возвращает выбранные кости и их стоимость.
pub fn validate_selection(
    scoring: &ScoringEngine,
    roll: &[Die],
    indices: &[usize],
) -> Result<(Vec<Die>, Points), EngineError> {
    let dice = select_dice(roll, indices)?;

    let points = scoring.score(&dice);
    if points.is_zero() {
        return Err(EngineError::ZeroScoreSelection);
    }

    if !scoring.is_valid_selection(&dice) {
        return Err(EngineError::IllegalSelection);
    }

    Ok((dice, points))
}
