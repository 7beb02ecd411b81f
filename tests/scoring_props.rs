// tests/scoring_props.rs
//
// Свойства подсчёта очков на случайных бросках 1..=6 костей.

use farkle_engine::domain::dice::{dice_from_faces, Die};
use farkle_engine::scoring::ScoringEngine;
use proptest::prelude::*;

fn roll_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, 1..=6)
}

fn to_dice(faces: &[u8]) -> Vec<Die> {
    dice_from_faces(faces).expect("strategy yields faces in 1..=6")
}

proptest! {
    #[test]
    fn best_selection_keeps_full_score(faces in roll_strategy()) {
        let engine = ScoringEngine::standard();
        let roll = to_dice(&faces);

        let best = engine.best_selection(&roll);
        let chosen: Vec<Die> = best.iter().map(|&i| roll[i]).collect();

        prop_assert_eq!(engine.score(&chosen), engine.score(&roll));
        if !best.is_empty() {
            prop_assert!(engine.is_valid_selection(&chosen));
        }
    }

    #[test]
    fn has_scoring_dice_matches_positive_score(faces in roll_strategy()) {
        let engine = ScoringEngine::standard();
        let roll = to_dice(&faces);

        prop_assert_eq!(engine.has_scoring_dice(&roll), !engine.score(&roll).is_zero());
    }

    #[test]
    fn every_option_is_a_legal_selection(faces in roll_strategy()) {
        let engine = ScoringEngine::standard();
        let roll = to_dice(&faces);

        for opt in engine.scoring_options(&roll) {
            let chosen: Vec<Die> = opt.indices.iter().map(|&i| roll[i]).collect();
            prop_assert!(engine.is_valid_selection(&chosen));
            prop_assert_eq!(engine.score(&chosen), opt.points);
        }
    }

    #[test]
    fn standard_scores_are_multiples_of_fifty(faces in roll_strategy()) {
        let points = ScoringEngine::standard().score(&to_dice(&faces));
        prop_assert_eq!(points.0 % 50, 0);
    }

    #[test]
    fn score_ignores_dice_order(faces in roll_strategy()) {
        let engine = ScoringEngine::standard();
        let roll = to_dice(&faces);
        let mut reversed = roll.clone();
        reversed.reverse();

        prop_assert_eq!(engine.score(&roll), engine.score(&reversed));
    }
}
