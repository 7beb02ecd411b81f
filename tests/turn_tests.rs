// tests/turn_tests.rs
//
// Машина состояний одного хода на скриптованных костях.
//
// Проверяем:
//  - бросок → откладывание → бросок → перебор;
//  - hot dice (снова шесть костей, очки хода сохраняются);
//  - перебор сжигает всё, что было накоплено;
//  - ошибки выбора и порядка действий не меняют состояние хода;
//  - несколько откладываний из одного броска.

use farkle_engine::domain::dice::faces_of;
use farkle_engine::domain::Points;
use farkle_engine::engine::{EngineError, RollOutcome, TurnPhase, TurnResult, TurnStateMachine};
use farkle_engine::infra::ScriptedDice;
use farkle_engine::scoring::ScoringEngine;

fn new_turn() -> TurnStateMachine {
    TurnStateMachine::new(ScoringEngine::standard())
}

fn script(faces: &[u8]) -> ScriptedDice {
    ScriptedDice::from_faces(faces).expect("valid script")
}

//
// TEST 1: бросок, откладывание, перебор на одной кости
//
#[test]
fn bank_then_bust_on_last_die() {
    let mut turn = new_turn();
    let mut dice = script(&[1, 1, 1, 5, 5, 2, 2]);

    assert_eq!(turn.phase(), TurnPhase::AwaitingRoll);
    assert_eq!(turn.dice_remaining(), 6);

    let outcome = turn.roll(&mut dice).expect("first roll");
    assert!(!outcome.is_bust());
    assert_eq!(faces_of(outcome.roll()), vec![1, 1, 1, 5, 5, 2]);
    assert_eq!(turn.phase(), TurnPhase::Rolled);

    let receipt = turn.bank(&[0, 1, 2, 3, 4]).expect("bank");
    assert_eq!(receipt.points, Points(1100));
    assert_eq!(receipt.banked_score, Points(1100));
    assert_eq!(receipt.dice_remaining, 1);
    assert!(!receipt.hot_dice);
    assert_eq!(turn.dice_set_aside(), 5);
    assert_eq!(turn.phase(), TurnPhase::AwaitingRoll);

    let outcome = turn.roll(&mut dice).expect("second roll");
    match outcome {
        RollOutcome::Bust { roll, forfeited } => {
            assert_eq!(faces_of(&roll), vec![2]);
            assert_eq!(forfeited, Points(1100));
        }
        other => panic!("expected bust, got {other:?}"),
    }

    assert_eq!(turn.phase(), TurnPhase::Busted);
    assert_eq!(turn.banked_score(), Points::ZERO);
    assert!(turn.is_busted());
    assert_eq!(turn.rolls_made(), 2);
}

//
// TEST 2: hot dice
//
#[test]
fn hot_dice_resets_pool_and_keeps_score() {
    let mut turn = new_turn();
    let mut dice = script(&[1, 1, 1, 5, 5, 5]);

    turn.roll(&mut dice).expect("roll");
    let receipt = turn.bank(&[0, 1, 2, 3, 4, 5]).expect("bank all");

    assert!(receipt.hot_dice);
    assert_eq!(receipt.points, Points(1500));
    assert_eq!(receipt.dice_remaining, 6);
    assert_eq!(turn.dice_remaining(), 6);
    assert_eq!(turn.dice_set_aside(), 0);
    assert!(turn.current_roll().is_empty());
    assert_eq!(turn.banked_score(), Points(1500));
    assert_eq!(turn.hot_dice_count(), 1);
    assert!(turn.can_roll());

    // Отложить нечего, пока не брошены новые шесть костей.
    assert_eq!(turn.bank(&[0]), Err(EngineError::NothingToBank));

    let outcome = turn.roll(&mut dice).expect("roll after hot dice");
    assert_eq!(outcome.roll().len(), 6);
}

//
// TEST 3: перебор после накопленных очков
//
#[test]
fn bust_forfeits_banked_points() {
    let mut turn = new_turn();
    let mut dice = script(&[5, 5, 5, 2, 3, 4, 2, 3, 6]);

    turn.roll(&mut dice).expect("roll");
    turn.bank(&[0, 1, 2]).expect("bank triple fives");
    assert_eq!(turn.banked_score(), Points(500));
    assert_eq!(turn.dice_remaining(), 3);

    let outcome = turn.roll(&mut dice).expect("roll three");
    assert!(outcome.is_bust());

    let result = turn.end_turn().expect("end busted turn");
    assert_eq!(
        result,
        TurnResult {
            banked_score: Points::ZERO,
            busted: true
        }
    );
    assert_eq!(turn.phase(), TurnPhase::Ended);
}

//
// TEST 4: порядок действий
//
#[test]
fn bank_before_roll_is_rejected() {
    let mut turn = new_turn();
    assert_eq!(turn.bank(&[0]), Err(EngineError::NothingToBank));
}

#[test]
fn second_roll_without_bank_is_rejected() {
    let mut turn = new_turn();
    let mut dice = script(&[1, 2, 3, 4, 6, 6]);

    turn.roll(&mut dice).expect("roll");
    assert_eq!(turn.roll(&mut dice), Err(EngineError::CannotRoll));
    assert!(!turn.can_roll());
}

#[test]
fn busted_turn_rejects_roll_and_bank() {
    let mut turn = new_turn();
    let mut dice = script(&[2, 3, 4, 6, 2, 3]);

    assert!(turn.roll(&mut dice).expect("roll").is_bust());
    assert_eq!(turn.roll(&mut dice), Err(EngineError::TurnOver));
    assert_eq!(turn.bank(&[0]), Err(EngineError::TurnOver));
    assert!(turn.scoring_options().is_empty());
}

#[test]
fn turn_cannot_be_ended_twice() {
    let mut turn = new_turn();
    assert!(turn.end_turn().is_ok());
    assert_eq!(turn.end_turn(), Err(EngineError::TurnOver));
    assert!(!turn.can_end());
}

//
// TEST 5: ошибки выбора не меняют ход
//
#[test]
fn invalid_selections_leave_turn_untouched() {
    let mut turn = new_turn();
    let mut dice = script(&[2, 3, 4, 6, 1, 2]);
    turn.roll(&mut dice).expect("roll");

    assert_eq!(turn.bank(&[]), Err(EngineError::EmptySelection));
    assert_eq!(turn.bank(&[0]), Err(EngineError::ZeroScoreSelection));
    assert_eq!(turn.bank(&[4, 0]), Err(EngineError::IllegalSelection));
    assert_eq!(turn.bank(&[6]), Err(EngineError::IndexOutOfRange(6)));
    assert_eq!(turn.bank(&[4, 4]), Err(EngineError::DuplicateIndex(4)));

    assert_eq!(turn.phase(), TurnPhase::Rolled);
    assert_eq!(turn.banked_score(), Points::ZERO);
    assert_eq!(turn.dice_remaining(), 6);
    assert_eq!(faces_of(turn.current_roll()), vec![2, 3, 4, 6, 1, 2]);

    // Правильный выбор после ошибок проходит.
    let receipt = turn.bank(&[4]).expect("single one");
    assert_eq!(receipt.points, Points(100));
    assert_eq!(receipt.dice_remaining, 5);
}

//
// TEST 6: два откладывания из одного броска
//
#[test]
fn leftover_dice_of_same_roll_can_be_banked() {
    let mut turn = new_turn();
    let mut dice = script(&[1, 5, 2, 3, 4, 6]);
    turn.roll(&mut dice).expect("roll");

    turn.bank(&[0]).expect("bank the one");
    assert_eq!(faces_of(turn.current_roll()), vec![5, 2, 3, 4, 6]);

    let receipt = turn.bank(&[0]).expect("bank the five");
    assert_eq!(receipt.points, Points(50));
    assert_eq!(receipt.banked_score, Points(150));
    assert_eq!(receipt.dice_remaining, 4);
    assert_eq!(faces_of(turn.current_roll()), vec![2, 3, 4, 6]);
}

//
// TEST 7: варианты для подсветки
//
#[test]
fn scoring_options_follow_current_roll() {
    let mut turn = new_turn();
    assert!(turn.scoring_options().is_empty());

    let mut dice = script(&[4, 4, 4, 1, 2, 3]);
    turn.roll(&mut dice).expect("roll");

    let options = turn.scoring_options();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].indices, vec![0, 1, 2]);
    assert_eq!(options[0].points, Points(400));
    assert_eq!(options[1].indices, vec![3]);

    let result = turn.pending_result();
    assert_eq!(result.banked_score, Points::ZERO);
    assert!(!result.busted);
}
