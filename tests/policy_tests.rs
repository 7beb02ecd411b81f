// tests/policy_tests.rs
//
// Боты-соперники: выбор костей, решение "бросать дальше",
// полный ход бота через операции партии.

use farkle_engine::domain::dice::{dice_from_faces, Die};
use farkle_engine::domain::{GameConfig, PlayerProfile, Points};
use farkle_engine::infra::ScriptedDice;
use farkle_engine::policy::{
    play_policy_turn, OpponentPolicy, PolicyProfile, ThresholdPolicy, TurnContext,
};
use farkle_engine::scoring::ScoringEngine;
use farkle_engine::session::{GameSession, SessionStatus};

fn dice(faces: &[u8]) -> Vec<Die> {
    dice_from_faces(faces).expect("valid faces")
}

fn ctx() -> TurnContext {
    TurnContext {
        banked_score: Points(400),
        dice_remaining: 3,
        has_entered_game: true,
        entry_threshold: Points(300),
        total_score: Points(2000),
        target_score: Points(10_000),
        best_opponent_score: Points(3000),
        final_round: false,
    }
}

fn two_player_session() -> GameSession {
    GameSession::new(
        GameConfig::standard(),
        vec![PlayerProfile::new(1, "Бот"), PlayerProfile::new(2, "Человек")],
    )
    .expect("session")
}

// -----------------------------
// Выбор костей
// -----------------------------

#[test]
fn all_scoring_style_takes_every_scoring_die() {
    let scoring = ScoringEngine::standard();
    let mut bot = ThresholdPolicy::new(PolicyProfile::cautious());

    let picked = bot.choose_selection(&dice(&[1, 1, 1, 5, 2, 3]), &scoring);
    assert_eq!(picked, vec![0, 1, 2, 3]);
}

#[test]
fn keep_dice_style_takes_single_best_group() {
    let scoring = ScoringEngine::standard();
    let mut bot = ThresholdPolicy::new(PolicyProfile::reckless());

    let picked = bot.choose_selection(&dice(&[1, 1, 1, 5, 2, 3]), &scoring);
    assert_eq!(picked, vec![0, 1, 2]);

    let picked = bot.choose_selection(&dice(&[5, 2, 3, 4, 6, 6]), &scoring);
    assert_eq!(picked, vec![0]);
}

#[test]
fn keep_dice_style_takes_everything_when_all_dice_score() {
    let scoring = ScoringEngine::standard();
    let mut bot = ThresholdPolicy::new(PolicyProfile::reckless());

    let picked = bot.choose_selection(&dice(&[3, 1, 2, 6, 5, 4]), &scoring);
    assert_eq!(picked, vec![0, 1, 2, 3, 4, 5]);
}

// -----------------------------
// Бросать ли дальше
// -----------------------------

#[test]
fn bot_keeps_rolling_until_entry_threshold() {
    let mut bot = ThresholdPolicy::new(PolicyProfile::cautious());
    let c = TurnContext {
        has_entered_game: false,
        banked_score: Points(250),
        dice_remaining: 1,
        ..ctx()
    };
    assert!(bot.should_roll_again(&c));
}

#[test]
fn bot_stops_at_profile_threshold() {
    let mut bot = ThresholdPolicy::new(PolicyProfile::balanced());

    assert!(bot.should_roll_again(&ctx()));
    assert!(!bot.should_roll_again(&TurnContext {
        banked_score: Points(600),
        ..ctx()
    }));
}

#[test]
fn bot_does_not_roll_few_dice() {
    let mut bot = ThresholdPolicy::new(PolicyProfile::cautious());
    let c = TurnContext {
        banked_score: Points(100),
        dice_remaining: 2,
        ..ctx()
    };
    assert!(!bot.should_roll_again(&c));
}

#[test]
fn bot_stops_once_target_is_reached() {
    let mut bot = ThresholdPolicy::new(PolicyProfile::reckless());
    let c = TurnContext {
        total_score: Points(9800),
        banked_score: Points(200),
        dice_remaining: 6,
        ..ctx()
    };
    assert!(!bot.should_roll_again(&c));
}

#[test]
fn bot_chases_leader_in_final_round() {
    let mut bot = ThresholdPolicy::new(PolicyProfile::cautious());
    let c = TurnContext {
        final_round: true,
        total_score: Points(8000),
        banked_score: Points(1500),
        best_opponent_score: Points(10_200),
        dice_remaining: 1,
        ..ctx()
    };
    assert!(bot.should_roll_again(&c));
    assert_eq!(c.projected_total(), Points(9500));
}

#[test]
fn turn_context_is_taken_from_active_turn() {
    let mut session = two_player_session();
    assert!(TurnContext::from_session(&session).is_none());

    session.start_turn().expect("start");
    let c = TurnContext::from_session(&session).expect("context");
    assert_eq!(c.dice_remaining, 6);
    assert_eq!(c.banked_score, Points::ZERO);
    assert!(!c.has_entered_game);
    assert_eq!(c.entry_threshold, Points(300));
    assert!(!c.final_round);
}

// -----------------------------
// Полный ход бота
// -----------------------------

#[test]
fn cautious_bot_banks_triple_ones_and_stops() {
    let mut session = two_player_session();
    let mut bot = ThresholdPolicy::new(PolicyProfile::cautious());
    let mut rng = ScriptedDice::from_faces(&[1, 1, 1, 2, 3, 4]).expect("script");

    let done = play_policy_turn(&mut session, &mut bot, &mut rng).expect("bot turn");

    assert!(!done.busted);
    assert!(done.entered_game);
    assert_eq!(done.points_added, Points(1000));
    assert_eq!(done.status, SessionStatus::InProgress);
    assert_eq!(session.current_player().id(), 2);
    assert_eq!(rng.consumed(), 6);
}

#[test]
fn bot_turn_ends_on_bust() {
    let mut session = two_player_session();
    let mut bot = ThresholdPolicy::new(PolicyProfile::cautious());
    let mut rng = ScriptedDice::from_faces(&[2, 3, 4, 6, 2, 3]).expect("script");

    let done = play_policy_turn(&mut session, &mut bot, &mut rng).expect("bot turn");

    assert!(done.busted);
    assert_eq!(done.points_added, Points::ZERO);
    assert_eq!(session.players()[0].total_score(), Points::ZERO);
}

#[test]
fn bot_keeps_rolling_below_entry_threshold() {
    let mut session = two_player_session();
    let mut bot = ThresholdPolicy::new(PolicyProfile::cautious());
    let mut rng =
        ScriptedDice::from_faces(&[5, 2, 3, 4, 6, 2, 1, 1, 1, 2, 3]).expect("script");

    let done = play_policy_turn(&mut session, &mut bot, &mut rng).expect("bot turn");

    assert_eq!(done.points_added, Points(1050));
    assert!(done.entered_game);
    assert_eq!(rng.consumed(), 11);
}

#[test]
fn boxed_policies_are_usable() {
    let mut session = two_player_session();
    let mut bots: Vec<Box<dyn OpponentPolicy>> = vec![
        Box::new(ThresholdPolicy::new(PolicyProfile::cautious())),
        Box::new(ThresholdPolicy::new(PolicyProfile::cautious())),
    ];
    let mut rng = ScriptedDice::from_faces(&[1, 1, 1, 2, 3, 4]).expect("script");

    for bot in bots.iter_mut() {
        play_policy_turn(&mut session, bot.as_mut(), &mut rng).expect("bot turn");
    }

    assert_eq!(session.players()[0].total_score(), Points(1000));
    assert_eq!(session.players()[1].total_score(), Points(1000));
}
