// src/bin/farkle_dev_cli.rs

use std::env;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use farkle_engine::api::build_session_view;
use farkle_engine::domain::dice::faces_of;
use farkle_engine::domain::{GameConfig, PlayerProfile, Points};
use farkle_engine::infra::{DeterministicRng, IdGenerator};
use farkle_engine::policy::{play_policy_turn, OpponentPolicy, PolicyProfile, ThresholdPolicy};
use farkle_engine::session::{GameEventKind, GameSession};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter)
        .init();
}

fn main() {
    init_tracing();
    println!("farkle_dev_cli: партия трёх ботов…");

    // 1. Конфиг: путь к JSON первым аргументом, иначе короткая партия до 3000.
    let config = match env::args().nth(1) {
        Some(path) => match GameConfig::from_path(&path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("Не удалось загрузить конфиг {}: {}", path, err);
                return;
            }
        },
        None => GameConfig::quick(Points(3_000)),
    };

    // 2. Seed из FARKLE_SEED, чтобы партию можно было повторить.
    let seed = env::var("FARKLE_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    let mut rng = DeterministicRng::from_seed(seed);

    // 3. Игроки и их характеры.
    let id_gen = IdGenerator::new();
    let profiles = [
        PolicyProfile::cautious(),
        PolicyProfile::balanced(),
        PolicyProfile::reckless(),
    ];
    let players: Vec<PlayerProfile> = profiles
        .iter()
        .map(|p| PlayerProfile::new(id_gen.next_player_id(), p.name.clone()))
        .collect();
    let mut bots: Vec<Box<dyn OpponentPolicy>> = profiles
        .into_iter()
        .map(|p| Box::new(ThresholdPolicy::new(p)) as Box<dyn OpponentPolicy>)
        .collect();

    let mut session = match GameSession::new(config, players) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Не удалось создать партию: {}", err);
            return;
        }
    };

    println!(
        "seed={} | цель={} | порог входа={}",
        seed,
        session.config().target_score,
        session.config().entry_threshold
    );

    // 4. Играем, пока партия не закончится, печатая события.
    let mut cursor: u32 = 0;
    while !session.is_game_over() {
        let idx = session.current_player_index();
        if let Err(err) = play_policy_turn(&mut session, bots[idx].as_mut(), &mut rng) {
            eprintln!("Ошибка хода: {}", err);
            return;
        }

        for event in session.events_since(cursor) {
            print_event(&event.kind);
        }
        cursor = session.history().len() as u32;
    }

    println!();
    println!("================ ИТОГ =================");
    let view = build_session_view(&session);
    for p in &view.players {
        println!(
            "- {} (id={}) | счёт={} | вошёл в игру={}",
            p.name, p.player_id, p.total_score, p.has_entered_game
        );
    }
    if let Some(winner) = view.winner {
        println!("Победитель: id={}", winner);
    }
}

fn print_event(kind: &GameEventKind) {
    match kind {
        GameEventKind::SessionStarted { .. } => {}
        GameEventKind::TurnStarted {
            player_id,
            turn_number,
        } => println!("\n--- ход #{} | игрок {} ---", turn_number, player_id),
        GameEventKind::Rolled { roll, .. } => println!("  бросок: {:?}", faces_of(roll)),
        GameEventKind::Bust {
            roll, forfeited, ..
        } => println!("  ПЕРЕБОР {:?}, сгорело {}", faces_of(roll), forfeited),
        GameEventKind::Bank {
            dice,
            points,
            banked_score,
            dice_remaining,
            ..
        } => println!(
            "  отложил {:?} (+{}), за ход {}, костей осталось {}",
            faces_of(dice),
            points,
            banked_score,
            dice_remaining
        ),
        GameEventKind::HotDice { banked_score, .. } => {
            println!("  HOT DICE! снова шесть костей, за ход {}", banked_score)
        }
        GameEventKind::TurnCompleted {
            points_added,
            total_score,
            entered_game,
            ..
        } => {
            if *entered_game {
                println!("  вошёл в игру!");
            }
            println!("  записано +{}, всего {}", points_added, total_score);
        }
        GameEventKind::TargetReached {
            player_id,
            total_score,
        } => println!("  игрок {} дошёл до цели: {}", player_id, total_score),
        GameEventKind::FinalRoundStart { initiator } => {
            println!("  ФИНАЛЬНЫЙ КРУГ (начал игрок {})", initiator)
        }
        GameEventKind::GameOver { winner, standings } => {
            println!("\nИГРА ОКОНЧЕНА, победил {}", winner);
            for (pid, score) in standings {
                println!("    {} -> {}", pid, score);
            }
        }
    }
}
