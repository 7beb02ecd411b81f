// src/session/game_session.rs

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::config::GameConfig;
use crate::domain::player::{PlayerProfile, PlayerState};
use crate::domain::points::Points;
use crate::domain::PlayerId;
use crate::engine::{
    BankReceipt, EngineError, RandomSource, RollOutcome, TurnPhase, TurnResult, TurnStateMachine,
};
use crate::scoring::ScoringEngine;
use crate::session::errors::SessionError;
use crate::session::history::{GameEvent, GameEventKind, GameHistory};

/// Статус партии.
///
/// `NotStarted → InProgress → FinalRound → GameOver`,
/// из `FinalRound` можно выйти только в `GameOver`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    /// `initiator` – индекс игрока, первым дошедшего до цели.
    FinalRound { initiator: usize },
    GameOver { winner: PlayerId },
}

/// Итог применения хода к партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnCompletion {
    pub player_id: PlayerId,
    /// Сколько реально добавлено к общему счёту.
    pub points_added: Points,
    pub total_score: Points,
    pub busted: bool,
    /// Игрок вошёл в игру именно этим ходом.
    pub entered_game: bool,
    /// Статус партии после хода.
    pub status: SessionStatus,
}

/// Одна партия.
///
/// Единственный владелец игроков и активного хода: никакой другой код
/// не меняет общий счёт напрямую.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    scoring: ScoringEngine,
    players: Vec<PlayerState>,
    current_player_index: usize,
    status: SessionStatus,
    active_turn: Option<TurnStateMachine>,
    turns_played: u32,
    history: GameHistory,
}

impl GameSession {
    /// Создать партию. Проверяет конфиг и список игроков (не пуст, id уникальны, имена непустые).
    pub fn new(config: GameConfig, profiles: Vec<PlayerProfile>) -> Result<Self, SessionError> {
        config.validate_full()?;

        if profiles.is_empty() {
            return Err(SessionError::InvalidPlayers("нет ни одного игрока".into()));
        }

        let mut seen = HashSet::new();
        for p in &profiles {
            if p.name.trim().is_empty() {
                return Err(SessionError::InvalidPlayers(format!(
                    "у игрока {} пустое имя",
                    p.id
                )));
            }
            if !seen.insert(p.id) {
                return Err(SessionError::InvalidPlayers(format!(
                    "игрок {} указан дважды",
                    p.id
                )));
            }
        }

        let players: Vec<PlayerState> = profiles.into_iter().map(PlayerState::new).collect();

        let mut history = GameHistory::new();
        history.push(GameEventKind::SessionStarted {
            players: players.iter().map(|p| p.id()).collect(),
            target_score: config.target_score,
        });

        Ok(Self {
            scoring: ScoringEngine::new(config.scoring.clone()),
            config,
            players,
            current_player_index: 0,
            status: SessionStatus::NotStarted,
            active_turn: None,
            turns_played: 0,
            history,
        })
    }

    /// Начать ход текущего игрока: свежий `TurnStateMachine` на шесть костей.
    pub fn start_turn(&mut self) -> Result<&TurnStateMachine, SessionError> {
        if self.is_game_over() {
            return Err(SessionError::GameOver);
        }
        if self.active_turn.is_some() {
            return Err(SessionError::TurnInProgress);
        }
        if self.status == SessionStatus::NotStarted {
            self.status = SessionStatus::InProgress;
        }

        self.turns_played += 1;
        let player_id = self.current_player().id();
        self.history.push(GameEventKind::TurnStarted {
            player_id,
            turn_number: self.turns_played,
        });

        let turn = self
            .active_turn
            .insert(TurnStateMachine::new(self.scoring.clone()));
        Ok(&*turn)
    }

    /// Бросок в активном ходе.
    pub fn roll<R: RandomSource>(&mut self, rng: &mut R) -> Result<RollOutcome, SessionError> {
        let player_id = self.current_player().id();
        let turn = self.active_turn.as_mut().ok_or(SessionError::NoActiveTurn)?;

        let outcome = turn.roll(rng)?;

        match &outcome {
            RollOutcome::Scoring { roll } => self.history.push(GameEventKind::Rolled {
                player_id,
                roll: roll.clone(),
            }),
            RollOutcome::Bust { roll, forfeited } => self.history.push(GameEventKind::Bust {
                player_id,
                roll: roll.clone(),
                forfeited: *forfeited,
            }),
        }

        Ok(outcome)
    }

    /// Отложить кости в активном ходе.
    pub fn bank(&mut self, indices: &[usize]) -> Result<BankReceipt, SessionError> {
        let player_id = self.current_player().id();
        let turn = self.active_turn.as_mut().ok_or(SessionError::NoActiveTurn)?;

        let receipt = turn.bank(indices)?;

        self.history.push(GameEventKind::Bank {
            player_id,
            dice: receipt.dice.clone(),
            points: receipt.points,
            banked_score: receipt.banked_score,
            dice_remaining: receipt.dice_remaining,
        });
        if receipt.hot_dice {
            self.history.push(GameEventKind::HotDice {
                player_id,
                banked_score: receipt.banked_score,
            });
        }

        Ok(receipt)
    }

    /// Можно ли закрыть активный ход прямо сейчас.
    ///
    /// Фронт блокирует кнопку "закончить ход", пока здесь ошибка.
    pub fn check_end_turn(&self) -> Result<TurnResult, SessionError> {
        if self.is_game_over() {
            return Err(SessionError::GameOver);
        }
        let turn = self.active_turn.as_ref().ok_or(SessionError::NoActiveTurn)?;
        if !turn.can_end() {
            return Err(SessionError::Engine(EngineError::TurnOver));
        }

        let result = turn.pending_result();
        self.check_first_entry(result.banked_score, result.busted)?;
        Ok(result)
    }

    pub fn can_end_turn(&self) -> bool {
        self.check_end_turn().is_ok()
    }

    /// Закрыть активный ход и применить его к счёту.
    ///
    /// При недоборе порога входа ход НЕ закрывается – игрок продолжает бросать.
    pub fn end_turn(&mut self) -> Result<TurnCompletion, SessionError> {
        if let Err(err) = self.check_end_turn() {
            if let SessionError::InsufficientFirstEntry { banked, required } = &err {
                warn!(
                    player_id = self.current_player().id(),
                    %banked,
                    %required,
                    "ход не закрыт: не набран порог входа"
                );
            }
            return Err(err);
        }

        let turn = self.active_turn.as_mut().ok_or(SessionError::NoActiveTurn)?;
        let result = turn.end_turn()?;

        self.complete_turn(result.banked_score, result.busted)
    }

    /// Применить итог хода текущего игрока к партии.
    ///
    /// - перебор: счёт не меняется;
    /// - игрок ещё не вошёл: ход засчитывается только при `banked_score >= entry_threshold`,
    ///   иначе `InsufficientFirstEntry` и партия не меняется;
    /// - игрок уже вошёл: очки добавляются без минимума.
    ///
    /// Если в партии есть свой ход, он должен быть закрыт, а итог совпадать с ним.
    ///
    /// Потом проверка цели / финального круга и передача хода.
    pub fn complete_turn(
        &mut self,
        banked_score: Points,
        busted: bool,
    ) -> Result<TurnCompletion, SessionError> {
        if self.is_game_over() {
            return Err(SessionError::GameOver);
        }
        if let Some(turn) = &self.active_turn {
            if turn.phase() != TurnPhase::Ended {
                return Err(SessionError::TurnInProgress);
            }
            let expected = turn.pending_result();
            if expected.banked_score != banked_score || expected.busted != busted {
                return Err(SessionError::TurnResultMismatch {
                    expected: expected.banked_score,
                    busted: expected.busted,
                });
            }
        }
        self.check_first_entry(banked_score, busted)?;

        if self.status == SessionStatus::NotStarted {
            self.status = SessionStatus::InProgress;
        }
        self.active_turn = None;

        let idx = self.current_player_index;
        let player = &mut self.players[idx];
        let player_id = player.id();

        let mut entered_game = false;
        let points_added = if busted { Points::ZERO } else { banked_score };

        if !busted {
            if !player.has_entered_game() {
                player.mark_entered();
                entered_game = true;
            }
            player.add_score(points_added);
        }
        let total_score = player.total_score();

        self.history.push(GameEventKind::TurnCompleted {
            player_id,
            points_added,
            total_score,
            busted,
            entered_game,
        });
        info!(player_id, %points_added, %total_score, busted, "ход завершён");

        if total_score >= self.config.target_score && !busted {
            self.history.push(GameEventKind::TargetReached {
                player_id,
                total_score,
            });

            if self.status == SessionStatus::InProgress {
                self.status = SessionStatus::FinalRound { initiator: idx };
                self.history.push(GameEventKind::FinalRoundStart {
                    initiator: player_id,
                });
                info!(player_id, %total_score, "финальный круг");
            }
        }

        self.advance();

        Ok(TurnCompletion {
            player_id,
            points_added,
            total_score,
            busted,
            entered_game,
            status: self.status,
        })
    }

    /// Передать ход следующему игроку; завершить партию,
    /// если очередь вернулась к инициатору финального круга.
    fn advance(&mut self) {
        let next = (self.current_player_index + 1) % self.players.len();

        if let SessionStatus::FinalRound { initiator } = self.status {
            if next == initiator {
                let winner = self.pick_winner(initiator);
                self.status = SessionStatus::GameOver { winner };
                self.current_player_index = initiator;
                let standings = self.standings();
                info!(winner, "партия окончена");
                self.history.push(GameEventKind::GameOver { winner, standings });
                return;
            }
        }

        self.current_player_index = next;
    }

    /// Победитель: максимальный счёт; при равенстве – тот, кто раньше
    /// по очереди, начиная с инициатора финального круга.
    fn pick_winner(&self, initiator: usize) -> PlayerId {
        let n = self.players.len();
        let mut best = &self.players[initiator];
        for offset in 1..n {
            let p = &self.players[(initiator + offset) % n];
            if p.total_score() > best.total_score() {
                best = p;
            }
        }
        best.id()
    }

    fn check_first_entry(&self, banked_score: Points, busted: bool) -> Result<(), SessionError> {
        let player = self.current_player();
        if !busted && !player.has_entered_game() && banked_score < self.config.entry_threshold {
            return Err(SessionError::InsufficientFirstEntry {
                banked: banked_score,
                required: self.config.entry_threshold,
            });
        }
        Ok(())
    }

    /// Таблица: (игрок, счёт) по убыванию счёта, при равенстве – по месту за столом.
    pub fn standings(&self) -> Vec<(PlayerId, Points)> {
        let mut rows: Vec<(PlayerId, Points)> = self
            .players
            .iter()
            .map(|p| (p.id(), p.total_score()))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.current_player_index]
    }

    pub fn active_turn(&self) -> Option<&TurnStateMachine> {
        self.active_turn.as_ref()
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    pub fn final_round_initiator(&self) -> Option<usize> {
        match self.status {
            SessionStatus::FinalRound { initiator } => Some(initiator),
            _ => None,
        }
    }

    pub fn is_final_round(&self) -> bool {
        matches!(self.status, SessionStatus::FinalRound { .. })
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, SessionStatus::GameOver { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            SessionStatus::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// События, начиная с номера `index`.
    pub fn events_since(&self, index: u32) -> &[GameEvent] {
        self.history.since(index)
    }
}
