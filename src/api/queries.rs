use serde::{Deserialize, Serialize};

use crate::domain::dice::{dice_from_faces, faces_of};
use crate::domain::DICE_PER_TURN;
use crate::engine::{validate_selection, TurnStateMachine};
use crate::scoring::ScoringEngine;
use crate::session::{GameEvent, GameSession};

use super::dto::{PlayerDto, SelectionCheckDto, SessionViewDto, TurnViewDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Состояние партии целиком.
    GetSession,

    /// Только активный ход.
    GetTurn,

    /// Проверить выбор костей (грани) без изменения партии.
    CheckSelection { faces: Vec<u8> },

    /// События, начиная с номера.
    EventsSince { index: u32 },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Session(SessionViewDto),
    Turn(Option<TurnViewDto>),
    Selection(SelectionCheckDto),
    Events(Vec<GameEvent>),
}

/// Выполнить запрос.
pub fn execute_query(session: &GameSession, query: &Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetSession => Ok(QueryResponse::Session(build_session_view(session))),
        Query::GetTurn => Ok(QueryResponse::Turn(build_turn_view(session))),
        Query::CheckSelection { faces } => Ok(QueryResponse::Selection(check_selection(
            session.scoring(),
            faces,
        )?)),
        Query::EventsSince { index } => Ok(QueryResponse::Events(
            session.events_since(*index).to_vec(),
        )),
    }
}

/// Сформировать DTO партии.
pub fn build_session_view(session: &GameSession) -> SessionViewDto {
    let current = session.current_player().id();

    let players = session
        .players()
        .iter()
        .map(|p| PlayerDto {
            player_id: p.id(),
            name: p.name().to_string(),
            total_score: p.total_score(),
            has_entered_game: p.has_entered_game(),
            is_current: p.id() == current,
        })
        .collect();

    SessionViewDto {
        status: session.status(),
        target_score: session.config().target_score,
        entry_threshold: session.config().entry_threshold,
        players,
        current_player: current,
        final_round: session.is_final_round(),
        winner: session.winner(),
        turn: build_turn_view(session),
        events_count: session.history().len() as u32,
    }
}

/// Сформировать DTO активного хода (если он есть).
pub fn build_turn_view(session: &GameSession) -> Option<TurnViewDto> {
    let turn: &TurnStateMachine = session.active_turn()?;

    let end_blocked_reason = session
        .check_end_turn()
        .err()
        .map(|e| ApiError::from(e).reason());

    Some(TurnViewDto {
        phase: turn.phase(),
        dice_remaining: turn.dice_remaining(),
        current_roll: faces_of(turn.current_roll()),
        banked_score: turn.banked_score(),
        options: turn.scoring_options(),
        can_roll: turn.can_roll(),
        can_end: end_blocked_reason.is_none(),
        end_blocked_reason,
    })
}

/// Проверить набор граней как выбор для откладывания.
///
/// Грани вне 1..=6 или больше шести костей – `BadRequest`, а не `valid: false`.
pub fn check_selection(scoring: &ScoringEngine, faces: &[u8]) -> Result<SelectionCheckDto, ApiError> {
    if faces.len() > DICE_PER_TURN as usize {
        return Err(ApiError::BadRequest(format!(
            "в выборе {} костей, а в ходе их не больше {}",
            faces.len(),
            DICE_PER_TURN
        )));
    }
    let dice = dice_from_faces(faces)?;
    let indices: Vec<usize> = (0..dice.len()).collect();

    Ok(match validate_selection(scoring, &dice, &indices) {
        Ok((_, points)) => SelectionCheckDto {
            valid: true,
            points,
            reason: None,
        },
        Err(err) => SelectionCheckDto {
            valid: false,
            points: scoring.score(&dice),
            reason: Some(err.to_string()),
        },
    })
}
