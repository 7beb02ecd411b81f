use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::engine::RandomSource;
use crate::session::{GameSession, SessionError, TurnCompletion};

use super::dto::{BankResponseDto, CommandResponse, CompleteTurnResponseDto, RollResponseDto};
use super::errors::ApiError;
use super::queries::build_turn_view;

/// Команда верхнего уровня от фронта (кнопки) или чата.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать ход текущего игрока.
    StartTurn,

    /// Бросить оставшиеся кости.
    Roll,

    /// Отложить кости по индексам текущего броска.
    Bank { indices: Vec<usize> },

    /// Закончить ход и записать очки.
    EndTurn,

    /// Применить итог хода, посчитанный снаружи (реплей, внешний ход).
    CompleteTurn { banked_score: Points, busted: bool },
}

/// Выполнить команду над партией.
///
/// Ошибки валидации (выбор костей, порог входа) НЕ возвращаются как `Err`:
/// они приходят структурой `{ valid: false, reason }`, чтобы фронт просто показал сообщение.
/// `Err` – только для команд, невозможных в текущем состоянии.
pub fn execute_command<R: RandomSource>(
    session: &mut GameSession,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::StartTurn => {
            session.start_turn()?;
            let view = build_turn_view(session)
                .ok_or_else(|| ApiError::Internal("ход не создан".into()))?;
            Ok(CommandResponse::TurnStarted(view))
        }

        Command::Roll => {
            let outcome = session.roll(rng)?;
            let options = session
                .active_turn()
                .map(|t| t.scoring_options())
                .unwrap_or_default();
            Ok(CommandResponse::Rolled(RollResponseDto::from_outcome(
                &outcome, options,
            )))
        }

        Command::Bank { indices } => match session.bank(&indices) {
            Ok(receipt) => Ok(CommandResponse::Banked(BankResponseDto::accepted(&receipt))),
            Err(err) => {
                let api = ApiError::from(err);
                if !api.is_validation() {
                    return Err(api);
                }
                let (banked, remaining) = session
                    .active_turn()
                    .map(|t| (t.banked_score(), t.dice_remaining()))
                    .unwrap_or((Points::ZERO, 0));
                Ok(CommandResponse::Banked(BankResponseDto::rejected(
                    &api, banked, remaining,
                )))
            }
        },

        Command::EndTurn => {
            let banked = session
                .active_turn()
                .map(|t| t.pending_result().banked_score)
                .unwrap_or(Points::ZERO);
            let result = session.end_turn();
            completion_response(session, result, banked)
        }

        Command::CompleteTurn {
            banked_score,
            busted,
        } => {
            let result = session.complete_turn(banked_score, busted);
            completion_response(session, result, banked_score)
        }
    }
}

fn completion_response(
    session: &GameSession,
    result: Result<TurnCompletion, SessionError>,
    banked_score: Points,
) -> Result<CommandResponse, ApiError> {
    match result {
        Ok(completion) => Ok(CommandResponse::TurnCompleted(
            CompleteTurnResponseDto::accepted(&completion, banked_score),
        )),
        Err(err) => {
            let api = ApiError::from(err);
            if !api.is_validation() {
                return Err(api);
            }
            Ok(CommandResponse::TurnCompleted(
                CompleteTurnResponseDto::rejected(
                    &api,
                    banked_score,
                    session.current_player().total_score(),
                    session.status(),
                ),
            ))
        }
    }
}
