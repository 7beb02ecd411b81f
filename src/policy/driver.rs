use tracing::debug;

use crate::engine::RandomSource;
use crate::session::{GameSession, SessionError, TurnCompletion};

use super::base::{OpponentPolicy, TurnContext};

/// Сыграть за бота один полный ход текущего игрока.
///
/// Ходит только через публичные операции партии: start_turn → roll → bank → ... → end_turn.
/// Если бот хочет остановиться, но порог входа не набран, он продолжает бросать.
pub fn play_policy_turn<P, R>(
    session: &mut GameSession,
    policy: &mut P,
    rng: &mut R,
) -> Result<TurnCompletion, SessionError>
where
    P: OpponentPolicy + ?Sized,
    R: RandomSource,
{
    session.start_turn()?;

    loop {
        let outcome = session.roll(rng)?;
        if outcome.is_bust() {
            return session.end_turn();
        }

        let selection = {
            let turn = session.active_turn().ok_or(SessionError::NoActiveTurn)?;
            policy.choose_selection(turn.current_roll(), session.scoring())
        };
        let receipt = session.bank(&selection)?;

        let ctx = TurnContext::from_session(session).ok_or(SessionError::NoActiveTurn)?;
        if policy.should_roll_again(&ctx) {
            continue;
        }

        match session.end_turn() {
            Ok(completion) => return Ok(completion),
            Err(SessionError::InsufficientFirstEntry { .. }) => {
                debug!(banked = %receipt.banked_score, "бот не набрал порог входа, бросает дальше");
            }
            Err(err) => return Err(err),
        }
    }
}
