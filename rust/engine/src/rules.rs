use crate::errors::GameError;
use crate::strategy::SeatAction as A;

/// A rules-checked action. Payloads are the incremental chips the seat will
/// commit, already clamped to the stack for all-in conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

/// Validates a requested [`SeatAction`] against the seat's stack and the
/// chips needed to call.
///
/// Conversions mirror table practice: a call or (re)bet the stack cannot
/// cover becomes an all-in for the whole stack. There is no minimum raise
/// beyond covering the call; any positive amount re-opens the action.
///
/// # Errors
///
/// [`GameError::IllegalBet`] when the action can never be legal regardless
/// of stack: checking while facing a bet, a zero-amount bet or raise, or a
/// bet below the call. Nothing is mutated on rejection; the round engine
/// decides the fallback.
pub fn validate_action(chips: u32, to_call: u32, action: A) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::IllegalBet {
                    requested: 0,
                    minimum: to_call,
                })
            }
        }
        A::Call => {
            if chips <= to_call {
                Ok(ValidatedAction::AllIn(chips))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Bet(amount) => {
            if amount == 0 {
                return Err(GameError::IllegalBet {
                    requested: 0,
                    minimum: 1,
                });
            }
            if amount < to_call {
                return Err(GameError::IllegalBet {
                    requested: amount,
                    minimum: to_call,
                });
            }
            if amount >= chips {
                Ok(ValidatedAction::AllIn(chips))
            } else {
                Ok(ValidatedAction::Bet(amount))
            }
        }
        A::Raise(amount) => {
            if amount == 0 {
                return Err(GameError::IllegalBet {
                    requested: 0,
                    minimum: 1,
                });
            }
            let total = to_call.saturating_add(amount);
            if total >= chips {
                Ok(ValidatedAction::AllIn(chips))
            } else {
                Ok(ValidatedAction::Raise(total))
            }
        }
        A::AllIn => Ok(ValidatedAction::AllIn(chips)),
    }
}
