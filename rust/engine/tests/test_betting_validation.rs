use holdem_engine::errors::GameError;
use holdem_engine::rules::{validate_action, ValidatedAction};
use holdem_engine::strategy::SeatAction as A;

#[test]
fn check_facing_a_bet_is_illegal() {
    let err = validate_action(1000, 50, A::Check).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalBet {
            requested: 0,
            minimum: 50
        }
    );
}

#[test]
fn check_is_fine_when_nothing_to_call() {
    assert_eq!(
        validate_action(1000, 0, A::Check).unwrap(),
        ValidatedAction::Check
    );
}

#[test]
fn bet_zero_is_invalid() {
    let err = validate_action(10_000, 0, A::Bet(0)).unwrap_err();
    assert!(matches!(err, GameError::IllegalBet { .. }));
}

#[test]
fn bet_below_the_call_is_invalid() {
    let err = validate_action(1000, 50, A::Bet(30)).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalBet {
            requested: 30,
            minimum: 50
        }
    );
}

#[test]
fn bet_over_stack_becomes_allin() {
    assert_eq!(
        validate_action(50, 0, A::Bet(100)).unwrap(),
        ValidatedAction::AllIn(50)
    );
}

#[test]
fn call_with_insufficient_stack_is_allin_call() {
    assert_eq!(
        validate_action(60, 100, A::Call).unwrap(),
        ValidatedAction::AllIn(60)
    );
}

#[test]
fn call_covers_exactly_the_call_amount() {
    assert_eq!(
        validate_action(1000, 100, A::Call).unwrap(),
        ValidatedAction::Call(100)
    );
}

#[test]
fn raise_commits_call_plus_raise() {
    assert_eq!(
        validate_action(1000, 100, A::Raise(50)).unwrap(),
        ValidatedAction::Raise(150)
    );
}

#[test]
fn raise_zero_is_invalid() {
    assert!(matches!(
        validate_action(1000, 100, A::Raise(0)),
        Err(GameError::IllegalBet { .. })
    ));
}

#[test]
fn stack_consuming_raise_becomes_allin_without_error() {
    assert_eq!(
        validate_action(130, 100, A::Raise(50)).unwrap(),
        ValidatedAction::AllIn(130)
    );
}

#[test]
fn fold_and_allin_are_always_legal() {
    assert_eq!(
        validate_action(0, 500, A::Fold).unwrap(),
        ValidatedAction::Fold
    );
    assert_eq!(
        validate_action(75, 500, A::AllIn).unwrap(),
        ValidatedAction::AllIn(75)
    );
}
