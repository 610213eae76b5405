//! Deterministic baseline strategies: a call station and a scripted
//! action queue for driving exact betting sequences in tests.

use std::collections::VecDeque;

use holdem_engine::strategy::{DecisionView, SeatAction, Strategy};

/// Always checks when free, calls otherwise. Useful as a neutral opponent
/// and as the simplest hand-completing seat.
#[derive(Debug, Default)]
pub struct CallingStrategy;

impl Strategy for CallingStrategy {
    fn decide(&mut self, view: &DecisionView<'_>) -> SeatAction {
        if view.call_amount == 0 {
            SeatAction::Check
        } else {
            SeatAction::Call
        }
    }

    fn name(&self) -> &str {
        "calling"
    }
}

/// Replays a fixed queue of actions, then behaves like
/// [`CallingStrategy`] once the script runs out.
#[derive(Debug)]
pub struct ScriptedStrategy {
    script: VecDeque<SeatAction>,
}

impl ScriptedStrategy {
    pub fn new(actions: impl IntoIterator<Item = SeatAction>) -> Self {
        Self {
            script: actions.into_iter().collect(),
        }
    }
}

impl Strategy for ScriptedStrategy {
    fn decide(&mut self, view: &DecisionView<'_>) -> SeatAction {
        match self.script.pop_front() {
            Some(action) => action,
            None if view.call_amount == 0 => SeatAction::Check,
            None => SeatAction::Call,
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
