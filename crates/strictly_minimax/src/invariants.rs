//! Board properties that every transition preserves.
//!
//! [`result`](crate::rules::result) asserts [`TransitionInvariants`] in
//! debug builds.

use crate::{Board, Player, Square};
use derive_new::new;

/// A property of `S` that play never breaks.
pub trait Invariant<S> {
    /// True if the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// Names the property when it fails.
    fn description() -> &'static str;
}

/// Invariants checked as a group.
pub trait InvariantSet<S> {
    /// Descriptions of every failing member, or `Ok` if none fail.
    fn check_all(state: &S) -> Result<(), Vec<&'static str>>;
}

impl<S, A: Invariant<S>, B: Invariant<S>> InvariantSet<S> for (A, B) {
    fn check_all(state: &S) -> Result<(), Vec<&'static str>> {
        let failed: Vec<&'static str> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter_map(|(holds, description)| (!holds).then_some(description))
        .collect();

        if failed.is_empty() { Ok(()) } else { Err(failed) }
    }
}

/// A board before and after one call to [`result`](crate::rules::result).
#[derive(Debug, Clone, Copy, new)]
pub struct Transition<'a> {
    /// Board the action was applied to.
    pub before: &'a Board,
    /// Board the transition produced.
    pub after: &'a Board,
}

/// Invariant: X has placed as many marks as O, or exactly one more.
pub struct BalancedMarks;

impl BalancedMarks {
    /// The count rule on its own, for callers that already counted.
    pub fn counts_hold(x_count: usize, o_count: usize) -> bool {
        x_count == o_count || x_count == o_count + 1
    }
}

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        Self::counts_hold(board.count(Player::X), board.count(Player::O))
    }

    fn description() -> &'static str {
        "X leads O by zero or one marks"
    }
}

impl Invariant<Transition<'_>> for BalancedMarks {
    fn holds(transition: &Transition<'_>) -> bool {
        <Self as Invariant<Board>>::holds(transition.after)
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

/// Invariant: a transition fills exactly one empty square and touches
/// nothing else.
pub struct SingleMarkAdded;

impl Invariant<Transition<'_>> for SingleMarkAdded {
    fn holds(transition: &Transition<'_>) -> bool {
        let Transition { before, after } = *transition;
        if before.size() != after.size() {
            return false;
        }

        let mut changed = before
            .squares()
            .iter()
            .zip(after.squares())
            .filter(|(b, a)| b != a);

        matches!(
            (changed.next(), changed.next()),
            (Some((Square::Empty, Square::Occupied(_))), None)
        )
    }

    fn description() -> &'static str {
        "Transition fills exactly one empty square"
    }
}

/// Postconditions of every board transition.
pub type TransitionInvariants = (BalancedMarks, SingleMarkAdded);
