//! First-class invariants for the game controller.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are checked in debug builds and can be tested
//! independently of the controller.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invariant violation: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Folds several violations into one listing every description.
    pub fn merge(violations: &[InvariantViolation]) -> Self {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(descriptions)
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
            (I4::holds(state), I4::description()),
        ])
    }
}

pub mod alternating_mark;
pub mod history_root;
pub mod single_step;
pub mod view_in_range;

pub use alternating_mark::AlternatingMarkInvariant;
pub use history_root::HistoryRootInvariant;
pub use single_step::SingleStepInvariant;
pub use view_in_range::ViewInRangeInvariant;

/// All controller invariants as a composable set.
pub type GameInvariants = (
    HistoryRootInvariant,
    SingleStepInvariant,
    AlternatingMarkInvariant,
    ViewInRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Event, GameState, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let state = GameState::replay([
            Event::CellClick(Position::TopLeft),
            Event::CellClick(Position::Center),
            Event::CellClick(Position::TopRight),
            Event::JumpTo(1),
            Event::CellClick(Position::BottomLeft),
        ]);
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_merge_lists_every_description() {
        let merged = InvariantViolation::merge(&[
            InvariantViolation::new("first"),
            InvariantViolation::new("second"),
        ]);
        assert_eq!(merged.to_string(), "Invariant violation: first; second");
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryRootInvariant, ViewInRangeInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
