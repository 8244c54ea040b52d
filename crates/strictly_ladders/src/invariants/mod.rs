//! First-class invariants for the board.
//!
//! Invariants are logical properties that must hold after every mutation.
//! They are testable independently and checked in debug builds after each
//! move and placement.

mod features_well_formed;
mod history_consistent;
mod positions_in_bounds;

pub use features_well_formed::FeaturesWellFormedInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use positions_in_bounds::PositionsInBoundsInvariant;

use tracing::{instrument, warn};

use crate::Board;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
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
}

/// A set of invariants that can be checked together.
///
/// Implemented for 3-tuples of invariants, the shape of [`BoardInvariants`].
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

/// Every board invariant as a composable set.
pub type BoardInvariants = (
    PositionsInBoundsInvariant,
    HistoryConsistentInvariant,
    FeaturesWellFormedInvariant,
);

/// Asserts that all board invariants hold (panics on violation in debug builds).
#[instrument(skip(board))]
pub fn assert_invariants(board: &Board) {
    if let Err(violations) = BoardInvariants::check_all(board) {
        for v in &violations {
            warn!(violation = %v, "Board invariant violated");
        }
        debug_assert!(false, "Board invariants violated: {:?}", violations);
    }
}
