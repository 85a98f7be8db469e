/*! Implements bounders that stop a tableau search which may not terminate. */
use super::{Strategy, Tableau};

/// Is the trait of algorithms for bounding the work spent on a tableau.
pub trait Bounder {
    /// Returns true if `tableau`, having been stepped `steps` times, is outside of the bounds
    /// set by the receiver. If the result is true, the search stops with an unknown outcome.
    fn bound<Stg: Strategy>(&self, tableau: &Tableau<Stg>, steps: usize) -> bool;
}

/// Bounds the number of steps taken on a tableau.
#[derive(Clone, Copy, Debug)]
pub struct StepLimit(usize);

impl From<usize> for StepLimit {
    fn from(size: usize) -> Self {
        Self(size)
    }
}

impl Bounder for StepLimit {
    fn bound<Stg: Strategy>(&self, _: &Tableau<Stg>, steps: usize) -> bool {
        steps >= self.0
    }
}

/// Bounds the number of terms known to any branch of a tableau.
#[derive(Clone, Copy, Debug)]
pub struct TermLimit(usize);

impl From<usize> for TermLimit {
    fn from(size: usize) -> Self {
        Self(size)
    }
}

impl Bounder for TermLimit {
    fn bound<Stg: Strategy>(&self, tableau: &Tableau<Stg>, _: usize) -> bool {
        tableau.term_count() > self.0
    }
}
