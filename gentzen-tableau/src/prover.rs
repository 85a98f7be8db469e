/*! Drives a [`Tableau`] to an answer and reports it as a [`Proof`].

The search for a proof of a first-order formula does not always terminate: a tableau for an
invalid formula may keep generating terms forever. [`ProverConfig`] sets optional budgets on
the number of steps and on the number of terms of a branch; a search that exhausts its budget
is reported with an [`Outcome::Unknown`] outcome.

[`Tableau`]: crate::tableau::Tableau
*/
use crate::{
    proof::ProofTree,
    tableau::{
        bounder::{Bounder, StepLimit, TermLimit},
        FailFast, Ordered, Status, Strategy, Tableau,
    },
    trace::BOUND,
    Error,
};
use gentzen_fol::syntax::Fof;

/// Decides whether the axioms of equality are asserted on the root of a tableau.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EqualityMode {
    /// Assert the axioms only if the formula mentions an equation.
    Auto,
    Always,
    Never,
}

impl Default for EqualityMode {
    fn default() -> Self {
        Self::Auto
    }
}

/// Selects the [`Strategy`] that picks formulae on the branches of a tableau.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Selection {
    /// Use [`Ordered`].
    Ordered,

    /// Use [`FailFast`].
    FailFast,
}

impl Default for Selection {
    fn default() -> Self {
        Self::FailFast
    }
}

/// Configures a [`Prover`]. The default configuration sets no budgets, which makes the search
/// for an invalid formula potentially non-terminating.
#[derive(Clone, Default, Debug)]
pub struct ProverConfig {
    /// Is the maximum number of steps taken on the tableau.
    pub step_limit: Option<usize>,

    /// Is the maximum number of terms known to any branch of the tableau.
    pub term_limit: Option<usize>,

    pub equality: EqualityMode,

    pub strategy: Selection,
}

/// Is the answer of the prover for a formula.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Every branch of the tableau is closed.
    Valid,

    /// A branch of the tableau is open.
    Invalid,

    /// The search ran out of its budget.
    Unknown,
}

/// Is the result of a search: its outcome, the proof tree of the tableau and the number of
/// steps taken.
#[derive(Clone, Debug)]
pub struct Proof {
    outcome: Outcome,
    tree: ProofTree,
    steps: usize,
}

impl Proof {
    #[inline(always)]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline(always)]
    pub fn tree(&self) -> &ProofTree {
        &self.tree
    }

    #[inline(always)]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns true if the formula is proven valid.
    pub fn is_valid(&self) -> bool {
        self.outcome == Outcome::Valid
    }

    /// Consumes the receiver and returns its proof tree.
    pub fn into_tree(self) -> ProofTree {
        self.tree
    }
}

/// Searches for proofs of validity for first-order formulae.
#[derive(Clone, Default, Debug)]
pub struct Prover {
    config: ProverConfig,
}

impl Prover {
    pub fn new(config: ProverConfig) -> Self {
        Self { config }
    }

    #[inline(always)]
    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    /// Searches for a proof of `formula` within the budgets of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// use gentzen_fol::fof;
    /// use gentzen_tableau::{Outcome, Prover, ProverConfig};
    ///
    /// let prover = Prover::new(ProverConfig {
    ///     step_limit: Some(100),
    ///     ..ProverConfig::default()
    /// });
    ///
    /// let proof = prover.prove(&fof!((!x . (P(x))) -> (P(@c)))).unwrap();
    /// assert_eq!(Outcome::Valid, proof.outcome());
    ///
    /// let proof = prover.prove(&fof!(?x . (P(x)))).unwrap();
    /// assert_eq!(Outcome::Unknown, proof.outcome());
    /// ```
    pub fn prove(&self, formula: &Fof) -> Result<Proof, Error> {
        let equality = match self.config.equality {
            EqualityMode::Auto => formula.has_equality(),
            EqualityMode::Always => true,
            EqualityMode::Never => false,
        };

        let proof = match self.config.strategy {
            Selection::FailFast => self.run(Tableau::new(formula, FailFast, equality)?),
            Selection::Ordered => self.run(Tableau::new(formula, Ordered, equality)?),
        };
        Ok(proof)
    }

    fn run<Stg: Strategy>(&self, mut tableau: Tableau<Stg>) -> Proof {
        let step_limit = self.config.step_limit.map(StepLimit::from);
        let term_limit = self.config.term_limit.map(TermLimit::from);

        let mut steps = 0;
        let outcome = loop {
            match tableau.status() {
                Status::Closed => break Outcome::Valid,
                Status::Open => break Outcome::Invalid,
                Status::Unresolved | Status::Branching => {}
            }

            if bounded(step_limit.as_ref(), &tableau, steps)
                || bounded(term_limit.as_ref(), &tableau, steps)
            {
                info!(event = BOUND, node_id = tableau.id(), steps = steps as u64);
                break Outcome::Unknown;
            }

            tableau.step();
            steps += 1;
        };

        Proof {
            outcome,
            tree: tableau.into_tree(),
            steps,
        }
    }
}

fn bounded<B: Bounder, Stg: Strategy>(
    bounder: Option<&B>,
    tableau: &Tableau<Stg>,
    steps: usize,
) -> bool {
    bounder.map_or(false, |b| b.bound(tableau, steps))
}

/// Decides the validity of `formula` with the default configuration, returning the proof tree
/// and true if the formula is valid.
///
/// **Note**: The search for an invalid formula may not terminate. Use [`Prover`] with a
/// budget when that matters.
pub fn is_valid(formula: &Fof) -> Result<(ProofTree, bool), Error> {
    let proof = Prover::default().prove(formula)?;
    let valid = proof.is_valid();
    Ok((proof.into_tree(), valid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use gentzen_fol::fof;

    #[test]
    fn propositional() {
        assert_eq!(Outcome::Valid, outcome(&fof!((P()) | (~(P())))));
        assert_eq!(Outcome::Valid, outcome(&fof!(~((P()) & (~(P()))))));
        assert_eq!(Outcome::Invalid, outcome(&fof!((P()) -> (Q()))));
        assert_eq!(Outcome::Invalid, outcome(&fof!(P())));
    }

    #[test]
    fn ordered_selection() {
        let config = ProverConfig {
            strategy: Selection::Ordered,
            ..bounded_config()
        };
        let valid = fof!({ [(P()) -> (Q())] & [(Q()) -> (R())] } -> { (P()) -> (R()) });
        assert_eq!(Outcome::Valid, outcome_with(&valid, config.clone()));
        assert_eq!(Outcome::Invalid, outcome_with(&fof!((P()) | (Q())), config));
    }

    #[test]
    fn step_limit() {
        let prover = Prover::new(ProverConfig {
            step_limit: Some(10),
            ..ProverConfig::default()
        });
        let proof = prover.prove(&fof!(?x . (P(x)))).unwrap();
        assert_eq!(Outcome::Unknown, proof.outcome());
        assert_eq!(10, proof.steps());
        assert!(!proof.is_valid());
    }

    #[test]
    fn term_limit() {
        let prover = Prover::new(ProverConfig {
            term_limit: Some(5),
            ..ProverConfig::default()
        });
        let proof = prover.prove(&fof!(?x . (P(f(x))))).unwrap();
        assert_eq!(Outcome::Unknown, proof.outcome());
    }

    #[test]
    fn equality_modes() {
        let formula = fof!(?x . ((x) = (x)));
        assert_eq!(Outcome::Valid, outcome(&formula));

        let config = ProverConfig {
            equality: EqualityMode::Never,
            ..bounded_config()
        };
        assert_eq!(Outcome::Unknown, outcome_with(&formula, config));

        let config = ProverConfig {
            equality: EqualityMode::Always,
            ..bounded_config()
        };
        assert_eq!(Outcome::Valid, outcome_with(&fof!((P()) -> (P())), config));
    }

    #[test]
    fn inconsistent_signature() {
        let result = Prover::default().prove(&fof!((P(x)) & (P(x, y))));
        assert!(matches!(result, Err(Error::Syntax(_))));
    }

    #[test]
    fn is_valid_tree() {
        let (tree, valid) = is_valid(&fof!((P()) -> (P()))).unwrap();
        assert!(valid);
        assert_eq!(" --> (¬P()) ∨ P()", tree.label());
        assert_eq!(vec!["P() --> P()"], tree.leaves().iter().map(|l| l.label()).collect::<Vec<_>>());
    }
}
