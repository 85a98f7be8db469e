/*! Decides the validity of first-order formulae with equality using a signed analytic tableau.

A [`Tableau`] refutes the claim that a formula is false: it starts from the formula with the
sign `false` and decomposes it with the rules of the sequent calculus until every branch is
closed by a contradiction (the formula is valid) or some branch runs out of work (it is not).
Universally quantified formulae are instantiated by a fair [`TermGenerator`], so every term
built from the symbols of the formula is eventually tried. [`Prover`] drives a tableau to
completion within optional budgets and reports the resulting [`Proof`].

```rust
use gentzen_fol::fof;
use gentzen_tableau::is_valid;

let (tree, valid) = is_valid(&fof!((P(x)) -> (P(x)))).unwrap();
assert!(valid);
assert!(tree.leaves().len() > 0);
```

[`Tableau`]: crate::tableau::Tableau
[`TermGenerator`]: crate::generator::TermGenerator
*/
#[macro_use]
extern crate tracing;

pub mod equality;
pub mod generator;
pub mod proof;
pub mod prover;
pub mod tableau;
pub mod trace;

#[cfg(test)]
mod test_prelude;

pub use proof::ProofTree;
pub use prover::{is_valid, EqualityMode, Outcome, Proof, Prover, ProverConfig, Selection};

use thiserror::Error;

/// Is the type of errors returned by the prover.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when the input formula uses a symbol with inconsistent arities.
    #[error(transparent)]
    Syntax(#[from] gentzen_fol::syntax::Error),
}
