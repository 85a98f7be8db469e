use crate::{
    proof::ProofTree,
    prover::{Outcome, Prover, ProverConfig},
    tableau::{Status, Strategy, Tableau},
};
use gentzen_fol::syntax::Fof;

/// Is large enough for every formula the unit tests expect an answer for.
pub const STEP_LIMIT: usize = 5000;

pub fn bounded_config() -> ProverConfig {
    ProverConfig {
        step_limit: Some(STEP_LIMIT),
        ..ProverConfig::default()
    }
}

pub fn outcome(formula: &Fof) -> Outcome {
    outcome_with(formula, bounded_config())
}

pub fn outcome_with(formula: &Fof, config: ProverConfig) -> Outcome {
    Prover::new(config).prove(formula).unwrap().outcome()
}

/// Steps `tableau` until it is resolved or `limit` steps are taken.
pub fn run<Stg: Strategy>(tableau: &mut Tableau<Stg>, limit: usize) -> Status {
    for _ in 0..limit {
        match tableau.step() {
            Status::Closed | Status::Open => break,
            Status::Unresolved | Status::Branching => {}
        }
    }
    tableau.status()
}

/// Returns the labels on the leftmost path of `tree`.
pub fn path(tree: &ProofTree) -> Vec<&str> {
    let mut labels = vec![tree.label()];
    let mut node = tree;
    while let Some(child) = node.children().first() {
        labels.push(child.label());
        node = child;
    }
    labels
}
