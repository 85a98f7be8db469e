/*! Defines the signed formula sets held by a tableau branch. */
use gentzen_fol::syntax::Fof;
use itertools::Itertools;
use std::{collections::BTreeMap, fmt};
use thiserror::Error;

/// Is raised when a signed formula is added to a [`Sequent`] that already holds the same
/// formula with the opposite sign. It carries the label of the contradicting state.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[error("contradiction: {label}")]
pub struct Contradiction {
    label: String,
}

impl Contradiction {
    pub(crate) fn new(label: String) -> Self {
        Self { label }
    }

    /// Returns the label of the contradicting state.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn into_label(self) -> String {
        self.label
    }
}

/// Is the result of looking up a signed formula in a [`Sequent`] after peeling its negations.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Probe<'a> {
    /// The formula is already present with the same sign.
    Holds,

    /// The formula, or a formula under its negations, is present with the opposite sign.
    Conflicts(&'a Fof, bool),

    /// Nothing is known about the formula.
    Unknown,
}

/// Is the state of a tableau branch: a sequent whose formulae are partitioned by how far they
/// have been processed.
///
/// * `active`: formulae waiting to be decomposed.
/// * `deferred`: universal formulae that were instantiated for every known term and will be
/// instantiated again once new terms are generated.
/// * `expanded`: literals (atoms and equations) that cannot be decomposed any further.
///
/// A formula appears in at most one of these sets and with exactly one sign.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Sequent {
    active: BTreeMap<Fof, bool>,
    deferred: BTreeMap<Fof, bool>,
    expanded: BTreeMap<Fof, bool>,
}

impl Sequent {
    /// Returns an empty sequent.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn active(&self) -> &BTreeMap<Fof, bool> {
        &self.active
    }

    #[inline(always)]
    pub fn deferred(&self) -> &BTreeMap<Fof, bool> {
        &self.deferred
    }

    #[inline(always)]
    pub fn expanded(&self) -> &BTreeMap<Fof, bool> {
        &self.expanded
    }

    /// Returns the sign of `formula` if it is present in any of the sets of the receiver.
    pub fn lookup(&self, formula: &Fof) -> Option<bool> {
        self.expanded
            .get(formula)
            .or_else(|| self.active.get(formula))
            .or_else(|| self.deferred.get(formula))
            .copied()
    }

    /// Looks up `formula` with `sign` in the receiver. If the formula is not present, its
    /// negations are peeled (flipping the sign each time) and the inner formulae are tried.
    pub fn probe<'a>(&self, formula: &'a Fof, sign: bool) -> Probe<'a> {
        let mut formula = formula;
        let mut sign = sign;
        loop {
            if let Some(existing) = self.lookup(formula) {
                return if existing == sign {
                    Probe::Holds
                } else {
                    Probe::Conflicts(formula, sign)
                };
            }
            match formula {
                Fof::Not(this) => {
                    formula = this.formula();
                    sign = !sign;
                }
                _ => return Probe::Unknown,
            }
        }
    }

    /// Adds `formula` with `sign` to the active set. Adding a formula that is already present
    /// with the same sign has no effect; adding it with the opposite sign fails with a
    /// [`Contradiction`].
    pub fn insert(&mut self, formula: Fof, sign: bool) -> Result<(), Contradiction> {
        match self.lookup(&formula) {
            Some(existing) if existing == sign => Ok(()),
            Some(_) => Err(Contradiction {
                label: self.conflict_label(&formula, sign),
            }),
            None => {
                self.active.insert(formula, sign);
                Ok(())
            }
        }
    }

    /// Removes `formula` from the active set and returns its sign.
    pub(crate) fn remove(&mut self, formula: &Fof) -> Option<bool> {
        self.active.remove(formula)
    }

    /// Moves a literal that has been taken out of the active set to the expanded set.
    pub(crate) fn expand(&mut self, formula: Fof, sign: bool) {
        self.expanded.insert(formula, sign);
    }

    /// Moves a universal formula that has been taken out of the active set to the deferred set.
    pub(crate) fn defer(&mut self, formula: Fof, sign: bool) {
        self.deferred.insert(formula, sign);
    }

    /// Moves the deferred formulae back into the active set. Returns false if there was nothing
    /// to move.
    pub(crate) fn restore(&mut self) -> bool {
        if self.deferred.is_empty() {
            return false;
        }
        self.active.append(&mut self.deferred);
        true
    }

    /// Returns the label of the receiver with `formula` added on the side of `sign`.
    pub fn conflict_label(&self, formula: &Fof, sign: bool) -> String {
        write_label(self.entries().chain(std::iter::once((formula, sign))))
    }

    // deferred first, then active, then expanded
    fn entries(&self) -> impl Iterator<Item = (&Fof, bool)> {
        self.deferred
            .iter()
            .chain(&self.active)
            .chain(&self.expanded)
            .map(|(formula, sign)| (formula, *sign))
    }
}

fn write_label<'a>(entries: impl Iterator<Item = (&'a Fof, bool)>) -> String {
    let (positives, negatives): (Vec<_>, Vec<_>) = entries.partition(|(_, sign)| *sign);
    format!(
        "{} --> {}",
        positives.into_iter().map(|(f, _)| f).join(", "),
        negatives.into_iter().map(|(f, _)| f).join(", "),
    )
}

/// Writes the sequent as `positives --> negatives`.
impl fmt::Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", write_label(self.entries()))
    }
}

impl fmt::Debug for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_string())
    }
}
