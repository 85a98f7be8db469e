/*! Provides the algorithms that choose the next formula to decompose on a tableau branch. */
use super::sequent::{Probe, Sequent};
use gentzen_fol::syntax::Fof;

/// Is the trait of algorithms for choosing the next signed formula of the active set of a
/// [`Sequent`]. A strategy returns `None` only if the active set is empty.
pub trait Strategy: Clone {
    /// Returns the next formula to decompose together with its sign.
    fn select(&self, sequent: &Sequent) -> Option<(Fof, bool)>;
}

/// Picks the least formula of the active set in the order of formulae.
#[derive(Clone, Default, Debug)]
pub struct Ordered;

impl Strategy for Ordered {
    fn select(&self, sequent: &Sequent) -> Option<(Fof, bool)> {
        sequent
            .active()
            .iter()
            .next()
            .map(|(formula, sign)| (formula.clone(), *sign))
    }
}

/// Prefers the formulae that are most likely to close a branch early: literals and
/// non-branching rules first, then witnesses, then branching rules that close or are already
/// satisfied on one side, then instantiation of universals, and branching rules last. Ties are
/// broken by the order of formulae.
#[derive(Clone, Default, Debug)]
pub struct FailFast;

impl FailFast {
    // the operands of a branching rule, if `formula` with `sign` is one
    fn branching(formula: &Fof, sign: bool) -> Option<(&Fof, &Fof)> {
        match (formula, sign) {
            (Fof::And(this), false) => Some((this.left(), this.right())),
            (Fof::Or(this), true) => Some((this.left(), this.right())),
            _ => None,
        }
    }

    fn decided(sequent: &Sequent, left: &Fof, right: &Fof, sign: bool) -> bool {
        sequent.probe(left, sign) != Probe::Unknown || sequent.probe(right, sign) != Probe::Unknown
    }
}

impl Strategy for FailFast {
    fn select(&self, sequent: &Sequent) -> Option<(Fof, bool)> {
        let selected = |(formula, sign): (&Fof, &bool)| Some((formula.clone(), *sign));

        // branching rules are probed only when no cheaper rule is left
        let mut witness = None;
        for (formula, sign) in sequent.active() {
            match (formula, *sign) {
                (Fof::Forall(_), false) | (Fof::Exists(_), true) => {
                    witness = witness.or(Some((formula, sign)))
                }
                (Fof::Forall(_), true) | (Fof::Exists(_), false) => {}
                (formula, sign) if Self::branching(formula, sign).is_some() => {}
                _ => return selected((formula, sign)),
            }
        }
        if let Some(entry) = witness {
            return selected(entry);
        }

        let mut universal = None;
        let mut split = None;
        for (formula, sign) in sequent.active() {
            match Self::branching(formula, *sign) {
                Some((left, right)) if Self::decided(sequent, left, right, *sign) => {
                    return selected((formula, sign))
                }
                Some(_) => split = split.or(Some((formula, sign))),
                None => universal = universal.or(Some((formula, sign))),
            }
        }
        universal.or(split).and_then(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gentzen_fol::fof;

    fn sequent(formulae: Vec<(Fof, bool)>) -> Sequent {
        let mut sequent = Sequent::new();
        for (formula, sign) in formulae {
            sequent.insert(formula, sign).unwrap();
        }
        sequent
    }

    #[test]
    fn empty_active() {
        assert_eq!(None, Ordered.select(&Sequent::new()));
        assert_eq!(None, FailFast.select(&Sequent::new()));
    }

    #[test]
    fn ordered_select() {
        let sequent = sequent(vec![(fof!((P()) | (Q())), true), (fof!(R()), false)]);
        assert_eq!(Some((fof!(R()), false)), Ordered.select(&sequent));
    }

    #[test]
    fn fail_fast_select() {
        let sequent = sequent(vec![
            (fof!(!x . (P(x))), true),
            (fof!((P(@a)) | (Q(@a))), true),
            (fof!(?x . (Q(x))), true),
        ]);
        assert_eq!(
            Some((fof!(?x . (Q(x))), true)),
            FailFast.select(&sequent)
        );

        let sequent = sequent_with_literal();
        assert_eq!(
            Some((fof!((P(@a)) | (Q(@a))), true)),
            FailFast.select(&sequent)
        );
    }

    #[test]
    fn fail_fast_prefers_non_branching() {
        // T P('a) ∨ Q('a) has a decided side but comes first in the order of formulae
        let mut sequent = sequent(vec![
            (fof!((P(@a)) | (Q(@a))), true),
            (fof!((Z()) | (W())), false),
            (fof!(!x . (P(x))), true),
        ]);
        sequent.expand(fof!(P(@a)), true);
        assert_eq!(
            Some((fof!((Z()) | (W())), false)),
            FailFast.select(&sequent)
        );

        sequent.remove(&fof!((Z()) | (W())));
        assert_eq!(
            Some((fof!((P(@a)) | (Q(@a))), true)),
            FailFast.select(&sequent)
        );

        sequent.remove(&fof!((P(@a)) | (Q(@a))));
        assert_eq!(Some((fof!(!x . (P(x))), true)), FailFast.select(&sequent));
    }

    fn sequent_with_literal() -> Sequent {
        let mut sequent = sequent(vec![
            (fof!(!x . (P(x))), true),
            (fof!((R(@a)) | (S(@a))), true),
            (fof!((P(@a)) | (Q(@a))), true),
        ]);
        sequent.expand(fof!(Q(@a)), false);
        sequent
    }
}
