/*! Generates the axioms of equality over a signature.

Equality is not built into the tableau rules. Instead, the axioms returned by
[`equality_axioms`] are asserted on the root of the tableau, so that `=` behaves as a
congruence over the symbols of the input formula.
*/
use gentzen_fol::syntax::{Fof, Sig, Term, Var, EQ_SYM};
use itertools::Itertools;

/// Returns the axioms of equality for the symbols of `sig`:
///
/// * reflexivity: `∀ t. t = t`
/// * symmetry: `∀ x, y. x = y → y = x`
/// * substitutivity: `∀ s1, t1, s2, t2. ((s1 = t1 ∧ s2 = t2) ∧ s1 = s2) → t1 = t2`
/// * for every function `f` of arity `n > 0`:
/// `∀ s1, …, sn, t1, …, tn. (s1 = t1 ∧ … ∧ sn = tn) → f(s1, …, sn) = f(t1, …, tn)`
/// * for every predicate `P` of arity `n > 0` other than `=`:
/// `∀ s1, …, sn, t1, …, tn. ((s1 = t1 ∧ … ∧ sn = tn) ∧ P(s1, …, sn)) → P(t1, …, tn)`
///
/// **Example**:
/// ```rust
/// use gentzen_fol::{fof, syntax::Formula};
/// use gentzen_tableau::equality::equality_axioms;
///
/// let sig = fof!((f(x)) = (y)).signature().unwrap();
/// let axioms = equality_axioms(&sig);
/// assert_eq!(4, axioms.len());
/// assert_eq!(
///     "∀ s1. (∀ t1. ((¬(s1 = t1)) ∨ (f(s1) = f(t1))))",
///     axioms[3].to_string(),
/// );
/// ```
pub fn equality_axioms(sig: &Sig) -> Vec<Fof> {
    let mut axioms = vec![reflexivity(), symmetry(), substitutivity()];

    for function in sig.functions().values() {
        let (lefts, rights, premise) = match pairs(function.arity) {
            Some(pairs) => pairs,
            None => continue,
        };
        let conclusion = function
            .symbol
            .clone()
            .app(lefts)
            .equals(function.symbol.clone().app(rights));
        axioms.push(close(function.arity, premise.implies(conclusion)));
    }

    for predicate in sig
        .predicates()
        .values()
        .filter(|p| p.symbol.name() != EQ_SYM)
    {
        let (lefts, rights, premise) = match pairs(predicate.arity) {
            Some(pairs) => pairs,
            None => continue,
        };
        let premise = premise.and(predicate.symbol.clone().app(lefts));
        let conclusion = predicate.symbol.clone().app(rights);
        axioms.push(close(predicate.arity, premise.implies(conclusion)));
    }

    axioms
}

fn var(name: &str) -> Term {
    Var::from(name).into()
}

fn reflexivity() -> Fof {
    Fof::forall(vec![Var::from("t")], var("t").equals(var("t")))
}

fn symmetry() -> Fof {
    let premise = var("x").equals(var("y"));
    Fof::forall(
        vec![Var::from("x"), Var::from("y")],
        premise.implies(var("y").equals(var("x"))),
    )
}

fn substitutivity() -> Fof {
    let premise = var("s1")
        .equals(var("t1"))
        .and(var("s2").equals(var("t2")))
        .and(var("s1").equals(var("s2")));
    Fof::forall(
        ["s1", "t1", "s2", "t2"].iter().map(|&v| Var::from(v)).collect(),
        premise.implies(var("t1").equals(var("t2"))),
    )
}

// s1 .. sn, t1 .. tn and the conjunction of si = ti, if arity is positive
fn pairs(arity: u8) -> Option<(Vec<Term>, Vec<Term>, Fof)> {
    let lefts = (1..=arity).map(|i| var(&format!("s{}", i))).collect_vec();
    let rights = (1..=arity).map(|i| var(&format!("t{}", i))).collect_vec();
    let premise = lefts
        .iter()
        .zip(&rights)
        .map(|(s, t)| s.clone().equals(t.clone()))
        .reduce(|conjunction, equation| conjunction.and(equation))?;
    Some((lefts, rights, premise))
}

// binds s1, t1, s2, t2 .. sn, tn
fn close(arity: u8, formula: Fof) -> Fof {
    let variables = (1..=arity)
        .flat_map(|i| vec![Var::from(format!("s{}", i)), Var::from(format!("t{}", i))])
        .collect();
    Fof::forall(variables, formula)
}
