/*! Provides an interface and the implementation for term substitution and variable renaming.*/

use crate::syntax::{Exists, Fof, Forall, Formula, Term, Var};
use std::collections::{BTreeMap, HashMap};

/// Is the trait of types that map variables to terms.
pub trait Substitution {
    /// Maps `v` to a [`Term`].
    ///
    /// [`Term`]: crate::syntax::Term
    fn apply(&self, v: &Var) -> Term;
}

/// Any function from [`Var`] to [`Term`] is a substitution.
///
/// [`Var`]: crate::syntax::Var
/// [`Term`]: crate::syntax::Term
impl<F> Substitution for F
where
    F: Fn(&Var) -> Term,
{
    fn apply(&self, v: &Var) -> Term {
        self(v)
    }
}

/// Any map from [`Var`] to [`Term`] is a substitution.
///
/// [`Var`]: crate::syntax::Var
/// [`Term`]: crate::syntax::Term
impl Substitution for HashMap<&Var, Term> {
    fn apply(&self, v: &Var) -> Term {
        self.get(v).cloned().unwrap_or_else(|| v.clone().into())
    }
}

impl Substitution for BTreeMap<Var, Term> {
    fn apply(&self, v: &Var) -> Term {
        self.get(v).cloned().unwrap_or_else(|| v.clone().into())
    }
}

/// Is the trait of types that map variables to variables.
///
/// **Note**: A variable renaming may be regarded as a special case of [`Substitution`].
///
/// [`Substitution`]: crate::transform::Substitution
pub trait VariableRenaming {
    /// Maps `v` to another [`Var`].
    ///
    /// [`Var`]: crate::syntax::Var
    fn apply(&self, v: &Var) -> Var;
}

/// Any function from [`Var`] to [`Var`] is a variable renaming.
///
/// [`Var`]: crate::syntax::Var
impl<F> VariableRenaming for F
where
    F: Fn(&Var) -> Var,
{
    fn apply(&self, v: &Var) -> Var {
        self(v)
    }
}

/// Any map from [`Var`] to [`Var`] is a variable renaming.
///
/// [`Var`]: crate::syntax::Var
impl VariableRenaming for HashMap<&Var, Var> {
    fn apply(&self, v: &Var) -> Var {
        self.get(v).cloned().unwrap_or_else(|| v.clone())
    }
}

/// Is the trait of objects constructed atop [`Term`]s.
///
/// [`Term`]: crate::syntax::Term
pub trait TermBased {
    /// Applies a [`VariableRenaming`] on the free variables of the receiver.
    ///
    /// [`VariableRenaming`]: crate::transform::VariableRenaming
    ///
    /// **Example**:
    /// ```rust
    /// # use gentzen_fol::{syntax::Var, term};
    /// use gentzen_fol::transform::TermBased;
    /// use std::collections::HashMap;
    ///
    /// let x_sym = Var::from("x");
    /// let y_sym = Var::from("y");
    ///
    /// // A variable renaming map that renames variable `x` to `a` and variable `y` to `b`
    /// let mut renaming = HashMap::new();
    /// renaming.insert(&x_sym, Var::from("a"));
    /// renaming.insert(&y_sym, Var::from("b"));
    ///
    /// let t = term!(f(x, z, g(x, y, x)));
    ///
    /// let s = t.rename_vars(&renaming); // s = f(a, z, g(a, b, a))
    /// assert_eq!("f(a, z, g(a, b, a))", s.to_string())
    /// ```
    fn rename_vars(&self, renaming: &impl VariableRenaming) -> Self;

    /// Applies a [`Substitution`] on the free variables of the receiver.
    ///
    /// **Note**: On formulae, substitution is capture-avoiding: a quantifier shadows its bound
    /// variable in its body, and a binder that would capture a free variable of a substituted
    /// term is renamed by appending `` ` `` to its name.
    ///
    /// [`Substitution`]: crate::transform::Substitution
    ///
    /// **Example**:
    /// ```rust
    /// # use gentzen_fol::{syntax::{Var, Const, Term}, term};
    /// use gentzen_fol::transform::TermBased;
    ///
    /// // A substitution function that maps all variable symbols `x` to a constant term `c`.
    /// // Otherwise, wraps the variable symbol in a variable term.
    /// fn x_to_c(v: &Var) -> Term {
    ///     if v == &Var::from("x") {
    ///         Term::from(Const::from("c"))
    ///     } else {
    ///         Term::from(v.clone())
    ///     }
    /// }
    ///
    /// let t = term!(f(x, g(x, y, x)));
    ///
    /// let s = t.substitute(&x_to_c); // s = f('c, g('c, y, 'c))
    /// assert_eq!("f('c, g('c, y, 'c))", s.to_string())
    /// ```
    fn substitute(&self, sub: &impl Substitution) -> Self;
}

impl TermBased for Term {
    fn rename_vars(&self, renaming: &impl VariableRenaming) -> Self {
        match self {
            Term::Const(_) => self.clone(),
            Term::Var(v) => Term::from(renaming.apply(v)),
            Term::App { function, terms } => {
                let terms = terms.iter().map(|t| t.rename_vars(renaming)).collect();
                function.clone().app(terms)
            }
        }
    }

    fn substitute(&self, sub: &impl Substitution) -> Self {
        substitute_term(self, sub)
    }
}

impl TermBased for Fof {
    fn rename_vars(&self, renaming: &impl VariableRenaming) -> Self {
        substitute_formula(self, &|v: &Var| Term::from(renaming.apply(v)))
    }

    fn substitute(&self, sub: &impl Substitution) -> Self {
        substitute_formula(self, sub)
    }
}

// ground sub-terms are shared with the input
fn substitute_term(term: &Term, sub: &dyn Substitution) -> Term {
    match term {
        Term::Const(_) => term.clone(),
        Term::Var(v) => sub.apply(v),
        Term::App { .. } if term.free_vars().is_empty() => term.clone(),
        Term::App { function, terms } => {
            let terms = terms.iter().map(|t| substitute_term(t, sub)).collect();
            function.clone().app(terms)
        }
    }
}

fn substitute_formula(formula: &Fof, sub: &dyn Substitution) -> Fof {
    match formula {
        Fof::Atom(this) => this
            .predicate()
            .clone()
            .app(this.terms().iter().map(|t| substitute_term(t, sub)).collect()),
        Fof::Equals(this) => {
            substitute_term(this.left(), sub).equals(substitute_term(this.right(), sub))
        }
        Fof::Not(this) => Fof::not(substitute_formula(this.formula(), sub)),
        Fof::And(this) => {
            substitute_formula(this.left(), sub).and(substitute_formula(this.right(), sub))
        }
        Fof::Or(this) => {
            substitute_formula(this.left(), sub).or(substitute_formula(this.right(), sub))
        }
        Fof::Exists(this) => {
            let (variable, formula) = substitute_binder(this.variable(), this.formula(), sub);
            Exists::new(variable, formula).into()
        }
        Fof::Forall(this) => {
            let (variable, formula) = substitute_binder(this.variable(), this.formula(), sub);
            Forall::new(variable, formula).into()
        }
    }
}

// Substitutes under a binder, renaming the binder if it occurs free in the image of a
// variable that is free in the body.
fn substitute_binder(variable: &Var, body: &Fof, sub: &dyn Substitution) -> (Var, Fof) {
    let body_vars = body.free_vars();
    let images: Vec<Term> = body_vars
        .iter()
        .filter(|v| **v != variable)
        .map(|v| sub.apply(v))
        .collect();

    let captured = images.iter().any(|t| t.free_vars().contains(&variable));
    let binder = if captured {
        let mut avoid = body_vars.clone();
        avoid.extend(images.iter().flat_map(|t| t.free_vars()));
        rename(variable, &avoid)
    } else {
        variable.clone()
    };

    let inner = |v: &Var| {
        if v == variable {
            Term::from(binder.clone())
        } else {
            sub.apply(v)
        }
    };
    let formula = substitute_formula(body, &inner);
    (binder, formula)
}

// Appends backticks to the name of `variable` until it collides with none of `avoid`.
fn rename(variable: &Var, avoid: &[&Var]) -> Var {
    let mut name = variable.name().to_string();
    let names: Vec<_> = avoid.iter().map(|v| v.name()).collect();
    while names.contains(&name.as_str()) {
        name.push('`')
    }
    Var::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fof, pred, term, v};

    #[test]
    fn substitution_map() {
        {
            let map: HashMap<&Var, Term> = HashMap::new();
            assert_eq!(term!(x), term!(x).substitute(&map));
        }
        {
            let mut map: HashMap<&Var, Term> = HashMap::new();
            let x_v = &v!(x);
            map.insert(x_v, term!(y));
            assert_eq!(term!(y), term!(x).substitute(&map));
        }
        {
            let mut map: HashMap<&Var, Term> = HashMap::new();
            let x_v = &v!(x);
            let y_v = &v!(y);
            map.insert(x_v, term!(g(z)));
            map.insert(y_v, term!(h(z, y)));
            assert_eq!(term!(f(g(z), h(z, y))), term!(f(x, y)).substitute(&map));
        }
        {
            let mut map: BTreeMap<Var, Term> = BTreeMap::new();
            map.insert(v!(x), term!(@c));
            assert_eq!(term!(f(@c, y)), term!(f(x, y)).substitute(&map));
        }
    }

    #[test]
    fn rename_term() {
        assert_eq!(term!(x), term!(x).rename_vars(&|v: &Var| v.clone()));
        assert_eq!(
            term!(f(y, g(y, h(z)))),
            term!(f(x, g(x, h(y)))).rename_vars(&|v: &Var| {
                if *v == v!(x) {
                    v!(y)
                } else if *v == v!(y) {
                    v!(z)
                } else {
                    v.clone()
                }
            })
        );
    }

    #[test]
    fn substitute_term() {
        let x_to_fz = |v: &Var| {
            if *v == v!(x) {
                term!(f(z))
            } else {
                v.clone().into()
            }
        };
        assert_eq!(term!(@a), term!(@a).substitute(&x_to_fz));
        assert_eq!(term!(f(z)), term!(x).substitute(&x_to_fz));
        assert_eq!(term!(y), term!(y).substitute(&x_to_fz));
        assert_eq!(
            term!(g(f(z), h(y, f(z)))),
            term!(g(x, h(y, x))).substitute(&x_to_fz)
        );
    }

    #[test]
    fn substitution_idempotence() {
        let x_to_t = |v: &Var| {
            if *v == v!(x) {
                term!(f(y, @c))
            } else {
                v.clone().into()
            }
        };
        {
            let once = term!(g(x, h(x, z))).substitute(&x_to_t);
            assert_eq!(once, once.substitute(&x_to_t));
        }
        {
            let once = fof!({P(x)} & {!y . (Q(x, y))}).substitute(&x_to_t);
            assert_eq!(once, once.substitute(&x_to_t));
        }
    }

    #[test]
    fn ground_terms_are_shared() {
        let t = term!(f(g(@c), x));
        let s = t.substitute(&|_: &Var| term!(@d));
        match (&t, &s) {
            (Term::App { terms: old, .. }, Term::App { terms: new, .. }) => {
                assert_eq!(old[0], new[0]);
                match (&old[0], &new[0]) {
                    (Term::App { terms: l, .. }, Term::App { terms: r, .. }) => {
                        assert!(std::rc::Rc::ptr_eq(l, r))
                    }
                    _ => unreachable!(),
                }
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn substitute_shadowed() {
        let x_to_c = |v: &Var| {
            if *v == v!(x) {
                term!(@c)
            } else {
                v.clone().into()
            }
        };
        assert_eq!(
            "(∀ x. P(x)) ∧ Q('c)",
            fof!({!x . (P(x))} & {Q(x)}).substitute(&x_to_c).to_string()
        );
        assert_eq!(
            "∃ y. P('c, y)",
            fof!(?y . (P(x, y))).substitute(&x_to_c).to_string()
        );
    }

    #[test]
    fn substitute_capture_avoiding() {
        let x_to_y = |v: &Var| {
            if *v == v!(x) {
                term!(y)
            } else {
                v.clone().into()
            }
        };
        assert_eq!(
            "∀ y`. P(y, y`)",
            fof!(!y . (P(x, y))).substitute(&x_to_y).to_string()
        );
        let y_1 = Term::from(Var::from("y`"));
        assert_eq!(
            "∀ y``. P(y, y``, y`)",
            Fof::forall(
                vec![v!(y)],
                pred!(P).app(vec![term!(x), term!(y), y_1.clone()])
            )
            .substitute(&x_to_y)
            .to_string()
        );
        // no capture without a free occurrence of `x`:
        assert_eq!(
            "∀ y. P(y)",
            fof!(!y . (P(y))).substitute(&x_to_y).to_string()
        );
        // inner binders are renamed in turn:
        assert_eq!(
            "∃ y`. (∀ y``. P(y, y`, y``))",
            Fof::exists(
                vec![v!(y)],
                Fof::forall(
                    vec![Var::from("y`")],
                    pred!(P).app(vec![term!(x), term!(y), y_1])
                )
            )
            .substitute(&x_to_y)
            .to_string()
        );
    }

    #[test]
    fn rename_formula() {
        let x_to_z = |v: &Var| {
            if *v == v!(x) {
                v!(z)
            } else {
                v.clone()
            }
        };
        assert_eq!(
            "∀ z`. P(z, z`)",
            fof!(!z . (P(x, z))).rename_vars(&x_to_z).to_string()
        );
    }
}
