/*! Introduces an abstraction for formulae and various types of connectives as ingredients for
constructing formulae.*/
pub mod fof;

use super::{signature::PredSig, Error, Pred, Sig, Term, Var, EQ_SYM};
use itertools::Itertools;
use std::{convert::TryFrom, fmt};

/// Is the trait of formulae, including first-order formulae.
pub trait Formula {
    /// Returns the signature on which the formula is defined. It fails if the underlying
    /// signature is inconsistent.
    fn signature(&self) -> Result<Sig, Error>;

    /// Returns a list of free variable symbols in the receiver formula.
    ///
    /// **Note**: In the list of free variables, each variable symbol appears only once
    /// even if it is present at multiple positions of the receiver formula.
    ///
    /// **Example**:
    /// ```rust
    /// # use gentzen_fol::{syntax::Var, fof};
    /// # use itertools::Itertools;
    /// use gentzen_fol::syntax::Formula;
    ///
    /// let x = Var::from("x");
    /// let y = Var::from("y");
    /// let z = Var::from("z");
    ///
    /// // (P(x) ∧ Q(x, f(g(x), y))) ∨ ('c = g(z))
    /// let formula = fof!({(P(x)) & (Q(x, f(g(x), y)))} | {(@c) = (g(z))});
    /// assert_eq!(vec![&x, &y, &z], formula.free_vars().into_iter().sorted().collect::<Vec<_>>());
    ///
    /// // ∀ x. P(x, y)
    /// let formula = fof!(!x . (P(x, y)));
    /// assert_eq!(vec![&y], formula.free_vars());
    /// ```
    fn free_vars(&self) -> Vec<&Var>;
}

/// Represents an atomic formula, obtained by applying a predicate on a list of terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    pub(crate) predicate: Pred,
    pub(crate) terms: Vec<Term>,
}

impl Atom {
    /// Creates a new atom.
    pub fn new(predicate: Pred, terms: Vec<Term>) -> Self {
        Self { predicate, terms }
    }

    /// Returns the predicate of the receiver.
    #[inline(always)]
    pub fn predicate(&self) -> &Pred {
        &self.predicate
    }

    /// Returns the terms of the receiver.
    #[inline(always)]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl Formula for Atom {
    fn signature(&self) -> Result<Sig, Error> {
        let mut sig = Sig::new_from_signatures(
            self.terms
                .iter()
                .map(|t| t.signature())
                .collect::<Result<Vec<_>, _>>()?,
        )?;
        let arity = u8::try_from(self.terms.len()).map_err(|_| Error::ArityOverflow {
            symbol: self.predicate.to_string(),
            count: self.terms.len(),
        })?;
        sig.add_predicate(PredSig {
            symbol: self.predicate.clone(),
            arity,
        })?;
        Ok(sig)
    }

    fn free_vars(&self) -> Vec<&Var> {
        self.terms
            .iter()
            .flat_map(|t| t.free_vars())
            .unique()
            .collect()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let ts = self.terms.iter().map(|t| t.to_string()).collect_vec();
        write!(f, "{}({})", self.predicate, ts.join(", "))
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

/// Represents an equation between two terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Equals {
    pub(crate) left: Term,
    pub(crate) right: Term,
}

impl Equals {
    /// Creates a new equation.
    pub fn new(left: Term, right: Term) -> Self {
        Self { left, right }
    }

    /// Returns the term on the left of the equation.
    #[inline(always)]
    pub fn left(&self) -> &Term {
        &self.left
    }

    /// Returns the term on the right of the equation.
    #[inline(always)]
    pub fn right(&self) -> &Term {
        &self.right
    }
}

impl Formula for Equals {
    fn signature(&self) -> Result<Sig, Error> {
        let mut sig = self.left.signature()?.merge(self.right.signature()?)?;
        sig.add_predicate(PredSig {
            symbol: Pred::from(EQ_SYM),
            arity: 2,
        })?;
        Ok(sig)
    }

    fn free_vars(&self) -> Vec<&Var> {
        let mut vs = self.left.free_vars();
        vs.extend(self.right.free_vars());
        vs.into_iter().unique().collect()
    }
}

impl fmt::Display for Equals {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} = {}", self.left, self.right)
    }
}

impl fmt::Debug for Equals {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Not<F: Formula> {
    pub(crate) formula: F,
}

impl<F: Formula> Not<F> {
    /// Wraps `formula` in a new instance of [`Not`].
    pub fn new(formula: F) -> Self {
        Self { formula }
    }

    /// Returns the formula wrapped in the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Not<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.formula.signature()
    }

    fn free_vars(&self) -> Vec<&Var> {
        self.formula.free_vars()
    }
}

/// Represents the conjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct And<F: Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F: Formula> And<F> {
    /// Returns the conjunction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

impl<F: Formula> Formula for And<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.left.signature()?.merge(self.right.signature()?)
    }

    fn free_vars(&self) -> Vec<&Var> {
        let mut vs = self.left.free_vars();
        vs.extend(self.right.free_vars());
        vs.into_iter().unique().collect()
    }
}

/// Represents the disjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Or<F: Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F: Formula> Or<F> {
    /// Returns the disjuction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

impl<F: Formula> Formula for Or<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.left.signature()?.merge(self.right.signature()?)
    }

    fn free_vars(&self) -> Vec<&Var> {
        let mut vs = self.left.free_vars();
        vs.extend(self.right.free_vars());
        vs.into_iter().unique().collect()
    }
}

/// Represents an existentially quantified formula with a single bound variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exists<F: Formula> {
    pub(crate) variable: Var,
    pub(crate) formula: F,
}

impl<F: Formula> Exists<F> {
    /// Returns an existentially quantified formula with bound `variable` and `formula`.
    pub fn new(variable: Var, formula: F) -> Self {
        Self { variable, formula }
    }

    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &Var {
        &self.variable
    }

    /// Returns the formula of the existentially quantified receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Exists<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.formula.signature()
    }

    fn free_vars(&self) -> Vec<&Var> {
        self.formula
            .free_vars()
            .into_iter()
            .filter(|v| *v != &self.variable)
            .collect()
    }
}

/// Represents a universally quantified formula with a single bound variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Forall<F: Formula> {
    pub(crate) variable: Var,
    pub(crate) formula: F,
}

impl<F: Formula> Forall<F> {
    /// Returns a universally quantified formula with bound `variable` and `formula`.
    pub fn new(variable: Var, formula: F) -> Self {
        Self { variable, formula }
    }

    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &Var {
        &self.variable
    }

    /// Returns the formula of the universally quantified receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Forall<F> {
    fn signature(&self) -> Result<Sig, Error> {
        self.formula.signature()
    }

    fn free_vars(&self) -> Vec<&Var> {
        self.formula
            .free_vars()
            .into_iter()
            .filter(|v| *v != &self.variable)
            .collect()
    }
}
