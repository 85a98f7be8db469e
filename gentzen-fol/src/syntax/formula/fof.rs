/*! Defines the syntax of first-order formulae with equality and of signed formulae.*/
use super::{super::Const, *};
use crate::transform::TermBased;
use std::rc::Rc;

/// Is an abstract syntax tree (AST) for first-order formulae.
///
/// **Note**: The compound variants are reference counted, so cloning a formula never copies
/// its sub-formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fof {
    /// Is an atomic first-order formula, wrapping an [`Atom`].
    Atom(Atom),

    /// Is a first-order equality, wrapping an [`Equals`].
    ///
    /// **Note**: Equality is a special type of atomic first-order formula.
    Equals(Equals),

    /// Is the negation of a first-order formula, wrapping a [`Not`].
    Not(Rc<Not<Fof>>),

    /// Is a conjunction of two first-order formulae, wrapping an [`And`].
    And(Rc<And<Fof>>),

    /// Is a disjunction of two first-order formulae, wrapping an [`Or`].
    Or(Rc<Or<Fof>>),

    /// Is an existentially quantified first-order formula, wrapping an [`Exists`].
    Exists(Rc<Exists<Fof>>),

    /// Is a universally quantified first-order formula, wrapping a [`Forall`].
    Forall(Rc<Forall<Fof>>),
}

impl From<Atom> for Fof {
    fn from(value: Atom) -> Self {
        Self::Atom(value)
    }
}

impl From<Equals> for Fof {
    fn from(value: Equals) -> Self {
        Self::Equals(value)
    }
}

impl From<Not<Fof>> for Fof {
    fn from(value: Not<Fof>) -> Self {
        Self::Not(Rc::new(value))
    }
}

impl From<And<Fof>> for Fof {
    fn from(value: And<Fof>) -> Self {
        Self::And(Rc::new(value))
    }
}

impl From<Or<Fof>> for Fof {
    fn from(value: Or<Fof>) -> Self {
        Self::Or(Rc::new(value))
    }
}

impl From<Exists<Fof>> for Fof {
    fn from(value: Exists<Fof>) -> Self {
        Self::Exists(Rc::new(value))
    }
}

impl From<Forall<Fof>> for Fof {
    fn from(value: Forall<Fof>) -> Self {
        Self::Forall(Rc::new(value))
    }
}

impl Fof {
    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `formula.not()` intentionally:
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    /// Returns an existentially quantified first-order formula over `variables`, one quantifier
    /// per variable with the first variable outermost.
    pub fn exists(variables: Vec<Var>, formula: Self) -> Self {
        variables
            .into_iter()
            .rev()
            .fold(formula, |formula, variable| {
                Exists { variable, formula }.into()
            })
    }

    /// Returns a universally quantified first-order formula over `variables`, one quantifier
    /// per variable with the first variable outermost.
    pub fn forall(variables: Vec<Var>, formula: Self) -> Self {
        variables
            .into_iter()
            .rev()
            .fold(formula, |formula, variable| {
                Forall { variable, formula }.into()
            })
    }

    /// Returns a conjunction of `self` and `other`.
    #[inline(always)]
    pub fn and(self, other: Self) -> Self {
        And {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns a disjunction of `self` and `other`.
    #[inline(always)]
    pub fn or(self, other: Self) -> Self {
        Or {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns an implication between `self` and `other`, encoded as `¬self ∨ other`.
    #[inline(always)]
    pub fn implies(self, other: Self) -> Self {
        Self::not(self).or(other)
    }

    /// Returns a bi-implication between `self` and `other`, encoded as the conjunction of the
    /// two implications.
    pub fn iff(self, other: Self) -> Self {
        let forward = self.clone().implies(other.clone());
        let backward = other.implies(self);
        forward.and(backward)
    }

    /// Returns true if the receiver mentions an equation.
    pub fn has_equality(&self) -> bool {
        match self {
            Self::Atom(_) => false,
            Self::Equals(_) => true,
            Self::Not(this) => this.formula.has_equality(),
            Self::And(this) => this.left.has_equality() || this.right.has_equality(),
            Self::Or(this) => this.left.has_equality() || this.right.has_equality(),
            Self::Exists(this) => this.formula.has_equality(),
            Self::Forall(this) => this.formula.has_equality(),
        }
    }

    /// Returns the constant symbols of the receiver, each appearing once.
    pub fn constants(&self) -> Vec<&Const> {
        match self {
            Self::Atom(this) => this.terms.iter().flat_map(|t| t.constants()).unique().collect(),
            Self::Equals(this) => {
                let mut cs = this.left.constants();
                cs.extend(this.right.constants());
                cs.into_iter().unique().collect()
            }
            Self::Not(this) => this.formula.constants(),
            Self::And(this) => {
                let mut cs = this.left.constants();
                cs.extend(this.right.constants());
                cs.into_iter().unique().collect()
            }
            Self::Or(this) => {
                let mut cs = this.left.constants();
                cs.extend(this.right.constants());
                cs.into_iter().unique().collect()
            }
            Self::Exists(this) => this.formula.constants(),
            Self::Forall(this) => this.formula.constants(),
        }
    }

    /// Replaces the free occurrences of `variable` in the receiver with `term`, renaming the
    /// binders of the receiver where `term` would otherwise be captured.
    ///
    /// **Example**:
    /// ```rust
    /// # use gentzen_fol::{syntax::Var, fof, term};
    ///
    /// let formula = fof!(!y . (P(x, y)));
    /// let instance = formula.instantiate(&Var::from("x"), &term!(f(y)));
    /// assert_eq!("∀ y`. P(f(y), y`)", instance.to_string());
    /// ```
    pub fn instantiate(&self, variable: &Var, term: &Term) -> Self {
        self.substitute(&|v: &Var| {
            if v == variable {
                term.clone()
            } else {
                v.clone().into()
            }
        })
    }
}

impl Formula for Fof {
    fn signature(&self) -> Result<Sig, Error> {
        match self {
            Self::Atom(this) => this.signature(),
            Self::Equals(this) => this.signature(),
            Self::Not(this) => this.signature(),
            Self::And(this) => this.signature(),
            Self::Or(this) => this.signature(),
            Self::Exists(this) => this.signature(),
            Self::Forall(this) => this.signature(),
        }
    }

    fn free_vars(&self) -> Vec<&Var> {
        match self {
            Self::Atom(this) => this.free_vars(),
            Self::Equals(this) => this.free_vars(),
            Self::Not(this) => this.free_vars(),
            Self::And(this) => this.free_vars(),
            Self::Or(this) => this.free_vars(),
            Self::Exists(this) => this.free_vars(),
            Self::Forall(this) => this.free_vars(),
        }
    }
}

// used for pretty printing a formula
impl fmt::Display for Fof {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fn parens(formula: &Fof) -> String {
            match formula {
                Fof::Atom { .. } => formula.to_string(),
                _ => format!("({})", formula),
            }
        }
        match self {
            Self::Atom(this) => this.fmt(f),
            Self::Equals(this) => this.fmt(f),
            Self::Not(this) => write!(f, "¬{}", parens(&this.formula)),
            Self::And(this) => write!(f, "{} ∧ {}", parens(&this.left), parens(&this.right)),
            Self::Or(this) => write!(f, "{} ∨ {}", parens(&this.left), parens(&this.right)),
            Self::Exists(this) => write!(f, "∃ {}. {}", this.variable, parens(&this.formula)),
            Self::Forall(this) => write!(f, "∀ {}. {}", this.variable, parens(&this.formula)),
        }
    }
}

// contains no non-ascii characters
impl fmt::Debug for Fof {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        // a helper for writing binary formulae:
        fn write_binary(
            left: &Fof,
            right: &Fof,
            symbol: &str,
            f: &mut fmt::Formatter,
        ) -> Result<(), fmt::Error> {
            match (left, right) {
                (Fof::Atom { .. }, Fof::Atom { .. }) => {
                    write!(f, "{:?} {} {:?}", left, symbol, right)
                }
                (Fof::Atom { .. }, _) => write!(f, "{:?} {} ({:?})", left, symbol, right),
                (_, Fof::Atom { .. }) => write!(f, "({:?}) {} {:?}", left, symbol, right),
                _ => write!(f, "({:?}) {} ({:?})", left, symbol, right),
            }
        }

        match self {
            Self::Atom(this) => this.fmt(f),
            Self::Equals(this) => this.fmt(f),
            Self::Not(this) => match this.formula {
                Self::Atom { .. } => write!(f, "~{}", this.formula),
                _ => write!(f, "~({:?})", this.formula),
            },
            Self::And(this) => write_binary(&this.left, &this.right, "&", f),
            Self::Or(this) => write_binary(&this.left, &this.right, "|", f),
            Self::Exists(this) => match this.formula {
                Self::Atom { .. } => write!(f, "? {}. {:?}", this.variable, this.formula),
                _ => write!(f, "? {}. ({:?})", this.variable, this.formula),
            },
            Self::Forall(this) => match this.formula {
                Self::Atom { .. } => write!(f, "! {}. {:?}", this.variable, this.formula),
                _ => write!(f, "! {}. ({:?})", this.variable, this.formula),
            },
        }
    }
}

/// Is a formula together with the truth value it is asserted to have.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signed {
    /// Is the signed formula.
    pub formula: Fof,

    /// Is true if `formula` is asserted to be true and false otherwise.
    pub sign: bool,
}

impl Signed {
    /// Creates a new signed formula.
    pub fn new(formula: Fof, sign: bool) -> Self {
        Self { formula, sign }
    }

    /// Returns the same formula with the opposite sign.
    pub fn flip(&self) -> Self {
        Self {
            formula: self.formula.clone(),
            sign: !self.sign,
        }
    }
}

impl fmt::Display for Signed {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let sign = if self.sign { "T" } else { "F" };
        write!(f, "{} {}", sign, self.formula)
    }
}

impl fmt::Debug for Signed {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let sign = if self.sign { "T" } else { "F" };
        write!(f, "{} {:?}", sign, self.formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, assert_eq_sorted_vecs, c, fof, v};

    #[test]
    fn atom_to_string() {
        assert_eq!("R()", fof!(R()).to_string());
        assert_eq!("R(x, y)", fof!(R(x, y)).to_string());
        assert_eq!("R(g(x, y))", fof!(R(g(x, y))).to_string());
        assert_eq!(
            "R(f(f(f(f(f(f(x)))))))",
            fof!(R(f(f(f(f(f(f(x)))))))).to_string()
        );
    }

    #[test]
    fn equals_to_string() {
        assert_eq!("x = y", fof!((x) = (y)).to_string());
        assert_eq!("'c = f(x)", fof!((@c) = (f(x))).to_string());
    }

    #[test]
    fn not_to_string() {
        assert_eq!("¬R(x)", fof!(~(R(x))).to_string());
        assert_eq!("¬(x = y)", fof!(~((x) = (y))).to_string());
        assert_eq!("¬(¬R(x))", fof!(~(~(R(x)))).to_string());
    }

    #[test]
    fn binary_to_string() {
        assert_eq!("P(x) ∧ Q(y)", fof!((P(x)) & (Q(y))).to_string());
        assert_eq!("P(x) ∨ (x = y)", fof!((P(x)) | ((x) = (y))).to_string());
        assert_eq!("(¬P()) ∨ Q()", fof!((P()) -> (Q())).to_string());
        assert_eq!(
            "((¬P()) ∨ Q()) ∧ ((¬Q()) ∨ P())",
            fof!((P()) <=> (Q())).to_string()
        );
    }

    #[test]
    fn quantifier_to_string() {
        assert_eq!("∀ x. P(x)", fof!(!x . (P(x))).to_string());
        assert_eq!("∃ x. (x = x)", fof!(?x . ((x) = (x))).to_string());
        assert_eq!("∀ x. (∀ y. P(x, y))", fof!(!x, y . (P(x, y))).to_string());
    }

    #[test]
    fn fof_debug() {
        assert_debug_string!("~P(x)", fof!(~(P(x))));
        assert_debug_string!("P(x) & (~Q(y))", fof!((P(x)) & (~(Q(y)))));
        assert_debug_string!("(~P()) | Q()", fof!((P()) -> (Q())));
        assert_debug_string!("! x. (? y. P(x, y))", fof!(!x . (?y . (P(x, y)))));
        assert_debug_string!("(x = 'c) & P(x)", fof!(((x) = (@c)) & (P(x))));
    }

    #[test]
    fn nested_quantifiers() {
        let formula = Fof::forall(vec![v!(x), v!(y)], fof!(P(x, y)));
        match &formula {
            Fof::Forall(outer) => {
                assert_eq!(&v!(x), outer.variable());
                match outer.formula() {
                    Fof::Forall(inner) => assert_eq!(&v!(y), inner.variable()),
                    _ => unreachable!(),
                }
            }
            _ => unreachable!(),
        }
        assert_eq!(fof!(P(x)), Fof::exists(vec![], fof!(P(x))));
    }

    #[test]
    fn fof_free_vars() {
        {
            let expected = vec![v!(y)];
            assert_eq_sorted_vecs!(
                expected.iter().collect::<Vec<_>>(),
                fof!(!x . (P(x, y))).free_vars()
            );
        }
        {
            let expected = vec![v!(x), v!(z)];
            assert_eq_sorted_vecs!(
                expected.iter().collect::<Vec<_>>(),
                fof!({?y . (P(x, y))} & {(z) = (f(x))}).free_vars()
            );
        }
        {
            let expected: Vec<&Var> = vec![];
            assert_eq_sorted_vecs!(expected, fof!(!x, y . ((x) = (y))).free_vars());
        }
    }

    #[test]
    fn fof_constants() {
        let expected = vec![c!(a), c!(b)];
        assert_eq_sorted_vecs!(
            expected.iter().collect::<Vec<_>>(),
            fof!({P(@a, f(@b))} | {!x . ((x) = (@a))}).constants()
        );
    }

    #[test]
    fn fof_has_equality() {
        assert!(!fof!((P(x)) -> (Q(f(x)))).has_equality());
        assert!(fof!(?x . ((x) = (x))).has_equality());
        assert!(fof!(~({P(x)} & {!y . ((f(y)) = (y))})).has_equality());
    }

    #[test]
    fn fof_ordering() {
        assert!(fof!(P(x)) < fof!((x) = (y)));
        assert!(fof!((x) = (y)) < fof!(~(P(x))));
        assert!(fof!(~(P(x))) < fof!(!x . (P(x))));
    }

    #[test]
    fn signed_to_string() {
        assert_eq!("T P(x)", Signed::new(fof!(P(x)), true).to_string());
        assert_eq!("F ¬P(x)", Signed::new(fof!(~(P(x))), false).to_string());
        let signed = Signed::new(fof!(P(x)), true);
        assert_eq!(Signed::new(fof!(P(x)), false), signed.flip());
    }
}
