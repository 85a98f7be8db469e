/*! Defines the syntax for first-order terms. */
use super::{signature::FuncSig, Const, Equals, Error, Fof, Func, Sig, Var};
use itertools::Itertools;
use std::{cmp::Ordering, convert::TryFrom, fmt, rc::Rc};

/// Represents a first-order term and consists of variables, constants and function applications.
///
/// Terms are immutable. The arguments of a function application are shared among the clones of
/// the application, which makes cloning and substitution cheap for unchanged sub-terms.
///
/// **Note**: Terms are ordered canonically by their symbol name, then by their arity and then
/// lexicographically by their arguments. The kind of the term (variable, constant or application)
/// only breaks the tie between terms with the same name and no arguments.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Is a variable term, wrapping a [variable symbol].
    ///
    /// [variable symbol]: crate::syntax::Var
    Var(Var),

    /// Is a constant term, wrapping a [constant symbol].
    ///
    /// [constant symbol]: crate::syntax::Const
    Const(Const),

    /// Is a composite term, made by applying a `function` on a list of `terms`.
    App { function: Func, terms: Rc<[Term]> },
}

impl Term {
    /// Returns the name of the symbol at the root of the receiver.
    pub fn name(&self) -> &str {
        match self {
            Self::Var(variable) => variable.name(),
            Self::Const(constant) => constant.name(),
            Self::App { function, .. } => function.name(),
        }
    }

    /// Returns the arguments of the receiver; variables and constants have no arguments.
    pub fn args(&self) -> &[Term] {
        match self {
            Self::App { terms, .. } => terms,
            _ => &[],
        }
    }

    /// Returns the number of arguments of the receiver.
    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.args().len()
    }

    fn kind(&self) -> u8 {
        match self {
            Self::Var(_) => 0,
            Self::Const(_) => 1,
            Self::App { .. } => 2,
        }
    }

    /// Returns a list of all free variable symbols in the term.
    ///
    /// **Note**: In the list of free variables, each variable symbol appears only once even if it
    /// is present at multiple positions of the receiver term.
    ///
    /// **Example**:
    /// ```rust
    /// # use gentzen_fol::syntax::{Var, Const, Func, Term};
    /// # use itertools::Itertools;
    ///
    /// let x_sym = Var::from("x");
    /// let y_sym = Var::from("y");
    ///
    /// let x = Term::from(x_sym.clone());
    /// let y = Term::from(y_sym.clone());
    /// let c = Term::from(Const::from("c"));
    ///
    /// // f(x, g(y, 'c, x)):
    /// let t = Func::from("f").app(vec![x.clone(), Func::from("g").app(vec![y, c, x])]);
    ///
    /// assert_eq!(vec![&x_sym, &y_sym], t.free_vars().into_iter().sorted().collect::<Vec<_>>());
    /// ```
    pub fn free_vars(&self) -> Vec<&Var> {
        match self {
            Self::Var(variable) => vec![variable],
            Self::Const(_) => vec![],
            Self::App { terms, .. } => terms.iter().flat_map(|t| t.free_vars()).unique().collect(),
        }
    }

    /// Returns a list of all constant symbols in the term, each appearing once.
    pub fn constants(&self) -> Vec<&Const> {
        match self {
            Self::Var(_) => vec![],
            Self::Const(constant) => vec![constant],
            Self::App { terms, .. } => terms.iter().flat_map(|t| t.constants()).unique().collect(),
        }
    }

    /// Returns the signature of the receiver, consisting of its constants and function symbols.
    pub fn signature(&self) -> Result<Sig, Error> {
        let mut sig = Sig::new();
        match self {
            Self::Var(_) => {}
            Self::Const(constant) => sig.add_constant(constant.clone()),
            Self::App { function, terms } => {
                let arity = u8::try_from(terms.len()).map_err(|_| Error::ArityOverflow {
                    symbol: function.to_string(),
                    count: terms.len(),
                })?;
                sig.add_function(FuncSig {
                    symbol: function.clone(),
                    arity,
                })?;
                for term in terms.iter() {
                    sig = sig.merge(term.signature()?)?;
                }
            }
        }
        Ok(sig)
    }

    /// Returns an [equation] (formula) between the receiver and `term`.
    ///
    /// [equation]: crate::syntax::Fof::Equals
    pub fn equals(self, term: Term) -> Fof {
        Equals::new(self, term).into()
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name()
            .cmp(other.name())
            .then_with(|| self.arity().cmp(&other.arity()))
            .then_with(|| self.args().cmp(other.args()))
            .then_with(|| self.kind().cmp(&other.kind()))
    }
}

impl From<Var> for Term {
    fn from(variable: Var) -> Self {
        Self::Var(variable)
    }
}

impl From<Const> for Term {
    fn from(constant: Const) -> Self {
        Self::Const(constant)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Var(variable) => write!(f, "{}", variable),
            Self::Const(constant) => write!(f, "{}", constant),
            Self::App { function, terms } => {
                let ts: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
                write!(f, "{}({})", function, ts.join(", "))
            }
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}
