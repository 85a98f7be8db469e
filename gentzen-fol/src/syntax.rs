/*! Defines an abstract syntax tree (AST) for first-order terms and formulae with equality. */
pub mod formula;
mod macros;
pub mod signature;
mod symbol;
pub mod term;

pub use formula::{
    fof::{Fof, Signed},
    And, Atom, Equals, Exists, Forall, Formula, Not, Or,
};
pub use signature::Sig;
pub use symbol::{Const, Func, Pred, Var, EQ_SYM};
pub use term::Term;

use signature::{FuncSig, PredSig};
use thiserror::Error;

/// Is the type of errors arising from inconsistencies in the syntax of formulae.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when a function symbol appears with different arities.
    #[error("inconsistent function signatures: `{this}` and `{other}`")]
    InconsistentFuncSig { this: FuncSig, other: FuncSig },

    /// Is returned when a predicate symbol appears with different arities.
    #[error("inconsistent predicate signatures: `{this}` and `{other}`")]
    InconsistentPredSig { this: PredSig, other: PredSig },

    /// Is returned when a symbol is applied to more arguments than an arity can hold.
    #[error("symbol `{symbol}` is applied to {count} arguments, more than {}", u8::MAX)]
    ArityOverflow { symbol: String, count: usize },
}
