/*! Implements substitution and variable renaming on first-order terms and formulae. */
mod substitution;

pub use substitution::{Substitution, TermBased, VariableRenaming};
