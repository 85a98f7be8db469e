//! Defines [`Sig`], the constants, function symbols and predicate symbols a formula uses.
use super::{Const, Error, Func, Pred};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

/// Is a function symbol paired with its arity.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FuncSig {
    pub symbol: Func,
    pub arity: u8,
}

impl fmt::Display for FuncSig {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "function: {}, arity: {}", self.symbol, self.arity)
    }
}

/// Is a predicate symbol paired with its arity.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PredSig {
    pub symbol: Pred,
    pub arity: u8,
}

impl fmt::Display for PredSig {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "predicate: {}, arity: {}", self.symbol, self.arity)
    }
}

/// Is the signature of a first-order formula: its constants, and its function and predicate
/// symbols together with their arities.
///
/// **Note**: The symbols of a signature are kept in order, so every consumer of a signature
/// visits its symbols in the same order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Sig {
    constants: BTreeSet<Const>,
    functions: BTreeMap<Func, FuncSig>,
    predicates: BTreeMap<Pred, PredSig>,
}

impl Sig {
    /// Creates an empty signature.
    pub fn new() -> Self {
        Self {
            constants: BTreeSet::new(),
            functions: BTreeMap::new(),
            predicates: BTreeMap::new(),
        }
    }

    /// Merges the signatures of `value` into one. Fails on the first symbol that is used with
    /// two different arities.
    pub fn new_from_signatures<I>(value: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Sig>,
    {
        let mut sig = Self::new();
        for s in value {
            sig = sig.merge(s)?;
        }
        Ok(sig)
    }

    /// Adds `constant` to the receiver.
    pub fn add_constant(&mut self, constant: Const) {
        self.constants.insert(constant);
    }

    /// Adds `function` to the receiver, unless it is already present with a different arity.
    pub fn add_function(&mut self, function: FuncSig) -> Result<(), Error> {
        if let Some(sig) = self.functions.get(&function.symbol) {
            if *sig != function {
                return Err(Error::InconsistentFuncSig {
                    this: sig.clone(),
                    other: function,
                });
            }
        } else {
            self.functions.insert(function.symbol.clone(), function);
        }
        Ok(())
    }

    /// Adds `predicate` to the receiver, unless it is already present with a different arity.
    pub fn add_predicate(&mut self, predicate: PredSig) -> Result<(), Error> {
        if let Some(sig) = self.predicates.get(&predicate.symbol) {
            if *sig != predicate {
                return Err(Error::InconsistentPredSig {
                    this: sig.clone(),
                    other: predicate,
                });
            }
        } else {
            self.predicates.insert(predicate.symbol.clone(), predicate);
        }
        Ok(())
    }

    /// Consumes the receiver and returns its union with `other`.
    pub fn merge(mut self, other: Self) -> Result<Self, Error> {
        for c in other.constants {
            self.add_constant(c);
        }
        for f in other.functions.values() {
            self.add_function(f.clone())?;
        }
        for p in other.predicates.values() {
            self.add_predicate(p.clone())?;
        }

        Ok(self)
    }

    /// Returns the constants of this signature.
    pub fn constants(&self) -> &BTreeSet<Const> {
        &self.constants
    }

    /// Returns the functions of this signature.
    pub fn functions(&self) -> &BTreeMap<Func, FuncSig> {
        &self.functions
    }

    /// Returns the predicates of this signature.
    pub fn predicates(&self) -> &BTreeMap<Pred, PredSig> {
        &self.predicates
    }
}

impl Default for Sig {
    fn default() -> Self {
        Self::new()
    }
}
