/*! Implements a fair enumeration of the ground terms over a signature.

[`TermGenerator`] keeps the terms it knows in the order they became known. Whenever it runs
out of candidates, it *admits* the next known term: it schedules every function application
whose arguments are drawn from the terms admitted so far and that uses the newly admitted term
at least once. As a consequence, if the generator knows `K` terms after some call, every
application of a function of arity `n` to those `K` terms is known after at most `Σ K^n`
further calls.
*/
use gentzen_fol::syntax::{signature::FuncSig, Const, Sig, Term};
use itertools::Itertools;
use std::collections::{BTreeSet, VecDeque};

/// Is the prefix of the names of the parameters minted by [`TermGenerator::fresh`].
pub const PARAMETER_PREFIX: &str = "e#";

/// Enumerates ground terms over the functions of a signature, starting from a set of seed
/// terms.
#[derive(Clone, Debug)]
pub struct TermGenerator {
    functions: Vec<FuncSig>,
    known: Vec<Term>,
    index: BTreeSet<Term>,
    admitted: usize,
    candidates: VecDeque<Term>,
    parameters: usize,
}

impl TermGenerator {
    /// Creates a new generator over the functions of `sig`, knowing `seeds` in the given order.
    /// If `seeds` is empty, a fresh parameter is minted so the domain is never empty.
    pub fn new<I>(sig: &Sig, seeds: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let functions = sig.functions().values().cloned().collect_vec();
        let mut generator = Self {
            functions,
            known: Vec::new(),
            index: BTreeSet::new(),
            admitted: 0,
            candidates: VecDeque::new(),
            parameters: 0,
        };

        seeds.into_iter().for_each(|seed| generator.learn(seed));
        if generator.known.is_empty() {
            generator.fresh();
        }

        // nullary functions need no arguments to be admitted:
        let nullary = generator
            .functions
            .iter()
            .filter(|f| f.arity == 0)
            .map(|f| f.symbol.clone().app(vec![]))
            .collect_vec();
        generator.candidates.extend(nullary);
        generator
    }

    /// Returns the known terms in the order they became known.
    #[inline(always)]
    pub fn known(&self) -> &[Term] {
        &self.known
    }

    /// Returns the next term in the enumeration. When there is nothing left to enumerate,
    /// a fresh parameter is returned.
    pub fn generate(&mut self) -> Term {
        loop {
            while let Some(candidate) = self.candidates.pop_front() {
                if !self.index.contains(&candidate) {
                    self.learn(candidate.clone());
                    return candidate;
                }
            }

            if self.admitted < self.known.len() {
                self.admit();
            } else {
                return self.fresh();
            }
        }
    }

    /// Mints a new parameter that is not among the known terms and makes it known.
    pub fn fresh(&mut self) -> Term {
        loop {
            let term: Term = Const::from(format!("{}{}", PARAMETER_PREFIX, self.parameters)).into();
            self.parameters += 1;
            if !self.index.contains(&term) {
                self.learn(term.clone());
                return term;
            }
        }
    }

    fn learn(&mut self, term: Term) {
        if self.index.insert(term.clone()) {
            self.known.push(term);
        }
    }

    // schedules the applications that use the next known term and earlier ones only
    fn admit(&mut self) {
        let position = self.admitted;
        self.admitted += 1;

        for function in self.functions.iter().filter(|f| f.arity > 0) {
            let tuples = (0..function.arity)
                .map(|_| 0..=position)
                .multi_cartesian_product()
                .filter(|tuple| tuple.contains(&position));
            for tuple in tuples {
                let args = tuple.into_iter().map(|i| self.known[i].clone()).collect_vec();
                self.candidates.push_back(function.symbol.clone().app(args));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gentzen_fol::{
        syntax::{Formula, Func},
        term,
    };

    fn sig(formula: gentzen_fol::syntax::Fof) -> Sig {
        formula.signature().unwrap()
    }

    #[test]
    fn empty_seeds() {
        let generator = TermGenerator::new(&Sig::new(), vec![]);
        assert_eq!(1, generator.known().len());
        assert_eq!("'e#0", generator.known()[0].to_string());
    }

    #[test]
    fn no_functions() {
        let mut generator = TermGenerator::new(&Sig::new(), vec![term!(@a)]);
        assert_eq!("'e#0", generator.generate().to_string());
        assert_eq!("'e#1", generator.generate().to_string());
        assert_eq!(3, generator.known().len());
    }

    #[test]
    fn fresh_avoids_known() {
        let seed: Term = Const::from("e#0").into();
        let mut generator = TermGenerator::new(&Sig::new(), vec![seed.clone()]);
        let fresh = generator.fresh();
        assert_ne!(seed, fresh);
        assert_eq!("'e#1", fresh.to_string());
    }

    #[test]
    fn nullary_first() {
        let sig = sig(gentzen_fol::fof!(P(f(x), k())));
        let mut generator = TermGenerator::new(&sig, vec![term!(@a)]);
        assert_eq!(term!(k()), generator.generate());
        assert_eq!(term!(f(@a)), generator.generate());
        assert_eq!(term!(f(k())), generator.generate());
        assert_eq!(term!(f(f(@a))), generator.generate());
    }

    #[test]
    fn admission_order() {
        let sig = sig(gentzen_fol::fof!(P(f(x), g(x, y))));
        let mut generator = TermGenerator::new(&sig, vec![term!(@c)]);
        let generated = (0..5).map(|_| generator.generate()).collect_vec();
        assert_eq!(
            vec![
                term!(f(@c)),
                term!(g(@c, @c)),
                term!(f(f(@c))),
                term!(g(@c, f(@c))),
                term!(g(f(@c), @c)),
            ],
            generated
        );
    }

    #[test]
    fn fairness() {
        let sig = sig(gentzen_fol::fof!(P(f(x), g(x, y))));
        let mut generator = TermGenerator::new(&sig, vec![term!(@c)]);
        for _ in 0..5 {
            generator.generate();
        }

        let known = generator.known().to_vec();
        assert_eq!(6, known.len());
        for _ in 0..(6 + 6 * 6) {
            generator.generate();
        }

        let index: BTreeSet<_> = generator.known().iter().cloned().collect();
        for t in &known {
            assert!(index.contains(&Func::from("f").app(vec![t.clone()])));
            for s in &known {
                assert!(index.contains(&Func::from("g").app(vec![t.clone(), s.clone()])));
            }
        }
    }
}
