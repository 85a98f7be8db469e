/*! Implements the signed analytic tableau for first-order formulae with equality.

A [`Tableau`] is a node of the search: it owns a [`Sequent`] with the signed formulae of its
branch and decomposes one formula per [step]. The rules follow the sequent calculus:

* literals (atoms and equations) are moved to the expanded set,
* `T ¬φ` and `F ¬φ` continue with `F φ` and `T φ`,
* `T φ ∧ ψ` and `F φ ∨ ψ` continue with both operands on the same branch,
* `F φ ∧ ψ` and `T φ ∨ ψ` split the branch into two children, one for each operand,
* `T ∀x. φ` and `F ∃x. φ` are instantiated for every known term not yet used for them and are
then deferred until new terms are generated,
* `F ∀x. φ` and `T ∃x. φ` are instantiated once with a fresh parameter.

A branch closes as soon as a formula is asserted with both signs and opens when nothing is left
to decompose. The proof tree of a node records the state of the branch after each step.

[step]: Tableau::step
*/
pub mod bounder;
pub mod sequent;
pub mod strategy;

pub use sequent::{Contradiction, Probe, Sequent};
pub use strategy::{FailFast, Ordered, Strategy};

use crate::{
    equality::equality_axioms,
    generator::TermGenerator,
    proof::ProofTree,
    trace::{BRANCH, CLOSE, GENERATE, OPEN, STEP, TABLEAU_STEP},
    Error,
};
use gentzen_fol::syntax::{Fof, Formula, Signed, Term, Var};
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};

/// Is the status of a [`Tableau`] node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    /// The branch has formulae left to decompose.
    Unresolved,

    /// The branch is split and its children are not resolved yet.
    Branching,

    /// Every branch below the node is closed by a contradiction.
    Closed,

    /// A branch below the node is saturated without a contradiction.
    Open,
}

/// Is a node of a tableau, together with the subtree of nodes below it.
#[derive(Clone)]
pub struct Tableau<Stg: Strategy> {
    id: u64,
    parent: Option<u64>,
    sequent: Sequent,

    /// Maps every term known to the branch to the universal formulae it has instantiated.
    registry: BTreeMap<Term, BTreeSet<Fof>>,
    generator: TermGenerator,
    strategy: Stg,
    children: Vec<Tableau<Stg>>,
    status: Status,
    tree: ProofTree,

    /// Is the path from the root of `tree` to the node labelled with the current state.
    trail: Vec<usize>,
}

impl<Stg: Strategy> Tableau<Stg> {
    /// Creates the root of a tableau that refutes `formula` being false. The free variables
    /// and constants of `formula` are the initial terms of the branch. If `equality` is true,
    /// the axioms of equality over the signature of `formula` are asserted as well.
    pub fn new(formula: &Fof, strategy: Stg, equality: bool) -> Result<Self, Error> {
        let sig = formula.signature()?;
        let seeds = formula
            .free_vars()
            .into_iter()
            .map(|v| Term::from(v.clone()))
            .chain(formula.constants().into_iter().map(|c| Term::from(c.clone())))
            .collect_vec();
        let generator = TermGenerator::new(&sig, seeds);
        let registry = generator
            .known()
            .iter()
            .map(|t| (t.clone(), BTreeSet::new()))
            .collect();

        let axioms = if equality {
            equality_axioms(&sig)
        } else {
            Vec::new()
        };

        let mut sequent = Sequent::new();
        let contradiction = std::iter::once((formula.clone(), false))
            .chain(axioms.into_iter().map(|axiom| (axiom, true)))
            .map(|(formula, sign)| sequent.insert(formula, sign))
            .find_map(Result::err);

        let tree = ProofTree::new(sequent.to_string());
        let mut tableau = Self {
            id: rand::random(),
            parent: None,
            sequent,
            registry,
            generator,
            strategy,
            children: Vec::new(),
            status: Status::Unresolved,
            tree,
            trail: Vec::new(),
        };
        if let Some(contradiction) = contradiction {
            tableau.close(contradiction);
        }
        Ok(tableau)
    }

    #[inline(always)]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the id of the node this node was split from.
    #[inline(always)]
    pub fn parent(&self) -> Option<u64> {
        self.parent
    }

    #[inline(always)]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the state of the branch at this node.
    #[inline(always)]
    pub fn sequent(&self) -> &Sequent {
        &self.sequent
    }

    /// Returns the children of a node that is split and not yet resolved.
    #[inline(always)]
    pub fn children(&self) -> &[Tableau<Stg>] {
        &self.children
    }

    /// Returns the terms known to the branch at this node.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.registry.keys()
    }

    /// Returns the largest number of terms known to a branch below this node.
    pub fn term_count(&self) -> usize {
        self.children
            .iter()
            .map(Tableau::term_count)
            .fold(self.registry.len(), usize::max)
    }

    /// Returns the proof tree recorded at this node, excluding the trees of unresolved
    /// children.
    #[inline(always)]
    pub fn tree(&self) -> &ProofTree {
        &self.tree
    }

    /// Consumes the receiver and returns its proof tree, including the partial trees of its
    /// unresolved children.
    pub fn into_tree(mut self) -> ProofTree {
        let trees = self.children.drain(..).map(Tableau::into_tree).collect_vec();
        trees.into_iter().for_each(|tree| self.attach(tree));
        self.tree
    }

    /// Takes one step on the receiver and returns its new status. An unresolved node
    /// decomposes one formula of its branch; a split node steps its leftmost unresolved child.
    /// Stepping a closed or open node has no effect.
    pub fn step(&mut self) -> Status {
        match self.status {
            Status::Unresolved => {
                let span = span!(tracing::Level::TRACE, TABLEAU_STEP, node_id = self.id);
                let _enter = span.enter();
                match self.expand() {
                    Ok(status) => self.status = status,
                    Err(contradiction) => self.close(contradiction),
                }
            }
            Status::Branching => {
                if let Some(child) = self
                    .children
                    .iter_mut()
                    .find(|c| matches!(c.status, Status::Unresolved | Status::Branching))
                {
                    child.step();
                }
                self.resolve();
            }
            Status::Closed | Status::Open => {}
        }
        self.status
    }

    fn expand(&mut self) -> Result<Status, Contradiction> {
        let (formula, sign) = match self.strategy.select(&self.sequent) {
            Some(selected) => selected,
            None => return Ok(self.saturate()),
        };
        self.sequent.remove(&formula);
        debug!(
            event = STEP,
            node_id = self.id,
            formula = %Signed::new(formula.clone(), sign),
        );

        match &formula {
            Fof::Atom(_) | Fof::Equals(_) => self.sequent.expand(formula.clone(), sign),
            Fof::Not(this) => self.sequent.insert(this.formula().clone(), !sign)?,
            Fof::And(this) if sign => {
                self.sequent.insert(this.left().clone(), sign)?;
                self.sequent.insert(this.right().clone(), sign)?;
            }
            Fof::Or(this) if !sign => {
                self.sequent.insert(this.left().clone(), sign)?;
                self.sequent.insert(this.right().clone(), sign)?;
            }
            Fof::And(this) => return self.branch(this.left(), this.right(), sign),
            Fof::Or(this) => return self.branch(this.left(), this.right(), sign),
            Fof::Forall(this) if sign => {
                self.instantiate(&formula, this.variable(), this.formula(), sign)?
            }
            Fof::Exists(this) if !sign => {
                self.instantiate(&formula, this.variable(), this.formula(), sign)?
            }
            Fof::Forall(this) => self.witness(this.variable(), this.formula(), sign)?,
            Fof::Exists(this) => self.witness(this.variable(), this.formula(), sign)?,
        }

        self.advance();
        Ok(Status::Unresolved)
    }

    // the active set is empty
    fn saturate(&mut self) -> Status {
        if self.sequent.restore() {
            let term = self.generator.generate();
            debug!(event = GENERATE, node_id = self.id, term = %term);
            self.register(term);
            Status::Unresolved
        } else {
            info!(event = OPEN, node_id = self.id, sequent = %self.sequent);
            Status::Open
        }
    }

    fn branch(&mut self, left: &Fof, right: &Fof, sign: bool) -> Result<Status, Contradiction> {
        match (self.sequent.probe(left, sign), self.sequent.probe(right, sign)) {
            (Probe::Holds, _) | (_, Probe::Holds) => {}
            (Probe::Conflicts(formula, s), Probe::Conflicts(other, t)) => {
                self.close_side(formula, s);
                return Err(Contradiction::new(self.sequent.conflict_label(other, t)));
            }
            (Probe::Conflicts(formula, s), Probe::Unknown) => {
                self.close_side(formula, s);
                self.sequent.insert(right.clone(), sign)?;
            }
            (Probe::Unknown, Probe::Conflicts(formula, s)) => {
                self.close_side(formula, s);
                self.sequent.insert(left.clone(), sign)?;
            }
            (Probe::Unknown, Probe::Unknown) => return Ok(self.split(left, right, sign)),
        }

        self.advance();
        Ok(Status::Unresolved)
    }

    fn split(&mut self, left: &Fof, right: &Fof, sign: bool) -> Status {
        let mut children = Vec::with_capacity(2);
        for &side in &[left, right] {
            let mut child = self.spawn();
            let inserted = child.sequent.insert(side.clone(), sign);
            child.tree = ProofTree::new(child.sequent.to_string());
            info!(
                event = BRANCH,
                node_id = child.id,
                parent = self.id,
                formula = %Signed::new(side.clone(), sign),
            );
            if let Err(contradiction) = inserted {
                child.close(contradiction);
            }
            children.push(child);
        }
        self.children = children;
        Status::Branching
    }

    fn spawn(&self) -> Self {
        Self {
            id: rand::random(),
            parent: Some(self.id),
            sequent: self.sequent.clone(),
            registry: self.registry.clone(),
            generator: self.generator.clone(),
            strategy: self.strategy.clone(),
            children: Vec::new(),
            status: Status::Unresolved,
            tree: ProofTree::new(""),
            trail: Vec::new(),
        }
    }

    fn resolve(&mut self) {
        let status = if self.children.iter().any(|c| c.status == Status::Open) {
            Status::Open
        } else if self.children.iter().all(|c| c.status == Status::Closed) {
            Status::Closed
        } else {
            return;
        };

        let trees = self.children.drain(..).map(Tableau::into_tree).collect_vec();
        trees.into_iter().for_each(|tree| self.attach(tree));
        self.status = status;
    }

    fn instantiate(
        &mut self,
        formula: &Fof,
        variable: &Var,
        body: &Fof,
        sign: bool,
    ) -> Result<(), Contradiction> {
        let instances = self
            .registry
            .iter_mut()
            .filter_map(|(term, used)| {
                if used.insert(formula.clone()) {
                    Some(body.instantiate(variable, term))
                } else {
                    None
                }
            })
            .collect_vec();
        for instance in instances {
            self.sequent.insert(instance, sign)?;
        }
        self.sequent.defer(formula.clone(), sign);
        Ok(())
    }

    fn witness(&mut self, variable: &Var, body: &Fof, sign: bool) -> Result<(), Contradiction> {
        let witness = self.generator.fresh();
        debug!(event = GENERATE, node_id = self.id, term = %witness);
        let instance = body.instantiate(variable, &witness);
        self.register(witness);
        self.sequent.insert(instance, sign)
    }

    fn register(&mut self, term: Term) {
        self.registry.entry(term).or_insert_with(BTreeSet::new);
    }

    fn close(&mut self, contradiction: Contradiction) {
        info!(event = CLOSE, node_id = self.id, sequent = %contradiction.label());
        self.attach(ProofTree::new(contradiction.into_label()));
        self.status = Status::Closed;
    }

    // records a side of a split that closes without being explored
    fn close_side(&mut self, formula: &Fof, sign: bool) {
        let label = self.sequent.conflict_label(formula, sign);
        info!(event = CLOSE, node_id = self.id, sequent = %label);
        self.attach(ProofTree::new(label));
    }

    fn leaf_mut(&mut self) -> &mut ProofTree {
        let mut leaf = &mut self.tree;
        for &index in &self.trail {
            leaf = &mut leaf.children[index];
        }
        leaf
    }

    fn attach(&mut self, tree: ProofTree) {
        self.leaf_mut().join(tree);
    }

    // moves the trail to a new node labelled with the current state
    fn advance(&mut self) {
        let label = self.sequent.to_string();
        let leaf = self.leaf_mut();
        if leaf.label() != label {
            let position = leaf.children().len();
            leaf.join(ProofTree::new(label));
            self.trail.push(position);
        }
    }
}
