use criterion::{criterion_group, criterion_main, Criterion};
use gentzen_fol::{fof, syntax::Fof};
use gentzen_tableau::{Prover, ProverConfig, Selection};

fn propositional() -> Vec<Fof> {
    vec![
        fof!({ [(P()) -> (Q())] & [(Q()) -> (R())] } -> { (P()) -> (R()) }),
        fof!({ [(P()) | (Q())] & [{ (P()) -> (R()) } & { (Q()) -> (R()) }] } -> { R() }),
        fof!({ { P() } & { (Q()) | (R()) } } <=> { { (P()) & (Q()) } | { (P()) & (R()) } }),
    ]
}

fn first_order() -> Vec<Fof> {
    vec![
        fof!((!x . (P(x))) -> (?x . (P(x)))),
        fof!(?x . {(D(x)) -> (!y . (D(y)))}),
        fof!({ !x . [(P(x)) -> (Q(x))] } -> { [!x . (P(x))] -> [!x . (Q(x))] }),
    ]
}

fn equality() -> Vec<Fof> {
    vec![
        fof!(?x . ((x) = (x))),
        fof!(!x, y . {([x] = [y]) -> ([f(x)] = [f(y)])}),
    ]
}

fn solve_all(formulae: &[Fof], strategy: Selection) {
    let prover = Prover::new(ProverConfig {
        step_limit: Some(10_000),
        strategy,
        ..ProverConfig::default()
    });
    for formula in formulae {
        prover.prove(formula).unwrap();
    }
}

fn propositional_benchmark(c: &mut Criterion) {
    let formulae = propositional();
    c.bench_function("propositional", |b| {
        b.iter(|| solve_all(&formulae, Selection::FailFast))
    });
    c.bench_function("propositional_ordered", |b| {
        b.iter(|| solve_all(&formulae, Selection::Ordered))
    });
}

fn first_order_benchmark(c: &mut Criterion) {
    let formulae = first_order();
    c.bench_function("first_order", |b| {
        b.iter(|| solve_all(&formulae, Selection::FailFast))
    });
}

fn equality_benchmark(c: &mut Criterion) {
    let formulae = equality();
    c.bench_function("equality", |b| {
        b.iter(|| solve_all(&formulae, Selection::FailFast))
    });
}

criterion_group!(
    benches,
    propositional_benchmark,
    first_order_benchmark,
    equality_benchmark
);
criterion_main!(benches);
