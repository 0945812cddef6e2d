use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use verdict::cdcl::branching_strategies::Naive;
use verdict::cdcl::deletion_strategies::ActivityDeletion;
use verdict::cdcl::learning_schemes::FirstUIP;
use verdict::cdcl::restart_policies::RestartLuby;
use verdict::{CDCLSolver, Solver, CNF};

/// Unsatisfiable pigeonhole instance over `holes + 1` pigeons.
fn pigeonhole(holes: usize) -> CNF {
    let pigeons = holes + 1;
    let var = |p: usize, h: usize| (p * holes + h + 1) as i32;
    let mut clauses = Vec::new();
    for p in 0..pigeons {
        clauses.push((0..holes).map(|h| var(p, h)).collect::<Vec<_>>());
    }
    for h in 0..holes {
        for p in 0..pigeons {
            for q in p + 1..pigeons {
                clauses.push(vec![-var(p, h), -var(q, h)]);
            }
        }
    }
    CNF::load(&clauses).unwrap()
}

/// Satisfiable chain: every variable implies the next, the first is
/// forced, so the whole formula solves by propagation.
fn implication_chain(length: usize) -> CNF {
    let mut clauses = vec![vec![1]];
    for v in 1..length as i32 {
        clauses.push(vec![-v, v + 1]);
    }
    CNF::load(&clauses).unwrap()
}

fn bench_pigeonhole(c: &mut Criterion) {
    let mut group = c.benchmark_group("pigeonhole");
    for &holes in &[4, 5, 6] {
        let formula = pigeonhole(holes);
        group.bench_with_input(BenchmarkId::new("vsids", holes), &formula, |b, formula| {
            b.iter(|| CDCLSolver::default().solve(formula))
        });
        group.bench_with_input(BenchmarkId::new("naive", holes), &formula, |b, formula| {
            b.iter(|| {
                CDCLSolver::new(
                    Naive,
                    FirstUIP,
                    ActivityDeletion::default(),
                    RestartLuby::default(),
                )
                .solve(formula)
            })
        });
    }
    group.finish();
}

fn bench_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("implication-chain");
    for &length in &[1_000, 10_000] {
        let formula = implication_chain(length);
        group.bench_with_input(BenchmarkId::from_parameter(length), &formula, |b, formula| {
            b.iter(|| CDCLSolver::default().solve(formula))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pigeonhole, bench_propagation);
criterion_main!(benches);
