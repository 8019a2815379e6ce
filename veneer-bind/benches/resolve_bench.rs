//! Resolution benchmarks using criterion.
//!
//! Run with: cargo bench --bench resolve_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use veneer_bind::{
    CandidateMethod, DelegationEngine, Directive, MethodDirective, MethodId, PackMode, Signature,
    SignatureFlags, TypeId, TypeTable,
};

struct Setup {
    table: TypeTable,
    source: Signature,
    candidates: Vec<CandidateMethod>,
}

fn setup() -> Setup {
    let mut table = TypeTable::new();
    let object = table.intern("Object");
    let string = table.intern("String");
    let integer = table.intern("Integer");
    let objects = table.intern("Object[]");
    let host = table.intern("Host");
    table.declare_assignable(string, object);
    table.declare_assignable(integer, object);
    table.declare_sequence(objects, object);

    let source = Signature::new(
        host,
        vec![string, integer, string],
        object,
        SignatureFlags::empty(),
    );

    let plain = |id: u32, name: &str, params: Vec<TypeId>| {
        CandidateMethod::new(
            MethodId::new(id),
            name,
            Signature::new(host, params, object, SignatureFlags::empty()),
        )
    };

    let candidates = vec![
        plain(0, "typed", vec![string, object, string]),
        plain(1, "wide", vec![object, object, object]),
        plain(2, "partial", vec![object]).with_param_directives(vec![vec![
            Directive::argument(1),
        ]]),
        plain(3, "catch_all", vec![objects]).with_param_directives(vec![vec![
            Directive::AllArguments {
                mode: PackMode::Slack,
            },
        ]]),
        plain(4, "prioritized", vec![object, object, object])
            .with_method_directives(vec![MethodDirective::Priority(3)]),
        plain(5, "mismatched", vec![integer, integer, integer]),
    ];

    Setup {
        table,
        source,
        candidates,
    }
}

fn bench_resolve(c: &mut Criterion) {
    let setup = setup();
    let engine = DelegationEngine::new(&setup.table);

    let mut group = c.benchmark_group("delegation_resolve");

    group.bench_function("six_candidates", |b| {
        b.iter(|| {
            black_box(
                engine
                    .resolve(black_box(&setup.source), black_box(&setup.candidates))
                    .unwrap(),
            )
        });
    });

    group.bench_function("single_candidate", |b| {
        let only = &setup.candidates[..1];
        b.iter(|| {
            black_box(
                engine
                    .resolve(black_box(&setup.source), black_box(only))
                    .unwrap(),
            )
        });
    });

    group.bench_function("ambiguous_pair", |b| {
        let twins = vec![setup.candidates[1].clone(), setup.candidates[1].clone()];
        b.iter(|| {
            black_box(
                engine
                    .resolve(black_box(&setup.source), black_box(&twins))
                    .unwrap(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
