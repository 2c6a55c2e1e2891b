/// Benchmarks for the scope matching and indexing core
///
/// Measures:
/// - Per-mode predicate evaluation
/// - Scope universe derivation
/// - Substring filtering
/// - Entity matching

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scope_inspector::scope::{matching_roles, MatchMode, ScopeIndex, ScopeMatcher};
use scope_inspector::types::{Client, Role};

fn fixture(roles: usize, clients: usize, scopes_per_entity: usize) -> (Vec<Role>, Vec<Client>) {
    let role_list = (0..roles)
        .map(|i| {
            let mut role = Role::new(format!("role-{:04}", i));
            for j in 0..scopes_per_entity {
                role = role.with_scope(format!("queue:create-task:group-{}/task-{}", i % 16, j));
            }
            role.with_scope(format!("queue:claim-work:group-{}:*", i % 16))
        })
        .collect();

    let client_list = (0..clients)
        .map(|i| {
            let mut client = Client::new(format!("client-{:04}", i));
            for j in 0..scopes_per_entity {
                client = client.with_scope(format!("secrets:get:project-{}/secret-{}", i % 16, j));
            }
            client
        })
        .collect();

    (role_list, client_list)
}

fn bench_predicate(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicate");

    let cases = [
        ("exact", MatchMode::Exact),
        ("has_scope", MatchMode::HasScope),
        ("has_sub_scope", MatchMode::HasSubScope),
    ];

    for (name, mode) in cases {
        let matcher = ScopeMatcher::new(mode, "queue:create-task:group-3/task-7");
        group.bench_function(name, |b| {
            b.iter(|| matcher.matches(black_box("queue:create-task:group-3:*")));
        });
    }

    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [10usize, 100, 1000] {
        let (roles, clients) = fixture(size, size, 8);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| ScopeIndex::build(black_box(&roles), black_box(&clients)));
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let (roles, clients) = fixture(1000, 1000, 8);
    let index = ScopeIndex::build(&roles, &clients);

    c.bench_function("filter_substring", |b| {
        b.iter(|| index.filter(black_box("group-3")));
    });
}

fn bench_matching_entities(c: &mut Criterion) {
    let (roles, _) = fixture(1000, 0, 8);
    let matcher = ScopeMatcher::new(MatchMode::HasScope, "queue:claim-work:group-3:worker-1");

    c.bench_function("matching_roles_1000", |b| {
        b.iter(|| matching_roles(black_box(&roles), &matcher));
    });
}

criterion_group!(
    benches,
    bench_predicate,
    bench_index_build,
    bench_filter,
    bench_matching_entities
);
criterion_main!(benches);
