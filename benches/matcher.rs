use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use pattern_router::{compile, create_matcher, Matcher};

fn routes() -> Vec<(&'static str, usize)> {
    vec![
        ("/", 0),
        ("/about", 1),
        ("/users/:id", 2),
        ("/users/:id/posts(/:post)", 3),
        ("/static/*", 4),
    ]
}

fn matcher_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher-find");

    group.bench_function("single-route", |b| {
        let matcher = create_matcher(vec![("/hello/:name", 1_usize)]);
        b.iter_with_large_drop(|| matcher.find("/hello/world"))
    });

    group.bench_function("last-route", |b| {
        let matcher = create_matcher(routes());
        b.iter_with_large_drop(|| matcher.find("/static/css/site.css?v=1"))
    });

    group.bench_function("miss", |b| {
        let matcher = create_matcher(routes());
        b.iter_with_large_drop(|| matcher.find("/nowhere/at/all"))
    });
}

fn matcher_first_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher-first-find");

    group.bench_function("last-route", |b| {
        b.iter_batched_ref(
            || create_matcher(routes()),
            |matcher: &mut Matcher<usize>| matcher.find("/static/app.js").is_some(),
            BatchSize::SmallInput,
        )
    });
}

fn pattern_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern-compile");

    group.bench_function("optional", |b| {
        b.iter(|| compile("/users/:id/posts(/:post)"))
    });
}

criterion_group!(benches, matcher_find, matcher_first_find, pattern_compile);
criterion_main!(benches);
