use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trie_router::Router;

// ============================================================================
// Route tables
// ============================================================================

fn mixed_router() -> Router<&'static str> {
    let mut router = Router::new();
    for (pattern, handler) in [
        ("/users/", "01"),
        ("/users/*catchall", "02"),
        ("/users/static/*filename", "03"),
        ("/users/:id(/[0-9]{1,10}/ig)/*filename", "04"),
        ("/users/:id(/[0-9]{1,10}/ig)/internal/*filename", "05"),
        ("/test/regex/prefix-:param([a-z]*)", "06"),
        ("/test/regex/:param([a-z]{3})suffix", "07"),
        ("/test/wildcard/prefix*wildcard", "08"),
        ("/test/param/prefix:param", "09"),
        ("/:param(/[a-z]*/i)/", "10"),
        ("/users/static/static/*filename", "11"),
    ] {
        router.register(pattern, handler).expect("valid route");
    }
    router
}

fn resource_router() -> Router<&'static str> {
    let mut router = Router::new();
    for (pattern, handler) in [
        ("/companies", "01"),
        ("/companies/:id", "02"),
        ("/companies/:id/users", "03"),
        ("/companies/:id/users/:id", "04"),
        ("/users", "05"),
        ("/users/:id", "06"),
        ("/users/:id/*file", "07"),
    ] {
        router.register(pattern, handler).expect("valid route");
    }
    router
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_mixed_lookup(c: &mut Criterion) {
    let router = mixed_router();
    let mut group = c.benchmark_group("mixed_lookup");

    for (name, path) in [
        ("static", "/users/"),
        ("catchall", "/users/this-should-be-catched"),
        ("static_wildcard", "/users/static/some-file.png"),
        ("regex_wildcard", "/users/1234/some-file.png"),
        ("regex_static_wildcard", "/users/1234/internal/some-file.png"),
        ("prefix_regex", "/test/regex/prefix-abcdef"),
        ("regex_suffix", "/test/regex/abcsuffix"),
        ("inline_wildcard", "/test/wildcard/prefix-with-cool-wildcard"),
        ("inline_param", "/test/param/prefix-with-cool-parameter"),
        ("root_regex", "/abcdefG/"),
        ("nested_static_wildcard", "/users/static/static/cool/filename.png"),
        ("miss", "/nothing/here"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), path, |b, path| {
            b.iter(|| router.match_path(black_box(path)));
        });
    }
    group.finish();
}

fn bench_resource_lookup(c: &mut Criterion) {
    let router = resource_router();
    let mut group = c.benchmark_group("resource_lookup");

    for (name, path) in [
        ("companies", "/companies"),
        ("company", "/companies/cool-id-1234"),
        ("company_users", "/companies/cool-id-1234/users"),
        ("company_user", "/companies/cool-id-1234/users/12345-lol"),
        ("users", "/users"),
        ("user", "/users/cool-id-1234"),
        ("user_file", "/users/cool-id-1234/some/file.png"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), path, |b, path| {
            b.iter(|| router.match_path(black_box(path)));
        });
    }
    group.finish();
}

fn bench_registration(c: &mut Criterion) {
    c.bench_function("register_mixed_table", |b| b.iter(mixed_router));
}

criterion_group!(
    benches,
    bench_mixed_lookup,
    bench_resource_lookup,
    bench_registration
);
criterion_main!(benches);
