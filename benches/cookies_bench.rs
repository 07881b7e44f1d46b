use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use webdriver_cookie::cookies::Cookie;
use webdriver_cookie::dns::{DnsResolverWithOverrides, OfflineResolver};

fn offline_resolver() -> DnsResolverWithOverrides {
    let mut overrides = HashMap::new();
    overrides.insert(
        Cow::Borrowed("example.com"),
        vec!["127.0.0.1:0".parse().unwrap()],
    );
    DnsResolverWithOverrides::new(Arc::new(OfflineResolver), overrides)
}

fn benchmark_cookie_build(c: &mut Criterion) {
    let resolver = offline_resolver();

    c.bench_function("cookie_build_with_domain", |b| {
        b.iter(|| {
            Cookie::with_resolver(
                black_box("session"),
                black_box("abc123"),
                black_box("Example.com"),
                black_box("/"),
                None,
                true,
                &resolver,
            )
            .unwrap()
        })
    });
}

fn benchmark_cookie_set(c: &mut Criterion) {
    let resolver = offline_resolver();
    let cookies: Vec<_> = (0..100)
        .map(|i| {
            Cookie::with_resolver(
                format!("cookie{}", i),
                "val",
                "example.com",
                "/",
                None,
                false,
                &resolver,
            )
            .unwrap()
        })
        .collect();

    c.bench_function("cookie_hash_set_100", |b| {
        b.iter(|| {
            let set: HashSet<&Cookie> = black_box(&cookies).iter().collect();
            black_box(set.len())
        })
    });
}

criterion_group!(benches, benchmark_cookie_build, benchmark_cookie_set);
criterion_main!(benches);
