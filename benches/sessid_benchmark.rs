use criterion::{criterion_group, criterion_main, Criterion};

use sessid::{IdentityResolver, MemoryStore, RequestContext, Session, User};

const NUM_USERS: usize = 10_000;

fn resolver() -> IdentityResolver<MemoryStore> {
    let store = (0..NUM_USERS)
        .map(|i| User::new(format!("user-{}", i)).with_admin(i % 10 == 0))
        .collect();
    IdentityResolver::new(store)
}

fn session() -> Session {
    let mut session = Session::new();
    session.insert("user_id", format!("user-{}", NUM_USERS / 2));
    session
}

pub fn first_resolution(c: &mut Criterion) {
    let rt = rt();
    let resolver = resolver();
    let session = session();

    c.bench_function("first_resolution", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut ctx = RequestContext::new(session.clone());
                resolver.is_admin(&mut ctx).await.unwrap();
            });
        });
    });
}

pub fn cached_resolution(c: &mut Criterion) {
    const NUM_CHECKS: usize = 100;

    let rt = rt();
    let resolver = resolver();
    let session = session();

    c.bench_function("cached_resolution", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut ctx = RequestContext::new(session.clone());
                for _ in 0..NUM_CHECKS {
                    resolver.is_logged_in(&mut ctx).await.unwrap();
                    resolver.is_admin(&mut ctx).await.unwrap();
                }
            });
        });
    });
}

fn rt() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

criterion_group!(benches, first_resolution, cached_resolution);
criterion_main!(benches);
