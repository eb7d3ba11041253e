use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use presign_core::time::now;
use presign_s3::{derive_signing_key, presign_url, Credential, PresignRequest};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("presign");

    let cred = Credential::new("access_key_id", "secret_access_key");

    group.bench_function("presign_url", |b| {
        let req = PresignRequest::new("examplebucket", "test.txt").with_time(now());

        b.iter(|| presign_url(&req, &cred).expect("must success"))
    });

    group.bench_function("presign_url_with_precomputed_key", |b| {
        let req = PresignRequest::new("examplebucket", "test.txt").with_time(now());
        let key = derive_signing_key(&req, &cred);
        let req = req.with_signing_key(key);

        b.iter(|| presign_url(&req, &cred).expect("must success"))
    });

    group.bench_function("derive_signing_key", |b| {
        let req = PresignRequest::new("examplebucket", "test.txt").with_time(now());

        b.iter(|| derive_signing_key(&req, &cred))
    });

    group.finish();
}
