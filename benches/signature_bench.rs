use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use coogle::{
    is_signature_match, normalize_type, parse_function_signature, SignatureStorage, StringArena,
};

fn bench_normalize(c: &mut Criterion) {
    let expanded = "const std::basic_string<char, std::char_traits<char>, std::allocator<char>> &";
    c.bench_function("normalize_expanded_string", |b| {
        let mut arena = StringArena::new();
        b.iter(|| {
            arena.clear();
            let view = normalize_type(&mut arena, black_box(expanded));
            black_box(view);
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let pattern = "std::map<int, std::vector<char>>(const std::string &, void (*)(int, int), *)";
    c.bench_function("parse_function_signature", |b| {
        let mut storage = SignatureStorage::new();
        b.iter(|| {
            let sig = parse_function_signature(&mut storage, black_box(pattern)).unwrap();
            black_box(sig.arg_count());
        })
    });
}

fn bench_match(c: &mut Criterion) {
    let mut query_storage = SignatureStorage::new();
    let query =
        parse_function_signature(&mut query_storage, "int(const std::string &, *, char *)")
            .unwrap();
    let mut candidate_storage = SignatureStorage::new();
    let candidate = candidate_storage.build(
        "int",
        [
            "const std::basic_string<char, std::char_traits<char>, std::allocator<char>> &",
            "double",
            "char *",
        ],
    );

    c.bench_function("is_signature_match", |b| {
        b.iter(|| black_box(is_signature_match(black_box(&query), black_box(&candidate))))
    });
}

criterion_group!(benches, bench_normalize, bench_parse, bench_match);
criterion_main!(benches);
