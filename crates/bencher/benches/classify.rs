use std::hint::black_box;

use bencher::{TestCase, TestFile};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use micro_http_token::protocol::{int_to_code, str_to_header_name, str_to_method, str_to_version};

static SMALL_HEADER: TestFile = TestFile::new("get_small.txt", include_str!("../resources/request/get_small.txt"));
static LARGE_HEADER: TestFile = TestFile::new("get_large.txt", include_str!("../resources/request/get_large.txt"));

fn create_test_cases() -> Vec<TestCase> {
    vec![TestCase::new("small_header_classify", SMALL_HEADER), TestCase::new("large_header_classify", LARGE_HEADER)]
}

fn benchmark_request_classify(criterion: &mut Criterion) {
    let test_cases = create_test_cases();
    let mut group = criterion.benchmark_group("request_classify");

    for case in test_cases {
        let tokens = case.file().tokens();
        group.throughput(Throughput::Elements(tokens.header_names.len() as u64 + 2));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &tokens, |b, tokens| {
            b.iter(|| {
                let method = str_to_method(black_box(tokens.method));
                let version = str_to_version(black_box(tokens.version));
                for name in &tokens.header_names {
                    black_box(str_to_header_name(black_box(name)));
                }
                black_box((method, version));
            });
        });
    }

    group.finish();
}

fn benchmark_header_name_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("header_name");

    let inputs: [(&str, &[u8]); 4] = [
        ("canonical", b"Content-Type"),
        ("lowercase", b"content-type"),
        ("unknown_same_length", b"X-Powered-By"),
        ("unknown_too_long", b"X-Amzn-Trace-Id-With-A-Long-Suffix"),
    ];

    for (label, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(label), input, |b, input| {
            b.iter(|| str_to_header_name(black_box(input)));
        });
    }

    group.finish();
}

fn benchmark_status_code(criterion: &mut Criterion) {
    criterion.bench_function("int_to_code", |b| {
        b.iter(|| {
            for code in [-1, 0, 200, 204, 301, 404, 418, 499, 503, 599, 600] {
                black_box(int_to_code(black_box(code)));
            }
        });
    });
}

criterion_group!(benches, benchmark_request_classify, benchmark_header_name_lookup, benchmark_status_code);
criterion_main!(benches);
