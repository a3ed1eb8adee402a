//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package cmmc-lex`

use cmmc_lex::Lexer;
use cmmc_util::Handler;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const PROGRAM: &str = r#"
struct Point {
    int x;
    int y;
};

int dist2(struct Point a, struct Point b) {
    int dx;
    int dy;
    dx = a.x - b.x;
    dy = a.y - b.y;
    return dx * dx + dy * dy;
}

# entry point
void main() {
    int n;
    cin >> n;
    while (n > 0 && !(n == 13)) {
        cout << "n = " << n << "\n";   // progress
        n--;
    }
    if (n != 0 || false) {
        cout << "done early\n";
    } else {
        cout << "done\n";
    }
}
"#;

fn lexer_token_count(source: &str) -> usize {
    let mut handler = Handler::new();
    Lexer::new(source, &mut handler).count()
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));
    group.bench_function("program", |b| {
        b.iter(|| lexer_token_count(black_box(PROGRAM)))
    });

    let large = PROGRAM.repeat(200);
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("program_x200", |b| {
        b.iter(|| lexer_token_count(black_box(&large)))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("integers", |b| {
        b.iter(|| lexer_token_count(black_box("1 22 333 4444 55555 666666 2147483647")))
    });

    group.bench_function("overflowing_integers", |b| {
        b.iter(|| lexer_token_count(black_box("2147483648 99999999999999 123456789012345")))
    });

    group.bench_function("long_string", |b| {
        let source = "cout << \"This is a longer string with \\t escapes \\\" and text for benchmarking.\\n\";";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_errors(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_errors");

    let noisy = "$ @ ` \"bad \\z\" x & y | z\n".repeat(50);
    group.bench_function("recovery", |b| {
        b.iter(|| lexer_token_count(black_box(&noisy)))
    });

    let comments = "// a comment line\n# another comment\n".repeat(100);
    group.bench_function("comments_only", |b| {
        b.iter(|| lexer_token_count(black_box(&comments)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_program,
    bench_lexer_literals,
    bench_lexer_errors
);
criterion_main!(benches);
