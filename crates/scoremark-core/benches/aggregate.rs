use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scoremark_core::aggregate::{aggregate, overall_average};
use scoremark_core::model::{Dimension, ScoreRecord};

fn make_records(n: usize) -> Vec<ScoreRecord> {
    (0..n)
        .map(|i| ScoreRecord {
            teacher: format!("Teacher {}", i % 12),
            subject: format!("Subject {}", i % 8),
            grade: ((i % 6) + 4).to_string(),
            stream: ["A", "B", "C"][i % 3].to_string(),
            term: format!("Term {}", (i % 3) + 1),
            exam_type: ["Mid-Term", "End-Term"][i % 2].to_string(),
            year: 2024 + (i % 2) as i32,
            mean_score: (i % 101) as f64,
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let dims = [
        Dimension::Subject,
        Dimension::Grade,
        Dimension::Stream,
        Dimension::Term,
        Dimension::Year,
    ];

    // Classroom scale per the resource model: low thousands of records.
    for n in [100, 1_000, 5_000] {
        let records = make_records(n);
        c.bench_function(&format!("aggregate_{n}"), |b| {
            b.iter(|| aggregate(black_box(&records), black_box(&dims)))
        });
    }

    let records = make_records(5_000);
    c.bench_function("overall_average_5000", |b| {
        b.iter(|| overall_average(black_box(&records)))
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
