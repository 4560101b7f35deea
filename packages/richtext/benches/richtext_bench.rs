use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagecraft_richtext::{apply_ranges, reconcile_after_edit, FormattedRange, TextFormatting};

fn sample_text(words: usize) -> String {
    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(' ');
        }
        text.push_str("lorem");
    }
    text
}

fn sample_ranges(count: usize) -> Vec<FormattedRange> {
    // Disjoint ranges over successive 6-character words
    (0..count)
        .map(|i| {
            FormattedRange::new(
                i * 6,
                i * 6 + 5,
                TextFormatting {
                    bold: i % 2 == 0,
                    italic: i % 2 == 1,
                    ..Default::default()
                },
            )
        })
        .collect()
}

fn apply_ranges_paragraph(c: &mut Criterion) {
    let text = sample_text(50);
    let ranges = sample_ranges(10);

    c.bench_function("apply_ranges_paragraph", |b| {
        b.iter(|| apply_ranges(black_box(&text), black_box(&ranges)))
    });
}

fn apply_ranges_heavily_formatted(c: &mut Criterion) {
    let text = sample_text(200);
    let ranges = sample_ranges(100);

    c.bench_function("apply_ranges_heavily_formatted", |b| {
        b.iter(|| apply_ranges(black_box(&text), black_box(&ranges)))
    });
}

fn reconcile_after_append(c: &mut Criterion) {
    let old_text = sample_text(200);
    let new_text = format!("{} more", old_text);
    let ranges = sample_ranges(100);

    c.bench_function("reconcile_after_append", |b| {
        b.iter(|| {
            reconcile_after_edit(
                black_box(&old_text),
                black_box(&new_text),
                black_box(&ranges),
            )
        })
    });
}

criterion_group!(
    benches,
    apply_ranges_paragraph,
    apply_ranges_heavily_formatted,
    reconcile_after_append
);
criterion_main!(benches);
