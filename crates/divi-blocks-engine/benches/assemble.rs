use criterion::{Criterion, criterion_group, criterion_main};
use divi_blocks_engine::{Assembler, HtmlTextParser, SequentialKeys};
mod common;

fn bench_assemble_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    group.sample_size(10);

    for sections in [10, 100] {
        let content = common::generate_page(sections);
        group.bench_function(format!("sections_{sections}"), |b| {
            b.iter(|| {
                let keys = SequentialKeys::new("k");
                let assembler = Assembler::new(&HtmlTextParser, &keys);
                let nodes = assembler.assemble(std::hint::black_box(&content));
                std::hint::black_box(nodes);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assemble_page);
criterion_main!(benches);
