// benches/parse.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use x86doc_scrape::{
    specs::{document, mnemonic},
    Curation,
};

const CELLS: &[&str] = &[
    "66 0F 38 30 /r PMOVZXBW xmm1, xmm2/m64",
    "VEX.LZ.0F38.W0 F7 /r BEXTR r32a, r/m32, r32b",
    "EVEX.128.F2.0F.W1 10 /r VMOVSD xmm1",
    "F3 0F BD /r LZCNT* r16, r/m16",
    "0F 0B",
];

fn sample_page() -> String {
    let rows: String = (0..40)
        .map(|i| format!("<tr><td>VEX.128.66.0F.WIG {i:02X} /r VPADD{i} xmm1</td><td>RVM</td><td>Add.</td></tr>"))
        .collect();
    let paras: String = (0..30)
        .map(|i| format!("<p>Paragraph {i} with a <a href=\"./movd:movq\">link</a> and some more text.</p>"))
        .collect();
    format!(
        "<html><body><table><tr><th>Opcode/Instruction</th><th>Op/En</th><th>Description</th></tr>{rows}</table>\
         <h2 id=\"description\">Description</h2>{paras}</body></html>"
    )
}

fn bench_parse(c: &mut Criterion) {
    let page = sample_page();
    let curation = Curation::builtin();

    c.bench_function("extract_mnemonic", |b| {
        b.iter(|| {
            CELLS
                .iter()
                .filter_map(|cell| mnemonic::extract_mnemonic(black_box(cell)))
                .count()
        })
    });

    c.bench_function("document_parse", |b| {
        b.iter(|| {
            let record = document::parse("VPADD", black_box(&page), &curation);
            black_box(record.map(|r| r.variants.len()).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
