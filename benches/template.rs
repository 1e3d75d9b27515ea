//! Benchmarks for template parsing and surface reconciliation
//!
//! Run with: cargo bench template

use tagfield::{parse, serialize, TemplateEditor};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Template with `tokens` variables separated by short text runs
fn make_template(tokens: usize) -> String {
    (0..tokens)
        .map(|i| format!("Dear {{{{field{}}}}}, ", i))
        .collect()
}

// ============================================================================
// Parsing
// ============================================================================

#[divan::bench(args = [1, 10, 100, 1000])]
fn parse_template(bencher: divan::Bencher, tokens: usize) {
    let template = make_template(tokens);
    bencher.bench(|| parse(divan::black_box(&template)));
}

#[divan::bench(args = [100, 10_000])]
fn parse_plain_text(bencher: divan::Bencher, len: usize) {
    let text = "lorem ipsum ".repeat(len / 12 + 1);
    bencher.bench(|| parse(divan::black_box(&text)));
}

#[divan::bench(args = [10, 100, 1000])]
fn serialize_surface(bencher: divan::Bencher, tokens: usize) {
    let editor = TemplateEditor::new(make_template(tokens));
    let nodes = editor.surface().nodes().to_vec();
    bencher.bench(|| serialize(divan::black_box(&nodes)));
}

// ============================================================================
// Reconciliation
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn full_render(bencher: divan::Bencher, tokens: usize) {
    let template = make_template(tokens);
    bencher
        .with_inputs(|| TemplateEditor::new(""))
        .bench_local_values(|mut editor| {
            editor.set_value(template.as_str());
            editor.run_until_idle();
            editor
        });
}

#[divan::bench(args = [10, 100, 1000])]
fn keystroke_echo(bencher: divan::Bencher, tokens: usize) {
    let template = make_template(tokens);
    bencher
        .with_inputs(|| TemplateEditor::new(template.as_str()))
        .bench_local_values(|mut editor| {
            editor.type_text("x");
            let value = editor.surface().serialize();
            editor.set_value(value);
            editor
        });
}
