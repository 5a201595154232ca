//! Assembler benchmarks
//!
//! Measures:
//! - Code encoding performance (PHF maps)
//! - Parser throughput
//! - Symbol table operations
//! - Full assembly pipeline
//!
//! Run with:
//! ```bash
//! cargo bench
//! ```

use assembler::driver::assemble;
use assembler::{code, parser::ParserLines, symbol_table::SymbolTable};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_code_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("code_encoding");

    group.bench_function("encode_c_instruction_hot", |b| {
        b.iter(|| black_box(code::encode_c_instruction("D", "D+1", "JMP").unwrap()));
    });

    group.bench_function("encode_c_instruction_cold", |b| {
        b.iter(|| black_box(code::encode_c_instruction("AMD", "D|M", "JLE").unwrap()));
    });

    group.bench_function("validate_mnemonics", |b| {
        b.iter(|| black_box(code::validate_mnemonics("AMD", "D|M", "JLE")));
    });

    group.finish();
}

fn bench_a_instruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("a_instruction");

    group.bench_function("encode_small_address", |b| {
        b.iter(|| black_box(code::encode_a_instruction(100)));
    });

    group.bench_function("encode_max_address", |b| {
        b.iter(|| black_box(code::encode_a_instruction(32767)));
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("encode_batch_100", |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(code::encode_a_instruction(i));
            }
        });
    });

    group.finish();
}

fn bench_symbol_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("symbol_table");

    group.bench_function("initialization", |b| {
        b.iter(|| black_box(SymbolTable::new()));
    });

    group.throughput(Throughput::Elements(3));
    group.bench_function("lookup_predefined_hot", |b| {
        let table = SymbolTable::new();
        b.iter(|| {
            black_box(table.get_address("SP"));
            black_box(table.get_address("R15"));
            black_box(table.get_address("SCREEN"));
        });
    });

    group.bench_function("get_or_insert_existing", |b| {
        let mut table = SymbolTable::new();
        table.add_entry("LOOP", 100);
        let mut ram_address = 16;
        b.iter(|| {
            black_box(table.get_or_insert("LOOP", &mut ram_address));
        });
    });

    group.bench_function("get_or_insert_new", |b| {
        let mut counter = 0u32;
        b.iter(|| {
            let mut table = SymbolTable::new();
            let mut ram_address = 16;
            black_box(table.get_or_insert(&format!("VAR{counter}"), &mut ram_address));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let lines_mixed: Vec<String> = vec![
        "@100".to_string(),
        "D=A".to_string(),
        "(LOOP)".to_string(),
        "D=D-1".to_string(),
        "@LOOP".to_string(),
        "D;JGT".to_string(),
    ];

    group.throughput(Throughput::Elements(lines_mixed.len() as u64));
    group.bench_function("parse_mixed_realistic", |b| {
        b.iter(|| {
            let mut parser = ParserLines::from_lines(&lines_mixed);
            while parser.advance().unwrap() {
                black_box(parser.command_type().unwrap());
            }
        });
    });

    let lines_with_comments: Vec<String> = vec![
        "@100 // This is a comment".to_string(),
        "D=D+1 // Another comment".to_string(),
        "// Full line comment".to_string(),
        "   // Indented comment".to_string(),
        "M=M+1".to_string(),
    ];

    group.throughput(Throughput::Elements(lines_with_comments.len() as u64));
    group.bench_function("parse_comments", |b| {
        b.iter(|| {
            let mut parser = ParserLines::from_lines(&lines_with_comments);
            while parser.advance().unwrap() {
                black_box(parser.command_type().unwrap());
            }
        });
    });

    group.finish();
}

fn bench_full_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_assembly");

    let medium_program: Vec<String> = vec![
        "@100".to_string(),
        "D=A".to_string(),
        "@i".to_string(),
        "M=D".to_string(),
        "(LOOP)".to_string(),
        "@i".to_string(),
        "D=M".to_string(),
        "@END".to_string(),
        "D;JEQ".to_string(),
        "@i".to_string(),
        "M=M-1".to_string(),
        "@LOOP".to_string(),
        "0;JMP".to_string(),
        "(END)".to_string(),
        "@END".to_string(),
        "0;JMP".to_string(),
    ];

    group.throughput(Throughput::Elements(medium_program.len() as u64));
    group.bench_function("pipeline_medium_16_lines", |b| {
        b.iter(|| assemble(black_box("bench.asm"), black_box(&medium_program)).unwrap());
    });

    let large_program: Vec<String> = medium_program
        .iter()
        .cycle()
        .take(medium_program.len() * 10)
        .cloned()
        .collect();

    group.throughput(Throughput::Elements(large_program.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("pipeline_large", large_program.len()),
        &large_program,
        |b, prog| {
            b.iter(|| assemble(black_box("bench.asm"), black_box(prog)).unwrap());
        },
    );

    group.finish();
}

criterion_group!(
    benches,
    bench_code_encoding,
    bench_a_instruction,
    bench_symbol_table,
    bench_parser,
    bench_full_assembly,
);

criterion_main!(benches);
