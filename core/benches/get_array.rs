//! Benchmarks for array extraction.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. interpret: one GET_ARRAY per element of a source array, single-element
//!    reads against rest-of-array reads (which share storage with the source)
//! 2. fold: constant folding a destructuring of an array literal

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tessera_core::{
    interpreter::{Frame, Interpreter, InterpreterOptions},
    ir::{CopyInstr, GetArrayInstr, Instruction, Operand, Variable},
    passes::ConstantFolder,
    values::Value,
};

/// `x0 = source[0]; x1 = source[1]; ...` or the `[i:END]` form of each.
fn destructure(source: Operand, size: usize, take_rest: bool) -> Vec<Instruction> {
    (0..size)
        .map(|i| {
            GetArrayInstr::new(Variable::new(format!("x{i}")), source.clone(), i, take_rest).into()
        })
        .collect()
}

fn bench_interpret(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpret");
    let source = Variable::new("source");
    let interpreter = Interpreter::new(InterpreterOptions { max_steps: None });

    for size in [16, 256, 4096] {
        group.throughput(Throughput::Elements(size as u64));
        let array = Value::array((0..size as i64).map(Value::fixnum));

        for (name, take_rest) in [("entry", false), ("tail", true)] {
            let code = destructure(source.clone().into(), size, take_rest);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    let mut frame = Frame::new();
                    frame.bind(&source, array.clone());
                    interpreter
                        .run(black_box(&code), &mut frame, &Value::Nil)
                        .expect("interpretation failed");
                    black_box(frame.len())
                });
            });
        }
    }

    group.finish();
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");
    let folder = ConstantFolder::default();

    for size in [16, 64, 256] {
        group.throughput(Throughput::Elements(size as u64));

        let literal = Operand::array((0..size as i64).map(Operand::fixnum));
        let mut code: Vec<Instruction> =
            vec![CopyInstr::new(Variable::new("source"), literal).into()];
        code.extend(destructure(Operand::var("source"), size, true));

        group.bench_with_input(BenchmarkId::from_parameter(size), &code, |b, code| {
            b.iter(|| black_box(folder.fold(black_box(code)).removable_count()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_interpret, bench_fold);
criterion_main!(benches);
