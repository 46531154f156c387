use std::cell::Cell;
use std::cmp::Ordering;
use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use once_cell::sync::OnceCell;

use litestl::List;
use sort_test_tools::patterns;

type Transform<T> = fn(Vec<i32>) -> Vec<T>;
type PatternProvider = fn(usize) -> Vec<i32>;

/// One way of sorting a `Vec<T>`, the engines under test plus the std baseline.
#[derive(Copy, Clone)]
enum Engine {
    Heapsort,
    ListMerge,
    StdUnstable,
}

impl Engine {
    const ALL: [Engine; 3] = [Engine::Heapsort, Engine::ListMerge, Engine::StdUnstable];

    fn name(self) -> &'static str {
        match self {
            Engine::Heapsort => "litestl_heapsort",
            Engine::ListMerge => "litestl_list_merge",
            Engine::StdUnstable => "rust_std_unstable",
        }
    }
}

fn is_bench_name_ok(name: &str) -> bool {
    static FILTER: OnceCell<Option<String>> = OnceCell::new();

    FILTER
        .get_or_init(|| env::var("BENCH_FILTER").ok())
        .as_ref()
        .map_or(true, |filter| name.contains(filter.as_str()))
}

#[inline(never)]
fn bench_sort<T: Ord>(
    c: &mut Criterion,
    engine: Engine,
    test_size: usize,
    transform_name: &str,
    transform: Transform<T>,
    pattern_name: &str,
    pattern_provider: PatternProvider,
) {
    let bench_name = format!(
        "{}-{transform_name}-{pattern_name}-{test_size}",
        engine.name()
    );
    if !is_bench_name_ok(&bench_name) {
        return;
    }

    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    // The list is built in the setup closure, so only relinking and comparing is measured.
    match engine {
        Engine::Heapsort => c.bench_function(&bench_name, |b| {
            b.iter_batched(
                || transform(pattern_provider(test_size)),
                |mut test_data| litestl::sort(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        }),
        Engine::ListMerge => c.bench_function(&bench_name, |b| {
            b.iter_batched(
                || {
                    transform(pattern_provider(test_size))
                        .into_iter()
                        .collect::<List<T>>()
                },
                |mut test_data| litestl::sort(black_box(&mut test_data)),
                batch_size,
            )
        }),
        Engine::StdUnstable => c.bench_function(&bench_name, |b| {
            b.iter_batched(
                || transform(pattern_provider(test_size)),
                |mut test_data| black_box(test_data.as_mut_slice()).sort_unstable(),
                batch_size,
            )
        }),
    };
}

fn measure_comp_count(
    engine: Engine,
    pattern_name: &str,
    pattern_provider: PatternProvider,
    test_size: usize,
) {
    let run_count: usize = if test_size <= 20 {
        10_000
    } else if test_size < 10_000 {
        300
    } else {
        10
    };

    let comp_count = Cell::new(0u64);
    let mut compare = |a: &i32, b: &i32| -> Ordering {
        comp_count.set(comp_count.get() + 1);
        a.cmp(b)
    };

    for _ in 0..run_count {
        let mut test_data = pattern_provider(test_size);
        match engine {
            Engine::Heapsort => {
                litestl::sort_by(black_box(test_data.as_mut_slice()), &mut compare);
            }
            Engine::ListMerge => {
                let mut list: List<i32> = test_data.into_iter().collect();
                litestl::sort_by(black_box(&mut list), &mut compare);
            }
            Engine::StdUnstable => test_data.sort_unstable_by(&mut compare),
        }
    }

    // Less than one comparison per run on average rounds down to zero, acceptable for this use.
    let mean = comp_count.get() / (run_count as u64);
    println!(
        "{}-comp-i32-{pattern_name}-{test_size}: mean comparisons: {mean}",
        engine.name()
    );
}

fn bench_patterns<T: Ord>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: Transform<T>,
) {
    let pattern_providers: [(&str, PatternProvider); 7] = [
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("random_s95", |size| patterns::random_sorted(size, 95.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
    ];

    for (pattern_name, pattern_provider) in pattern_providers {
        if test_size < 3 && pattern_name != "random" {
            continue;
        }

        for engine in Engine::ALL {
            if env::var("MEASURE_COMP").is_ok() {
                if transform_name == "i32" {
                    measure_comp_count(engine, pattern_name, pattern_provider, test_size);
                }
            } else {
                bench_sort(
                    c,
                    engine,
                    test_size,
                    transform_name,
                    transform,
                    pattern_name,
                    pattern_provider,
                );
            }
        }
    }
}

fn ensure_true_random() {
    // A fixed seed would make every iteration sort the same numbers.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);
    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [0, 1, 2, 3, 8, 16, 20, 50, 100, 500, 1_000, 10_000, 100_000];

    patterns::use_random_seed_each_time();
    ensure_true_random();

    for test_size in test_sizes {
        bench_patterns(c, test_size, "i32", |values| values);

        // Owned strings, every comparison dereferences two heap pointers. Zero extended so the
        // lexicographic order matches the numeric one.
        bench_patterns(c, test_size, "string", |values| {
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
