//! Input patterns for testing and benchmarking the sort engines, as i32 values.
//!
//! All patterns derive from one seed per process, printed by the test battery, so a failing run
//! can be repeated with `OVERRIDE_SEED=<seed>`.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    // sorted  unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    let directions = random_uniform(len / chunk_len + 1, 0..=1);

    for (chunk, direction) in vals.chunks_mut(chunk_len).zip(directions) {
        if direction == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    vals
}

/// Short ASCII words of mixed case, e.g. for collation tests.
pub fn random_words(len: usize) -> Vec<String> {
    let mut rng = new_rng();

    (0..len)
        .map(|_| {
            let word_len = rng.gen_range(0..8);
            (0..word_len)
                .map(|_| {
                    let letter = rng.gen_range(b'a'..=b'e');
                    if rng.gen_bool(0.3) {
                        letter.to_ascii_uppercase() as char
                    } else {
                        letter as char
                    }
                })
                .collect()
        })
        .collect()
}

/// Makes every following pattern call draw fresh values instead of repeating per process.
///
/// Benchmarks call this so that each iteration sees new input.
pub fn use_random_seed_each_time() {
    if process_seed().0 == SeedSource::ExternalOverride {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    RESEED_EACH_CALL.store(true, Ordering::Relaxed);
}

/// The seed all patterns of this process derive from.
pub fn random_init_seed() -> u64 {
    process_seed().1
}

// --- Private ---

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SeedSource {
    PerProcess,
    ExternalOverride,
}

static PROCESS_SEED: OnceCell<(SeedSource, u64)> = OnceCell::new();
static RESEED_EACH_CALL: AtomicBool = AtomicBool::new(false);

fn process_seed() -> (SeedSource, u64) {
    *PROCESS_SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => {
            let seed = u64::from_str(&seed)
                .unwrap_or_else(|err| panic!("Invalid OVERRIDE_SEED {seed:?}: {err}"));
            (SeedSource::ExternalOverride, seed)
        }
        Err(_) => (SeedSource::PerProcess, thread_rng().gen()),
    })
}

fn new_rng() -> StdRng {
    if RESEED_EACH_CALL.load(Ordering::Relaxed) {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(random_init_seed())
    }
}
