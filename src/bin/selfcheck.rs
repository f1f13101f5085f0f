// Demonstration suite: the harness exercising its own public surface.
// Usage: cargo run --bin selfcheck -- [--mt_filter=PATTERN] [--mt_list_tests] ...

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::process;

use mtest::{expect, Mock};

fn main() {
    register();
    process::exit(mtest::cli::run());
}

fn register() {
    mtest::test!("Math works", || {
        expect(1 + 1).to_equal(2);
        expect(2 * 2).not().to_equal(5);
    });

    mtest::test!("Vector matcher", || {
        let v = vec![1, 2, 3];
        expect(v.clone()).to_contain(&2);
        expect(v).not().is_empty();
    });

    mtest::test!("Mocking check", || {
        let mut square = Mock::with(|x: &i32| x * x);
        expect(square.call(10)).to_equal(100);
        expect(&square).to_have_been_called_times(1);
    });

    mtest::test!("String hashing", || {
        expect(hash_of("mtest")).not().to_equal(hash_of("mtestX"));
    });

    mtest::test!("Floating math", || {
        let value = 0.5_f64.sin() * 0.25_f64.cos();
        expect(value.abs()).to_be_less_than(1.0);
    });

    mtest::test_skip!("Pending feature", || {
        expect(0).to_equal(1);
    });
}

fn hash_of(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}
