// Companion suite with deliberate failures; exercises the failure
// reporting path end to end (console verdicts, XML, exit code).

use std::process;

use mtest::expect;

fn main() {
    register();
    process::exit(mtest::cli::run());
}

fn register() {
    mtest::test!("Arithmetic holds", || {
        expect(21 * 2).to_equal(42);
    });

    mtest::test!("Arithmetic breaks", || {
        expect(4).to_equal(5);
    });

    mtest::test!("Body panics", || {
        panic!("boom");
    });
}
