//! Console reporting.
//!
//! gtest-style bracketed progress lines plus the end-of-run summary,
//! colorized through `termcolor`. Color is off when the flag surface
//! says so or when stdout is not a terminal.

use std::io::Write;
use std::time::Duration;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::registry::{TestCase, SUITE_NAME};
use crate::runner::{RunListener, RunSummary, TestResult};

pub struct ConsoleReporter {
    stream: StandardStream,
}

impl ConsoleReporter {
    pub fn new(color_enabled: bool) -> Self {
        let choice = if color_enabled {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stream: StandardStream::stdout(choice),
        }
    }

    fn tag(&mut self, label: &str, color: Color, intense: bool) {
        let _ = self
            .stream
            .set_color(ColorSpec::new().set_fg(Some(color)).set_intense(intense));
        let _ = write!(self.stream, "{label}");
        let _ = self.stream.reset();
    }

    /// Preamble before the first test starts.
    pub fn run_started(&mut self, selected: usize) {
        let _ = writeln!(
            self.stream,
            "[==========] Running {} {}.",
            selected,
            plural(selected)
        );
    }

    /// End-of-run summary: totals, then the failed names if any.
    pub fn summary(&mut self, summary: &RunSummary, elapsed: Duration) {
        let ran = summary.passed + summary.failed;
        let _ = writeln!(
            self.stream,
            "[==========] {} {} ran. ({} ms total)",
            ran,
            plural(ran),
            elapsed.as_millis()
        );
        self.tag("[  PASSED  ]", Color::Green, false);
        let _ = writeln!(self.stream, " {} {}.", summary.passed, plural(summary.passed));
        if summary.skipped > 0 {
            self.tag("[ SKIPPED  ]", Color::Black, true);
            let _ = writeln!(
                self.stream,
                " {} {}.",
                summary.skipped,
                plural(summary.skipped)
            );
        }
        if summary.failed > 0 {
            self.tag("[  FAILED  ]", Color::Red, false);
            let _ = writeln!(
                self.stream,
                " {} {}, listed below:",
                summary.failed,
                plural(summary.failed)
            );
            for name in &summary.failed_names {
                self.tag("[  FAILED  ]", Color::Red, false);
                let _ = writeln!(self.stream, " {name}");
            }
        }
    }

    /// List mode: the suite header, then each test name indented two
    /// spaces, one per line.
    pub fn list_tests(&mut self, cases: &[TestCase]) {
        let _ = writeln!(self.stream, "{SUITE_NAME}.");
        for case in cases {
            let _ = writeln!(self.stream, "  {}", case.name);
        }
    }
}

impl RunListener for ConsoleReporter {
    fn test_started(&mut self, case: &TestCase) {
        let _ = writeln!(self.stream, "[ RUN      ] {}", case.name);
    }

    fn test_finished(&mut self, result: &TestResult) {
        if result.skipped {
            self.tag("[ SKIPPED  ]", Color::Black, true);
            let _ = writeln!(self.stream, " {}", result.name);
        } else if result.passed {
            self.tag("[       OK ]", Color::Green, false);
            let _ = writeln!(
                self.stream,
                " {} ({}ms)",
                result.name,
                result.duration.as_millis()
            );
        } else {
            self.tag("[   FAILED ]", Color::Red, false);
            let _ = writeln!(
                self.stream,
                " {} ({}ms)",
                result.name,
                result.duration.as_millis()
            );
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "test"
    } else {
        "tests"
    }
}
