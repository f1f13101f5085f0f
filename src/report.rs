//! JUnit-style XML report.
//!
//! One `<testsuites>` root wrapping a single `<testsuite>` named after
//! the run's suite constant, one `<testcase>` per executed test. The
//! layout matches what common CI consumers of gtest output ingest; all
//! attribute values are entity-escaped.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::errors::MtError;
use crate::registry::SUITE_NAME;
use crate::runner::{summarize, TestResult};

/// Renders the whole document as a string.
pub fn render_xml(results: &[TestResult], elapsed: Duration) -> String {
    let summary = summarize(results);
    let total = results.len();
    let seconds = elapsed.as_secs_f64();

    let mut doc = String::new();
    doc.push_str(&format!(
        "<testsuites tests=\"{}\" failures=\"{}\" skipped=\"{}\" time=\"{:.3}\">\n",
        total, summary.failed, summary.skipped, seconds
    ));
    doc.push_str(&format!(
        "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" skipped=\"{}\" time=\"{:.3}\">\n",
        escape(SUITE_NAME),
        total,
        summary.failed,
        summary.skipped,
        seconds
    ));

    for result in results {
        let open = format!(
            "    <testcase name=\"{}\" file=\"{}\" line=\"{}\" time=\"{:.3}\"",
            escape(&result.name),
            escape(result.file),
            result.line,
            result.duration.as_secs_f64()
        );
        if result.skipped {
            doc.push_str(&open);
            doc.push_str(">\n      <skipped/>\n    </testcase>\n");
        } else if result.passed {
            doc.push_str(&open);
            doc.push_str("/>\n");
        } else {
            doc.push_str(&open);
            doc.push_str(">\n");
            for failure in &result.failures {
                doc.push_str(&format!(
                    "      <failure message=\"{}\"/>\n",
                    escape(failure)
                ));
            }
            doc.push_str("    </testcase>\n");
        }
    }

    doc.push_str("  </testsuite>\n</testsuites>\n");
    doc
}

/// Writes the report to `path`. The caller decides what a write failure
/// means; the runner's CLI layer skips the report silently.
pub fn write_xml(path: &Path, results: &[TestResult], elapsed: Duration) -> Result<(), MtError> {
    fs::write(path, render_xml(results, elapsed))?;
    Ok(())
}

/// Entity-escapes an XML attribute value.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
