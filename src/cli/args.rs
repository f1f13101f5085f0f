//! Command-line flags.
//!
//! This module uses the `clap` crate with its "derive" feature to create
//! a declarative and type-safe argument parsing structure. Two synonymous
//! flag namespaces are accepted so a suite binary can run unchanged under
//! CI configurations written for gtest; when both spellings are given,
//! the `--mt_*` one wins.

use std::path::PathBuf;

use clap::Parser;

/// The raw flag surface.
#[derive(Debug, Parser)]
#[command(
    name = "mtest",
    version,
    about = "Runs the tests registered with this binary.",
    long_about = "Runs the tests registered with this binary.\n\
                  Every --mt_* flag also accepts its --gtest_* spelling."
)]
pub struct MtArgs {
    /// Glob pattern selecting which tests run (`*` and `?` wildcards,
    /// case-insensitive substring semantics).
    #[arg(long = "mt_filter", value_name = "PATTERN")]
    pub mt_filter: Option<String>,

    /// gtest-compatible spelling of --mt_filter.
    #[arg(long = "gtest_filter", value_name = "PATTERN", hide = true)]
    pub gtest_filter: Option<String>,

    /// Report destination, e.g. `xml:results.xml`.
    #[arg(long = "mt_output", value_name = "xml:FILE")]
    pub mt_output: Option<String>,

    /// gtest-compatible spelling of --mt_output.
    #[arg(long = "gtest_output", value_name = "xml:FILE", hide = true)]
    pub gtest_output: Option<String>,

    /// Disable ANSI color in console output.
    #[arg(long = "mt_no_color")]
    pub mt_no_color: bool,

    /// gtest-compatible color switch (`yes`, `no`, `auto`).
    #[arg(long = "gtest_color", value_name = "WHEN", hide = true)]
    pub gtest_color: Option<String>,

    /// Print the registered test names and exit without running.
    #[arg(long = "mt_list_tests")]
    pub mt_list_tests: bool,

    /// gtest-compatible spelling of --mt_list_tests.
    #[arg(long = "gtest_list_tests", hide = true)]
    pub gtest_list_tests: bool,
}

/// Normalized options consumed by the runner and reporters.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub filter_pattern: String,
    pub xml_path: Option<PathBuf>,
    pub color_enabled: bool,
    pub list_only: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            filter_pattern: String::new(),
            xml_path: None,
            color_enabled: atty::is(atty::Stream::Stdout),
            list_only: false,
        }
    }
}

impl From<MtArgs> for RunOptions {
    fn from(args: MtArgs) -> Self {
        let defaults = Self::default();

        let filter_pattern = args
            .mt_filter
            .or(args.gtest_filter)
            .unwrap_or_default();

        let xml_path = args
            .mt_output
            .as_deref()
            .or(args.gtest_output.as_deref())
            .and_then(parse_output_spec);

        let color_enabled = if args.mt_no_color {
            false
        } else if let Some(when) = &args.gtest_color {
            !matches!(when.as_str(), "no" | "false" | "0")
        } else {
            defaults.color_enabled
        };

        Self {
            filter_pattern,
            xml_path,
            color_enabled,
            list_only: args.mt_list_tests || args.gtest_list_tests,
        }
    }
}

/// Parses an output spec of the form `xml:FILE`. A bare `xml` falls back
/// to gtest's default file name; any other format tag yields no report.
fn parse_output_spec(spec: &str) -> Option<PathBuf> {
    if let Some(path) = spec.strip_prefix("xml:") {
        Some(PathBuf::from(path))
    } else if spec == "xml" {
        Some(PathBuf::from("test_detail.xml"))
    } else {
        None
    }
}
