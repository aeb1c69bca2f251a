//! Output of search results.
//!
//! The text format is read by external tools and must stay stable:
//!
//! ```text
//! COST <value>
//! PATH <node> <node> ...
//! ```
//!
//! `COST` always comes first and holds a single decimal float. Integral costs
//! keep a trailing `.0`; other values use the shortest representation that
//! parses back to the same `f64`. A cost that overflowed to infinity is
//! printed as `inf`. Any change to these prefixes or their order
//! is a breaking change for callers that grep for them.

use std::io::{self, Write};

use serde::Serialize;

use crate::algorithm::{SearchResult, SearchStats};

/// Prefix of the cost line
pub const COST_PREFIX: &str = "COST";

/// Prefix of the path line
pub const PATH_PREFIX: &str = "PATH";

/// Output formats supported by the reporter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    cost: f64,
    path: &'a [String],
    heuristic: &'a str,
    stats: &'a SearchStats,
}

/// Formats a cost as a decimal float
///
/// Finite values never use exponent notation. A path whose weights sum past
/// `f64::MAX` is reported as `inf`, which `parse_cost` reads back.
pub fn format_cost(cost: f64) -> String {
    if cost.is_finite() && cost.fract() == 0.0 {
        format!("{:.1}", cost)
    } else {
        format!("{}", cost)
    }
}

/// Formats a result in the stable text form
pub fn format_text(result: &SearchResult) -> String {
    format!(
        "{} {}\n{} {}\n",
        COST_PREFIX,
        format_cost(result.cost),
        PATH_PREFIX,
        result.path.join(" ")
    )
}

/// Formats a result as a single JSON object
pub fn format_json(result: &SearchResult, heuristic: &str) -> serde_json::Result<String> {
    serde_json::to_string(&JsonReport {
        cost: result.cost,
        path: &result.path,
        heuristic,
        stats: &result.stats,
    })
}

/// Writes `result` to `out` in the requested format
pub fn write_report<W: Write>(
    out: &mut W,
    result: &SearchResult,
    heuristic: &str,
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => out.write_all(format_text(result).as_bytes()),
        ReportFormat::Json => {
            let json = format_json(result, heuristic)?;
            writeln!(out, "{}", json)
        }
    }
}

/// Extracts the cost from reporter text output, as an external caller would
pub fn parse_cost(output: &str) -> Option<f64> {
    output
        .lines()
        .find_map(|line| line.strip_prefix(COST_PREFIX)?.strip_prefix(' '))
        .and_then(|value| value.trim().parse().ok())
}
