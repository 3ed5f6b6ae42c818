//! Value parsers for CLI arguments

use graphtree_core::format::OutputFormat;

/// Parse `--format`, accepting any casing of `human` / `json`
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
