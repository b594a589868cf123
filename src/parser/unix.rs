use super::Finding;
use regex::Regex;
use std::sync::OnceLock;

/// `path:line:col: message` with an optional trailing ` [rule]`, the
/// format most lint tools emit under a "unix" or "compact" formatter.
fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<file>[^:\s][^:]*):(?P<line>\d+):(?P<col>\d+):\s*(?P<message>.*?)(?:\s+\[(?P<rule>[^\]\s]+)\])?$")
            .expect("lint line pattern is valid")
    })
}

/// Parse lint tool output into findings, skipping any line that does not
/// match the unix format (summaries, blank lines, progress noise).
pub fn parse_unix_lines(raw: &str) -> Vec<Finding> {
    raw.lines()
        .filter_map(|line| {
            let caps = line_pattern().captures(line.trim_end())?;
            Some(Finding {
                file_path: caps["file"].to_string(),
                line: caps["line"].parse().ok()?,
                column: caps["col"].parse().ok()?,
                rule_id: caps.name("rule").map(|m| m.as_str().to_string()),
                message: caps["message"].trim().to_string(),
            })
        })
        .collect()
}
