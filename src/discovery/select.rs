use std::collections::HashSet;

/// Turn raw diff output into the run's file list.
///
/// Pure function: trims the input, splits on newlines, drops empty
/// entries, drops any path containing an exclude pattern as a substring,
/// and deduplicates while keeping first-appearance order. Report grouping
/// depends on that order being stable.
pub fn select(raw: &str, exclude_patterns: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();

    raw.trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !exclude_patterns.iter().any(|p| line.contains(p.as_str())))
        .filter(|line| seen.insert(line.to_string()))
        .map(str::to_string)
        .collect()
}
