use crate::parser::Finding;
use crate::scheduler::TaskResult;

const BYPASS_ADVISORY: &str = "The checkout failed (add `--no-verify` to your git commit to bypass)";

/// Render the run's results into the console report and its exit signal.
///
/// Pure over its input: same results, same text, same signal. Results
/// render in the order the scheduler produced them; findings group by
/// file path in first-appearance order.
pub fn render(results: &[TaskResult]) -> (String, i32) {
    let mut text = String::new();
    let mut signal = 0;

    for result in results {
        let verdict = if result.report.success {
            "OK".to_string()
        } else {
            format!("{} FAILED", result.report.findings.len())
        };

        text.push_str(&format!(
            "\n  Analyzing with {}: {}, {}s\n",
            result.linter_name,
            verdict,
            result.elapsed_millis as f64 / 1000.0
        ));

        if !result.report.success {
            for (file, findings) in group_by_file(&result.report.findings) {
                text.push_str(&format!("    {}\n", file));
                for finding in findings {
                    match &finding.rule_id {
                        Some(rule) => text.push_str(&format!(
                            "      {} [{}] ({}:{})\n",
                            finding.message, rule, finding.line, finding.column
                        )),
                        None => text.push_str(&format!(
                            "      {} ({}:{})\n",
                            finding.message, finding.line, finding.column
                        )),
                    }
                }
            }
            signal = 1;
        }
    }

    if signal != 0 {
        text.push_str(&format!("\n  {}\n", BYPASS_ADVISORY));
    }

    (text, signal)
}

/// Group findings by file path, first appearance first; within a group,
/// the linter's original order.
fn group_by_file(findings: &[Finding]) -> Vec<(&str, Vec<&Finding>)> {
    let mut groups: Vec<(&str, Vec<&Finding>)> = Vec::new();

    for finding in findings {
        match groups.iter_mut().find(|(file, _)| *file == finding.file_path) {
            Some((_, group)) => group.push(finding),
            None => groups.push((finding.file_path.as_str(), vec![finding])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Report;

    fn finding(file: &str, line: u32, message: &str) -> Finding {
        Finding {
            file_path: file.to_string(),
            line,
            column: 1,
            rule_id: None,
            message: message.to_string(),
        }
    }

    fn result(name: &str, findings: Vec<Finding>) -> TaskResult {
        TaskResult {
            linter_name: name.to_string(),
            report: Report::from_findings(findings),
            elapsed_millis: 12,
        }
    }

    #[test]
    fn test_clean_run_exits_zero() {
        let results = vec![result("eslint", vec![])];
        let (text, signal) = render(&results);
        assert_eq!(signal, 0);
        assert!(text.contains("Analyzing with eslint: OK, 0.012s"));
        assert!(!text.contains("--no-verify"));
    }

    #[test]
    fn test_zero_results_exit_zero() {
        let (text, signal) = render(&[]);
        assert_eq!(signal, 0);
        assert!(text.is_empty());
    }

    #[test]
    fn test_any_failure_sets_signal() {
        let results = vec![
            result("eslint", vec![]),
            result("stylint", vec![finding("a.styl", 3, "bad indent")]),
        ];
        let (text, signal) = render(&results);
        assert_eq!(signal, 1);
        assert!(text.contains("Analyzing with eslint: OK"));
        assert!(text.contains("Analyzing with stylint: 1 FAILED"));
        assert!(text.contains("--no-verify"));
    }

    #[test]
    fn test_two_findings_grouped_under_one_file() {
        let results = vec![
            result("a-lint", vec![]),
            result(
                "b-lint",
                vec![finding("src/z.js", 1, "first"), finding("src/z.js", 9, "second")],
            ),
        ];
        let (text, signal) = render(&results);
        assert_eq!(signal, 1);
        assert!(text.contains("b-lint: 2 FAILED"));
        // One group header, both findings under it in original order
        assert_eq!(text.matches("    src/z.js\n").count(), 1);
        let first = text.find("first").unwrap();
        let second = text.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_groups_in_first_appearance_order() {
        let results = vec![result(
            "eslint",
            vec![
                finding("a.js", 1, "one"),
                finding("b.js", 2, "two"),
                finding("a.js", 3, "three"),
            ],
        )];
        let (text, _) = render(&results);

        let a = text.find("    a.js\n").unwrap();
        let b = text.find("    b.js\n").unwrap();
        assert!(a < b);
        // Both a.js findings sit in the a.js group, keeping relative order
        let one = text.find("one").unwrap();
        let three = text.find("three").unwrap();
        let two = text.find("two").unwrap();
        assert!(one < three && three < two);
    }

    #[test]
    fn test_rule_id_rendered_in_brackets() {
        let mut f = finding("a.js", 4, "no shadowing");
        f.rule_id = Some("no-shadow".to_string());
        f.column = 7;
        let (text, _) = render(&[result("eslint", vec![f])]);
        assert!(text.contains("no shadowing [no-shadow] (4:7)"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let results = vec![
            result("eslint", vec![finding("a.js", 1, "x")]),
            result("stylint", vec![]),
        ];
        let first = render(&results);
        let second = render(&results);
        assert_eq!(first, second);
    }

    #[test]
    fn test_results_render_in_given_order() {
        let results = vec![result("zeta", vec![]), result("alpha", vec![])];
        let (text, _) = render(&results);
        assert!(text.find("zeta").unwrap() < text.find("alpha").unwrap());
    }
}
