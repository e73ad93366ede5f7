use anyhow::Result;
use colored::Colorize;
use std::time::Duration;

use crate::simulation::ScenarioResult;

pub fn generate_console_report(results: &[ScenarioResult], total_duration: Duration) {
    println!();
    println!("{}", "🎡 Forfeit Simulation Summary".bright_cyan().bold());
    println!("{}", "=============================".cyan());

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = total - passed;

    println!("Total scenarios: {total}");
    println!("Passed: {}", passed.to_string().green());
    println!("Failed: {}", failed.to_string().red());
    if total > 0 {
        #[allow(clippy::cast_precision_loss)]
        let success_rate = (passed as f64 / total as f64) * 100.0;
        println!("Success rate: {success_rate:.1}%");
    }
    println!("Total time: {total_duration:?}");
    println!();

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };

        println!(
            "{} {} (seed {})",
            status,
            result.scenario_name.bold(),
            result.seed_label
        );
        println!(
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        );
        println!("   Average time: {:?}", result.average_duration);

        if let Some(summary) = &result.last_summary {
            match &summary.winner_name {
                Some(name) => println!("   Last game: {} wins", name.green()),
                None => println!("   Last game: tie"),
            }
        }

        if !result.failures.is_empty() {
            println!("   Failures:");
            for failure in &result.failures {
                println!("     • {}", failure.red());
            }
        }
        println!();
    }
}

/// Pretty-printed JSON of all scenario results.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json_report(results: &[ScenarioResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[must_use]
pub fn render_markdown_report(results: &[ScenarioResult]) -> String {
    let mut out = String::from("# Forfeit Simulation Results\n\n");

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = total - passed;

    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **Total scenarios**: {total}\n"));
    out.push_str(&format!("- **Passed**: {passed}\n"));
    out.push_str(&format!("- **Failed**: {failed}\n\n"));

    out.push_str("## Detailed Results\n\n");
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        out.push_str(&format!(
            "### {status} {} (seed {})\n\n",
            result.scenario_name, result.seed_label
        ));
        out.push_str(&format!(
            "- **Iterations**: {}/{} successful\n",
            result.successful_iterations, result.iterations_run
        ));
        out.push_str(&format!(
            "- **Average time**: {:?}\n",
            result.average_duration
        ));
        if !result.failures.is_empty() {
            out.push_str("- **Failures**:\n");
            for failure in &result.failures {
                out.push_str(&format!("  - {failure}\n"));
            }
        }
        out.push('\n');
    }
    out
}

#[must_use]
pub fn render_csv_report(results: &[ScenarioResult]) -> String {
    let mut out =
        String::from("scenario,seed,passed,iterations_run,successful_iterations,failures\n");
    for result in results {
        out.push_str(&format!(
            "{:?},{},{},{},{},{}\n",
            result.scenario_name,
            result.seed_label,
            result.passed,
            result.iterations_run,
            result.successful_iterations,
            result.failures.len()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample() -> Vec<ScenarioResult> {
        vec![ScenarioResult {
            scenario_name: "2p x 1 spins x 1 rounds [keen]".to_string(),
            seed_label: "FW-DISCO42".to_string(),
            passed: true,
            iterations_run: 3,
            successful_iterations: 3,
            failures: Vec::new(),
            average_duration: Duration::from_micros(12),
            last_summary: None,
        }]
    }

    #[test]
    fn json_report_is_valid_json() {
        let json = render_json_report(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["seed_label"], "FW-DISCO42");
        assert_eq!(value[0]["passed"], true);
    }

    #[test]
    fn markdown_report_lists_scenarios() {
        let markdown = render_markdown_report(&sample());
        assert!(markdown.contains("# Forfeit Simulation Results"));
        assert!(markdown.contains("2p x 1 spins x 1 rounds [keen]"));
        assert!(markdown.contains("3/3 successful"));
    }

    #[test]
    fn csv_report_has_header_and_rows() {
        let csv = render_csv_report(&sample());
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("scenario,seed"));
        assert!(lines[1].contains("FW-DISCO42"));
    }
}
