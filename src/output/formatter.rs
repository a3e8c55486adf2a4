use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::compare::ComparisonResult;
use crate::scoring::sensitivity::SensitivityResult;
use crate::scoring::ScoreResult;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Grade string with severity coloring.
fn format_grade(grade: &str, use_colors: bool) -> String {
    if !use_colors {
        return grade.to_string();
    }
    match grade {
        "A+" | "A" => grade.green().to_string(),
        "B+" | "B" => grade.yellow().to_string(),
        _ => grade.red().to_string(),
    }
}

/// Detailed multi-line score report for one candidate.
pub fn format_score_report(label: &str, result: &ScoreResult, use_colors: bool) -> String {
    if !result.success {
        let message = result.error.as_deref().unwrap_or("score calculation failed");
        return if use_colors {
            format!("{}\n  {}", label.bold(), message.red())
        } else {
            format!("{}\n  {}", label, message)
        };
    }

    let mut lines = Vec::new();
    if use_colors {
        lines.push(format!(
            "{}\n  Score: {} ({})",
            label.bold(),
            format!("{:.2}", result.final_score).bold(),
            format_grade(&result.grade, true)
        ));
    } else {
        lines.push(format!(
            "{}\n  Score: {:.2} ({})",
            label, result.final_score, result.grade
        ));
    }

    for (key, detail) in &result.detailed_scores {
        let raw = match &detail.raw_value {
            crate::candidate::AttributeValue::Number(n) => format!("{}", n),
            crate::candidate::AttributeValue::Text(s) => s.clone(),
        };
        if use_colors {
            lines.push(format!(
                "  {:<22} {:>10}  {:.3} x {:>4}% = {:.3}",
                key.cyan(),
                raw,
                detail.normalized_score,
                detail.weight,
                detail.weighted_score
            ));
        } else {
            lines.push(format!(
                "  {:<22} {:>10}  {:.3} x {:>4}% = {:.3}",
                key, raw, detail.normalized_score, detail.weight, detail.weighted_score
            ));
        }
    }

    lines.join("\n")
}

/// Format a comparison as a ranked table: Rank, Score, Grade, Label.
/// No headers; labels are truncated to the terminal width.
pub fn format_ranking_table(comparison: &ComparisonResult, use_colors: bool) -> String {
    if comparison.rankings.is_empty() && comparison.skipped.is_empty() {
        return "No candidates found.".to_string();
    }

    let term_width = get_terminal_width();

    // Rank column: 3 chars. Score column: 6 chars (fits "100.00" minus one;
    // scores are 0-100 with two decimals). Grade column: 2 chars.
    let rank_width = 3;
    let score_width = 6;
    let separator = "  ";
    let fixed_width = rank_width + 1 + score_width + 2 + separator.len() * 2;

    let mut lines: Vec<String> = comparison
        .rankings
        .iter()
        .map(|entry| {
            let rank_str = format!("{:>2}.", entry.rank);
            let score_str = format!("{:>width$.2}", entry.result.final_score, width = score_width);
            let full_label = match (&entry.id, &entry.address) {
                (Some(id), Some(address)) => format!("{}  {}", id, address),
                (Some(id), None) => id.clone(),
                (None, Some(address)) => address.clone(),
                (None, None) => "(unnamed)".to_string(),
            };
            let label = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_label(&full_label, width - fixed_width)
                } else {
                    truncate_label(&full_label, 20)
                }
            } else {
                full_label
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str.dimmed(),
                    score_str.bold(),
                    separator,
                    format_grade(&entry.result.grade, true),
                    separator,
                    label
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str, score_str, separator, entry.result.grade, separator, label
                )
            }
        })
        .collect();

    if let Some(stats) = &comparison.statistics {
        lines.push(String::new());
        lines.push(format!(
            "avg {:.2}  max {:.2}  min {:.2}  range {:.2}",
            stats.average_score, stats.highest_score, stats.lowest_score, stats.score_range
        ));
    }

    for skipped in &comparison.skipped {
        lines.push(if use_colors {
            format!("skipped {}: {}", skipped.label, skipped.error.red())
        } else {
            format!("skipped {}: {}", skipped.label, skipped.error)
        });
    }

    lines.join("\n")
}

/// Format a comparison as tab-separated values for scripting.
/// Columns: rank, score, grade, id, address (no headers, no colors)
pub fn format_ranking_tsv(comparison: &ComparisonResult) -> String {
    comparison
        .rankings
        .iter()
        .map(|entry| {
            format!(
                "{}\t{:.2}\t{}\t{}\t{}",
                entry.rank,
                entry.result.final_score,
                entry.result.grade,
                entry.id.as_deref().unwrap_or(""),
                entry.address.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a sensitivity analysis: baseline, per-scenario scores, deltas.
pub fn format_sensitivity_report(analysis: &SensitivityResult, use_colors: bool) -> String {
    if !analysis.success {
        let message = analysis
            .error
            .as_deref()
            .unwrap_or("sensitivity analysis failed");
        return if use_colors {
            message.red().to_string()
        } else {
            message.to_string()
        };
    }

    let mut lines = Vec::new();
    let baseline_line = format!(
        "baseline ({}): {:.2}",
        analysis.baseline_scenario, analysis.baseline_score
    );
    lines.push(if use_colors {
        baseline_line.bold().to_string()
    } else {
        baseline_line
    });

    for (name, outcome) in &analysis.scenarios {
        if name == &analysis.baseline_scenario {
            continue;
        }
        let delta = &analysis.variations[name];
        let sign = if delta.score_change >= 0.0 { "+" } else { "" };
        let line = format!(
            "{:<22} {:>6.2} ({})  {}{:.2} ({}{:.2}%)",
            name,
            outcome.final_score,
            outcome.grade,
            sign,
            delta.score_change,
            sign,
            delta.percentage_change
        );
        lines.push(if use_colors && delta.score_change < 0.0 {
            line.red().to_string()
        } else if use_colors && delta.score_change > 0.0 {
            line.green().to_string()
        } else {
            line
        });
    }

    if let Some(most) = &analysis.most_sensitive_to {
        lines.push(format!("most sensitive to: {}", most));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{AttributeValue, Candidate};
    use crate::scoring::{analyze_sensitivity, calculate_score, compare_candidates, default_weights};
    use std::collections::BTreeMap;

    fn candidate(id: &str, land_area: f64) -> Candidate {
        let mut attributes = BTreeMap::new();
        attributes.insert("land_area".to_string(), AttributeValue::Number(land_area));
        attributes.insert(
            "zone_type".to_string(),
            AttributeValue::from("industrial zone"),
        );
        Candidate {
            id: Some(id.to_string()),
            address: Some("Mipo industrial district".to_string()),
            attributes,
        }
    }

    #[test]
    fn test_format_score_report_contains_breakdown() {
        let c = candidate("lot-1", 15000.0);
        let result = calculate_score(&c, &default_weights());
        let report = format_score_report("lot-1", &result, false);

        assert!(report.contains("lot-1"));
        assert!(report.contains("Score:"));
        assert!(report.contains("land_area"));
        assert!(report.contains("zone_type"));
        assert!(report.contains("industrial zone"));
    }

    #[test]
    fn test_format_ranking_table_empty() {
        let comparison = compare_candidates(&[], &default_weights());
        let table = format_ranking_table(&comparison, false);
        assert_eq!(table, "No candidates found.");
    }

    #[test]
    fn test_format_ranking_table_rows_and_stats() {
        let candidates = vec![candidate("a", 40000.0), candidate("b", 5000.0)];
        let comparison = compare_candidates(&candidates, &default_weights());
        let table = format_ranking_table(&comparison, false);

        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[0].contains("a"));
        assert!(table.contains("avg"));
        assert!(table.contains("range"));
    }

    #[test]
    fn test_format_ranking_tsv_columns() {
        let candidates = vec![candidate("a", 40000.0)];
        let comparison = compare_candidates(&candidates, &default_weights());
        let tsv = format_ranking_tsv(&comparison);

        let fields: Vec<&str> = tsv.split('\t').collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0], "1");
        assert_eq!(fields[3], "a");
    }

    #[test]
    fn test_format_ranking_tsv_empty() {
        let comparison = compare_candidates(&[], &default_weights());
        assert_eq!(format_ranking_tsv(&comparison), "");
    }

    #[test]
    fn test_format_sensitivity_report_lists_scenarios() {
        let c = candidate("lot-1", 15000.0);
        let analysis = analyze_sensitivity(&c, &BTreeMap::new());
        let report = format_sensitivity_report(&analysis, false);

        assert!(report.contains("baseline (default)"));
        assert!(report.contains("cost_focus"));
        assert!(report.contains("infrastructure_focus"));
        assert!(report.contains("stability_focus"));
        assert!(report.contains("most sensitive to:"));
    }

    #[test]
    fn test_truncate_label_short() {
        assert_eq!(truncate_label("Short", 20), "Short");
    }

    #[test]
    fn test_truncate_label_long() {
        assert_eq!(
            truncate_label("This is a very long address", 15),
            "This is a ve..."
        );
    }

    #[test]
    fn test_truncate_label_very_narrow() {
        assert_eq!(truncate_label("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_grade_plain() {
        assert_eq!(format_grade("A+", false), "A+");
        assert_eq!(format_grade("C", false), "C");
    }
}
