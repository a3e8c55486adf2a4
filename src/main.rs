use clap::{Parser, Subcommand, ValueEnum};
use std::collections::BTreeMap;
use std::path::PathBuf;

use siterank::candidate::{load_candidates, loader::load_all_candidates, Candidate};
use siterank::scoring::{
    analyze_sensitivity, builtin_scenarios, calculate_score, compare_candidates, default_weights,
    validate_candidate, validate_weights, WeightProfile,
};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score each candidate in a file with a detailed breakdown
    Score {
        /// Candidate file (YAML or JSON)
        input: PathBuf,

        /// Write the results as JSON to this path (atomic)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Rank candidates from one or more files/glob patterns
    Compare {
        /// Candidate files or glob patterns (e.g. 'lands/*.yaml')
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write the comparison as JSON to this path (atomic)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Analyze how one candidate's score shifts under alternative weights
    Sensitivity {
        /// Candidate file (YAML or JSON)
        input: PathBuf,

        /// Candidate id to analyze (defaults to the first in the file)
        #[arg(long)]
        candidate: Option<String>,

        /// Write the analysis as JSON to this path (atomic)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a starter config with default weights and built-in scenarios
    Init {
        /// Config path (defaults to ~/.config/siterank/config.yaml)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "siterank")]
#[command(about = "Weighted suitability scoring for candidate land parcels", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/siterank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use a named weight profile from the config (or a built-in scenario)
    #[arg(short, long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Pick the active weight profile: --profile beats config weights beats
/// built-in defaults.
fn resolve_weights(
    config: &siterank::config::Config,
    profile: Option<&str>,
) -> Result<WeightProfile, String> {
    let Some(name) = profile else {
        return Ok(config.weights.clone().unwrap_or_else(default_weights));
    };

    if let Some(scenarios) = &config.scenarios {
        if let Some(weights) = scenarios.get(name) {
            return Ok(weights.clone());
        }
    }
    if let Some(weights) = builtin_scenarios().remove(name) {
        return Ok(weights);
    }
    Err(format!("Unknown profile '{}'", name))
}

fn report_candidate_gaps(candidates: &[Candidate]) {
    for candidate in candidates {
        let validation = validate_candidate(candidate);
        if !validation.is_valid {
            eprintln!(
                "{}: missing {:?}, invalid {:?}",
                candidate.label(),
                validation.missing_fields,
                validation.invalid_fields
            );
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match siterank::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let weights = match resolve_weights(&config, cli.profile.as_deref()) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate the active profile at startup
    if let Err(errors) = validate_weights(&weights) {
        eprintln!("Weight profile errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        let total: f64 = weights.values().sum();
        eprintln!(
            "Using {} weighted attributes (total weight {})",
            weights.len(),
            total
        );
    }

    let use_colors = siterank::output::should_use_colors();

    match cli.command {
        Commands::Score { input, output } => {
            let candidates = match load_candidates(&input) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Input error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            if candidates.is_empty() {
                eprintln!("No candidates in {}", input.display());
                std::process::exit(EXIT_INPUT);
            }
            if cli.verbose {
                report_candidate_gaps(&candidates);
            }

            let results: Vec<_> = candidates
                .iter()
                .map(|candidate| calculate_score(candidate, &weights))
                .collect();

            for (candidate, result) in candidates.iter().zip(&results) {
                println!(
                    "{}",
                    siterank::output::format_score_report(candidate.label(), result, use_colors)
                );
                println!();
            }

            if let Some(path) = output {
                if let Err(e) = siterank::output::write_json_report(&path, &results) {
                    eprintln!("Failed to write report: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            }
        }
        Commands::Compare {
            inputs,
            format,
            output,
        } => {
            let candidates = match load_all_candidates(&inputs) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Input error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            if cli.verbose {
                eprintln!("Loaded {} candidates", candidates.len());
                report_candidate_gaps(&candidates);
            }

            let comparison = compare_candidates(&candidates, &weights);

            match format {
                OutputFormat::Table => println!(
                    "{}",
                    siterank::output::format_ranking_table(&comparison, use_colors)
                ),
                OutputFormat::Tsv => {
                    println!("{}", siterank::output::format_ranking_tsv(&comparison))
                }
                OutputFormat::Json => match serde_json::to_string_pretty(&comparison) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize comparison: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
            }

            if let Some(path) = output {
                if let Err(e) = siterank::output::write_json_report(&path, &comparison) {
                    eprintln!("Failed to write report: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            }
        }
        Commands::Sensitivity {
            input,
            candidate,
            output,
        } => {
            let candidates = match load_candidates(&input) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Input error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let target = match &candidate {
                Some(id) => candidates.iter().find(|c| c.id.as_deref() == Some(id.as_str())),
                None => candidates.first(),
            };
            let Some(target) = target else {
                match candidate {
                    Some(id) => eprintln!("No candidate with id '{}' in {}", id, input.display()),
                    None => eprintln!("No candidates in {}", input.display()),
                }
                std::process::exit(EXIT_INPUT);
            };

            let extra_scenarios: BTreeMap<String, WeightProfile> =
                config.scenarios.clone().unwrap_or_default();
            let analysis = analyze_sensitivity(target, &extra_scenarios);

            println!(
                "{}",
                siterank::output::format_sensitivity_report(&analysis, use_colors)
            );

            if let Some(path) = output {
                if let Err(e) = siterank::output::write_json_report(&path, &analysis) {
                    eprintln!("Failed to write report: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            }
        }
        Commands::Init { path } => {
            if let Err(e) = siterank::config::write_default_config(path) {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
