//! Command-line front end for the agro advisory engine.
//!
//! Three subcommands: `advise` runs the full pipeline against an
//! observation file, `context` shows the derived fact mapping, and
//! `validate` runs the strict rule-table pass. Exit codes: 0 on
//! success, 1 on load/validation failure, 2 on usage errors (clap).

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use agro_eval::Observation;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Farm weather advisory engine.
#[derive(Parser)]
#[command(name = "agro", version, about = "Farm weather advisory engine")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an observation against a rule table and print advisories
    Advise {
        /// Path to the observation JSON file (current + optional forecast)
        observation: PathBuf,
        /// Path to the rule table JSON file
        #[arg(long)]
        rules: PathBuf,
    },

    /// Print the evaluation context derived from an observation
    Context {
        /// Path to the observation JSON file
        observation: PathBuf,
    },

    /// Check a rule table for defects the evaluator silently ignores
    Validate {
        /// Path to the rule table JSON file
        rules: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Advise { observation, rules } => cmd_advise(&rules, &observation, cli.output),
        Commands::Context { observation } => cmd_context(&observation, cli.output),
        Commands::Validate { rules } => cmd_validate(&rules),
    };
    process::exit(code);
}

fn cmd_advise(rules_path: &Path, observation_path: &Path, output: OutputFormat) -> i32 {
    let rules = match agro_core::load_rules(rules_path) {
        Ok(rules) => rules,
        Err(err) => return fail(&err),
    };
    let observation = match load_observation(observation_path) {
        Ok(observation) => observation,
        Err(err) => return fail(err.as_ref()),
    };

    let advisories = agro_eval::advise(&rules, &observation);
    match output {
        OutputFormat::Json => print_json(&advisories),
        OutputFormat::Text => {
            for advisory in &advisories {
                println!(
                    "[{}] {} ({})",
                    advisory.kind.label().to_uppercase(),
                    advisory.title,
                    advisory.icon
                );
                println!("    {}", advisory.message);
            }
        }
    }
    0
}

fn cmd_context(observation_path: &Path, output: OutputFormat) -> i32 {
    let observation = match load_observation(observation_path) {
        Ok(observation) => observation,
        Err(err) => return fail(err.as_ref()),
    };

    let context = agro_eval::build_context(&observation);
    match output {
        OutputFormat::Json => print_json(&context),
        OutputFormat::Text => {
            for (key, value) in context.iter() {
                match value {
                    agro_core::Scalar::Number(n) => println!("{} = {}", key, n),
                    agro_core::Scalar::Bool(b) => println!("{} = {}", key, b),
                }
            }
        }
    }
    0
}

fn cmd_validate(rules_path: &Path) -> i32 {
    let rules = match agro_core::load_rules(rules_path) {
        Ok(rules) => rules,
        Err(err) => return fail(&err),
    };

    let issues = agro_core::validate(&rules);
    if issues.is_empty() {
        println!("ok: {} rules, no issues", rules.rules.len());
        0
    } else {
        for issue in &issues {
            eprintln!("{}", issue);
        }
        eprintln!("{} issue(s) found", issues.len());
        1
    }
}

fn load_observation(path: &Path) -> Result<Observation, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read observation {}: {}", path.display(), e))?;
    let observation = serde_json::from_str(&text)
        .map_err(|e| format!("invalid observation {}: {}", path.display(), e))?;
    Ok(observation)
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("error: {}", err);
        }
    }
}

/// Print an error and its source chain to stderr, returning the exit code.
fn fail(err: &dyn Error) -> i32 {
    eprintln!("error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
    1
}
