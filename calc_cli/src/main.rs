//! # Tally CLI Application
//!
//! Terminal front end for the calculators in `calc_core`: one-shot
//! evaluation, an interactive mode that recomputes after every entry, page
//! fragment output, and reference docs.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calc_core::formulas::generate_calculators_markdown;
use calc_core::settings::MAX_PRECISION;
use calc_core::{
    evaluate, render_fragment, Calculator, CalculatorCategory, CalculatorState, Evaluation, Page,
    Settings,
};

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Tally calculators from the terminal")]
struct Cli {
    /// TOML settings file (angle unit, display precision, site text).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List calculators with their slugs and routes.
    List {
        /// Only show one category (e.g. "logarithms", "power units").
        #[arg(long)]
        category: Option<String>,
    },
    /// Evaluate a calculator once.
    Calc {
        /// Calculator slug, alias or route path.
        slug: String,
        /// Raw field values, in order.
        #[arg(allow_negative_numbers = true)]
        inputs: Vec<String>,
        /// Print the structured result or error as JSON.
        #[arg(long)]
        json: bool,
        /// Override display precision.
        #[arg(long)]
        precision: Option<u8>,
    },
    /// Prompt for each field and recompute after every entry.
    Interactive {
        slug: String,
    },
    /// Print the HTML fragment for a calculator page.
    Page {
        slug: String,
        #[arg(allow_negative_numbers = true)]
        inputs: Vec<String>,
    },
    /// Write the calculators reference markdown.
    Docs {
        /// Output file; stdout when omitted.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Print the effective settings as TOML.
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    match cli.command {
        Command::List { category } => list(category.as_deref())?,
        Command::Calc {
            slug,
            inputs,
            json,
            precision,
        } => return calc(&slug, &inputs, json, precision, settings),
        Command::Interactive { slug } => interactive(&slug, settings)?,
        Command::Page { slug, inputs } => {
            let calculator = Calculator::lookup(&slug)?;
            let page = Page::for_calculator(calculator);
            let state = CalculatorState::with_inputs(calculator, &inputs, settings);
            print!("{}", render_fragment(&page, &state));
        }
        Command::Docs { out } => {
            let markdown = generate_calculators_markdown();
            match out {
                Some(path) => {
                    fs::write(&path, &markdown)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote {} bytes to {}", markdown.len(), path.display());
                }
                None => print!("{}", markdown),
            }
        }
        Command::Config => print!("{}", settings.to_toml_string()?),
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ============================================================================
// Commands
// ============================================================================

fn list(category: Option<&str>) -> Result<()> {
    let categories = match category {
        Some(name) => vec![parse_category(name)?],
        None => Calculator::all_categories(),
    };

    for category in categories {
        println!("{}", category.display_name());
        for calc in Calculator::in_category(category) {
            let meta = calc.metadata();
            println!("  {:<28} {:<40} {}", meta.slug, meta.path(), meta.name);
        }
        println!();
    }
    Ok(())
}

fn parse_category(name: &str) -> Result<CalculatorCategory> {
    let wanted = normalize(name);
    Calculator::all_categories()
        .into_iter()
        .find(|cat| normalize(cat.display_name()) == wanted)
        .with_context(|| format!("unknown category '{}'", name))
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn calc(
    slug: &str,
    inputs: &[String],
    json: bool,
    precision: Option<u8>,
    mut settings: Settings,
) -> Result<ExitCode> {
    let calculator = Calculator::lookup(slug)?;
    if let Some(precision) = precision {
        if precision > MAX_PRECISION {
            bail!("--precision must be at most {}", MAX_PRECISION);
        }
        settings.display.precision = Some(precision);
    }

    match evaluate(calculator, inputs, &settings) {
        Ok(output) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{} = {}", output.label, output.display_with_unit());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_validation() => {
            if json {
                println!("{}", serde_json::to_string_pretty(&err)?);
            } else {
                eprintln!("{}", err.user_message());
            }
            Ok(ExitCode::from(1))
        }
        Err(err) => Err(err.into()),
    }
}

fn interactive(slug: &str, settings: Settings) -> Result<()> {
    let calculator = Calculator::lookup(slug)?;
    let mut state = CalculatorState::new(calculator, settings);

    println!("{}", state.metadata().title);
    println!("{}", "=".repeat(state.metadata().title.chars().count()));
    println!("Formula: {}", state.metadata().formula_plain);
    println!("Press Enter to keep a value, 'q' to quit.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let field_count = state.fields().len();
        for index in 0..field_count {
            let label = field_prompt(&state, index);
            let current = state.fields()[index].clone();
            print!("{} [{}]: ", label, current);
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            let entry = line.trim();
            if entry.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            if !entry.is_empty() {
                state.set_input(index, entry);
                debug!(index, entry, "field updated");
            }
            println!("  {}", status_line(state.evaluation()));
        }

        if state.metadata().variadic {
            print!("Add another number? [y/N]: ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let answer = line?;
            match answer.trim() {
                "q" | "Q" => return Ok(()),
                "y" | "Y" => {
                    state.add_field();
                }
                _ => {}
            }
        }
        println!();
    }
}

fn field_prompt(state: &CalculatorState, index: usize) -> String {
    match state.metadata().field(index) {
        Some(field) if field.is_angle => {
            format!("{} ({})", field.label, state.settings().angle_unit.symbol())
        }
        Some(field) => match field.unit {
            Some(unit) => format!("{} ({})", field.label, unit),
            None => field.label.to_string(),
        },
        None => format!("Value {}", index + 1),
    }
}

fn status_line(evaluation: &Evaluation) -> String {
    match evaluation {
        Evaluation::Pending => "[..] waiting for input".to_string(),
        Evaluation::Ready { output } => {
            format!("[OK] {} = {}", output.label, output.display_with_unit())
        }
        Evaluation::Invalid { message, .. } => format!("[!!] {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_calc() {
        let cli = Cli::parse_from(["calc_cli", "calc", "log-calculator", "100", "--json"]);
        match cli.command {
            Command::Calc { slug, inputs, json, .. } => {
                assert_eq!(slug, "log-calculator");
                assert_eq!(inputs, vec!["100".to_string()]);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_negative_inputs_are_values() {
        let cli = Cli::parse_from(["calc_cli", "calc", "arcsin-calculator", "-0.5"]);
        match cli.command {
            Command::Calc { inputs, .. } => assert_eq!(inputs, vec!["-0.5".to_string()]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("power units").unwrap(), CalculatorCategory::PowerUnits);
        assert_eq!(parse_category("Powers & Roots").unwrap(), CalculatorCategory::PowersAndRoots);
        assert_eq!(parse_category("LOGARITHMS").unwrap(), CalculatorCategory::Logarithms);
        assert!(parse_category("astrology").is_err());
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(&Evaluation::Pending), "[..] waiting for input");

        let state = CalculatorState::with_inputs(Calculator::Gcf, &["12", "18"], Settings::default());
        assert_eq!(status_line(state.evaluation()), "[OK] GCF = 6");

        let state = CalculatorState::with_inputs(Calculator::Log, &["-5"], Settings::default());
        assert!(status_line(state.evaluation()).starts_with("[!!] Logarithm"));
    }

    #[test]
    fn test_field_prompt_uses_angle_symbol() {
        let state = CalculatorState::new(Calculator::Sine, Settings::default());
        assert_eq!(field_prompt(&state, 0), "Angle (°)");
    }
}
