use std::time::SystemTime;

use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use rexgen_core::{ParseOptions, Pattern};

#[derive(Parser)]
#[command(name = "rexgen")]
#[command(about = "Rexgen - generate random strings from a small regex subset")]
#[command(version)]
struct Cli {
    /// The pattern to parse
    pattern: String,

    /// Print the parsed tree, the seed, and per-sample verification info
    #[arg(short, long)]
    verbose: bool,

    /// Number of samples to generate (zero or negative generates none)
    #[arg(short, long, default_value_t = 10)]
    tests: i64,

    /// Upper bound on repetitions for `*` and `+` elements
    #[arg(short, long, default_value_t = 10)]
    quantity: usize,

    /// Seed for the random source; derived from the system clock when absent
    #[arg(short, long)]
    seed: Option<u64>,

    /// Treat `\]` inside bracket expressions as body content
    #[arg(short, long)]
    escaped_brackets: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = ParseOptions {
        escape_aware_brackets: cli.escaped_brackets,
    };
    let pattern = match Pattern::with_options(&cli.pattern, options) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if !pattern.matched() {
        eprintln!("{} pattern contains no elements", "Error:".red().bold());
        std::process::exit(1);
    }

    let seed = cli.seed.unwrap_or_else(seed_from_system_time);
    let mut rng = Mcg128Xsl64::seed_from_u64(seed);

    let verifier = if cli.verbose {
        println!("{}", "======== Tree ========".bold());
        print!("{}", pattern.tree());
        println!("{} {}", "Seed:".bold(), seed);
        compile_verifier(&cli.pattern)
    } else {
        None
    };

    if cli.tests <= 0 {
        return;
    }

    if cli.verbose {
        println!("{}", "======== Tests ========".bold());
    }

    for i in 0..cli.tests {
        let sample = match pattern.generate(cli.quantity, &mut rng) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        };

        if cli.verbose {
            println!("Test {}:", i + 1);
            println!("  Pattern: {}", sample.as_str().cyan());
            let flag = match &verifier {
                Some(re) => {
                    if satisfies(re, &sample) {
                        "true".green()
                    } else {
                        "false".red()
                    }
                }
                None => "unavailable".yellow(),
            };
            println!("  Satisfies pattern: {}", flag);
        } else {
            println!("{}", sample);
        }
    }
}

/// Compile the pattern with the full regex engine for diagnostic checks
///
/// The subset treats characters like `{` and `(` as literals, so a
/// pattern can be valid here and still be rejected by the engine; in
/// that case verification is reported as unavailable.
fn compile_verifier(pattern: &str) -> Option<regex::Regex> {
    match regex::Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(_) => {
            eprintln!(
                "{} pattern is outside the verification engine's syntax; skipping checks",
                "Warning:".yellow().bold()
            );
            None
        }
    }
}

/// Anchored whole-string check of a sample against the engine
fn satisfies(re: &regex::Regex, sample: &str) -> bool {
    re.find(sample)
        .is_some_and(|m| m.start() == 0 && m.end() == sample.len())
}

fn seed_from_system_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}
