//! Toy operations CLI.
//!
//! `toybox run` executes the whole fixed sequence; the other subcommands run a
//! single operation. Values come from `toybox.toml` (or `--config`) and
//! subcommand arguments override them. `reverse` and `calc` never read the
//! config, and `probe` falls back to defaults when it is unusable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use toybox::core::calc::{MAX_CALC_N, complex_calc};
use toybox::core::random::{draw, rng_from_seed};
use toybox::core::reverse::reverse_str;
use toybox::exit_codes;
use toybox::io::config::{
    DEFAULT_CONFIG_FILE, ToyConfig, init_config, load_config, read_config,
};
use toybox::io::probe::probe_file;
use toybox::logging;
use toybox::report::{self, render_json, render_text, total_line};

#[derive(Parser)]
#[command(name = "toybox", version, about = "A handful of unrelated toy operations")]
struct Cli {
    /// Config file. A missing file means built-in defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default config file if it does not exist yet.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Run every operation in order and print the results.
    Run {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print `x * y + (x + y) + global`.
    Total {
        #[arg(long, allow_negative_numbers = true)]
        x: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        y: Option<i64>,
    },
    /// Reverse a string.
    Reverse { text: String },
    /// Run the numeric loop for `n`.
    Calc {
        #[arg(value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_CALC_N)))]
        n: u32,
    },
    /// Try to open a file; failure prints `<nil>` and still succeeds.
    Probe { path: Option<PathBuf> },
    /// Print pseudo-random numbers in `0..upper`.
    Random {
        #[arg(long)]
        count: Option<usize>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        upper: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;
    match cli.command {
        Command::Init { force } => {
            if init_config(&config_path, force)? {
                println!("wrote {}", config_path.display());
            } else {
                println!("kept {}", config_path.display());
            }
            Ok(())
        }
        Command::Run { format } => {
            let cfg = load_config(&config_path).context("load config")?;
            cmd_run(&cfg, format)
        }
        Command::Total { x, y } => {
            let mut cfg = read_config(&config_path).context("load config")?;
            if let Some(x) = x {
                cfg.arith.x = x;
            }
            if let Some(y) = y {
                cfg.arith.y = y;
            }
            println!("Total: {}", total_line(&cfg)?);
            Ok(())
        }
        Command::Reverse { text } => {
            println!("Reversed: {}", reverse_str(&text));
            Ok(())
        }
        Command::Calc { n } => {
            let res = complex_calc(n).with_context(|| format!("complex calc of n={}", n))?;
            println!("ComplexCalc: {}", res);
            Ok(())
        }
        Command::Probe { path } => {
            let path = match path {
                Some(path) => path,
                None => config_or_default(&config_path).probe_path,
            };
            println!("File pointer: {}", probe_file(&path));
            Ok(())
        }
        Command::Random { count, upper, seed } => {
            let mut cfg = read_config(&config_path).context("load config")?;
            if let Some(count) = count {
                cfg.random.count = count;
            }
            if let Some(upper) = upper {
                cfg.random.upper = upper;
            }
            if seed.is_some() {
                cfg.random.seed = seed;
            }
            cfg.random.validate().context("validate random settings")?;
            let mut rng = rng_from_seed(cfg.random.seed);
            for value in draw(&mut rng, cfg.random.count, cfg.random.upper) {
                println!("Random number: {}", value);
            }
            Ok(())
        }
    }
}

/// Config for commands that must not fail on a bad config file.
fn config_or_default(path: &Path) -> ToyConfig {
    load_config(path).unwrap_or_else(|err| {
        debug!(
            config = %path.display(),
            error = %format!("{:#}", err),
            "config unusable, using defaults"
        );
        ToyConfig::default()
    })
}

fn cmd_run(cfg: &ToyConfig, format: OutputFormat) -> Result<()> {
    let mut rng = rng_from_seed(cfg.random.seed);
    let report = report::run(cfg, &mut rng)?;
    let rendered = match format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };
    print!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["toybox", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn parse_run_defaults_to_text() {
        let cli = Cli::parse_from(["toybox", "run"]);
        assert!(matches!(
            cli.command,
            Command::Run {
                format: OutputFormat::Text
            }
        ));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["toybox", "run", "--format", "json", "--config", "alt.toml"]);
        assert!(matches!(
            cli.command,
            Command::Run {
                format: OutputFormat::Json
            }
        ));
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }

    #[test]
    fn parse_total_overrides() {
        let cli = Cli::parse_from(["toybox", "total", "--x=-3", "--y", "4"]);
        assert!(matches!(
            cli.command,
            Command::Total {
                x: Some(-3),
                y: Some(4)
            }
        ));
    }

    #[test]
    fn calc_rejects_out_of_range_input() {
        let too_big = (MAX_CALC_N + 1).to_string();
        assert!(Cli::try_parse_from(["toybox", "calc", too_big.as_str()]).is_err());
        assert!(Cli::try_parse_from(["toybox", "calc", "8"]).is_ok());
    }

    #[test]
    fn random_rejects_zero_upper() {
        assert!(Cli::try_parse_from(["toybox", "random", "--upper", "0"]).is_err());
    }
}
