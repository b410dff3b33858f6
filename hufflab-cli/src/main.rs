//! Hufflab CLI - Huffman coding analysis from the terminal
//!
//! The binary is named `hufflab` and consumes the `hufflab` library crate:
//! it parses a symbol probability table, runs the analysis pipeline, and
//! renders or exports the result.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

mod commands;
mod config;
mod output;

// Global context for commands to access
pub static GLOBAL_OPTS: OnceLock<GlobalOptions> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub output: OutputFormat,
    pub verbose: u8,
    pub quiet: bool,
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(
    name = "hufflab",
    about = "Huffman coding analysis: optimal prefix codes and entropy statistics",
    long_about = None,
    after_help = "INPUT FORMAT:
    One `identifier,probability` record per line; lines without a comma are
    skipped. An empty identifier stands for the blank symbol. Probabilities
    must lie in [0, 1] and sum to 1 within 0.01.

EXAMPLES:
    # Analyze a table and print codes plus statistics
    hufflab analyze symbols.txt --channel-rate 2.5

    # Read the table from stdin
    printf 'A,0.5\\nB,0.5\\n' | hufflab analyze - --channel-rate 2

    # Print the merge tree
    hufflab tree symbols.txt

    # Write the full analysis report to a file
    hufflab export symbols.txt --channel-rate 2.5 -t report.txt

    # Machine-readable output
    hufflab analyze symbols.txt --channel-rate 2 -o json

    # Generate shell completions
    hufflab completion bash > ~/.bash_completion.d/hufflab.bash"
)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(global = true, short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(global = true, short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(global = true, long)]
    no_color: bool,

    /// Path to a configuration file
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a symbol table: codewords and efficiency statistics
    Analyze {
        /// Path to the symbol table file, or `-` for stdin
        input: String,
        /// Channel capacity in bits per symbol
        #[arg(short = 'r', long)]
        channel_rate: Option<f64>,
    },
    /// Print the Huffman merge tree for a symbol table
    Tree {
        /// Path to the symbol table file, or `-` for stdin
        input: String,
    },
    /// Write the complete analysis report to a file
    Export {
        /// Path to the symbol table file, or `-` for stdin
        input: String,
        /// Channel capacity in bits per symbol
        #[arg(short = 'r', long)]
        channel_rate: Option<f64>,
        /// Target file for the report
        #[arg(short, long)]
        target: PathBuf,
    },
    /// Generate shell completion scripts
    #[command(about = "Generate completion scripts for your shell")]
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up colored output based on flags
    if cli.no_color || cli.output != OutputFormat::Text {
        colored::control::set_override(false);
    }

    // Configure logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let cfg = config::load_config(cli.config.as_ref())?;

    // Config may override the default output format when the flag is absent
    let output = if cli.output == OutputFormat::Text {
        match cfg.default_output.as_deref() {
            Some("json") => OutputFormat::Json,
            Some("csv") => OutputFormat::Csv,
            _ => cli.output,
        }
    } else {
        cli.output
    };

    let global_opts = GlobalOptions {
        output,
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    GLOBAL_OPTS
        .set(global_opts)
        .expect("Failed to set global options");

    // Execute command
    match cli.command {
        Commands::Analyze {
            input,
            channel_rate,
        } => {
            let rate = resolve_channel_rate(channel_rate, &cfg)?;
            commands::analyze::analyze(&input, rate)?;
        }
        Commands::Tree { input } => {
            commands::tree::tree(&input)?;
        }
        Commands::Export {
            input,
            channel_rate,
            target,
        } => {
            let rate = resolve_channel_rate(channel_rate, &cfg)?;
            commands::export::export(&input, rate, &target)?;
        }
        Commands::Completion { shell } => {
            // Generate completion script for the specified shell
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}

/// The channel rate comes from the flag or the config file; a missing rate
/// is an error, matching the validator's treatment of the parameter.
fn resolve_channel_rate(flag: Option<f64>, cfg: &config::Config) -> Result<f64> {
    flag.or(cfg.default_channel_rate).ok_or_else(|| {
        anyhow::anyhow!("missing channel rate: pass --channel-rate or set default_channel_rate in the config file")
    })
}
