use clap::{Parser, Subcommand};
use clap_complete::Shell;
use depsize::cmd;
use std::process;

/// Dependency directory disk-usage reporter
///
/// depsize measures where a JavaScript project's disk space goes, ranks the
/// heaviest installed packages, and writes a Markdown report with a bounded
/// size-trend history.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the disk-usage report (same as running with no arguments)
    Report {
        /// Project root to audit (defaults to the current directory)
        #[arg(short, long)]
        project_root: Option<String>,

        /// Output report statistics as JSON instead of the console summary
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Report { project_root, json }) => {
            cmd::cmd_report(project_root.as_deref(), *json)
        }
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        // No subcommand: generate the report in the current directory
        None => cmd::cmd_report(None, false),
    };

    if let Err(e) = result {
        use depsize::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
