//! Completions command implementation
//!
//! Handles the `depsize completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// depsize completions bash > /etc/bash_completion.d/depsize
///
/// # Zsh
/// depsize completions zsh > ~/.zfunc/_depsize
/// ```
pub fn cmd_completions(shell: Shell) {
    // We need to re-create the command structure here since Cli is in main.rs
    // This uses clap's derive API to generate completions
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("depsize")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dependency directory disk-usage reporter")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("report").about("Generate the disk-usage report"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "depsize".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
