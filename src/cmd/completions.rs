//! Completions command implementation
//!
//! Handles the `bundle-stats-diff completions` command which generates
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
/// bundle-stats-diff completions bash > /etc/bash_completion.d/bundle-stats-diff
///
/// # Zsh
/// bundle-stats-diff completions zsh > ~/.zfunc/_bundle-stats-diff
/// ```
pub fn cmd_completions(shell: Shell) {
    // Re-create the command structure here since Cli lives in main.rs
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("bundle-stats-diff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Webpack bundle stats comparison for CI")
        .subcommand(Command::new("run").about("Run as the CI action"))
        .subcommand(
            Command::new("diff")
                .about("Compare two stats manifests locally")
                .arg(Arg::new("base").required(true))
                .arg(Arg::new("pr").required(true))
                .arg(Arg::new("exclude").short('e').long("exclude"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "bundle-stats-diff".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
