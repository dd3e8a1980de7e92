use bundle_stats_diff::cmd;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process;

/// Webpack bundle stats comparison for CI
///
/// bundle-stats-diff compares two webpack build-stats manifests and
/// publishes a per-asset markdown size report for pull requests.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as the CI action (inputs from INPUT_* environment variables)
    Run,

    /// Compare two stats manifests locally
    Diff {
        /// Base build stats manifest
        base: String,

        /// PR build stats manifest
        pr: String,

        /// Exclude assets whose name matches this regex
        #[arg(short, long)]
        exclude: Option<String>,

        /// Output the categorized diff as JSON
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

    let result = match &cli.command {
        Some(Commands::Run) => cmd::cmd_run(),
        Some(Commands::Diff {
            base,
            pr,
            exclude,
            json,
        }) => cmd::cmd_diff(base, pr, exclude.as_deref(), *json),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("bundle-stats-diff v{}", env!("CARGO_PKG_VERSION"));
            println!("Webpack bundle stats comparison for CI\n");
            println!("Usage: bundle-stats-diff <COMMAND>\n");
            println!("Commands:");
            println!("  run          Run as the CI action");
            println!("  diff         Compare two stats manifests locally");
            println!("  completions  Generate shell completions");
            println!("\nRun 'bundle-stats-diff <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use bundle_stats_diff::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
