use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goscope::cli::commands;
use goscope::config::ColorMode;

#[derive(Parser)]
#[command(name = "goscope")]
#[command(
    version,
    about = "Structural analysis of Go source trees: types, methods and import graphs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[arg(long, short, global = true, help = "Only log errors")]
    quiet: bool,

    #[arg(long, global = true, help = "Color output: auto, always, never")]
    color: Option<ColorMode>,
}

#[derive(Subcommand)]
enum Commands {
    /// DOT graph of the structs declared in one file
    Structs {
        #[arg(help = "Go source file")]
        file: PathBuf,
    },

    /// DOT graph of structs clustered by package
    Packages {
        #[arg(default_value = ".", help = "Module root directory")]
        dir: PathBuf,
    },

    /// DOT graph of package imports
    Imports {
        #[arg(default_value = ".", help = "Module root directory")]
        dir: PathBuf,
    },

    /// Import frequency table
    ImportsTable {
        #[arg(default_value = ".", help = "Module root directory")]
        dir: PathBuf,
        #[arg(short = 'n', long, help = "Leave out standard-library imports")]
        nostdlib: bool,
        #[arg(
            short = 's',
            long,
            default_value = "",
            help = "Only packages whose module path contains one of these (comma-separated)"
        )]
        select: String,
    },

    /// List structs with their fields and methods
    Types {
        #[arg(default_value = ".", help = "Module root directory")]
        dir: PathBuf,
        #[arg(
            short = 'e',
            long,
            default_value = "",
            help = "Skip packages whose module path contains one of these"
        )]
        exclude: String,
        #[arg(
            short = 'E',
            long = "select-exact",
            default_value = "",
            help = "Only these packages (full or module-relative path)"
        )]
        select_exact: String,
        #[arg(
            short = 's',
            long,
            default_value = "",
            help = "Only packages whose module path contains one of these"
        )]
        select: String,
        #[arg(long, help = "Dump the model as JSON")]
        json: bool,
    },

    /// List program entrypoints
    Entrypoints {
        #[arg(default_value = ".", help = "Module root directory")]
        dir: PathBuf,
    },

    /// Totals for the tree, test packages included
    Stats {
        #[arg(default_value = ".", help = "Module root directory")]
        dir: PathBuf,
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current settings (merged from all sources)
    Show {
        #[arg(default_value = ".", help = "Project directory")]
        dir: PathBuf,
        #[arg(long, help = "Output as JSON instead of TOML")]
        json: bool,
    },
    /// Show configuration file paths
    Path {
        #[arg(default_value = ".", help = "Project directory")]
        dir: PathBuf,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mgoscope hit an internal error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }

        eprintln!("\n\x1b[33mThe source tree was not fully analyzed; no output was produced.\x1b[0m");
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    // stdout carries report output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let color = cli.color;

    match cli.command {
        Commands::Structs { file } => {
            commands::structs::run(&file)?;
        }
        Commands::Packages { dir } => {
            commands::packages::run(&dir, color)?;
        }
        Commands::Imports { dir } => {
            commands::imports::run(&dir, color)?;
        }
        Commands::ImportsTable {
            dir,
            nostdlib,
            select,
        } => {
            commands::imports_table::run(&dir, nostdlib, &select, color)?;
        }
        Commands::Types {
            dir,
            exclude,
            select_exact,
            select,
            json,
        } => {
            let filters = commands::types::TypeFilters {
                exclude,
                select_exact,
                select,
            };
            commands::types::run(&dir, &filters, json, color)?;
        }
        Commands::Entrypoints { dir } => {
            commands::entrypoints::run(&dir, color)?;
        }
        Commands::Stats { dir, json } => {
            commands::stats::run(&dir, json, color)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { dir, json } => {
                commands::config::show(&dir, json)?;
            }
            ConfigAction::Path { dir } => {
                commands::config::path(&dir)?;
            }
        },
    }

    Ok(())
}
