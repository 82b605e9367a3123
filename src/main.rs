use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nightshift::cli::OutputFormat;
use nightshift::cli::commands::{self, apply::ApplyOptions, validate::ValidateOptions};
use nightshift::transform::ConflictResolution;
use nightshift::types::IssueSeverity;

#[derive(Parser)]
#[command(name = "nightshift")]
#[command(
    version,
    about = "Adds dark-mode variants to Tailwind class strings, with brand-aware theme presets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize nightshift in a project
    Init {
        #[arg(help = "Project root (default: current directory)")]
        path: Option<PathBuf>,
        #[arg(long, short, help = "Re-run on an initialized project")]
        force: bool,
    },

    /// Scan a project for class strings and dark-mode setup
    Scan {
        #[arg(help = "Project root (default: current directory)")]
        path: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: OutputFormat,
    },

    /// Recommend a theme from brand colors and design archetype
    Recommend {
        #[arg(help = "Project root (default: current directory)")]
        path: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: OutputFormat,
    },

    /// Add dark variants to every class string in a project
    Apply {
        #[arg(help = "Project root (default: current directory)")]
        path: Option<PathBuf>,
        #[arg(long, short, help = "Theme preset id, or 'auto' for the recommendation")]
        theme: Option<String>,
        #[arg(long = "dry-run", help = "Compute changes without writing")]
        dry_run: bool,
        #[arg(long, help = "Back up files into .nightshift/backups before writing")]
        backup: bool,
        #[arg(long = "on-conflict", help = "Files changed on disk: continue, overwrite, cancel")]
        on_conflict: Option<ConflictResolution>,
        #[arg(long = "enable-dark-mode", help = "Enable class-based dark mode in the Tailwind setup")]
        enable_dark_mode: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: OutputFormat,
    },

    /// Validate theme presets
    Validate {
        #[arg(long, short, help = "Validate a single preset")]
        theme: Option<String>,
        #[arg(long, help = "Report output path")]
        report: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: OutputFormat,
        #[arg(long, help = "Minimum severity to print: error, warning, info")]
        severity: Option<IssueSeverity>,
    },

    /// List theme presets
    Themes {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: OutputFormat,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text (toml), json"
        )]
        format: OutputFormat,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing global config")]
        force: bool,
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
        eprintln!("\x1b[31mnightshift encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!("\n\x1b[33mNo files are written after a panic; rerun with --dry-run to inspect.\x1b[0m");
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
            eprintln!("\x1b[31mError:\x1b[0m {:#}", e);
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
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Init { path, force } => {
            commands::init::run(path, force)?;
        }
        Commands::Scan { path, format } => {
            commands::scan::run(path, format)?;
        }
        Commands::Recommend { path, format } => {
            commands::recommend::run(path, format)?;
        }
        Commands::Apply {
            path,
            theme,
            dry_run,
            backup,
            on_conflict,
            enable_dark_mode,
            format,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::apply::run(ApplyOptions {
                path,
                theme,
                dry_run,
                backup: backup.then_some(true),
                on_conflict,
                enable_dark_mode,
                format,
                quiet: cli.quiet,
            }))?;
        }
        Commands::Validate {
            theme,
            report,
            format,
            severity,
        } => {
            commands::validate::run(ValidateOptions {
                theme,
                report,
                format,
                severity,
            })?;
        }
        Commands::Themes { format } => {
            commands::themes::run(format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { global, format } => {
                commands::config::show(global, format)?;
            }
            ConfigAction::Path => {
                commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    commands::config::init_global(force)?;
                } else {
                    commands::config::init_project()?;
                }
            }
        },
    }

    Ok(())
}
